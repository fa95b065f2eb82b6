/// URL base del backend
/// Configurada en tiempo de compilación via BACKEND_URL (.env / entorno).
/// Por defecto queda vacía y las peticiones salen relativas al origen.
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "",
};

// Claves de localStorage. Las escribe el flujo de login (fuera de esta app);
// aquí solo se leen al arrancar y se limpian en logout / baja.
pub const STORAGE_KEY_ACCESS_TOKEN: &str = "Authorization";
pub const STORAGE_KEY_REFRESH_TOKEN: &str = "Refresh";
pub const STORAGE_KEY_PET_ID: &str = "petId";

/// Código de distrito que envía el alta cuando el usuario no eligió ninguno
/// (Gangnam-gu, el valor histórico del backend).
pub const DEFAULT_ADDRESS_CODE: u32 = 11680;
