use crate::utils::{
    load_from_storage, remove_from_storage, STORAGE_KEY_ACCESS_TOKEN, STORAGE_KEY_PET_ID,
    STORAGE_KEY_REFRESH_TOKEN,
};

/// Credenciales de sesión persistidas por el flujo de login (externo a esta
/// app). Se cargan UNA vez al arrancar y se pasan explícitamente a cada
/// función de API; nada vuelve a leer localStorage por su cuenta.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub pet_id: Option<String>,
}

impl Session {
    /// Carga las tres claves desde localStorage. Es también el accessor de
    /// refresco: tras logout o baja, `App` vuelve a llamar aquí.
    pub fn load() -> Self {
        Self {
            access_token: load_from_storage(STORAGE_KEY_ACCESS_TOKEN),
            refresh_token: load_from_storage(STORAGE_KEY_REFRESH_TOKEN),
            pet_id: load_from_storage(STORAGE_KEY_PET_ID),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some() && self.pet_id.is_some()
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }

    pub fn pet_id(&self) -> Option<&str> {
        self.pet_id.as_deref()
    }

    /// Limpia las tres claves persistidas (logout).
    pub fn clear_storage(&self) {
        let _ = remove_from_storage(STORAGE_KEY_ACCESS_TOKEN);
        let _ = remove_from_storage(STORAGE_KEY_REFRESH_TOKEN);
        let _ = remove_from_storage(STORAGE_KEY_PET_ID);
    }

    /// Limpia solo los tokens y conserva petId (baja de perfil).
    pub fn clear_token_storage(&self) {
        let _ = remove_from_storage(STORAGE_KEY_ACCESS_TOKEN);
        let _ = remove_from_storage(STORAGE_KEY_REFRESH_TOKEN);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(access: Option<&str>, refresh: Option<&str>, pet: Option<&str>) -> Session {
        Session {
            access_token: access.map(String::from),
            refresh_token: refresh.map(String::from),
            pet_id: pet.map(String::from),
        }
    }

    #[test]
    fn authenticated_needs_token_and_pet_id() {
        assert!(session(Some("jwt"), Some("r"), Some("42")).is_authenticated());
        assert!(session(Some("jwt"), None, Some("42")).is_authenticated());
        assert!(!session(None, Some("r"), Some("42")).is_authenticated());
        assert!(!session(Some("jwt"), Some("r"), None).is_authenticated());
        assert!(!Session::default().is_authenticated());
    }

    #[test]
    fn accessors_expose_borrowed_values() {
        let s = session(Some("jwt"), Some("r"), Some("42"));
        assert_eq!(s.access_token(), Some("jwt"));
        assert_eq!(s.refresh_token(), Some("r"));
        assert_eq!(s.pet_id(), Some("42"));
    }
}
