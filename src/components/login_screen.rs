use yew::prelude::*;

/// Pantalla destino tras crear el perfil. El login real (el flujo que
/// escribe los tokens en localStorage) vive fuera de esta app.
#[function_component(LoginScreen)]
pub fn login_screen() -> Html {
    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-logo">{"🐾"}</div>
                <h1>{"Mi Mascota"}</h1>
                <p>{"Perfil creado. Inicia sesión para continuar."}</p>
            </div>
        </div>
    }
}
