use gloo_net::http::{Request, RequestBuilder};
use serde::Serialize;
use web_sys::{File, FormData};

use crate::models::{PetInfo, PetProfileDraft, Session, Species};
use crate::utils::{BACKEND_URL, DEFAULT_ADDRESS_CODE};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LogoutRequest {
    access_token: String,
    refresh_token: String,
}

/// Validación previa al alta. El orden de los mensajes es fijo: primero la
/// edad, después los datos de acceso.
pub fn validate_signup(age: u32, login_id: &str, password: &str) -> Result<(), &'static str> {
    if age == 0 {
        return Err("La edad debe ser mayor que 0");
    }
    if login_id.is_empty() || password.is_empty() {
        return Err("Hay campos sin completar");
    }
    Ok(())
}

/// Campos de texto del multipart de alta, en el orden del wire.
/// El alta siempre registra species=CAT; la especie elegida en el toggle
/// recién se envía al actualizar desde Mi Página.
pub fn signup_fields(
    login_id: &str,
    password: &str,
    draft: &PetProfileDraft,
) -> Vec<(&'static str, String)> {
    vec![
        ("loginId", login_id.to_string()),
        ("password", password.to_string()),
        ("petName", draft.pet_name.clone()),
        ("age", draft.age.to_string()),
        ("species", Species::Cat.as_str().to_string()),
        ("gender", draft.gender.as_str().to_string()),
        (
            "code",
            draft.address_code.unwrap_or(DEFAULT_ADDRESS_CODE).to_string(),
        ),
    ]
}

/// Campos de texto del multipart de actualización. Acá sí viajan la especie
/// y el sexo reales del borrador.
pub fn update_fields(pet_name: &str, draft: &PetProfileDraft) -> Vec<(&'static str, String)> {
    vec![
        ("petName", pet_name.to_string()),
        ("age", draft.age.to_string()),
        ("gender", draft.gender.as_str().to_string()),
        ("species", draft.species.as_str().to_string()),
        (
            "code",
            draft.address_code.unwrap_or(DEFAULT_ADDRESS_CODE).to_string(),
        ),
    ]
}

// El Content-Type del multipart lo pone el browser (con su boundary);
// fijarlo a mano rompería el body.
fn multipart_body(fields: &[(&'static str, String)], image: &File) -> Result<FormData, String> {
    let form = FormData::new().map_err(|e| format!("FormData error: {:?}", e))?;
    for (name, value) in fields {
        form.append_with_str(name, value)
            .map_err(|e| format!("FormData error: {:?}", e))?;
    }
    form.append_with_blob("profileImage", image)
        .map_err(|e| format!("FormData error: {:?}", e))?;
    Ok(form)
}

fn with_auth_headers(builder: RequestBuilder, session: &Session) -> RequestBuilder {
    let mut builder = builder;
    if let Some(token) = session.access_token() {
        builder = builder.header("Authorization", token);
    }
    if let Some(refresh) = session.refresh_token() {
        builder = builder.header("Refresh", refresh);
    }
    builder
}

/// Alta de perfil: POST multipart a /pets/signup.
/// Las precondiciones (imagen presente, edad, datos de acceso) las aplica
/// el formulario antes de llamar acá; esta función solo habla HTTP.
pub async fn pet_signup(
    login_id: &str,
    password: &str,
    draft: &PetProfileDraft,
    image: &File,
) -> Result<(), String> {
    let url = format!("{}/pets/signup", BACKEND_URL);
    let form = multipart_body(&signup_fields(login_id, password, draft), image)?;

    let response = Request::post(&url)
        .body(form)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }
    Ok(())
}

/// Perfil de la mascota: GET /pets/{id} con los headers de sesión.
pub async fn fetch_pet_info(session: &Session) -> Result<PetInfo, String> {
    let pet_id = session.pet_id().ok_or("No hay petId en la sesión")?;
    let url = format!("{}/pets/{}", BACKEND_URL, pet_id);

    let response = with_auth_headers(Request::get(&url), session)
        .send()
        .await
        .map_err(|e| format!("Request error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<PetInfo>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Actualización de perfil: POST multipart a /patch/{petId}.
pub async fn pet_update(
    session: &Session,
    pet_name: &str,
    draft: &PetProfileDraft,
    image: &File,
) -> Result<(), String> {
    let pet_id = session.pet_id().ok_or("No hay petId en la sesión")?;
    let url = format!("{}/patch/{}", BACKEND_URL, pet_id);
    let form = multipart_body(&update_fields(pet_name, draft), image)?;

    let response = with_auth_headers(Request::post(&url), session)
        .body(form)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }
    Ok(())
}

/// Logout: POST /logout con ambos tokens en el body.
/// La sesión local se limpia SIEMPRE, falle o no el servidor.
pub async fn pet_logout(session: &Session) -> Result<(), String> {
    let url = format!("{}/logout", BACKEND_URL);
    let body = LogoutRequest {
        access_token: session.access_token().unwrap_or_default().to_string(),
        refresh_token: session.refresh_token().unwrap_or_default().to_string(),
    };

    let mut builder = Request::post(&url);
    if let Some(token) = session.access_token() {
        builder = builder.header("Authorization", token);
    }

    let result = match builder.json(&body) {
        Ok(request) => match request.send().await {
            Ok(response) if response.ok() => Ok(()),
            Ok(response) => Err(format!("HTTP error: {}", response.status())),
            Err(e) => Err(format!("Request error: {}", e)),
        },
        Err(e) => Err(format!("Request build error: {}", e)),
    };

    session.clear_storage();
    result
}

/// Baja de perfil: DELETE /pets/{id}. Los tokens locales se limpian tras el
/// intento en ambos desenlaces; petId se conserva.
pub async fn pet_delete(session: &Session) -> Result<(), String> {
    let result = match session.pet_id() {
        Some(pet_id) => {
            let url = format!("{}/pets/{}", BACKEND_URL, pet_id);
            match with_auth_headers(Request::delete(&url), session).send().await {
                Ok(response) if response.ok() => Ok(()),
                Ok(response) => Err(format!("HTTP error: {}", response.status())),
                Err(e) => Err(format!("Request error: {}", e)),
            }
        }
        None => Err("No hay petId en la sesión".to_string()),
    };

    session.clear_token_storage();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;

    fn draft() -> PetProfileDraft {
        PetProfileDraft {
            age: 5,
            ..Default::default()
        }
    }

    #[test]
    fn validation_blocks_zero_age() {
        assert_eq!(
            validate_signup(0, "u1", "p1"),
            Err("La edad debe ser mayor que 0")
        );
    }

    #[test]
    fn validation_blocks_empty_identity_fields_independently() {
        assert_eq!(validate_signup(5, "", "p1"), Err("Hay campos sin completar"));
        assert_eq!(validate_signup(5, "u1", ""), Err("Hay campos sin completar"));
    }

    #[test]
    fn validation_passes_complete_input() {
        assert_eq!(validate_signup(5, "u1", "p1"), Ok(()));
    }

    #[test]
    fn signup_carries_the_seven_text_fields() {
        let fields = signup_fields("u1", "p1", &draft());
        let names: Vec<&str> = fields.iter().map(|(n, _)| *n).collect();
        assert_eq!(
            names,
            ["loginId", "password", "petName", "age", "species", "gender", "code"]
        );
    }

    #[test]
    fn signup_pins_species_to_cat() {
        let mut d = draft();
        d.species = Species::Dog;
        let fields = signup_fields("u1", "p1", &d);
        let species = fields.iter().find(|(n, _)| *n == "species").unwrap();
        assert_eq!(species.1, "CAT");
    }

    #[test]
    fn signup_code_defaults_and_respects_selection() {
        let fields = signup_fields("u1", "p1", &draft());
        let code = fields.iter().find(|(n, _)| *n == "code").unwrap();
        assert_eq!(code.1, "11680");

        let mut d = draft();
        d.address_code = Some(11650);
        let fields = signup_fields("u1", "p1", &d);
        let code = fields.iter().find(|(n, _)| *n == "code").unwrap();
        assert_eq!(code.1, "11650");
    }

    #[test]
    fn update_carries_real_selections() {
        let d = PetProfileDraft {
            gender: Gender::Female,
            species: Species::Dog,
            age: 3,
            address_code: Some(11710),
            ..Default::default()
        };
        let fields = update_fields("Mochi", &d);
        let get = |name: &str| {
            fields
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, v)| v.as_str())
                .unwrap()
        };
        assert_eq!(fields.len(), 5);
        assert_eq!(get("petName"), "Mochi");
        assert_eq!(get("age"), "3");
        assert_eq!(get("gender"), "FEMALE");
        assert_eq!(get("species"), "DOG");
        assert_eq!(get("code"), "11710");
    }
}
