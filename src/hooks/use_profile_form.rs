use web_sys::{File, Url};
use yew::prelude::*;

use crate::models::{Gender, PetProfileDraft};

/// Estado completo del formulario de perfil. El borrador viaja al backend;
/// la imagen y su URL de preview son transitorias y la preview nunca se
/// envía.
#[derive(Clone, PartialEq, Default)]
pub struct ProfileFormState {
    pub draft: PetProfileDraft,
    pub image: Option<File>,
    pub preview_url: Option<String>,
    pub show_address_modal: bool,
}

pub struct UseProfileFormHandle {
    pub state: UseStateHandle<ProfileFormState>,
    pub set_age: Callback<u32>,
    pub set_gender: Callback<Gender>,
    pub toggle_species: Callback<()>,
    pub set_image: Callback<File>,
    pub open_address_modal: Callback<()>,
    pub close_address_modal: Callback<()>,
    pub select_address: Callback<u32>,
}

/// Controlador de estado del formulario. Cada operación reemplaza el estado
/// completo; ninguna tiene condiciones de error.
#[hook]
pub fn use_profile_form() -> UseProfileFormHandle {
    let state = use_state(ProfileFormState::default);

    let set_age = {
        let state = state.clone();
        Callback::from(move |age: u32| {
            let mut current_state = (*state).clone();
            current_state.draft.age = age;
            state.set(current_state);
        })
    };

    let set_gender = {
        let state = state.clone();
        Callback::from(move |gender: Gender| {
            let mut current_state = (*state).clone();
            current_state.draft.gender = gender;
            state.set(current_state);
        })
    };

    // Alterna CAT ↔ DOG, el resto del borrador queda igual
    let toggle_species = {
        let state = state.clone();
        Callback::from(move |_| {
            let mut current_state = (*state).clone();
            current_state.draft.species = current_state.draft.species.toggled();
            state.set(current_state);
        })
    };

    // Guarda el archivo y deriva la URL transitoria para la preview
    let set_image = {
        let state = state.clone();
        Callback::from(move |file: File| {
            let mut current_state = (*state).clone();
            match Url::create_object_url_with_blob(&file) {
                Ok(url) => current_state.preview_url = Some(url),
                Err(e) => log::error!("❌ No se pudo crear la URL de preview: {:?}", e),
            }
            current_state.image = Some(file);
            state.set(current_state);
        })
    };

    let open_address_modal = {
        let state = state.clone();
        Callback::from(move |_| {
            let mut current_state = (*state).clone();
            current_state.show_address_modal = true;
            state.set(current_state);
        })
    };

    let close_address_modal = {
        let state = state.clone();
        Callback::from(move |_| {
            let mut current_state = (*state).clone();
            current_state.show_address_modal = false;
            state.set(current_state);
        })
    };

    // Elegir distrito también cierra el picker
    let select_address = {
        let state = state.clone();
        Callback::from(move |code: u32| {
            let mut current_state = (*state).clone();
            current_state.draft.address_code = Some(code);
            current_state.show_address_modal = false;
            state.set(current_state);
        })
    };

    UseProfileFormHandle {
        state,
        set_age,
        set_gender,
        toggle_species,
        set_image,
        open_address_modal,
        close_address_modal,
        select_address,
    }
}
