use web_sys::{window, HtmlInputElement};
use yew::prelude::*;

use crate::components::app::View;
use crate::components::AddressModal;
use crate::hooks::{use_backdrop_dismiss, use_pet_info, use_profile_form};
use crate::models::{Gender, Session, Species};
use crate::services::{pet_delete, pet_logout, pet_update};
use crate::utils::code_to_address;

#[derive(Properties, PartialEq)]
pub struct MyPageProps {
    pub session: Session,
    pub on_navigate: Callback<View>,
    pub on_session_reload: Callback<()>,
}

/// Mi Página: muestra el perfil y aloja actualización, logout y baja.
#[function_component(MyPage)]
pub fn my_page(props: &MyPageProps) -> Html {
    let info = use_pet_info(&props.session);
    let form = use_profile_form();
    let name_ref = use_node_ref();

    use_backdrop_dismiss("address-backdrop", form.close_address_modal.clone());

    let on_logout = {
        let session = props.session.clone();
        let on_navigate = props.on_navigate.clone();
        let on_session_reload = props.on_session_reload.clone();
        Callback::from(move |_: MouseEvent| {
            let session = session.clone();
            let on_navigate = on_navigate.clone();
            let on_session_reload = on_session_reload.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = pet_logout(&session).await {
                    log::error!("❌ Error en logout: {}", e);
                }
                log::info!("👋 Sesión cerrada");
                on_session_reload.emit(());
                on_navigate.emit(View::Login);
            });
        })
    };

    let on_delete = {
        let session = props.session.clone();
        let on_navigate = props.on_navigate.clone();
        let on_session_reload = props.on_session_reload.clone();
        Callback::from(move |_: MouseEvent| {
            let session = session.clone();
            let on_navigate = on_navigate.clone();
            let on_session_reload = on_session_reload.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match pet_delete(&session).await {
                    Ok(()) => log::info!("🗑️ Perfil eliminado"),
                    Err(e) => log::error!("❌ Error eliminando el perfil: {}", e),
                }
                on_session_reload.emit(());
                on_navigate.emit(View::Login);
            });
        })
    };

    let on_age_input = {
        let set_age = form.set_age.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set_age.emit(input.value().parse().unwrap_or(0));
        })
    };

    let on_file_change = {
        let set_image = form.set_image.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                set_image.emit(file);
            }
        })
    };

    let on_male = {
        let set_gender = form.set_gender.clone();
        Callback::from(move |_: MouseEvent| set_gender.emit(Gender::Male))
    };
    let on_female = {
        let set_gender = form.set_gender.clone();
        Callback::from(move |_: MouseEvent| set_gender.emit(Gender::Female))
    };
    let on_toggle_species = {
        let toggle = form.toggle_species.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };
    let on_open_address = {
        let open = form.open_address_modal.clone();
        Callback::from(move |_: MouseEvent| open.emit(()))
    };

    let on_update = {
        let state = form.state.clone();
        let name_ref = name_ref.clone();
        let session = props.session.clone();
        let on_navigate = props.on_navigate.clone();
        let info = info.clone();

        Callback::from(move |_: MouseEvent| {
            let current = (*state).clone();

            // Sin foto nueva no hay actualización
            let Some(image) = current.image else {
                return;
            };

            let fallback_name = info
                .response_data
                .as_ref()
                .map(|pet| pet.pet_name.clone())
                .unwrap_or_else(|| current.draft.pet_name.clone());
            let pet_name = name_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .filter(|value| !value.is_empty())
                .unwrap_or(fallback_name);

            let draft = current.draft;
            let session = session.clone();
            let on_navigate = on_navigate.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match pet_update(&session, &pet_name, &draft, &image).await {
                    Ok(()) => {
                        log::info!("✅ Perfil actualizado: {}", pet_name);
                        on_navigate.emit(View::MyPage);
                    }
                    Err(e) => {
                        log::error!("❌ Error actualizando el perfil: {}", e);
                        if let Some(win) = window() {
                            let _ = win.alert_with_message(&format!("Error: {}", e));
                        }
                    }
                }
            });
        })
    };

    let state = (*form.state).clone();
    let data = (*info).clone();

    let address_text = match state.draft.address_code {
        Some(code) => code_to_address(code).to_string(),
        None => "¿Dónde vives?".to_string(),
    };

    let profile = if data.loading {
        html! { <p class="loading">{"Cargando perfil..."}</p> }
    } else if let Some(error) = &data.error {
        html! { <p class="error">{format!("No se pudo cargar el perfil: {}", error)}</p> }
    } else if let Some(pet) = &data.response_data {
        html! {
            <div class="profile-card">
                {
                    if let Some(url) = &pet.profile_image {
                        html! { <img class="profile-photo" src={url.clone()} alt={pet.pet_name.clone()} /> }
                    } else if pet.species == Species::Cat {
                        html! { <span class="avatar-placeholder">{"🐱"}</span> }
                    } else {
                        html! { <span class="avatar-placeholder">{"🐶"}</span> }
                    }
                }
                <h2>{&pet.pet_name}</h2>
                <p>{format!("{} años · {} · {}", pet.age, pet.gender.as_str(), pet.species.as_str())}</p>
                {
                    if let Some(code) = pet.code {
                        html! { <p class="profile-address">{code_to_address(code)}</p> }
                    } else {
                        html! {}
                    }
                }
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <div class="my-page">
            <header class="my-page-header">
                <h1>{"Mi Página"}</h1>
                <div class="header-actions">
                    <button class="btn-logout" onclick={on_logout}>{"Cerrar sesión"}</button>
                    <button class="btn-delete" onclick={on_delete}>{"Eliminar perfil"}</button>
                </div>
            </header>

            {profile}

            <section class="edit-profile">
                <h2>{"Editar perfil"}</h2>

                <div class="form-group">
                    <label for="edit-name">{"Nombre"}</label>
                    <input type="text" id="edit-name" placeholder="Nombre" ref={name_ref} />
                </div>

                <div class="form-group">
                    <label for="edit-age">{"Edad"}</label>
                    <input type="text" id="edit-age" placeholder="Edad" oninput={on_age_input} />
                </div>

                <div class="form-group address-group">
                    <input type="text" readonly=true value={address_text} />
                    <button class="btn-address" onclick={on_open_address}>{"🔍"}</button>
                </div>

                <div class="gender-picker">
                    <span>{"Sexo"}</span>
                    <button
                        class={if state.draft.gender == Gender::Male { "gender-btn active" } else { "gender-btn" }}
                        onclick={on_male}
                    >{"♂"}</button>
                    <button
                        class={if state.draft.gender == Gender::Female { "gender-btn active" } else { "gender-btn" }}
                        onclick={on_female}
                    >{"♀"}</button>
                </div>

                <div class="species-toggle" onclick={on_toggle_species}>
                    <div class={if state.draft.species == Species::Cat { "toggle-circle cat" } else { "toggle-circle dog" }}></div>
                    <span class="toggle-cat">{"🐱"}</span>
                    <span class="toggle-dog">{"🐶"}</span>
                </div>

                <label class="input-file-button" for="edit-image">{"Elegir foto"}</label>
                <input
                    type="file"
                    id="edit-image"
                    accept="image/*"
                    onchange={on_file_change}
                    style="display: none;"
                />

                <button class="btn-submit" onclick={on_update}>{"Guardar"}</button>
            </section>

            if state.show_address_modal {
                <AddressModal
                    selected={state.draft.address_code}
                    on_select={form.select_address.clone()}
                    on_close={form.close_address_modal.clone()}
                />
            }
        </div>
    }
}
