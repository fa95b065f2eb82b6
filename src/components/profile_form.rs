use web_sys::{window, HtmlInputElement};
use yew::prelude::*;

use crate::components::app::View;
use crate::components::AddressModal;
use crate::hooks::{use_backdrop_dismiss, use_profile_form};
use crate::models::{Gender, Species};
use crate::services::{pet_signup, validate_signup};
use crate::utils::code_to_address;

#[derive(Properties, PartialEq)]
pub struct ProfileFormProps {
    pub on_navigate: Callback<View>,
}

/// Formulario de onboarding: datos de acceso + borrador del perfil + foto.
#[function_component(ProfileForm)]
pub fn profile_form(props: &ProfileFormProps) -> Html {
    let form = use_profile_form();
    let login_id_ref = use_node_ref();
    let password_ref = use_node_ref();

    use_backdrop_dismiss("address-backdrop", form.close_address_modal.clone());

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

    let on_submit = {
        let state = form.state.clone();
        let login_id_ref = login_id_ref.clone();
        let password_ref = password_ref.clone();
        let on_navigate = props.on_navigate.clone();

        Callback::from(move |_: MouseEvent| {
            let current = (*state).clone();

            // Sin foto, el alta ni siquiera se intenta
            let Some(image) = current.image else {
                return;
            };

            let (Some(login_input), Some(password_input)) = (
                login_id_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };

            let login_id = login_input.value();
            let password = password_input.value();

            if let Err(msg) = validate_signup(current.draft.age, &login_id, &password) {
                if let Some(win) = window() {
                    let _ = win.alert_with_message(msg);
                }
                return;
            }

            let draft = current.draft;
            let on_navigate = on_navigate.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match pet_signup(&login_id, &password, &draft, &image).await {
                    Ok(()) => {
                        log::info!("✅ Perfil creado: {}", draft.pet_name);
                        on_navigate.emit(View::Login);
                    }
                    Err(e) => {
                        log::error!("❌ Error creando el perfil: {}", e);
                        if let Some(win) = window() {
                            let _ = win.alert_with_message(&format!("Error: {}", e));
                        }
                    }
                }
            });
        })
    };

    let state = (*form.state).clone();

    let address_text = match state.draft.address_code {
        Some(code) => code_to_address(code).to_string(),
        None => "¿Dónde vives?".to_string(),
    };

    let avatar = if let Some(url) = &state.preview_url {
        html! { <img class="avatar-preview" src={url.clone()} alt="preview" /> }
    } else if state.draft.species == Species::Cat {
        html! { <span class="avatar-placeholder">{"🐱"}</span> }
    } else {
        html! { <span class="avatar-placeholder">{"🐶"}</span> }
    };

    html! {
        <div class="onboarding-screen">
            <div class="onboarding-card">
                <div class="avatar">{avatar}</div>
                <label class="input-file-button" for="profile-image">{"＋"}</label>
                <input
                    type="file"
                    id="profile-image"
                    accept="image/*"
                    onchange={on_file_change}
                    style="display: none;"
                />

                <div class="form-group">
                    <label for="login-id">{"Usuario"}</label>
                    <input type="text" id="login-id" placeholder="Tu usuario" ref={login_id_ref} />
                </div>

                <div class="form-group">
                    <label for="password">{"Contraseña"}</label>
                    <input
                        type="password"
                        id="password"
                        placeholder="Tu contraseña"
                        ref={password_ref}
                    />
                </div>

                <div class="form-group">
                    <label for="age">{"Edad"}</label>
                    <input type="text" id="age" placeholder="Edad" oninput={on_age_input} />
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

                <button class="btn-submit" onclick={on_submit}>{"Empezar"}</button>
            </div>

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
