use yew::prelude::*;

use crate::models::{PetInfo, Session};
use crate::services::fetch_pet_info;

/// Estado observable del fetch de perfil.
#[derive(Clone, PartialEq)]
pub struct PetInfoState {
    pub response_data: Option<PetInfo>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Pide el perfil UNA sola vez por montaje, sin reintentos ni polling.
/// `loading` pasa a true alrededor de la llamada; `error` solo se setea si
/// la petición falla.
#[hook]
pub fn use_pet_info(session: &Session) -> UseStateHandle<PetInfoState> {
    let state = use_state(|| PetInfoState {
        response_data: None,
        loading: false,
        error: None,
    });

    {
        let state = state.clone();
        let session = session.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                state.set(PetInfoState {
                    response_data: None,
                    loading: true,
                    error: None,
                });

                match fetch_pet_info(&session).await {
                    Ok(info) => {
                        log::info!("✅ Perfil recibido: {}", info.pet_name);
                        state.set(PetInfoState {
                            response_data: Some(info),
                            loading: false,
                            error: None,
                        });
                    }
                    Err(e) => {
                        log::error!("❌ Error cargando el perfil: {}", e);
                        state.set(PetInfoState {
                            response_data: None,
                            loading: false,
                            error: Some(e),
                        });
                    }
                }
            });
            || ()
        });
    }

    state
}
