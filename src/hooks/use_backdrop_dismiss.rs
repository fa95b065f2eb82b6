use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;
use yew::prelude::*;

/// Cierra un modal cuando el click cae sobre su fondo. El listener global se
/// registra UNA sola vez al montar el componente y se da de baja en el
/// cleanup del efecto.
#[hook]
pub fn use_backdrop_dismiss(backdrop_id: &'static str, on_dismiss: Callback<()>) {
    use_effect_with((), move |_| {
        let closure =
            Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |e: web_sys::MouseEvent| {
                let clicked_backdrop = e
                    .target()
                    .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
                    .map(|element| element.id() == backdrop_id)
                    .unwrap_or(false);
                if clicked_backdrop {
                    on_dismiss.emit(());
                }
            });

        if let Some(win) = window() {
            let _ = win.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        }

        move || {
            if let Some(win) = window() {
                let _ =
                    win.remove_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            }
        }
    });
}
