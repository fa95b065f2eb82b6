use yew::prelude::*;

use crate::utils::ADDRESSES;

#[derive(Properties, PartialEq)]
pub struct AddressModalProps {
    pub selected: Option<u32>,
    pub on_select: Callback<u32>,
    pub on_close: Callback<()>,
}

/// Picker de distrito. El fondo lleva id "address-backdrop": el listener
/// global de dismissal lo reconoce por ese id.
#[function_component(AddressModal)]
pub fn address_modal(props: &AddressModalProps) -> Html {
    let close_click = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <div id="address-backdrop" class="modal-backdrop">
            <div class="address-modal">
                <div class="modal-header">
                    <h2>{"¿Dónde vives?"}</h2>
                    <button class="btn-close" onclick={close_click}>{"✕"}</button>
                </div>
                <ul class="address-list">
                    {
                        for ADDRESSES.iter().map(|(code, name)| {
                            let code = *code;
                            let on_select = props.on_select.clone();
                            let onclick = Callback::from(move |_: MouseEvent| on_select.emit(code));
                            let class = if props.selected == Some(code) {
                                "address-item selected"
                            } else {
                                "address-item"
                            };
                            html! {
                                <li key={code.to_string()} {class} {onclick}>{ *name }</li>
                            }
                        })
                    }
                </ul>
            </div>
        </div>
    }
}
