use yew::prelude::*;

use crate::models::Session;
use super::{LoginScreen, MyPage, ProfileForm};

/// Vistas de la app. Sin router: navegar es cambiar este estado.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Onboarding,
    Login,
    MyPage,
}

#[function_component(App)]
pub fn app() -> Html {
    // La sesión se carga UNA vez al arrancar y de ahí en más se pasa
    // explícitamente; el único punto de relectura es reload_session.
    let session = use_state(Session::load);
    let view = {
        let initial = if session.is_authenticated() {
            View::MyPage
        } else {
            View::Onboarding
        };
        use_state(move || initial)
    };

    let navigate = {
        let view = view.clone();
        Callback::from(move |target: View| view.set(target))
    };

    let reload_session = {
        let session = session.clone();
        Callback::from(move |_: ()| session.set(Session::load()))
    };

    match *view {
        View::Onboarding => html! { <ProfileForm on_navigate={navigate} /> },
        View::Login => html! { <LoginScreen /> },
        View::MyPage => html! {
            <MyPage
                session={(*session).clone()}
                on_navigate={navigate}
                on_session_reload={reload_session}
            />
        },
    }
}
