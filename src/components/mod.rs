pub mod address_modal;
pub mod app;
pub mod login_screen;
pub mod my_page;
pub mod profile_form;

pub use address_modal::AddressModal;
pub use app::{App, View};
pub use login_screen::LoginScreen;
pub use my_page::MyPage;
pub use profile_form::ProfileForm;
