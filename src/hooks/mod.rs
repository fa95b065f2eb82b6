pub mod use_backdrop_dismiss;
pub mod use_pet_info;
pub mod use_profile_form;

pub use use_backdrop_dismiss::use_backdrop_dismiss;
pub use use_pet_info::{use_pet_info, PetInfoState};
pub use use_profile_form::{use_profile_form, ProfileFormState, UseProfileFormHandle};
