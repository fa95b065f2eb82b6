use serde::{Deserialize, Serialize};

/// Sexo de la mascota, con el literal que espera el backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "MALE")]
    Male,
    #[serde(rename = "FEMALE")]
    Female,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
        }
    }
}

/// Especie de la mascota, con el literal que espera el backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Species {
    #[serde(rename = "CAT")]
    Cat,
    #[serde(rename = "DOG")]
    Dog,
}

impl Species {
    pub fn as_str(self) -> &'static str {
        match self {
            Species::Cat => "CAT",
            Species::Dog => "DOG",
        }
    }

    /// Alterna CAT ↔ DOG sin tocar nada más.
    pub fn toggled(self) -> Self {
        match self {
            Species::Cat => Species::Dog,
            Species::Dog => Species::Cat,
        }
    }
}

/// Borrador del perfil en edición. Solo los campos de texto del formulario;
/// la imagen y su URL de preview viven en el estado del hook porque la
/// preview nunca se envía al backend.
#[derive(Debug, Clone, PartialEq)]
pub struct PetProfileDraft {
    pub pet_name: String,
    pub gender: Gender,
    pub species: Species,
    pub age: u32,
    pub address_code: Option<u32>,
}

impl Default for PetProfileDraft {
    fn default() -> Self {
        Self {
            pet_name: "test".to_string(),
            gender: Gender::Male,
            species: Species::Cat,
            age: 0,
            address_code: None,
        }
    }
}

/// Respuesta de GET /pets/{id}. Tolerante a campos ausentes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetInfo {
    #[serde(default)]
    pub id: Option<i64>,
    pub pet_name: String,
    pub age: u32,
    pub gender: Gender,
    pub species: Species,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub code: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_species_is_involution() {
        assert_eq!(Species::Cat.toggled(), Species::Dog);
        assert_eq!(Species::Cat.toggled().toggled(), Species::Cat);
        assert_eq!(Species::Dog.toggled().toggled(), Species::Dog);
    }

    #[test]
    fn toggle_species_leaves_rest_of_draft_untouched() {
        let draft = PetProfileDraft {
            age: 7,
            address_code: Some(11650),
            ..Default::default()
        };
        let mut toggled = draft.clone();
        toggled.species = toggled.species.toggled();

        assert_eq!(toggled.species, Species::Dog);
        assert_eq!(toggled.pet_name, draft.pet_name);
        assert_eq!(toggled.gender, draft.gender);
        assert_eq!(toggled.age, draft.age);
        assert_eq!(toggled.address_code, draft.address_code);
    }

    #[test]
    fn draft_defaults_match_form_initial_state() {
        let draft = PetProfileDraft::default();
        assert_eq!(draft.pet_name, "test");
        assert_eq!(draft.gender, Gender::Male);
        assert_eq!(draft.species, Species::Cat);
        assert_eq!(draft.age, 0);
        assert_eq!(draft.address_code, None);
    }

    #[test]
    fn enums_serialize_to_backend_literals() {
        assert_eq!(serde_json::to_string(&Gender::Female).unwrap(), "\"FEMALE\"");
        assert_eq!(serde_json::to_string(&Species::Dog).unwrap(), "\"DOG\"");
    }

    #[test]
    fn pet_info_deserializes_from_camel_case() {
        let json = r#"{
            "id": 3,
            "petName": "Mochi",
            "age": 2,
            "gender": "FEMALE",
            "species": "DOG",
            "profileImage": "https://cdn.example.com/mochi.png"
        }"#;
        let info: PetInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.pet_name, "Mochi");
        assert_eq!(info.gender, Gender::Female);
        assert_eq!(info.species, Species::Dog);
        assert_eq!(info.code, None);
    }
}
