// Catálogo estático de distritos (código legal → nombre). Es el dominio de
// direcciones que maneja el backend; el picker y el campo de solo lectura
// trabajan sobre esta tabla.

pub const ADDRESSES: &[(u32, &str)] = &[
    (11110, "Jongno-gu"),
    (11140, "Jung-gu"),
    (11170, "Yongsan-gu"),
    (11200, "Seongdong-gu"),
    (11215, "Gwangjin-gu"),
    (11230, "Dongdaemun-gu"),
    (11260, "Jungnang-gu"),
    (11290, "Seongbuk-gu"),
    (11305, "Gangbuk-gu"),
    (11320, "Dobong-gu"),
    (11350, "Nowon-gu"),
    (11380, "Eunpyeong-gu"),
    (11410, "Seodaemun-gu"),
    (11440, "Mapo-gu"),
    (11470, "Yangcheon-gu"),
    (11500, "Gangseo-gu"),
    (11530, "Guro-gu"),
    (11545, "Geumcheon-gu"),
    (11560, "Yeongdeungpo-gu"),
    (11590, "Dongjak-gu"),
    (11620, "Gwanak-gu"),
    (11650, "Seocho-gu"),
    (11680, "Gangnam-gu"),
    (11710, "Songpa-gu"),
    (11740, "Gangdong-gu"),
];

/// Convierte un código de distrito a su nombre. Total: los códigos
/// desconocidos devuelven un marcador en lugar de fallar.
pub fn code_to_address(code: u32) -> &'static str {
    ADDRESSES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
        .unwrap_or("Desconocido")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::constants::DEFAULT_ADDRESS_CODE;

    #[test]
    fn known_codes_resolve() {
        assert_eq!(code_to_address(11680), "Gangnam-gu");
        assert_eq!(code_to_address(11110), "Jongno-gu");
    }

    #[test]
    fn unknown_code_is_total() {
        assert_eq!(code_to_address(99999), "Desconocido");
    }

    #[test]
    fn default_code_is_in_catalog() {
        assert!(ADDRESSES.iter().any(|(c, _)| *c == DEFAULT_ADDRESS_CODE));
    }

    #[test]
    fn codes_are_unique() {
        let mut codes: Vec<u32> = ADDRESSES.iter().map(|(c, _)| *c).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), ADDRESSES.len());
    }
}
