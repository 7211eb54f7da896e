//! Static reference data for the intake form
//!
//! Postal-code prefixes, the conditions catalogue and the field display names
//! are fixed for the lifetime of the process.

use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Spanish provinces keyed by the first two digits of the postal code
const PROVINCES: [(&str, &str); 52] = [
    ("01", "Álava"),
    ("02", "Albacete"),
    ("03", "Alicante"),
    ("04", "Almería"),
    ("05", "Ávila"),
    ("06", "Badajoz"),
    ("07", "Baleares"),
    ("08", "Barcelona"),
    ("09", "Burgos"),
    ("10", "Cáceres"),
    ("11", "Cádiz"),
    ("12", "Castellón"),
    ("13", "Ciudad Real"),
    ("14", "Córdoba"),
    ("15", "Coruña"),
    ("16", "Cuenca"),
    ("17", "Gerona"),
    ("18", "Granada"),
    ("19", "Guadalajara"),
    ("20", "Guipúzcoa"),
    ("21", "Huelva"),
    ("22", "Huesca"),
    ("23", "Jaén"),
    ("24", "León"),
    ("25", "Lérida"),
    ("26", "La Rioja"),
    ("27", "Lugo"),
    ("28", "Madrid"),
    ("29", "Málaga"),
    ("30", "Murcia"),
    ("31", "Navarra"),
    ("32", "Orense"),
    ("33", "Asturias"),
    ("34", "Palencia"),
    ("35", "Las Palmas"),
    ("36", "Pontevedra"),
    ("37", "Salamanca"),
    ("38", "Santa Cruz de Tenerife"),
    ("39", "Cantabria"),
    ("40", "Segovia"),
    ("41", "Sevilla"),
    ("42", "Soria"),
    ("43", "Tarragona"),
    ("44", "Teruel"),
    ("45", "Toledo"),
    ("46", "Valencia"),
    ("47", "Valladolid"),
    ("48", "Vizcaya"),
    ("49", "Zamora"),
    ("50", "Zaragoza"),
    ("51", "Ceuta"),
    ("52", "Melilla"),
];

/// Selectable conditions, in catalogue order
const CONDITIONS: [&str; 4] = ["Miopía", "Astigmatismo", "Ojos cansados", "Hipermetropía"];

/// Field key -> label shown in error messages
const DISPLAY_NAMES: [(&str, &str); 10] = [
    ("nombre", "Nombre"),
    ("email", "Email"),
    ("telefono", "Teléfono"),
    ("cp", "Código Postal"),
    ("provincia", "Provincia"),
    ("tipoProducto", "Tipo de Producto"),
    ("dolencias", "Dolencias"),
    ("fechaDeseada", "Fecha deseada"),
    ("comentarios", "Comentarios"),
    ("aceptarCondiciones", "Aceptar condiciones"),
];

static SPANISH: LazyLock<ReferenceData> = LazyLock::new(|| ReferenceData {
    provinces: PROVINCES.into_iter().collect(),
    conditions: &CONDITIONS,
});

/// Immutable lookup tables used by the validators and the province resolver
#[derive(Debug, Clone)]
pub struct ReferenceData {
    provinces: BTreeMap<&'static str, &'static str>,
    conditions: &'static [&'static str],
}

impl ReferenceData {
    /// The shared Spanish tables
    pub fn spanish() -> &'static ReferenceData {
        &SPANISH
    }

    /// Look up a province by its two-digit prefix
    pub fn province_for_prefix(&self, prefix: &str) -> Option<&'static str> {
        self.provinces.get(prefix).copied()
    }

    /// Look up a province from the first two characters of a postal code.
    /// Returns `None` when the code is shorter than two characters.
    pub fn province_for_postal_code(&self, postal_code: &str) -> Option<&'static str> {
        let prefix: String = postal_code.chars().take(2).collect();
        if prefix.chars().count() < 2 {
            return None;
        }
        self.province_for_prefix(&prefix)
    }

    /// Selectable condition labels
    pub fn conditions(&self) -> &'static [&'static str] {
        self.conditions
    }

    pub fn has_condition(&self, label: &str) -> bool {
        self.conditions.contains(&label)
    }

    /// Position of a condition in the catalogue, if it is listed
    pub fn condition_position(&self, label: &str) -> Option<usize> {
        self.conditions.iter().position(|c| *c == label)
    }
}

/// Display label for a raw field key; unknown keys fall back to the key itself
pub fn display_name(key: &str) -> &str {
    DISPLAY_NAMES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, label)| *label)
        .unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_52_provinces() {
        let data = ReferenceData::spanish();
        let mapped = (0..100)
            .filter(|n| data.province_for_prefix(&format!("{n:02}")).is_some())
            .count();
        assert_eq!(mapped, 52);
    }

    #[test]
    fn test_every_prefix_from_01_to_52_is_mapped() {
        let data = ReferenceData::spanish();
        for n in 1..=52 {
            let prefix = format!("{n:02}");
            assert!(
                data.province_for_prefix(&prefix).is_some(),
                "missing prefix {prefix}"
            );
        }
    }

    #[test]
    fn test_unmapped_prefixes() {
        let data = ReferenceData::spanish();
        assert_eq!(data.province_for_prefix("00"), None);
        assert_eq!(data.province_for_prefix("53"), None);
        assert_eq!(data.province_for_prefix("99"), None);
    }

    #[test]
    fn test_province_for_postal_code() {
        let data = ReferenceData::spanish();
        assert_eq!(data.province_for_postal_code("28001"), Some("Madrid"));
        assert_eq!(data.province_for_postal_code("08"), Some("Barcelona"));
        assert_eq!(
            data.province_for_postal_code("38500"),
            Some("Santa Cruz de Tenerife")
        );
        assert_eq!(data.province_for_postal_code("2"), None);
        assert_eq!(data.province_for_postal_code(""), None);
        assert_eq!(data.province_for_postal_code("ñ1234"), None);
    }

    #[test]
    fn test_conditions_catalogue_order() {
        let data = ReferenceData::spanish();
        assert_eq!(
            data.conditions(),
            &["Miopía", "Astigmatismo", "Ojos cansados", "Hipermetropía"]
        );
        assert!(data.has_condition("Miopía"));
        assert!(!data.has_condition("Glaucoma"));
        assert_eq!(data.condition_position("Hipermetropía"), Some(3));
    }

    #[test]
    fn test_display_name_known_and_fallback() {
        assert_eq!(display_name("cp"), "Código Postal");
        assert_eq!(display_name("aceptarCondiciones"), "Aceptar condiciones");
        assert_eq!(display_name("unknownField"), "unknownField");
    }
}
