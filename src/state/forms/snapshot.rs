//! Read-only copy of a submitted form and its confirmation rows

use super::field::{FieldKey, FieldValue};

/// Shown instead of an empty phone number
pub const NO_PHONE: &str = "No proporcionado";
/// Shown instead of empty comments
pub const NO_COMMENTS: &str = "Sin comentarios";

/// Raw field values in declared order, derived fields included
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    values: Vec<(FieldKey, FieldValue)>,
}

/// One pre-formatted line of the confirmation summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub key: FieldKey,
    pub label: &'static str,
    pub value: String,
}

impl Snapshot {
    pub fn new(values: Vec<(FieldKey, FieldValue)>) -> Self {
        Self { values }
    }

    pub fn get(&self, key: FieldKey) -> Option<&FieldValue> {
        self.values.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    /// Confirmation rows for every field except the terms checkbox
    pub fn summary(&self) -> Vec<SummaryRow> {
        self.values
            .iter()
            .filter(|(key, _)| *key != FieldKey::AcceptTerms)
            .map(|(key, value)| SummaryRow {
                key: *key,
                label: key.label(),
                value: display_value(*key, value),
            })
            .collect()
    }
}

/// Format a raw value for the confirmation summary
pub fn display_value(key: FieldKey, value: &FieldValue) -> String {
    match (key, value) {
        (FieldKey::Phone, v) if v.as_text().is_empty() => NO_PHONE.to_string(),
        (FieldKey::Comments, v) if v.as_text().is_empty() => NO_COMMENTS.to_string(),
        (_, FieldValue::Text(s)) | (_, FieldValue::Date(s)) => s.clone(),
        (_, FieldValue::Choice(choice)) => choice
            .map(|p| p.display_name())
            .unwrap_or_default()
            .to_string(),
        (_, FieldValue::Multi(items)) => items.join(", "),
        (_, FieldValue::Bool(true)) => "Sí".to_string(),
        (_, FieldValue::Bool(false)) => "No".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::ProductType;
    use pretty_assertions::assert_eq;

    fn sample() -> Snapshot {
        Snapshot::new(vec![
            (FieldKey::Name, FieldValue::Text("Ana".into())),
            (FieldKey::Email, FieldValue::Text("ana@x.com".into())),
            (FieldKey::Phone, FieldValue::Text(String::new())),
            (FieldKey::PostalCode, FieldValue::Text("28001".into())),
            (FieldKey::Province, FieldValue::Text("Madrid".into())),
            (FieldKey::ProductType, FieldValue::Choice(Some(ProductType::Glasses))),
            (
                FieldKey::Conditions,
                FieldValue::selection(["Miopía", "Astigmatismo"]),
            ),
            (FieldKey::DesiredDate, FieldValue::Date("2026-10-20".into())),
            (FieldKey::Comments, FieldValue::Text(String::new())),
            (FieldKey::AcceptTerms, FieldValue::Bool(true)),
        ])
    }

    #[test]
    fn test_summary_rows() {
        let rows: Vec<(&str, String)> = sample()
            .summary()
            .into_iter()
            .map(|row| (row.label, row.value))
            .collect();

        assert_eq!(
            rows,
            vec![
                ("Nombre", "Ana".to_string()),
                ("Email", "ana@x.com".to_string()),
                ("Teléfono", "No proporcionado".to_string()),
                ("Código Postal", "28001".to_string()),
                ("Provincia", "Madrid".to_string()),
                ("Tipo de Producto", "Gafas".to_string()),
                ("Dolencias", "Miopía, Astigmatismo".to_string()),
                ("Fecha deseada", "2026-10-20".to_string()),
                ("Comentarios", "Sin comentarios".to_string()),
            ]
        );
    }

    #[test]
    fn test_contact_lenses_display() {
        let value = FieldValue::Choice(Some(ProductType::ContactLenses));
        assert_eq!(
            display_value(FieldKey::ProductType, &value),
            "Lentes de contacto"
        );
    }

    #[test]
    fn test_filled_optional_fields_show_their_value() {
        assert_eq!(
            display_value(FieldKey::Phone, &FieldValue::Text("612345678".into())),
            "612345678"
        );
        assert_eq!(
            display_value(FieldKey::Comments, &FieldValue::Text("Por la tarde".into())),
            "Por la tarde"
        );
    }

    #[test]
    fn test_get_keeps_raw_values() {
        let snapshot = sample();
        assert_eq!(
            snapshot.get(FieldKey::Province),
            Some(&FieldValue::Text("Madrid".into()))
        );
        assert_eq!(snapshot.get(FieldKey::AcceptTerms), Some(&FieldValue::Bool(true)));
        assert!(FieldKey::ALL.iter().all(|key| snapshot.get(*key).is_some()));
    }
}
