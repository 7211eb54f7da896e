//! Form field value objects

use super::validators::ErrorReason;
use crate::state::reference::{display_name, ReferenceData};
use std::collections::BTreeSet;

/// Fields of the appointment form, in declared order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldKey {
    Name,
    Email,
    Phone,
    PostalCode,
    Province,
    ProductType,
    Conditions,
    DesiredDate,
    Comments,
    AcceptTerms,
}

impl FieldKey {
    /// All fields in declared order
    pub const ALL: [FieldKey; 10] = [
        FieldKey::Name,
        FieldKey::Email,
        FieldKey::Phone,
        FieldKey::PostalCode,
        FieldKey::Province,
        FieldKey::ProductType,
        FieldKey::Conditions,
        FieldKey::DesiredDate,
        FieldKey::Comments,
        FieldKey::AcceptTerms,
    ];

    /// Raw key used by edit events and the display-name table
    pub fn key(self) -> &'static str {
        match self {
            FieldKey::Name => "nombre",
            FieldKey::Email => "email",
            FieldKey::Phone => "telefono",
            FieldKey::PostalCode => "cp",
            FieldKey::Province => "provincia",
            FieldKey::ProductType => "tipoProducto",
            FieldKey::Conditions => "dolencias",
            FieldKey::DesiredDate => "fechaDeseada",
            FieldKey::Comments => "comentarios",
            FieldKey::AcceptTerms => "aceptarCondiciones",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        display_name(self.key())
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Derived fields are written by the form itself, never by the user
    pub fn is_derived(self) -> bool {
        matches!(self, FieldKey::Province)
    }

    /// Value a field holds on creation and after a reset
    pub fn default_value(self) -> FieldValue {
        match self {
            FieldKey::ProductType => FieldValue::Choice(Some(ProductType::Glasses)),
            FieldKey::Conditions => FieldValue::Multi(Vec::new()),
            FieldKey::DesiredDate => FieldValue::Date(String::new()),
            FieldKey::AcceptTerms => FieldValue::Bool(false),
            _ => FieldValue::Text(String::new()),
        }
    }
}

/// Closed set of products an appointment can be for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductType {
    #[default]
    Glasses,
    ContactLenses,
}

impl ProductType {
    pub fn key(self) -> &'static str {
        match self {
            ProductType::Glasses => "gafas",
            ProductType::ContactLenses => "lentillas",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "gafas" => Some(ProductType::Glasses),
            "lentillas" => Some(ProductType::ContactLenses),
            _ => None,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ProductType::Glasses => "Gafas",
            ProductType::ContactLenses => "Lentes de contacto",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            ProductType::Glasses => ProductType::ContactLenses,
            ProductType::ContactLenses => ProductType::Glasses,
        }
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Bool(bool),
    Choice(Option<ProductType>),
    /// Selected labels, deduplicated and kept in catalogue order
    Multi(Vec<String>),
    /// Raw `YYYY-MM-DD` text, parsed when validated
    Date(String),
}

impl FieldValue {
    /// Build a multi-choice value from any selection order
    pub fn selection<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldValue::Multi(normalize_selection(labels, ReferenceData::spanish()))
    }

    /// Get the text value (returns empty string for non-text fields)
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) | FieldValue::Date(s) => s,
            _ => "",
        }
    }

    pub fn as_bool(&self) -> bool {
        matches!(self, FieldValue::Bool(true))
    }

    pub fn as_choice(&self) -> Option<ProductType> {
        match self {
            FieldValue::Choice(choice) => *choice,
            _ => None,
        }
    }

    pub fn as_selection(&self) -> &[String] {
        match self {
            FieldValue::Multi(items) => items,
            _ => &[],
        }
    }

    /// Whether two values are of the same variant
    pub fn same_kind(&self, other: &FieldValue) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::Bool(_) => "boolean",
            FieldValue::Choice(_) => "choice",
            FieldValue::Multi(_) => "multi-choice",
            FieldValue::Date(_) => "date",
        }
    }
}

/// Deduplicate a selection and order it by catalogue position; labels outside
/// the catalogue keep their relative order after the listed ones.
pub fn normalize_selection<I, S>(labels: I, reference: &ReferenceData) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut items: Vec<String> = Vec::new();
    for label in labels {
        let label = label.into();
        if !items.contains(&label) {
            items.push(label);
        }
    }
    items.sort_by_key(|label| reference.condition_position(label).unwrap_or(usize::MAX));
    items
}

/// State of a single field: value, interaction flags and current errors
#[derive(Debug, Clone)]
pub struct FieldState {
    pub key: FieldKey,
    pub value: FieldValue,
    pub touched: bool,
    pub dirty: bool,
    /// Output of the field's rules for `value`; empty means valid
    pub errors: BTreeSet<ErrorReason>,
}

impl FieldState {
    pub fn new(key: FieldKey) -> Self {
        Self {
            key,
            value: key.default_value(),
            touched: false,
            dirty: false,
            errors: BTreeSet::new(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Restore the default value and clear interaction flags
    pub fn clear(&mut self) {
        self.value = self.key.default_value();
        self.touched = false;
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod field_key {
        use super::*;

        #[test]
        fn test_declared_order_matches_index() {
            for (i, key) in FieldKey::ALL.iter().enumerate() {
                assert_eq!(key.index(), i);
            }
        }

        #[test]
        fn test_key_roundtrip() {
            for key in FieldKey::ALL {
                assert_eq!(FieldKey::from_key(key.key()), Some(key));
            }
            assert_eq!(FieldKey::from_key("apellidos"), None);
        }

        #[test]
        fn test_labels() {
            assert_eq!(FieldKey::Name.label(), "Nombre");
            assert_eq!(FieldKey::ProductType.label(), "Tipo de Producto");
            assert_eq!(FieldKey::DesiredDate.label(), "Fecha deseada");
        }

        #[test]
        fn test_only_province_is_derived() {
            let derived: Vec<_> = FieldKey::ALL.into_iter().filter(|k| k.is_derived()).collect();
            assert_eq!(derived, vec![FieldKey::Province]);
        }

        #[test]
        fn test_defaults() {
            assert_eq!(
                FieldKey::ProductType.default_value(),
                FieldValue::Choice(Some(ProductType::Glasses))
            );
            assert_eq!(FieldKey::Conditions.default_value(), FieldValue::Multi(vec![]));
            assert_eq!(FieldKey::AcceptTerms.default_value(), FieldValue::Bool(false));
            assert_eq!(
                FieldKey::Name.default_value(),
                FieldValue::Text(String::new())
            );
        }
    }

    mod product_type {
        use super::*;

        #[test]
        fn test_default_is_glasses() {
            assert_eq!(ProductType::default(), ProductType::Glasses);
        }

        #[test]
        fn test_display_names() {
            assert_eq!(ProductType::Glasses.display_name(), "Gafas");
            assert_eq!(ProductType::ContactLenses.display_name(), "Lentes de contacto");
        }

        #[test]
        fn test_toggle_and_keys() {
            assert_eq!(ProductType::Glasses.toggle(), ProductType::ContactLenses);
            assert_eq!(ProductType::from_key("lentillas"), Some(ProductType::ContactLenses));
            assert_eq!(ProductType::from_key("monoculo"), None);
        }
    }

    mod field_value {
        use super::*;

        #[test]
        fn test_selection_is_deduplicated_and_ordered() {
            let value = FieldValue::selection(["Hipermetropía", "Miopía", "Miopía"]);
            assert_eq!(value.as_selection(), &["Miopía", "Hipermetropía"]);
        }

        #[test]
        fn test_unknown_labels_go_last() {
            let value = FieldValue::selection(["Glaucoma", "Astigmatismo"]);
            assert_eq!(value.as_selection(), &["Astigmatismo", "Glaucoma"]);
        }

        #[test]
        fn test_accessors_on_other_kinds() {
            let value = FieldValue::Bool(true);
            assert_eq!(value.as_text(), "");
            assert!(value.as_bool());
            assert!(value.as_selection().is_empty());
            assert_eq!(value.as_choice(), None);
        }

        #[test]
        fn test_same_kind() {
            assert!(FieldValue::Text("a".into()).same_kind(&FieldValue::Text(String::new())));
            assert!(!FieldValue::Text("a".into()).same_kind(&FieldValue::Date("a".into())));
        }
    }

    mod field_state {
        use super::*;

        #[test]
        fn test_clear_restores_default() {
            let mut field = FieldState::new(FieldKey::Name);
            field.value = FieldValue::Text("Ana".into());
            field.touched = true;
            field.dirty = true;
            field.clear();
            assert_eq!(field.value.as_text(), "");
            assert!(!field.touched);
            assert!(!field.dirty);
        }
    }
}
