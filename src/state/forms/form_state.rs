//! Appointment form state

use super::field::{normalize_selection, FieldKey, FieldState, FieldValue};
use super::snapshot::Snapshot;
use super::validators::{validate_field, ValidationContext};
use crate::state::reference::ReferenceData;
use thiserror::Error;

/// Edit events the form refuses to apply
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown field `{0}`")]
    UnknownField(String),

    #[error("field `{0}` is derived and cannot be edited")]
    ReadOnlyField(&'static str),

    #[error("field `{field}` expects a {expected} value, got {actual}")]
    WrongKind {
        field: &'static str,
        expected: &'static str,
        actual: &'static str,
    },
}

/// Derived province for a postal code: the mapped name, or empty when the
/// code is shorter than two characters or its prefix is unknown
pub fn resolve_province(postal_code: &str, reference: &ReferenceData) -> String {
    reference
        .province_for_postal_code(postal_code)
        .unwrap_or_default()
        .to_string()
}

/// Field states in declared order plus the submitted flag
#[derive(Debug, Clone)]
pub struct AppointmentForm {
    fields: Vec<FieldState>,
    submitted: bool,
}

impl AppointmentForm {
    /// Create a form with default values and their validation results
    pub fn new(ctx: &ValidationContext) -> Self {
        let mut form = Self {
            fields: FieldKey::ALL.into_iter().map(FieldState::new).collect(),
            submitted: false,
        };
        form.validate_all(ctx);
        form
    }

    pub fn field(&self, key: FieldKey) -> &FieldState {
        &self.fields[key.index()]
    }

    fn field_mut(&mut self, key: FieldKey) -> &mut FieldState {
        &mut self.fields[key.index()]
    }

    pub fn value(&self, key: FieldKey) -> &FieldValue {
        &self.field(key).value
    }

    /// Field states in declared order
    pub fn fields(&self) -> impl Iterator<Item = &FieldState> {
        self.fields.iter()
    }

    pub fn submitted(&self) -> bool {
        self.submitted
    }

    /// Apply a user edit. The field becomes dirty and is re-validated; a
    /// postal-code edit also rewrites the derived province before returning.
    pub fn set_value(
        &mut self,
        key: FieldKey,
        value: FieldValue,
        ctx: &ValidationContext,
    ) -> Result<(), FormError> {
        if key.is_derived() {
            return Err(FormError::ReadOnlyField(key.key()));
        }
        let expected = key.default_value();
        if !expected.same_kind(&value) {
            return Err(FormError::WrongKind {
                field: key.key(),
                expected: expected.kind_name(),
                actual: value.kind_name(),
            });
        }

        let value = match value {
            FieldValue::Multi(items) => {
                for label in items.iter().filter(|l| !ctx.reference.has_condition(l)) {
                    tracing::warn!(label = %label, "condition is not in the catalogue");
                }
                FieldValue::Multi(normalize_selection(items, ctx.reference))
            }
            other => other,
        };

        let field = self.field_mut(key);
        field.value = value;
        field.dirty = true;
        let result = validate_field(key, &field.value, ctx);
        tracing::debug!(field = key.key(), valid = result.is_valid(), "field edited");
        field.errors = result.into_errors();

        if key == FieldKey::PostalCode {
            self.resolve_province(ctx.reference);
        }
        Ok(())
    }

    /// Apply an edit addressed by raw field key
    pub fn set_named(
        &mut self,
        name: &str,
        value: FieldValue,
        ctx: &ValidationContext,
    ) -> Result<(), FormError> {
        let key =
            FieldKey::from_key(name).ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        self.set_value(key, value, ctx)
    }

    /// Recompute the province from the postal code. Silent: flags stay as they
    /// are and no other field is re-validated.
    pub fn resolve_province(&mut self, reference: &ReferenceData) {
        let province = resolve_province(self.value(FieldKey::PostalCode).as_text(), reference);
        tracing::debug!(province = %province, "province resolved");
        self.field_mut(FieldKey::Province).value = FieldValue::Text(province);
    }

    pub fn mark_touched(&mut self, key: FieldKey) {
        self.field_mut(key).touched = true;
    }

    pub fn mark_submitted(&mut self) {
        self.submitted = true;
    }

    /// Re-run every field's rules. Returns whether the whole form is valid.
    pub fn validate_all(&mut self, ctx: &ValidationContext) -> bool {
        for field in &mut self.fields {
            field.errors = validate_field(field.key, &field.value, ctx).into_errors();
        }
        self.is_valid()
    }

    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(FieldState::is_valid)
    }

    /// Whether a field should be shown as invalid: it has errors and the user
    /// interacted with it, or a submit was attempted
    pub fn is_field_invalid(&self, key: FieldKey) -> bool {
        let field = self.field(key);
        !field.is_valid() && (field.dirty || field.touched || self.submitted)
    }

    /// Restore defaults, clear flags and the submitted marker
    pub fn reset(&mut self, ctx: &ValidationContext) {
        for field in &mut self.fields {
            field.clear();
        }
        self.submitted = false;
        self.validate_all(ctx);
    }

    /// Raw values of every field, derived ones included
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(
            self.fields
                .iter()
                .map(|field| (field.key, field.value.clone()))
                .collect(),
        )
    }
}
