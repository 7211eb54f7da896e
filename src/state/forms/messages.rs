//! Error aggregation: turns per-field errors into user-facing messages

use super::form_state::AppointmentForm;
use super::validators::ErrorReason;
use crate::state::reference::display_name;
use std::collections::BTreeSet;

/// Message used when a field is invalid for a reason with no template
pub const VALIDATION_FALLBACK: &str = "Error de validación";

/// Lower ranks win when a field carries several reasons
pub fn precedence(reason: &ErrorReason) -> u8 {
    match reason {
        ErrorReason::Required => 0,
        ErrorReason::InvalidEmail => 1,
        ErrorReason::TooShort(_) => 2,
        ErrorReason::TooLong(_) => 3,
        ErrorReason::PatternMismatch => 4,
        ErrorReason::InvalidPhone => 5,
        ErrorReason::InvalidPostalCode => 6,
        ErrorReason::NoSuchProvince => 7,
        ErrorReason::InvalidDate => 8,
    }
}

/// Message for the highest-priority reason in the set
pub fn message_for(reasons: &BTreeSet<ErrorReason>) -> String {
    reasons
        .iter()
        .min_by_key(|reason| precedence(reason))
        .map(ToString::to_string)
        .unwrap_or_else(|| VALIDATION_FALLBACK.to_string())
}

/// `"<label>: <message>"` line for a field key
pub fn field_message(key: &str, reasons: &BTreeSet<ErrorReason>) -> String {
    format!("{}: {}", display_name(key), message_for(reasons))
}

/// One line per invalid field, in declared field order
pub fn collect_messages(form: &AppointmentForm) -> Vec<String> {
    form.fields()
        .filter(|field| !field.is_valid())
        .map(|field| field_message(field.key.key(), &field.errors))
        .collect()
}
