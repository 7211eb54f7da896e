//! Form domain layer
//!
//! Field values, validation rules, the appointment form state, error
//! aggregation and the submission controller. Nothing here depends on the
//! terminal; results leave through the [`Notifier`] trait.

mod field;
mod form_state;
mod messages;
mod snapshot;
mod submission;
mod validators;

pub use field::{FieldKey, FieldValue, ProductType};
pub use messages::message_for;
pub use snapshot::SummaryRow;
pub use submission::{Notifier, Phase, SubmissionController, SubmissionOutcome};
pub use validators::DATE_FORMAT;
