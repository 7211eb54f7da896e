//! Reusable UI components

mod button;
mod dialog;

pub use button::{render_action_button, BUTTON_HEIGHT};
pub use dialog::{render_error_dialog, render_success_dialog, render_terms_dialog};
