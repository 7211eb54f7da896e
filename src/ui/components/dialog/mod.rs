//! Dialog components for TUI

mod base;
mod error_dialog;
mod success_dialog;
mod terms_dialog;

pub use error_dialog::render_error_dialog;
pub use success_dialog::render_success_dialog;
pub use terms_dialog::render_terms_dialog;
