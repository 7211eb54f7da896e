//! Application state module

mod app_state;
pub mod forms;
pub mod reference;

pub use app_state::*;
