//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `appointment_form`: The appointment request form and its action panel

mod appointment_form;
mod field_renderer;

pub use appointment_form::draw as draw_appointment_form;
