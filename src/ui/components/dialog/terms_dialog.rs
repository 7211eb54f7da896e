//! Terms and conditions overlay

use super::base::{render_dialog, DialogConfig};
use ratatui::{style::Color, Frame};

const TERMS_TEXT: &str = "Los datos facilitados se usarán únicamente para gestionar su cita \
y contactarle sobre ella. No se cederán a terceros.\n\n\
Puede cancelar o cambiar la cita avisando con 24 horas de antelación.\n\n\
Puede ejercer sus derechos de acceso, rectificación y supresión \
escribiendo a la dirección de correo de la óptica.";

pub fn render_terms_dialog(frame: &mut Frame) {
    render_dialog(
        frame,
        DialogConfig {
            title: "Condiciones del servicio",
            title_color: Color::Cyan,
            border_color: Color::Cyan,
            message: TERMS_TEXT,
            max_width: 64,
            ..Default::default()
        },
    );
}
