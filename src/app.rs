//! Application state and core logic

use crate::clock::Clock;
use crate::platform::SHORTCUT_MODIFIER;
use crate::state::forms::{
    FieldKey, FieldValue, ProductType, SubmissionController, SubmissionOutcome,
};
use crate::state::{AppState, Dialog, Focus, FormButton};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::BTreeMap;

/// Main application struct
pub struct App {
    /// UI state: focus, dialogs, status line
    pub state: AppState,
    /// The form session
    pub controller: SubmissionController,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(clock: Box<dyn Clock>) -> Self {
        Self {
            state: AppState::default(),
            controller: SubmissionController::new(clock),
            quit: false,
        }
    }

    /// Type configured values into the form; bad entries are logged and skipped
    pub fn prefill(&mut self, values: &BTreeMap<String, String>) {
        for (name, raw) in values {
            let value = match FieldKey::from_key(name) {
                Some(field) => prefill_value(field, raw),
                None => FieldValue::Text(raw.clone()),
            };
            if let Err(err) = self.controller.edit_named(name, value) {
                tracing::warn!(field = %name, %err, "ignoring prefill value");
            }
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Global quit, even over a dialog
        if key.modifiers.contains(SHORTCUT_MODIFIER) && key.code == KeyCode::Char('c') {
            self.quit = true;
            return Ok(());
        }

        // Dialogs are modal
        if self.state.has_dialog() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.close_dialog();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.state.status_message = None;

        if key.modifiers.contains(SHORTCUT_MODIFIER) {
            match key.code {
                KeyCode::Char('s') => {
                    self.submit();
                    return Ok(());
                }
                KeyCode::Char('r') => {
                    self.reset();
                    return Ok(());
                }
                KeyCode::Char('t') => {
                    self.controller.request_terms(&mut self.state);
                    return Ok(());
                }
                _ => {}
            }
        }

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab => self.leave_focus(true),
            KeyCode::BackTab => self.leave_focus(false),
            _ => match self.state.focus() {
                Focus::Actions => self.handle_actions_key(key),
                Focus::Field(field) => self.handle_field_key(field, key),
            },
        }
        Ok(())
    }

    /// Mark the focused field touched and move focus
    fn leave_focus(&mut self, forward: bool) {
        if let Some(field) = self.state.focus().field() {
            self.controller.touch(field);
        }
        if forward {
            self.state.next_focus();
        } else {
            self.state.prev_focus();
        }
    }

    /// Handle keys on the action panel
    fn handle_actions_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Left | KeyCode::Char('k') => self.state.prev_button(),
            KeyCode::Down | KeyCode::Right | KeyCode::Char('j') => self.state.next_button(),
            KeyCode::Enter | KeyCode::Char(' ') => self.press(self.state.selected_button()),
            _ => {}
        }
    }

    fn press(&mut self, button: FormButton) {
        match button {
            FormButton::Submit => self.submit(),
            FormButton::Reset => self.reset(),
            FormButton::Terms => self.controller.request_terms(&mut self.state),
        }
    }

    /// Handle keys while a field has focus
    fn handle_field_key(&mut self, field: FieldKey, key: KeyEvent) {
        match field {
            FieldKey::ProductType => match key.code {
                KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') => {
                    let current = self.controller.form().value(field).as_choice();
                    let next = current.unwrap_or_default().toggle();
                    self.apply_edit(field, FieldValue::Choice(Some(next)));
                }
                KeyCode::Enter => self.leave_focus(true),
                _ => {}
            },
            FieldKey::Conditions => {
                let count = self.controller.reference().conditions().len();
                match key.code {
                    KeyCode::Left => self.state.move_condition_cursor(false, count),
                    KeyCode::Right => self.state.move_condition_cursor(true, count),
                    KeyCode::Char(' ') => self.toggle_condition(),
                    KeyCode::Enter => self.leave_focus(true),
                    _ => {}
                }
            }
            FieldKey::AcceptTerms => match key.code {
                KeyCode::Char(' ') => {
                    let accepted = self.controller.form().value(field).as_bool();
                    self.apply_edit(field, FieldValue::Bool(!accepted));
                }
                KeyCode::Enter => self.leave_focus(true),
                _ => {}
            },
            _ => match key.code {
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    let mut text = self.controller.form().value(field).as_text().to_string();
                    text.push(c);
                    self.apply_edit(field, text_value(field, text));
                }
                KeyCode::Backspace => {
                    let mut text = self.controller.form().value(field).as_text().to_string();
                    if text.pop().is_some() {
                        self.apply_edit(field, text_value(field, text));
                    }
                }
                // Enter in comments adds newline
                KeyCode::Enter if field == FieldKey::Comments => {
                    let mut text = self.controller.form().value(field).as_text().to_string();
                    text.push('\n');
                    self.apply_edit(field, text_value(field, text));
                }
                KeyCode::Enter => self.leave_focus(true),
                _ => {}
            },
        }
    }

    /// Toggle the condition under the cursor
    fn toggle_condition(&mut self) {
        let conditions = self.controller.reference().conditions();
        let Some(label) = conditions.get(self.state.condition_cursor) else {
            return;
        };

        let mut selected = self
            .controller
            .form()
            .value(FieldKey::Conditions)
            .as_selection()
            .to_vec();
        if let Some(pos) = selected.iter().position(|s| s == label) {
            selected.remove(pos);
        } else {
            selected.push(label.to_string());
        }
        self.apply_edit(FieldKey::Conditions, FieldValue::selection(selected));
    }

    /// Apply an edit; a refused edit is reported on the status line
    fn apply_edit(&mut self, field: FieldKey, value: FieldValue) {
        if let Err(err) = self.controller.edit(field, value) {
            tracing::warn!(%err, "edit refused");
            self.state.status_message = Some(err.to_string());
        }
    }

    fn submit(&mut self) {
        match self.controller.submit(&mut self.state) {
            SubmissionOutcome::Accepted(snapshot) => {
                let name = snapshot
                    .get(FieldKey::Name)
                    .map(FieldValue::as_text)
                    .unwrap_or_default();
                self.state.status_message = Some(format!("Solicitud de cita enviada: {name}"));
            }
            SubmissionOutcome::Rejected(messages) => {
                self.state.status_message =
                    Some(format!("{} campos por revisar", messages.len()));
            }
        }
    }

    fn reset(&mut self) {
        self.controller.reset();
        self.state.clear_form_ui();
    }

    /// Close the open dialog; closing the confirmation starts a fresh form
    fn close_dialog(&mut self) {
        if let Some(Dialog::Success(_)) = self.state.dismiss_dialog() {
            self.reset();
            self.state.status_message = Some("Formulario listo para otra cita".to_string());
        }
    }
}

/// Parse a configured value into the kind the field stores. Unparseable
/// checkbox values stay text so the edit is refused and logged.
fn prefill_value(field: FieldKey, raw: &str) -> FieldValue {
    match field {
        FieldKey::ProductType => FieldValue::Choice(ProductType::from_key(raw.trim())),
        FieldKey::Conditions => FieldValue::selection(
            raw.split(',')
                .map(str::trim)
                .filter(|label| !label.is_empty()),
        ),
        FieldKey::AcceptTerms => match raw.trim().parse::<bool>() {
            Ok(checked) => FieldValue::Bool(checked),
            Err(_) => FieldValue::Text(raw.to_string()),
        },
        _ => text_value(field, raw.to_string()),
    }
}

/// Wrap typed text in the value kind the field stores
fn text_value(field: FieldKey, text: String) -> FieldValue {
    match field {
        FieldKey::DesiredDate => FieldValue::Date(text),
        _ => FieldValue::Text(text),
    }
}
