//! Application state definitions

use super::forms::{FieldKey, Notifier, SummaryRow};

/// Rows the focus cycles through: every editable field, then the action panel
const FOCUS_ORDER: [Focus; 10] = [
    Focus::Field(FieldKey::Name),
    Focus::Field(FieldKey::Email),
    Focus::Field(FieldKey::Phone),
    Focus::Field(FieldKey::PostalCode),
    Focus::Field(FieldKey::ProductType),
    Focus::Field(FieldKey::Conditions),
    Focus::Field(FieldKey::DesiredDate),
    Focus::Field(FieldKey::Comments),
    Focus::Field(FieldKey::AcceptTerms),
    Focus::Actions,
];

/// What currently receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FieldKey),
    Actions,
}

impl Focus {
    pub fn field(self) -> Option<FieldKey> {
        match self {
            Focus::Field(key) => Some(key),
            Focus::Actions => None,
        }
    }
}

/// Buttons in the action panel, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormButton {
    Submit,
    Reset,
    Terms,
}

impl FormButton {
    pub const ALL: [FormButton; 3] = [FormButton::Submit, FormButton::Reset, FormButton::Terms];

    pub fn label(self) -> &'static str {
        match self {
            FormButton::Submit => "Enviar",
            FormButton::Reset => "Limpiar",
            FormButton::Terms => "Ver condiciones",
        }
    }
}

/// Modal overlays
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    Errors(Vec<String>),
    Success(Vec<SummaryRow>),
    Terms,
}

/// UI state around the form: focus, dialogs, status line
#[derive(Debug, Clone, Default)]
pub struct AppState {
    focus_index: usize,
    /// Selected action panel button
    pub selected_button: usize,
    /// Highlighted entry in the conditions list
    pub condition_cursor: usize,
    pub dialog: Option<Dialog>,
    pub status_message: Option<String>,
}

impl AppState {
    pub fn focus(&self) -> Focus {
        FOCUS_ORDER[self.focus_index]
    }

    pub fn is_focused(&self, key: FieldKey) -> bool {
        self.focus() == Focus::Field(key)
    }

    pub fn is_action_panel_focused(&self) -> bool {
        self.focus() == Focus::Actions
    }

    /// Move to next focusable row
    pub fn next_focus(&mut self) {
        self.focus_index = (self.focus_index + 1) % FOCUS_ORDER.len();
    }

    /// Move to previous focusable row
    pub fn prev_focus(&mut self) {
        if self.focus_index == 0 {
            self.focus_index = FOCUS_ORDER.len() - 1;
        } else {
            self.focus_index -= 1;
        }
    }

    pub fn selected_button(&self) -> FormButton {
        FormButton::ALL[self.selected_button % FormButton::ALL.len()]
    }

    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % FormButton::ALL.len();
    }

    pub fn prev_button(&mut self) {
        if self.selected_button == 0 {
            self.selected_button = FormButton::ALL.len() - 1;
        } else {
            self.selected_button -= 1;
        }
    }

    /// Move the conditions cursor, wrapping within `count` entries
    pub fn move_condition_cursor(&mut self, forward: bool, count: usize) {
        if count == 0 {
            return;
        }
        self.condition_cursor = if forward {
            (self.condition_cursor + 1) % count
        } else if self.condition_cursor == 0 {
            count - 1
        } else {
            self.condition_cursor - 1
        };
    }

    pub fn has_dialog(&self) -> bool {
        self.dialog.is_some()
    }

    /// Close the open dialog, returning it
    pub fn dismiss_dialog(&mut self) -> Option<Dialog> {
        self.dialog.take()
    }

    /// Back to the first field after a reset
    pub fn clear_form_ui(&mut self) {
        self.focus_index = 0;
        self.selected_button = 0;
        self.condition_cursor = 0;
    }
}

impl Notifier for AppState {
    fn validation_failed(&mut self, messages: &[String]) {
        self.dialog = Some(Dialog::Errors(messages.to_vec()));
    }

    fn submission_succeeded(&mut self, summary: &[SummaryRow]) {
        self.dialog = Some(Dialog::Success(summary.to_vec()));
    }

    fn terms_requested(&mut self) {
        self.dialog = Some(Dialog::Terms);
    }
}
