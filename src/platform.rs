//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Modifier for the form shortcuts (submit, reset, terms).
/// Terminals on every platform deliver Control combinations reliably.
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for help text
/// - macOS: "⌃S"
/// - Linux/Windows: "Ctrl+S"
#[cfg(target_os = "macos")]
pub const SUBMIT_SHORTCUT: &str = "⌃S";

#[cfg(not(target_os = "macos"))]
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Reset shortcut display
#[cfg(target_os = "macos")]
pub const RESET_SHORTCUT: &str = "⌃R";

#[cfg(not(target_os = "macos"))]
pub const RESET_SHORTCUT: &str = "Ctrl+R";

/// Terms shortcut display
#[cfg(target_os = "macos")]
pub const TERMS_SHORTCUT: &str = "⌃T";

#[cfg(not(target_os = "macos"))]
pub const TERMS_SHORTCUT: &str = "Ctrl+T";
