//! Keyboard bindings of the host window.
//!
//! Find keys always apply. Menu accelerators are skipped while the host
//! ignores menu shortcuts for the window, so the page gets those keys.

use winit::keyboard::{Key, ModifiersState, NamedKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum KeyAction {
    FindNext,
    FindPrevious,
    StopFind,
    /// Move keyboard focus into the page.
    FocusPage,
    Reload,
    Quit,
}

impl KeyAction {
    /// Menu accelerators, as opposed to find keys.
    pub(super) fn is_menu_shortcut(self) -> bool {
        matches!(self, KeyAction::Reload | KeyAction::Quit)
    }
}

/// Map a pressed key to an action.
pub(super) fn classify(key: &Key, mods: ModifiersState) -> Option<KeyAction> {
    match key {
        Key::Named(NamedKey::F3) if mods.shift_key() => Some(KeyAction::FindPrevious),
        Key::Named(NamedKey::F3) => Some(KeyAction::FindNext),
        Key::Named(NamedKey::Escape) => Some(KeyAction::StopFind),
        Key::Named(NamedKey::F6) => Some(KeyAction::FocusPage),
        Key::Character(c) if mods.control_key() || mods.super_key() => {
            match c.to_lowercase().as_str() {
                "q" => Some(KeyAction::Quit),
                "r" => Some(KeyAction::Reload),
                _ => None,
            }
        }
        _ => None,
    }
}
