use crossterm::event::{KeyCode, KeyModifiers};

// ── Actions ──────────────────────────────────────────────────────────

/// Every discrete intent a key press can carry.
///
/// Actions are mode-free identifiers; the dispatcher decides what actually
/// happens based on the current mode and phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    // Global
    Interrupt,
    Cancel,

    // Navigation
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    First,
    Last,

    // Selection
    Confirm,
    NewSession,
    Detach,
    Kill,
    Refresh,
}

// ── Keybinding ───────────────────────────────────────────────────────

/// A single key → action mapping.
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
}

// ── KeyMap ────────────────────────────────────────────────────────────

/// Declarative registry of every key binding the picker understands.
pub struct KeyMap {
    pub bindings: Vec<KeyBinding>,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::default_keymap()
    }
}

impl KeyMap {
    pub fn default_keymap() -> Self {
        Self {
            bindings: default_bindings(),
        }
    }

    pub fn lookup(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<KeyAction> {
        // Terminals report Shift on some characters; the code already carries it.
        let modifiers = match code {
            KeyCode::Char(_) => modifiers - KeyModifiers::SHIFT,
            _ => modifiers,
        };
        self.bindings
            .iter()
            .find(|kb| kb.code == code && kb.modifiers == modifiers)
            .map(|kb| kb.action)
    }
}

// ── Default bindings ─────────────────────────────────────────────────

#[allow(clippy::enum_glob_use)]
fn default_bindings() -> Vec<KeyBinding> {
    use KeyAction::*;

    let none = KeyModifiers::NONE;
    let ctrl = KeyModifiers::CONTROL;
    let bind = |code, modifiers, action| KeyBinding {
        code,
        modifiers,
        action,
    };

    vec![
        bind(KeyCode::Char('c'), ctrl, Interrupt),
        bind(KeyCode::Esc, none, Cancel),
        bind(KeyCode::Enter, none, Confirm),
        // ── Navigation ───────────────────────────────────────────
        bind(KeyCode::Up, none, MoveUp),
        bind(KeyCode::Char('k'), none, MoveUp),
        bind(KeyCode::Down, none, MoveDown),
        bind(KeyCode::Char('j'), none, MoveDown),
        bind(KeyCode::PageUp, none, PageUp),
        bind(KeyCode::PageDown, none, PageDown),
        bind(KeyCode::Home, none, First),
        bind(KeyCode::End, none, Last),
        // ── Session actions ──────────────────────────────────────
        bind(KeyCode::Char('n'), ctrl, NewSession),
        bind(KeyCode::Char('d'), ctrl, Detach),
        bind(KeyCode::Char('x'), ctrl, Kill),
        bind(KeyCode::Char('r'), ctrl, Refresh),
    ]
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ctrl_c_interrupt() {
        let km = KeyMap::default_keymap();
        assert_eq!(
            km.lookup(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(KeyAction::Interrupt)
        );
    }

    #[test]
    fn plain_c_is_unbound() {
        let km = KeyMap::default_keymap();
        assert_eq!(km.lookup(KeyCode::Char('c'), KeyModifiers::NONE), None);
    }

    #[test]
    fn lookup_session_actions() {
        let km = KeyMap::default_keymap();
        let ctrl = KeyModifiers::CONTROL;
        assert_eq!(
            km.lookup(KeyCode::Char('n'), ctrl),
            Some(KeyAction::NewSession)
        );
        assert_eq!(km.lookup(KeyCode::Char('d'), ctrl), Some(KeyAction::Detach));
        assert_eq!(km.lookup(KeyCode::Char('x'), ctrl), Some(KeyAction::Kill));
        assert_eq!(km.lookup(KeyCode::Char('r'), ctrl), Some(KeyAction::Refresh));
    }

    #[test]
    fn lookup_navigation() {
        let km = KeyMap::default_keymap();
        assert_eq!(
            km.lookup(KeyCode::Down, KeyModifiers::NONE),
            Some(KeyAction::MoveDown)
        );
        assert_eq!(
            km.lookup(KeyCode::Char('k'), KeyModifiers::NONE),
            Some(KeyAction::MoveUp)
        );
        assert_eq!(
            km.lookup(KeyCode::End, KeyModifiers::NONE),
            Some(KeyAction::Last)
        );
    }

    #[test]
    fn shift_is_ignored_for_chars() {
        let km = KeyMap::default_keymap();
        assert_eq!(
            km.lookup(
                KeyCode::Char('r'),
                KeyModifiers::CONTROL | KeyModifiers::SHIFT
            ),
            Some(KeyAction::Refresh)
        );
    }

    #[test]
    fn no_duplicate_bindings() {
        let km = KeyMap::default_keymap();
        let mut seen = std::collections::HashSet::new();
        for kb in &km.bindings {
            assert!(
                seen.insert((kb.code, kb.modifiers)),
                "duplicate binding: {:?} {:?}",
                kb.code,
                kb.modifiers
            );
        }
    }
}
