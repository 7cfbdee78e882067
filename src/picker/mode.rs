use std::fmt;
use std::str::FromStr;

use super::result::Action;

/// Operating intent of one invocation, fixed for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Pick,
    Kill,
    Detach,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Pick => "pick",
            Mode::Kill => "kill",
            Mode::Detach => "detach",
        }
    }

    /// Only `pick` can open the create dialog.
    pub fn create_enabled(&self) -> bool {
        matches!(self, Mode::Pick)
    }

    /// Explicit detach/kill bindings are only honoured while picking.
    pub fn session_bindings_enabled(&self) -> bool {
        matches!(self, Mode::Pick)
    }

    /// Action emitted when the highlighted entry is confirmed.
    pub fn confirm_action(&self) -> Action {
        match self {
            Mode::Pick => Action::Attach,
            Mode::Kill => Action::Kill,
            Mode::Detach => Action::Detach,
        }
    }

    /// Kill and detach always act on the owning session, never a window.
    pub fn normalizes_to_session(&self) -> bool {
        matches!(self, Mode::Kill | Mode::Detach)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Mode::Pick => "SESSIONS",
            Mode::Kill => "KILL",
            Mode::Detach => "DETACH",
        }
    }

    pub fn help_text(&self) -> &'static str {
        match self {
            Mode::Pick => {
                "Enter attach  Ctrl-N new  Ctrl-D detach  Ctrl-X kill  Ctrl-R refresh  Esc cancel"
            }
            Mode::Kill => "Enter kill  Esc cancel",
            Mode::Detach => "Enter detach  Esc cancel",
        }
    }

    pub fn empty_message(&self) -> &'static str {
        match self {
            Mode::Pick => "No sessions found for this scope",
            Mode::Kill => "No sessions available to kill",
            Mode::Detach => "No attached sessions available",
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pick" => Ok(Mode::Pick),
            "kill" => Ok(Mode::Kill),
            "detach" => Ok(Mode::Detach),
            other => Err(format!(
                "unknown mode '{other}' (expected pick, kill or detach)"
            )),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
