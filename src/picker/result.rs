use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::entry::{Entry, EntryKind};

/// What the caller should do once the picker exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Attach,
    Detach,
    Kill,
    New,
    Cancel,
    Refresh,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Attach => "attach",
            Action::Detach => "detach",
            Action::Kill => "kill",
            Action::New => "new",
            Action::Cancel => "cancel",
            Action::Refresh => "refresh",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single value reported back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResult {
    pub action: Action,
    pub session: String,
    pub win: String,
}

impl ActionResult {
    /// Act on `entry`. The window id is only carried for window entries.
    pub fn for_entry(action: Action, entry: &Entry) -> Self {
        let win = match entry.kind {
            EntryKind::Window => entry.win.clone(),
            EntryKind::Session => "-".to_string(),
        };
        ActionResult {
            action,
            session: entry.session.clone(),
            win,
        }
    }

    /// Session and win stay empty, unlike the `-` placeholder of targeted actions.
    pub fn cancel() -> Self {
        Self::untargeted(Action::Cancel)
    }

    pub fn refresh() -> Self {
        Self::untargeted(Action::Refresh)
    }

    fn untargeted(action: Action) -> Self {
        ActionResult {
            action,
            session: String::new(),
            win: String::new(),
        }
    }

    /// `action \t session \t win \n`
    pub fn to_line(&self) -> String {
        format!("{}\t{}\t{}\n", self.action, self.session, self.win)
    }
}

/// Writes the result file at most once per run.
#[derive(Debug)]
pub struct ResultWriter {
    path: PathBuf,
    written: bool,
}

impl ResultWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ResultWriter {
            path: path.into(),
            written: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_written(&self) -> bool {
        self.written
    }

    /// Persist `result`. Returns `Ok(false)` without touching the file if a
    /// result was already written; the flag flips before the I/O so a failed
    /// write still consumes the single slot.
    pub fn write(&mut self, result: &ActionResult) -> Result<bool> {
        if self.written {
            tracing::debug!("result already written, ignoring {}", result.action);
            return Ok(false);
        }
        self.written = true;

        fs::write(&self.path, result.to_line())
            .with_context(|| format!("failed to write result file {}", self.path.display()))?;
        tracing::info!(
            "wrote result {} session={:?} win={:?}",
            result.action,
            result.session,
            result.win
        );
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_entry_uses_dash_win() {
        let e = Entry::parse_line("Foo\tfoo\t\tS\t7\tfoo");
        let r = ActionResult::for_entry(Action::Attach, &e);
        assert_eq!(r.to_line(), "attach\tfoo\t-\n");
    }

    #[test]
    fn window_entry_keeps_win() {
        let e = Entry::parse_line("Foo\tfoo\t\tW\t1\tfoo");
        let r = ActionResult::for_entry(Action::Attach, &e);
        assert_eq!(r.to_line(), "attach\tfoo\t1\n");
    }

    #[test]
    fn cancel_and_refresh_are_empty() {
        assert_eq!(ActionResult::cancel().to_line(), "cancel\t\t\n");
        assert_eq!(ActionResult::refresh().to_line(), "refresh\t\t\n");
    }

    #[test]
    fn writer_writes_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result");
        let mut writer = ResultWriter::new(&path);

        assert!(!writer.is_written());
        assert!(writer.write(&ActionResult::cancel()).unwrap());
        assert!(writer.is_written());

        let e = Entry::parse_line("Foo\tfoo");
        assert!(!writer.write(&ActionResult::for_entry(Action::Kill, &e)).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "cancel\t\t\n");
    }

    #[test]
    fn writer_does_not_create_file_until_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result");
        let writer = ResultWriter::new(&path);
        assert_eq!(writer.path(), path.as_path());
        assert!(!path.exists());
    }

    #[test]
    fn failed_write_still_consumes_slot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("result");
        let mut writer = ResultWriter::new(&path);

        assert!(writer.write(&ActionResult::cancel()).is_err());
        assert!(writer.is_written());
        assert!(!writer.write(&ActionResult::cancel()).unwrap());
    }
}
