use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Whether a row targets a whole session or one window inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Session,
    Window,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Session => "S",
            EntryKind::Window => "W",
        }
    }

    /// Anything other than `W` (including an empty column) is a session.
    pub fn from_field(s: &str) -> Self {
        match s {
            "W" => EntryKind::Window,
            _ => EntryKind::Session,
        }
    }
}

/// One selectable row, immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub label: String,
    pub session: String,
    pub kind: EntryKind,
    pub win: String,
    pub logical: String,
}

impl Entry {
    /// Parse one tab-separated record:
    /// `label \t session \t <reserved> \t kind \t win \t logical`.
    ///
    /// Missing trailing columns fall back to their defaults; column 2 is skipped.
    pub fn parse_line(line: &str) -> Self {
        let mut fields = line.split('\t');
        let label = fields.next().unwrap_or_default().to_string();
        let session = fields.next().unwrap_or_default().to_string();
        let _reserved = fields.next();
        let kind = fields.next().map_or(EntryKind::Session, EntryKind::from_field);
        let win = fields.next().unwrap_or("-").to_string();
        let logical = fields.next().unwrap_or_default().to_string();

        Entry {
            label,
            session,
            kind,
            win,
            logical,
        }
    }

    /// A fresh session entry named by the create dialog.
    pub fn new_session(name: &str) -> Self {
        Entry {
            label: name.to_string(),
            session: name.to_string(),
            kind: EntryKind::Session,
            win: "-".to_string(),
            logical: name.to_string(),
        }
    }

    /// The same entry retargeted at its owning session.
    pub fn owning_session(&self) -> Self {
        Entry {
            kind: EntryKind::Session,
            win: "-".to_string(),
            ..self.clone()
        }
    }

    /// Secondary text shown under the label.
    pub fn description(&self) -> String {
        match self.kind {
            EntryKind::Window => format!("{} window", self.logical),
            EntryKind::Session => format!("{} session", self.logical),
        }
    }
}

/// Parse newline-separated records in file order, skipping blank lines.
/// Accepts both `\n` and `\r\n` line endings.
pub fn parse(raw: &str) -> Vec<Entry> {
    raw.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.is_empty())
        .map(Entry::parse_line)
        .collect()
}

/// Lowercase and trim a filter query. An empty result means "no filter".
pub fn normalize_query(query: &str) -> String {
    query.to_lowercase().trim().to_string()
}

/// Keep entries whose label contains `query`, case-insensitively, preserving order.
pub fn filter(entries: Vec<Entry>, query: &str) -> Vec<Entry> {
    let query = normalize_query(query);
    if query.is_empty() {
        return entries;
    }
    entries
        .into_iter()
        .filter(|e| e.label.to_lowercase().contains(&query))
        .collect()
}

/// Read the data file and apply the optional query filter. Invalid UTF-8 is
/// replaced rather than rejected so one bad record can't hide the rest.
pub fn load(path: &Path, query: &str) -> Result<Vec<Entry>> {
    let bytes =
        fs::read(path).with_context(|| format!("failed to read data file {}", path.display()))?;
    let raw = String::from_utf8_lossy(&bytes);
    let all = parse(&raw);
    let total = all.len();
    let entries = filter(all, query);
    tracing::info!(
        "loaded {} entries from {} ({} after filter)",
        total,
        path.display(),
        entries.len()
    );
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|e| e.label.as_str()).collect()
    }

    #[test]
    fn parse_line_full_record() {
        let e = Entry::parse_line("api: shell\tapi\tignored\tW\t2\tapi");
        assert_eq!(e.label, "api: shell");
        assert_eq!(e.session, "api");
        assert_eq!(e.kind, EntryKind::Window);
        assert_eq!(e.win, "2");
        assert_eq!(e.logical, "api");
    }

    #[test]
    fn parse_line_short_record_uses_defaults() {
        let e = Entry::parse_line("Foo\tfoo");
        assert_eq!(e.session, "foo");
        assert_eq!(e.kind, EntryKind::Session);
        assert_eq!(e.win, "-");
        assert_eq!(e.logical, "");
    }

    #[test]
    fn parse_line_label_only() {
        let e = Entry::parse_line("lonely");
        assert_eq!(e.label, "lonely");
        assert_eq!(e.session, "");
        assert_eq!(e.win, "-");
    }

    #[test]
    fn unrecognized_kind_is_session() {
        assert_eq!(EntryKind::from_field("X"), EntryKind::Session);
        assert_eq!(EntryKind::from_field(""), EntryKind::Session);
        assert_eq!(EntryKind::from_field("w"), EntryKind::Session);
        assert_eq!(EntryKind::from_field("W"), EntryKind::Window);
    }

    #[test]
    fn parse_skips_blank_lines_and_handles_crlf() {
        let raw = "A\ta\t\tS\t-\ta\r\n\r\nB\tb\t\tW\t1\tb\n\n";
        let entries = parse(raw);
        assert_eq!(labels(&entries), vec!["A", "B"]);
        assert_eq!(entries[0].logical, "a");
        assert_eq!(entries[1].win, "1");
    }

    #[test]
    fn parse_empty_input() {
        assert!(parse("").is_empty());
        assert!(parse("\n\r\n").is_empty());
    }

    #[test]
    fn filter_empty_query_keeps_everything() {
        let entries = parse("One\t1\nTwo\t2\n");
        assert_eq!(filter(entries.clone(), ""), entries);
        assert_eq!(filter(entries.clone(), "   "), entries);
    }

    #[test]
    fn filter_is_case_insensitive_and_order_preserving() {
        let entries = parse("Alpha\ta\nbeta\tb\nALPHABET\tc\n");
        let kept = filter(entries, "  ALPHA ");
        assert_eq!(labels(&kept), vec!["Alpha", "ALPHABET"]);
    }

    #[test]
    fn filter_no_match() {
        let entries = parse("Alpha\ta\n");
        assert!(filter(entries, "zzz").is_empty());
    }

    #[test]
    fn owning_session_drops_window() {
        let e = Entry::parse_line("Foo\tfoo\t\tW\t3\tfoo");
        let s = e.owning_session();
        assert_eq!(s.kind, EntryKind::Session);
        assert_eq!(s.win, "-");
        assert_eq!(s.session, "foo");
        assert_eq!(s.label, "Foo");
    }

    #[test]
    fn description_by_kind() {
        let w = Entry::parse_line("x\tx\t\tW\t1\tproj");
        let s = Entry::parse_line("x\tx\t\tS\t-\tproj");
        assert_eq!(w.description(), "proj window");
        assert_eq!(s.description(), "proj session");
    }

    #[test]
    fn load_reads_and_filters() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.tsv");
        fs::write(&path, "Foo\tfoo\t\tS\t-\tfoo\nBar\tbar\t\tS\t-\tbar\n").unwrap();
        let entries = load(&path, "foo").unwrap();
        assert_eq!(labels(&entries), vec!["Foo"]);
    }

    #[test]
    fn load_tolerates_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.tsv");
        let mut data = b"Good\tgood\t\tS\t-\tgood\n".to_vec();
        data.extend_from_slice(b"caf\xe9\tcafe\t\tS\t-\tcafe\n");
        fs::write(&path, data).unwrap();

        let entries = load(&path, "").unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].session, "good");
        assert_eq!(entries[1].label, "caf\u{fffd}");
        assert_eq!(entries[1].session, "cafe");
    }

    #[test]
    fn load_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("nope.tsv"), "").unwrap_err();
        assert!(err.to_string().contains("failed to read data file"));
    }
}
