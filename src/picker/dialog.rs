use crossterm::event::{KeyCode, KeyModifiers};

pub const DIALOG_TITLE: &str = "NEW SESSION";
pub const DIALOG_PLACEHOLDER: &str = "new-session";

/// Hint line under the dialog title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogMessage {
    Prompt,
    NameRequired,
}

impl DialogMessage {
    pub fn text(&self) -> &'static str {
        match self {
            DialogMessage::Prompt => "Type a session name and press Enter",
            DialogMessage::NameRequired => "Session name cannot be empty",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, DialogMessage::NameRequired)
    }
}

/// Input buffer of the create-session dialog.
#[derive(Debug, Clone)]
pub struct CreateDialog {
    input: String,
    cursor: usize,
    message: DialogMessage,
}

impl Default for CreateDialog {
    fn default() -> Self {
        CreateDialog {
            input: String::new(),
            cursor: 0,
            message: DialogMessage::Prompt,
        }
    }
}

impl CreateDialog {
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn message(&self) -> DialogMessage {
        self.message
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Replace the whole buffer (renderers that own their own text widget).
    pub fn set_input(&mut self, value: String) {
        self.cursor = value.len();
        self.input = value;
        self.message = DialogMessage::Prompt;
    }

    /// Insert pasted text at the cursor. Line breaks and tabs become spaces so
    /// the input stays on one line; [`submit`](Self::submit) collapses the runs.
    pub fn paste(&mut self, text: &str) {
        let text: String = text
            .chars()
            .filter_map(|c| match c {
                '\t' | '\n' | '\r' => Some(' '),
                c if c.is_control() => None,
                c => Some(c),
            })
            .collect();
        self.cursor = self.cursor.min(self.input.len());
        self.input.insert_str(self.cursor, &text);
        self.cursor += text.len();
        self.message = DialogMessage::Prompt;
    }

    /// Offer a key to the editor. Returns `true` if it was consumed.
    pub fn edit(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        let consumed = apply_text_edit(&mut self.input, &mut self.cursor, code, modifiers);
        if consumed {
            self.message = DialogMessage::Prompt;
        }
        consumed
    }

    /// Normalized name, or `None` (and the validation message) when blank.
    pub fn submit(&mut self) -> Option<String> {
        let name = normalize_session_name(&self.input);
        if name.is_empty() {
            self.message = DialogMessage::NameRequired;
            return None;
        }
        Some(name)
    }
}

/// Collapse every whitespace run (tabs and newlines included) to one space and trim.
pub fn normalize_session_name(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

// ── Text editing helpers ──────────────────────────────────────────────

/// Find the byte offset of the previous word boundary (for word-left navigation).
pub fn word_boundary_left(s: &str, pos: usize) -> usize {
    let trimmed = s[..pos].trim_end();
    if trimmed.is_empty() {
        return 0;
    }
    match trimmed.char_indices().rev().find(|(_, c)| c.is_whitespace()) {
        Some((idx, ch)) => idx + ch.len_utf8(),
        None => 0,
    }
}

/// Find the byte offset of the next word boundary (for word-right navigation).
pub fn word_boundary_right(s: &str, pos: usize) -> usize {
    let after = &s[pos..];
    let Some(offset) = after.find(char::is_whitespace) else {
        return s.len();
    };
    match after[offset..].find(|c: char| !c.is_whitespace()) {
        None => s.len(),
        Some(word_start) => pos + offset + word_start,
    }
}

/// Apply standard line-editing shortcuts to `buf` with cursor tracking.
/// Returns `true` if the key event was consumed.
pub fn apply_text_edit(
    buf: &mut String,
    cursor: &mut usize,
    code: KeyCode,
    modifiers: KeyModifiers,
) -> bool {
    *cursor = (*cursor).min(buf.len());

    match code {
        // --- Cursor movement ---
        KeyCode::Left if modifiers.contains(KeyModifiers::ALT) => {
            *cursor = word_boundary_left(buf, *cursor);
            true
        }
        KeyCode::Left => {
            if let Some(ch) = buf[..*cursor].chars().next_back() {
                *cursor -= ch.len_utf8();
            }
            true
        }
        KeyCode::Right if modifiers.contains(KeyModifiers::ALT) => {
            *cursor = word_boundary_right(buf, *cursor);
            true
        }
        KeyCode::Right => {
            if let Some(ch) = buf[*cursor..].chars().next() {
                *cursor += ch.len_utf8();
            }
            true
        }
        KeyCode::Home => {
            *cursor = 0;
            true
        }
        KeyCode::End => {
            *cursor = buf.len();
            true
        }

        // --- Deletion ---
        KeyCode::Backspace if modifiers.contains(KeyModifiers::ALT) => {
            let new_pos = word_boundary_left(buf, *cursor);
            buf.drain(new_pos..*cursor);
            *cursor = new_pos;
            true
        }
        KeyCode::Char('w') if modifiers.contains(KeyModifiers::CONTROL) => {
            let new_pos = word_boundary_left(buf, *cursor);
            buf.drain(new_pos..*cursor);
            *cursor = new_pos;
            true
        }
        KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
            buf.drain(..*cursor);
            *cursor = 0;
            true
        }
        KeyCode::Backspace => {
            if let Some(ch) = buf[..*cursor].chars().next_back() {
                let new_pos = *cursor - ch.len_utf8();
                buf.drain(new_pos..*cursor);
                *cursor = new_pos;
            }
            true
        }
        KeyCode::Delete => {
            if let Some(ch) = buf[*cursor..].chars().next() {
                buf.drain(*cursor..*cursor + ch.len_utf8());
            }
            true
        }

        // --- Character insertion ---
        KeyCode::Char(c) if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            buf.insert(*cursor, c);
            *cursor += c.len_utf8();
            true
        }
        _ => false,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────
