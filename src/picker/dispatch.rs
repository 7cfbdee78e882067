use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::dialog::CreateDialog;
use super::entry::Entry;
use super::keymap::{KeyAction, KeyMap};
use super::mode::Mode;
use super::result::{Action, ActionResult};
use super::state::{Phase, SelectionState};
use super::view::{BRAND, DialogView, PickerView, RowView};

/// Rows skipped by PageUp / PageDown.
const PAGE_SIZE: isize = 10;

/// Input delivered by the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    Key(KeyEvent),
    /// The renderer's list widget moved its highlight.
    SelectionChanged(usize),
    /// The renderer's list widget confirmed a row.
    SelectionConfirmed(usize),
    /// The renderer's text widget replaced the dialog input.
    TextChanged(String),
    /// The renderer's text widget submitted the dialog input.
    TextConfirmed,
    /// A bracketed paste; inserted into the dialog input at the cursor.
    Paste(String),
}

impl PickerEvent {
    pub fn key(code: KeyCode, modifiers: KeyModifiers) -> Self {
        PickerEvent::Key(KeyEvent::new(code, modifiers))
    }
}

/// The selection state machine: entries, mode, state and dialog for one run.
pub struct Picker {
    entries: Vec<Entry>,
    mode: Mode,
    keymap: KeyMap,
    state: SelectionState,
    dialog: CreateDialog,
}

impl Picker {
    /// Starts in Listing, or straight in the create dialog when picking from an empty list.
    pub fn new(entries: Vec<Entry>, mode: Mode) -> Self {
        let mut picker = Picker {
            entries,
            mode,
            keymap: KeyMap::default_keymap(),
            state: SelectionState::new(),
            dialog: CreateDialog::default(),
        };
        if picker.entries.is_empty() && mode.create_enabled() {
            picker.open_dialog();
        }
        picker
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn dialog(&self) -> &CreateDialog {
        &self.dialog
    }

    pub fn phase(&self) -> Phase {
        self.state.phase(self.entries.len())
    }

    pub fn highlighted(&self) -> Option<&Entry> {
        self.entries.get(self.state.current_index())
    }

    /// Feed one event. Returns the result on the single terminal transition;
    /// every event after that is ignored.
    pub fn dispatch(&mut self, event: PickerEvent) -> Option<ActionResult> {
        if self.state.terminated() {
            tracing::debug!("event after termination ignored: {:?}", event);
            return None;
        }

        let result = match event {
            PickerEvent::Key(key) => self.handle_key(key.code, key.modifiers),
            PickerEvent::SelectionChanged(index) => {
                if self.phase() == Phase::Listing {
                    self.state.select(index, self.entries.len());
                }
                None
            }
            PickerEvent::SelectionConfirmed(index) => {
                if self.phase() == Phase::Listing {
                    self.state.select(index, self.entries.len());
                    self.confirm_highlighted()
                } else {
                    None
                }
            }
            PickerEvent::TextChanged(value) => {
                if self.phase() == Phase::CreateDialogOpen {
                    self.dialog.set_input(value);
                }
                None
            }
            PickerEvent::Paste(text) => {
                if self.phase() == Phase::CreateDialogOpen {
                    self.dialog.paste(&text);
                }
                None
            }
            PickerEvent::TextConfirmed => {
                if self.phase() == Phase::CreateDialogOpen {
                    self.submit_dialog()
                } else {
                    None
                }
            }
        };

        let result = result?;
        if !self.state.terminate() {
            return None;
        }
        tracing::info!("picker finished with {}", result.action);
        Some(result)
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> Option<ActionResult> {
        let action = self.keymap.lookup(code, modifiers);

        // Global transitions
        match action {
            Some(KeyAction::Interrupt) => return Some(ActionResult::cancel()),
            Some(KeyAction::Cancel) => {
                if self.state.create_dialog_open() {
                    self.close_dialog();
                    return None;
                }
                return Some(ActionResult::cancel());
            }
            Some(KeyAction::NewSession) if self.mode.create_enabled() => {
                self.open_dialog();
                return None;
            }
            _ => {}
        }

        match self.phase() {
            Phase::CreateDialogOpen => {
                if action == Some(KeyAction::Confirm) {
                    return self.submit_dialog();
                }
                self.dialog.edit(code, modifiers);
                None
            }
            Phase::EmptyListing => {
                if action == Some(KeyAction::Confirm) && self.mode.create_enabled() {
                    self.open_dialog();
                }
                None
            }
            Phase::Listing => self.handle_listing(action?),
            Phase::Terminated => None,
        }
    }

    fn handle_listing(&mut self, action: KeyAction) -> Option<ActionResult> {
        let len = self.entries.len();
        match action {
            KeyAction::MoveUp => self.state.move_by(-1, len),
            KeyAction::MoveDown => self.state.move_by(1, len),
            KeyAction::PageUp => self.state.move_by(-PAGE_SIZE, len),
            KeyAction::PageDown => self.state.move_by(PAGE_SIZE, len),
            KeyAction::First => self.state.select(0, len),
            KeyAction::Last => self.state.select_last(len),
            KeyAction::Confirm => return self.confirm_highlighted(),
            KeyAction::Detach if self.mode.session_bindings_enabled() => {
                return self.session_action(Action::Detach);
            }
            KeyAction::Kill if self.mode.session_bindings_enabled() => {
                return self.session_action(Action::Kill);
            }
            KeyAction::Refresh => return Some(ActionResult::refresh()),
            _ => {}
        }
        None
    }

    fn confirm_highlighted(&self) -> Option<ActionResult> {
        let action = self.mode.confirm_action();
        if self.mode.normalizes_to_session() {
            return self.session_action(action);
        }
        let entry = self.highlighted()?;
        Some(ActionResult::for_entry(action, entry))
    }

    /// Act on the owning session of the highlighted entry.
    fn session_action(&self, action: Action) -> Option<ActionResult> {
        let entry = self.highlighted()?.owning_session();
        Some(ActionResult::for_entry(action, &entry))
    }

    fn submit_dialog(&mut self) -> Option<ActionResult> {
        let Some(name) = self.dialog.submit() else {
            tracing::debug!("create dialog rejected an empty name");
            return None;
        };
        let entry = Entry::new_session(&name);
        Some(ActionResult::for_entry(Action::New, &entry))
    }

    fn open_dialog(&mut self) {
        if self.state.create_dialog_open() {
            return;
        }
        self.dialog.reset();
        self.state.set_create_dialog_open(true);
        tracing::debug!("create dialog opened");
    }

    fn close_dialog(&mut self) {
        self.state.set_create_dialog_open(false);
        tracing::debug!("create dialog closed");
    }

    /// Display directives for the current state.
    pub fn view(&self) -> PickerView<'_> {
        let has_entries = !self.entries.is_empty();
        PickerView {
            brand: BRAND,
            help: self.mode.help_text(),
            title: has_entries.then_some(self.mode.title()),
            rows: self
                .entries
                .iter()
                .map(|e| RowView {
                    label: &e.label,
                    description: e.description(),
                })
                .collect(),
            selected: has_entries.then_some(self.state.current_index()),
            empty_message: (!has_entries).then_some(self.mode.empty_message()),
            dialog: self
                .state
                .create_dialog_open()
                .then(|| DialogView::from_dialog(&self.dialog)),
        }
    }
}
