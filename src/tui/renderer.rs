use std::time::Duration;

use anyhow::Result;
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::{DefaultTerminal, widgets::ListState};

use crate::picker::{Incoming, PickerView, Renderer};

use super::event;
use super::theme::Theme;
use super::ui;

/// Draws the picker on the real terminal and forwards key presses and pastes.
pub struct TerminalRenderer {
    terminal: DefaultTerminal,
    theme: Theme,
    list_state: ListState,
    tick_rate: Duration,
    active: bool,
}

impl TerminalRenderer {
    /// Take over the terminal. Bracketed paste is enabled so a pasted line
    /// break arrives as text instead of an Enter press.
    pub fn init(theme: Theme) -> Result<Self> {
        let renderer = Self::new(ratatui::init(), theme);
        execute!(std::io::stdout(), EnableBracketedPaste)?;
        Ok(renderer)
    }

    pub fn new(terminal: DefaultTerminal, theme: Theme) -> Self {
        TerminalRenderer {
            terminal,
            theme,
            list_state: ListState::default(),
            tick_rate: Duration::from_millis(250),
            active: true,
        }
    }
}

impl Renderer for TerminalRenderer {
    fn render(&mut self, view: &PickerView<'_>) -> Result<()> {
        self.terminal
            .draw(|frame| ui::draw(frame, view, &self.theme, &mut self.list_state))?;
        Ok(())
    }

    fn next_input(&mut self) -> Result<Incoming> {
        event::poll(self.tick_rate)
    }

    fn shutdown(&mut self) -> Result<()> {
        if self.active {
            self.active = false;
            let _ = execute!(std::io::stdout(), DisableBracketedPaste);
            ratatui::restore();
        }
        Ok(())
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        // Infallible; the Result only satisfies the Renderer signature.
        let _ = self.shutdown();
    }
}
