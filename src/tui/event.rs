use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::picker::{Incoming, PickerEvent};

/// Wait up to `tick_rate` for a key press or a bracketed paste. Releases,
/// repeats and other events come back as ticks so the caller redraws (e.g.
/// after a resize).
pub fn poll(tick_rate: Duration) -> Result<Incoming> {
    if !event::poll(tick_rate)? {
        return Ok(Incoming::Tick);
    }
    Ok(match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            Incoming::Event(PickerEvent::Key(key))
        }
        Event::Paste(text) => Incoming::Event(PickerEvent::Paste(text)),
        _ => Incoming::Tick,
    })
}
