//! Session picker core: loading, mode policy, the selection state machine
//! and the write-once result protocol. Nothing in here touches the terminal.

pub mod dialog;
pub mod dispatch;
pub mod entry;
pub mod keymap;
pub mod mode;
pub mod result;
pub mod state;
pub mod view;

use anyhow::Result;

pub use dispatch::{Picker, PickerEvent};
pub use entry::{Entry, EntryKind};
pub use mode::Mode;
pub use result::{Action, ActionResult, ResultWriter};
pub use state::{Phase, SelectionState};
pub use view::PickerView;

/// What a renderer produced when asked for input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Incoming {
    Event(PickerEvent),
    /// Nothing to dispatch; redraw and ask again.
    Tick,
    /// The input source is gone.
    Closed,
}

/// Presentation collaborator: draws directives, forwards events, owns no logic.
pub trait Renderer {
    fn render(&mut self, view: &PickerView<'_>) -> Result<()>;
    fn next_input(&mut self) -> Result<Incoming>;
    /// Called once after the result has been written.
    fn shutdown(&mut self) -> Result<()>;
}

/// Drive `picker` with events from `renderer` until it emits a result.
///
/// The result is written through `writer` before the renderer is shut down.
/// Returns `None` if the input closed before anything was chosen.
pub fn run<R: Renderer>(
    picker: &mut Picker,
    renderer: &mut R,
    writer: &mut ResultWriter,
) -> Result<Option<ActionResult>> {
    loop {
        renderer.render(&picker.view())?;

        let event = match renderer.next_input()? {
            Incoming::Event(event) => event,
            Incoming::Tick => continue,
            Incoming::Closed => {
                tracing::warn!("input closed before a selection was made");
                return Ok(None);
            }
        };

        if let Some(result) = picker.dispatch(event) {
            writer.write(&result)?;
            renderer.shutdown()?;
            return Ok(Some(result));
        }
    }
}
