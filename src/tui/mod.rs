mod event;
mod form;
mod renderer;
pub mod theme;
mod ui;

use anyhow::Result;

use crate::picker::{self, ActionResult, Picker, Renderer, ResultWriter};

pub use renderer::TerminalRenderer;
pub use theme::Theme;

/// Take over the terminal and run the picker until it reports a result.
pub fn run(
    picker: &mut Picker,
    writer: &mut ResultWriter,
    theme: Theme,
) -> Result<Option<ActionResult>> {
    let mut renderer = TerminalRenderer::init(theme)?;
    let result = picker::run(picker, &mut renderer, writer);
    renderer.shutdown()?;
    result
}
