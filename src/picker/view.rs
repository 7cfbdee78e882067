//! Display directives handed to the renderer each frame.

use super::dialog::{CreateDialog, DIALOG_PLACEHOLDER, DIALOG_TITLE};

pub const BRAND: &str = "SUPERMUX";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView<'a> {
    pub label: &'a str,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogView<'a> {
    pub title: &'static str,
    pub message: &'static str,
    pub is_error: bool,
    pub input: &'a str,
    pub cursor: usize,
    pub placeholder: &'static str,
}

impl<'a> DialogView<'a> {
    pub fn from_dialog(dialog: &'a CreateDialog) -> Self {
        DialogView {
            title: DIALOG_TITLE,
            message: dialog.message().text(),
            is_error: dialog.message().is_error(),
            input: dialog.input(),
            cursor: dialog.cursor(),
            placeholder: DIALOG_PLACEHOLDER,
        }
    }
}

/// Everything the renderer needs to draw one frame. Holds no logic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerView<'a> {
    pub brand: &'static str,
    pub help: &'static str,
    /// List heading; `None` when there is nothing to list.
    pub title: Option<&'static str>,
    pub rows: Vec<RowView<'a>>,
    pub selected: Option<usize>,
    pub empty_message: Option<&'static str>,
    pub dialog: Option<DialogView<'a>>,
}
