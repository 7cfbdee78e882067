use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use crate::config::ColorMode;

/// Semantic colour theme for the picker.
///
/// Every colour used by the renderer is stored here so the user can
/// override any of them via `[theme]` in `picker.toml`.
#[derive(Debug, Clone)]
pub struct Theme {
    // ── Text ──────────────────────────────────────────────────
    pub brand: Color,
    pub text_primary: Color,
    pub text_muted: Color,
    pub text_error: Color,

    // ── Accents ───────────────────────────────────────────────
    pub accent_primary: Color,

    // ── Panels ────────────────────────────────────────────────
    pub frame_background: Color,
    pub panel_base: Color,
    pub panel_raised: Color,

    // ── Selection ─────────────────────────────────────────────
    pub selection_shade: Color,
    pub selection_shade_focus: Color,

    /// Paint panel backgrounds. Off for plain ANSI terminals.
    pub shaded_backgrounds: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            brand: Color::Rgb(0xff, 0x7f, 0x73),
            text_primary: Color::Rgb(0xc8, 0xd4, 0xe4),
            text_muted: Color::Rgb(0x86, 0x98, 0xaf),
            text_error: Color::Rgb(0xff, 0x8b, 0x7e),

            accent_primary: Color::Rgb(0xff, 0x8b, 0x7e),

            frame_background: Color::Rgb(0x0d, 0x12, 0x18),
            panel_base: Color::Rgb(0x11, 0x18, 0x21),
            panel_raised: Color::Rgb(0x18, 0x22, 0x2d),

            selection_shade: Color::Rgb(0x22, 0x31, 0x42),
            selection_shade_focus: Color::Rgb(0x2b, 0x3e, 0x52),

            shaded_backgrounds: true,
        }
    }
}

impl Theme {
    /// Base style for a panel, with its background only when shading is on.
    pub fn panel(&self, background: Color) -> Style {
        if self.shaded_backgrounds {
            Style::default().bg(background)
        } else {
            Style::default()
        }
    }

    pub fn brand_style(&self) -> Style {
        Style::default()
            .fg(self.brand)
            .add_modifier(Modifier::BOLD)
    }

    pub fn heading_style(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    pub fn row_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Highlighted row: accent text, shaded background when available.
    pub fn selected_row_style(&self) -> Style {
        let style = Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD);
        if self.shaded_backgrounds {
            style.bg(self.selection_shade_focus)
        } else {
            style.add_modifier(Modifier::REVERSED)
        }
    }

    pub fn selected_description_style(&self) -> Style {
        let style = Style::default().fg(self.text_primary);
        if self.shaded_backgrounds {
            style.bg(self.selection_shade)
        } else {
            style
        }
    }

    pub fn dialog_message_style(&self, is_error: bool) -> Style {
        if is_error {
            Style::default().fg(self.text_error)
        } else {
            self.muted_style()
        }
    }
}

// ── Config deserialization ────────────────────────────────────────────

/// All-optional mirror of [`Theme`] for the `[theme]` section.
///
/// Only `Some` fields override the default; everything else keeps its default.
#[derive(Debug, Default, Deserialize, Clone)]
pub struct ThemeConfig {
    pub brand: Option<String>,
    pub text_primary: Option<String>,
    pub text_muted: Option<String>,
    pub text_error: Option<String>,

    pub accent_primary: Option<String>,

    pub frame_background: Option<String>,
    pub panel_base: Option<String>,
    pub panel_raised: Option<String>,

    pub selection_shade: Option<String>,
    pub selection_shade_focus: Option<String>,
}

/// Parse a colour string into a ratatui `Color`.
///
/// Supports `"#rrggbb"`, `"rgb(R,G,B)"` and named colours
/// (`"cyan"`, `"red"`, `"dark_gray"`, etc.).
fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }

    if let Some(inner) = s.strip_prefix("rgb(").and_then(|r| r.strip_suffix(')')) {
        let parts: Vec<&str> = inner.split(',').collect();
        if parts.len() == 3 {
            let r = parts[0].trim().parse::<u8>().ok()?;
            let g = parts[1].trim().parse::<u8>().ok()?;
            let b = parts[2].trim().parse::<u8>().ok()?;
            return Some(Color::Rgb(r, g, b));
        }
        return None;
    }

    // Named colours (case-insensitive, with underscore tolerance)
    let lower = s.to_lowercase().replace('-', "_");
    match lower.as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "dark_gray" | "dark_grey" | "darkgray" | "darkgrey" => Some(Color::DarkGray),
        "light_red" | "lightred" => Some(Color::LightRed),
        "light_green" | "lightgreen" => Some(Color::LightGreen),
        "light_yellow" | "lightyellow" => Some(Color::LightYellow),
        "light_blue" | "lightblue" => Some(Color::LightBlue),
        "light_magenta" | "lightmagenta" => Some(Color::LightMagenta),
        "light_cyan" | "lightcyan" => Some(Color::LightCyan),
        "white" => Some(Color::White),
        _ => None,
    }
}

/// Apply an optional config field: if the string parses to a valid colour,
/// overwrite `target`.
fn apply(target: &mut Color, source: Option<&String>) {
    if let Some(s) = source {
        match parse_color(s) {
            Some(color) => *target = color,
            None => tracing::warn!("ignoring unparseable theme colour {:?}", s),
        }
    }
}

impl ThemeConfig {
    /// Build a `Theme` starting from defaults, overriding any fields that were
    /// set in the config file.
    pub fn build(&self, color_mode: ColorMode) -> Theme {
        let mut t = Theme::default();

        apply(&mut t.brand, self.brand.as_ref());
        apply(&mut t.text_primary, self.text_primary.as_ref());
        apply(&mut t.text_muted, self.text_muted.as_ref());
        apply(&mut t.text_error, self.text_error.as_ref());
        apply(&mut t.accent_primary, self.accent_primary.as_ref());
        apply(&mut t.frame_background, self.frame_background.as_ref());
        apply(&mut t.panel_base, self.panel_base.as_ref());
        apply(&mut t.panel_raised, self.panel_raised.as_ref());
        apply(&mut t.selection_shade, self.selection_shade.as_ref());
        apply(
            &mut t.selection_shade_focus,
            self.selection_shade_focus.as_ref(),
        );

        t.shaded_backgrounds = color_mode.shaded_backgrounds();
        t
    }
}
