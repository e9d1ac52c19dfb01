use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Attribute, Print, ResetColor, SetAttribute, SetForegroundColor};
use ratatui::style::{Color, Modifier, Style};

/// When to emit ANSI styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn from_config_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "always" | "on" | "true" => ColorChoice::Always,
            "never" | "off" | "false" | "mono" => ColorChoice::Never,
            _ => ColorChoice::Auto,
        }
    }

    /// `Auto` colors only when the destination is a terminal.
    pub fn enabled(self, is_terminal: bool) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => is_terminal,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Palette {
    pub title: Style,
    pub section: Style,
    pub table_header: Style,
    pub border: Style,
    pub accent: Style,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            title: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            section: Style::default().fg(Color::Green),
            table_header: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            border: Style::default().fg(Color::DarkGray),
            accent: Style::default().fg(Color::Yellow),
        }
    }
}

/// Maps a ratatui color onto the crossterm color the crossterm backend would emit.
pub fn to_crossterm(color: Color) -> crossterm::style::Color {
    use crossterm::style::Color as C;
    match color {
        Color::Reset => C::Reset,
        Color::Black => C::Black,
        Color::Red => C::DarkRed,
        Color::Green => C::DarkGreen,
        Color::Yellow => C::DarkYellow,
        Color::Blue => C::DarkBlue,
        Color::Magenta => C::DarkMagenta,
        Color::Cyan => C::DarkCyan,
        Color::Gray => C::Grey,
        Color::DarkGray => C::DarkGrey,
        Color::LightRed => C::Red,
        Color::LightGreen => C::Green,
        Color::LightYellow => C::Yellow,
        Color::LightBlue => C::Blue,
        Color::LightMagenta => C::Magenta,
        Color::LightCyan => C::Cyan,
        Color::White => C::White,
        Color::Rgb(r, g, b) => C::Rgb { r, g, b },
        Color::Indexed(i) => C::AnsiValue(i),
    }
}

/// Switches the writer to `style`. A no-op for the default style.
pub fn apply_style<W: Write>(out: &mut W, style: Style) -> io::Result<()> {
    if let Some(fg) = style.fg {
        queue!(out, SetForegroundColor(to_crossterm(fg)))?;
    }
    if style.add_modifier.contains(Modifier::BOLD) {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

pub fn reset_style<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, ResetColor, SetAttribute(Attribute::Reset))
}

/// Writes `text` on its own line, styled when `color` is set.
pub fn write_styled_line<W: Write>(
    out: &mut W,
    text: &str,
    style: Style,
    color: bool,
) -> io::Result<()> {
    if color {
        apply_style(out, style)?;
        queue!(out, Print(text))?;
        reset_style(out)?;
    } else {
        out.write_all(text.as_bytes())?;
    }
    writeln!(out)
}
