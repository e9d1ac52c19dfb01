use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::Print;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::symbols::border;
use ratatui::widgets::{Block, Padding, Row, Table, Widget};
use unicode_width::UnicodeWidthStr;

use super::theme::{Palette, apply_style, reset_style};

const ASCII_BORDER: border::Set = border::Set {
    top_left: "+",
    top_right: "+",
    bottom_left: "+",
    bottom_right: "+",
    vertical_left: "|",
    vertical_right: "|",
    horizontal_top: "-",
    horizontal_bottom: "-",
};

const COLUMN_SPACING: u16 = 3;
const MAX_COLUMN_WIDTH: usize = 512;

/// Fixed header row plus any number of data rows.
pub struct TextTable {
    headers: Vec<&'static str>,
    rows: Vec<Vec<String>>,
}

impl TextTable {
    pub fn new(headers: &[&'static str]) -> Self {
        Self {
            headers: headers.to_vec(),
            rows: Vec::new(),
        }
    }

    /// Missing cells are left blank, extra cells are dropped.
    pub fn push_row(&mut self, mut cells: Vec<String>) {
        cells.resize(self.headers.len(), String::new());
        self.rows.push(cells);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn column_widths(&self) -> Vec<u16> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                let widest = self
                    .rows
                    .iter()
                    .map(|row| row[i].width())
                    .fold(header.width(), usize::max);
                widest.min(MAX_COLUMN_WIDTH) as u16
            })
            .collect()
    }

    /// Lays the table out in an off-screen buffer sized exactly to its content.
    pub fn to_buffer(&self, palette: &Palette) -> Buffer {
        let widths = self.column_widths();
        let gaps = COLUMN_SPACING * widths.len().saturating_sub(1) as u16;
        // Borders plus one column of padding on each side.
        let width = widths.iter().sum::<u16>() + gaps + 4;
        // Borders, header and the rule under it.
        let height = self.rows.len().min(u16::MAX as usize - 4) as u16 + 4;
        let area = Rect::new(0, 0, width, height);

        let header = Row::new(self.headers.iter().copied())
            .style(palette.table_header)
            .bottom_margin(1);
        let rows = self
            .rows
            .iter()
            .map(|cells| Row::new(cells.iter().cloned()));
        let table = Table::new(rows, widths.iter().map(|w| Constraint::Length(*w)))
            .header(header)
            .column_spacing(COLUMN_SPACING)
            .block(
                Block::bordered()
                    .border_set(ASCII_BORDER)
                    .border_style(palette.border)
                    .padding(Padding::horizontal(1)),
            );

        let mut buf = Buffer::empty(area);
        table.render(area, &mut buf);
        draw_header_rule(&mut buf, palette.border);
        buf
    }

    pub fn write<W: Write>(&self, out: &mut W, palette: &Palette, color: bool) -> io::Result<()> {
        write_buffer(out, &self.to_buffer(palette), color)
    }
}

fn draw_header_rule(buf: &mut Buffer, style: Style) {
    let area = buf.area;
    if area.height < 4 || area.width < 2 {
        return;
    }
    let y = 2;
    for x in 0..area.width {
        let symbol = if x == 0 || x + 1 == area.width { "+" } else { "-" };
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_symbol(symbol).set_style(style);
        }
    }
}

/// Streams a buffer line by line, emitting ANSI styling when `color` is set.
pub fn write_buffer<W: Write>(out: &mut W, buf: &Buffer, color: bool) -> io::Result<()> {
    let area = buf.area;
    for y in area.top()..area.bottom() {
        let mut current: Option<Style> = None;
        let mut skip = 0;
        for x in area.left()..area.right() {
            let Some(cell) = buf.cell((x, y)) else {
                continue;
            };
            // Cells shadowed by a preceding wide character.
            if skip > 0 {
                skip -= 1;
                continue;
            }
            skip = cell.symbol().width().saturating_sub(1);
            if color {
                let style = Style::default()
                    .fg(cell.fg)
                    .add_modifier(cell.modifier & Modifier::BOLD);
                if current != Some(style) {
                    reset_style(out)?;
                    apply_style(out, style)?;
                    current = Some(style);
                }
            }
            queue!(out, Print(cell.symbol()))?;
        }
        if color {
            reset_style(out)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Plain-text rendering of a buffer, one line per row.
#[cfg(test)]
pub(crate) fn buffer_to_string(buf: &Buffer) -> String {
    let mut out = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_buffer(&mut out, buf, false);
    String::from_utf8_lossy(&out).into_owned()
}
