use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Paragraph, Widget},
};

const TILE_WIDTH: u16 = 7;
const TILE_HEIGHT: u16 = 3;

const LIGHT_TEXT: Color = Color::Rgb(0xf9, 0xf6, 0xf2);
const DARK_TEXT: Color = Color::Rgb(0x77, 0x6e, 0x65);

/// Background and foreground for one tile value: warm beige for small
/// tiles, shading into orange and gold as values double.
fn tile_style(value: u32) -> Style {
    let empty = Color::Rgb(0x9e, 0x94, 0x8a);
    let (bg, fg) = match value {
        0 => (empty, empty),
        2 => (Color::Rgb(0xee, 0xe4, 0xda), DARK_TEXT),
        4 => (Color::Rgb(0xed, 0xe0, 0xc8), DARK_TEXT),
        8 => (Color::Rgb(0xf2, 0xb1, 0x79), LIGHT_TEXT),
        16 => (Color::Rgb(0xf5, 0x95, 0x63), LIGHT_TEXT),
        32 => (Color::Rgb(0xf6, 0x7c, 0x5f), LIGHT_TEXT),
        64 => (Color::Rgb(0xf6, 0x5e, 0x3b), LIGHT_TEXT),
        128 => (Color::Rgb(0xed, 0xcf, 0x72), LIGHT_TEXT),
        256 => (Color::Rgb(0xed, 0xcc, 0x61), LIGHT_TEXT),
        512 => (Color::Rgb(0xed, 0xc8, 0x50), LIGHT_TEXT),
        1024 => (Color::Rgb(0xed, 0xc5, 0x3f), LIGHT_TEXT),
        2048 => (Color::Rgb(0xed, 0xc2, 0x2e), LIGHT_TEXT),
        _ => (Color::Rgb(0x3c, 0x3a, 0x33), LIGHT_TEXT),
    };
    Style::default().bg(bg).fg(fg)
}

/// A single board cell.
#[derive(Debug)]
pub(crate) struct TileDisplay {
    value: u32,
}

impl TileDisplay {
    pub(crate) fn new(value: u32) -> Self {
        Self { value }
    }

    pub(crate) fn width() -> u16 {
        TILE_WIDTH
    }

    pub(crate) fn height() -> u16 {
        TILE_HEIGHT
    }
}

impl Widget for TileDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &TileDisplay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Pad the label down to the vertical middle of the cell.
        let mut lines = vec![Line::default(); usize::from(area.height.saturating_sub(1) / 2)];
        if self.value != 0 {
            lines.push(Line::from(self.value.to_string()));
        }
        Paragraph::new(lines)
            .style(tile_style(self.value))
            .centered()
            .render(area, buf);
    }
}
