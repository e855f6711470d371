use ratatui::{layout::Rect, widgets::Block};

pub(crate) use self::{
    board_display::BoardDisplay, session_display::SessionDisplay, stats_display::StatsDisplay,
    tile_display::TileDisplay,
};

mod board_display;
mod session_display;
mod stats_display;
mod tile_display;

fn block_horizontal_margin(block: Option<&Block<'_>>) -> u16 {
    block.map_or(0, |block| {
        let area = Rect::new(0, 0, u16::MAX, u16::MAX);
        u16::MAX - block.inner(area).width
    })
}

fn block_vertical_margin(block: Option<&Block<'_>>) -> u16 {
    block.map_or(0, |block| {
        let area = Rect::new(0, 0, u16::MAX, u16::MAX);
        u16::MAX - block.inner(area).height
    })
}
