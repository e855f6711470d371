use std::iter;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};
use tilefold_engine::Board;

use crate::view::widgets::TileDisplay;

/// Spacing between neighbouring tiles, in terminal cells.
const TILE_GAP: u16 = 1;

#[derive(Debug)]
pub(crate) struct BoardDisplay<'a> {
    board: &'a Board,
    block: Option<BlockWidget<'a>>,
}

impl<'a> BoardDisplay<'a> {
    pub(crate) fn new(board: &'a Board) -> Self {
        Self { board, block: None }
    }

    pub(crate) fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    fn size(&self) -> u16 {
        u16::try_from(self.board.size()).unwrap_or(u16::MAX)
    }

    pub(crate) fn width(&self) -> u16 {
        let n = self.size();
        n * TileDisplay::width()
            + n.saturating_sub(1) * TILE_GAP
            + super::block_horizontal_margin(self.block.as_ref())
    }

    pub(crate) fn height(&self) -> u16 {
        let n = self.size();
        n * TileDisplay::height()
            + n.saturating_sub(1) * TILE_GAP
            + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let n = self.board.size();
        let row_constraints = (0..n).map(|_| Constraint::Length(TileDisplay::height()));
        let row_areas = Layout::vertical(row_constraints)
            .spacing(TILE_GAP)
            .split(area);

        for (row_area, row) in iter::zip(row_areas.iter(), self.board.rows()) {
            let col_constraints = (0..n).map(|_| Constraint::Length(TileDisplay::width()));
            let cell_areas = Layout::horizontal(col_constraints)
                .flex(Flex::Center)
                .spacing(TILE_GAP)
                .split(*row_area);

            for (cell_area, &value) in iter::zip(cell_areas.iter(), row) {
                TileDisplay::new(value).render(*cell_area, buf);
            }
        }
    }
}
