use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    text::{Line, Text},
    widgets::{Block as BlockWidget, Clear, Padding, Paragraph, Widget},
};
use tilefold_engine::{GameSession, SessionState};

use crate::view::widgets::{BoardDisplay, StatsDisplay};

#[derive(Debug)]
pub(crate) struct SessionDisplay<'a> {
    session: &'a GameSession,
}

impl<'a> SessionDisplay<'a> {
    pub(crate) fn new(session: &'a GameSession) -> Self {
        Self { session }
    }
}

impl Widget for SessionDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &SessionDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = match self.session.session_state() {
            SessionState::Playing => Style::default().fg(Color::White),
            SessionState::GameOver => Style::default().fg(Color::Red),
        };

        let board = BoardDisplay::new(self.session.board())
            .block(BlockWidget::bordered().border_style(border_style));
        let stats = StatsDisplay::new(self.session).block(
            BlockWidget::bordered()
                .title(Line::from("STATS").centered())
                .padding(Padding::symmetric(1, 0))
                .border_style(border_style),
        );

        let [stats_column, board_column] = Layout::horizontal([
            Constraint::Length(stats.width()),
            Constraint::Length(board.width()),
        ])
        .flex(Flex::Center)
        .spacing(1)
        .areas::<2>(area);

        let [stats_area] =
            Layout::vertical([Constraint::Length(stats.height())]).areas::<1>(stats_column);
        let [board_area] = Layout::vertical([Constraint::Length(board.height())])
            .flex(Flex::Center)
            .areas::<1>(board_column);

        stats.render(stats_area, buf);
        board.render(board_area, buf);

        if self.session.session_state().is_game_over() {
            render_game_over_popup(border_style, board_area, buf);
        }
    }
}

fn render_game_over_popup(border_style: Style, board_area: Rect, buf: &mut Buffer) {
    let text = Text::from(vec![
        Line::from("GAME OVER").centered(),
        Line::from("press R to restart").centered(),
    ]);
    let width = 24;
    let height = 4;

    let [popup_area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas::<1>(board_area);
    let [popup_area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas::<1>(popup_area);

    Clear.render(popup_area, buf);
    let block = BlockWidget::bordered().border_style(border_style);
    let inner = block.inner(popup_area);
    block.render(popup_area, buf);
    Paragraph::new(text).centered().render(inner, buf);
}
