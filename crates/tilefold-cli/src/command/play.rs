use crossterm::event::{Event, KeyCode};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Style},
    text::Text,
};
use tilefold_engine::{Board, Direction, GameSession, SessionState, SpawnSeed};

use crate::{tui, view::widgets::SessionDisplay};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Board dimension
    #[clap(long, default_value_t = Board::DEFAULT_SIZE)]
    size: usize,
    /// Spawn seed as a 32-character hex string (random when omitted)
    #[clap(long)]
    seed: Option<SpawnSeed>,
}

impl Default for PlayArg {
    fn default() -> Self {
        Self {
            size: Board::DEFAULT_SIZE,
            seed: None,
        }
    }
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg { size, seed } = arg;

    let session = match seed {
        Some(seed) => GameSession::with_seed(*size, *seed)?,
        None => GameSession::new(*size)?,
    };

    let mut app = PlayApp::new(session);
    tui::run(&mut app)?;
    Ok(())
}

#[derive(Debug)]
struct PlayApp {
    session: GameSession,
    is_exiting: bool,
}

impl PlayApp {
    fn new(session: GameSession) -> Self {
        Self {
            session,
            is_exiting: false,
        }
    }
}

impl tui::App for PlayApp {
    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_event(&mut self, event: &Event) {
        let is_playing = self.session.session_state().is_playing();

        if let Some(event) = event.as_key_event() {
            match event.code {
                KeyCode::Up if is_playing => self.session.advance(Direction::Up),
                KeyCode::Down if is_playing => self.session.advance(Direction::Down),
                KeyCode::Left if is_playing => self.session.advance(Direction::Left),
                KeyCode::Right if is_playing => self.session.advance(Direction::Right),
                KeyCode::Char('r') => self.session.reset(),
                KeyCode::Char('q') => self.is_exiting = true,
                _ => {}
            }
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let session_display = SessionDisplay::new(&self.session);
        let help_text = match self.session.session_state() {
            SessionState::Playing => "Controls: ← ↑ → ↓ (Slide) | R (Restart) | Q (Quit)",
            SessionState::GameOver => "Controls: R (Restart) | Q (Quit)",
        };
        let help_text = Text::from(help_text)
            .style(Style::default().fg(Color::DarkGray))
            .centered();

        let [main_area, help_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)])
                .areas::<2>(frame.area());
        frame.render_widget(session_display, main_area);
        frame.render_widget(help_text, help_area);
    }
}
