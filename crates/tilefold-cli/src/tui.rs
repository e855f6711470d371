use std::io;

use crossterm::event::{self, Event};
use ratatui::Frame;

/// Trait for terminal applications driven by [`run`].
pub trait App {
    /// Returns whether the application should exit.
    fn should_exit(&self) -> bool;

    /// Handles one terminal event (key input, resize, ...).
    fn handle_event(&mut self, event: &Event);

    /// Draws the current state.
    fn draw(&self, frame: &mut Frame);
}

/// Runs the application until it asks to exit.
///
/// The game is purely input-driven, so the loop draws the current state and
/// then blocks on the next terminal event; one event, one redraw.
pub fn run<A: App>(app: &mut A) -> io::Result<()> {
    ratatui::run(|terminal| {
        while !app.should_exit() {
            terminal.draw(|frame| app.draw(frame))?;
            let event = event::read()?;
            app.handle_event(&event);
        }
        Ok(())
    })
}
