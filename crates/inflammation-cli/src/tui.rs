//! Minimal terminal UI runtime.
//!
//! Redraws after every terminal event and hands the event to the [`App`]
//! until it asks to exit.

use crossterm::event::{self, Event};
use ratatui::Frame;

/// Trait for TUI applications run by [`run`].
pub trait App {
    /// Returns whether the application should exit.
    fn should_exit(&self) -> bool;

    /// Handles terminal events (key input, mouse, resize, etc.).
    fn handle_event(&mut self, event: &Event);

    /// Draws the screen.
    fn draw(&self, frame: &mut Frame);
}

/// Runs `app` on the terminal until [`App::should_exit`] returns true.
///
/// The terminal is restored on return, including when an error occurs.
pub fn run<A>(app: &mut A) -> anyhow::Result<()>
where
    A: App,
{
    ratatui::run(|terminal| {
        while !app.should_exit() {
            terminal.draw(|frame| app.draw(frame))?;
            let event = event::read()?;
            app.handle_event(&event);
        }
        Ok(())
    })
}
