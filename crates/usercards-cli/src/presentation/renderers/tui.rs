//! TUI Renderer for the browse command
//!
//! Owns the terminal and the event loop. Everything stateful lives in
//! `BrowseComponent`; the loop only feeds it keys and ticks.
//!
//! ## Design:
//! - Single thread: the loop blocks in `event::poll` no longer than the
//!   time left on the pending render
//! - Ctrl-C arrives as a key event in raw mode, so no signal handler is needed

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use usercards_engine::{Clock, SystemClock};
use usercards_types::Directory;

use crate::presentation::views::tui::components::{BrowseAction, BrowseComponent};

/// Upper bound on one wait for input when nothing is pending
const IDLE_POLL: Duration = Duration::from_millis(250);

pub struct TuiRenderer<C: Clock = SystemClock> {
    page: BrowseComponent<C>,
    should_quit: bool,
}

impl TuiRenderer<SystemClock> {
    pub fn new(directory: Directory, delay: Duration) -> Self {
        Self {
            page: BrowseComponent::new(directory, delay),
            should_quit: false,
        }
    }
}

impl<C: Clock> TuiRenderer<C> {
    /// Set up the terminal, run the loop, and restore the terminal
    pub fn run(mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        tracing::info!("browse started");

        let result = self.event_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        tracing::info!(query = %self.page.query(), "browse finished");

        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| self.page.render(f))?;

            let timeout = self
                .page
                .time_until_render()
                .map_or(IDLE_POLL, |remaining| remaining.min(IDLE_POLL));

            if event::poll(timeout)?
                && let Event::Key(key) = event::read()?
                && let Some(BrowseAction::Quit) = self.page.handle_input(key)
            {
                self.should_quit = true;
            }

            self.page.tick();

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }
}
