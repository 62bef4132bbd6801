//! Input controller: query text in, debounced list renders out.
//!
//! ```text
//!            on_input(text)                 poll() past deadline
//!   Idle ------------------> Pending ----------------------------> Idle
//!                            |    ^         filter + render_list
//!                            +----+
//!                        on_input(text): re-arm with latest text
//! ```

use std::time::{Duration, Instant};

use usercards_types::Directory;

use crate::debounce::{Clock, Debouncer, SystemClock};
use crate::filter::filter;
use crate::list::{Surface, render_list};

/// Delay between the last keystroke and the re-render
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(180);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// No render pending
    Idle,
    /// A render is armed for the latest query
    Pending,
}

pub struct InputController<S, C = SystemClock> {
    directory: Directory,
    surface: S,
    clock: C,
    query: String,
    debouncer: Debouncer<String>,
    last_rendered_query: Option<String>,
}

impl<S: Surface> InputController<S, SystemClock> {
    pub fn new(directory: Directory, surface: S, delay: Duration) -> Self {
        Self::with_clock(directory, surface, SystemClock, delay)
    }
}

impl<S: Surface, C: Clock> InputController<S, C> {
    /// Create the controller and render the full directory once, undebounced.
    pub fn with_clock(directory: Directory, mut surface: S, clock: C, delay: Duration) -> Self {
        render_list(&mut surface, directory.all());
        tracing::debug!(records = directory.len(), "initial render");

        Self {
            directory,
            surface,
            clock,
            query: String::new(),
            debouncer: Debouncer::new(delay),
            last_rendered_query: None,
        }
    }

    /// Record the field's new text and (re)arm the render timer.
    pub fn on_input(&mut self, text: impl Into<String>) {
        self.query = text.into();
        let now = self.clock.now();
        let superseded = self.debouncer.schedule(self.query.clone(), now);
        tracing::trace!(query = %self.query, superseded, "render armed");
    }

    /// Fire the pending render if its deadline has passed.
    ///
    /// Returns true when a render happened.
    pub fn poll(&mut self) -> bool {
        let now = self.clock.now();
        let Some(query) = self.debouncer.poll(now) else {
            return false;
        };

        let matched = filter(&query, self.directory.all());
        tracing::debug!(query = %query, matches = matched.len(), "render fired");
        render_list(&mut self.surface, &matched);
        self.last_rendered_query = Some(query);
        true
    }

    pub fn state(&self) -> ControllerState {
        if self.debouncer.is_pending() {
            ControllerState::Pending
        } else {
            ControllerState::Idle
        }
    }

    /// Current field text (updated on every input, not only on renders)
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Query behind the last debounced render, `None` before the first one
    pub fn last_rendered_query(&self) -> Option<&str> {
        self.last_rendered_query.as_deref()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// How long the event loop may wait before the next `poll` is due
    pub fn time_until_render(&self) -> Option<Duration> {
        self.debouncer.remaining(self.clock.now())
    }

    pub fn delay(&self) -> Duration {
        self.debouncer.delay()
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
