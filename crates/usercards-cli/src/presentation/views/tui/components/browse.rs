//! Browse Component (Page-level)
//!
//! Search bar, card list and status bar over one `InputController`. Keys edit
//! the query or move focus; Enter dispatches to the focused card, and the
//! presentation it returns is shown as a modal until dismissed.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};
use usercards_engine::{
    Clock, Container, ControllerState, EventKind, InputController, Key, Presentation,
    SystemClock,
};
use usercards_types::Directory;

use crate::presentation::views::tui::{
    CardListView, ProfileModalView, SearchBarView, StatusBarView,
};

/// Actions the page emits to the renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseAction {
    Quit,
}

pub struct BrowseComponent<C: Clock = SystemClock> {
    controller: InputController<Container, C>,
    /// Index into the focusable cards of the current render
    focus: Option<usize>,
    modal: Option<Presentation>,
}

impl BrowseComponent<SystemClock> {
    pub fn new(directory: Directory, delay: Duration) -> Self {
        Self::with_clock(directory, SystemClock, delay)
    }
}

impl<C: Clock> BrowseComponent<C> {
    pub fn with_clock(directory: Directory, clock: C, delay: Duration) -> Self {
        let controller = InputController::with_clock(directory, Container::new(), clock, delay);
        let mut component = Self {
            controller,
            focus: None,
            modal: None,
        };
        component.clamp_focus();
        component
    }

    /// Handle one key press
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<BrowseAction> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(BrowseAction::Quit);
        }

        if self.modal.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.modal = None;
            }
            return None;
        }

        match key.code {
            KeyCode::Esc => return Some(BrowseAction::Quit),
            KeyCode::Tab | KeyCode::Down => self.move_focus(1),
            KeyCode::BackTab | KeyCode::Up => self.move_focus(-1),
            KeyCode::Enter => self.activate_focused(),
            KeyCode::Backspace => {
                let mut query = self.controller.query().to_string();
                if query.pop().is_some() {
                    self.controller.on_input(query);
                }
            }
            KeyCode::Char(c) => {
                let mut query = self.controller.query().to_string();
                query.push(c);
                self.controller.on_input(query);
            }
            _ => {}
        }

        None
    }

    /// Fire a due render; returns true if the list changed
    pub fn tick(&mut self) -> bool {
        let rendered = self.controller.poll();
        if rendered {
            self.clamp_focus();
        }
        rendered
    }

    /// Longest the event loop may block before `tick` is due
    pub fn time_until_render(&self) -> Option<Duration> {
        self.controller.time_until_render()
    }

    pub fn render(&self, f: &mut Frame) {
        let size = f.area();
        let chunks = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(3),
        ])
        .split(size);

        let pending = self.controller.state() == ControllerState::Pending;
        f.render_widget(SearchBarView::new(self.controller.query(), pending), chunks[0]);

        let content = self.controller.surface().content();
        f.render_widget(CardListView::new(content, self.focus), chunks[1]);

        f.render_widget(
            StatusBarView::new(self.card_count(), self.controller.directory().len()),
            chunks[2],
        );

        if let Some(presentation) = &self.modal {
            f.render_widget(ProfileModalView::new(presentation), size);
        }
    }

    pub fn query(&self) -> &str {
        self.controller.query()
    }

    pub fn focus(&self) -> Option<usize> {
        self.focus
    }

    pub fn modal(&self) -> Option<&Presentation> {
        self.modal.as_ref()
    }

    pub fn card_count(&self) -> usize {
        self.controller.surface().content().focusable().len()
    }

    fn move_focus(&mut self, step: isize) {
        let count = self.card_count();
        if count == 0 {
            self.focus = None;
            return;
        }
        let current = self.focus.unwrap_or(0) as isize;
        self.focus = Some((current + step).rem_euclid(count as isize) as usize);
    }

    fn activate_focused(&mut self) {
        let Some(index) = self.focus else {
            return;
        };
        let content = self.controller.surface().content();
        let Some(card) = content.focusable().get(index).copied() else {
            return;
        };
        if let Some(presentation) = card.dispatch(&EventKind::KeyDown { key: Key::Enter }) {
            tracing::debug!(name = %presentation.title, "card activated");
            self.modal = Some(presentation);
        }
    }

    /// Keep focus inside the cards of the latest render
    fn clamp_focus(&mut self) {
        let count = self.card_count();
        self.focus = match (count, self.focus) {
            (0, _) => None,
            (_, None) => Some(0),
            (n, Some(index)) => Some(index.min(n - 1)),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};
    use usercards_engine::DEFAULT_DEBOUNCE;
    use usercards_testing::ManualClock;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(component: &mut BrowseComponent<ManualClock>, text: &str) {
        for c in text.chars() {
            component.handle_input(press(KeyCode::Char(c)));
        }
    }

    fn setup() -> (BrowseComponent<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let component =
            BrowseComponent::with_clock(Directory::built_in(), clock.clone(), DEFAULT_DEBOUNCE);
        (component, clock)
    }

    fn screen_text(component: &BrowseComponent<ManualClock>) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| component.render(f)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_starts_with_all_cards_and_first_focused() {
        let (component, _clock) = setup();
        assert_eq!(component.card_count(), 7);
        assert_eq!(component.focus(), Some(0));
        assert_eq!(component.query(), "");
    }

    #[test]
    fn test_typing_renders_after_debounce() {
        let (mut component, clock) = setup();

        type_text(&mut component, "ami");
        assert_eq!(component.query(), "ami");
        assert!(!component.tick());
        assert_eq!(component.card_count(), 7);

        clock.advance(DEFAULT_DEBOUNCE);
        assert!(component.tick());
        assert_eq!(component.card_count(), 2);
    }

    #[test]
    fn test_backspace_edits_query() {
        let (mut component, clock) = setup();

        type_text(&mut component, "zzz");
        component.handle_input(press(KeyCode::Backspace));
        component.handle_input(press(KeyCode::Backspace));
        component.handle_input(press(KeyCode::Backspace));
        assert_eq!(component.query(), "");

        clock.advance(DEFAULT_DEBOUNCE);
        component.tick();
        assert_eq!(component.card_count(), 7);
    }

    #[test]
    fn test_focus_wraps_and_clamps() {
        let (mut component, clock) = setup();

        component.handle_input(press(KeyCode::BackTab));
        assert_eq!(component.focus(), Some(6));
        component.handle_input(press(KeyCode::Tab));
        assert_eq!(component.focus(), Some(0));

        for _ in 0..5 {
            component.handle_input(press(KeyCode::Down));
        }
        assert_eq!(component.focus(), Some(5));

        type_text(&mut component, "chaos");
        clock.advance(DEFAULT_DEBOUNCE);
        component.tick();
        assert_eq!(component.focus(), Some(1));

        type_text(&mut component, "zzz");
        clock.advance(DEFAULT_DEBOUNCE);
        component.tick();
        assert_eq!(component.focus(), None);
    }

    #[test]
    fn test_enter_opens_modal_and_keeps_list() {
        let (mut component, _clock) = setup();

        component.handle_input(press(KeyCode::Down));
        component.handle_input(press(KeyCode::Enter));

        let modal = component.modal().unwrap();
        assert_eq!(modal.title, "amita mehta");
        assert_eq!(component.card_count(), 7);

        // Keys other than Enter/Esc are swallowed while the modal is open.
        component.handle_input(press(KeyCode::Char('x')));
        assert_eq!(component.query(), "");

        assert_eq!(component.handle_input(press(KeyCode::Esc)), None);
        assert!(component.modal().is_none());
    }

    #[test]
    fn test_escape_and_ctrl_c_quit() {
        let (mut component, _clock) = setup();
        assert_eq!(
            component.handle_input(press(KeyCode::Esc)),
            Some(BrowseAction::Quit)
        );
        assert_eq!(
            component.handle_input(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(BrowseAction::Quit)
        );
    }

    #[test]
    fn test_screen_shows_empty_message() {
        let (mut component, clock) = setup();

        type_text(&mut component, "zzz");
        clock.advance(DEFAULT_DEBOUNCE);
        component.tick();

        let screen = screen_text(&component);
        assert!(screen.contains("No results found."));
        assert!(screen.contains("Showing 0 of 7"));
        assert!(!screen.contains("amisha rathore"));
    }

    #[test]
    fn test_screen_shows_cards_and_modal() {
        let (mut component, _clock) = setup();

        let screen = screen_text(&component);
        assert!(screen.contains("amisha rathore"));
        assert!(screen.contains("Showing 7 of 7"));

        component.handle_input(press(KeyCode::Enter));
        let screen = screen_text(&component);
        assert!(screen.contains("[Enter/Esc] close"));
    }
}
