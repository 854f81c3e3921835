use crate::calendar::{month_weeks, GridLayout, HitTarget, MonthView, Week};
use crate::help::Help;
use crate::state::{Action, ViewState};
use crate::theme::BASE_STYLE;
use crossterm::event::{
    read, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::Rect,
    widgets::{StatefulWidget, Widget},
    Terminal,
};
use std::io::{self, Write};
use time::Duration;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct App {
    view: ViewState,
    week_start: time::Weekday,
    state: AppState,
    // Area of the last draw, so that clicks can be mapped back to the grid
    area: Option<Rect>,
}

impl App {
    pub(crate) fn new(view: ViewState, week_start: time::Weekday) -> App {
        App {
            view,
            week_start,
            state: AppState::Calendar,
            area: None,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting() {
            self.draw(&mut terminal)?;
            self.handle_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| frame.render_widget(self, frame.area()))?;
        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        let event = read()?;
        if let Some(KeyEvent {
            code, modifiers, ..
        }) = event.as_key_press_event()
        {
            if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
                self.state = AppState::Quitting;
            } else if !normal_modifiers.contains(modifiers) || !self.handle_key(code) {
                self.beep()?;
            }
        } else if let Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) = event
        {
            if !self.handle_click(column, row) {
                self.beep()?;
            }
        }
        // else: Redraw on resize, and we might as well redraw on other stuff
        // too
        Ok(())
    }

    // Returns `false` if the user pressed an invalid key
    fn handle_key(&mut self, key: KeyCode) -> bool {
        match self.state {
            AppState::Calendar => match key {
                KeyCode::Char('h') | KeyCode::Left => self.move_selection(Duration::days(-1)),
                KeyCode::Char('l') | KeyCode::Right => self.move_selection(Duration::days(1)),
                KeyCode::Char('k') | KeyCode::Up => self.move_selection(Duration::weeks(-1)),
                KeyCode::Char('j') | KeyCode::Down => self.move_selection(Duration::weeks(1)),
                KeyCode::Char('p') | KeyCode::PageUp => self.apply(Action::PreviousMonth),
                KeyCode::Char('n') | KeyCode::PageDown => self.apply(Action::NextMonth),
                KeyCode::Char('0') | KeyCode::Home => self.apply(Action::JumpToToday),
                KeyCode::Char('?') => {
                    self.state = AppState::Helping;
                    true
                }
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.state = AppState::Quitting;
                    true
                }
                _ => false,
            },
            AppState::Helping => {
                self.state = AppState::Calendar;
                true
            }
            AppState::Quitting => false,
        }
    }

    // Returns `false` if the click hit a control whose action failed
    fn handle_click(&mut self, column: u16, row: u16) -> bool {
        match self.click_action(column, row) {
            Some(action) => self.apply(action),
            None => true,
        }
    }

    fn click_action(&self, column: u16, row: u16) -> Option<Action> {
        if self.state != AppState::Calendar {
            return None;
        }
        let area = self.area?;
        let weeks: Vec<Week> = month_weeks(self.view.month(), self.week_start);
        let layout = GridLayout::new(area, weeks.len());
        match layout.hit(column, row)? {
            HitTarget::PreviousArrow => Some(Action::PreviousMonth),
            HitTarget::NextArrow => Some(Action::NextMonth),
            HitTarget::Day { week, slot } => weeks.get(week)?.get(slot).map(Action::Select),
        }
    }

    fn apply(&mut self, action: Action) -> bool {
        match self.view.apply(action) {
            Ok(view) => {
                self.view = view;
                true
            }
            Err(_) => false,
        }
    }

    fn move_selection(&mut self, delta: Duration) -> bool {
        match self.view.selected().checked_add(delta) {
            Some(date) => self.apply(Action::Select(date)),
            None => false,
        }
    }

    fn beep(&self) -> io::Result<()> {
        io::stdout().write_all(b"\x07")
    }

    fn quitting(&self) -> bool {
        self.state == AppState::Quitting
    }
}

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, BASE_STYLE);
        self.area = Some(area);
        MonthView::new(self.week_start).render(area, buf, &mut self.view);
        if self.state == AppState::Helping {
            Help(BASE_STYLE).render(area, buf);
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum AppState {
    Calendar,
    Helping,
    Quitting,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::CalendarMonth;
    use crate::theme::{
        ARROW_STYLE, OUT_OF_MONTH_STYLE, SELECTED_STYLE, TITLE_STYLE, WEEKDAY_STYLE,
    };
    use time::macros::date;
    use time::Weekday::Sunday;

    fn march_app() -> App {
        App::new(ViewState::new(date!(2024 - 03 - 15)), Sunday)
    }

    #[test]
    fn test_render_centered() {
        let mut app = march_app();
        let area = Rect::new(0, 0, 40, 11);
        let mut buffer = Buffer::empty(area);
        app.render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            "                                        ",
            "   2024.3                         ◀ ▶   ",
            "    Su   Mo   Tu   We   Th   Fr   Sa    ",
            "   ──────────────────────────────────   ",
            "    25   26   27   28   29    1    2    ",
            "     3    4    5    6    7    8    9    ",
            "    10   11   12   13   14  [15]  16    ",
            "    17   18   19   20   21   22   23    ",
            "    24   25   26   27   28   29   30    ",
            "    31    1    2    3    4    5    6    ",
            "                                        ",
        ]);
        expected.set_style(*expected.area(), BASE_STYLE);
        expected.set_style(Rect::new(3, 1, 6, 1), TITLE_STYLE);
        expected.set_style(Rect::new(34, 1, 1, 1), ARROW_STYLE);
        expected.set_style(Rect::new(36, 1, 1, 1), ARROW_STYLE);
        expected.set_style(Rect::new(3, 2, 34, 1), WEEKDAY_STYLE);
        for x in [3, 8, 13, 18, 23] {
            expected.set_style(Rect::new(x, 4, 4, 1), OUT_OF_MONTH_STYLE);
        }
        expected.set_style(Rect::new(28, 6, 4, 1), SELECTED_STYLE);
        for x in [8, 13, 18, 23, 28, 33] {
            expected.set_style(Rect::new(x, 9, 4, 1), OUT_OF_MONTH_STYLE);
        }
        assert_eq!(buffer, expected);
    }

    #[test]
    fn test_next_month_key() {
        let mut app = march_app();
        assert!(app.handle_key(KeyCode::Char('n')));
        assert_eq!(
            app.view.month(),
            CalendarMonth::containing(date!(2024 - 04 - 01)),
        );
        assert_eq!(app.view.selected(), date!(2024 - 03 - 15));
    }

    #[test]
    fn test_previous_then_next_key() {
        let mut app = march_app();
        let before = app.view;
        assert!(app.handle_key(KeyCode::PageUp));
        assert!(app.handle_key(KeyCode::PageDown));
        assert_eq!(app.view, before);
    }

    #[test]
    fn test_selection_keys_cross_month() {
        let mut app = App::new(
            ViewState::new(date!(2024 - 03 - 15)).start_date(date!(2024 - 03 - 31)),
            Sunday,
        );
        assert!(app.handle_key(KeyCode::Right));
        assert_eq!(app.view.selected(), date!(2024 - 04 - 01));
        assert_eq!(
            app.view.month(),
            CalendarMonth::containing(date!(2024 - 03 - 01)),
        );
        assert!(app.handle_key(KeyCode::Up));
        assert_eq!(app.view.selected(), date!(2024 - 03 - 25));
    }

    #[test]
    fn test_click_arrows() {
        let mut app = march_app();
        let area = Rect::new(0, 0, 40, 11);
        let mut buffer = Buffer::empty(area);
        app.render(area, &mut buffer);
        assert!(app.handle_click(36, 1));
        assert_eq!(
            app.view.month(),
            CalendarMonth::containing(date!(2024 - 04 - 01)),
        );
        assert!(app.handle_click(34, 1));
        assert_eq!(
            app.view.month(),
            CalendarMonth::containing(date!(2024 - 03 - 01)),
        );
        assert_eq!(app.view.selected(), date!(2024 - 03 - 15));
    }

    #[test]
    fn test_click_day_cell() {
        let mut app = march_app();
        let area = Rect::new(0, 0, 40, 11);
        let mut buffer = Buffer::empty(area);
        app.render(area, &mut buffer);
        // Third cell of the fourth week row: March 19
        assert!(app.handle_click(14, 7));
        assert_eq!(app.view.selected(), date!(2024 - 03 - 19));
    }

    #[test]
    fn test_click_padding_cell_selects_without_moving_month() {
        let mut app = march_app();
        let area = Rect::new(0, 0, 40, 11);
        let mut buffer = Buffer::empty(area);
        app.render(area, &mut buffer);
        // First cell of the first week row: February 25
        assert!(app.handle_click(3, 4));
        assert_eq!(app.view.selected(), date!(2024 - 02 - 25));
        assert_eq!(
            app.view.month(),
            CalendarMonth::containing(date!(2024 - 03 - 01)),
        );
    }

    #[test]
    fn test_click_outside_grid_is_ignored() {
        let mut app = march_app();
        let area = Rect::new(0, 0, 40, 11);
        let mut buffer = Buffer::empty(area);
        app.render(area, &mut buffer);
        let before = app.view;
        assert!(app.handle_click(0, 0));
        assert_eq!(app.view, before);
    }

    #[test]
    fn test_help_dismisses_on_any_key() {
        let mut app = march_app();
        assert!(app.handle_key(KeyCode::Char('?')));
        assert_eq!(app.state, AppState::Helping);
        assert!(app.handle_key(KeyCode::Char('x')));
        assert_eq!(app.state, AppState::Calendar);
    }

    #[test]
    fn test_quit() {
        let mut app = march_app();
        assert!(app.handle_key(KeyCode::Char('q')));
        assert!(app.quitting());
        assert!(!app.handle_key(KeyCode::Char('n')));
    }
}
