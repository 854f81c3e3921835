use super::classify::{classify, CellKind};
use super::grid::month_weeks;
use crate::state::ViewState;
use crate::theme::{cell_style, ARROW_STYLE, TITLE_STYLE, WEEKDAY_STYLE};
use ratatui::{
    buffer::Buffer,
    layout::{Flex, Layout, Position, Rect},
    style::Style,
    text::Text,
    widgets::{Paragraph, StatefulWidget, Widget},
};
use time::{Date, Weekday};

/// Columns per day of week, including the gap to the next day
const DAY_WIDTH: u16 = 5;

/// Columns occupied by a day cell's text
const CELL_WIDTH: u16 = 4;

const GRID_WIDTH: u16 = DAY_WIDTH * 7 - 1;

/// Lines taken up by the title row, the weekday labels, and their rule
const HEADER_LINES: u16 = 3;

/// Column of the previous-month arrow, relative to the grid's left edge
const PREV_ARROW_COL: u16 = GRID_WIDTH - 3;

/// Column of the next-month arrow
const NEXT_ARROW_COL: u16 = GRID_WIDTH - 1;

const PREV_ARROW: &str = "◀";
const NEXT_ARROW: &str = "▶";

const ACS_HLINE: char = '─';

/// The month view: header with title and navigation arrows, weekday labels,
/// and one line per week row.  Stateless with respect to calendar logic;
/// everything is recomputed from the view state on each render.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct MonthView {
    week_start: Weekday,
}

impl MonthView {
    pub(crate) fn new(week_start: Weekday) -> MonthView {
        MonthView { week_start }
    }
}

impl StatefulWidget for MonthView {
    type State = ViewState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let weeks = month_weeks(state.month(), self.week_start);
        let layout = GridLayout::new(area, weeks.len());
        layout.print(buf, 0, 0, state.month().to_string(), TITLE_STYLE);
        layout.print(buf, 0, PREV_ARROW_COL, PREV_ARROW, ARROW_STYLE);
        layout.print(buf, 0, NEXT_ARROW_COL, NEXT_ARROW, ARROW_STYLE);
        layout.print(buf, 1, 0, weekday_header(self.week_start), WEEKDAY_STYLE);
        layout.print(
            buf,
            2,
            0,
            String::from(ACS_HLINE).repeat(GRID_WIDTH.into()),
            Style::new(),
        );
        for (row, week) in std::iter::zip(0u16.., &weeks) {
            for (slot, date) in week.days() {
                let kind = classify(date, state.month(), state.selected());
                layout.print(
                    buf,
                    HEADER_LINES + row,
                    DAY_WIDTH * slot,
                    cell_text(date, kind),
                    cell_style(kind),
                );
            }
        }
    }
}

fn cell_text(date: Date, kind: CellKind) -> String {
    if kind == CellKind::Selected {
        format!("[{:2}]", date.day())
    } else {
        format!(" {:2} ", date.day())
    }
}

fn weekday_header(week_start: Weekday) -> String {
    let mut header = String::new();
    let mut wd = week_start;
    for slot in 0..7 {
        if slot > 0 {
            header.push(' ');
        }
        header.push(' ');
        header.push_str(weekday_label(wd));
        header.push(' ');
        wd = wd.next();
    }
    header
}

fn weekday_label(wd: Weekday) -> &'static str {
    match wd {
        Weekday::Sunday => "Su",
        Weekday::Monday => "Mo",
        Weekday::Tuesday => "Tu",
        Weekday::Wednesday => "We",
        Weekday::Thursday => "Th",
        Weekday::Friday => "Fr",
        Weekday::Saturday => "Sa",
    }
}

/// The on-screen geometry of a rendered month view: the fixed-width grid
/// centered in the render area.  Shared between rendering and click
/// hit-testing so that the two can never disagree.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct GridLayout {
    area: Rect,
    week_rows: usize,
}

impl GridLayout {
    pub(crate) fn new(area: Rect, week_rows: usize) -> GridLayout {
        let height = u16::try_from(week_rows)
            .unwrap_or(u16::MAX)
            .saturating_add(HEADER_LINES);
        let [inner] = Layout::horizontal([GRID_WIDTH]).flex(Flex::Center).areas(area);
        let [inner] = Layout::vertical([height]).flex(Flex::Center).areas(inner);
        GridLayout {
            area: inner,
            week_rows,
        }
    }

    /// Maps an absolute screen position to whatever control lies under it.
    pub(crate) fn hit(&self, column: u16, row: u16) -> Option<HitTarget> {
        if !self.area.contains(Position::new(column, row)) {
            return None;
        }
        let x = column - self.area.x;
        let y = row - self.area.y;
        if y == 0 {
            match x {
                PREV_ARROW_COL => Some(HitTarget::PreviousArrow),
                NEXT_ARROW_COL => Some(HitTarget::NextArrow),
                _ => None,
            }
        } else if y >= HEADER_LINES {
            let week = usize::from(y - HEADER_LINES);
            (week < self.week_rows && x % DAY_WIDTH < CELL_WIDTH).then_some(HitTarget::Day {
                week,
                slot: x / DAY_WIDTH,
            })
        } else {
            None
        }
    }

    fn print<S: AsRef<str>>(&self, buf: &mut Buffer, y: u16, x: u16, s: S, style: Style) {
        if y < self.area.height && x < self.area.width {
            let text = Text::styled(s.as_ref(), style);
            let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
            // Using a Paragraph lets us truncate text that extends beyond the
            // grid's area, though we need to be sure that the Rect passed to
            // the Paragraph is entirely within the frame lest a panic result.
            Paragraph::new(text).render(
                Rect {
                    x: x + self.area.x,
                    y: y + self.area.y,
                    width: (self.area.width - x).min(width),
                    height: 1,
                },
                buf,
            );
        }
    }
}

/// A clickable element of the month view.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum HitTarget {
    PreviousArrow,
    NextArrow,
    Day { week: usize, slot: u16 },
}
