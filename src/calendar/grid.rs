use super::month::CalendarMonth;
use std::iter::successors;
use time::{Date, Weekday};

const DAYS_IN_WEEK: usize = 7;

/// Column of `weekday` in a week whose first column is `week_start`.
fn weekday_slot(weekday: Weekday, week_start: Weekday) -> u16 {
    u16::from(
        (weekday.number_days_from_sunday() + 7 - week_start.number_days_from_sunday()) % 7,
    )
}

/// One row of the month grid: seven day slots ordered by the week-start
/// convention.  A slot is only `None` when the week runs off the end of the
/// representable date range.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
// Invariant: at least one slot is Some
pub(crate) struct Week {
    days: [Option<Date>; DAYS_IN_WEEK],
    week_start: Weekday,
}

impl Week {
    // Returns the Week containing the given date, which can be at any day of
    // the week
    fn containing(date: Date, week_start: Weekday) -> Week {
        let mut week = Week {
            days: [None; DAYS_IN_WEEK],
            week_start,
        };
        week.set(date);
        let i = usize::from(weekday_slot(date.weekday(), week_start));
        for d in iter_days_before(date).take(i) {
            week.set(d);
        }
        for d in iter_days_after(date).take(DAYS_IN_WEEK - i - 1) {
            week.set(d);
        }
        week
    }

    fn set(&mut self, date: Date) {
        let i = weekday_slot(date.weekday(), self.week_start);
        if let Some(slot) = self.days.get_mut(usize::from(i)) {
            *slot = Some(date);
        }
    }

    pub(crate) fn get(&self, slot: u16) -> Option<Date> {
        self.days.get(usize::from(slot)).copied().flatten()
    }

    pub(crate) fn days(&self) -> impl Iterator<Item = (u16, Date)> {
        std::iter::zip(0u16.., self.days).filter_map(|(slot, d)| d.map(|d| (slot, d)))
    }

    fn last_day(&self) -> Date {
        self.days
            .iter()
            .flatten()
            .next_back()
            .copied()
            .expect("Week should contain at least one Some")
    }
}

/// Computes the grid for a month: every week that intersects it, from the one
/// containing the first day through the one containing the last day, padded
/// at both ends to whole weeks with adjacent-month dates.
pub(crate) fn month_weeks(month: CalendarMonth, week_start: Weekday) -> Vec<Week> {
    let last = month.last_day();
    let mut weeks = Vec::with_capacity(6);
    let mut week = Week::containing(month.first_day(), week_start);
    loop {
        weeks.push(week);
        match week.last_day().next_day() {
            Some(next) if next <= last => week = Week::containing(next, week_start),
            _ => break,
        }
    }
    weeks
}

fn iter_days_after(date: Date) -> impl Iterator<Item = Date> {
    successors(Some(date), |&d| d.next_day()).skip(1)
}

fn iter_days_before(date: Date) -> impl Iterator<Item = Date> {
    successors(Some(date), |&d| d.previous_day()).skip(1)
}
