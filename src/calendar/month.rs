use std::fmt;
use thiserror::Error;
use time::{Date, Month};

/// A displayed calendar month: a year plus a month, independent of any
/// particular day.  Navigation replaces the value rather than mutating it.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct CalendarMonth {
    year: i32,
    month: Month,
}

impl CalendarMonth {
    pub(crate) fn containing(date: Date) -> CalendarMonth {
        CalendarMonth {
            year: date.year(),
            month: date.month(),
        }
    }

    // A CalendarMonth is only ever constructed from a representable date, so
    // its first and last days always exist.

    pub(crate) fn first_day(&self) -> Date {
        Date::from_calendar_date(self.year, self.month, 1)
            .expect("month should contain a first day")
    }

    pub(crate) fn last_day(&self) -> Date {
        Date::from_calendar_date(self.year, self.month, self.month.length(self.year))
            .expect("month should contain a last day")
    }

    pub(crate) fn contains(&self, date: Date) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// The month one earlier on the calendar.  Fails only when the earlier
    /// month has no representable dates.
    pub(crate) fn pred(&self) -> Result<CalendarMonth, MonthOutOfRangeError> {
        let (year, month) = match self.month {
            Month::January => (self.year - 1, Month::December),
            m => (self.year, m.previous()),
        };
        CalendarMonth { year, month }.checked()
    }

    /// The month one later on the calendar.  Fails only when the later month
    /// has no representable dates.
    pub(crate) fn succ(&self) -> Result<CalendarMonth, MonthOutOfRangeError> {
        let (year, month) = match self.month {
            Month::December => (self.year + 1, Month::January),
            m => (self.year, m.next()),
        };
        CalendarMonth { year, month }.checked()
    }

    fn checked(self) -> Result<CalendarMonth, MonthOutOfRangeError> {
        if Date::from_calendar_date(self.year, self.month, 1).is_ok() {
            Ok(self)
        } else {
            Err(MonthOutOfRangeError)
        }
    }
}

impl fmt::Display for CalendarMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.year, u8::from(self.month))
    }
}

#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
#[error("month is outside the representable date range")]
pub(crate) struct MonthOutOfRangeError;
