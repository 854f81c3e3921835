use crate::calendar::{CalendarMonth, MonthOutOfRangeError};
use time::Date;

/// The widget's UI state: the displayed month and the selected date, plus the
/// fixed "today" used as the jump target.  The two pieces of state are
/// independent; navigating never moves the selection and selecting never
/// moves the displayed month.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct ViewState {
    today: Date,
    month: CalendarMonth,
    selected: Date,
}

impl ViewState {
    pub(crate) fn new(today: Date) -> ViewState {
        ViewState {
            today,
            month: CalendarMonth::containing(today),
            selected: today,
        }
    }

    /// Points both the displayed month and the selection at `date`.
    pub(crate) fn start_date(mut self, date: Date) -> ViewState {
        self.month = CalendarMonth::containing(date);
        self.selected = date;
        self
    }

    pub(crate) fn month(&self) -> CalendarMonth {
        self.month
    }

    pub(crate) fn selected(&self) -> Date {
        self.selected
    }

    /// Pure state transition: returns the state after `action`.  The only
    /// failure is navigating past the representable date range.
    pub(crate) fn apply(&self, action: Action) -> Result<ViewState, MonthOutOfRangeError> {
        let mut next = *self;
        match action {
            Action::PreviousMonth => next.month = self.month.pred()?,
            Action::NextMonth => next.month = self.month.succ()?,
            Action::Select(date) => next.selected = date,
            Action::JumpToToday => next.month = CalendarMonth::containing(self.today),
        }
        Ok(next)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Action {
    PreviousMonth,
    NextMonth,
    Select(Date),
    JumpToToday,
}
