mod classify;
mod grid;
mod month;
mod widget;
pub(crate) use self::classify::CellKind;
pub(crate) use self::grid::{month_weeks, Week};
pub(crate) use self::month::{CalendarMonth, MonthOutOfRangeError};
pub(crate) use self::widget::{GridLayout, HitTarget, MonthView};
