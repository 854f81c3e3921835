use super::month::CalendarMonth;
use time::Date;

/// Display category of one day cell.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum CellKind {
    Valid,
    Selected,
    OutOfMonth,
}

/// Classifies a grid cell against the displayed month and the selection.
/// Padding cells are out-of-month no matter what is selected; a cell counts
/// as selected only when it lies inside the displayed month.
pub(crate) fn classify(date: Date, month: CalendarMonth, selected: Date) -> CellKind {
    if !month.contains(date) {
        CellKind::OutOfMonth
    } else if date == selected {
        CellKind::Selected
    } else {
        CellKind::Valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_in_month_cells() {
        let month = CalendarMonth::containing(date!(2024 - 03 - 01));
        let selected = date!(2024 - 03 - 15);
        for day in 1..=31 {
            let date = date!(2024 - 03 - 01).replace_day(day).unwrap();
            let expected = if day == 15 {
                CellKind::Selected
            } else {
                CellKind::Valid
            };
            assert_eq!(classify(date, month, selected), expected);
        }
    }

    #[test]
    fn test_padding_cells() {
        let month = CalendarMonth::containing(date!(2024 - 03 - 01));
        let selected = date!(2024 - 03 - 15);
        assert_eq!(
            classify(date!(2024 - 02 - 25), month, selected),
            CellKind::OutOfMonth,
        );
        assert_eq!(
            classify(date!(2024 - 04 - 06), month, selected),
            CellKind::OutOfMonth,
        );
    }

    #[test]
    fn test_out_of_month_beats_selected() {
        let month = CalendarMonth::containing(date!(2024 - 03 - 01));
        let selected = date!(2024 - 02 - 29);
        assert_eq!(classify(selected, month, selected), CellKind::OutOfMonth);
    }
}
