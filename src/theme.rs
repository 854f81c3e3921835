use crate::calendar::CellKind;
use ratatui::style::{Color, Modifier, Style};

pub(crate) const BASE_STYLE: Style = Style::new().fg(Color::White).bg(Color::Black);

pub(crate) const TITLE_STYLE: Style = Style::new().add_modifier(Modifier::BOLD);

pub(crate) const WEEKDAY_STYLE: Style = Style::new().add_modifier(Modifier::BOLD);

pub(crate) const ARROW_STYLE: Style = Style::new().add_modifier(Modifier::BOLD);

pub(crate) const VALID_STYLE: Style = Style::new();

pub(crate) const SELECTED_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

pub(crate) const OUT_OF_MONTH_STYLE: Style = Style::new().fg(Color::DarkGray);

pub(crate) const fn cell_style(kind: CellKind) -> Style {
    match kind {
        CellKind::Valid => VALID_STYLE,
        CellKind::Selected => SELECTED_STYLE,
        CellKind::OutOfMonth => OUT_OF_MONTH_STYLE,
    }
}
