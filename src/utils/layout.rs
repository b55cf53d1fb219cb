//! Dashboard layout and form helpers.

/// Grid columns for a widget: width 1 is half of the 12-column grid,
/// width 2 the full grid. Other widths are already in columns.
#[must_use]
pub const fn col_width(widget_width: u32) -> u32 {
    match widget_width {
        0 => 0,
        1 => 6,
        2 => 12,
        other => other,
    }
}

/// Validation state of a single form field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldState {
    pub touched: bool,
    pub invalid: bool,
}

/// Whether to show a validation error for a field. Fields without state
/// (checkboxes, for one) never show errors.
#[must_use]
pub fn show_error(field: Option<&FieldState>) -> bool {
    field.is_some_and(|field| field.touched && field.invalid)
}
