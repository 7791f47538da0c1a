/// One key press on the calculator surface, whether it came from a button
/// or the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Digit, operator, decimal point, parenthesis, or percent to append
    /// to the current expression.
    Input(char),
    Clear,
    Backspace,
    History,
    Evaluate,
}

/// Something the shell surfaces modally; never part of the display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    History(Vec<String>),
    HistoryEmpty,
    Error(String),
}
