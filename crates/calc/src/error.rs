use thiserror::Error;

/// The two failure modes of expression evaluation. Both are recovered at
/// the shell boundary; neither is fatal to the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("Cannot divide by zero!")]
    DivisionByZero,
    /// Anything else the evaluator rejects: malformed syntax, unmatched
    /// parentheses, unsupported characters, empty input.
    #[error("Invalid expression!")]
    InvalidExpression,
}
