use calc::{evaluate_into, HistoryLedger};

use crate::controller::events::{Key, Notice};

/// How many ledger entries the history popup shows.
const HISTORY_PREVIEW: usize = 10;

/// The calculator state machine: one mutable expression plus the ledger.
///
/// [`Calculator::handle`] applies one key and optionally yields a notice
/// for the shell to surface. There is no terminal state; the machine runs
/// until the process exits.
#[derive(Debug, Default)]
pub struct Calculator {
    expression: String,
    ledger: HistoryLedger,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn ledger(&self) -> &HistoryLedger {
        &self.ledger
    }

    pub fn handle(&mut self, key: Key) -> Option<Notice> {
        match key {
            Key::Input(c) => {
                self.expression.push(c);
                None
            }
            Key::Clear => {
                self.expression.clear();
                None
            }
            Key::Backspace => {
                // No-op on an empty expression.
                self.expression.pop();
                None
            }
            Key::History => {
                if self.ledger.is_empty() {
                    Some(Notice::HistoryEmpty)
                } else {
                    Some(Notice::History(
                        self.ledger
                            .recent(HISTORY_PREVIEW)
                            .iter()
                            .map(ToString::to_string)
                            .collect(),
                    ))
                }
            }
            Key::Evaluate => match evaluate_into(&mut self.ledger, &self.expression) {
                Ok(result) => {
                    // The result becomes the next expression, so
                    // calculations can chain.
                    self.expression = result.to_string();
                    None
                }
                Err(error) => {
                    self.expression.clear();
                    Some(Notice::Error(error.to_string()))
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_expression(calculator: &mut Calculator, text: &str) {
        for c in text.chars() {
            assert_eq!(calculator.handle(Key::Input(c)), None);
        }
    }

    #[test]
    fn input_keys_append_to_the_expression() {
        let mut calculator = Calculator::new();
        type_expression(&mut calculator, "12+3.5");
        assert_eq!(calculator.expression(), "12+3.5");
    }

    #[test]
    fn clear_resets_the_expression() {
        let mut calculator = Calculator::new();
        type_expression(&mut calculator, "12");
        calculator.handle(Key::Clear);
        assert_eq!(calculator.expression(), "");
    }

    #[test]
    fn backspace_drops_the_last_character_and_ignores_empty() {
        let mut calculator = Calculator::new();
        type_expression(&mut calculator, "12");
        calculator.handle(Key::Backspace);
        assert_eq!(calculator.expression(), "1");
        calculator.handle(Key::Backspace);
        calculator.handle(Key::Backspace);
        assert_eq!(calculator.expression(), "");
    }

    #[test]
    fn evaluate_shows_the_result_and_records_it() {
        let mut calculator = Calculator::new();
        type_expression(&mut calculator, "2+3*4");
        assert_eq!(calculator.handle(Key::Evaluate), None);
        assert_eq!(calculator.expression(), "14");
        assert_eq!(calculator.ledger().len(), 1);
        assert_eq!(calculator.ledger().all()[0].to_string(), "2+3*4 = 14");
    }

    #[test]
    fn results_chain_into_the_next_calculation() {
        let mut calculator = Calculator::new();
        type_expression(&mut calculator, "2+3");
        calculator.handle(Key::Evaluate);
        type_expression(&mut calculator, "*2");
        calculator.handle(Key::Evaluate);
        assert_eq!(calculator.expression(), "10");
        assert_eq!(calculator.ledger().len(), 2);
        assert_eq!(calculator.ledger().all()[1].to_string(), "5*2 = 10");
    }

    #[test]
    fn division_by_zero_notifies_and_resets() {
        let mut calculator = Calculator::new();
        type_expression(&mut calculator, "10/0");
        assert_eq!(
            calculator.handle(Key::Evaluate),
            Some(Notice::Error("Cannot divide by zero!".to_string()))
        );
        assert_eq!(calculator.expression(), "");
        assert!(calculator.ledger().is_empty());
    }

    #[test]
    fn invalid_expression_notifies_and_resets() {
        let mut calculator = Calculator::new();
        type_expression(&mut calculator, "2+");
        assert_eq!(
            calculator.handle(Key::Evaluate),
            Some(Notice::Error("Invalid expression!".to_string()))
        );
        assert_eq!(calculator.expression(), "");
        assert!(calculator.ledger().is_empty());
    }

    #[test]
    fn history_on_an_empty_ledger_says_so() {
        let mut calculator = Calculator::new();
        assert_eq!(calculator.handle(Key::History), Some(Notice::HistoryEmpty));
    }

    #[test]
    fn history_does_not_mutate_state() {
        let mut calculator = Calculator::new();
        type_expression(&mut calculator, "1+1");
        calculator.handle(Key::Evaluate);
        type_expression(&mut calculator, "+3");
        calculator.handle(Key::History);
        assert_eq!(calculator.expression(), "2+3");
        assert_eq!(calculator.ledger().len(), 1);
    }

    #[test]
    fn history_shows_at_most_the_last_ten() {
        let mut calculator = Calculator::new();
        for i in 0..12 {
            type_expression(&mut calculator, &format!("{i}+0"));
            calculator.handle(Key::Evaluate);
            calculator.handle(Key::Clear);
        }
        let Some(Notice::History(entries)) = calculator.handle(Key::History) else {
            panic!("expected a history notice");
        };
        assert_eq!(entries.len(), 10);
        assert_eq!(entries[0], "2+0 = 2");
        assert_eq!(entries[9], "11+0 = 11");
    }
}
