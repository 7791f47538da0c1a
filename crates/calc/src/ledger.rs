use std::fmt;

use serde::{Serialize, Serializer};

use crate::{
    error::EvalError,
    eval::{self, Value},
};

/// One successful calculation, kept exactly as the user entered it.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationRecord {
    pub expression: String,
    pub result: Value,
}

impl fmt::Display for CalculationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.expression, self.result)
    }
}

// History travels on the wire as rendered "expression = result" strings.
impl Serialize for CalculationRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Ordered, append-only, process-lifetime record of successful
/// calculations. Unbounded, no deduplication, lost on restart.
#[derive(Debug, Default)]
pub struct HistoryLedger {
    records: Vec<CalculationRecord>,
}

impl HistoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: CalculationRecord) {
        self.records.push(record);
    }

    /// The last `n` records in insertion order; all of them if fewer exist.
    pub fn recent(&self, n: usize) -> &[CalculationRecord] {
        let skip = self.records.len().saturating_sub(n);
        &self.records[skip..]
    }

    pub fn all(&self) -> &[CalculationRecord] {
        &self.records
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Evaluates `expression` and appends a record only on success; a failed
/// evaluation leaves the ledger untouched. Both shells route their
/// evaluations through here so the one-record-per-success rule lives in
/// a single place.
pub fn evaluate_into(
    ledger: &mut HistoryLedger,
    expression: &str,
) -> Result<Value, EvalError> {
    let result = eval::evaluate(expression)?;
    ledger.append(CalculationRecord {
        expression: expression.to_owned(),
        result,
    });
    Ok(result)
}

#[cfg(test)]
#[path = "tests/ledger_tests.rs"]
mod tests;
