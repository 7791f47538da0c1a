use super::*;

fn record(expression: &str, result: Value) -> CalculationRecord {
    CalculationRecord {
        expression: expression.to_owned(),
        result,
    }
}

#[test]
fn append_preserves_insertion_order() {
    let mut ledger = HistoryLedger::new();
    ledger.append(record("1+1", Value::Int(2)));
    ledger.append(record("2+2", Value::Int(4)));
    ledger.append(record("3+3", Value::Int(6)));

    assert_eq!(ledger.len(), 3);
    let expressions: Vec<&str> = ledger
        .all()
        .iter()
        .map(|r| r.expression.as_str())
        .collect();
    assert_eq!(expressions, ["1+1", "2+2", "3+3"]);
}

#[test]
fn clear_empties_the_ledger() {
    let mut ledger = HistoryLedger::new();
    ledger.append(record("1+1", Value::Int(2)));
    ledger.clear();
    assert!(ledger.is_empty());
    assert_eq!(ledger.all().len(), 0);
}

#[test]
fn recent_returns_everything_when_fewer_than_requested() {
    let mut ledger = HistoryLedger::new();
    for i in 0..3 {
        ledger.append(record(&format!("{i}+0"), Value::Int(i)));
    }
    let recent = ledger.recent(10);
    assert_eq!(recent.len(), 3);
    assert_eq!(recent[0].expression, "0+0");
    assert_eq!(recent[2].expression, "2+0");
}

#[test]
fn recent_returns_the_tail_in_insertion_order() {
    let mut ledger = HistoryLedger::new();
    for i in 0..5 {
        ledger.append(record(&format!("{i}+0"), Value::Int(i)));
    }
    let recent = ledger.recent(2);
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].expression, "3+0");
    assert_eq!(recent[1].expression, "4+0");
}

#[test]
fn evaluate_into_appends_only_on_success() {
    let mut ledger = HistoryLedger::new();

    assert_eq!(evaluate_into(&mut ledger, "2+3*4"), Ok(Value::Int(14)));
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.all()[0].to_string(), "2+3*4 = 14");

    assert_eq!(
        evaluate_into(&mut ledger, "10/0"),
        Err(EvalError::DivisionByZero)
    );
    assert_eq!(
        evaluate_into(&mut ledger, "2+"),
        Err(EvalError::InvalidExpression)
    );
    assert_eq!(ledger.len(), 1, "failed evaluations must not append");
}

#[test]
fn record_renders_expression_equals_result() {
    assert_eq!(record("50%", Value::Float(0.5)).to_string(), "50% = 0.5");
    assert_eq!(record("4/2", Value::Float(2.0)).to_string(), "4/2 = 2.0");
}

#[test]
fn record_serializes_as_its_rendered_string() {
    let json = serde_json::to_string(&record("1+1", Value::Int(2))).expect("serialize");
    assert_eq!(json, "\"1+1 = 2\"");
}
