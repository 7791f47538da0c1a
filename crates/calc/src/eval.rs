use std::fmt;

use serde::Serialize;

use crate::error::EvalError;

/// A computed result. Integer arithmetic stays exact; any float operand
/// (or a division) promotes the result to a float.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Float(f64),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Value::Int(n) => write!(f, "{n}"),
            // Whole floats keep a trailing ".0" so true-division results
            // still read as floats ("4/2 = 2.0").
            Value::Float(x) if x.is_finite() && x.fract() == 0.0 => write!(f, "{x:.1}"),
            Value::Float(x) => write!(f, "{x}"),
        }
    }
}

const ROUND_SCALE: f64 = 1e8;

/// Evaluates arithmetic text to a [`Value`].
///
/// Every `%` is first rewritten to `/100`, so `50%` means `50/100`. The
/// rewritten text is then parsed with a grammar restricted to decimal
/// literals, `+ - * /`, unary sign, and parentheses; standard precedence,
/// left associativity within a level. Float results are rounded to 8
/// decimal places with round-half-to-even; integer results are exact.
///
/// Pure function of its input; a zero divisor anywhere in the computation
/// yields [`EvalError::DivisionByZero`], everything else the grammar
/// rejects yields [`EvalError::InvalidExpression`].
pub fn evaluate(text: &str) -> Result<Value, EvalError> {
    let rewritten = text.replace('%', "/100");
    let tokens = tokenize(&rewritten)?;
    let mut parser = Parser {
        tokens: &tokens,
        pos: 0,
    };
    let value = parser.expr()?;
    if parser.pos != tokens.len() {
        return Err(EvalError::InvalidExpression);
    }
    Ok(round_result(value))
}

fn round_result(value: Value) -> Value {
    match value {
        Value::Int(_) => value,
        Value::Float(x) => Value::Float((x * ROUND_SCALE).round_ties_even() / ROUND_SCALE),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Number(Value),
    Plus,
    Minus,
    Star,
    Slash,
    OpenParen,
    CloseParen,
}

fn tokenize(text: &str) -> Result<Vec<Token>, EvalError> {
    let bytes = text.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b' ' | b'\t' | b'\r' | b'\n' => i += 1,
            b'+' => {
                tokens.push(Token::Plus);
                i += 1;
            }
            b'-' => {
                tokens.push(Token::Minus);
                i += 1;
            }
            b'*' => {
                tokens.push(Token::Star);
                i += 1;
            }
            b'/' => {
                tokens.push(Token::Slash);
                i += 1;
            }
            b'(' => {
                tokens.push(Token::OpenParen);
                i += 1;
            }
            b')' => {
                tokens.push(Token::CloseParen);
                i += 1;
            }
            b'0'..=b'9' | b'.' => {
                let start = i;
                let mut saw_dot = false;
                let mut saw_digit = false;
                while i < bytes.len() {
                    match bytes[i] {
                        b'0'..=b'9' => {
                            saw_digit = true;
                            i += 1;
                        }
                        b'.' if !saw_dot => {
                            saw_dot = true;
                            i += 1;
                        }
                        _ => break,
                    }
                }
                if !saw_digit {
                    return Err(EvalError::InvalidExpression);
                }
                tokens.push(Token::Number(parse_number(&text[start..i], saw_dot)?));
            }
            _ => return Err(EvalError::InvalidExpression),
        }
    }
    Ok(tokens)
}

fn parse_number(literal: &str, is_float: bool) -> Result<Value, EvalError> {
    if is_float {
        return literal
            .parse::<f64>()
            .map(Value::Float)
            .map_err(|_| EvalError::InvalidExpression);
    }
    match literal.parse::<i64>() {
        Ok(n) => Ok(Value::Int(n)),
        // Integer literals too large for i64 degrade to float literals.
        Err(_) => literal
            .parse::<f64>()
            .map(Value::Float)
            .map_err(|_| EvalError::InvalidExpression),
    }
}

/// Recursive-descent parser that evaluates as it parses.
///
/// expr    := term (('+' | '-') term)*
/// term    := unary (('*' | '/') unary)*
/// unary   := ('+' | '-') unary | primary
/// primary := number | '(' expr ')'
struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<Token> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn expr(&mut self) -> Result<Value, EvalError> {
        let mut acc = self.term()?;
        loop {
            match self.peek() {
                Some(Token::Plus) => {
                    self.pos += 1;
                    acc = add(acc, self.term()?)?;
                }
                Some(Token::Minus) => {
                    self.pos += 1;
                    acc = sub(acc, self.term()?)?;
                }
                _ => return Ok(acc),
            }
        }
    }

    fn term(&mut self) -> Result<Value, EvalError> {
        let mut acc = self.unary()?;
        loop {
            match self.peek() {
                Some(Token::Star) => {
                    self.pos += 1;
                    acc = mul(acc, self.unary()?)?;
                }
                Some(Token::Slash) => {
                    self.pos += 1;
                    acc = div(acc, self.unary()?)?;
                }
                _ => return Ok(acc),
            }
        }
    }

    fn unary(&mut self) -> Result<Value, EvalError> {
        match self.peek() {
            Some(Token::Plus) => {
                self.pos += 1;
                self.unary()
            }
            Some(Token::Minus) => {
                self.pos += 1;
                neg(self.unary()?)
            }
            _ => self.primary(),
        }
    }

    fn primary(&mut self) -> Result<Value, EvalError> {
        match self.bump() {
            Some(Token::Number(value)) => Ok(value),
            Some(Token::OpenParen) => {
                let inner = self.expr()?;
                match self.bump() {
                    Some(Token::CloseParen) => Ok(inner),
                    _ => Err(EvalError::InvalidExpression),
                }
            }
            _ => Err(EvalError::InvalidExpression),
        }
    }
}

fn as_f64(value: Value) -> f64 {
    match value {
        Value::Int(n) => n as f64,
        Value::Float(x) => x,
    }
}

// Int overflow is reported as an invalid expression rather than wrapping;
// i64 cannot represent the original's arbitrary-precision integers.
fn add(a: Value, b: Value) -> Result<Value, EvalError> {
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => x
            .checked_add(y)
            .map(Value::Int)
            .ok_or(EvalError::InvalidExpression),
        _ => Ok(Value::Float(as_f64(a) + as_f64(b))),
    }
}

fn sub(a: Value, b: Value) -> Result<Value, EvalError> {
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => x
            .checked_sub(y)
            .map(Value::Int)
            .ok_or(EvalError::InvalidExpression),
        _ => Ok(Value::Float(as_f64(a) - as_f64(b))),
    }
}

fn mul(a: Value, b: Value) -> Result<Value, EvalError> {
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => x
            .checked_mul(y)
            .map(Value::Int)
            .ok_or(EvalError::InvalidExpression),
        _ => Ok(Value::Float(as_f64(a) * as_f64(b))),
    }
}

fn div(a: Value, b: Value) -> Result<Value, EvalError> {
    if as_f64(b) == 0.0 {
        return Err(EvalError::DivisionByZero);
    }
    // True division: int / int yields a float.
    Ok(Value::Float(as_f64(a) / as_f64(b)))
}

fn neg(value: Value) -> Result<Value, EvalError> {
    match value {
        Value::Int(n) => n
            .checked_neg()
            .map(Value::Int)
            .ok_or(EvalError::InvalidExpression),
        Value::Float(x) => Ok(Value::Float(-x)),
    }
}

#[cfg(test)]
#[path = "tests/eval_tests.rs"]
mod tests;
