//! Structural JSON comparison.
//!
//! Objects compare by key set regardless of key order, arrays element by
//! element in order, scalars exactly (`1` and `1.0` differ).

use crate::core::error::VerifyError;
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum JsonDifference {
    Missing { path: String, expected: Value },
    Unexpected { path: String, actual: Value },
    Changed { path: String, expected: Value, actual: Value },
    Length { path: String, expected: usize, actual: usize },
}

impl JsonDifference {
    pub fn path(&self) -> &str {
        match self {
            JsonDifference::Missing { path, .. }
            | JsonDifference::Unexpected { path, .. }
            | JsonDifference::Changed { path, .. }
            | JsonDifference::Length { path, .. } => path.as_str(),
        }
    }
}

impl fmt::Display for JsonDifference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonDifference::Missing { path, expected } => {
                write!(f, "{}: missing, expected {}", display_path(path), expected)
            }
            JsonDifference::Unexpected { path, actual } => {
                write!(f, "{}: unexpected value {}", display_path(path), actual)
            }
            JsonDifference::Changed {
                path,
                expected,
                actual,
            } => write!(
                f,
                "{}: expected {}, got {}",
                display_path(path),
                expected,
                actual
            ),
            JsonDifference::Length {
                path,
                expected,
                actual,
            } => write!(
                f,
                "{}: expected {} element(s), got {}",
                display_path(path),
                expected,
                actual
            ),
        }
    }
}

fn display_path(path: &str) -> &str {
    if path.is_empty() {
        "/"
    } else {
        path
    }
}

/// JSON-pointer escaping of one reference token.
fn escape_token(token: &str) -> String {
    token.replace('~', "~0").replace('/', "~1")
}

/// Every difference between `expected` and `actual`; empty when they are equal.
pub fn json_differences(expected: &Value, actual: &Value) -> Vec<JsonDifference> {
    let mut out = Vec::new();
    walk("", expected, actual, &mut out);
    out
}

fn walk(path: &str, expected: &Value, actual: &Value, out: &mut Vec<JsonDifference>) {
    match (expected, actual) {
        (Value::Object(exp), Value::Object(act)) => {
            for (key, exp_val) in exp {
                let child = format!("{}/{}", path, escape_token(key));
                match act.get(key) {
                    Some(act_val) => walk(&child, exp_val, act_val, out),
                    None => out.push(JsonDifference::Missing {
                        path: child,
                        expected: exp_val.clone(),
                    }),
                }
            }
            for (key, act_val) in act {
                if !exp.contains_key(key) {
                    out.push(JsonDifference::Unexpected {
                        path: format!("{}/{}", path, escape_token(key)),
                        actual: act_val.clone(),
                    });
                }
            }
        }
        (Value::Array(exp), Value::Array(act)) => {
            if exp.len() != act.len() {
                out.push(JsonDifference::Length {
                    path: path.to_string(),
                    expected: exp.len(),
                    actual: act.len(),
                });
            }
            for (i, (e, a)) in exp.iter().zip(act.iter()).enumerate() {
                walk(&format!("{}/{}", path, i), e, a, out);
            }
        }
        _ => {
            if expected != actual {
                out.push(JsonDifference::Changed {
                    path: path.to_string(),
                    expected: expected.clone(),
                    actual: actual.clone(),
                });
            }
        }
    }
}

/// `Ok` when `actual` is structurally equal to the fixture document.
pub fn expect_json_eq(fixture: &str, expected: &Value, actual: &Value) -> Result<(), VerifyError> {
    let differences = json_differences(expected, actual);
    if differences.is_empty() {
        Ok(())
    } else {
        Err(VerifyError::DataLayerMismatch {
            fixture: fixture.to_string(),
            differences: differences.iter().map(|d| d.to_string()).collect(),
        })
    }
}
