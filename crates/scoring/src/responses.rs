//! Response sets and the parse step that guards the calculator.
//!
//! Only integers in [1, 5] keyed by a catalog question id ever reach the
//! score calculator; everything else is rejected here.

use crate::catalog::{question, QUESTIONS};
use indexmap::IndexMap;
use thiserror::Error;

/// Lowest Likert value.
pub const MIN_RESPONSE: u8 = 1;
/// Highest Likert value.
pub const MAX_RESPONSE: u8 = 5;

/// Question id → Likert score. Insertion order is preserved when serialized.
pub type Responses = IndexMap<String, u8>;

/// Rejected response input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResponseError {
    #[error("unknown question id '{0}'")]
    UnknownQuestion(String),
    #[error("response for {question} must be a whole number, got '{raw}'")]
    NotAnInteger { question: String, raw: String },
    #[error("response for {question} must be between 1 and 5, got {value}")]
    OutOfRange { question: String, value: i64 },
    #[error("malformed response entry '{0}', expected QID=SCORE")]
    Malformed(String),
}

/// Parse and range-check a single response value.
pub fn parse_response_value(question_id: &str, raw: &str) -> Result<u8, ResponseError> {
    if question(question_id).is_none() {
        return Err(ResponseError::UnknownQuestion(question_id.to_string()));
    }
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| ResponseError::NotAnInteger {
            question: question_id.to_string(),
            raw: raw.to_string(),
        })?;
    if !(i64::from(MIN_RESPONSE)..=i64::from(MAX_RESPONSE)).contains(&value) {
        return Err(ResponseError::OutOfRange {
            question: question_id.to_string(),
            value,
        });
    }
    // Range-checked above.
    Ok(value as u8)
}

/// Parse `Q1=3,Q2=4` style input. Whitespace around entries is ignored and
/// question ids are matched case-insensitively.
pub fn parse_responses(input: &str) -> Result<Responses, ResponseError> {
    let mut responses = Responses::new();
    for entry in input.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let (id, raw) = entry
            .split_once('=')
            .ok_or_else(|| ResponseError::Malformed(entry.to_string()))?;
        let id = id.trim().to_ascii_uppercase();
        let value = parse_response_value(&id, raw)?;
        responses.insert(id, value);
    }
    Ok(responses)
}

/// Validate an already-typed response set (e.g. one loaded from JSON).
pub fn check_responses(responses: &Responses) -> Result<(), ResponseError> {
    for (id, value) in responses {
        if question(id).is_none() {
            return Err(ResponseError::UnknownQuestion(id.clone()));
        }
        if !(MIN_RESPONSE..=MAX_RESPONSE).contains(value) {
            return Err(ResponseError::OutOfRange {
                question: id.clone(),
                value: i64::from(*value),
            });
        }
    }
    Ok(())
}

/// Catalog question ids with no entry in `responses`, in catalog order.
pub fn missing_questions(responses: &Responses) -> Vec<&'static str> {
    QUESTIONS
        .iter()
        .map(|q| q.id)
        .filter(|id| !responses.contains_key(*id))
        .collect()
}

/// A response set is complete when every catalog question is answered.
pub fn is_complete(responses: &Responses) -> bool {
    missing_questions(responses).is_empty()
}

/// Re-key a response set into catalog order, dropping nothing.
///
/// Entries for ids outside the catalog keep their relative order at the end.
pub fn in_catalog_order(responses: &Responses) -> Responses {
    let mut ordered = Responses::with_capacity(responses.len());
    for q in QUESTIONS {
        if let Some(value) = responses.get(q.id) {
            ordered.insert(q.id.to_string(), *value);
        }
    }
    for (id, value) in responses {
        if !ordered.contains_key(id) {
            ordered.insert(id.clone(), *value);
        }
    }
    ordered
}
