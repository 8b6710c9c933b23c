//! Fun-fact payload schemas and edit rules.
//!
//! Request bodies are checked here, before any store round trip, so a
//! rejected payload never causes a mutation. Callers address facts by
//! 1-based position; [`resolve_position`] is the only place that
//! translates to a 0-based offset, and both update and delete go through
//! it.

use rand::seq::IndexedRandom;
use serde_json::Value;
use statefacts_types::FactDocument;

/// Reasons a fun-fact request body is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PayloadError {
    /// `funfacts` is absent, null, or an empty array.
    #[error("State fun facts value required")]
    MissingFunFacts,

    /// `funfacts` is present but is not an array of strings.
    #[error("State fun facts value must be an array")]
    NotAnArray,

    /// `index` is absent or not an integer.
    #[error("State fun fact index value required")]
    MissingIndex,

    /// `funfact` is absent or not a string.
    #[error("State fun fact value required")]
    MissingFunFact,
}

/// Validated body of an add request: facts to append, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddFunFacts {
    /// Facts to append to the end of the stored sequence.
    pub funfacts: Vec<String>,
}

impl AddFunFacts {
    /// Check an add request body.
    ///
    /// Absence (or an empty array) is reported before shape, so
    /// `{"funfacts": []}` is [`PayloadError::MissingFunFacts`] while
    /// `{"funfacts": "x"}` is [`PayloadError::NotAnArray`].
    pub fn from_payload(body: &Value) -> Result<Self, PayloadError> {
        let field = match body.get("funfacts") {
            None | Some(Value::Null) => return Err(PayloadError::MissingFunFacts),
            Some(field) => field,
        };
        let Value::Array(items) = field else {
            return Err(PayloadError::NotAnArray);
        };
        if items.is_empty() {
            return Err(PayloadError::MissingFunFacts);
        }

        let funfacts = items
            .iter()
            .map(|item| item.as_str().map(str::to_owned))
            .collect::<Option<Vec<_>>>()
            .ok_or(PayloadError::NotAnArray)?;

        Ok(Self { funfacts })
    }
}

/// Validated body of an update request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateFunFact {
    /// 1-based position of the fact to replace.
    pub index: i64,
    /// Replacement text.
    pub funfact: String,
}

impl UpdateFunFact {
    /// Check an update request body. Both `index` and `funfact` are required.
    pub fn from_payload(body: &Value) -> Result<Self, PayloadError> {
        let index = required_index(body)?;
        let funfact = body
            .get("funfact")
            .and_then(Value::as_str)
            .ok_or(PayloadError::MissingFunFact)?
            .to_owned();
        Ok(Self { index, funfact })
    }
}

/// Validated body of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteFunFact {
    /// 1-based position of the fact to remove.
    pub index: i64,
}

impl DeleteFunFact {
    /// Check a delete request body. Only `index` is required.
    pub fn from_payload(body: &Value) -> Result<Self, PayloadError> {
        Ok(Self {
            index: required_index(body)?,
        })
    }
}

/// Read `index` as an integer. Whole-valued floats such as `2.0` count;
/// `2.5`, strings, and anything outside the `i64` range do not.
fn required_index(body: &Value) -> Result<i64, PayloadError> {
    let number = body
        .get("index")
        .and_then(Value::as_number)
        .ok_or(PayloadError::MissingIndex)?;
    if let Some(index) = number.as_i64() {
        return Ok(index);
    }
    number
        .as_f64()
        .filter(|f| f.fract() == 0.0 && (I64_MIN_F64..I64_MAX_F64).contains(f))
        .map(whole_f64_to_i64)
        .ok_or(PayloadError::MissingIndex)
}

/// `i64::MIN` as an `f64` (exactly representable).
const I64_MIN_F64: f64 = -9_223_372_036_854_775_808.0;
/// `2^63`, one past `i64::MAX`, as an `f64`.
const I64_MAX_F64: f64 = 9_223_372_036_854_775_808.0;

#[allow(clippy::cast_possible_truncation)]
fn whole_f64_to_i64(value: f64) -> i64 {
    // Caller guarantees a whole number inside the i64 range.
    value as i64
}

/// Translate a caller's 1-based index into an offset into a sequence of
/// `len` entries. Returns `None` when it falls outside `1..=len`.
pub fn resolve_position(index: i64, len: usize) -> Option<usize> {
    let position = usize::try_from(index.checked_sub(1)?).ok()?;
    (position < len).then_some(position)
}

/// Append `funfacts` to `doc`, keeping prior entries first.
pub fn append(doc: &mut FactDocument, funfacts: Vec<String>) {
    doc.funfacts.extend(funfacts);
}

/// Replace the fact at 1-based `index`. Returns `false`, leaving `doc`
/// untouched, when the index is out of range.
pub fn replace_at(doc: &mut FactDocument, index: i64, funfact: String) -> bool {
    let Some(slot) =
        resolve_position(index, doc.funfacts.len()).and_then(|p| doc.funfacts.get_mut(p))
    else {
        return false;
    };
    *slot = funfact;
    true
}

/// Remove the fact at 1-based `index`, shifting later entries left.
/// Returns the removed fact, or `None` when the index is out of range.
pub fn remove_at(doc: &mut FactDocument, index: i64) -> Option<String> {
    let position = resolve_position(index, doc.funfacts.len())?;
    Some(doc.funfacts.remove(position))
}

/// Choose one fact uniformly at random. `None` for an empty document.
pub fn pick_random(doc: &FactDocument) -> Option<&str> {
    doc.funfacts.choose(&mut rand::rng()).map(String::as_str)
}
