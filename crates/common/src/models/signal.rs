use std::fmt;

use serde_json::{Map, Value};

/// Fixed deployment identifier, always the first field of a published line.
pub const SIGNAL_ID: &str = "100";

/// A payload field as extracted from the webhook body.
///
/// `Missing` is distinct from an empty string: the slot line renders it as
/// the literal text `None`, which is what the terminal-side parser expects
/// for absent fields.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Missing,
    Present(Value),
}

impl FieldValue {
    fn extract(payload: &Map<String, Value>, key: &str) -> Self {
        match payload.get(key) {
            None | Some(Value::Null) => FieldValue::Missing,
            Some(value) => FieldValue::Present(value.clone()),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Missing | FieldValue::Present(Value::Null) => write!(f, "None"),
            FieldValue::Present(Value::String(s)) => write!(f, "{}", s),
            FieldValue::Present(value) => write!(f, "{}", value),
        }
    }
}

/// One trading instruction, as handed off to the terminal.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalRecord {
    pub id: &'static str,
    pub symbol: FieldValue,
    pub side: String,
    pub risk_percent: FieldValue,
    pub entry: FieldValue,
    pub sl: FieldValue,
    pub tp1: FieldValue,
    pub tp2: FieldValue,
}

impl SignalRecord {
    /// Builds the record from a webhook payload.
    ///
    /// Extraction is permissive: absent keys (and JSON `null` values) become
    /// `FieldValue::Missing`, unknown keys are ignored, and no field is
    /// range-checked or coerced. `side` is rendered to text, trimmed and
    /// upper-cased without being validated against an allowed set; an absent
    /// `side` normalizes the placeholder text itself, producing `NONE`.
    pub fn from_payload(payload: &Map<String, Value>) -> Self {
        let side = FieldValue::extract(payload, "side")
            .to_string()
            .trim()
            .to_uppercase();

        Self {
            id: SIGNAL_ID,
            symbol: FieldValue::extract(payload, "symbol"),
            side,
            risk_percent: FieldValue::extract(payload, "risk_percent"),
            entry: FieldValue::extract(payload, "entry"),
            sl: FieldValue::extract(payload, "sl"),
            tp1: FieldValue::extract(payload, "tp1"),
            tp2: FieldValue::extract(payload, "tp2"),
        }
    }

    /// Serializes the record to the slot line: eight `;`-joined fields in
    /// fixed order, no escaping or quoting. The unescaped format is the wire
    /// contract with the terminal-side parser; a field value containing `;`
    /// corrupts the line.
    pub fn to_line(&self) -> String {
        format!(
            "{};{};{};{};{};{};{};{}",
            self.id,
            self.symbol,
            self.side,
            self.risk_percent,
            self.entry,
            self.sl,
            self.tp1,
            self.tp2
        )
    }
}
