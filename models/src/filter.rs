//! Conversion of caller supplied list filters into typed backend filters.
//!
//! API callers send every filter as a string. Backends expect each value in the type of
//! the column it filters on, so every listable model declares its filterable fields with
//! [`Filterable::FILTER_FIELDS`].

use indexmap::IndexMap;
use serde_json::Value;
use std::collections::HashMap;
use uuid::Uuid;

/// Typed filters sent in the body of list requests.
pub type Filters = IndexMap<String, Value>;

pub const FIELD_CUSTOMER_ID: &str = "customer_id";
pub const FIELD_DELETED: &str = "deleted";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Uuid,
    Bool,
    Integer,
    Float,
}

pub trait Filterable {
    const FILTER_FIELDS: &'static [(&'static str, FieldKind)];
}

#[derive(thiserror::Error, Debug, PartialEq)]
#[error("invalid value for filter {field}: {value:?}")]
pub struct FilterError {
    pub field: String,
    pub value: String,
}

impl FieldKind {
    fn parse(&self, value: &str) -> Option<Value> {
        match self {
            FieldKind::String => Some(Value::String(value.to_string())),
            FieldKind::Uuid => Uuid::parse_str(value)
                .ok()
                .map(|v| Value::String(v.to_string())),
            FieldKind::Bool => value.parse::<bool>().ok().map(Value::Bool),
            FieldKind::Integer => value.parse::<i64>().ok().map(Value::from),
            FieldKind::Float => value
                .parse::<f64>()
                .ok()
                .and_then(serde_json::Number::from_f64)
                .map(Value::Number),
        }
    }
}

/// Converts string filters into the typed form `T`'s backend understands.
///
/// Keys `T` does not declare are dropped. Output keys are sorted so requests are
/// deterministic.
pub fn convert_filters<T: Filterable>(raw: &HashMap<String, String>) -> Result<Filters, FilterError> {
    let mut keys: Vec<&String> = raw.keys().collect();
    keys.sort();

    let mut res = Filters::new();
    for key in keys {
        let Some((_, kind)) = T::FILTER_FIELDS.iter().find(|(name, _)| *name == key.as_str()) else {
            continue;
        };
        let value = &raw[key];
        let typed = kind.parse(value).ok_or_else(|| FilterError {
            field: key.clone(),
            value: value.clone(),
        })?;
        res.insert(key.clone(), typed);
    }

    Ok(res)
}
