use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressType {
    #[default]
    #[serde(rename = "")]
    None,
    Agent,
    Conference,
    Email,
    Extension,
    Line,
    Sip,
    Tel,
}

/// Endpoint of a call, message or email.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(rename = "type", default)]
    pub kind: AddressType,
    #[serde(default)]
    pub target: String,
    #[serde(default)]
    pub target_name: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub detail: String,
}

impl Address {
    pub fn new(kind: AddressType, target: impl Into<String>) -> Self {
        Address {
            kind,
            target: target.into(),
            ..Default::default()
        }
    }
}
