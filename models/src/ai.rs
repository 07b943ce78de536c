use crate::filter::{FieldKind, Filterable};
use crate::identity::{Identity, WebhookConvert, impl_resource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// AI agent configuration: language model, voice and tools.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Ai {
    #[serde(flatten)]
    pub identity: Identity,

    #[serde(flatten)]
    pub fields: AiFields,

    #[serde(default)]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_delete: Option<DateTime<Utc>>,
}

impl_resource!(Ai, "ai");

/// Writable fields of an AI, sent on create and update.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AiFields {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub detail: String,

    #[serde(default)]
    pub engine_type: String,
    #[serde(default)]
    pub engine_model: String,
    #[serde(default)]
    pub engine_data: Map<String, Value>,
    /// Provider API key, never leaves the backend boundary.
    #[serde(default)]
    pub engine_key: String,

    #[serde(default)]
    pub init_prompt: String,

    #[serde(default)]
    pub tts_type: String,
    #[serde(default)]
    pub tts_voice_id: String,
    #[serde(default)]
    pub stt_type: String,

    #[serde(default)]
    pub tool_names: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AiWebhookMessage {
    #[serde(flatten)]
    pub identity: Identity,
    pub name: String,
    pub detail: String,
    pub engine_type: String,
    pub engine_model: String,
    pub engine_data: Map<String, Value>,
    pub init_prompt: String,
    pub tts_type: String,
    pub tts_voice_id: String,
    pub stt_type: String,
    pub tool_names: Vec<String>,
    pub tm_create: Option<DateTime<Utc>>,
    pub tm_update: Option<DateTime<Utc>>,
    pub tm_delete: Option<DateTime<Utc>>,
}

impl WebhookConvert for Ai {
    type Message = AiWebhookMessage;

    fn convert_webhook_message(self) -> AiWebhookMessage {
        let f = self.fields;
        AiWebhookMessage {
            identity: self.identity,
            name: f.name,
            detail: f.detail,
            engine_type: f.engine_type,
            engine_model: f.engine_model,
            engine_data: f.engine_data,
            init_prompt: f.init_prompt,
            tts_type: f.tts_type,
            tts_voice_id: f.tts_voice_id,
            stt_type: f.stt_type,
            tool_names: f.tool_names,
            tm_create: self.tm_create,
            tm_update: self.tm_update,
            tm_delete: self.tm_delete,
        }
    }
}

impl Filterable for Ai {
    const FILTER_FIELDS: &'static [(&'static str, FieldKind)] = &[
        ("customer_id", FieldKind::Uuid),
        ("name", FieldKind::String),
        ("engine_type", FieldKind::String),
        ("deleted", FieldKind::Bool),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_webhook_hides_engine_key() {
        let json = serde_json::json!({
            "id": "6f4b1f0c-8e5f-11ee-8b8e-3b0a4a1b7e11",
            "customer_id": "5f621078-8e5f-11ee-97b2-cfe7337b701c",
            "name": "support bot",
            "engine_type": "openai",
            "engine_model": "gpt-4o",
            "engine_key": "sk-secret",
            "tool_names": ["connect_call"]
        });
        let ai: Ai = serde_json::from_value(json).unwrap();
        assert_eq!(ai.fields.engine_key, "sk-secret");

        let msg = serde_json::to_value(ai.convert_webhook_message()).unwrap();
        assert_eq!(msg["engine_model"], "gpt-4o");
        assert_eq!(msg["tool_names"][0], "connect_call");
        assert!(msg.get("engine_key").is_none());
    }
}
