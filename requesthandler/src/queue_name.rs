use serde::Deserialize;
use std::fmt;

/// Request queue of each backend manager.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueueName {
    Agent,
    Ai,
    Billing,
    Call,
    Campaign,
    Chatbot,
    Conference,
    Contact,
    Conversation,
    Customer,
    Email,
    Flow,
    Number,
    Outdial,
    Queue,
    Registrar,
    Route,
    Storage,
    Talk,
    Timeline,
    Tts,
}

impl QueueName {
    pub const fn as_str(&self) -> &'static str {
        match self {
            QueueName::Agent => "bin-manager.agent-manager.request",
            QueueName::Ai => "bin-manager.ai-manager.request",
            QueueName::Billing => "bin-manager.billing-manager.request",
            QueueName::Call => "bin-manager.call-manager.request",
            QueueName::Campaign => "bin-manager.campaign-manager.request",
            QueueName::Chatbot => "bin-manager.chatbot-manager.request",
            QueueName::Conference => "bin-manager.conference-manager.request",
            QueueName::Contact => "bin-manager.contact-manager.request",
            QueueName::Conversation => "bin-manager.conversation-manager.request",
            QueueName::Customer => "bin-manager.customer-manager.request",
            QueueName::Email => "bin-manager.email-manager.request",
            QueueName::Flow => "bin-manager.flow-manager.request",
            QueueName::Number => "bin-manager.number-manager.request",
            QueueName::Outdial => "bin-manager.outdial-manager.request",
            QueueName::Queue => "bin-manager.queue-manager.request",
            QueueName::Registrar => "bin-manager.registrar-manager.request",
            QueueName::Route => "bin-manager.route-manager.request",
            QueueName::Storage => "bin-manager.storage-manager.request",
            QueueName::Talk => "bin-manager.talk-manager.request",
            QueueName::Timeline => "bin-manager.timeline-manager.request",
            QueueName::Tts => "bin-manager.tts-manager.request",
        }
    }

    /// Queue of a single pod of this manager, for stateful sessions pinned to it.
    pub fn pod(&self, pod_id: &str) -> String {
        format!("{}.{}", self.as_str(), pod_id)
    }

    /// True if `target` is this queue or one of its pod queues.
    pub fn serves(&self, target: &str) -> bool {
        match target.strip_prefix(self.as_str()) {
            Some("") => true,
            Some(rest) => rest.starts_with('.'),
            None => false,
        }
    }
}

impl fmt::Display for QueueName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pod_queue() {
        let target = QueueName::Tts.pod("tts-manager-7d9c5b-x2k4p");
        assert_eq!(
            target,
            "bin-manager.tts-manager.request.tts-manager-7d9c5b-x2k4p"
        );
        assert!(QueueName::Tts.serves(&target));
        assert!(QueueName::Tts.serves("bin-manager.tts-manager.request"));
        assert!(!QueueName::Tts.serves("bin-manager.tts-manager.requests"));
        assert!(!QueueName::Call.serves(&target));
    }
}
