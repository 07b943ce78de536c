//! Wire DTOs of the backend managers and their public webhook projections.

pub mod activeflow;
pub mod address;
pub mod agent;
pub mod ai;
pub mod billing;
pub mod call;
pub mod campaign;
pub mod chatbot;
pub mod chatbotcall;
pub mod conference;
pub mod contact;
pub mod conversation;
pub mod customer;
pub mod email;
pub mod filter;
pub mod flow;
pub mod identity;
pub mod number;
pub mod outdial;
pub mod outplan;
pub mod provider;
pub mod queue;
pub mod queuecall;
pub mod registrar;
pub mod route;
pub mod storage;
pub mod talk;
pub mod timeline;
pub mod tts;

pub use identity::{Identity, Owner, Resource, WebhookConvert};
