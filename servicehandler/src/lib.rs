//! API facade of the platform.
//!
//! Every public method of [`ServiceHandler`] is one API operation: it optionally fetches
//! the target resource to learn its owner, checks the calling agent's permission, forwards
//! the operation to the owning backend manager and converts the reply into its public
//! webhook message.

pub mod dbhandler;
pub mod errors;
pub mod metrics_defs;
pub mod permission;
pub mod utilhandler;

mod activeflow;
mod agent;
mod ai;
mod billing;
mod call;
mod campaign;
mod chatbot;
mod chatbotcall;
mod conference;
mod contact;
mod conversation;
mod customer;
mod email;
mod extension;
mod flow;
mod number;
mod outdial;
mod outplan;
mod provider;
mod queue;
mod queuecall;
mod route;
mod service_agent;
mod speaking;
mod storage;
mod timeline;

#[cfg(test)]
mod testing;

pub use call::RecordingOptions;
pub use timeline::TimelineResource;
pub use errors::{Result, ServiceError};
pub use permission::{MANAGER_MASK, has_permission};

use crate::dbhandler::DbHandler;
use crate::utilhandler::UtilHandler;
use models::agent::{Agent, Permission};
use models::filter::{FIELD_CUSTOMER_ID, FIELD_DELETED, Filterable, Filters, convert_filters};
use models::{Resource, WebhookConvert};
use requesthandler::RequestHandler;
use serde_json::json;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

/// Caller supplied list filters, every value as a string.
pub type RawFilters = HashMap<String, String>;

#[derive(Clone)]
pub struct ServiceHandler {
    req: RequestHandler,
    db: Arc<dyn DbHandler>,
    util: Arc<dyn UtilHandler>,
}

impl ServiceHandler {
    pub fn new(req: RequestHandler, db: Arc<dyn DbHandler>, util: Arc<dyn UtilHandler>) -> Self {
        ServiceHandler { req, db, util }
    }

    /// Pagination token to send, the current time when the caller gave none.
    fn token_or_now(&self, token: &str) -> String {
        if token.is_empty() {
            self.util.time_get_cur_time()
        } else {
            token.to_string()
        }
    }
}

/// Awaits a backend fetch. A 404 and a soft-deleted row both become [`ServiceError::NotFound`].
async fn fetch<T, F>(fut: F) -> Result<T>
where
    T: Resource,
    F: Future<Output = requesthandler::Result<T>>,
{
    match fut.await {
        Ok(res) if res.is_deleted() => {
            tracing::debug!(kind = T::KIND, id = %res.id(), "resource is deleted");
            Err(ServiceError::NotFound(T::KIND))
        }
        Ok(res) => Ok(res),
        Err(err) if err.is_not_found() => Err(ServiceError::NotFound(T::KIND)),
        Err(err) => {
            tracing::warn!(kind = T::KIND, error = %err, "could not get the resource");
            Err(err.into())
        }
    }
}

/// [`fetch`] followed by the permission check against the fetched row's customer.
async fn fetch_authorized<T, F>(agent: &Agent, mask: Permission, fut: F) -> Result<T>
where
    T: Resource,
    F: Future<Output = requesthandler::Result<T>>,
{
    let res = fetch(fut).await?;
    permission::ensure_permission(agent, res.customer_id(), mask)?;
    Ok(res)
}

fn convert_list<T: WebhookConvert>(items: Vec<T>) -> Vec<T::Message> {
    items
        .into_iter()
        .map(WebhookConvert::convert_webhook_message)
        .collect()
}

/// Typed filters of a list scoped to the agent's customer.
///
/// `customer_id` always becomes the agent's own customer and `deleted` defaults to false.
fn customer_filters<T: Filterable>(agent: &Agent, raw: &RawFilters) -> Result<Filters> {
    let mut filters = convert_filters::<T>(raw)?;
    filters.insert(FIELD_CUSTOMER_ID.into(), json!(agent.customer_id()));
    filters
        .entry(FIELD_DELETED.to_string())
        .or_insert(json!(false));
    Ok(filters)
}
