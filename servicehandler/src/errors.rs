use models::filter::FilterError;
use requesthandler::RequestError;
use thiserror::Error;

pub type Result<T, E = ServiceError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("user has no permission")]
    NoPermission,

    /// Same as `NoPermission`, reported by the agent self-service operations.
    #[error("agent has no permission")]
    AgentNoPermission,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("agent is not a participant of this chat")]
    NotParticipant,

    #[error("agent does not own this {0}")]
    NotOwner(&'static str),

    #[error("invalid accesskey")]
    InvalidAccesskey,

    #[error("invalid filter: {0}")]
    InvalidFilter(#[from] FilterError),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Request(#[from] RequestError),
}

impl ServiceError {
    /// True for every variant that means the caller may not see or touch the resource.
    pub fn is_forbidden(&self) -> bool {
        matches!(
            self,
            ServiceError::NoPermission
                | ServiceError::AgentNoPermission
                | ServiceError::NotParticipant
                | ServiceError::NotOwner(_)
        )
    }
}
