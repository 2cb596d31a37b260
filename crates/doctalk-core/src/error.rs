use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown question category: {0}")]
    UnknownCategory(String),

    #[error("unknown risk tier: {0}")]
    UnknownRiskTier(String),

    #[error("user id must not be empty")]
    EmptyUserId,
}
