pub type MaskVisResult<T> = Result<T, MaskVisError>;

#[derive(thiserror::Error, Debug)]
pub enum MaskVisError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("mask error: {0}")]
    Mask(String),

    #[error("encode error: {0}")]
    Encode(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MaskVisError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn mask(msg: impl Into<String>) -> Self {
        Self::Mask(msg.into())
    }

    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
