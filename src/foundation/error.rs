/// Convenience result type used across pipdeck.
pub type DeckResult<T> = Result<T, DeckError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum DeckError {
    /// Rank, suit or pip count outside the supported ranges.
    #[error("invalid card spec: {0}")]
    InvalidCardSpec(String),

    /// Invalid user-provided configuration or geometry.
    #[error("validation error: {0}")]
    Validation(String),

    /// Missing or undecodable artwork and glyph assets.
    #[error("asset error: {0}")]
    Asset(String),

    /// Errors while rasterizing or compositing a card face.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing manifests and configs.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DeckError {
    /// Build a [`DeckError::InvalidCardSpec`] value.
    pub fn invalid_card(msg: impl Into<String>) -> Self {
        Self::InvalidCardSpec(msg.into())
    }

    /// Build a [`DeckError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`DeckError::Asset`] value.
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    /// Build a [`DeckError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`DeckError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
