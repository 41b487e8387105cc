use thiserror::Error;

/// Errors at the JSON boundary of the layout engine.
///
/// The layout pipeline itself never fails; only parsing input and
/// serializing output can.
#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Failed to parse funnel list: {0}")]
    InvalidFunnels(#[source] serde_json::Error),

    #[error("Failed to parse layout config: {0}")]
    InvalidConfig(#[source] serde_json::Error),

    #[error("Failed to serialize layout: {0}")]
    Serialize(#[source] serde_json::Error),
}
