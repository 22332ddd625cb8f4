use lnpath_core::NodeId;
use lnpath_routing::RoutingError;

/// Probe-layer errors.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("routing error: {0}")]
    Routing(#[from] RoutingError),

    #[error("graph source error: {0}")]
    GraphSource(String),

    #[error("prober error: {0}")]
    Prober(String),

    #[error("no working route after {attempts} attempts")]
    AttemptsExhausted { attempts: usize },

    #[error("probe failed again at ignored edge {channel} -> {public_key}")]
    RepeatedFailure { channel: String, public_key: NodeId },
}
