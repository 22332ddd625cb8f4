use lnpath_core::CoreError;

/// Errors that can occur within the routing layer.
///
/// An unreachable destination is not an error: searches report it as an
/// empty [`lnpath_core::RouteResult`].
#[derive(Debug, thiserror::Error)]
pub enum RoutingError {
    #[error("invalid route request: {0}")]
    InvalidRequest(#[from] CoreError),

    #[error("forwarded amount overflows at channel {channel}")]
    AmountOverflow { channel: String },

    #[error("route has no hops")]
    EmptyRoute,
}
