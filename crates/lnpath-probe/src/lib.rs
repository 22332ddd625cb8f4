//! lnpath probe loop
//!
//! Pairs the local route engine with the daemon: compute the cheapest route,
//! send a probe along it, and when the probe is rejected ignore the failing
//! edge and search again.

pub mod adapters;
pub mod error;
pub mod prober;
pub mod traits;
pub mod types;

pub use adapters::memory::{InMemoryGraph, SimulatedProber};
pub use error::ProbeError;
pub use prober::ProbeLoop;
pub use traits::{GraphSource, PaymentProber};
pub use types::{ProbeOutcome, ProbedRoute};
