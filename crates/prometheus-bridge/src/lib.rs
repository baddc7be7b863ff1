mod guards;
mod metrics;

pub use guards::{check_inbound_observed, check_outbound_observed};
pub use metrics::{GuardMetrics, UNREGISTERED_KEY_LABEL};
