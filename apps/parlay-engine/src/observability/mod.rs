//! Observability module for structured logging.

mod tracing;

pub use self::tracing::{TracingError, env_filter, init_tracing};
