//! Stdio Driver Adapter
//!
//! JSON-lines protocol over stdin/stdout. Pure local I/O.

mod dispatcher;
mod protocol;

pub use dispatcher::Dispatcher;
pub use protocol::{EngineRequest, EngineResponse};
