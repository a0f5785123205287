//! Lifecycle event system — synchronous, panic-isolated dispatch.

pub mod dispatcher;
pub mod handler;
pub mod types;

pub use dispatcher::EventDispatcher;
pub use handler::AttestEventHandler;
pub use types::*;
