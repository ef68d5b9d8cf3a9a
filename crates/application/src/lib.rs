//! Application layer - Use cases and orchestration
//!
//! Contains the search orchestrator, map scene builder, and port
//! definitions. Orchestrates domain objects and infrastructure adapters.

pub mod error;
pub mod ports;
pub mod services;

pub use error::{ApplicationError, ErrorKind};
pub use ports::*;
pub use services::*;
