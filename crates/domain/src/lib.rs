//! Domain layer for PawFinder
//!
//! Contains the core entities and value objects of the pet-services search
//! domain. This layer has no external service dependencies and defines the
//! ubiquitous language.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
