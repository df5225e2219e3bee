//! Search API collaborators and the search orchestrator.
//!
//! This crate provides:
//! - `SearchApi` - The search collaborator contract
//! - `HttpSearchApi` - The remote search API over HTTP
//! - `MockSearchApi` - The in-memory mock catalog with artificial latency
//! - `SearchOrchestrator` - Owns the request lifecycle and the observable state

mod api;
mod error;
mod mock;
mod orchestrator;
mod remote;

pub use api::*;
pub use error::*;
pub use mock::*;
pub use orchestrator::*;
pub use remote::*;
