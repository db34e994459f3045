//! Uniform lifecycle and readiness contract over Kubernetes resources.
//!
//! Every supported resource kind is driven through the same small capability
//! set: create it unless it already exists, delete it, and re-read its
//! remote state to decide whether it is ready. Resources the orchestration
//! depends on but does not own go through the same contract with creation
//! reduced to an existence check. On top of the per-resource contract sits
//! the group readiness aggregation that turns many resources into a single
//! go/no-go verdict.

pub mod client;
pub mod definition;
pub mod kinds;
pub mod readiness;
pub mod registry;
pub mod report;
pub mod resource;
