//! Per-kind bindings of the Kubernetes object types to the lifecycle
//! contract. Each module holds its kind's readiness predicate; everything
//! else about a kind's lifecycle is shared.

mod config_map;
mod daemon_set;
mod deployment;
mod job;
mod pod;
mod replica_set;
mod secret;
mod service;
mod stateful_set;
mod volume_claim;
