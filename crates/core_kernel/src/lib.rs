//! Core Kernel - Foundational types for the loan pre-approval service
//!
//! This crate provides the building blocks shared by the domain, database,
//! and HTTP layers:
//! - Strongly-typed identifiers
//! - Port infrastructure for swappable store adapters
//! - Offset pagination primitives

pub mod identifiers;
pub mod ports;
pub mod pagination;

pub use identifiers::ApplicationId;
pub use ports::{
    PortError, DomainPort, HealthCheckable, HealthCheckResult, AdapterHealth,
    OperationMetadata,
};
pub use pagination::{PageRequest, Page};
