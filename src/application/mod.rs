// SPDX-License-Identifier: MPL-2.0
//! Application layer - Query services and ports.
//!
//! - [`port`]: Trait definitions (interfaces) implemented by view adapters
//! - [`query`]: Filter and carousel state services
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - View adapters implement application layer ports
//! - The [`app`](crate::app) dispatcher wires both together

pub mod port;
pub mod query;
