//! # Ports
//!
//! Interface definitions for external collaborators.
//!
//! - [`dataset`]: numbering plan rows from a downloaded or cached dataset
//! - [`snapshots`]: historical datasets keyed by publication date
//! - [`sink`]: provisioning target that stores generated patterns
//!
//! These ports keep the use cases independent of transport, archive and RPC details.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod dataset;
pub mod sink;
pub mod snapshots;
