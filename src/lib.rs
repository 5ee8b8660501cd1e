//! Kargo Wire - RPC ↔ Custom Resource translation layer
//!
//! Converts between the protobuf messages the Kargo API server exchanges with
//! its clients and the Kubernetes custom resources its controllers reconcile.
//!
//! # Architecture
//!
//! ```text
//! wire (prost messages) ⇄ convert (From impls) ⇄ crd (kube resources)
//! ```
//!
//! The converters are pure and infallible. Each call allocates a fresh
//! output and never retains a reference into its input, so they can be used
//! from any number of threads without coordination.
//!
//! # Modules
//!
//! - [`crd`] - Kargo resources as Kubernetes custom resources
//! - [`wire`] - Protobuf messages
//! - [`convert`] - Conversions between the two
//! - [`codec`] - Manifest and byte encoding used by the CLI
//! - [`version`] - Build metadata
//! - [`error`] - Error types

pub mod codec;
pub mod convert;
pub mod crd;
pub mod error;
pub mod version;
pub mod wire;

pub use codec::{decode_to_manifest, encode_manifest, ResourceKind};
pub use error::{Error, Result};
pub use version::Version;
