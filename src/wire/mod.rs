//! Wire Messages
//!
//! Protobuf messages exchanged with the API server. Optional scalars use
//! proto3 explicit presence, so `None` ("never set") is distinct from
//! `Some(String::new())` ("set to empty").

pub mod metav1;
pub mod service;
pub mod v1alpha1;

pub use metav1::{ManagedFieldsEntry, ObjectMeta};
pub use service::{Project, VersionInfo};
pub use v1alpha1::*;
