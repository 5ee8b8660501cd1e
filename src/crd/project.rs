//! Project resource
//!
//! A Project is the namespace-like container every other resource lives in.
//! Only its name and creation time cross this layer.

use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::core::TypeMeta;
use serde::{Deserialize, Serialize};

use super::{kinds, type_meta};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(flatten)]
    pub types: TypeMeta,

    #[serde(default)]
    pub metadata: ObjectMeta,
}

impl Default for Project {
    fn default() -> Self {
        Self {
            types: type_meta(kinds::PROJECT),
            metadata: ObjectMeta::default(),
        }
    }
}

impl Project {
    /// Get the name of this project
    pub fn name(&self) -> &str {
        self.metadata.name.as_deref().unwrap_or("unknown")
    }
}

super::impl_resource!(
    Project,
    kinds::PROJECT,
    "projects",
    k8s_openapi::ClusterResourceScope
);
