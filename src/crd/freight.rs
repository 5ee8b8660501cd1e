//! Freight resource
//!
//! Freight is an immutable, content-identified bundle of artifact references
//! that moves from Stage to Stage. Unlike the other resources it has no spec:
//! its identity and artifacts sit at the top level.

use std::collections::BTreeMap;

use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::core::TypeMeta;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::artifacts::{Chart, GitCommit, Image, SimpleFreight};
use super::{kinds, type_meta};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Freight {
    #[serde(flatten)]
    pub types: TypeMeta,

    #[serde(default)]
    pub metadata: ObjectMeta,

    /// Content-derived ID
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub commits: Vec<GitCommit>,

    #[serde(default)]
    pub images: Vec<Image>,

    #[serde(default)]
    pub charts: Vec<Chart>,

    #[serde(default)]
    pub status: FreightStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FreightStatus {
    /// Stages this Freight has been qualified for, keyed by Stage name
    #[serde(default)]
    pub qualifications: BTreeMap<String, Qualification>,
}

/// Marker recording that Freight qualified for a Stage.
///
/// Presence in [`FreightStatus::qualifications`] is the whole signal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Qualification {}

impl Default for Freight {
    fn default() -> Self {
        Self {
            types: type_meta(kinds::FREIGHT),
            metadata: ObjectMeta::default(),
            id: String::new(),
            commits: Vec::new(),
            images: Vec::new(),
            charts: Vec::new(),
            status: FreightStatus::default(),
        }
    }
}

impl Freight {
    /// Get the name of this freight
    pub fn name(&self) -> &str {
        self.metadata.name.as_deref().unwrap_or("unknown")
    }

    /// Whether this Freight has qualified for the named Stage
    pub fn is_qualified_for(&self, stage: &str) -> bool {
        self.status.qualifications.contains_key(stage)
    }

    /// Reduced copy carrying only identity and artifacts
    pub fn to_simple(&self) -> SimpleFreight {
        SimpleFreight {
            id: self.id.clone(),
            commits: self.commits.clone(),
            images: self.images.clone(),
            charts: self.charts.clone(),
        }
    }
}

super::impl_resource!(
    Freight,
    kinds::FREIGHT,
    "freights",
    k8s_openapi::NamespaceResourceScope
);
