//! Artifact references
//!
//! Git commits, container images and Helm charts are the three kinds of
//! artifact a piece of Freight can reference.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A specific commit in a Git repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GitCommit {
    /// URL of the Git repository
    #[serde(rename = "repoURL")]
    pub repo_url: String,

    /// Commit ID
    #[serde(default)]
    pub id: String,

    /// Branch the commit was found on
    #[serde(default)]
    pub branch: String,

    /// Commit whose manifests are checked when assessing Stage health.
    /// Differs from `id` when a promotion mechanism wrote a new commit.
    #[serde(default)]
    pub health_check_commit: String,

    /// Commit message (first line)
    #[serde(default)]
    pub message: String,

    /// Commit author
    #[serde(default)]
    pub author: String,
}

/// A specific version of a container image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    /// Image repository URL
    #[serde(rename = "repoURL")]
    pub repo_url: String,

    /// Image tag
    #[serde(default)]
    pub tag: String,
}

/// A specific version of a Helm chart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Chart {
    /// Chart registry URL
    #[serde(rename = "registryURL")]
    pub registry_url: String,

    /// Chart name
    #[serde(default)]
    pub name: String,

    /// Chart version
    #[serde(default)]
    pub version: String,
}

/// Reduced view of Freight used in Stage status.
///
/// Carries the Freight's identity and artifacts, but none of its metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SimpleFreight {
    /// Content-derived Freight ID
    pub id: String,

    #[serde(default)]
    pub commits: Vec<GitCommit>,

    #[serde(default)]
    pub images: Vec<Image>,

    #[serde(default)]
    pub charts: Vec<Chart>,
}

/// Freight history of a Stage, most recent first.
pub type SimpleFreightStack = Vec<SimpleFreight>;
