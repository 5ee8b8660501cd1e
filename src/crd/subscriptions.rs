//! Freight sources
//!
//! A Stage subscribes to a Warehouse or to upstream Stages; a Warehouse
//! subscribes to repositories.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::enums::ImageUpdateStrategy;

/// Where a Stage gets its Freight from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Subscriptions {
    /// Name of a Warehouse in the same namespace
    #[serde(default)]
    pub warehouse: String,

    /// Upstream Stages whose qualified Freight this Stage accepts
    #[serde(default)]
    pub upstream_stages: Vec<StageSubscription>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StageSubscription {
    pub name: String,
}

/// One repository watched by a Warehouse.
///
/// Exactly one of `git`, `image` or `chart` is expected to be set. This is
/// not enforced here; every populated member is carried across the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RepoSubscription {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git: Option<GitSubscription>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageSubscription>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart: Option<ChartSubscription>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GitSubscription {
    #[serde(rename = "repoURL")]
    pub repo_url: String,

    /// Branch to watch; empty means the repository's default branch
    #[serde(default)]
    pub branch: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageSubscription {
    #[serde(rename = "repoURL")]
    pub repo_url: String,

    #[serde(default)]
    pub update_strategy: ImageUpdateStrategy,

    #[serde(default)]
    pub semver_constraint: String,

    /// Regular expression tags must match
    #[serde(default)]
    pub allow_tags: String,

    /// Tags to ignore outright
    #[serde(default)]
    pub ignore_tags: Vec<String>,

    /// Target platform, e.g. `linux/amd64`
    #[serde(default)]
    pub platform: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChartSubscription {
    #[serde(rename = "registryURL")]
    pub registry_url: String,

    /// Chart name; empty for OCI registries where the URL names the chart
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub semver_constraint: String,
}
