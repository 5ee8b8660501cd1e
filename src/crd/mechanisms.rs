//! Promotion mechanisms
//!
//! Instructions describing how a Stage applies Freight: write to Git
//! repositories and/or update Argo CD Applications.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::enums::ImageUpdateValueType;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PromotionMechanisms {
    /// Applied in order
    #[serde(default)]
    pub git_repo_updates: Vec<GitRepoUpdate>,

    /// Applied in order, after all Git updates
    #[serde(default, rename = "argoCDAppUpdates")]
    pub argocd_app_updates: Vec<ArgoCDAppUpdate>,
}

// =============================================================================
// Git Repository Updates
// =============================================================================

/// Update to a Git repository.
///
/// At most one of `render`, `kustomize` or `helm` is expected to be set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GitRepoUpdate {
    #[serde(rename = "repoURL")]
    pub repo_url: String,

    /// Branch to read from; empty means the write branch
    #[serde(default)]
    pub read_branch: String,

    #[serde(default)]
    pub write_branch: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub render: Option<KargoRenderPromotionMechanism>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kustomize: Option<KustomizePromotionMechanism>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub helm: Option<HelmPromotionMechanism>,
}

/// Render manifests with Kargo Render. Carries no options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct KargoRenderPromotionMechanism {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KustomizePromotionMechanism {
    #[serde(default)]
    pub images: Vec<KustomizeImageUpdate>,
}

/// Run `kustomize edit set image` for one image in one directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KustomizeImageUpdate {
    pub image: String,
    pub path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HelmPromotionMechanism {
    #[serde(default)]
    pub images: Vec<HelmImageUpdate>,

    #[serde(default)]
    pub charts: Vec<HelmChartDependencyUpdate>,
}

/// Write an image reference into a key of a values file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HelmImageUpdate {
    pub image: String,
    pub values_file_path: String,
    pub key: String,
    pub value: ImageUpdateValueType,
}

/// Bump a chart dependency in a `Chart.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HelmChartDependencyUpdate {
    #[serde(rename = "registryURL")]
    pub registry_url: String,
    pub name: String,
    pub chart_path: String,
}

// =============================================================================
// Argo CD Application Updates
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArgoCDAppUpdate {
    pub app_name: String,

    /// Namespace of the Application; empty means the Argo CD namespace
    #[serde(default)]
    pub app_namespace: String,

    #[serde(default)]
    pub source_updates: Vec<ArgoCDSourceUpdate>,
}

/// Update to one source of an Argo CD Application.
///
/// At most one of `kustomize` or `helm` is expected to be set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArgoCDSourceUpdate {
    #[serde(rename = "repoURL")]
    pub repo_url: String,

    /// Chart name, for sources pointing at a chart registry
    #[serde(default)]
    pub chart: String,

    #[serde(default)]
    pub update_target_revision: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kustomize: Option<ArgoCDKustomize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub helm: Option<ArgoCDHelm>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArgoCDKustomize {
    /// Image repositories to pin in the Application's kustomize overrides
    #[serde(default)]
    pub images: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArgoCDHelm {
    #[serde(default)]
    pub images: Vec<ArgoCDHelmImageUpdate>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArgoCDHelmImageUpdate {
    pub image: String,
    pub key: String,
    pub value: ImageUpdateValueType,
}
