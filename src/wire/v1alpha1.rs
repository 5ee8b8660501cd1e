//! Wire messages for `kargo.akuity.io/v1alpha1` resources
//!
//! Structural alternatives (repository subscription kind, Git update
//! mechanism, Argo CD source update mechanism) are several independent
//! optional fields rather than a proto `oneof`.

use std::collections::BTreeMap;

use super::metav1::ObjectMeta;

// =============================================================================
// Artifacts
// =============================================================================

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GitCommit {
    #[prost(string, tag = "1")]
    pub repo_url: String,
    #[prost(string, tag = "2")]
    pub id: String,
    #[prost(string, tag = "3")]
    pub branch: String,
    #[prost(string, optional, tag = "4")]
    pub health_check_commit: Option<String>,
    #[prost(string, tag = "5")]
    pub message: String,
    #[prost(string, tag = "6")]
    pub author: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Image {
    #[prost(string, tag = "1")]
    pub repo_url: String,
    #[prost(string, tag = "2")]
    pub tag: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Chart {
    #[prost(string, tag = "1")]
    pub registry_url: String,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(string, tag = "3")]
    pub version: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SimpleFreight {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(message, optional, tag = "2")]
    pub first_seen: Option<::prost_types::Timestamp>,
    #[prost(message, repeated, tag = "3")]
    pub commits: Vec<GitCommit>,
    #[prost(message, repeated, tag = "4")]
    pub images: Vec<Image>,
    #[prost(message, repeated, tag = "5")]
    pub charts: Vec<Chart>,
}

// =============================================================================
// Health
// =============================================================================

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Health {
    #[prost(string, tag = "1")]
    pub status: String,
    #[prost(string, repeated, tag = "2")]
    pub issues: Vec<String>,
    #[prost(message, repeated, tag = "3")]
    pub argocd_apps: Vec<ArgoCdAppState>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ArgoCdAppState {
    #[prost(string, tag = "1")]
    pub namespace: String,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(message, optional, tag = "3")]
    pub health_status: Option<ArgoCdAppHealthStatus>,
    #[prost(message, optional, tag = "4")]
    pub sync_status: Option<ArgoCdAppSyncStatus>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ArgoCdAppHealthStatus {
    #[prost(string, tag = "1")]
    pub status: String,
    #[prost(string, tag = "2")]
    pub message: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ArgoCdAppSyncStatus {
    #[prost(string, tag = "1")]
    pub status: String,
    #[prost(string, tag = "2")]
    pub revision: String,
    #[prost(string, repeated, tag = "3")]
    pub revisions: Vec<String>,
}

// =============================================================================
// Subscriptions
// =============================================================================

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Subscriptions {
    #[prost(string, tag = "1")]
    pub warehouse: String,
    #[prost(message, repeated, tag = "2")]
    pub upstream_stages: Vec<StageSubscription>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StageSubscription {
    #[prost(string, tag = "1")]
    pub name: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RepoSubscription {
    #[prost(message, optional, tag = "1")]
    pub git: Option<GitSubscription>,
    #[prost(message, optional, tag = "2")]
    pub image: Option<ImageSubscription>,
    #[prost(message, optional, tag = "3")]
    pub chart: Option<ChartSubscription>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GitSubscription {
    #[prost(string, tag = "1")]
    pub repo_url: String,
    #[prost(string, tag = "2")]
    pub branch: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ImageSubscription {
    #[prost(string, tag = "1")]
    pub repo_url: String,
    #[prost(string, tag = "2")]
    pub update_strategy: String,
    #[prost(string, optional, tag = "3")]
    pub semver_constraint: Option<String>,
    #[prost(string, optional, tag = "4")]
    pub allow_tags: Option<String>,
    #[prost(string, repeated, tag = "5")]
    pub ignore_tags: Vec<String>,
    #[prost(string, optional, tag = "6")]
    pub platform: Option<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ChartSubscription {
    #[prost(string, tag = "1")]
    pub registry_url: String,
    #[prost(string, optional, tag = "2")]
    pub name: Option<String>,
    #[prost(string, optional, tag = "3")]
    pub semver_constraint: Option<String>,
}

// =============================================================================
// Promotion Mechanisms
// =============================================================================

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PromotionMechanisms {
    #[prost(message, repeated, tag = "1")]
    pub git_repo_updates: Vec<GitRepoUpdate>,
    #[prost(message, repeated, tag = "2")]
    pub argocd_app_updates: Vec<ArgoCdAppUpdate>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GitRepoUpdate {
    #[prost(string, tag = "1")]
    pub repo_url: String,
    #[prost(string, optional, tag = "2")]
    pub read_branch: Option<String>,
    #[prost(string, tag = "3")]
    pub write_branch: String,
    #[prost(message, optional, tag = "4")]
    pub render: Option<KargoRenderPromotionMechanism>,
    #[prost(message, optional, tag = "5")]
    pub kustomize: Option<KustomizePromotionMechanism>,
    #[prost(message, optional, tag = "6")]
    pub helm: Option<HelmPromotionMechanism>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct KargoRenderPromotionMechanism {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct KustomizePromotionMechanism {
    #[prost(message, repeated, tag = "1")]
    pub images: Vec<KustomizeImageUpdate>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct KustomizeImageUpdate {
    #[prost(string, tag = "1")]
    pub image: String,
    #[prost(string, tag = "2")]
    pub path: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HelmPromotionMechanism {
    #[prost(message, repeated, tag = "1")]
    pub images: Vec<HelmImageUpdate>,
    #[prost(message, repeated, tag = "2")]
    pub charts: Vec<HelmChartDependencyUpdate>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HelmImageUpdate {
    #[prost(string, tag = "1")]
    pub image: String,
    #[prost(string, tag = "2")]
    pub values_file_path: String,
    #[prost(string, tag = "3")]
    pub key: String,
    #[prost(string, tag = "4")]
    pub value: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HelmChartDependencyUpdate {
    #[prost(string, tag = "1")]
    pub registry_url: String,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(string, tag = "3")]
    pub chart_path: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ArgoCdAppUpdate {
    #[prost(string, tag = "1")]
    pub app_name: String,
    #[prost(string, optional, tag = "2")]
    pub app_namespace: Option<String>,
    #[prost(message, repeated, tag = "3")]
    pub source_updates: Vec<ArgoCdSourceUpdate>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ArgoCdSourceUpdate {
    #[prost(string, tag = "1")]
    pub repo_url: String,
    #[prost(string, optional, tag = "2")]
    pub chart: Option<String>,
    #[prost(bool, optional, tag = "3")]
    pub update_target_revision: Option<bool>,
    #[prost(message, optional, tag = "4")]
    pub kustomize: Option<ArgoCdKustomize>,
    #[prost(message, optional, tag = "5")]
    pub helm: Option<ArgoCdHelm>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ArgoCdKustomize {
    #[prost(string, repeated, tag = "1")]
    pub images: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ArgoCdHelm {
    #[prost(message, repeated, tag = "1")]
    pub images: Vec<ArgoCdHelmImageUpdate>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ArgoCdHelmImageUpdate {
    #[prost(string, tag = "1")]
    pub image: String,
    #[prost(string, tag = "2")]
    pub key: String,
    #[prost(string, tag = "3")]
    pub value: String,
}

// =============================================================================
// Stage
// =============================================================================

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Stage {
    #[prost(string, tag = "1")]
    pub api_version: String,
    #[prost(string, tag = "2")]
    pub kind: String,
    #[prost(message, optional, tag = "3")]
    pub metadata: Option<ObjectMeta>,
    #[prost(message, optional, tag = "4")]
    pub spec: Option<StageSpec>,
    #[prost(message, optional, tag = "5")]
    pub status: Option<StageStatus>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StageSpec {
    #[prost(message, optional, tag = "1")]
    pub subscriptions: Option<Subscriptions>,
    #[prost(message, optional, tag = "2")]
    pub promotion_mechanisms: Option<PromotionMechanisms>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StageStatus {
    #[prost(message, optional, tag = "1")]
    pub current_freight: Option<SimpleFreight>,
    #[prost(message, repeated, tag = "2")]
    pub history: Vec<SimpleFreight>,
    #[prost(message, optional, tag = "3")]
    pub health: Option<Health>,
    #[prost(string, tag = "4")]
    pub error: String,
    #[prost(message, optional, tag = "5")]
    pub current_promotion: Option<PromotionInfo>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PromotionInfo {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(message, optional, tag = "2")]
    pub freight: Option<SimpleFreight>,
}

// =============================================================================
// Warehouse
// =============================================================================

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Warehouse {
    #[prost(string, tag = "1")]
    pub api_version: String,
    #[prost(string, tag = "2")]
    pub kind: String,
    #[prost(message, optional, tag = "3")]
    pub metadata: Option<ObjectMeta>,
    #[prost(message, optional, tag = "4")]
    pub spec: Option<WarehouseSpec>,
    #[prost(message, optional, tag = "5")]
    pub status: Option<WarehouseStatus>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WarehouseSpec {
    #[prost(message, repeated, tag = "1")]
    pub subscriptions: Vec<RepoSubscription>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WarehouseStatus {
    #[prost(string, tag = "1")]
    pub error: String,
    #[prost(int64, tag = "2")]
    pub observed_generation: i64,
}

// =============================================================================
// Freight
// =============================================================================

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Freight {
    #[prost(string, tag = "1")]
    pub api_version: String,
    #[prost(string, tag = "2")]
    pub kind: String,
    #[prost(message, optional, tag = "3")]
    pub metadata: Option<ObjectMeta>,
    #[prost(string, tag = "4")]
    pub id: String,
    #[prost(message, repeated, tag = "5")]
    pub images: Vec<Image>,
    #[prost(message, repeated, tag = "6")]
    pub charts: Vec<Chart>,
    #[prost(message, repeated, tag = "7")]
    pub commits: Vec<GitCommit>,
    #[prost(message, optional, tag = "8")]
    pub status: Option<FreightStatus>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FreightStatus {
    #[prost(btree_map = "string, message", tag = "1")]
    pub qualifications: BTreeMap<String, Qualification>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Qualification {}

// =============================================================================
// Promotion
// =============================================================================

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Promotion {
    #[prost(string, tag = "1")]
    pub api_version: String,
    #[prost(string, tag = "2")]
    pub kind: String,
    #[prost(message, optional, tag = "3")]
    pub metadata: Option<ObjectMeta>,
    #[prost(message, optional, tag = "4")]
    pub spec: Option<PromotionSpec>,
    #[prost(message, optional, tag = "5")]
    pub status: Option<PromotionStatus>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PromotionSpec {
    #[prost(string, tag = "1")]
    pub stage: String,
    #[prost(string, tag = "2")]
    pub freight: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PromotionStatus {
    #[prost(string, tag = "1")]
    pub phase: String,
    #[prost(string, tag = "2")]
    pub error: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PromotionPolicy {
    #[prost(string, tag = "1")]
    pub api_version: String,
    #[prost(string, tag = "2")]
    pub kind: String,
    #[prost(message, optional, tag = "3")]
    pub metadata: Option<ObjectMeta>,
    #[prost(string, tag = "4")]
    pub stage: String,
    #[prost(bool, tag = "5")]
    pub enable_auto_promotion: bool,
}
