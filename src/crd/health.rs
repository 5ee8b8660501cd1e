//! Stage health snapshot

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::enums::{ArgoCDAppHealthState, ArgoCDAppSyncState, HealthState};

/// Health of a Stage, aggregated over the Argo CD Applications it manages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Health {
    /// Aggregate state
    pub status: HealthState,

    /// Human-readable reasons the Stage is not healthy
    #[serde(default)]
    pub issues: Vec<String>,

    /// Per-application state
    #[serde(default, rename = "argoCDApps")]
    pub argocd_apps: Vec<ArgoCDAppStatus>,
}

/// Observed state of one Argo CD Application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArgoCDAppStatus {
    pub namespace: String,
    pub name: String,
    #[serde(default)]
    pub health_status: ArgoCDAppHealthStatus,
    #[serde(default)]
    pub sync_status: ArgoCDAppSyncStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArgoCDAppHealthStatus {
    pub status: ArgoCDAppHealthState,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArgoCDAppSyncStatus {
    pub status: ArgoCDAppSyncState,

    /// Revision of a single-source application
    #[serde(default)]
    pub revision: String,

    /// Revisions of a multi-source application, in source order
    #[serde(default)]
    pub revisions: Vec<String>,
}

