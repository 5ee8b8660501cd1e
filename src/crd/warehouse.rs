//! Warehouse Custom Resource Definition
//!
//! A Warehouse watches repositories and produces Freight from what it
//! discovers there.

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::subscriptions::RepoSubscription;

#[derive(CustomResource, Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[kube(
    group = "kargo.akuity.io",
    version = "v1alpha1",
    kind = "Warehouse",
    plural = "warehouses",
    status = "WarehouseStatus",
    derive = "PartialEq",
    printcolumn = r#"{"name": "Age", "type": "date", "jsonPath": ".metadata.creationTimestamp"}"#,
    namespaced = true
)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseSpec {
    /// Repositories to watch, in order
    #[serde(default)]
    pub subscriptions: Vec<RepoSubscription>,
}

/// Observed state of a Warehouse
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseStatus {
    /// Last error encountered while discovering artifacts
    #[serde(default)]
    pub error: String,

    /// Generation of the spec last reconciled
    #[serde(default)]
    pub observed_generation: i64,
}

impl Warehouse {
    /// Get the name of this warehouse
    pub fn name(&self) -> &str {
        self.metadata.name.as_deref().unwrap_or("unknown")
    }
}
