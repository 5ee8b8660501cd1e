//! Stage Custom Resource Definition
//!
//! A Stage is one step of a promotion pipeline. Its spec says where Freight
//! comes from and how it is applied; its status records what is currently
//! deployed and how healthy it is.

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::artifacts::{SimpleFreight, SimpleFreightStack};
use super::health::Health;
use super::mechanisms::PromotionMechanisms;
use super::subscriptions::Subscriptions;

#[derive(CustomResource, Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[kube(
    group = "kargo.akuity.io",
    version = "v1alpha1",
    kind = "Stage",
    plural = "stages",
    status = "StageStatus",
    derive = "PartialEq",
    printcolumn = r#"{"name": "Current Freight", "type": "string", "jsonPath": ".status.currentFreight.id"}"#,
    printcolumn = r#"{"name": "Health", "type": "string", "jsonPath": ".status.health.status"}"#,
    printcolumn = r#"{"name": "Age", "type": "date", "jsonPath": ".metadata.creationTimestamp"}"#,
    namespaced = true
)]
#[serde(rename_all = "camelCase")]
pub struct StageSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscriptions: Option<Subscriptions>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion_mechanisms: Option<PromotionMechanisms>,
}

/// Observed state of a Stage
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StageStatus {
    /// Freight currently deployed to this Stage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_freight: Option<SimpleFreight>,

    /// Freight previously deployed to this Stage, most recent first
    #[serde(default)]
    pub history: SimpleFreightStack,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health: Option<Health>,

    /// Last error encountered while reconciling
    #[serde(default)]
    pub error: String,

    /// Promotion currently running against this Stage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_promotion: Option<PromotionInfo>,
}

/// Reference to a running Promotion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PromotionInfo {
    /// Name of the Promotion
    pub name: String,

    /// Freight being promoted
    #[serde(default)]
    pub freight: SimpleFreight,
}

impl Stage {
    /// Get the name of this stage
    pub fn name(&self) -> &str {
        self.metadata.name.as_deref().unwrap_or("unknown")
    }
}
