//! Promotion and PromotionPolicy resources
//!
//! A Promotion asks for one piece of Freight to be applied to one Stage. A
//! PromotionPolicy decides whether that happens without a human asking.

use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::core::TypeMeta;
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::enums::PromotionPhase;
use super::{kinds, type_meta};

// =============================================================================
// Promotion CRD
// =============================================================================

#[derive(CustomResource, Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[kube(
    group = "kargo.akuity.io",
    version = "v1alpha1",
    kind = "Promotion",
    plural = "promotions",
    shortname = "promo",
    status = "PromotionStatus",
    derive = "PartialEq",
    printcolumn = r#"{"name": "Stage", "type": "string", "jsonPath": ".spec.stage"}"#,
    printcolumn = r#"{"name": "Freight", "type": "string", "jsonPath": ".spec.freight"}"#,
    printcolumn = r#"{"name": "Phase", "type": "string", "jsonPath": ".status.phase"}"#,
    namespaced = true
)]
#[serde(rename_all = "camelCase")]
pub struct PromotionSpec {
    /// Name of the Stage to promote to
    pub stage: String,

    /// ID of the Freight to promote
    pub freight: String,
}

/// Observed state of a Promotion
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PromotionStatus {
    #[serde(default)]
    pub phase: PromotionPhase,

    #[serde(default)]
    pub error: String,
}

// =============================================================================
// PromotionPolicy
// =============================================================================

/// Per-Stage switch for automatic promotion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionPolicy {
    #[serde(flatten)]
    pub types: TypeMeta,

    #[serde(default)]
    pub metadata: ObjectMeta,

    /// Stage this policy applies to
    #[serde(default)]
    pub stage: String,

    #[serde(default)]
    pub enable_auto_promotion: bool,
}

impl Default for PromotionPolicy {
    fn default() -> Self {
        Self {
            types: type_meta(kinds::PROMOTION_POLICY),
            metadata: ObjectMeta::default(),
            stage: String::new(),
            enable_auto_promotion: false,
        }
    }
}

super::impl_resource!(
    PromotionPolicy,
    kinds::PROMOTION_POLICY,
    "promotionpolicies",
    k8s_openapi::NamespaceResourceScope
);
