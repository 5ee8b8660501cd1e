//! Top-level resource converters
//!
//! Absent status handling differs per resource:
//!
//! | Resource  | wire status `None` → domain |
//! |-----------|-----------------------------|
//! | Stage     | `Some(StageStatus::default())` |
//! | Promotion | `Some(PromotionStatus::default())` |
//! | Warehouse | `None` |
//!
//! On the way out, Stage and Promotion always emit a status while Warehouse
//! emits one only if the domain object has one.

use super::{metadata, time, type_identity};
use crate::crd::{
    kinds, type_meta, Project, Promotion, PromotionInfo, PromotionPolicy, PromotionSpec,
    PromotionStatus, Stage, StageSpec, StageStatus, Warehouse, WarehouseSpec, WarehouseStatus,
};
use crate::wire;

use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

fn meta_from_wire(meta: Option<&wire::ObjectMeta>) -> ObjectMeta {
    meta.map(metadata::from_wire).unwrap_or_default()
}

fn meta_to_wire(meta: &ObjectMeta) -> Option<wire::ObjectMeta> {
    Some(metadata::to_wire(meta))
}

// =============================================================================
// Stage
// =============================================================================

impl From<&wire::Stage> for Stage {
    fn from(s: &wire::Stage) -> Self {
        Self {
            metadata: meta_from_wire(s.metadata.as_ref()),
            spec: s.spec.as_ref().map(Into::into).unwrap_or_default(),
            status: Some(s.status.as_ref().map(Into::into).unwrap_or_default()),
        }
    }
}

impl From<&Stage> for wire::Stage {
    fn from(s: &Stage) -> Self {
        let (api_version, kind) = type_identity::<Stage>();
        let status = s.status.clone().unwrap_or_default();
        Self {
            api_version,
            kind,
            metadata: meta_to_wire(&s.metadata),
            spec: Some((&s.spec).into()),
            status: Some((&status).into()),
        }
    }
}

impl From<&wire::StageSpec> for StageSpec {
    fn from(s: &wire::StageSpec) -> Self {
        Self {
            subscriptions: s.subscriptions.as_ref().map(Into::into),
            promotion_mechanisms: s.promotion_mechanisms.as_ref().map(Into::into),
        }
    }
}

impl From<&StageSpec> for wire::StageSpec {
    fn from(s: &StageSpec) -> Self {
        Self {
            subscriptions: s.subscriptions.as_ref().map(Into::into),
            promotion_mechanisms: s.promotion_mechanisms.as_ref().map(Into::into),
        }
    }
}

impl From<&wire::StageStatus> for StageStatus {
    fn from(s: &wire::StageStatus) -> Self {
        Self {
            current_freight: s.current_freight.as_ref().map(Into::into),
            history: s.history.iter().map(Into::into).collect(),
            health: s.health.as_ref().map(Into::into),
            error: s.error.clone(),
            current_promotion: s.current_promotion.as_ref().map(Into::into),
        }
    }
}

impl From<&StageStatus> for wire::StageStatus {
    fn from(s: &StageStatus) -> Self {
        Self {
            current_freight: s.current_freight.as_ref().map(Into::into),
            history: s.history.iter().map(Into::into).collect(),
            health: s.health.as_ref().map(Into::into),
            error: s.error.clone(),
            current_promotion: s.current_promotion.as_ref().map(Into::into),
        }
    }
}

impl From<&wire::PromotionInfo> for PromotionInfo {
    fn from(p: &wire::PromotionInfo) -> Self {
        Self {
            name: p.name.clone(),
            freight: p.freight.as_ref().map(Into::into).unwrap_or_default(),
        }
    }
}

impl From<&PromotionInfo> for wire::PromotionInfo {
    fn from(p: &PromotionInfo) -> Self {
        Self {
            name: p.name.clone(),
            freight: Some(p.freight.to_wire(None)),
        }
    }
}

// =============================================================================
// Warehouse
// =============================================================================

impl From<&wire::Warehouse> for Warehouse {
    fn from(w: &wire::Warehouse) -> Self {
        Self {
            metadata: meta_from_wire(w.metadata.as_ref()),
            spec: w.spec.as_ref().map(Into::into).unwrap_or_default(),
            status: w.status.as_ref().map(Into::into),
        }
    }
}

impl From<&Warehouse> for wire::Warehouse {
    fn from(w: &Warehouse) -> Self {
        let (api_version, kind) = type_identity::<Warehouse>();
        Self {
            api_version,
            kind,
            metadata: meta_to_wire(&w.metadata),
            spec: Some((&w.spec).into()),
            status: w.status.as_ref().map(Into::into),
        }
    }
}

impl From<&wire::WarehouseSpec> for WarehouseSpec {
    fn from(s: &wire::WarehouseSpec) -> Self {
        Self {
            subscriptions: s.subscriptions.iter().map(Into::into).collect(),
        }
    }
}

impl From<&WarehouseSpec> for wire::WarehouseSpec {
    fn from(s: &WarehouseSpec) -> Self {
        Self {
            subscriptions: s.subscriptions.iter().map(Into::into).collect(),
        }
    }
}

impl From<&wire::WarehouseStatus> for WarehouseStatus {
    fn from(s: &wire::WarehouseStatus) -> Self {
        Self {
            error: s.error.clone(),
            observed_generation: s.observed_generation,
        }
    }
}

impl From<&WarehouseStatus> for wire::WarehouseStatus {
    fn from(s: &WarehouseStatus) -> Self {
        Self {
            error: s.error.clone(),
            observed_generation: s.observed_generation,
        }
    }
}

// =============================================================================
// Promotion
// =============================================================================

impl From<&wire::Promotion> for Promotion {
    fn from(p: &wire::Promotion) -> Self {
        Self {
            metadata: meta_from_wire(p.metadata.as_ref()),
            spec: p
                .spec
                .as_ref()
                .map(|s| PromotionSpec {
                    stage: s.stage.clone(),
                    freight: s.freight.clone(),
                })
                .unwrap_or_default(),
            status: Some(
                p.status
                    .as_ref()
                    .map(|s| PromotionStatus {
                        phase: s.phase.clone().into(),
                        error: s.error.clone(),
                    })
                    .unwrap_or_default(),
            ),
        }
    }
}

impl From<&Promotion> for wire::Promotion {
    fn from(p: &Promotion) -> Self {
        let (api_version, kind) = type_identity::<Promotion>();
        let status = p.status.clone().unwrap_or_default();
        Self {
            api_version,
            kind,
            metadata: meta_to_wire(&p.metadata),
            spec: Some(wire::PromotionSpec {
                stage: p.spec.stage.clone(),
                freight: p.spec.freight.clone(),
            }),
            status: Some(wire::PromotionStatus {
                phase: (&status.phase).into(),
                error: status.error,
            }),
        }
    }
}

// =============================================================================
// PromotionPolicy
// =============================================================================

impl From<&wire::PromotionPolicy> for PromotionPolicy {
    fn from(p: &wire::PromotionPolicy) -> Self {
        Self {
            types: type_meta(kinds::PROMOTION_POLICY),
            metadata: meta_from_wire(p.metadata.as_ref()),
            stage: p.stage.clone(),
            enable_auto_promotion: p.enable_auto_promotion,
        }
    }
}

impl From<&PromotionPolicy> for wire::PromotionPolicy {
    fn from(p: &PromotionPolicy) -> Self {
        let (api_version, kind) = type_identity::<PromotionPolicy>();
        Self {
            api_version,
            kind,
            metadata: meta_to_wire(&p.metadata),
            stage: p.stage.clone(),
            enable_auto_promotion: p.enable_auto_promotion,
        }
    }
}

// =============================================================================
// Project
// =============================================================================

impl From<&wire::Project> for Project {
    fn from(p: &wire::Project) -> Self {
        Self {
            types: type_meta(kinds::PROJECT),
            metadata: ObjectMeta {
                name: Some(p.name.clone()),
                creation_timestamp: p.create_time.as_ref().and_then(time::time_from_wire),
                ..Default::default()
            },
        }
    }
}

impl From<&Project> for wire::Project {
    fn from(p: &Project) -> Self {
        let metadata = metadata::sanitized(&p.metadata);
        Self {
            name: metadata.name.unwrap_or_default(),
            create_time: metadata.creation_timestamp.as_ref().map(time::time_to_wire),
        }
    }
}
