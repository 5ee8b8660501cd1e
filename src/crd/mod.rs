//! Custom Resource Definitions
//!
//! The domain model: Kargo resources shaped as Kubernetes custom resources.
//!
//! Stage, Warehouse and Promotion follow the usual spec/status layout and are
//! derived with [`kube::CustomResource`]. Freight, PromotionPolicy and Project
//! keep their fields at the top level, so they carry an explicit
//! [`TypeMeta`](kube::core::TypeMeta) and implement [`kube::Resource`] by hand.

use kube::core::TypeMeta;

/// API group of every Kargo resource
pub const GROUP: &str = "kargo.akuity.io";

/// API version served by this layer
pub const VERSION: &str = "v1alpha1";

/// `apiVersion` of every Kargo resource
pub const API_VERSION: &str = "kargo.akuity.io/v1alpha1";

/// Kind names
pub mod kinds {
    pub const PROJECT: &str = "Project";
    pub const STAGE: &str = "Stage";
    pub const WAREHOUSE: &str = "Warehouse";
    pub const FREIGHT: &str = "Freight";
    pub const PROMOTION: &str = "Promotion";
    pub const PROMOTION_POLICY: &str = "PromotionPolicy";
}

/// Type identifier for a Kargo kind.
pub fn type_meta(kind: &str) -> TypeMeta {
    TypeMeta {
        api_version: API_VERSION.to_owned(),
        kind: kind.to_owned(),
    }
}

/// Implement [`kube::Resource`] for a spec-less resource with a `metadata` field.
macro_rules! impl_resource {
    ($ty:ty, $kind:expr, $plural:literal, $scope:ty) => {
        impl ::kube::Resource for $ty {
            type DynamicType = ();
            type Scope = $scope;

            fn kind(_: &()) -> ::std::borrow::Cow<'_, str> {
                ::std::borrow::Cow::Borrowed($kind)
            }

            fn group(_: &()) -> ::std::borrow::Cow<'_, str> {
                ::std::borrow::Cow::Borrowed($crate::crd::GROUP)
            }

            fn version(_: &()) -> ::std::borrow::Cow<'_, str> {
                ::std::borrow::Cow::Borrowed($crate::crd::VERSION)
            }

            fn plural(_: &()) -> ::std::borrow::Cow<'_, str> {
                ::std::borrow::Cow::Borrowed($plural)
            }

            fn meta(&self) -> &::k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta {
                &self.metadata
            }

            fn meta_mut(
                &mut self,
            ) -> &mut ::k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta {
                &mut self.metadata
            }
        }
    };
}
pub(crate) use impl_resource;

mod artifacts;
mod enums;
mod freight;
mod health;
mod mechanisms;
mod project;
mod promotion;
mod stage;
mod subscriptions;
mod warehouse;

pub use artifacts::{Chart, GitCommit, Image, SimpleFreight, SimpleFreightStack};
pub use enums::{
    ArgoCDAppHealthState, ArgoCDAppSyncState, HealthState, ImageUpdateStrategy,
    ImageUpdateValueType, PromotionPhase,
};
pub use freight::{Freight, FreightStatus, Qualification};
pub use health::{ArgoCDAppHealthStatus, ArgoCDAppStatus, ArgoCDAppSyncStatus, Health};
pub use mechanisms::{
    ArgoCDAppUpdate, ArgoCDHelm, ArgoCDHelmImageUpdate, ArgoCDKustomize, ArgoCDSourceUpdate,
    GitRepoUpdate, HelmChartDependencyUpdate, HelmImageUpdate, HelmPromotionMechanism,
    KargoRenderPromotionMechanism, KustomizeImageUpdate, KustomizePromotionMechanism,
    PromotionMechanisms,
};
pub use project::Project;
pub use promotion::{Promotion, PromotionPolicy, PromotionSpec, PromotionStatus};
pub use stage::{PromotionInfo, Stage, StageSpec, StageStatus};
pub use subscriptions::{
    ChartSubscription, GitSubscription, ImageSubscription, RepoSubscription, StageSubscription,
    Subscriptions,
};
pub use warehouse::{Warehouse, WarehouseSpec, WarehouseStatus};
