//! Promotion mechanisms
//!
//! Git repository updates carry render/kustomize/helm members and Argo CD
//! source updates carry kustomize/helm members. As with repository
//! subscriptions, each member is converted on its own.

use crate::crd::{
    ArgoCDAppUpdate, ArgoCDHelm, ArgoCDHelmImageUpdate, ArgoCDKustomize, ArgoCDSourceUpdate,
    GitRepoUpdate, HelmChartDependencyUpdate, HelmImageUpdate, HelmPromotionMechanism,
    KargoRenderPromotionMechanism, KustomizeImageUpdate, KustomizePromotionMechanism,
    PromotionMechanisms,
};
use crate::wire;

impl From<&wire::PromotionMechanisms> for PromotionMechanisms {
    fn from(m: &wire::PromotionMechanisms) -> Self {
        Self {
            git_repo_updates: m.git_repo_updates.iter().map(Into::into).collect(),
            argocd_app_updates: m.argocd_app_updates.iter().map(Into::into).collect(),
        }
    }
}

impl From<&PromotionMechanisms> for wire::PromotionMechanisms {
    fn from(m: &PromotionMechanisms) -> Self {
        Self {
            git_repo_updates: m.git_repo_updates.iter().map(Into::into).collect(),
            argocd_app_updates: m.argocd_app_updates.iter().map(Into::into).collect(),
        }
    }
}

// =============================================================================
// Git Repository Updates
// =============================================================================

impl From<&wire::GitRepoUpdate> for GitRepoUpdate {
    fn from(u: &wire::GitRepoUpdate) -> Self {
        Self {
            repo_url: u.repo_url.clone(),
            read_branch: u.read_branch.clone().unwrap_or_default(),
            write_branch: u.write_branch.clone(),
            render: u.render.as_ref().map(Into::into),
            kustomize: u.kustomize.as_ref().map(Into::into),
            helm: u.helm.as_ref().map(Into::into),
        }
    }
}

impl From<&GitRepoUpdate> for wire::GitRepoUpdate {
    fn from(u: &GitRepoUpdate) -> Self {
        Self {
            repo_url: u.repo_url.clone(),
            read_branch: Some(u.read_branch.clone()),
            write_branch: u.write_branch.clone(),
            render: u.render.as_ref().map(Into::into),
            kustomize: u.kustomize.as_ref().map(Into::into),
            helm: u.helm.as_ref().map(Into::into),
        }
    }
}

impl From<&wire::KargoRenderPromotionMechanism> for KargoRenderPromotionMechanism {
    fn from(_: &wire::KargoRenderPromotionMechanism) -> Self {
        Self {}
    }
}

impl From<&KargoRenderPromotionMechanism> for wire::KargoRenderPromotionMechanism {
    fn from(_: &KargoRenderPromotionMechanism) -> Self {
        Self {}
    }
}

impl From<&wire::KustomizePromotionMechanism> for KustomizePromotionMechanism {
    fn from(m: &wire::KustomizePromotionMechanism) -> Self {
        Self {
            images: m.images.iter().map(Into::into).collect(),
        }
    }
}

impl From<&KustomizePromotionMechanism> for wire::KustomizePromotionMechanism {
    fn from(m: &KustomizePromotionMechanism) -> Self {
        Self {
            images: m.images.iter().map(Into::into).collect(),
        }
    }
}

impl From<&wire::KustomizeImageUpdate> for KustomizeImageUpdate {
    fn from(u: &wire::KustomizeImageUpdate) -> Self {
        Self {
            image: u.image.clone(),
            path: u.path.clone(),
        }
    }
}

impl From<&KustomizeImageUpdate> for wire::KustomizeImageUpdate {
    fn from(u: &KustomizeImageUpdate) -> Self {
        Self {
            image: u.image.clone(),
            path: u.path.clone(),
        }
    }
}

impl From<&wire::HelmPromotionMechanism> for HelmPromotionMechanism {
    fn from(m: &wire::HelmPromotionMechanism) -> Self {
        Self {
            images: m.images.iter().map(Into::into).collect(),
            charts: m.charts.iter().map(Into::into).collect(),
        }
    }
}

impl From<&HelmPromotionMechanism> for wire::HelmPromotionMechanism {
    fn from(m: &HelmPromotionMechanism) -> Self {
        Self {
            images: m.images.iter().map(Into::into).collect(),
            charts: m.charts.iter().map(Into::into).collect(),
        }
    }
}

impl From<&wire::HelmImageUpdate> for HelmImageUpdate {
    fn from(u: &wire::HelmImageUpdate) -> Self {
        Self {
            image: u.image.clone(),
            values_file_path: u.values_file_path.clone(),
            key: u.key.clone(),
            value: u.value.clone().into(),
        }
    }
}

impl From<&HelmImageUpdate> for wire::HelmImageUpdate {
    fn from(u: &HelmImageUpdate) -> Self {
        Self {
            image: u.image.clone(),
            values_file_path: u.values_file_path.clone(),
            key: u.key.clone(),
            value: (&u.value).into(),
        }
    }
}

impl From<&wire::HelmChartDependencyUpdate> for HelmChartDependencyUpdate {
    fn from(u: &wire::HelmChartDependencyUpdate) -> Self {
        Self {
            registry_url: u.registry_url.clone(),
            name: u.name.clone(),
            chart_path: u.chart_path.clone(),
        }
    }
}

impl From<&HelmChartDependencyUpdate> for wire::HelmChartDependencyUpdate {
    fn from(u: &HelmChartDependencyUpdate) -> Self {
        Self {
            registry_url: u.registry_url.clone(),
            name: u.name.clone(),
            chart_path: u.chart_path.clone(),
        }
    }
}

// =============================================================================
// Argo CD Application Updates
// =============================================================================

impl From<&wire::ArgoCdAppUpdate> for ArgoCDAppUpdate {
    fn from(u: &wire::ArgoCdAppUpdate) -> Self {
        Self {
            app_name: u.app_name.clone(),
            app_namespace: u.app_namespace.clone().unwrap_or_default(),
            source_updates: u.source_updates.iter().map(Into::into).collect(),
        }
    }
}

impl From<&ArgoCDAppUpdate> for wire::ArgoCdAppUpdate {
    fn from(u: &ArgoCDAppUpdate) -> Self {
        Self {
            app_name: u.app_name.clone(),
            app_namespace: Some(u.app_namespace.clone()),
            source_updates: u.source_updates.iter().map(Into::into).collect(),
        }
    }
}

impl From<&wire::ArgoCdSourceUpdate> for ArgoCDSourceUpdate {
    fn from(u: &wire::ArgoCdSourceUpdate) -> Self {
        Self {
            repo_url: u.repo_url.clone(),
            chart: u.chart.clone().unwrap_or_default(),
            update_target_revision: u.update_target_revision.unwrap_or_default(),
            kustomize: u.kustomize.as_ref().map(Into::into),
            helm: u.helm.as_ref().map(Into::into),
        }
    }
}

impl From<&ArgoCDSourceUpdate> for wire::ArgoCdSourceUpdate {
    fn from(u: &ArgoCDSourceUpdate) -> Self {
        Self {
            repo_url: u.repo_url.clone(),
            chart: Some(u.chart.clone()),
            update_target_revision: Some(u.update_target_revision),
            kustomize: u.kustomize.as_ref().map(Into::into),
            helm: u.helm.as_ref().map(Into::into),
        }
    }
}

impl From<&wire::ArgoCdKustomize> for ArgoCDKustomize {
    fn from(k: &wire::ArgoCdKustomize) -> Self {
        Self {
            images: k.images.clone(),
        }
    }
}

impl From<&ArgoCDKustomize> for wire::ArgoCdKustomize {
    fn from(k: &ArgoCDKustomize) -> Self {
        Self {
            images: k.images.clone(),
        }
    }
}

impl From<&wire::ArgoCdHelm> for ArgoCDHelm {
    fn from(h: &wire::ArgoCdHelm) -> Self {
        Self {
            images: h.images.iter().map(Into::into).collect(),
        }
    }
}

impl From<&ArgoCDHelm> for wire::ArgoCdHelm {
    fn from(h: &ArgoCDHelm) -> Self {
        Self {
            images: h.images.iter().map(Into::into).collect(),
        }
    }
}

impl From<&wire::ArgoCdHelmImageUpdate> for ArgoCDHelmImageUpdate {
    fn from(u: &wire::ArgoCdHelmImageUpdate) -> Self {
        Self {
            image: u.image.clone(),
            key: u.key.clone(),
            value: u.value.clone().into(),
        }
    }
}

impl From<&ArgoCDHelmImageUpdate> for wire::ArgoCdHelmImageUpdate {
    fn from(u: &ArgoCDHelmImageUpdate) -> Self {
        Self {
            image: u.image.clone(),
            key: u.key.clone(),
            value: (&u.value).into(),
        }
    }
}
