//! Health snapshot and Argo CD application state

use crate::crd::{ArgoCDAppHealthStatus, ArgoCDAppStatus, ArgoCDAppSyncStatus, Health};
use crate::wire;

impl From<&wire::Health> for Health {
    fn from(h: &wire::Health) -> Self {
        Self {
            status: h.status.clone().into(),
            issues: h.issues.clone(),
            argocd_apps: h.argocd_apps.iter().map(Into::into).collect(),
        }
    }
}

impl From<&Health> for wire::Health {
    fn from(h: &Health) -> Self {
        Self {
            status: (&h.status).into(),
            issues: h.issues.clone(),
            argocd_apps: h.argocd_apps.iter().map(Into::into).collect(),
        }
    }
}

impl From<&wire::ArgoCdAppState> for ArgoCDAppStatus {
    fn from(a: &wire::ArgoCdAppState) -> Self {
        Self {
            namespace: a.namespace.clone(),
            name: a.name.clone(),
            health_status: a
                .health_status
                .as_ref()
                .map(Into::into)
                .unwrap_or_default(),
            sync_status: a.sync_status.as_ref().map(Into::into).unwrap_or_default(),
        }
    }
}

impl From<&ArgoCDAppStatus> for wire::ArgoCdAppState {
    fn from(a: &ArgoCDAppStatus) -> Self {
        Self {
            namespace: a.namespace.clone(),
            name: a.name.clone(),
            health_status: Some((&a.health_status).into()),
            sync_status: Some((&a.sync_status).into()),
        }
    }
}

impl From<&wire::ArgoCdAppHealthStatus> for ArgoCDAppHealthStatus {
    fn from(a: &wire::ArgoCdAppHealthStatus) -> Self {
        Self {
            status: a.status.clone().into(),
            message: a.message.clone(),
        }
    }
}

impl From<&ArgoCDAppHealthStatus> for wire::ArgoCdAppHealthStatus {
    fn from(a: &ArgoCDAppHealthStatus) -> Self {
        Self {
            status: (&a.status).into(),
            message: a.message.clone(),
        }
    }
}

impl From<&wire::ArgoCdAppSyncStatus> for ArgoCDAppSyncStatus {
    fn from(a: &wire::ArgoCdAppSyncStatus) -> Self {
        Self {
            status: a.status.clone().into(),
            revision: a.revision.clone(),
            revisions: a.revisions.clone(),
        }
    }
}

impl From<&ArgoCDAppSyncStatus> for wire::ArgoCdAppSyncStatus {
    fn from(a: &ArgoCDAppSyncStatus) -> Self {
        Self {
            status: (&a.status).into(),
            revision: a.revision.clone(),
            revisions: a.revisions.clone(),
        }
    }
}
