//! Stage subscriptions and Warehouse repository subscriptions
//!
//! The git/image/chart members of a repository subscription are converted
//! independently. No cross-field check is made: whatever is populated on one
//! side is populated on the other.

use crate::crd::{
    ChartSubscription, GitSubscription, ImageSubscription, RepoSubscription, StageSubscription,
    Subscriptions,
};
use crate::wire;

impl From<&wire::Subscriptions> for Subscriptions {
    fn from(s: &wire::Subscriptions) -> Self {
        Self {
            warehouse: s.warehouse.clone(),
            upstream_stages: s.upstream_stages.iter().map(Into::into).collect(),
        }
    }
}

impl From<&Subscriptions> for wire::Subscriptions {
    fn from(s: &Subscriptions) -> Self {
        Self {
            warehouse: s.warehouse.clone(),
            upstream_stages: s.upstream_stages.iter().map(Into::into).collect(),
        }
    }
}

impl From<&wire::StageSubscription> for StageSubscription {
    fn from(s: &wire::StageSubscription) -> Self {
        Self {
            name: s.name.clone(),
        }
    }
}

impl From<&StageSubscription> for wire::StageSubscription {
    fn from(s: &StageSubscription) -> Self {
        Self {
            name: s.name.clone(),
        }
    }
}

impl From<&wire::RepoSubscription> for RepoSubscription {
    fn from(s: &wire::RepoSubscription) -> Self {
        Self {
            git: s.git.as_ref().map(Into::into),
            image: s.image.as_ref().map(Into::into),
            chart: s.chart.as_ref().map(Into::into),
        }
    }
}

impl From<&RepoSubscription> for wire::RepoSubscription {
    fn from(s: &RepoSubscription) -> Self {
        Self {
            git: s.git.as_ref().map(Into::into),
            image: s.image.as_ref().map(Into::into),
            chart: s.chart.as_ref().map(Into::into),
        }
    }
}

impl From<&wire::GitSubscription> for GitSubscription {
    fn from(s: &wire::GitSubscription) -> Self {
        Self {
            repo_url: s.repo_url.clone(),
            branch: s.branch.clone(),
        }
    }
}

impl From<&GitSubscription> for wire::GitSubscription {
    fn from(s: &GitSubscription) -> Self {
        Self {
            repo_url: s.repo_url.clone(),
            branch: s.branch.clone(),
        }
    }
}

impl From<&wire::ImageSubscription> for ImageSubscription {
    fn from(s: &wire::ImageSubscription) -> Self {
        Self {
            repo_url: s.repo_url.clone(),
            update_strategy: s.update_strategy.clone().into(),
            semver_constraint: s.semver_constraint.clone().unwrap_or_default(),
            allow_tags: s.allow_tags.clone().unwrap_or_default(),
            ignore_tags: s.ignore_tags.clone(),
            platform: s.platform.clone().unwrap_or_default(),
        }
    }
}

impl From<&ImageSubscription> for wire::ImageSubscription {
    fn from(s: &ImageSubscription) -> Self {
        Self {
            repo_url: s.repo_url.clone(),
            update_strategy: (&s.update_strategy).into(),
            semver_constraint: Some(s.semver_constraint.clone()),
            allow_tags: Some(s.allow_tags.clone()),
            ignore_tags: s.ignore_tags.clone(),
            platform: Some(s.platform.clone()),
        }
    }
}

impl From<&wire::ChartSubscription> for ChartSubscription {
    fn from(s: &wire::ChartSubscription) -> Self {
        Self {
            registry_url: s.registry_url.clone(),
            name: s.name.clone().unwrap_or_default(),
            semver_constraint: s.semver_constraint.clone().unwrap_or_default(),
        }
    }
}

impl From<&ChartSubscription> for wire::ChartSubscription {
    fn from(s: &ChartSubscription) -> Self {
        Self {
            registry_url: s.registry_url.clone(),
            name: Some(s.name.clone()),
            semver_constraint: Some(s.semver_constraint.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crd::ImageUpdateStrategy;
    use assert_matches::assert_matches;

    #[test]
    fn test_upstream_stages_keep_order() {
        let wire = wire::Subscriptions {
            warehouse: String::new(),
            upstream_stages: vec![
                wire::StageSubscription {
                    name: "uat".to_string(),
                },
                wire::StageSubscription {
                    name: "test".to_string(),
                },
            ],
        };
        let subs = Subscriptions::from(&wire);
        let names: Vec<_> = subs.upstream_stages.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["uat", "test"]);
        assert_eq!(wire::Subscriptions::from(&subs), wire);
    }

    #[test]
    fn test_image_subscription_presence() {
        let wire = wire::ImageSubscription {
            repo_url: "nginx".to_string(),
            update_strategy: "SemVer".to_string(),
            semver_constraint: Some("^1.24.0".to_string()),
            allow_tags: None,
            ignore_tags: vec!["1.25.0".to_string()],
            platform: None,
        };
        let sub = ImageSubscription::from(&wire);
        assert_eq!(sub.update_strategy, ImageUpdateStrategy::SEMVER);
        assert_eq!(sub.semver_constraint, "^1.24.0");
        assert_eq!(sub.allow_tags, "");
        assert_eq!(sub.platform, "");

        let back = wire::ImageSubscription::from(&sub);
        assert_eq!(back.semver_constraint.as_deref(), Some("^1.24.0"));
        assert_eq!(back.allow_tags, Some(String::new()));
        assert_eq!(back.platform, Some(String::new()));
        assert_eq!(back.ignore_tags, wire.ignore_tags);
    }

    #[test]
    fn test_chart_subscription_presence() {
        let sub = ChartSubscription {
            registry_url: "oci://ghcr.io/akuity/kargo-charts/kargo".to_string(),
            name: String::new(),
            semver_constraint: String::new(),
        };
        let wire = wire::ChartSubscription::from(&sub);
        assert_eq!(wire.name, Some(String::new()));
        assert_eq!(wire.semver_constraint, Some(String::new()));
        assert_eq!(ChartSubscription::from(&wire), sub);
    }

    #[test]
    fn test_repo_subscription_members_convert_independently() {
        let sub = RepoSubscription {
            git: Some(GitSubscription {
                repo_url: "https://github.com/akuity/kargo-demo.git".to_string(),
                branch: "main".to_string(),
            }),
            image: Some(ImageSubscription {
                repo_url: "nginx".to_string(),
                ..Default::default()
            }),
            chart: None,
        };
        let wire = wire::RepoSubscription::from(&sub);
        assert_matches!(wire.git, Some(ref g) if g.branch == "main");
        assert_matches!(wire.image, Some(ref i) if i.repo_url == "nginx");
        assert!(wire.chart.is_none());
        assert_eq!(RepoSubscription::from(&wire), sub);
    }
}
