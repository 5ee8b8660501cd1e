//! Property-Based Tests for the Converters
//!
//! # Test Properties
//!
//! 1. **List Shape**: every list keeps its length and order in both directions
//! 2. **Enum Identity**: enum-like strings survive conversion byte for byte
//! 3. **Roundtrip**: wire → domain → wire reproduces fully-populated messages
//! 4. **Egress Rules**: managed fields are dropped and presence is forced

#![cfg(test)]

use std::collections::BTreeMap;

use proptest::prelude::*;

use crate::crd::{Freight, GitRepoUpdate, Health, ImageSubscription, SimpleFreight, Stage, Warehouse};
use crate::wire;

// =============================================================================
// Property Strategies
// =============================================================================

fn text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9./:-]{0,16}"
}

fn wire_commit_strategy() -> impl Strategy<Value = wire::GitCommit> {
    (text(), text(), text(), text()).prop_map(|(repo_url, id, branch, health_check_commit)| {
        wire::GitCommit {
            repo_url,
            id,
            branch,
            health_check_commit: Some(health_check_commit),
            message: String::new(),
            author: String::new(),
        }
    })
}

fn wire_image_strategy() -> impl Strategy<Value = wire::Image> {
    (text(), text()).prop_map(|(repo_url, tag)| wire::Image { repo_url, tag })
}

fn wire_chart_strategy() -> impl Strategy<Value = wire::Chart> {
    (text(), text(), text()).prop_map(|(registry_url, name, version)| wire::Chart {
        registry_url,
        name,
        version,
    })
}

fn wire_simple_freight_strategy() -> impl Strategy<Value = wire::SimpleFreight> {
    (
        text(),
        prop::collection::vec(wire_commit_strategy(), 0..4),
        prop::collection::vec(wire_image_strategy(), 0..4),
        prop::collection::vec(wire_chart_strategy(), 0..4),
    )
        .prop_map(|(id, commits, images, charts)| wire::SimpleFreight {
            id,
            first_seen: None,
            commits,
            images,
            charts,
        })
}

fn wire_meta_strategy() -> impl Strategy<Value = wire::ObjectMeta> {
    (
        text(),
        text(),
        prop::collection::btree_map(text(), text(), 0..3),
    )
        .prop_map(|(name, namespace, labels)| wire::ObjectMeta {
            name: Some(name),
            namespace: Some(namespace),
            labels,
            ..Default::default()
        })
}

fn wire_repo_subscription_strategy() -> impl Strategy<Value = wire::RepoSubscription> {
    (
        proptest::option::of((text(), text())),
        proptest::option::of((text(), text(), text())),
    )
        .prop_map(|(git, image)| wire::RepoSubscription {
            git: git.map(|(repo_url, branch)| wire::GitSubscription { repo_url, branch }),
            image: image.map(|(repo_url, update_strategy, platform)| wire::ImageSubscription {
                repo_url,
                update_strategy,
                semver_constraint: Some(String::new()),
                allow_tags: Some(String::new()),
                ignore_tags: Vec::new(),
                platform: Some(platform),
            }),
            chart: None,
        })
}

// =============================================================================
// List Shape Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: SimpleFreight keeps every artifact list in order.
    #[test]
    fn prop_simple_freight_lists_keep_order(wire in wire_simple_freight_strategy()) {
        let domain = SimpleFreight::from(&wire);
        prop_assert_eq!(domain.commits.len(), wire.commits.len());
        prop_assert_eq!(domain.images.len(), wire.images.len());
        prop_assert_eq!(domain.charts.len(), wire.charts.len());
        for (d, w) in domain.images.iter().zip(&wire.images) {
            prop_assert_eq!(&d.repo_url, &w.repo_url);
            prop_assert_eq!(&d.tag, &w.tag);
        }
        for (d, w) in domain.commits.iter().zip(&wire.commits) {
            prop_assert_eq!(&d.id, &w.id);
        }
    }

    /// Property: Stage history keeps its length and order.
    #[test]
    fn prop_stage_history_keeps_order(
        history in prop::collection::vec(wire_simple_freight_strategy(), 0..6),
    ) {
        let wire = wire::Stage {
            status: Some(wire::StageStatus {
                history: history.clone(),
                ..Default::default()
            }),
            ..Default::default()
        };
        let stage = Stage::from(&wire);
        let ids: Vec<_> = stage
            .status
            .as_ref()
            .map(|s| s.history.iter().map(|f| f.id.clone()).collect())
            .unwrap_or_default();
        let expected: Vec<_> = history.iter().map(|f| f.id.clone()).collect();
        prop_assert_eq!(ids, expected);
    }
}

// =============================================================================
// Enum Identity Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: any health state string, known or not, passes through unchanged.
    #[test]
    fn prop_health_state_identity(status in ".{0,24}") {
        let wire = wire::Health {
            status: status.clone(),
            ..Default::default()
        };
        let health = Health::from(&wire);
        prop_assert_eq!(health.status.as_str(), status.as_str());
        prop_assert_eq!(wire::Health::from(&health).status, status);
    }

    /// Property: any Helm value type string passes through unchanged.
    #[test]
    fn prop_helm_value_type_identity(value in ".{0,24}") {
        let wire = wire::GitRepoUpdate {
            helm: Some(wire::HelmPromotionMechanism {
                images: vec![wire::HelmImageUpdate {
                    value: value.clone(),
                    ..Default::default()
                }],
                charts: Vec::new(),
            }),
            ..Default::default()
        };
        let update = GitRepoUpdate::from(&wire);
        let back = wire::GitRepoUpdate::from(&update);
        prop_assert_eq!(&back.helm.as_ref().map(|h| h.images[0].value.clone()), &Some(value));
    }
}

// =============================================================================
// Roundtrip Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: a fully-populated Warehouse survives wire → domain → wire.
    #[test]
    fn prop_warehouse_roundtrip(
        meta in wire_meta_strategy(),
        subscriptions in prop::collection::vec(wire_repo_subscription_strategy(), 0..4),
        generation in any::<i64>(),
        has_status in any::<bool>(),
    ) {
        let wire = wire::Warehouse {
            api_version: crate::crd::API_VERSION.to_string(),
            kind: "Warehouse".to_string(),
            metadata: Some(meta),
            spec: Some(wire::WarehouseSpec { subscriptions }),
            status: has_status.then(|| wire::WarehouseStatus {
                error: String::new(),
                observed_generation: generation,
            }),
        };
        let warehouse = Warehouse::from(&wire);
        prop_assert_eq!(warehouse.status.is_some(), has_status);
        prop_assert_eq!(wire::Warehouse::from(&warehouse), wire);
    }

    /// Property: Freight qualification keys survive wire → domain → wire.
    #[test]
    fn prop_freight_qualifications_roundtrip(
        meta in wire_meta_strategy(),
        frozen in wire_simple_freight_strategy(),
        stages in prop::collection::btree_set(text(), 0..5),
    ) {
        let qualifications: BTreeMap<_, _> = stages
            .iter()
            .map(|s| (s.clone(), wire::Qualification {}))
            .collect();
        let wire = wire::Freight {
            api_version: crate::crd::API_VERSION.to_string(),
            kind: "Freight".to_string(),
            metadata: Some(meta),
            id: frozen.id,
            images: frozen.images,
            charts: frozen.charts,
            commits: frozen.commits,
            status: Some(wire::FreightStatus { qualifications }),
        };
        let freight = Freight::from(&wire);
        prop_assert_eq!(freight.status.qualifications.len(), stages.len());
        prop_assert_eq!(wire::Freight::from(&freight), wire);
    }
}

// =============================================================================
// Egress Rule Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: managed fields never reach the wire, however many there are.
    #[test]
    fn prop_managed_fields_never_egress(
        meta in wire_meta_strategy(),
        managers in prop::collection::vec(text(), 1..5),
    ) {
        let mut meta = meta;
        meta.managed_fields = managers
            .iter()
            .map(|m| wire::ManagedFieldsEntry {
                manager: Some(m.clone()),
                ..Default::default()
            })
            .collect();
        let stage = Stage::from(&wire::Stage {
            metadata: Some(meta),
            ..Default::default()
        });
        prop_assert_eq!(
            stage.metadata.managed_fields.as_ref().map(Vec::len),
            Some(managers.len())
        );

        let wire = wire::Stage::from(&stage);
        prop_assert!(wire.metadata.map(|m| m.managed_fields.is_empty()).unwrap_or(false));
    }

    /// Property: explicit-presence scalars are always set on egress.
    #[test]
    fn prop_image_subscription_presence_forced(
        semver_constraint in text(),
        allow_tags in text(),
        platform in text(),
    ) {
        let sub = ImageSubscription {
            semver_constraint: semver_constraint.clone(),
            allow_tags: allow_tags.clone(),
            platform: platform.clone(),
            ..Default::default()
        };
        let wire = wire::ImageSubscription::from(&sub);
        prop_assert_eq!(wire.semver_constraint, Some(semver_constraint));
        prop_assert_eq!(wire.allow_tags, Some(allow_tags));
        prop_assert_eq!(wire.platform, Some(platform));
    }
}
