//! Object envelope adapter
//!
//! Converts between the wire [`ObjectMeta`](wire::ObjectMeta) and the
//! Kubernetes [`ObjectMeta`]. Ingress copies every field verbatim, including
//! managed fields. Egress works on a [`sanitized`] copy, so field-manager
//! bookkeeping never leaves the cluster side.

use std::collections::BTreeMap;

use k8s_openapi::apimachinery::pkg::apis::meta::v1::{FieldsV1, ManagedFieldsEntry, ObjectMeta};
use tracing::warn;

use super::time::{time_from_wire, time_to_wire};
use crate::wire;

/// Wire envelope to domain envelope.
pub fn from_wire(meta: &wire::ObjectMeta) -> ObjectMeta {
    ObjectMeta {
        name: meta.name.clone(),
        generate_name: meta.generate_name.clone(),
        namespace: meta.namespace.clone(),
        uid: meta.uid.clone(),
        resource_version: meta.resource_version.clone(),
        generation: meta.generation,
        creation_timestamp: meta.creation_timestamp.as_ref().and_then(time_from_wire),
        deletion_timestamp: meta.deletion_timestamp.as_ref().and_then(time_from_wire),
        labels: non_empty(&meta.labels),
        annotations: non_empty(&meta.annotations),
        finalizers: (!meta.finalizers.is_empty()).then(|| meta.finalizers.clone()),
        managed_fields: (!meta.managed_fields.is_empty())
            .then(|| meta.managed_fields.iter().map(managed_fields_from_wire).collect()),
        ..Default::default()
    }
}

/// Domain envelope to wire envelope, without managed fields.
///
/// The input is left untouched.
pub fn to_wire(meta: &ObjectMeta) -> wire::ObjectMeta {
    let meta = sanitized(meta);
    wire::ObjectMeta {
        name: meta.name,
        generate_name: meta.generate_name,
        namespace: meta.namespace,
        uid: meta.uid,
        resource_version: meta.resource_version,
        generation: meta.generation,
        creation_timestamp: meta.creation_timestamp.as_ref().map(time_to_wire),
        deletion_timestamp: meta.deletion_timestamp.as_ref().map(time_to_wire),
        labels: meta.labels.unwrap_or_default(),
        annotations: meta.annotations.unwrap_or_default(),
        finalizers: meta.finalizers.unwrap_or_default(),
        managed_fields: Vec::new(),
    }
}

/// Copy of `meta` with managed fields cleared. The input is left untouched.
pub fn sanitized(meta: &ObjectMeta) -> ObjectMeta {
    let mut copy = meta.clone();
    copy.managed_fields = None;
    copy
}

fn non_empty(map: &BTreeMap<String, String>) -> Option<BTreeMap<String, String>> {
    (!map.is_empty()).then(|| map.clone())
}

fn managed_fields_from_wire(entry: &wire::ManagedFieldsEntry) -> ManagedFieldsEntry {
    let fields_v1 = entry
        .fields_v1
        .as_deref()
        .and_then(|raw| match serde_json::from_str(raw) {
            Ok(value) => Some(FieldsV1(value)),
            Err(e) => {
                warn!(
                    manager = entry.manager.as_deref().unwrap_or_default(),
                    "Dropping unparseable managed fields: {}", e
                );
                None
            }
        });

    ManagedFieldsEntry {
        manager: entry.manager.clone(),
        operation: entry.operation.clone(),
        api_version: entry.api_version.clone(),
        time: entry.time.as_ref().and_then(time_from_wire),
        fields_type: entry.fields_type.clone(),
        fields_v1,
        subresource: entry.subresource.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use k8s_openapi::apimachinery::pkg::apis::meta::v1::Time;

    fn sample_meta() -> ObjectMeta {
        ObjectMeta {
            name: Some("test".to_string()),
            namespace: Some("kargo-demo".to_string()),
            labels: Some(
                [("kargo.akuity.io/shard".to_string(), "a".to_string())]
                    .into_iter()
                    .collect(),
            ),
            annotations: Some(
                [("note".to_string(), "hello".to_string())]
                    .into_iter()
                    .collect(),
            ),
            creation_timestamp: Some(Time(Utc.timestamp_opt(1_700_000_000, 0).unwrap())),
            resource_version: Some("4242".to_string()),
            generation: Some(7),
            managed_fields: Some(vec![ManagedFieldsEntry {
                manager: Some("kargo-controller".to_string()),
                operation: Some("Update".to_string()),
                fields_type: Some("FieldsV1".to_string()),
                fields_v1: Some(FieldsV1(serde_json::json!({"f:status": {}}))),
                ..Default::default()
            }]),
            ..Default::default()
        }
    }

    #[test]
    fn test_envelope_round_trip() {
        let meta = sample_meta();
        let back = from_wire(&to_wire(&meta));
        assert_eq!(back, sanitized(&meta));
        assert!(back.managed_fields.is_none());
    }

    #[test]
    fn test_to_wire_copies_scalars() {
        let wire = to_wire(&sample_meta());
        assert_eq!(wire.name.as_deref(), Some("test"));
        assert_eq!(wire.namespace.as_deref(), Some("kargo-demo"));
        assert_eq!(wire.resource_version.as_deref(), Some("4242"));
        assert_eq!(wire.generation, Some(7));
        assert_eq!(wire.labels.len(), 1);
        assert_eq!(wire.annotations["note"], "hello");
        assert_eq!(wire.creation_timestamp.unwrap().seconds, 1_700_000_000);
        assert!(wire.managed_fields.is_empty());
    }

    #[test]
    fn test_to_wire_strips_managed_fields_on_a_copy() {
        let meta = sample_meta();
        let wire = to_wire(&meta);
        assert!(wire.managed_fields.is_empty());
        assert_eq!(meta.managed_fields.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn test_sanitized_strips_managed_fields_on_a_copy() {
        let meta = sample_meta();
        let clean = sanitized(&meta);
        assert!(clean.managed_fields.is_none());
        assert_eq!(clean.name, meta.name);
        assert_eq!(clean.labels, meta.labels);
        // caller's object is untouched
        assert_eq!(meta.managed_fields.as_ref().map(Vec::len), Some(1));
        assert!(to_wire(&clean).managed_fields.is_empty());
    }

    #[test]
    fn test_empty_wire_envelope() {
        let meta = from_wire(&wire::ObjectMeta::default());
        assert_eq!(meta, ObjectMeta::default());
    }

    #[test]
    fn test_invalid_fields_v1_is_dropped() {
        let wire = wire::ObjectMeta {
            managed_fields: vec![wire::ManagedFieldsEntry {
                manager: Some("kubectl".to_string()),
                fields_v1: Some("{not json".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        };
        let meta = from_wire(&wire);
        let entries = meta.managed_fields.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].manager.as_deref(), Some("kubectl"));
        assert!(entries[0].fields_v1.is_none());
    }
}
