//! Manifest and byte codec
//!
//! Glue between on-disk forms and the converters: a domain manifest (YAML) is
//! parsed, converted and protobuf-encoded, and protobuf bytes are decoded,
//! converted and rendered back to YAML.

use clap::ValueEnum;
use prost::Message;
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::crd::{kinds, Freight, Project, Promotion, PromotionPolicy, Stage, Warehouse};
use crate::error::{Error, Result};
use crate::wire;

/// Top-level Kargo resource kinds the codec understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ResourceKind {
    Project,
    Stage,
    Warehouse,
    Freight,
    Promotion,
    PromotionPolicy,
}

impl ResourceKind {
    /// Look up a kind by its `kind` string.
    pub fn from_kind(kind: &str) -> Option<Self> {
        match kind {
            kinds::PROJECT => Some(Self::Project),
            kinds::STAGE => Some(Self::Stage),
            kinds::WAREHOUSE => Some(Self::Warehouse),
            kinds::FREIGHT => Some(Self::Freight),
            kinds::PROMOTION => Some(Self::Promotion),
            kinds::PROMOTION_POLICY => Some(Self::PromotionPolicy),
            _ => None,
        }
    }

    /// The `kind` string of this resource.
    pub fn as_kind(&self) -> &'static str {
        match self {
            Self::Project => kinds::PROJECT,
            Self::Stage => kinds::STAGE,
            Self::Warehouse => kinds::WAREHOUSE,
            Self::Freight => kinds::FREIGHT,
            Self::Promotion => kinds::PROMOTION,
            Self::PromotionPolicy => kinds::PROMOTION_POLICY,
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_kind())
    }
}

// =============================================================================
// Encode
// =============================================================================

/// Parse a domain manifest and encode it as a wire message.
///
/// The manifest's `kind` selects the resource type.
pub fn encode_manifest(manifest: &str) -> Result<(ResourceKind, Vec<u8>)> {
    let value: serde_yaml::Value = serde_yaml::from_str(manifest)?;
    let kind_name = value
        .get("kind")
        .and_then(serde_yaml::Value::as_str)
        .ok_or(Error::MissingKind)?;
    let kind = ResourceKind::from_kind(kind_name)
        .ok_or_else(|| Error::UnsupportedKind(kind_name.to_string()))?;

    let bytes = match kind {
        ResourceKind::Project => encode::<Project, wire::Project>(value)?,
        ResourceKind::Stage => encode::<Stage, wire::Stage>(value)?,
        ResourceKind::Warehouse => encode::<Warehouse, wire::Warehouse>(value)?,
        ResourceKind::Freight => encode::<Freight, wire::Freight>(value)?,
        ResourceKind::Promotion => encode::<Promotion, wire::Promotion>(value)?,
        ResourceKind::PromotionPolicy => {
            encode::<PromotionPolicy, wire::PromotionPolicy>(value)?
        }
    };

    debug!(kind = %kind, bytes = bytes.len(), "Encoded manifest");
    Ok((kind, bytes))
}

fn encode<D, W>(value: serde_yaml::Value) -> Result<Vec<u8>>
where
    D: DeserializeOwned,
    W: Message + for<'a> From<&'a D>,
{
    let resource: D = serde_yaml::from_value(value)?;
    Ok(W::from(&resource).encode_to_vec())
}

// =============================================================================
// Decode
// =============================================================================

/// Decode a wire message of the given kind and render it as a domain manifest.
pub fn decode_to_manifest(kind: ResourceKind, bytes: &[u8]) -> Result<String> {
    debug!(kind = %kind, bytes = bytes.len(), "Decoding wire message");
    match kind {
        ResourceKind::Project => decode::<wire::Project, Project>(bytes),
        ResourceKind::Stage => decode::<wire::Stage, Stage>(bytes),
        ResourceKind::Warehouse => decode::<wire::Warehouse, Warehouse>(bytes),
        ResourceKind::Freight => decode::<wire::Freight, Freight>(bytes),
        ResourceKind::Promotion => decode::<wire::Promotion, Promotion>(bytes),
        ResourceKind::PromotionPolicy => {
            decode::<wire::PromotionPolicy, PromotionPolicy>(bytes)
        }
    }
}

fn decode<W, D>(bytes: &[u8]) -> Result<String>
where
    W: Message + Default,
    D: Serialize + for<'a> From<&'a W>,
{
    let message = W::decode(bytes)?;
    Ok(serde_yaml::to_string(&D::from(&message))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    const STAGE: &str = r#"
apiVersion: kargo.akuity.io/v1alpha1
kind: Stage
metadata:
  name: test
  namespace: kargo-demo
spec:
  subscriptions:
    warehouse: kargo-demo
  promotionMechanisms:
    gitRepoUpdates:
      - repoURL: https://github.com/akuity/kargo-demo.git
        writeBranch: env/test
        kustomize:
          images:
            - image: nginx
              path: stages/test
"#;

    #[test]
    fn test_resource_kind_lookup() {
        for kind in ResourceKind::value_variants() {
            assert_eq!(ResourceKind::from_kind(kind.as_kind()), Some(*kind));
        }
        assert_eq!(ResourceKind::from_kind("stage"), None);
    }

    #[test]
    fn test_encode_stage_manifest() {
        let (kind, bytes) = encode_manifest(STAGE).unwrap();
        assert_eq!(kind, ResourceKind::Stage);

        let stage = wire::Stage::decode(bytes.as_slice()).unwrap();
        assert_eq!(stage.kind, "Stage");
        assert_eq!(stage.metadata.unwrap().name.as_deref(), Some("test"));
        let spec = stage.spec.unwrap();
        assert_eq!(spec.subscriptions.unwrap().warehouse, "kargo-demo");
        let update = &spec.promotion_mechanisms.unwrap().git_repo_updates[0];
        assert!(update.kustomize.is_some());
        assert!(update.render.is_none());
        assert!(update.helm.is_none());
        // manifest had no status, egress always emits one
        assert!(stage.status.is_some());
    }

    #[test]
    fn test_decode_round_trip() {
        let (kind, bytes) = encode_manifest(STAGE).unwrap();
        let yaml = decode_to_manifest(kind, &bytes).unwrap();
        let stage: Stage = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(stage.name(), "test");
        assert_eq!(
            stage.spec.subscriptions.map(|s| s.warehouse).as_deref(),
            Some("kargo-demo")
        );
    }

    #[test]
    fn test_encode_freight_manifest() {
        let manifest = r#"
apiVersion: kargo.akuity.io/v1alpha1
kind: Freight
metadata:
  name: abc123
  namespace: kargo-demo
id: abc123
images:
  - repoURL: nginx
    tag: 1.25.3
status:
  qualifications:
    test: {}
"#;
        let (kind, bytes) = encode_manifest(manifest).unwrap();
        assert_eq!(kind, ResourceKind::Freight);
        let freight = wire::Freight::decode(bytes.as_slice()).unwrap();
        assert_eq!(freight.images[0].tag, "1.25.3");
        assert!(freight.status.unwrap().qualifications.contains_key("test"));
    }

    #[test]
    fn test_encode_missing_kind() {
        assert_matches!(encode_manifest("metadata: {}"), Err(Error::MissingKind));
    }

    #[test]
    fn test_encode_unsupported_kind() {
        assert_matches!(
            encode_manifest("kind: Deployment"),
            Err(Error::UnsupportedKind(kind)) if kind == "Deployment"
        );
    }

    #[test]
    fn test_encode_invalid_yaml() {
        assert_matches!(encode_manifest("kind: [unterminated"), Err(Error::Yaml(_)));
    }

    #[test]
    fn test_decode_garbage() {
        assert_matches!(
            decode_to_manifest(ResourceKind::Stage, &[0xff, 0xff, 0xff]),
            Err(Error::Decode(_))
        );
    }
}
