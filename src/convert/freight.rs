//! Freight and Freight snapshots

use chrono::{DateTime, Utc};

use super::{metadata, time, type_identity};
use crate::crd::{kinds, type_meta, Freight, FreightStatus, Qualification, SimpleFreight};
use crate::wire;

impl SimpleFreight {
    /// Convert to the wire form, attaching a "first seen" time if the caller
    /// has one. The snapshot itself never records it.
    pub fn to_wire(&self, first_seen: Option<DateTime<Utc>>) -> wire::SimpleFreight {
        wire::SimpleFreight {
            id: self.id.clone(),
            first_seen: first_seen.as_ref().map(time::to_wire),
            commits: self.commits.iter().map(Into::into).collect(),
            images: self.images.iter().map(Into::into).collect(),
            charts: self.charts.iter().map(Into::into).collect(),
        }
    }
}

impl From<&wire::SimpleFreight> for SimpleFreight {
    fn from(s: &wire::SimpleFreight) -> Self {
        Self {
            id: s.id.clone(),
            commits: s.commits.iter().map(Into::into).collect(),
            images: s.images.iter().map(Into::into).collect(),
            charts: s.charts.iter().map(Into::into).collect(),
        }
    }
}

impl From<&SimpleFreight> for wire::SimpleFreight {
    fn from(s: &SimpleFreight) -> Self {
        s.to_wire(None)
    }
}

impl From<&wire::Freight> for Freight {
    fn from(f: &wire::Freight) -> Self {
        let qualifications = f
            .status
            .iter()
            .flat_map(|status| status.qualifications.keys())
            .map(|stage| (stage.clone(), Qualification {}))
            .collect();

        Self {
            types: type_meta(kinds::FREIGHT),
            metadata: f
                .metadata
                .as_ref()
                .map(metadata::from_wire)
                .unwrap_or_default(),
            id: f.id.clone(),
            commits: f.commits.iter().map(Into::into).collect(),
            images: f.images.iter().map(Into::into).collect(),
            charts: f.charts.iter().map(Into::into).collect(),
            status: FreightStatus { qualifications },
        }
    }
}

impl From<&Freight> for wire::Freight {
    fn from(f: &Freight) -> Self {
        let (api_version, kind) = type_identity::<Freight>();
        let qualifications = f
            .status
            .qualifications
            .keys()
            .map(|stage| (stage.clone(), wire::Qualification {}))
            .collect();

        Self {
            api_version,
            kind,
            metadata: Some(metadata::to_wire(&f.metadata)),
            id: f.id.clone(),
            images: f.images.iter().map(Into::into).collect(),
            charts: f.charts.iter().map(Into::into).collect(),
            commits: f.commits.iter().map(Into::into).collect(),
            status: Some(wire::FreightStatus { qualifications }),
        }
    }
}
