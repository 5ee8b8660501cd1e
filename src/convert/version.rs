//! Version metadata (egress only)

use super::time;
use crate::version::Version;
use crate::wire;

impl From<&Version> for wire::VersionInfo {
    fn from(v: &Version) -> Self {
        Self {
            version: v.version.clone(),
            git_commit: v.git_commit.clone(),
            git_tree_dirty: v.git_tree_dirty,
            build_time: Some(time::to_wire(&v.build_date)),
            go_version: v.toolchain_version.clone(),
            compiler: v.compiler.clone(),
            platform: v.platform.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_version_info_copies_every_field() {
        let version = Version {
            version: "v0.1.0".to_string(),
            git_commit: "3f2c1ab".to_string(),
            git_tree_dirty: true,
            build_date: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
            toolchain_version: "rustc 1.80.0".to_string(),
            compiler: "rustc".to_string(),
            platform: "linux/x86_64".to_string(),
        };
        let wire = wire::VersionInfo::from(&version);
        assert_eq!(wire.version, "v0.1.0");
        assert_eq!(wire.git_commit, "3f2c1ab");
        assert!(wire.git_tree_dirty);
        assert_eq!(wire.build_time.unwrap().seconds, 1_700_000_000);
        assert_eq!(wire.go_version, "rustc 1.80.0");
        assert_eq!(wire.compiler, "rustc");
        assert_eq!(wire.platform, "linux/x86_64");
    }
}
