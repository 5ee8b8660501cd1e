//! Build and version metadata

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const UNKNOWN: &str = "unknown";

/// Version metadata of a running build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Version {
    pub version: String,
    pub git_commit: String,
    pub git_tree_dirty: bool,
    pub build_date: DateTime<Utc>,
    /// Version of the toolchain that produced the build
    pub toolchain_version: String,
    pub compiler: String,
    /// `<os>/<arch>`
    pub platform: String,
}

impl Version {
    /// Version metadata of this binary, as stamped by the build script.
    pub fn current() -> Self {
        let build_date = option_env!("KARGO_WIRE_BUILD_DATE")
            .and_then(|s| s.parse::<i64>().ok())
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .unwrap_or(DateTime::UNIX_EPOCH);

        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            git_commit: option_env!("KARGO_WIRE_GIT_COMMIT")
                .unwrap_or(UNKNOWN)
                .to_string(),
            git_tree_dirty: option_env!("KARGO_WIRE_GIT_TREE_DIRTY") == Some("true"),
            build_date,
            toolchain_version: option_env!("KARGO_WIRE_RUSTC_VERSION")
                .unwrap_or(UNKNOWN)
                .to_string(),
            compiler: "rustc".to_string(),
            platform: format!("{}/{}", std::env::consts::OS, std::env::consts::ARCH),
        }
    }
}
