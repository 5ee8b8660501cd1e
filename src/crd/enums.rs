//! Enum-like string values
//!
//! The domain model carries enum fields by their string identity. Known values
//! are exposed as associated constants; anything else (including the empty
//! string) is preserved verbatim so that values written by a newer producer
//! survive a pass through this layer.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $( $(#[$vmeta:meta])* $konst:ident = $value:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Cow<'static, str>);

        impl $name {
            $(
                $(#[$vmeta])*
                pub const $konst: $name = $name(Cow::Borrowed($value));
            )+

            /// The string identity of this value.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                $name(Cow::Owned(value))
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                $name(Cow::Owned(value.to_owned()))
            }
        }

        impl From<&$name> for String {
            fn from(value: &$name) -> Self {
                value.0.clone().into_owned()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl schemars::JsonSchema for $name {
            fn schema_name() -> String {
                stringify!($name).to_owned()
            }

            fn json_schema(gen: &mut schemars::gen::SchemaGenerator) -> schemars::schema::Schema {
                <String as schemars::JsonSchema>::json_schema(gen)
            }
        }
    };
}

string_enum! {
    /// Aggregate health of a Stage.
    pub struct HealthState {
        HEALTHY = "Healthy",
        UNHEALTHY = "Unhealthy",
        UNKNOWN = "Unknown",
    }
}

string_enum! {
    /// Health of a single Argo CD Application, as reported by Argo CD.
    pub struct ArgoCDAppHealthState {
        HEALTHY = "Healthy",
        PROGRESSING = "Progressing",
        SUSPENDED = "Suspended",
        DEGRADED = "Degraded",
        MISSING = "Missing",
        UNKNOWN = "Unknown",
    }
}

string_enum! {
    /// Sync state of a single Argo CD Application.
    pub struct ArgoCDAppSyncState {
        SYNCED = "Synced",
        OUT_OF_SYNC = "OutOfSync",
        UNKNOWN = "Unknown",
    }
}

string_enum! {
    /// How a Warehouse picks the newest image from a repository.
    pub struct ImageUpdateStrategy {
        SEMVER = "SemVer",
        LATEST = "Latest",
        NAME = "Name",
        DIGEST = "Digest",
    }
}

string_enum! {
    /// Which part of an image reference is written into a values file.
    pub struct ImageUpdateValueType {
        IMAGE = "Image",
        TAG = "Tag",
        LEAF = "Leaf",
        DIGEST = "Digest",
    }
}

string_enum! {
    /// Lifecycle phase of a Promotion.
    pub struct PromotionPhase {
        PENDING = "Pending",
        RUNNING = "Running",
        SUCCEEDED = "Succeeded",
        FAILED = "Failed",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_constants() {
        assert_eq!(HealthState::HEALTHY.as_str(), "Healthy");
        assert_eq!(ArgoCDAppSyncState::OUT_OF_SYNC.as_str(), "OutOfSync");
        assert_eq!(PromotionPhase::from("Succeeded"), PromotionPhase::SUCCEEDED);
    }

    #[test]
    fn test_unknown_values_pass_through() {
        let state = ArgoCDAppHealthState::from("healthy");
        assert_eq!(state.as_str(), "healthy");
        assert_ne!(state, ArgoCDAppHealthState::HEALTHY);

        let empty = HealthState::from(String::new());
        assert_eq!(empty, HealthState::default());
        assert_eq!(String::from(&empty), "");
    }

    #[test]
    fn test_serde_is_transparent() {
        let json = serde_json::to_string(&ImageUpdateStrategy::SEMVER).unwrap();
        assert_eq!(json, "\"SemVer\"");

        let parsed: ImageUpdateStrategy = serde_json::from_str("\"Lexical\"").unwrap();
        assert_eq!(parsed.as_str(), "Lexical");
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ImageUpdateValueType::LEAF), "Leaf");
    }
}
