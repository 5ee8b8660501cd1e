//! Wire messages owned by the API service rather than a resource group

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Project {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(message, optional, tag = "2")]
    pub create_time: Option<::prost_types::Timestamp>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VersionInfo {
    #[prost(string, tag = "1")]
    pub version: String,
    #[prost(string, tag = "2")]
    pub git_commit: String,
    #[prost(bool, tag = "3")]
    pub git_tree_dirty: bool,
    #[prost(message, optional, tag = "4")]
    pub build_time: Option<::prost_types::Timestamp>,
    #[prost(string, tag = "5")]
    pub go_version: String,
    #[prost(string, tag = "6")]
    pub compiler: String,
    #[prost(string, tag = "7")]
    pub platform: String,
}
