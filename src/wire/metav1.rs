//! Wire object envelope
//!
//! Mirrors `k8s.io.apimachinery.pkg.apis.meta.v1.ObjectMeta` with proto3
//! explicit presence on every scalar.

use std::collections::BTreeMap;

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ObjectMeta {
    #[prost(string, optional, tag = "1")]
    pub name: Option<String>,
    #[prost(string, optional, tag = "2")]
    pub generate_name: Option<String>,
    #[prost(string, optional, tag = "3")]
    pub namespace: Option<String>,
    #[prost(string, optional, tag = "4")]
    pub uid: Option<String>,
    #[prost(string, optional, tag = "5")]
    pub resource_version: Option<String>,
    #[prost(int64, optional, tag = "6")]
    pub generation: Option<i64>,
    #[prost(message, optional, tag = "7")]
    pub creation_timestamp: Option<::prost_types::Timestamp>,
    #[prost(message, optional, tag = "8")]
    pub deletion_timestamp: Option<::prost_types::Timestamp>,
    #[prost(btree_map = "string, string", tag = "9")]
    pub labels: BTreeMap<String, String>,
    #[prost(btree_map = "string, string", tag = "10")]
    pub annotations: BTreeMap<String, String>,
    #[prost(string, repeated, tag = "11")]
    pub finalizers: Vec<String>,
    #[prost(message, repeated, tag = "12")]
    pub managed_fields: Vec<ManagedFieldsEntry>,
}

/// Record of which manager owns which fields of an object.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ManagedFieldsEntry {
    #[prost(string, optional, tag = "1")]
    pub manager: Option<String>,
    #[prost(string, optional, tag = "2")]
    pub operation: Option<String>,
    #[prost(string, optional, tag = "3")]
    pub api_version: Option<String>,
    #[prost(message, optional, tag = "4")]
    pub time: Option<::prost_types::Timestamp>,
    #[prost(string, optional, tag = "5")]
    pub fields_type: Option<String>,
    /// `FieldsV1` as raw JSON text
    #[prost(string, optional, tag = "6")]
    pub fields_v1: Option<String>,
    #[prost(string, optional, tag = "7")]
    pub subresource: Option<String>,
}
