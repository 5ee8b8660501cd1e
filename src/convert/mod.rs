//! Wire ↔ Domain Converters
//!
//! Every conversion is a `From<&Source> for Target` impl between a
//! [`crate::wire`] message and its [`crate::crd`] counterpart. Conversions
//! are total: an absent input field produces an absent output field, lists keep
//! their length and order, and enum-like strings pass through unchanged.
//!
//! Three call sites deviate from a plain field copy:
//!
//! - domain → wire always clears `managed_fields` (see [`metadata::to_wire`]);
//! - domain → wire sets every explicit-presence scalar, even to the zero value;
//! - `SimpleFreight` takes its "first seen" time from the caller
//!   ([`crate::crd::SimpleFreight::to_wire`]).

mod artifacts;
mod freight;
mod health;
mod mechanisms;
pub mod metadata;
mod resources;
mod subscriptions;
pub mod time;
mod version;

#[cfg(test)]
mod proptest;

/// `apiVersion` and `kind` for an egress message, taken from the resource's
/// type identity rather than the instance.
pub(crate) fn type_identity<K>() -> (String, String)
where
    K: kube::Resource<DynamicType = ()>,
{
    (
        K::api_version(&()).into_owned(),
        K::kind(&()).into_owned(),
    )
}
