//! ** idgen module **
//! Namespaces and helpers for generating stable v5 uuids for objects placed by the loader.
//! Objects created at runtime use v4 (random) uuids instead.
use uuid::Uuid;

pub const NAMESPACE_ITEM: Uuid = uuid::uuid!("47d2aad8-22cc-4dd4-bf9f-b9eddc4fe2cf");

pub const NAMESPACE_DOOR: Uuid = uuid::uuid!("b0e5f0a1-6c2e-4d8e-9a43-1f7c2d5e8b19");

/// Generate a v5 uuid for a placement token from the world data.
///
/// The same token always yields the same uuid, so two copies of one item
/// definition placed in different spots get different, reproducible ids.
pub fn uuid_from_token(namespace: &Uuid, token: &str) -> Uuid {
    Uuid::new_v5(namespace, token.as_bytes())
}

/// Fresh random id for objects that don't come from the world data.
pub fn new_id() -> Uuid {
    Uuid::new_v4()
}
