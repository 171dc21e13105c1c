//! Entity trait defining the core abstraction for stored records

/// Base trait for all entities in the system.
///
/// Every entity carries a stable unique identifier assigned by the data
/// layer; stores key their records on it.
pub trait Entity: Clone + Send + Sync + 'static {
    /// The singular resource name (e.g., "teacher")
    fn resource_name_singular() -> &'static str;

    /// Get the unique identifier for this entity instance
    fn id(&self) -> i64;
}
