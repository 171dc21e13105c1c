//! Output schemas projecting records onto their public representation

use crate::core::error::{ApiResult, EntityError};
use serde::Serialize;
use serde_json::Value;

/// A whitelisting projection from an internal record to an output view
///
/// The view type decides which fields leave the process: anything not
/// declared on `View` cannot appear in a response built through the schema.
pub trait Schema {
    /// The internal record being projected
    type Record;

    /// The output-safe representation
    type View: Serialize;

    /// Name used when reporting serialization failures
    fn entity_type(&self) -> &'static str;

    /// Project a single record
    fn dump(&self, record: &Self::Record) -> Self::View;

    /// Project a collection, preserving its order
    fn dump_many(&self, records: &[Self::Record]) -> Vec<Self::View> {
        records.iter().map(|record| self.dump(record)).collect()
    }

    /// Project a collection and encode it as a JSON array
    fn dump_json(&self, records: &[Self::Record]) -> ApiResult<Value> {
        serde_json::to_value(self.dump_many(records)).map_err(|e| {
            EntityError::SerializationError {
                entity_type: self.entity_type().to_string(),
                message: e.to_string(),
            }
            .into()
        })
    }
}
