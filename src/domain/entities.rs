//! Persistent entities as the rest of the crate sees them.

use serde::Serialize;

/// One cafe in the directory.
///
/// Handlers serialize this struct straight onto the wire, so the field
/// order here is the key order legacy clients see. Keep new fields at the
/// end and think twice before reordering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CafeRecord {
    pub id: i64,
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub seats: String,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    /// Free-form display price, e.g. `£2.70`. `None` when unknown.
    pub coffee_price: Option<String>,
}
