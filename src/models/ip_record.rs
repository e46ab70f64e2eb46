use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One observed request: the client IP as seen and its octet-reversed form.
/// Rows are write-once; nothing in the service updates or deletes them.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct IpRecord {
    pub id: i64,
    pub ip: String,
    pub reversed_ip: String,
}
