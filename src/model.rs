//! The `items` table schema and row/transport conversion.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Upper bound on `name`, mirrored in handler validation (SQLite does not
/// enforce column lengths).
pub const NAME_MAX_LEN: usize = 120;

/// One persisted row of the `items` table.
#[derive(Debug, Clone, FromRow)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Transport representation: all five fields, timestamps as RFC 3339 with
/// UTC offset.
#[derive(Debug, Serialize)]
pub struct ItemBody {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub created_at: String,
    pub updated_at: String,
}

impl Item {
    pub fn to_body(&self) -> ItemBody {
        ItemBody {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            created_at: self.created_at.to_rfc3339(),
            updated_at: self.updated_at.to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn body_carries_all_fields_with_utc_offset() {
        let at = Utc.with_ymd_and_hms(2024, 5, 17, 9, 30, 0).unwrap();
        let item = Item {
            id: 7,
            name: "Widget".into(),
            description: "".into(),
            created_at: at,
            updated_at: at,
        };
        let body = item.to_body();
        assert_eq!(body.id, 7);
        assert_eq!(body.name, "Widget");
        assert_eq!(body.description, "");
        assert_eq!(body.created_at, "2024-05-17T09:30:00+00:00");
        assert_eq!(body.updated_at, body.created_at);
    }
}
