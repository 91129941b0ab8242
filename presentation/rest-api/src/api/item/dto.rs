use chrono::{DateTime, Utc};
use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::item::model::Item;

/// Create/update payload. Field rules are enforced by the input constructor
/// before any use case runs.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ItemRequest {
    /// Item name (3-100 characters, unique)
    pub name: String,
    /// Optional description (up to 255 characters)
    #[oai(skip_serializing_if_is_none)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Quantity to buy (1-10000)
    pub quantity: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ItemResponse {
    /// Item unique identifier
    pub id: String,
    /// Item name
    pub name: String,
    /// Optional description
    #[oai(skip_serializing_if_is_none)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Quantity to buy
    pub quantity: i32,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name,
            description: item.description,
            quantity: item.quantity,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}
