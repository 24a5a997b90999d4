use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// An item as persisted and returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    #[schema(value_type = f64, example = 1999.9)]
    pub price: Decimal,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Validated payload for creating an item
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateItemDto {
    #[schema(max_length = 120)]
    pub name: String,
    #[schema(value_type = f64, example = 1999.9)]
    pub price: Decimal,
}

/// Validated payload for partially updating an item
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateItemDto {
    pub name: Option<String>,
    #[schema(value_type = Option<f64>)]
    pub price: Option<Decimal>,
}

/// Response returned after deleting an item
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ItemDeleteResponse {
    pub deleted: bool,
}
