// Catalog records as served by the remote product API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// The catalog sends `null` for fields it has no value for; read those the
/// same way as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Product category, embedded by value in every [`Product`].
///
/// Owned by the catalog service; the storefront only reads snapshots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id", default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Revision counter maintained by the catalog service (`__v`).
    #[serde(rename = "__v", default, deserialize_with = "null_as_default")]
    pub revision: i64,
}

/// A single catalog product.
///
/// Numeric fields missing from the payload, or sent as `null`, are read as
/// zero rather than rejected; an empty `_id` is treated as absent by the renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id", default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stock: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sold: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: Category,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
    /// The product id, or `None` when the catalog sent none.
    pub fn id(&self) -> Option<&str> {
        let id = self.id.trim();
        if id.is_empty() {
            None
        } else {
            Some(id)
        }
    }

    /// Join key used by the category filter.
    pub fn category_id(&self) -> &str {
        &self.category.id
    }
}
