//! Vendor Category Model

use serde::{Deserialize, Serialize};

/// Vendor category entity
///
/// Only categories with `is_active == true` are offered as options when a
/// vendor is assigned a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorCategory {
    #[serde(rename = "CategoryID")]
    pub category_id: i64,
    #[serde(rename = "CategoryName")]
    pub category_name: String,
    #[serde(rename = "Description", default)]
    pub description: String,
    #[serde(rename = "IsActive", default)]
    pub is_active: bool,
}
