//! Vendor Model

use serde::{Deserialize, Serialize};

/// Vendor lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VendorStatus {
    #[default]
    Active,
    Inactive,
}

/// Vendor entity
///
/// `category_id` is string-encoded on the wire even though it references a
/// numeric `VendorCategory` identity; `vendor_category` carries the
/// denormalized category name supplied by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vendor {
    #[serde(rename = "VendorID")]
    pub vendor_id: i64,
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "CategoryID", default)]
    pub category_id: String,
    #[serde(rename = "VendorCategory", default)]
    pub vendor_category: String,
    #[serde(rename = "ContactNumber", default)]
    pub contact_number: String,
    #[serde(rename = "Email", default)]
    pub email: String,
    #[serde(rename = "ContactPerson", default)]
    pub contact_person: String,
    #[serde(rename = "Address", default)]
    pub address: String,
    #[serde(rename = "Notes", default)]
    pub notes: String,
    /// Absent on some backend payloads; editing treats it as Active.
    #[serde(rename = "Status", default, skip_serializing_if = "Option::is_none")]
    pub status: Option<VendorStatus>,
}
