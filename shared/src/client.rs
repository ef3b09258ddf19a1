//! Client-related types shared between the screens and the purchases API
//!
//! Request payloads for the `/purchases` endpoints. The backend expects
//! every identifier string-encoded, even where semantically numeric, so all
//! `*_id` fields here are `String`.

use serde::{Deserialize, Serialize};

use crate::models::VendorStatus;

// =============================================================================
// Session DTOs
// =============================================================================

/// User details supplied by the auth collaborator after login
///
/// Populated once per session and read-only afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserDetails {
    #[serde(rename = "BusinessID")]
    pub business_id: Option<i64>,
    #[serde(rename = "TeamContactID")]
    pub team_contact_id: Option<i64>,
    #[serde(rename = "UserRole", default)]
    pub user_role: String,
    #[serde(rename = "AccountID")]
    pub account_id: Option<i64>,
}

// =============================================================================
// Category API DTOs
// =============================================================================

/// List categories request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetVendorCategoriesRequest {
    #[serde(rename = "BusinessID")]
    pub business_id: String,
}

/// Add category request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddVendorCategoryRequest {
    #[serde(rename = "CategoryName")]
    pub category_name: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "BusinessID")]
    pub business_id: String,
}

/// Update category request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateVendorCategoryRequest {
    #[serde(rename = "CategoryName")]
    pub category_name: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "BusinessID")]
    pub business_id: String,
    #[serde(rename = "CategoryID")]
    pub category_id: String,
}

/// Delete category request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteVendorCategoryRequest {
    #[serde(rename = "CategoryID")]
    pub category_id: String,
}

// =============================================================================
// Vendor API DTOs
// =============================================================================

/// List vendors request
///
/// `team_contact_id` is present only for non-owner roles, which see their
/// own vendors rather than the whole business.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetVendorsRequest {
    #[serde(rename = "BusinessID")]
    pub business_id: String,
    #[serde(rename = "TeamContactID", skip_serializing_if = "Option::is_none")]
    pub team_contact_id: Option<String>,
}

impl GetVendorsRequest {
    /// Business-wide listing (owner scope)
    pub fn for_business(business_id: impl Into<String>) -> Self {
        Self {
            business_id: business_id.into(),
            team_contact_id: None,
        }
    }
}

/// Add vendor request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddVendorRequest {
    #[serde(rename = "VendorName")]
    pub vendor_name: String,
    #[serde(rename = "CategoryID")]
    pub category_id: String,
    #[serde(rename = "ContactNumber")]
    pub contact_number: String,
    #[serde(rename = "EmailID")]
    pub email_id: String,
    #[serde(rename = "ContactPerson")]
    pub contact_person: String,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "Notes")]
    pub notes: String,
    #[serde(rename = "Status")]
    pub status: VendorStatus,
    #[serde(rename = "BusinessID")]
    pub business_id: String,
}

/// Update vendor request (full replace of all fields)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateVendorRequest {
    #[serde(rename = "VendorID")]
    pub vendor_id: String,
    #[serde(rename = "VendorName")]
    pub vendor_name: String,
    #[serde(rename = "CategoryID")]
    pub category_id: String,
    #[serde(rename = "ContactNumber")]
    pub contact_number: String,
    #[serde(rename = "EmailID")]
    pub email_id: String,
    #[serde(rename = "ContactPerson")]
    pub contact_person: String,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "Notes")]
    pub notes: String,
    #[serde(rename = "BusinessID")]
    pub business_id: String,
    #[serde(rename = "Status")]
    pub status: VendorStatus,
}

/// Delete vendor request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteVendorRequest {
    #[serde(rename = "VendorID")]
    pub vendor_id: String,
}
