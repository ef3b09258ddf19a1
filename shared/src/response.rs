//! API response types
//!
//! The purchases backend is not consistent about list envelopes: depending
//! on the endpoint (and backend version) a list arrives as a bare array or
//! wrapped under `vendors`, `categories` or `data`. `ListEnvelope`
//! normalizes all four shapes once, at the client boundary, so nothing
//! downstream branches on shape.

use serde::{Deserialize, Serialize};

/// Sentinel the backend uses to signal a completed delete
pub const DELETE_OK: &str = "1";

/// Polymorphic list envelope
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Items(Vec<T>),
    Vendors { vendors: Vec<T> },
    Categories { categories: Vec<T> },
    Data { data: Vec<T> },
}

impl<T> ListEnvelope<T> {
    /// Unwrap the envelope into its items
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Items(items) => items,
            Self::Vendors { vendors } => vendors,
            Self::Categories { categories } => categories,
            Self::Data { data } => data,
        }
    }
}

/// Delete endpoint response body
///
/// Delete endpoints answer 200 for both outcomes; `RetString` alone tells
/// "deleted" apart from "still referenced elsewhere, refused".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    #[serde(rename = "RetString", default)]
    pub ret_string: String,
}

impl DeleteResponse {
    pub fn outcome(&self) -> DeleteOutcome {
        if self.ret_string == DELETE_OK {
            DeleteOutcome::Deleted
        } else {
            DeleteOutcome::Refused
        }
    }
}

/// Outcome of a delete request that reached the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The entity was removed
    Deleted,
    /// Soft refusal: the entity is referenced elsewhere
    Refused,
}

impl DeleteOutcome {
    pub fn is_deleted(self) -> bool {
        matches!(self, Self::Deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Vendor;

    fn vendor_array() -> &'static str {
        r#"[{"VendorID":1,"Name":"Acme"},{"VendorID":2,"Name":"Globex"}]"#
    }

    #[test]
    fn bare_array_normalizes() {
        let env: ListEnvelope<Vendor> = serde_json::from_str(vendor_array()).unwrap();
        assert_eq!(env.into_items().len(), 2);
    }

    #[test]
    fn vendors_key_normalizes() {
        let json = format!(r#"{{"vendors":{}}}"#, vendor_array());
        let env: ListEnvelope<Vendor> = serde_json::from_str(&json).unwrap();
        assert_eq!(env.into_items().len(), 2);
    }

    #[test]
    fn categories_key_normalizes() {
        let json = r#"{"categories":[{"CategoryID":1,"CategoryName":"Legal"}]}"#;
        let env: ListEnvelope<crate::models::VendorCategory> =
            serde_json::from_str(json).unwrap();
        assert_eq!(env.into_items().len(), 1);
    }

    #[test]
    fn data_key_normalizes() {
        let json = format!(r#"{{"data":{}}}"#, vendor_array());
        let env: ListEnvelope<Vendor> = serde_json::from_str(&json).unwrap();
        assert_eq!(env.into_items()[0].vendor_id, 1);
    }

    #[test]
    fn only_exact_sentinel_means_deleted() {
        let ok: DeleteResponse = serde_json::from_str(r#"{"RetString":"1"}"#).unwrap();
        assert_eq!(ok.outcome(), DeleteOutcome::Deleted);

        for refused in [r#"{"RetString":"0"}"#, r#"{"RetString":"true"}"#, r#"{}"#] {
            let res: DeleteResponse = serde_json::from_str(refused).unwrap();
            assert_eq!(res.outcome(), DeleteOutcome::Refused);
        }
    }
}
