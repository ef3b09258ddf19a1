//! Mock backend state

use std::collections::HashSet;
use std::sync::Mutex;

use shared::models::{Vendor, VendorCategory};

/// In-memory store behind the mock endpoints
///
/// Single-tenant: `BusinessID` on incoming requests is accepted but not
/// used to partition data.
#[derive(Debug, Default)]
pub struct AppState {
    pub categories: Mutex<Vec<VendorCategory>>,
    pub vendors: Mutex<Vec<Vendor>>,
    /// Vendors marked as referenced by other records (purchase orders in
    /// the real backend); deleting one answers the refusal sentinel.
    in_use_vendors: Mutex<HashSet<i64>>,
    next_category_id: Mutex<i64>,
    next_vendor_id: Mutex<i64>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            next_category_id: Mutex::new(1),
            next_vendor_id: Mutex::new(1),
            ..Self::default()
        }
    }

    /// Seed a category, returning its assigned id
    pub fn seed_category(&self, name: &str, description: &str, is_active: bool) -> i64 {
        let id = self.take_category_id();
        self.categories.lock().unwrap().push(VendorCategory {
            category_id: id,
            category_name: name.to_string(),
            description: description.to_string(),
            is_active,
        });
        id
    }

    /// Seed a vendor, returning its assigned id
    pub fn seed_vendor(&self, name: &str, category_id: i64, category_name: &str) -> i64 {
        let id = self.take_vendor_id();
        self.vendors.lock().unwrap().push(Vendor {
            vendor_id: id,
            name: name.to_string(),
            category_id: category_id.to_string(),
            vendor_category: category_name.to_string(),
            contact_number: "555-0100".to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            contact_person: "Sample Contact".to_string(),
            address: "1 Sample Street".to_string(),
            notes: String::new(),
            status: Some(shared::models::VendorStatus::Active),
        });
        id
    }

    /// Mark a vendor as referenced elsewhere so deletes are refused
    pub fn mark_vendor_in_use(&self, vendor_id: i64) {
        self.in_use_vendors.lock().unwrap().insert(vendor_id);
    }

    pub fn vendor_in_use(&self, vendor_id: i64) -> bool {
        self.in_use_vendors.lock().unwrap().contains(&vendor_id)
    }

    pub fn take_category_id(&self) -> i64 {
        let mut next = self.next_category_id.lock().unwrap();
        let id = *next;
        *next += 1;
        id
    }

    pub fn take_vendor_id(&self) -> i64 {
        let mut next = self.next_vendor_id.lock().unwrap();
        let id = *next;
        *next += 1;
        id
    }
}
