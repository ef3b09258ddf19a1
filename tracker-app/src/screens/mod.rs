//! Screen controllers
//!
//! One module per screen. Each controller owns its fetched lists and form
//! drafts for exactly as long as the screen is open; nothing here is
//! shared across screens or persisted.

pub mod add_vendor;
pub mod categories;
pub mod dashboard;
pub mod vendors;

// Re-exports
pub use add_vendor::{AddVendorWizard, ContactField, RegistrationOutcome, WizardStep};
pub use categories::{
    CategoriesLoadOutcome, CategoriesScreen, CategoryDeleteOutcome, CategoryDialog,
    CategorySaveOutcome,
};
pub use dashboard::{DashboardError, DashboardSummary, load_summary};
pub use vendors::{
    EditVendorDialog, VendorDeleteOutcome, VendorField, VendorUpdateOutcome, VendorsLoadOutcome,
    VendorsScreen,
};

/// Answer to a destructive-action prompt
///
/// Deletes must be confirmed interactively; the shell asks, the controller
/// acts only on [`Confirmation::Confirmed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Cancelled,
}

/// Required fields a submit attempt found empty
///
/// Holds the wire names of the failing fields, in validation order, and
/// drives the inline "required" markers. Editing a field clears its marker
/// without touching the others.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MissingFields(Vec<&'static str>);

impl MissingFields {
    pub fn set(&mut self, fields: Vec<&'static str>) {
        self.0 = fields;
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Drop the marker for one field (the user started fixing it)
    pub fn clear_field(&mut self, field: &str) {
        self.0.retain(|f| *f != field);
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.iter().any(|f| *f == field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn names(&self) -> &[&'static str] {
        &self.0
    }

    /// Comma-separated listing for alert texts
    pub fn join(&self) -> String {
        self.0.join(", ")
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory [`PurchasesApi`] double with call recording

    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, Ordering};

    use async_trait::async_trait;
    use tracker_client::{ClientError, ClientResult, PurchasesApi};

    use shared::client::{
        AddVendorCategoryRequest, AddVendorRequest, DeleteVendorCategoryRequest,
        DeleteVendorRequest, GetVendorCategoriesRequest, GetVendorsRequest, UserDetails,
        UpdateVendorCategoryRequest, UpdateVendorRequest,
    };
    use shared::models::{Vendor, VendorCategory, VendorStatus};
    use shared::response::DeleteOutcome;

    use crate::session::UserSession;

    pub fn owner_session() -> UserSession {
        UserSession::new(UserDetails {
            business_id: Some(42),
            team_contact_id: Some(9),
            user_role: "owner".into(),
            account_id: Some(42),
        })
    }

    pub fn member_session() -> UserSession {
        UserSession::new(UserDetails {
            business_id: Some(42),
            team_contact_id: Some(9),
            user_role: "member".into(),
            account_id: Some(42),
        })
    }

    pub fn no_business_session() -> UserSession {
        UserSession::new(UserDetails::default())
    }

    pub fn category(id: i64, name: &str, is_active: bool) -> VendorCategory {
        VendorCategory {
            category_id: id,
            category_name: name.to_string(),
            description: String::new(),
            is_active,
        }
    }

    pub fn vendor(id: i64, name: &str, category: &str) -> Vendor {
        Vendor {
            vendor_id: id,
            name: name.to_string(),
            category_id: String::new(),
            vendor_category: category.to_string(),
            contact_number: "555-0100".to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            contact_person: "Sam Doe".to_string(),
            address: "1 Main St".to_string(),
            notes: String::new(),
            status: Some(VendorStatus::Active),
        }
    }

    /// Recording API double
    ///
    /// Canned lists, per-operation failure switches, a configurable delete
    /// sentinel, and a call log so tests can assert which requests were
    /// (or were not) issued.
    #[derive(Default)]
    pub struct RecordingApi {
        pub categories: Mutex<Vec<VendorCategory>>,
        pub vendors: Mutex<Vec<Vendor>>,
        pub fail_categories: AtomicBool,
        pub fail_vendors: AtomicBool,
        pub fail_mutations: AtomicBool,
        pub fail_deletes: AtomicBool,
        /// Sentinel the delete endpoints answer with ("1" deletes)
        pub delete_ret: Mutex<String>,
        calls: Mutex<Vec<&'static str>>,
        pub last_vendors_req: Mutex<Option<GetVendorsRequest>>,
        pub last_add_vendor: Mutex<Option<AddVendorRequest>>,
        pub last_update_vendor: Mutex<Option<UpdateVendorRequest>>,
        pub last_add_category: Mutex<Option<AddVendorCategoryRequest>>,
        pub last_update_category: Mutex<Option<UpdateVendorCategoryRequest>>,
        pub last_delete_vendor: Mutex<Option<DeleteVendorRequest>>,
        pub last_delete_category: Mutex<Option<DeleteVendorCategoryRequest>>,
    }

    impl RecordingApi {
        pub fn new() -> Self {
            let api = Self::default();
            *api.delete_ret.lock().unwrap() = "1".to_string();
            api
        }

        pub fn with_categories(self, categories: Vec<VendorCategory>) -> Self {
            *self.categories.lock().unwrap() = categories;
            self
        }

        pub fn with_vendors(self, vendors: Vec<Vendor>) -> Self {
            *self.vendors.lock().unwrap() = vendors;
            self
        }

        pub fn with_delete_ret(self, ret: &str) -> Self {
            *self.delete_ret.lock().unwrap() = ret.to_string();
            self
        }

        pub fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }

        pub fn count(&self, op: &str) -> usize {
            self.calls.lock().unwrap().iter().filter(|&&c| c == op).count()
        }

        fn record(&self, op: &'static str) {
            self.calls.lock().unwrap().push(op);
        }

        fn boom() -> ClientError {
            ClientError::Internal("mock failure".to_string())
        }

        fn delete_outcome(&self) -> DeleteOutcome {
            if *self.delete_ret.lock().unwrap() == "1" {
                DeleteOutcome::Deleted
            } else {
                DeleteOutcome::Refused
            }
        }
    }

    #[async_trait]
    impl PurchasesApi for RecordingApi {
        async fn vendor_categories(
            &self,
            _req: &GetVendorCategoriesRequest,
        ) -> ClientResult<Vec<VendorCategory>> {
            self.record("GetVendorCategories");
            if self.fail_categories.load(Ordering::SeqCst) {
                return Err(Self::boom());
            }
            Ok(self.categories.lock().unwrap().clone())
        }

        async fn add_vendor_category(&self, req: &AddVendorCategoryRequest) -> ClientResult<()> {
            self.record("AddVendorCategory");
            *self.last_add_category.lock().unwrap() = Some(req.clone());
            if self.fail_mutations.load(Ordering::SeqCst) {
                return Err(Self::boom());
            }
            Ok(())
        }

        async fn update_vendor_category(
            &self,
            req: &UpdateVendorCategoryRequest,
        ) -> ClientResult<()> {
            self.record("UpdateVendorCategory");
            *self.last_update_category.lock().unwrap() = Some(req.clone());
            if self.fail_mutations.load(Ordering::SeqCst) {
                return Err(Self::boom());
            }
            Ok(())
        }

        async fn delete_vendor_category(
            &self,
            req: &DeleteVendorCategoryRequest,
        ) -> ClientResult<DeleteOutcome> {
            self.record("DeleteVendorCategory");
            *self.last_delete_category.lock().unwrap() = Some(req.clone());
            if self.fail_deletes.load(Ordering::SeqCst) {
                return Err(Self::boom());
            }
            Ok(self.delete_outcome())
        }

        async fn vendors_list(&self, req: &GetVendorsRequest) -> ClientResult<Vec<Vendor>> {
            self.record("GetVendorsList");
            *self.last_vendors_req.lock().unwrap() = Some(req.clone());
            if self.fail_vendors.load(Ordering::SeqCst) {
                return Err(Self::boom());
            }
            Ok(self.vendors.lock().unwrap().clone())
        }

        async fn add_vendor(&self, req: &AddVendorRequest) -> ClientResult<()> {
            self.record("AddVendor");
            *self.last_add_vendor.lock().unwrap() = Some(req.clone());
            if self.fail_mutations.load(Ordering::SeqCst) {
                return Err(Self::boom());
            }
            Ok(())
        }

        async fn update_vendor(&self, req: &UpdateVendorRequest) -> ClientResult<()> {
            self.record("UpdateVendor");
            *self.last_update_vendor.lock().unwrap() = Some(req.clone());
            if self.fail_mutations.load(Ordering::SeqCst) {
                return Err(Self::boom());
            }
            Ok(())
        }

        async fn delete_vendor(&self, req: &DeleteVendorRequest) -> ClientResult<DeleteOutcome> {
            self.record("DeleteVendor");
            *self.last_delete_vendor.lock().unwrap() = Some(req.clone());
            if self.fail_deletes.load(Ordering::SeqCst) {
                return Err(Self::boom());
            }
            Ok(self.delete_outcome())
        }
    }

    #[test]
    fn missing_fields_markers() {
        let mut missing = super::MissingFields::default();
        missing.set(vec!["Name", "Email"]);
        assert!(missing.contains("Name"));
        missing.clear_field("Name");
        assert!(!missing.contains("Name"));
        assert!(missing.contains("Email"));
        assert_eq!(missing.join(), "Email");
    }
}
