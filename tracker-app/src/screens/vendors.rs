//! Vendor list screen
//!
//! List with client-side search, an edit dialog, and sentinel-guarded
//! deletes. Edits refetch the list in full; deletes prune it in place.

use shared::client::{
    DeleteVendorRequest, GetVendorCategoriesRequest, GetVendorsRequest, UpdateVendorRequest,
};
use shared::models::{Vendor, VendorCategory, VendorStatus};
use shared::response::DeleteOutcome;
use tracker_client::PurchasesApi;

use super::{Confirmation, MissingFields};
use crate::session::UserSession;

const MSG_UPDATED: &str = "Vendor updated successfully.";
const MSG_DELETED: &str = "Vendor deleted successfully.";
const MSG_IN_USE: &str = "Vendor is already in use. You can't delete it.";
const ERR_DELETE: &str = "Failed to delete vendor due to a server error.";

/// Editable vendor fields, named by their wire form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VendorField {
    Name,
    CategoryId,
    ContactNumber,
    Email,
    ContactPerson,
    Address,
    Notes,
}

impl VendorField {
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::CategoryId => "CategoryID",
            Self::ContactNumber => "ContactNumber",
            Self::Email => "Email",
            Self::ContactPerson => "ContactPerson",
            Self::Address => "Address",
            Self::Notes => "Notes",
        }
    }
}

/// Required fields of the edit dialog, in validation order
const REQUIRED_EDIT_FIELDS: [VendorField; 6] = [
    VendorField::Name,
    VendorField::CategoryId,
    VendorField::ContactNumber,
    VendorField::Email,
    VendorField::ContactPerson,
    VendorField::Address,
];

/// Result of loading the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VendorsLoadOutcome {
    Loaded,
    /// Session has no business identifier yet; both fetches were deferred
    NotReady,
    /// The vendor fetch failed; `VendorsScreen::error` carries the message
    Failed,
}

/// Result of submitting the edit dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VendorUpdateOutcome {
    /// No dialog open or no business identifier; nothing happened
    NotReady,
    /// Required fields missing; the alert lists them, the dialog stays open
    Invalid { message: String },
    Updated,
    Failed { message: String },
}

impl VendorUpdateOutcome {
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::NotReady => None,
            Self::Invalid { message } | Self::Failed { message } => Some(message),
            Self::Updated => Some(MSG_UPDATED),
        }
    }
}

/// Result of a delete attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VendorDeleteOutcome {
    Cancelled,
    Deleted,
    /// Soft refusal: the vendor is referenced by other records
    InUse,
    Failed,
}

impl VendorDeleteOutcome {
    pub fn message(self) -> Option<&'static str> {
        match self {
            Self::Cancelled => None,
            Self::Deleted => Some(MSG_DELETED),
            Self::InUse => Some(MSG_IN_USE),
            Self::Failed => Some(ERR_DELETE),
        }
    }
}

/// Edit dialog draft, a full working copy of one vendor
#[derive(Debug, Clone)]
pub struct EditVendorDialog {
    vendor_id: i64,
    name: String,
    category_id: String,
    contact_number: String,
    email: String,
    contact_person: String,
    address: String,
    notes: String,
    status: VendorStatus,
    missing: MissingFields,
}

impl EditVendorDialog {
    pub fn vendor_id(&self) -> i64 {
        self.vendor_id
    }

    pub fn value(&self, field: VendorField) -> &str {
        match field {
            VendorField::Name => &self.name,
            VendorField::CategoryId => &self.category_id,
            VendorField::ContactNumber => &self.contact_number,
            VendorField::Email => &self.email,
            VendorField::ContactPerson => &self.contact_person,
            VendorField::Address => &self.address,
            VendorField::Notes => &self.notes,
        }
    }

    pub fn status(&self) -> VendorStatus {
        self.status
    }

    pub fn missing_fields(&self) -> &MissingFields {
        &self.missing
    }

    fn slot_mut(&mut self, field: VendorField) -> &mut String {
        match field {
            VendorField::Name => &mut self.name,
            VendorField::CategoryId => &mut self.category_id,
            VendorField::ContactNumber => &mut self.contact_number,
            VendorField::Email => &mut self.email,
            VendorField::ContactPerson => &mut self.contact_person,
            VendorField::Address => &mut self.address,
            VendorField::Notes => &mut self.notes,
        }
    }
}

/// Vendor list screen controller
#[derive(Debug, Default)]
pub struct VendorsScreen {
    vendors: Vec<Vendor>,
    categories: Vec<VendorCategory>,
    search_query: String,
    error: Option<String>,
    editing: Option<EditVendorDialog>,
}

impl VendorsScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vendors(&self) -> &[Vendor] {
        &self.vendors
    }

    pub fn categories(&self) -> &[VendorCategory] {
        &self.categories
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn editing(&self) -> Option<&EditVendorDialog> {
        self.editing.as_ref()
    }

    /// Fetch vendors and categories concurrently
    ///
    /// A vendor failure halts the list with a screen error; a category
    /// failure is only logged — vendors still render, the category list
    /// stays empty.
    pub async fn load(
        &mut self,
        api: &impl PurchasesApi,
        session: &UserSession,
    ) -> VendorsLoadOutcome {
        let Some(business_id) = session.business_id_str() else {
            return VendorsLoadOutcome::NotReady;
        };

        let vendors_req = GetVendorsRequest::for_business(business_id.clone());
        let categories_req = GetVendorCategoriesRequest { business_id };
        let (vendors_res, categories_res) = tokio::join!(
            api.vendors_list(&vendors_req),
            api.vendor_categories(&categories_req)
        );

        match categories_res {
            Ok(list) => self.categories = list,
            Err(err) => {
                tracing::warn!(%err, "fetching categories failed; edit dialogs will lack options");
                self.categories.clear();
            }
        }

        match vendors_res {
            Ok(list) => {
                self.vendors = list;
                self.error = None;
                VendorsLoadOutcome::Loaded
            }
            Err(err) => {
                tracing::error!(%err, "fetching vendors failed");
                self.error = Some(err.to_string());
                VendorsLoadOutcome::Failed
            }
        }
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Case-insensitive substring filter across name, category name,
    /// contact person and email; a vendor matches if any field does
    pub fn filtered_vendors(&self) -> Vec<&Vendor> {
        let query = self.search_query.to_lowercase();
        self.vendors
            .iter()
            .filter(|v| {
                [&v.name, &v.vendor_category, &v.contact_person, &v.email]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&query))
            })
            .collect()
    }

    /// Category name for a string-encoded id, used as the edit dialog's
    /// current selection label
    pub fn category_name_by_id(&self, category_id: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| c.category_id.to_string() == category_id)
            .map(|c| c.category_name.as_str())
    }

    /// Open the edit dialog pre-populated from a listed vendor
    ///
    /// The category selection is resolved by matching the vendor's
    /// denormalized category name against the loaded list; when no name
    /// matches, the vendor's raw `CategoryID` is kept as-is.
    pub fn open_edit(&mut self, vendor_id: i64) {
        let Some(vendor) = self.vendors.iter().find(|v| v.vendor_id == vendor_id) else {
            return;
        };

        let category_id = self
            .categories
            .iter()
            .find(|c| c.category_name == vendor.vendor_category)
            .map(|c| c.category_id.to_string())
            .unwrap_or_else(|| vendor.category_id.clone());

        self.editing = Some(EditVendorDialog {
            vendor_id: vendor.vendor_id,
            name: vendor.name.clone(),
            category_id,
            contact_number: vendor.contact_number.clone(),
            email: vendor.email.clone(),
            contact_person: vendor.contact_person.clone(),
            address: vendor.address.clone(),
            notes: vendor.notes.clone(),
            status: vendor.status.unwrap_or_default(),
            missing: MissingFields::default(),
        });
    }

    /// Discard the draft and its markers
    pub fn close_edit(&mut self) {
        self.editing = None;
    }

    pub fn set_edit_field(&mut self, field: VendorField, value: impl Into<String>) {
        if let Some(dialog) = self.editing.as_mut() {
            *dialog.slot_mut(field) = value.into();
            dialog.missing.clear_field(field.wire_name());
        }
    }

    pub fn set_edit_status(&mut self, status: VendorStatus) {
        if let Some(dialog) = self.editing.as_mut() {
            dialog.status = status;
        }
    }

    /// Submit the edit dialog as a full-replace update
    ///
    /// On success the dialog closes and the vendor list is refetched in
    /// full; on failure the dialog stays open and local state is left
    /// untouched.
    pub async fn submit_edit(
        &mut self,
        api: &impl PurchasesApi,
        session: &UserSession,
    ) -> VendorUpdateOutcome {
        let Some(business_id) = session.business_id_str() else {
            return VendorUpdateOutcome::NotReady;
        };

        let payload = {
            let Some(dialog) = self.editing.as_mut() else {
                return VendorUpdateOutcome::NotReady;
            };

            let missing: Vec<&'static str> = REQUIRED_EDIT_FIELDS
                .iter()
                .filter(|field| dialog.value(**field).is_empty())
                .map(|field| field.wire_name())
                .collect();
            dialog.missing.set(missing.clone());

            if !missing.is_empty() {
                return VendorUpdateOutcome::Invalid {
                    message: format!(
                        "Please fill all required fields: {}",
                        missing.join(", ")
                    ),
                };
            }

            UpdateVendorRequest {
                vendor_id: dialog.vendor_id.to_string(),
                vendor_name: dialog.name.clone(),
                category_id: dialog.category_id.clone(),
                contact_number: dialog.contact_number.clone(),
                email_id: dialog.email.clone(),
                contact_person: dialog.contact_person.clone(),
                address: dialog.address.clone(),
                notes: dialog.notes.clone(),
                business_id,
                status: dialog.status,
            }
        };

        match api.update_vendor(&payload).await {
            Ok(()) => {
                self.close_edit();
                self.refetch_vendors(api, session).await;
                VendorUpdateOutcome::Updated
            }
            Err(err) => {
                tracing::error!(%err, "updating vendor failed");
                VendorUpdateOutcome::Failed {
                    message: format!("Error updating vendor: {err}"),
                }
            }
        }
    }

    /// Delete a vendor after interactive confirmation
    ///
    /// The sentinel decides: deleted vendors are pruned from the local
    /// list without a refetch, refusals leave it untouched.
    pub async fn delete(
        &mut self,
        api: &impl PurchasesApi,
        vendor_id: i64,
        confirmation: Confirmation,
    ) -> VendorDeleteOutcome {
        if confirmation == Confirmation::Cancelled {
            return VendorDeleteOutcome::Cancelled;
        }

        let req = DeleteVendorRequest {
            vendor_id: vendor_id.to_string(),
        };
        match api.delete_vendor(&req).await {
            Ok(DeleteOutcome::Deleted) => {
                self.vendors.retain(|v| v.vendor_id != vendor_id);
                VendorDeleteOutcome::Deleted
            }
            Ok(DeleteOutcome::Refused) => VendorDeleteOutcome::InUse,
            Err(err) => {
                tracing::error!(%err, "deleting vendor failed");
                VendorDeleteOutcome::Failed
            }
        }
    }

    async fn refetch_vendors(&mut self, api: &impl PurchasesApi, session: &UserSession) {
        let req = GetVendorsRequest::for_business(session.business_id_str().unwrap_or_default());
        match api.vendors_list(&req).await {
            Ok(list) => {
                self.vendors = list;
                self.error = None;
            }
            Err(err) => {
                tracing::error!(%err, "vendor refetch failed");
                self.error = Some(err.to_string());
            }
        }
    }
}
