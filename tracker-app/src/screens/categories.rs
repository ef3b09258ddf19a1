//! Category management screen
//!
//! Add and edit share one dialog; `selected_category_id` discriminates the
//! two modes. Successful saves refetch the whole list, successful deletes
//! prune it in place.

use shared::client::{
    AddVendorCategoryRequest, DeleteVendorCategoryRequest, GetVendorCategoriesRequest,
    UpdateVendorCategoryRequest,
};
use shared::models::VendorCategory;
use shared::response::DeleteOutcome;
use tracker_client::PurchasesApi;

use super::{Confirmation, MissingFields};
use crate::session::UserSession;

pub const FIELD_CATEGORY_NAME: &str = "CategoryName";

const MSG_ADDED: &str = "Category added successfully";
const MSG_UPDATED: &str = "Category updated successfully";
const MSG_DELETED: &str = "Category deleted successfully.";
const MSG_IN_USE: &str = "Category is already in use. You can't delete it.";
const ERR_SAVE: &str = "Failed to save vendor category.";
const ERR_FETCH: &str = "Failed to fetch vendor categories.";
const ERR_DELETE: &str = "Failed to delete category due to a server error.";

/// Result of loading the category list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoriesLoadOutcome {
    Loaded,
    /// Session has no business identifier yet; the fetch was deferred
    NotReady,
    Failed,
}

impl CategoriesLoadOutcome {
    pub fn message(self) -> Option<&'static str> {
        matches!(self, Self::Failed).then_some(ERR_FETCH)
    }
}

/// Result of submitting the add/edit dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategorySaveOutcome {
    /// No dialog open; nothing happened
    NotOpen,
    /// Required fields missing; markers set, no request sent
    Invalid,
    Saved { message: &'static str },
    Failed,
}

impl CategorySaveOutcome {
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Saved { message } => Some(message),
            Self::Failed => Some(ERR_SAVE),
            Self::NotOpen | Self::Invalid => None,
        }
    }
}

/// Result of a delete attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryDeleteOutcome {
    Cancelled,
    Deleted,
    /// Soft refusal: the category is referenced by vendors
    InUse,
    Failed,
}

impl CategoryDeleteOutcome {
    pub fn message(self) -> Option<&'static str> {
        match self {
            Self::Cancelled => None,
            Self::Deleted => Some(MSG_DELETED),
            Self::InUse => Some(MSG_IN_USE),
            Self::Failed => Some(ERR_DELETE),
        }
    }
}

/// Add/edit dialog draft
#[derive(Debug, Clone, Default)]
pub struct CategoryDialog {
    category_name: String,
    description: String,
    selected_category_id: Option<i64>,
    missing: MissingFields,
}

impl CategoryDialog {
    pub fn category_name(&self) -> &str {
        &self.category_name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_edit_mode(&self) -> bool {
        self.selected_category_id.is_some()
    }

    pub fn missing_fields(&self) -> &MissingFields {
        &self.missing
    }
}

/// Category management screen controller
#[derive(Debug, Default)]
pub struct CategoriesScreen {
    categories: Vec<VendorCategory>,
    dialog: Option<CategoryDialog>,
}

impl CategoriesScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetched list in server order
    pub fn categories(&self) -> &[VendorCategory] {
        &self.categories
    }

    /// Display order: newest first, independent of server ordering
    pub fn sorted_categories(&self) -> Vec<&VendorCategory> {
        let mut sorted: Vec<&VendorCategory> = self.categories.iter().collect();
        sorted.sort_by(|a, b| b.category_id.cmp(&a.category_id));
        sorted
    }

    pub fn dialog(&self) -> Option<&CategoryDialog> {
        self.dialog.as_ref()
    }

    /// Fetch the category list for the session's business
    pub async fn load(
        &mut self,
        api: &impl PurchasesApi,
        session: &UserSession,
    ) -> CategoriesLoadOutcome {
        if session.business_id().is_none() {
            return CategoriesLoadOutcome::NotReady;
        }

        match self.fetch(api, session).await {
            Ok(list) => {
                self.categories = list;
                CategoriesLoadOutcome::Loaded
            }
            Err(err) => {
                tracing::error!(%err, "fetching vendor categories failed");
                CategoriesLoadOutcome::Failed
            }
        }
    }

    pub fn open_add(&mut self) {
        self.dialog = Some(CategoryDialog::default());
    }

    pub fn open_edit(&mut self, category: &VendorCategory) {
        self.dialog = Some(CategoryDialog {
            category_name: category.category_name.clone(),
            description: category.description.clone(),
            selected_category_id: Some(category.category_id),
            missing: MissingFields::default(),
        });
    }

    /// Discard the draft and its markers
    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }

    pub fn set_category_name(&mut self, value: impl Into<String>) {
        if let Some(dialog) = self.dialog.as_mut() {
            dialog.category_name = value.into();
            dialog.missing.clear_field(FIELD_CATEGORY_NAME);
        }
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        if let Some(dialog) = self.dialog.as_mut() {
            dialog.description = value.into();
        }
    }

    /// Submit the dialog: add in add mode, update in edit mode
    ///
    /// On success the dialog closes and the list is refetched in full; on
    /// failure the dialog (and the user's input) stays put.
    pub async fn submit(
        &mut self,
        api: &impl PurchasesApi,
        session: &UserSession,
    ) -> CategorySaveOutcome {
        let (category_name, description, selected_id) = {
            let Some(dialog) = self.dialog.as_mut() else {
                return CategorySaveOutcome::NotOpen;
            };

            let name = dialog.category_name.trim().to_string();
            if name.is_empty() {
                dialog.missing.set(vec![FIELD_CATEGORY_NAME]);
                return CategorySaveOutcome::Invalid;
            }
            dialog.missing.clear();

            (
                name,
                dialog.description.trim().to_string(),
                dialog.selected_category_id,
            )
        };

        let business_id = session.business_id_str().unwrap_or_default();
        let result = match selected_id {
            Some(id) => api
                .update_vendor_category(&UpdateVendorCategoryRequest {
                    category_name,
                    description,
                    business_id,
                    category_id: id.to_string(),
                })
                .await
                .map(|()| MSG_UPDATED),
            None => api
                .add_vendor_category(&AddVendorCategoryRequest {
                    category_name,
                    description,
                    business_id,
                })
                .await
                .map(|()| MSG_ADDED),
        };

        match result {
            Ok(message) => {
                self.close_dialog();
                self.refetch(api, session).await;
                CategorySaveOutcome::Saved { message }
            }
            Err(err) => {
                tracing::error!(%err, "saving vendor category failed");
                CategorySaveOutcome::Failed
            }
        }
    }

    /// Delete a category after interactive confirmation
    ///
    /// The sentinel decides: deleted categories are pruned from the local
    /// list without a refetch, refusals leave it untouched.
    pub async fn delete(
        &mut self,
        api: &impl PurchasesApi,
        category_id: i64,
        confirmation: Confirmation,
    ) -> CategoryDeleteOutcome {
        if confirmation == Confirmation::Cancelled {
            return CategoryDeleteOutcome::Cancelled;
        }

        let req = DeleteVendorCategoryRequest {
            category_id: category_id.to_string(),
        };
        match api.delete_vendor_category(&req).await {
            Ok(DeleteOutcome::Deleted) => {
                self.categories.retain(|c| c.category_id != category_id);
                CategoryDeleteOutcome::Deleted
            }
            Ok(DeleteOutcome::Refused) => CategoryDeleteOutcome::InUse,
            Err(err) => {
                tracing::error!(%err, "deleting vendor category failed");
                CategoryDeleteOutcome::Failed
            }
        }
    }

    async fn fetch(
        &self,
        api: &impl PurchasesApi,
        session: &UserSession,
    ) -> tracker_client::ClientResult<Vec<VendorCategory>> {
        let req = GetVendorCategoriesRequest {
            business_id: session.business_id_str().unwrap_or_default(),
        };
        api.vendor_categories(&req).await
    }

    async fn refetch(&mut self, api: &impl PurchasesApi, session: &UserSession) {
        match self.fetch(api, session).await {
            Ok(list) => self.categories = list,
            Err(err) => {
                tracing::warn!(%err, "category refetch failed; keeping previous list");
            }
        }
    }
}
