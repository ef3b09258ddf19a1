//! Add-vendor wizard
//!
//! Two steps, forward/back only: contact information first, then category
//! and status. One create request at the end; nothing is persisted between
//! sessions.

use shared::client::{AddVendorRequest, GetVendorCategoriesRequest};
use shared::models::{VendorCategory, VendorStatus};
use tracker_client::PurchasesApi;

use super::MissingFields;
use crate::routes::Route;
use crate::session::UserSession;

const MSG_MISSING_BUSINESS: &str = "Business ID missing. Cannot add vendor.";
const ERR_LOAD_CATEGORIES: &str = "Failed to load categories";

const FIELD_NAME: &str = "name";
const FIELD_CONTACT_NUMBER: &str = "contactNumber";
const FIELD_EMAIL: &str = "email";
const FIELD_CONTACT_PERSON: &str = "contactPerson";
const FIELD_ADDRESS: &str = "address";
const FIELD_CATEGORY_ID: &str = "categoryID";

/// Wizard steps; transitions go forward and back only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    ContactInfo,
    VendorDetails,
}

/// Step-1 contact fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    ContactPerson,
    Email,
    ContactNumber,
    Address,
}

impl ContactField {
    fn marker_name(self) -> &'static str {
        match self {
            Self::Name => FIELD_NAME,
            Self::ContactPerson => FIELD_CONTACT_PERSON,
            Self::Email => FIELD_EMAIL,
            Self::ContactNumber => FIELD_CONTACT_NUMBER,
            Self::Address => FIELD_ADDRESS,
        }
    }
}

/// Result of the Complete Registration action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// No category selected; marker set, no request sent
    Invalid,
    /// Session has no business identifier; blocked before any request
    MissingBusinessId,
    /// Vendor created; the shell navigates to the vendor list
    Completed,
    /// Create request failed; the wizard stays on the details step
    Failed { message: String },
}

impl RegistrationOutcome {
    /// Alert text, when the outcome carries one
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Invalid | Self::Completed => None,
            Self::MissingBusinessId => Some(MSG_MISSING_BUSINESS),
            Self::Failed { message } => Some(message),
        }
    }

    /// Where the shell should go next
    pub fn redirect(&self) -> Option<Route> {
        matches!(self, Self::Completed).then_some(Route::Vendors)
    }
}

/// Add-vendor wizard controller
#[derive(Debug, Default)]
pub struct AddVendorWizard {
    step: WizardStep,
    name: String,
    contact_person: String,
    email: String,
    contact_number: String,
    address: String,
    notes: String,
    category_id: String,
    status: VendorStatus,
    categories: Vec<VendorCategory>,
    category_filter: String,
    missing: MissingFields,
    error: Option<&'static str>,
}

impl AddVendorWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn missing_fields(&self) -> &MissingFields {
        &self.missing
    }

    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    /// Fetch the selectable categories; inactive ones are dropped here and
    /// never offered
    pub async fn load_categories(&mut self, api: &impl PurchasesApi, session: &UserSession) {
        let req = GetVendorCategoriesRequest {
            business_id: session.business_id_str().unwrap_or_default(),
        };
        match api.vendor_categories(&req).await {
            Ok(categories) => {
                self.categories = categories.into_iter().filter(|c| c.is_active).collect();
                self.error = None;
            }
            Err(err) => {
                tracing::error!(%err, "fetching categories failed");
                self.error = Some(ERR_LOAD_CATEGORIES);
            }
        }
    }

    /// Selectable (active) categories
    pub fn categories(&self) -> &[VendorCategory] {
        &self.categories
    }

    pub fn contact_value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::ContactPerson => &self.contact_person,
            ContactField::Email => &self.email,
            ContactField::ContactNumber => &self.contact_number,
            ContactField::Address => &self.address,
        }
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn status(&self) -> VendorStatus {
        self.status
    }

    pub fn category_id(&self) -> &str {
        &self.category_id
    }

    pub fn set_contact_field(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::ContactPerson => self.contact_person = value,
            ContactField::Email => self.email = value,
            ContactField::ContactNumber => self.contact_number = value,
            ContactField::Address => self.address = value,
        }
        self.missing.clear_field(field.marker_name());
    }

    pub fn set_notes(&mut self, value: impl Into<String>) {
        self.notes = value.into();
    }

    pub fn set_status(&mut self, status: VendorStatus) {
        self.status = status;
    }

    /// Type-ahead text for the category combo box
    pub fn set_category_filter(&mut self, text: impl Into<String>) {
        self.category_filter = text.into();
    }

    /// The dropdown shows only while the user is typing
    pub fn menu_open(&self) -> bool {
        !self.category_filter.is_empty()
    }

    /// Options matching the type-ahead text, case-insensitively
    pub fn filtered_options(&self) -> Vec<&VendorCategory> {
        let filter = self.category_filter.to_lowercase();
        self.categories
            .iter()
            .filter(|c| c.category_name.to_lowercase().contains(&filter))
            .collect()
    }

    /// Select a category by id, or clear the selection
    pub fn select_category(&mut self, category_id: Option<i64>) {
        match category_id {
            Some(id) => {
                self.category_id = id.to_string();
                self.missing.clear_field(FIELD_CATEGORY_ID);
            }
            None => self.category_id.clear(),
        }
    }

    /// Advance to the details step when every contact field is filled
    ///
    /// On failure the wizard stays put and the markers name exactly the
    /// empty fields. Repeating the call with valid fields is harmless.
    pub fn next(&mut self) {
        let mut missing = Vec::new();
        if self.name.is_empty() {
            missing.push(FIELD_NAME);
        }
        if self.contact_number.is_empty() {
            missing.push(FIELD_CONTACT_NUMBER);
        }
        if self.email.is_empty() {
            missing.push(FIELD_EMAIL);
        }
        if self.contact_person.is_empty() {
            missing.push(FIELD_CONTACT_PERSON);
        }
        if self.address.is_empty() {
            missing.push(FIELD_ADDRESS);
        }

        let valid = missing.is_empty();
        self.missing.set(missing);
        if valid {
            self.step = WizardStep::VendorDetails;
        }
    }

    /// Return to the contact step, keeping every entered value
    pub fn back(&mut self) {
        self.missing.clear();
        self.step = WizardStep::ContactInfo;
    }

    /// Complete Registration: one create request, then hand off to the
    /// vendor list
    pub async fn submit(
        &mut self,
        api: &impl PurchasesApi,
        session: &UserSession,
    ) -> RegistrationOutcome {
        if self.category_id.is_empty() {
            self.missing.set(vec![FIELD_CATEGORY_ID]);
            return RegistrationOutcome::Invalid;
        }
        self.missing.clear();

        let Some(business_id) = session.business_id_str() else {
            return RegistrationOutcome::MissingBusinessId;
        };

        let payload = AddVendorRequest {
            vendor_name: self.name.clone(),
            category_id: self.category_id.clone(),
            contact_number: self.contact_number.clone(),
            email_id: self.email.clone(),
            contact_person: self.contact_person.clone(),
            address: self.address.clone(),
            notes: self.notes.clone(),
            status: self.status,
            business_id,
        };

        match api.add_vendor(&payload).await {
            Ok(()) => RegistrationOutcome::Completed,
            Err(err) => {
                tracing::error!(%err, "adding vendor failed");
                RegistrationOutcome::Failed {
                    message: format!("Failed to add vendor: {err}"),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::testing::{
        RecordingApi, category, no_business_session, owner_session,
    };
    use std::sync::atomic::Ordering;

    fn filled_wizard() -> AddVendorWizard {
        let mut wizard = AddVendorWizard::new();
        wizard.set_contact_field(ContactField::Name, "Acme Pipes");
        wizard.set_contact_field(ContactField::ContactPerson, "Sam Doe");
        wizard.set_contact_field(ContactField::Email, "sam@acme.example");
        wizard.set_contact_field(ContactField::ContactNumber, "555-0100");
        wizard.set_contact_field(ContactField::Address, "1 Main St");
        wizard
    }

    #[tokio::test]
    async fn only_active_categories_are_offered() {
        let api = RecordingApi::new().with_categories(vec![
            category(1, "Plumbing", true),
            category(2, "Legal", false),
        ]);
        let mut wizard = AddVendorWizard::new();

        wizard.load_categories(&api, &owner_session()).await;

        let names: Vec<&str> = wizard
            .categories()
            .iter()
            .map(|c| c.category_name.as_str())
            .collect();
        assert_eq!(names, ["Plumbing"]);
    }

    #[tokio::test]
    async fn category_load_failure_sets_the_screen_error() {
        let api = RecordingApi::new();
        api.fail_categories.store(true, Ordering::SeqCst);
        let mut wizard = AddVendorWizard::new();

        wizard.load_categories(&api, &owner_session()).await;
        assert_eq!(wizard.error(), Some("Failed to load categories"));
        assert!(wizard.categories().is_empty());
    }

    #[test]
    fn next_names_exactly_the_empty_fields() {
        let mut wizard = AddVendorWizard::new();
        wizard.set_contact_field(ContactField::Name, "Acme Pipes");
        wizard.set_contact_field(ContactField::Email, "sam@acme.example");

        wizard.next();

        assert_eq!(wizard.step(), WizardStep::ContactInfo);
        assert_eq!(
            wizard.missing_fields().names(),
            ["contactNumber", "contactPerson", "address"]
        );
    }

    #[test]
    fn editing_a_field_clears_only_its_marker() {
        let mut wizard = AddVendorWizard::new();
        wizard.next();
        assert_eq!(wizard.missing_fields().names().len(), 5);

        wizard.set_contact_field(ContactField::Email, "sam@acme.example");
        assert!(!wizard.missing_fields().contains("email"));
        assert_eq!(wizard.missing_fields().names().len(), 4);
    }

    #[test]
    fn next_is_idempotent_and_preserves_values() {
        let mut wizard = filled_wizard();

        wizard.next();
        assert_eq!(wizard.step(), WizardStep::VendorDetails);
        wizard.next();
        assert_eq!(wizard.step(), WizardStep::VendorDetails);
        assert_eq!(wizard.contact_value(ContactField::Name), "Acme Pipes");
        assert!(wizard.missing_fields().is_empty());
    }

    #[test]
    fn back_clears_markers_and_keeps_values() {
        let mut wizard = filled_wizard();
        wizard.next();
        wizard.select_category(None);
        wizard.set_notes("rush orders only");

        wizard.back();

        assert_eq!(wizard.step(), WizardStep::ContactInfo);
        assert!(wizard.missing_fields().is_empty());
        assert_eq!(wizard.contact_value(ContactField::Address), "1 Main St");
        assert_eq!(wizard.notes(), "rush orders only");
    }

    #[tokio::test]
    async fn type_ahead_filters_options_and_gates_the_menu() {
        let api = RecordingApi::new().with_categories(vec![
            category(1, "Plumbing", true),
            category(2, "Plant Hire", true),
            category(3, "Legal", true),
        ]);
        let mut wizard = AddVendorWizard::new();
        wizard.load_categories(&api, &owner_session()).await;

        assert!(!wizard.menu_open());
        wizard.set_category_filter("pl");
        assert!(wizard.menu_open());

        let names: Vec<&str> = wizard
            .filtered_options()
            .iter()
            .map(|c| c.category_name.as_str())
            .collect();
        assert_eq!(names, ["Plumbing", "Plant Hire"]);
    }

    #[tokio::test]
    async fn submit_without_category_sends_nothing() {
        let api = RecordingApi::new();
        let mut wizard = filled_wizard();
        wizard.next();

        let outcome = wizard.submit(&api, &owner_session()).await;

        assert_eq!(outcome, RegistrationOutcome::Invalid);
        assert_eq!(wizard.missing_fields().names(), ["categoryID"]);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn selecting_a_category_clears_its_marker() {
        let api = RecordingApi::new();
        let mut wizard = filled_wizard();
        wizard.next();
        wizard.submit(&api, &owner_session()).await;
        assert!(wizard.missing_fields().contains("categoryID"));

        wizard.select_category(Some(3));
        assert!(wizard.missing_fields().is_empty());
        assert_eq!(wizard.category_id(), "3");
    }

    #[tokio::test]
    async fn missing_business_id_blocks_with_an_alert() {
        let api = RecordingApi::new();
        let mut wizard = filled_wizard();
        wizard.next();
        wizard.select_category(Some(3));

        let outcome = wizard.submit(&api, &no_business_session()).await;

        assert_eq!(outcome, RegistrationOutcome::MissingBusinessId);
        assert_eq!(
            outcome.message(),
            Some("Business ID missing. Cannot add vendor.")
        );
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn completed_registration_redirects_to_the_vendor_list() {
        let api = RecordingApi::new();
        let mut wizard = filled_wizard();
        wizard.next();
        wizard.select_category(Some(3));
        wizard.set_status(VendorStatus::Inactive);

        let outcome = wizard.submit(&api, &owner_session()).await;

        assert_eq!(outcome, RegistrationOutcome::Completed);
        assert_eq!(outcome.redirect(), Some(Route::Vendors));

        let req = api.last_add_vendor.lock().unwrap().clone().unwrap();
        assert_eq!(req.vendor_name, "Acme Pipes");
        assert_eq!(req.category_id, "3");
        assert_eq!(req.email_id, "sam@acme.example");
        assert_eq!(req.status, VendorStatus::Inactive);
        assert_eq!(req.business_id, "42");
        assert_eq!(req.notes, "");
    }

    #[tokio::test]
    async fn failed_registration_stays_on_the_details_step() {
        let api = RecordingApi::new();
        api.fail_mutations.store(true, Ordering::SeqCst);
        let mut wizard = filled_wizard();
        wizard.next();
        wizard.select_category(Some(3));

        let outcome = wizard.submit(&api, &owner_session()).await;

        match &outcome {
            RegistrationOutcome::Failed { message } => {
                assert!(message.starts_with("Failed to add vendor: "));
            }
            other => panic!("expected Failed, got {other:?}"),
        }
        assert_eq!(outcome.redirect(), None);
        assert_eq!(wizard.step(), WizardStep::VendorDetails);
        assert_eq!(wizard.contact_value(ContactField::Name), "Acme Pipes");
    }
}
