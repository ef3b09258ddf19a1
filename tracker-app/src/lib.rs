//! Purchase Tracker screens
//!
//! The application layer over [`tracker_client`]: one controller per
//! screen (dashboard, vendor list, add-vendor wizard, category
//! management), the session context they all read, and the route table.
//!
//! Controllers own their screen's fetched data and form drafts and return
//! outcome values; rendering and the blocking alert/confirm dialogs those
//! outcomes describe belong to the presentation shell. Fetch futures are
//! owned by the caller, so dropping a screen mid-flight abandons its
//! requests instead of letting a late response touch dead state.

pub mod routes;
pub mod screens;
pub mod session;

pub use routes::Route;
pub use screens::{
    AddVendorWizard, CategoriesScreen, Confirmation, DashboardSummary, MissingFields,
    VendorsScreen, WizardStep,
};
pub use session::{Role, UserSession};
