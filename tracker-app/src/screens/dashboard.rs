//! Dashboard summary
//!
//! Two counters fetched in one all-or-nothing join. Owners see the whole
//! business; limited members see vendor counts scoped to their own
//! team-member identity.

use thiserror::Error;

use shared::client::{GetVendorCategoriesRequest, GetVendorsRequest};
use tracker_client::PurchasesApi;

use crate::session::UserSession;

/// Vendor/category totals shown on the dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardSummary {
    pub total_vendors: usize,
    pub total_categories: usize,
}

/// Dashboard load failure, worded for direct display
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DashboardError {
    /// No business identifier in the session; nothing was requested
    #[error("Invalid BusinessID")]
    MissingBusinessId,
    /// Either leg of the join failed; no partial counts are shown
    #[error("Failed to load data")]
    LoadFailed,
}

/// Fetch both lists concurrently and count them
pub async fn load_summary(
    api: &impl PurchasesApi,
    session: &UserSession,
) -> Result<DashboardSummary, DashboardError> {
    let Some(business_id) = session.business_id_str() else {
        return Err(DashboardError::MissingBusinessId);
    };

    let vendors_req = GetVendorsRequest {
        business_id: business_id.clone(),
        team_contact_id: if session.is_owner() {
            None
        } else {
            session.team_contact_id_str()
        },
    };
    let categories_req = GetVendorCategoriesRequest {
        business_id,
    };

    match tokio::try_join!(
        api.vendors_list(&vendors_req),
        api.vendor_categories(&categories_req)
    ) {
        Ok((vendors, categories)) => Ok(DashboardSummary {
            total_vendors: vendors.len(),
            total_categories: categories.len(),
        }),
        Err(err) => {
            tracing::error!(%err, "dashboard fetch failed");
            Err(DashboardError::LoadFailed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::testing::{
        RecordingApi, category, member_session, no_business_session, owner_session, vendor,
    };
    use std::sync::atomic::Ordering;

    fn five_vendors_two_categories() -> RecordingApi {
        RecordingApi::new()
            .with_vendors(
                (1..=5)
                    .map(|id| vendor(id, &format!("Vendor {id}"), "Plumbing"))
                    .collect(),
            )
            .with_categories(vec![
                category(1, "Plumbing", true),
                category(2, "Legal", true),
            ])
    }

    #[tokio::test]
    async fn owner_counts_both_lists() {
        let api = five_vendors_two_categories();
        let summary = load_summary(&api, &owner_session()).await.unwrap();

        assert_eq!(summary.total_vendors, 5);
        assert_eq!(summary.total_categories, 2);
        // Owners are not scoped to a team contact
        let req = api.last_vendors_req.lock().unwrap().clone().unwrap();
        assert!(req.team_contact_id.is_none());
    }

    #[tokio::test]
    async fn member_scopes_vendor_query_by_team_contact() {
        let api = five_vendors_two_categories();
        load_summary(&api, &member_session()).await.unwrap();

        let req = api.last_vendors_req.lock().unwrap().clone().unwrap();
        assert_eq!(req.team_contact_id.as_deref(), Some("9"));
    }

    #[tokio::test]
    async fn missing_business_id_blocks_before_any_request() {
        let api = five_vendors_two_categories();
        let err = load_summary(&api, &no_business_session()).await.unwrap_err();

        assert_eq!(err, DashboardError::MissingBusinessId);
        assert_eq!(err.to_string(), "Invalid BusinessID");
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn either_leg_failing_fails_the_whole_join() {
        let api = five_vendors_two_categories();
        api.fail_categories.store(true, Ordering::SeqCst);

        let err = load_summary(&api, &owner_session()).await.unwrap_err();
        assert_eq!(err, DashboardError::LoadFailed);
        assert_eq!(err.to_string(), "Failed to load data");
    }
}
