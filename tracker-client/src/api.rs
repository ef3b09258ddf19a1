//! Typed purchases API
//!
//! `PurchasesApi` is the seam between the screens and the transport: the
//! screens depend on the trait, the network implementation lives on
//! [`HttpClient`], and tests substitute an in-memory double.

use async_trait::async_trait;

use crate::{ClientResult, HttpClient};
use shared::client::{
    AddVendorCategoryRequest, AddVendorRequest, DeleteVendorCategoryRequest, DeleteVendorRequest,
    GetVendorCategoriesRequest, GetVendorsRequest, UpdateVendorCategoryRequest,
    UpdateVendorRequest,
};
use shared::models::{Vendor, VendorCategory};
use shared::response::{DeleteOutcome, DeleteResponse, ListEnvelope};

/// Remote purchases API surface
///
/// One method per backend operation; no retries, no batching. List
/// responses are normalized from their polymorphic envelopes before they
/// leave this layer, and delete sentinels are decoded into
/// [`DeleteOutcome`].
#[async_trait]
pub trait PurchasesApi: Send + Sync {
    async fn vendor_categories(
        &self,
        req: &GetVendorCategoriesRequest,
    ) -> ClientResult<Vec<VendorCategory>>;

    async fn add_vendor_category(&self, req: &AddVendorCategoryRequest) -> ClientResult<()>;

    async fn update_vendor_category(&self, req: &UpdateVendorCategoryRequest) -> ClientResult<()>;

    async fn delete_vendor_category(
        &self,
        req: &DeleteVendorCategoryRequest,
    ) -> ClientResult<DeleteOutcome>;

    async fn vendors_list(&self, req: &GetVendorsRequest) -> ClientResult<Vec<Vendor>>;

    async fn add_vendor(&self, req: &AddVendorRequest) -> ClientResult<()>;

    async fn update_vendor(&self, req: &UpdateVendorRequest) -> ClientResult<()>;

    async fn delete_vendor(&self, req: &DeleteVendorRequest) -> ClientResult<DeleteOutcome>;
}

#[async_trait]
impl PurchasesApi for HttpClient {
    async fn vendor_categories(
        &self,
        req: &GetVendorCategoriesRequest,
    ) -> ClientResult<Vec<VendorCategory>> {
        let envelope: ListEnvelope<VendorCategory> =
            self.post("purchases/GetVendorCategories", req).await?;
        Ok(envelope.into_items())
    }

    async fn add_vendor_category(&self, req: &AddVendorCategoryRequest) -> ClientResult<()> {
        self.post_unit("purchases/AddVendorCategory", req).await
    }

    async fn update_vendor_category(&self, req: &UpdateVendorCategoryRequest) -> ClientResult<()> {
        self.post_unit("purchases/UpdateVendorCategory", req).await
    }

    async fn delete_vendor_category(
        &self,
        req: &DeleteVendorCategoryRequest,
    ) -> ClientResult<DeleteOutcome> {
        let response: DeleteResponse = self.post("purchases/DeleteVendorCategory", req).await?;
        Ok(response.outcome())
    }

    async fn vendors_list(&self, req: &GetVendorsRequest) -> ClientResult<Vec<Vendor>> {
        let envelope: ListEnvelope<Vendor> = self.post("purchases/GetVendorsList", req).await?;
        Ok(envelope.into_items())
    }

    async fn add_vendor(&self, req: &AddVendorRequest) -> ClientResult<()> {
        self.post_unit("purchases/AddVendor", req).await
    }

    async fn update_vendor(&self, req: &UpdateVendorRequest) -> ClientResult<()> {
        self.post_unit("purchases/UpdateVendor", req).await
    }

    async fn delete_vendor(&self, req: &DeleteVendorRequest) -> ClientResult<DeleteOutcome> {
        let response: DeleteResponse = self.post("purchases/DeleteVendor", req).await?;
        Ok(response.outcome())
    }
}
