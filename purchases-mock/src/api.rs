//! Mock purchases API handlers
//!
//! Faithful to the backend's quirks: delete endpoints always answer 200 and
//! signal refusal through `RetString`, and the vendor list is wrapped in a
//! `data` envelope while the category list is a bare array.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use shared::client::{
    AddVendorCategoryRequest, AddVendorRequest, DeleteVendorCategoryRequest, DeleteVendorRequest,
    GetVendorCategoriesRequest, GetVendorsRequest, UpdateVendorCategoryRequest,
    UpdateVendorRequest,
};
use shared::models::{Vendor, VendorCategory};
use shared::response::DELETE_OK;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/purchases/GetVendorCategories", post(get_vendor_categories))
        .route("/purchases/AddVendorCategory", post(add_vendor_category))
        .route("/purchases/UpdateVendorCategory", post(update_vendor_category))
        .route("/purchases/DeleteVendorCategory", post(delete_vendor_category))
        .route("/purchases/GetVendorsList", post(get_vendors_list))
        .route("/purchases/AddVendor", post(add_vendor))
        .route("/purchases/UpdateVendor", post(update_vendor))
        .route("/purchases/DeleteVendor", post(delete_vendor))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn bad_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({ "message": message })),
    )
        .into_response()
}

fn not_found(message: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "message": message })),
    )
        .into_response()
}

fn sentinel(value: &str) -> Response {
    Json(serde_json::json!({ "RetString": value })).into_response()
}

// ============ Categories ============

async fn get_vendor_categories(
    State(state): State<Arc<AppState>>,
    Json(_req): Json<GetVendorCategoriesRequest>,
) -> Json<Vec<VendorCategory>> {
    Json(state.categories.lock().unwrap().clone())
}

async fn add_vendor_category(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AddVendorCategoryRequest>,
) -> Response {
    if req.category_name.trim().is_empty() {
        return bad_request("CategoryName is required");
    }

    let id = state.take_category_id();
    state.categories.lock().unwrap().push(VendorCategory {
        category_id: id,
        category_name: req.category_name,
        description: req.description,
        is_active: true,
    });
    tracing::info!(category_id = id, "category added");

    Json(serde_json::json!({ "CategoryID": id })).into_response()
}

async fn update_vendor_category(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UpdateVendorCategoryRequest>,
) -> Response {
    let Ok(id) = req.category_id.parse::<i64>() else {
        return bad_request("CategoryID must be numeric");
    };

    let mut categories = state.categories.lock().unwrap();
    match categories.iter_mut().find(|c| c.category_id == id) {
        Some(category) => {
            category.category_name = req.category_name;
            category.description = req.description;
            Json(serde_json::json!({ "CategoryID": id })).into_response()
        }
        None => not_found("category not found"),
    }
}

async fn delete_vendor_category(
    State(state): State<Arc<AppState>>,
    Json(req): Json<DeleteVendorCategoryRequest>,
) -> Response {
    let Ok(id) = req.category_id.parse::<i64>() else {
        return bad_request("CategoryID must be numeric");
    };

    let referenced = state
        .vendors
        .lock()
        .unwrap()
        .iter()
        .any(|v| v.category_id == req.category_id);
    if referenced {
        return sentinel("0");
    }

    let mut categories = state.categories.lock().unwrap();
    let before = categories.len();
    categories.retain(|c| c.category_id != id);
    if categories.len() == before {
        // The real backend answers the refusal sentinel for unknown ids too
        return sentinel("0");
    }

    sentinel(DELETE_OK)
}

// ============ Vendors ============

async fn get_vendors_list(
    State(state): State<Arc<AppState>>,
    Json(_req): Json<GetVendorsRequest>,
) -> Json<serde_json::Value> {
    let vendors = state.vendors.lock().unwrap().clone();
    Json(serde_json::json!({ "data": vendors }))
}

async fn add_vendor(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AddVendorRequest>,
) -> Response {
    if req.vendor_name.trim().is_empty() {
        return bad_request("VendorName is required");
    }

    let category_name = req
        .category_id
        .parse::<i64>()
        .ok()
        .and_then(|id| {
            state
                .categories
                .lock()
                .unwrap()
                .iter()
                .find(|c| c.category_id == id)
                .map(|c| c.category_name.clone())
        })
        .unwrap_or_default();

    let id = state.take_vendor_id();
    state.vendors.lock().unwrap().push(Vendor {
        vendor_id: id,
        name: req.vendor_name,
        category_id: req.category_id,
        vendor_category: category_name,
        contact_number: req.contact_number,
        email: req.email_id,
        contact_person: req.contact_person,
        address: req.address,
        notes: req.notes,
        status: Some(req.status),
    });
    tracing::info!(vendor_id = id, "vendor added");

    Json(serde_json::json!({ "VendorID": id })).into_response()
}

async fn update_vendor(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UpdateVendorRequest>,
) -> Response {
    let Ok(id) = req.vendor_id.parse::<i64>() else {
        return bad_request("VendorID must be numeric");
    };

    let category_name = req
        .category_id
        .parse::<i64>()
        .ok()
        .and_then(|cat_id| {
            state
                .categories
                .lock()
                .unwrap()
                .iter()
                .find(|c| c.category_id == cat_id)
                .map(|c| c.category_name.clone())
        })
        .unwrap_or_default();

    let mut vendors = state.vendors.lock().unwrap();
    match vendors.iter_mut().find(|v| v.vendor_id == id) {
        Some(vendor) => {
            vendor.name = req.vendor_name;
            vendor.category_id = req.category_id;
            vendor.vendor_category = category_name;
            vendor.contact_number = req.contact_number;
            vendor.email = req.email_id;
            vendor.contact_person = req.contact_person;
            vendor.address = req.address;
            vendor.notes = req.notes;
            vendor.status = Some(req.status);
            Json(serde_json::json!({ "VendorID": id })).into_response()
        }
        None => not_found("vendor not found"),
    }
}

async fn delete_vendor(
    State(state): State<Arc<AppState>>,
    Json(req): Json<DeleteVendorRequest>,
) -> Response {
    let Ok(id) = req.vendor_id.parse::<i64>() else {
        return bad_request("VendorID must be numeric");
    };

    if state.vendor_in_use(id) {
        return sentinel("0");
    }

    let mut vendors = state.vendors.lock().unwrap();
    let before = vendors.len();
    vendors.retain(|v| v.vendor_id != id);
    if vendors.len() == before {
        return sentinel("0");
    }

    sentinel(DELETE_OK)
}
