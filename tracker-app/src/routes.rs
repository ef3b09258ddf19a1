//! Application routes

use std::fmt;

/// Routes exposed by the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Vendors,
    AddVendor,
    VendorCategories,
    NotFound,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "/",
            Self::Vendors => "/vendors",
            Self::AddVendor => "/add-vendor",
            Self::VendorCategories => "/vendor-categories",
            Self::NotFound => "/not-found",
        }
    }

    /// Resolve a path; anything unknown lands on the catch-all
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" => Self::Dashboard,
            "/vendors" => Self::Vendors,
            "/add-vendor" => Self::AddVendor,
            "/vendor-categories" => Self::VendorCategories,
            _ => Self::NotFound,
        }
    }

    /// Link target, carrying the account along when one is known
    pub fn href(self, account_id: Option<i64>) -> String {
        match account_id {
            Some(id) => format!("{}?account_id={id}", self.path()),
            None => self.path().to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
