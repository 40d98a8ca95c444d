//! Storefront routes.
//!
//! Flows never navigate themselves; they return the [`Route`] the caller
//! should move to next.

use std::fmt;

use crate::ids::VehicleId;

#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    /// Catalog root.
    Catalog,
    VehicleDetail(VehicleId),
    Login,
    Register,
    AdminLogin,
    AdminDashboard,
    /// Booking summary.
    Summary,
    /// Payment page carrying the amount to charge.
    Payment { amount: f64 },
}

impl Route {
    pub fn to_path(&self) -> String {
        match self {
            Route::Catalog => "/".to_string(),
            Route::VehicleDetail(id) => format!("/car/detail/{}", id),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::AdminLogin => "/admin".to_string(),
            Route::AdminDashboard => "/admin/dashboard".to_string(),
            Route::Summary => "/booksummary".to_string(),
            Route::Payment { amount } => format!("/payment?amount={}", amount),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}

/// Look up a query parameter. A leading `?` is tolerated.
pub fn query_param<'a>(query: &'a str, name: &str) -> Option<&'a str> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Catalog.to_path(), "/");
        assert_eq!(Route::Summary.to_path(), "/booksummary");
        assert_eq!(
            Route::VehicleDetail(VehicleId::new("V1")).to_path(),
            "/car/detail/V1"
        );
        assert_eq!(
            Route::Payment { amount: 500000.0 }.to_path(),
            "/payment?amount=500000"
        );
        assert_eq!(
            Route::Payment { amount: 1234.5 }.to_path(),
            "/payment?amount=1234.5"
        );
    }

    #[test]
    fn test_query_param() {
        assert_eq!(query_param("?amount=10&x=1", "amount"), Some("10"));
        assert_eq!(query_param("x=1&amount=", "amount"), Some(""));
        assert_eq!(query_param("x=1", "amount"), None);
    }
}
