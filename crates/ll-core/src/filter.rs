//! # Dashboard Filtering
//!
//! The admin dashboard narrows the request list with a fixed set of labels:
//! `All`, every catalog category, and `Unlisted`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::models::{ServiceRequest, UNLISTED_SERVICE_TYPE};

/// Sentinel label that disables filtering.
pub const ALL_FILTER: &str = "All";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ServiceFilter {
    #[default]
    All,
    /// Exact, case-sensitive match on `service_type`.
    ServiceType(String),
}

impl ServiceFilter {
    pub fn from_label(label: &str) -> Self {
        if label == ALL_FILTER {
            Self::All
        } else {
            Self::ServiceType(label.to_string())
        }
    }

    pub fn matches(&self, request: &ServiceRequest) -> bool {
        match self {
            Self::All => true,
            Self::ServiceType(service_type) => request.service_type == *service_type,
        }
    }

    pub fn apply(&self, requests: &[ServiceRequest]) -> Vec<ServiceRequest> {
        requests.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}

impl From<&str> for ServiceFilter {
    fn from(label: &str) -> Self {
        Self::from_label(label)
    }
}

impl fmt::Display for ServiceFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_FILTER),
            Self::ServiceType(service_type) => f.write_str(service_type),
        }
    }
}

/// Returns `requests` unchanged for `"All"`, otherwise only the requests whose
/// `service_type` equals `filter` exactly. Order is preserved.
pub fn filter_by_service_type(requests: &[ServiceRequest], filter: &str) -> Vec<ServiceRequest> {
    ServiceFilter::from_label(filter).apply(requests)
}

/// The labels offered by the dashboard filter bar, in display order.
pub fn request_filters() -> Vec<String> {
    std::iter::once(ALL_FILTER.to_string())
        .chain(catalog::categories().iter().map(|c| c.name.to_string()))
        .chain(std::iter::once(UNLISTED_SERVICE_TYPE.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewServiceRequest, RequestId};
    use chrono::Utc;

    fn request(service_type: &str) -> ServiceRequest {
        NewServiceRequest::new(service_type, "desc", "555-0000").into_request(RequestId::new(), Utc::now())
    }

    #[test]
    fn all_returns_input_in_order() {
        let requests = vec![request("Plumbing"), request("Cleaning"), request("Unlisted")];
        assert_eq!(filter_by_service_type(&requests, "All"), requests);
    }

    #[test]
    fn exact_match_only() {
        let requests = vec![
            request("Plumbing"),
            request("plumbing"),
            request("Electrical"),
            request("Plumbing"),
        ];
        let filtered = filter_by_service_type(&requests, "Plumbing");
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|r| r.service_type == "Plumbing"));
        assert_eq!(filtered[0].id, requests[0].id);
        assert_eq!(filtered[1].id, requests[3].id);
    }

    #[test]
    fn unknown_label_yields_nothing() {
        let requests = vec![request("Plumbing")];
        assert!(filter_by_service_type(&requests, "Gardening").is_empty());
    }

    #[test]
    fn filter_labels_are_bracketed_by_all_and_unlisted() {
        let labels = request_filters();
        assert_eq!(labels.first().map(String::as_str), Some("All"));
        assert_eq!(labels.last().map(String::as_str), Some("Unlisted"));
        assert!(labels.iter().any(|l| l == "Plumbing"));
        assert_eq!(labels.len(), catalog::categories().len() + 2);
    }

    #[test]
    fn label_round_trips_through_display() {
        assert_eq!(ServiceFilter::from("All").to_string(), "All");
        assert_eq!(ServiceFilter::from("CCTV"), ServiceFilter::ServiceType("CCTV".into()));
    }
}
