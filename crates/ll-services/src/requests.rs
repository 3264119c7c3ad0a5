//! Request submission and the admin dashboard.

use std::sync::Arc;

use ll_core::error::{AppError, Result};
use ll_core::filter::ServiceFilter;
use ll_core::models::{RequestId, RequestStatus, ServiceRequest};
use ll_core::traits::RequestRepo;
use tracing::{info, warn};

use crate::forms::{RequestForm, UnlistedRequestForm};

/// Orchestrates validation and persistence of service requests.
#[derive(Clone)]
pub struct RequestService {
    repo: Arc<dyn RequestRepo>,
}

impl RequestService {
    pub fn new(repo: Arc<dyn RequestRepo>) -> Self {
        Self { repo }
    }

    /// Submits a request for a catalog service.
    pub fn submit(&self, form: &RequestForm) -> Result<ServiceRequest> {
        let input = form.validate().inspect_err(|e| warn!(error = %e, "request form rejected"))?;
        let request = self.repo.add_request(input);
        info!(id = %request.id, service_type = %request.service_type, "service request submitted");
        Ok(request)
    }

    /// Submits an "Unlisted" request.
    pub fn submit_unlisted(&self, form: &UnlistedRequestForm) -> Result<ServiceRequest> {
        let input = form.validate().inspect_err(|e| warn!(error = %e, "unlisted form rejected"))?;
        let request = self.repo.add_request(input);
        info!(id = %request.id, "unlisted request submitted");
        Ok(request)
    }

    /// Admin action: flips Pending/Done. Unknown ids are ignored.
    pub fn toggle_status(&self, id: RequestId) -> Option<RequestStatus> {
        let status = self.repo.toggle_status(id);
        if status.is_none() {
            warn!(%id, "status toggle for unknown request ignored");
        }
        status
    }

    pub fn get(&self, id: RequestId) -> Result<ServiceRequest> {
        self.repo.get_request(id).ok_or_else(|| AppError::not_found("ServiceRequest", id))
    }

    /// Newest-first snapshot narrowed by a dashboard filter.
    pub fn dashboard(&self, filter: &ServiceFilter) -> Vec<ServiceRequest> {
        filter.apply(&self.repo.list_requests())
    }
}
