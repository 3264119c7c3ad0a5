use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use dashmap::DashMap;
use ll_core::models::{NewServiceRequest, RequestId, RequestStatus, ServiceRequest};
use ll_core::traits::RequestRepo;
use tracing::debug;

use crate::{newest_first, Entry};

/// Service requests held in process memory. Dropped with the process.
#[derive(Debug, Default)]
pub struct InMemoryRequestStore {
    requests: DashMap<RequestId, Entry<ServiceRequest>>,
    seq: AtomicU64,
}

impl InMemoryRequestStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}

impl RequestRepo for InMemoryRequestStore {
    fn add_request(&self, input: NewServiceRequest) -> ServiceRequest {
        let id = RequestId::new();
        let request = input.into_request(id, Utc::now());
        let seq = self.seq.fetch_add(1, Ordering::Relaxed);
        self.requests.insert(id, Entry { seq, record: request.clone() });

        debug!(%id, service_type = %request.service_type, "request added");
        request
    }

    fn toggle_status(&self, id: RequestId) -> Option<RequestStatus> {
        let mut entry = self.requests.get_mut(&id)?;
        let status = entry.record.status.toggled();
        entry.record.status = status;

        debug!(%id, %status, "request status toggled");
        Some(status)
    }

    fn get_request(&self, id: RequestId) -> Option<ServiceRequest> {
        self.requests.get(&id).map(|e| e.record.clone())
    }

    fn list_requests(&self) -> Vec<ServiceRequest> {
        newest_first(self.requests.iter().map(|e| e.value().clone()).collect())
    }
}
