use std::sync::Arc;

use ll_core::traits::{ForumRepo, Geolocation, RequestRepo, Telephony};

use crate::{ContactService, ForumService, LocationService, RequestService};

/// Everything a screen needs. Cheap to clone; the ports sit behind `Arc`s.
#[derive(Clone)]
pub struct App {
    pub requests: RequestService,
    pub forum: ForumService,
    pub contact: ContactService,
    pub location: LocationService,
}

impl App {
    pub fn new(
        request_repo: Arc<dyn RequestRepo>,
        forum_repo: Arc<dyn ForumRepo>,
        telephony: Arc<dyn Telephony>,
        geolocation: Arc<dyn Geolocation>,
    ) -> Self {
        Self {
            requests: RequestService::new(request_repo),
            forum: ForumService::new(forum_repo),
            contact: ContactService::new(telephony),
            location: LocationService::new(geolocation),
        }
    }

    pub fn with_title_max_len(mut self, title_max_len: usize) -> Self {
        self.forum = self.forum.with_title_max_len(title_max_len);
        self
    }
}
