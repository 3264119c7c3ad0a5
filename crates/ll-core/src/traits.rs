//! # Core Traits (Ports)
//!
//! Any plugin must implement these traits to be used by the binary.
//! The repositories are synchronous and infallible; the device ports are
//! async because the platform answers through callbacks.

use async_trait::async_trait;

use crate::models::{
    ForumPost, ForumReply, GeoPoint, NewServiceRequest, PostId, RequestId, RequestStatus,
    ServiceRequest, Visibility,
};

/// Data persistence contract for service requests.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait RequestRepo: Send + Sync {
    /// Stores a new request at the head of the list and returns it.
    /// Performs no validation.
    fn add_request(&self, input: NewServiceRequest) -> ServiceRequest;

    /// Flips Pending/Done. Returns the new status, or `None` when the id is unknown.
    fn toggle_status(&self, id: RequestId) -> Option<RequestStatus>;

    fn get_request(&self, id: RequestId) -> Option<ServiceRequest>;

    /// Newest first.
    fn list_requests(&self) -> Vec<ServiceRequest>;
}

/// Data persistence contract for forum posts and their replies.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait ForumRepo: Send + Sync {
    fn create_post(&self, title: &str, description: &str, user_id: &str) -> ForumPost;

    /// Appends a reply. The post is not required to exist.
    fn create_reply(
        &self,
        post_id: PostId,
        admin_id: &str,
        reply_text: &str,
        visibility: Visibility,
    ) -> ForumReply;

    /// Inserts an already-built post at the head of the list (seeding, restores).
    fn import_post(&self, post: ForumPost);

    /// Appends an already-built reply, keeping its timestamp. The answer
    /// policy is not applied; an imported post carries its own status.
    fn import_reply(&self, reply: ForumReply);

    fn get_post(&self, id: PostId) -> Option<ForumPost>;

    /// Newest first.
    fn list_posts(&self) -> Vec<ForumPost>;

    /// Insertion order, oldest first.
    fn replies_for(&self, post_id: PostId) -> Vec<ForumReply>;
}

/// Phone dialer / messaging contract (`tel:`, `whatsapp:` links).
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait Telephony: Send + Sync {
    /// Whether the device has a handler for this URL.
    async fn can_open(&self, url: &str) -> bool;
    async fn open(&self, url: &str) -> anyhow::Result<()>;
}

/// Device location contract.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait Geolocation: Send + Sync {
    async fn current_position(&self) -> anyhow::Result<GeoPoint>;
}
