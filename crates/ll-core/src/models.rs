//! # Domain Models
//!
//! These structs represent the core entities of LocalLegends.
//! We use UUID v7 for time-ordered, globally unique identification.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Label used for requests that do not belong to any catalog category.
pub const UNLISTED_SERVICE_TYPE: &str = "Unlisted";

/// Identifier of a [`ServiceRequest`]. Assigned by the store, never by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(pub Uuid);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Identifier of a [`ForumPost`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub Uuid);

impl PostId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for PostId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Lifecycle of a service request. Admins flip it from the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RequestStatus {
    #[default]
    Pending,
    Done,
}

impl RequestStatus {
    /// The other state. This is the only transition a request supports.
    pub fn toggled(self) -> Self {
        match self {
            Self::Pending => Self::Done,
            Self::Done => Self::Pending,
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => f.write_str("Pending"),
            Self::Done => f.write_str("Done"),
        }
    }
}

/// GPS fix attached to a service location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Where the service should be performed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    /// House / flat / street
    pub address: String,
    /// Area or locality
    pub area: String,
    pub landmark: Option<String>,
    pub city: String,
    pub pincode: String,
    pub coordinates: Option<GeoPoint>,
}

/// A submitted request for a service, listed on the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRequest {
    pub id: RequestId,
    /// Catalog category name, or [`UNLISTED_SERVICE_TYPE`]
    pub service_type: String,
    /// Specific catalog service, or the title of an unlisted request
    pub service_name: Option<String>,
    pub customer_name: Option<String>,
    pub description: String,
    /// Stored exactly as typed; the format is never checked.
    pub phone: String,
    /// Assigned provider; `None` means unassigned.
    pub provider: Option<String>,
    pub status: RequestStatus,
    pub location: Option<Location>,
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied fields for [`crate::RequestRepo::add_request`].
///
/// Anything missing falls back to the store defaults: `Pending` and unassigned.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewServiceRequest {
    pub service_type: String,
    pub service_name: Option<String>,
    pub customer_name: Option<String>,
    pub description: String,
    pub phone: String,
    pub provider: Option<String>,
    pub status: Option<RequestStatus>,
    pub location: Option<Location>,
}

impl NewServiceRequest {
    pub fn new(
        service_type: impl Into<String>,
        description: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            service_type: service_type.into(),
            description: description.into(),
            phone: phone.into(),
            ..Self::default()
        }
    }

    /// Builds the stored record. The id and timestamp come from the caller (the store).
    pub fn into_request(self, id: RequestId, created_at: DateTime<Utc>) -> ServiceRequest {
        ServiceRequest {
            id,
            service_type: self.service_type,
            service_name: self.service_name,
            customer_name: self.customer_name,
            description: self.description,
            phone: self.phone,
            provider: self.provider,
            status: self.status.unwrap_or_default(),
            location: self.location,
            created_at,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PostStatus {
    #[default]
    Pending,
    Answered,
}

/// A question asked on the community forum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForumPost {
    pub id: PostId,
    /// Creator; mocked, not tied to a real session.
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub status: PostStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

/// An admin answer attached to a [`ForumPost`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForumReply {
    pub post_id: PostId,
    pub admin_id: String,
    pub reply_text: String,
    pub visibility: Visibility,
    pub created_at: DateTime<Utc>,
}

/// Who is looking at a thread. Passed in explicitly; there is no session.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Viewer {
    pub user_id: Option<String>,
    pub is_admin: bool,
}

impl Viewer {
    pub fn user(user_id: impl Into<String>) -> Self {
        Self { user_id: Some(user_id.into()), is_admin: false }
    }

    pub fn admin(user_id: impl Into<String>) -> Self {
        Self { user_id: Some(user_id.into()), is_admin: true }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A blank id owns nothing.
    pub fn owns(&self, post: &ForumPost) -> bool {
        match self.user_id.as_deref() {
            Some(id) if !id.trim().is_empty() => id == post.user_id,
            _ => false,
        }
    }
}

/// When a reply moves its post from `PENDING` to `ANSWERED`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerPolicy {
    /// Replies never touch the post status.
    #[default]
    Manual,
    OnFirstReply,
    /// Only a reply everyone can read counts as an answer.
    OnFirstPublicReply,
}

impl AnswerPolicy {
    pub fn answers(self, visibility: Visibility) -> bool {
        match self {
            Self::Manual => false,
            Self::OnFirstReply => true,
            Self::OnFirstPublicReply => visibility == Visibility::Public,
        }
    }
}
