//! ll-core/src/lib.rs
//!
//! The central domain logic and interface definitions for LocalLegends.

pub mod catalog;
pub mod error;
pub mod filter;
pub mod models;
pub mod traits;
pub mod visibility;

// Re-exporting for easier access in other crates
pub use error::*;
pub use filter::*;
pub use models::*;
pub use traits::*;
pub use visibility::*;

#[cfg(test)]
mod tests {
    use super::models::*;
    use chrono::Utc;

    #[test]
    fn new_request_defaults_to_pending_and_unassigned() {
        let request = NewServiceRequest::new("Plumbing", "leaky pipe", "555-0000")
            .into_request(RequestId::new(), Utc::now());
        assert_eq!(request.status, RequestStatus::Pending);
        assert_eq!(request.provider, None);
        assert_eq!(request.location, None);
    }

    #[test]
    fn status_toggle_is_an_involution() {
        assert_eq!(RequestStatus::Pending.toggled(), RequestStatus::Done);
        assert_eq!(RequestStatus::Pending.toggled().toggled(), RequestStatus::Pending);
    }

    #[test]
    fn forum_enums_use_upper_case_wire_names() {
        assert_eq!(serde_json::to_string(&PostStatus::Answered).unwrap(), "\"ANSWERED\"");
        assert_eq!(serde_json::to_string(&Visibility::Private).unwrap(), "\"PRIVATE\"");
        let policy: AnswerPolicy = serde_json::from_str("\"on_first_public_reply\"").unwrap();
        assert_eq!(policy, AnswerPolicy::OnFirstPublicReply);
    }

    #[test]
    fn answer_policy_rules() {
        assert!(!AnswerPolicy::Manual.answers(Visibility::Public));
        assert!(AnswerPolicy::OnFirstReply.answers(Visibility::Private));
        assert!(AnswerPolicy::OnFirstPublicReply.answers(Visibility::Public));
        assert!(!AnswerPolicy::OnFirstPublicReply.answers(Visibility::Private));
    }

    #[test]
    fn geo_point_bounds() {
        assert!(GeoPoint { latitude: 12.97, longitude: 77.59 }.is_valid());
        assert!(!GeoPoint { latitude: 91.0, longitude: 0.0 }.is_valid());
    }
}
