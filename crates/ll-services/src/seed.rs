//! Demo data loaded at startup so the dashboard and forum are not empty.

use chrono::{DateTime, TimeZone, Utc};
use ll_core::models::{
    ForumPost, ForumReply, NewServiceRequest, PostId, PostStatus, RequestStatus, Visibility,
};
use ll_core::traits::{ForumRepo, RequestRepo};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedSummary {
    pub requests: usize,
    pub posts: usize,
    pub replies: usize,
}

struct DemoRequest {
    service_type: &'static str,
    description: &'static str,
    phone: &'static str,
    provider: Option<&'static str>,
    status: RequestStatus,
}

struct DemoPost {
    user_id: &'static str,
    title: &'static str,
    description: &'static str,
    created_at: (i32, u32, u32, u32, u32),
    status: PostStatus,
    reply: Option<DemoReply>,
}

struct DemoReply {
    text: &'static str,
    created_at: (i32, u32, u32, u32, u32),
}

/// Listed newest first, the order the dashboard shows them in.
const DEMO_REQUESTS: &[DemoRequest] = &[
    DemoRequest {
        service_type: "Plumbing",
        description: "Leaky faucet in the kitchen sink.",
        phone: "555-1234",
        provider: Some("John Doe Plumbing"),
        status: RequestStatus::Pending,
    },
    DemoRequest {
        service_type: "Unlisted",
        description: "Need help moving a heavy sofa this Saturday.",
        phone: "555-5678",
        provider: None,
        status: RequestStatus::Pending,
    },
    DemoRequest {
        service_type: "Electrical",
        description: "New ceiling fan installation in the master bedroom.",
        phone: "555-9012",
        provider: Some("Electric Pros Inc."),
        status: RequestStatus::Done,
    },
    DemoRequest {
        service_type: "Metal Fabrication",
        description: "Repair a broken railing section on the back porch.",
        phone: "555-3456",
        provider: None,
        status: RequestStatus::Pending,
    },
    DemoRequest {
        service_type: "Cleaning",
        description: "Deep clean for move-out service.",
        phone: "555-7890",
        provider: Some("Sparkle Cleaners"),
        status: RequestStatus::Done,
    },
];

/// Listed newest first.
const DEMO_POSTS: &[DemoPost] = &[
    DemoPost {
        user_id: "user123",
        title: "Approximate cost for private cab from Bangalore to Mysore?",
        description: "I am planning a trip next weekend. What would be the typical charges for a one-way drop?",
        created_at: (2025, 12, 20, 10, 0),
        status: PostStatus::Answered,
        reply: Some(DemoReply {
            text: "A private cab typically costs between ₹2500 to ₹3500 depending on the car type.",
            created_at: (2025, 12, 20, 11, 0),
        }),
    },
    DemoPost {
        user_id: "user456",
        title: "Looking for a verified plumber in Indiranagar",
        description: "I have some leakage in my kitchen sink. Need someone reliable who can visit today.",
        created_at: (2025, 12, 21, 14, 30),
        status: PostStatus::Pending,
        reply: None,
    },
    DemoPost {
        user_id: "user789",
        title: "How to cancel a service request?",
        description: "I accidentally created a duplicate request. How do I remove it?",
        created_at: (2025, 12, 22, 9, 0),
        status: PostStatus::Pending,
        reply: None,
    },
];

fn timestamp((y, mo, d, h, mi): (i32, u32, u32, u32, u32)) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).single().unwrap_or_default()
}

/// Loads the demo requests, questions and answers. Records are inserted
/// oldest first so the stores list them in the order above.
pub fn seed_demo_data(requests: &dyn RequestRepo, forum: &dyn ForumRepo, admin_id: &str) -> SeedSummary {
    let mut summary = SeedSummary::default();

    for demo in DEMO_REQUESTS.iter().rev() {
        requests.add_request(NewServiceRequest {
            provider: demo.provider.map(str::to_string),
            status: Some(demo.status),
            ..NewServiceRequest::new(demo.service_type, demo.description, demo.phone)
        });
        summary.requests += 1;
    }

    for demo in DEMO_POSTS.iter().rev() {
        let post = ForumPost {
            id: PostId::new(),
            user_id: demo.user_id.to_string(),
            title: demo.title.to_string(),
            description: demo.description.to_string(),
            created_at: timestamp(demo.created_at),
            status: demo.status,
        };
        let post_id = post.id;
        forum.import_post(post);
        summary.posts += 1;

        if let Some(reply) = &demo.reply {
            forum.import_reply(ForumReply {
                post_id,
                admin_id: admin_id.to_string(),
                reply_text: reply.text.to_string(),
                visibility: Visibility::Public,
                created_at: timestamp(reply.created_at),
            });
            summary.replies += 1;
        }
    }

    info!(
        requests = summary.requests,
        posts = summary.posts,
        replies = summary.replies,
        "demo data loaded"
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use ll_store_memory::{InMemoryForumStore, InMemoryRequestStore};

    #[test]
    fn seeds_in_display_order() {
        let requests = InMemoryRequestStore::new();
        let forum = InMemoryForumStore::new();
        let summary = seed_demo_data(&requests, &forum, "admin1");

        assert_eq!(summary, SeedSummary { requests: 5, posts: 3, replies: 1 });

        let listed = requests.list_requests();
        assert_eq!(listed[0].description, "Leaky faucet in the kitchen sink.");
        assert_eq!(listed[0].provider.as_deref(), Some("John Doe Plumbing"));
        assert_eq!(listed[4].status, RequestStatus::Done);

        let posts = forum.list_posts();
        assert_eq!(posts[0].user_id, "user123");
        assert_eq!(posts[0].status, PostStatus::Answered);
        assert_eq!(posts[0].created_at.to_rfc3339(), "2025-12-20T10:00:00+00:00");
        let replies = forum.replies_for(posts[0].id);
        assert_eq!(replies.len(), 1);
        assert_eq!(replies[0].admin_id, "admin1");
        assert_eq!(replies[0].created_at.to_rfc3339(), "2025-12-20T11:00:00+00:00");
        assert!(forum.replies_for(posts[1].id).is_empty());
    }
}
