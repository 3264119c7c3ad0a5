use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use dashmap::DashMap;
use ll_core::models::{AnswerPolicy, ForumPost, ForumReply, PostId, PostStatus, Visibility};
use ll_core::traits::ForumRepo;
use tracing::debug;

use crate::{newest_first, Entry};

/// Forum posts and replies held in process memory.
///
/// Replies are grouped per post and kept in arrival order. Whether a reply
/// marks its post as answered is decided by the configured [`AnswerPolicy`].
#[derive(Debug, Default)]
pub struct InMemoryForumStore {
    posts: DashMap<PostId, Entry<ForumPost>>,
    replies: DashMap<PostId, Vec<ForumReply>>,
    seq: AtomicU64,
    policy: AnswerPolicy,
}

impl InMemoryForumStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: AnswerPolicy) -> Self {
        Self { policy, ..Self::default() }
    }

    pub fn policy(&self) -> AnswerPolicy {
        self.policy
    }

    fn insert_post(&self, post: ForumPost) {
        let seq = self.seq.fetch_add(1, Ordering::Relaxed);
        self.posts.insert(post.id, Entry { seq, record: post });
    }

    fn mark_answered(&self, post_id: PostId) {
        if let Some(mut entry) = self.posts.get_mut(&post_id) {
            if entry.record.status == PostStatus::Pending {
                entry.record.status = PostStatus::Answered;
                debug!(%post_id, "post marked answered");
            }
        }
    }
}

impl ForumRepo for InMemoryForumStore {
    fn create_post(&self, title: &str, description: &str, user_id: &str) -> ForumPost {
        let post = ForumPost {
            id: PostId::new(),
            user_id: user_id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            created_at: Utc::now(),
            status: PostStatus::Pending,
        };
        self.insert_post(post.clone());

        debug!(post_id = %post.id, user_id, "forum post created");
        post
    }

    fn create_reply(
        &self,
        post_id: PostId,
        admin_id: &str,
        reply_text: &str,
        visibility: Visibility,
    ) -> ForumReply {
        let reply = ForumReply {
            post_id,
            admin_id: admin_id.to_string(),
            reply_text: reply_text.to_string(),
            visibility,
            created_at: Utc::now(),
        };
        // Scoped so the replies shard lock is released before touching posts.
        {
            self.replies.entry(post_id).or_default().push(reply.clone());
        }
        debug!(%post_id, admin_id, ?visibility, "forum reply added");

        if self.policy.answers(visibility) {
            self.mark_answered(post_id);
        }
        reply
    }

    fn import_post(&self, post: ForumPost) {
        debug!(post_id = %post.id, "forum post imported");
        self.insert_post(post);
    }

    fn import_reply(&self, reply: ForumReply) {
        debug!(post_id = %reply.post_id, "forum reply imported");
        self.replies.entry(reply.post_id).or_default().push(reply);
    }

    fn get_post(&self, id: PostId) -> Option<ForumPost> {
        self.posts.get(&id).map(|e| e.record.clone())
    }

    fn list_posts(&self) -> Vec<ForumPost> {
        newest_first(self.posts.iter().map(|e| e.value().clone()).collect())
    }

    fn replies_for(&self, post_id: PostId) -> Vec<ForumReply> {
        self.replies.get(&post_id).map(|r| r.value().clone()).unwrap_or_default()
    }
}
