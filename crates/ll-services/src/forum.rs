//! Community forum: questions from users, answers from admins.

use std::sync::Arc;

use ll_core::error::{AppError, Result};
use ll_core::models::{ForumPost, ForumReply, PostId, Viewer};
use ll_core::traits::ForumRepo;
use ll_core::visibility::visible_replies;
use serde::Serialize;
use tracing::{info, warn};

use crate::forms::{ForumPostForm, ReplyForm, SIGN_IN_TO_POST};

pub const DEFAULT_TITLE_MAX_LEN: usize = 100;

/// A post together with the replies one viewer is allowed to read.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForumThread {
    pub post: ForumPost,
    pub replies: Vec<ForumReply>,
}

#[derive(Clone)]
pub struct ForumService {
    repo: Arc<dyn ForumRepo>,
    title_max_len: usize,
}

impl ForumService {
    pub fn new(repo: Arc<dyn ForumRepo>) -> Self {
        Self { repo, title_max_len: DEFAULT_TITLE_MAX_LEN }
    }

    pub fn with_title_max_len(mut self, title_max_len: usize) -> Self {
        self.title_max_len = title_max_len;
        self
    }

    pub fn ask(&self, form: &ForumPostForm, user_id: &str) -> Result<ForumPost> {
        if user_id.trim().is_empty() {
            warn!("forum post rejected: no user id");
            return Err(AppError::validation(SIGN_IN_TO_POST));
        }
        let (title, description) = form
            .validate(self.title_max_len)
            .inspect_err(|e| warn!(error = %e, "forum post rejected"))?;
        let post = self.repo.create_post(&title, &description, user_id);
        info!(post_id = %post.id, user_id, "question posted");
        Ok(post)
    }

    /// Admin reply. The post id is taken as given; the store does not
    /// require the post to exist.
    pub fn reply(&self, post_id: PostId, admin_id: &str, form: &ReplyForm) -> Result<ForumReply> {
        let text = form.validate()?;
        let reply = self.repo.create_reply(post_id, admin_id, &text, form.visibility);
        info!(%post_id, admin_id, visibility = ?reply.visibility, "reply posted");
        Ok(reply)
    }

    /// Newest first.
    pub fn posts(&self) -> Vec<ForumPost> {
        self.repo.list_posts()
    }

    pub fn thread(&self, post_id: PostId, viewer: &Viewer) -> Result<ForumThread> {
        let post = self
            .repo
            .get_post(post_id)
            .ok_or_else(|| AppError::not_found("ForumPost", post_id))?;
        let replies = visible_replies(&self.repo.replies_for(post_id), &post, viewer);
        Ok(ForumThread { post, replies })
    }
}
