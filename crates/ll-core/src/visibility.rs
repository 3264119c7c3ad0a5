//! Reply visibility on forum threads.

use crate::models::{ForumPost, ForumReply, Viewer, Visibility};

/// Whether `viewer` may read `reply` on `post`.
///
/// Public replies are readable by everyone. Private replies are readable by
/// admins and by the author of the question.
pub fn can_view(reply: &ForumReply, post: &ForumPost, viewer: &Viewer) -> bool {
    match reply.visibility {
        Visibility::Public => true,
        Visibility::Private => viewer.is_admin || viewer.owns(post),
    }
}

/// The replies of `post` that `viewer` may read, in insertion order.
/// Replies attached to other posts are dropped.
pub fn visible_replies(all_replies: &[ForumReply], post: &ForumPost, viewer: &Viewer) -> Vec<ForumReply> {
    all_replies
        .iter()
        .filter(|reply| reply.post_id == post.id)
        .filter(|reply| can_view(reply, post, viewer))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PostId, PostStatus};
    use chrono::Utc;

    fn post_by(user_id: &str) -> ForumPost {
        ForumPost {
            id: PostId::new(),
            user_id: user_id.to_string(),
            title: "Looking for a verified plumber".into(),
            description: "Kitchen sink leak".into(),
            created_at: Utc::now(),
            status: PostStatus::Pending,
        }
    }

    fn reply(post: &ForumPost, text: &str, visibility: Visibility) -> ForumReply {
        ForumReply {
            post_id: post.id,
            admin_id: "admin1".into(),
            reply_text: text.into(),
            visibility,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn private_reply_is_limited_to_owner_and_admins() {
        let post = post_by("user123");
        let replies = vec![reply(&post, "call me", Visibility::Private)];

        assert_eq!(visible_replies(&replies, &post, &Viewer::user("user123")).len(), 1);
        assert!(visible_replies(&replies, &post, &Viewer::user("user456")).is_empty());
        assert_eq!(visible_replies(&replies, &post, &Viewer::admin("anyone")).len(), 1);
        assert!(visible_replies(&replies, &post, &Viewer::anonymous()).is_empty());
    }

    #[test]
    fn blank_user_id_owns_nothing() {
        let post = post_by("");
        let replies = vec![reply(&post, "call me", Visibility::Private)];

        assert!(visible_replies(&replies, &post, &Viewer::user("")).is_empty());
        assert!(visible_replies(&replies, &post, &Viewer::user("  ")).is_empty());
        assert_eq!(visible_replies(&replies, &post, &Viewer::admin("admin1")).len(), 1);
    }

    #[test]
    fn admin_without_id_still_sees_private() {
        let post = post_by("user123");
        let replies = vec![reply(&post, "noted", Visibility::Private)];
        let viewer = Viewer { user_id: None, is_admin: true };
        assert_eq!(visible_replies(&replies, &post, &viewer).len(), 1);
    }

    #[test]
    fn keeps_insertion_order_and_skips_other_posts() {
        let post = post_by("user123");
        let other = post_by("user789");
        let replies = vec![
            reply(&post, "first", Visibility::Public),
            reply(&other, "elsewhere", Visibility::Public),
            reply(&post, "second", Visibility::Private),
            reply(&post, "third", Visibility::Public),
        ];

        let texts: Vec<_> = visible_replies(&replies, &post, &Viewer::user("user456"))
            .into_iter()
            .map(|r| r.reply_text)
            .collect();
        assert_eq!(texts, ["first", "third"]);
    }
}
