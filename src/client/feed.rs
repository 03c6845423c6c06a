use chrono::{DateTime, Utc};

use crate::models::UserRole;

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: i64,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Post {
    pub id: i64,
    pub author: String,
    pub content: String,
    pub likes: u32,
    pub liked: bool,
    pub pinned: bool,
    pub comments: Vec<Comment>,
}

/// The community feed as the client holds it.
#[derive(Debug, Default)]
pub struct Feed {
    posts: Vec<Post>,
}

impl Feed {
    pub fn new(posts: Vec<Post>) -> Self {
        Self { posts }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn post(&self, post_id: i64) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == post_id)
    }

    fn post_mut(&mut self, post_id: i64) -> Option<&mut Post> {
        self.posts.iter_mut().find(|p| p.id == post_id)
    }

    /// Flips the caller's like and adjusts the counter. The toggle is
    /// symmetric, so the counter can never go negative.
    pub fn toggle_like(&mut self, post_id: i64) {
        if let Some(post) = self.post_mut(post_id) {
            post.liked = !post.liked;
            if post.liked {
                post.likes += 1;
            } else {
                post.likes = post.likes.saturating_sub(1);
            }
        }
    }

    /// Pinning is admin-only; a call from any other role changes nothing.
    pub fn toggle_pin(&mut self, post_id: i64, role: UserRole) {
        if role != UserRole::Admin {
            return;
        }
        if let Some(post) = self.post_mut(post_id) {
            post.pinned = !post.pinned;
        }
    }

    /// Appends a comment with a client-generated timestamp-based id and
    /// returns it.
    pub fn add_comment(
        &mut self,
        post_id: i64,
        author: &str,
        content: &str,
        now: DateTime<Utc>,
    ) -> Option<i64> {
        let post = self.post_mut(post_id)?;
        let id = now.timestamp_millis();
        post.comments.push(Comment {
            id,
            author: author.to_string(),
            content: content.to_string(),
            created_at: now,
        });
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_with_post() -> Feed {
        Feed::new(vec![Post {
            id: 1,
            author: "Ana".to_string(),
            content: "Bem-vindos!".to_string(),
            likes: 3,
            liked: false,
            pinned: false,
            comments: vec![],
        }])
    }

    #[test]
    fn toggling_like_twice_restores_the_count() {
        let mut feed = feed_with_post();
        feed.toggle_like(1);
        assert_eq!(feed.post(1).unwrap().likes, 4);
        assert!(feed.post(1).unwrap().liked);

        feed.toggle_like(1);
        assert_eq!(feed.post(1).unwrap().likes, 3);
        assert!(!feed.post(1).unwrap().liked);
    }

    #[test]
    fn unliking_an_unliked_zero_count_post_stays_at_zero() {
        let mut feed = Feed::new(vec![Post {
            id: 1,
            author: "Ana".to_string(),
            content: String::new(),
            likes: 0,
            liked: true,
            pinned: false,
            comments: vec![],
        }]);
        feed.toggle_like(1);
        assert_eq!(feed.post(1).unwrap().likes, 0);
    }

    #[test]
    fn only_admins_can_pin() {
        let mut feed = feed_with_post();

        feed.toggle_pin(1, UserRole::User);
        assert!(!feed.post(1).unwrap().pinned);

        feed.toggle_pin(1, UserRole::Admin);
        assert!(feed.post(1).unwrap().pinned);

        feed.toggle_pin(1, UserRole::Admin);
        assert!(!feed.post(1).unwrap().pinned);
    }

    #[test]
    fn comments_append_in_order_with_timestamp_ids() {
        let mut feed = feed_with_post();
        let t0 = Utc::now();
        let t1 = t0 + chrono::Duration::seconds(5);

        let first = feed.add_comment(1, "Bruno", "Olá", t0).unwrap();
        let second = feed.add_comment(1, "Carla", "Oi", t1).unwrap();

        let comments = &feed.post(1).unwrap().comments;
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].id, first);
        assert_eq!(comments[1].id, second);
        assert_eq!(first, t0.timestamp_millis());
        assert!(second > first);
    }

    #[test]
    fn operations_on_unknown_posts_are_no_ops() {
        let mut feed = feed_with_post();
        feed.toggle_like(99);
        feed.toggle_pin(99, UserRole::Admin);
        assert!(feed.add_comment(99, "Bruno", "?", Utc::now()).is_none());
        assert_eq!(feed.post(1).unwrap().likes, 3);
    }
}
