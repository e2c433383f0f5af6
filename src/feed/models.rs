// Post model — the read-only input to the scoring core.
//
// Field names follow the application's JSON export (camelCase). Engagement
// counts are not stored directly: they are derived as the sizes of the
// like-set and the comment list, so they are non-negative by construction.

use serde::{Deserialize, Serialize};

/// A comment on a post. Only the fields the digest needs are kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    #[serde(default)]
    pub author_name: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub timestamp: i64,
}

/// A feed post. Immutable for the duration of one scoring pass — the core
/// never mutates posts, it only reads this snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    /// Display name of the author. Authorship comparisons in this subsystem
    /// are by name, matching the source application (see DESIGN.md).
    pub author: String,
    #[serde(default)]
    pub text: String,
    /// Creation time, milliseconds since the Unix epoch.
    pub timestamp: i64,
    /// Names of users who liked the post.
    #[serde(default)]
    pub liked_by: Vec<String>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Post {
    /// Number of likes, derived as the size of the like-set.
    pub fn like_count(&self) -> usize {
        self.liked_by.len()
    }

    /// Number of comments, derived as the length of the comment list.
    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_camel_case_export() {
        let json = r#"{
            "id": "post_abc1234",
            "author": "Ajia Abdulrasaq",
            "text": "Shipped a new project today!",
            "timestamp": 1700000000000,
            "likedBy": ["Ben", "Carol"],
            "comments": [
                {"id": "c1", "authorName": "Ben", "text": "Congrats!", "timestamp": 1700000001000}
            ]
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.like_count(), 2);
        assert_eq!(post.comment_count(), 1);
        assert_eq!(post.comments[0].author_name, "Ben");
    }

    #[test]
    fn missing_engagement_fields_default_to_empty() {
        let json = r#"{"id": "p1", "author": "A", "timestamp": 0}"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.like_count(), 0);
        assert_eq!(post.comment_count(), 0);
        assert!(post.text.is_empty());
    }
}
