use serde::Deserialize;

/// A single post as returned by the server.
///
/// Immutable once fetched. `id` is server-assigned and unique across the
/// whole collection, so equality on `id` identifies a post.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Post {
    pub id: u64,
    #[serde(rename = "userId", default)]
    pub user_id: u64,
    pub title: String,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_deserializes_server_shape() {
        let json = r#"{
            "userId": 2,
            "id": 15,
            "title": "eveniet quod temporibus",
            "body": "reprehenderit quos placeat"
        }"#;

        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, 15);
        assert_eq!(post.user_id, 2);
        assert_eq!(post.title, "eveniet quod temporibus");
    }

    #[test]
    fn test_post_equality_is_by_value() {
        let a = Post {
            id: 1,
            user_id: 1,
            title: "t".into(),
            body: "b".into(),
        };
        assert_eq!(a, a.clone());
    }
}
