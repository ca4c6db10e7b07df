use serde::{Deserialize, Serialize};

use super::Profile;
use crate::decode::{Decode, Schema};

/// The user-editable part of an article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDraft {
    pub title: String,
    pub description: String,
    pub body: String,
    pub tag_list: Vec<String>,
}

/// A published article with its metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub body: String,
    pub tag_list: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
    pub favorited: bool,
    pub favorites_count: u32,
    pub author: Profile,
}

impl Article {
    pub fn draft(&self) -> ArticleDraft {
        ArticleDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            body: self.body.clone(),
            tag_list: self.tag_list.clone(),
        }
    }

    /// Flip the favorite flag and adjust the count to match.
    pub fn toggle_favorite(&mut self) {
        if self.favorited {
            self.favorited = false;
            self.favorites_count = self.favorites_count.saturating_sub(1);
        } else {
            self.favorited = true;
            self.favorites_count += 1;
        }
    }

    pub fn is_authored_by(&self, username: &str) -> bool {
        self.author.username == username
    }
}

impl Decode for ArticleDraft {
    fn schema() -> Schema {
        Schema::object([
            ("title", Schema::String),
            ("description", Schema::String),
            ("body", Schema::String),
            ("tagList", Schema::array(Schema::String)),
        ])
    }
}

impl Decode for Article {
    fn schema() -> Schema {
        ArticleDraft::schema()
            .intersect(Schema::object([("slug", Schema::String)]))
            .intersect(Schema::object([
                ("createdAt", Schema::String),
                ("updatedAt", Schema::String),
                ("favorited", Schema::Boolean),
                ("favoritesCount", Schema::Number),
                ("author", Profile::schema()),
            ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode_sync;
    use crate::models::fixtures;

    #[test]
    fn test_decode_article() {
        let article: Article = decode_sync(&fixtures::article_json("how-to", false, 3)).unwrap();
        assert_eq!(article.slug, "how-to");
        assert_eq!(article.tag_list, vec!["rust".to_string()]);
        assert_eq!(article.author.username, "jake");
    }

    #[test]
    fn test_nested_author_errors_have_paths() {
        let mut value = fixtures::article_json("a", false, 0);
        value["author"]["following"] = serde_json::json!("yes");
        value["favoritesCount"] = serde_json::json!("many");
        let err = decode_sync::<Article>(&value).unwrap_err();
        assert_eq!(err.messages.len(), 2);
        assert!(err.messages.iter().any(|m| m.contains("author.following")));
        assert!(err.messages.iter().any(|m| m.contains("favoritesCount")));
    }

    #[test]
    fn test_toggle_favorite() {
        let mut article = fixtures::article("a", false, 0);
        article.toggle_favorite();
        assert!(article.favorited);
        assert_eq!(article.favorites_count, 1);
        article.toggle_favorite();
        assert!(!article.favorited);
        assert_eq!(article.favorites_count, 0);
    }

    #[test]
    fn test_unfavorite_never_underflows() {
        let mut article = fixtures::article("a", true, 0);
        article.toggle_favorite();
        assert!(!article.favorited);
        assert_eq!(article.favorites_count, 0);
    }

    #[test]
    fn test_draft_serializes_camel_case() {
        let draft = fixtures::article("a", false, 0).draft();
        let value = serde_json::to_value(&draft).unwrap();
        assert!(value.get("tagList").is_some());
        assert!(value.get("slug").is_none());
    }
}
