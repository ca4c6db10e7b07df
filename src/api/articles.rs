use serde_json::json;

use super::{segment, ApiClient, StatusGuards};
use crate::error::ConduitResult;
use crate::models::{Article, ArticleDraft, MultiArticlesResponse, SingleArticleResponse};
use crate::traits::Method;

/// Which list of articles to fetch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArticleSource {
    /// Every article, newest first.
    All,
    /// Articles by authors the current user follows.
    Feed,
    Tag(String),
    Author(String),
    /// Articles favorited by the given user.
    Favorites(String),
}

impl ArticleSource {
    /// Articles per page for this source.
    pub fn page_size(&self) -> u32 {
        match self {
            ArticleSource::All | ArticleSource::Feed | ArticleSource::Tag(_) => 10,
            ArticleSource::Author(_) | ArticleSource::Favorites(_) => 5,
        }
    }

    /// Request path (with query) for the zero-based `page`.
    pub fn path(&self, page: u32) -> String {
        let limit = self.page_size();
        let paging = format!("limit={}&offset={}", limit, page * limit);
        match self {
            ArticleSource::All => format!("/articles?{}", paging),
            ArticleSource::Feed => format!("/articles/feed?{}", paging),
            ArticleSource::Tag(tag) => {
                format!("/articles?tag={}&{}", urlencoding::encode(tag), paging)
            }
            ArticleSource::Author(author) => {
                format!("/articles?author={}&{}", urlencoding::encode(author), paging)
            }
            ArticleSource::Favorites(user) => {
                format!("/articles?favorited={}&{}", urlencoding::encode(user), paging)
            }
        }
    }
}

impl ApiClient {
    pub async fn list_articles(
        &self,
        source: &ArticleSource,
        page: u32,
    ) -> ConduitResult<MultiArticlesResponse> {
        self.request(Method::Get, &source.path(page), None, StatusGuards::NONE)
            .await
    }

    pub async fn get_article(&self, slug: &str) -> ConduitResult<Article> {
        let path = format!("/articles/{}", segment(slug));
        let response: SingleArticleResponse = self
            .request(Method::Get, &path, None, StatusGuards::NOT_FOUND)
            .await?;
        Ok(response.article)
    }

    pub async fn create_article(&self, draft: &ArticleDraft) -> ConduitResult<Article> {
        let body = json!({ "article": draft });
        let response: SingleArticleResponse = self
            .request(Method::Post, "/articles", Some(body), StatusGuards::VALIDATION)
            .await?;
        Ok(response.article)
    }

    pub async fn update_article(&self, slug: &str, draft: &ArticleDraft) -> ConduitResult<Article> {
        let path = format!("/articles/{}", segment(slug));
        let body = json!({ "article": draft });
        let response: SingleArticleResponse = self
            .request(Method::Put, &path, Some(body), StatusGuards::VALIDATION)
            .await?;
        Ok(response.article)
    }

    /// The answer body is not inspected, only its status.
    pub async fn delete_article(&self, slug: &str) -> ConduitResult<()> {
        let path = format!("/articles/{}", segment(slug));
        self.request_empty(Method::Delete, &path, StatusGuards::NONE)
            .await
    }

    pub async fn favorite(&self, slug: &str) -> ConduitResult<Article> {
        let path = format!("/articles/{}/favorite", segment(slug));
        let response: SingleArticleResponse = self
            .request(Method::Post, &path, None, StatusGuards::VALIDATION)
            .await?;
        Ok(response.article)
    }

    pub async fn unfavorite(&self, slug: &str) -> ConduitResult<Article> {
        let path = format!("/articles/{}/favorite", segment(slug));
        let response: SingleArticleResponse = self
            .request(Method::Delete, &path, None, StatusGuards::NONE)
            .await?;
        Ok(response.article)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockResponse;
    use crate::api::test_support::*;
    use crate::error::ErrorKind;
    use crate::models::fixtures;

    #[test]
    fn test_source_paths() {
        assert_eq!(ArticleSource::All.path(0), "/articles?limit=10&offset=0");
        assert_eq!(ArticleSource::Feed.path(2), "/articles/feed?limit=10&offset=20");
        assert_eq!(
            ArticleSource::Tag("c++".into()).path(1),
            "/articles?tag=c%2B%2B&limit=10&offset=10"
        );
        assert_eq!(
            ArticleSource::Author("jane doe".into()).path(3),
            "/articles?author=jane%20doe&limit=5&offset=15"
        );
        assert_eq!(
            ArticleSource::Favorites("jake".into()).path(0),
            "/articles?favorited=jake&limit=5&offset=0"
        );
    }

    #[tokio::test]
    async fn test_list_articles() {
        let (client, http) = client();
        http.set_response(
            Method::Get,
            &url("/articles?limit=10&offset=10"),
            MockResponse::json(200, fixtures::articles_json(&["a", "b"], 12)),
        );
        let page = client.list_articles(&ArticleSource::All, 1).await.unwrap();
        assert_eq!(page.articles.len(), 2);
        assert_eq!(page.articles_count, 12);
    }

    #[tokio::test]
    async fn test_list_articles_500_is_generic() {
        let (client, http) = client();
        http.set_default_response(MockResponse::text(500, ""));
        let err = client.list_articles(&ArticleSource::Feed, 0).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("{} => 500 Internal Server Error", url("/articles/feed?limit=10&offset=0"))
        );
    }

    #[tokio::test]
    async fn test_get_article_404() {
        let (client, http) = client();
        http.set_response(Method::Get, &url("/articles/missing"), MockResponse::text(404, ""));
        let err = client.get_article("missing").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_create_article_422() {
        let (client, http) = client();
        http.set_response(
            Method::Post,
            &url("/articles"),
            MockResponse::json(422, serde_json::json!({"errors": {"title": ["can't be blank"]}})),
        );
        let err = client.create_article(&ArticleDraft::default()).await.unwrap_err();
        assert_eq!(err.as_validation().unwrap().field("title"), ["can't be blank".to_string()]);
        assert_eq!(http.get_requests()[0].json()["article"]["tagList"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_update_article_sends_draft_without_slug() {
        let (client, http) = client();
        http.set_response(
            Method::Put,
            &url("/articles/a"),
            MockResponse::json(200, serde_json::json!({"article": fixtures::article_json("a", false, 0)})),
        );
        let draft = fixtures::article("a", false, 0).draft();
        let article = client.update_article("a", &draft).await.unwrap();
        assert_eq!(article.slug, "a");
        assert!(http.get_requests()[0].json()["article"].get("slug").is_none());
    }

    #[tokio::test]
    async fn test_delete_article_ignores_body() {
        let (client, http) = client();
        http.set_response(Method::Delete, &url("/articles/a"), MockResponse::text(200, "not json"));
        assert!(client.delete_article("a").await.is_ok());

        http.set_response(Method::Delete, &url("/articles/a"), MockResponse::text(403, ""));
        let err = client.delete_article("a").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Status);
    }

    #[tokio::test]
    async fn test_favorite_and_unfavorite() {
        let (client, http) = client();
        http.set_response(
            Method::Post,
            &url("/articles/a/favorite"),
            MockResponse::json(200, serde_json::json!({"article": fixtures::article_json("a", true, 1)})),
        );
        http.set_response(
            Method::Delete,
            &url("/articles/a/favorite"),
            MockResponse::text(422, r#"{"errors":{"article":["not favorited"]}}"#),
        );

        assert!(client.favorite("a").await.unwrap().favorited);
        // unfavorite has no validation guard
        let err = client.unfavorite("a").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Status);
    }
}
