//! Screen addresses.
//!
//! Every screen is reachable through a path like the ones the web client
//! used, so navigation requests and the `--route` style deep links share one
//! parser.

use std::fmt;

/// A screen of the application.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Login,
    Register,
    Settings,
    /// New article.
    Editor,
    EditArticle(String),
    Article(String),
    Profile(String),
    ProfileFavorites(String),
    NotFound(String),
}

impl Route {
    /// Parse a path such as `/article/how-to` or `/@jake/favorites`.
    ///
    /// Unknown paths map to [`Route::NotFound`] carrying the input.
    pub fn parse(path: &str) -> Route {
        let trimmed = path.trim();
        let without_query = trimmed.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = without_query
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["login"] => Route::Login,
            ["register"] => Route::Register,
            ["settings"] => Route::Settings,
            ["editor"] => Route::Editor,
            ["editor", slug] => Route::EditArticle(decode(slug)),
            ["article", slug] => Route::Article(decode(slug)),
            [user] if user.len() > 1 && user.starts_with('@') => Route::Profile(decode(&user[1..])),
            [user, "favorites"] if user.len() > 1 && user.starts_with('@') => {
                Route::ProfileFavorites(decode(&user[1..]))
            }
            _ => Route::NotFound(trimmed.to_string()),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::Settings => "/settings".to_string(),
            Route::Editor => "/editor".to_string(),
            Route::EditArticle(slug) => format!("/editor/{}", urlencoding::encode(slug)),
            Route::Article(slug) => format!("/article/{}", urlencoding::encode(slug)),
            Route::Profile(username) => format!("/@{}", urlencoding::encode(username)),
            Route::ProfileFavorites(username) => {
                format!("/@{}/favorites", urlencoding::encode(username))
            }
            Route::NotFound(path) => path.clone(),
        }
    }

    /// Screens only a logged-in user can use.
    pub fn requires_login(&self) -> bool {
        matches!(self, Route::Settings | Route::Editor | Route::EditArticle(_))
    }

    /// Screens only a guest should see.
    pub fn guest_only(&self) -> bool {
        matches!(self, Route::Login | Route::Register)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

fn decode(segment: &str) -> String {
    urlencoding::decode(segment)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| segment.to_string())
}
