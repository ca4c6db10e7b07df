use serde::{Deserialize, Serialize};

use crate::decode::{Decode, Schema};

/// A registered user as the API describes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub username: String,
    pub image: Option<String>,
    pub bio: Option<String>,
}

/// The authenticated user, carrying the session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserWithToken {
    pub email: String,
    pub username: String,
    pub image: Option<String>,
    pub bio: Option<String>,
    pub token: String,
}

impl UserWithToken {
    pub fn user(&self) -> User {
        User {
            email: self.email.clone(),
            username: self.username.clone(),
            image: self.image.clone(),
            bio: self.bio.clone(),
        }
    }
}

/// Body of `PUT /user`. The password is only sent when it was changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserUpdate {
    pub email: String,
    pub username: String,
    pub image: Option<String>,
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl UserUpdate {
    /// Start from the current profile values with no password change.
    pub fn from_user(user: &User) -> Self {
        Self {
            email: user.email.clone(),
            username: user.username.clone(),
            image: user.image.clone(),
            bio: user.bio.clone(),
            password: None,
        }
    }

    /// Set a new password; an empty string means "unchanged".
    pub fn with_password(mut self, password: &str) -> Self {
        self.password = if password.is_empty() {
            None
        } else {
            Some(password.to_string())
        };
        self
    }
}

impl Decode for User {
    fn schema() -> Schema {
        Schema::object([
            ("email", Schema::String),
            ("username", Schema::String),
            ("image", Schema::nullable(Schema::String)),
            ("bio", Schema::nullable(Schema::String)),
        ])
    }
}

impl Decode for UserWithToken {
    fn schema() -> Schema {
        User::schema().intersect(Schema::object([("token", Schema::String)]))
    }
}
