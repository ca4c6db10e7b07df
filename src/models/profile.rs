use serde::{Deserialize, Serialize};

use crate::decode::{Decode, Schema};

/// Public view of a user, relative to the viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub username: String,
    pub bio: Option<String>,
    pub image: Option<String>,
    pub following: bool,
}

impl Decode for Profile {
    fn schema() -> Schema {
        Schema::object([
            ("username", Schema::String),
            ("bio", Schema::nullable(Schema::String)),
            ("image", Schema::nullable(Schema::String)),
            ("following", Schema::Boolean),
        ])
    }
}
