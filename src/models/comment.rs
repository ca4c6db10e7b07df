use serde::{Deserialize, Serialize};

use super::Profile;
use crate::decode::{Decode, Schema};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u64,
    pub created_at: String,
    pub updated_at: String,
    pub body: String,
    pub author: Profile,
}

impl Decode for Comment {
    fn schema() -> Schema {
        Schema::object([
            ("id", Schema::Number),
            ("createdAt", Schema::String),
            ("updatedAt", Schema::String),
            ("body", Schema::String),
            ("author", Profile::schema()),
        ])
    }
}
