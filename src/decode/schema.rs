//! Structural JSON schemas.
//!
//! A [`Schema`] describes the shape a JSON payload must have before it is
//! handed to serde. Validation walks the whole value and records every
//! mismatch with its path, so a bad payload reports all of its problems at
//! once instead of only the first one serde trips over.

use serde_json::Value;

/// Shape of a JSON value.
#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    String,
    Number,
    Boolean,
    Null,
    /// Homogeneous array.
    Array(Box<Schema>),
    /// Object with arbitrary string keys and uniform values.
    Dictionary(Box<Schema>),
    /// Object with required fields. Extra fields are allowed.
    Object(Vec<(&'static str, Schema)>),
    /// Any of the alternatives.
    Union(Vec<Schema>),
}

impl Schema {
    pub fn array(item: Schema) -> Self {
        Schema::Array(Box::new(item))
    }

    pub fn dictionary(value: Schema) -> Self {
        Schema::Dictionary(Box::new(value))
    }

    pub fn object(fields: impl IntoIterator<Item = (&'static str, Schema)>) -> Self {
        Schema::Object(fields.into_iter().collect())
    }

    /// `T | null`
    pub fn nullable(inner: Schema) -> Self {
        Schema::Union(vec![inner, Schema::Null])
    }

    /// Combine two object schemas into one with the fields of both.
    ///
    /// Non-object schemas are returned as a union.
    pub fn intersect(self, other: Schema) -> Self {
        match (self, other) {
            (Schema::Object(mut left), Schema::Object(right)) => {
                for (name, schema) in right {
                    left.retain(|(existing, _)| *existing != name);
                    left.push((name, schema));
                }
                Schema::Object(left)
            }
            (left, right) => Schema::Union(vec![left, right]),
        }
    }

    /// Short type name used in diagnostics.
    pub fn describe(&self) -> String {
        match self {
            Schema::String => "string".to_string(),
            Schema::Number => "number".to_string(),
            Schema::Boolean => "boolean".to_string(),
            Schema::Null => "null".to_string(),
            Schema::Array(item) => format!("Array<{}>", item.describe()),
            Schema::Dictionary(value) => format!("{{ [key: string]: {} }}", value.describe()),
            Schema::Object(fields) => {
                let inner: Vec<String> = fields
                    .iter()
                    .map(|(name, schema)| format!("{}: {}", name, schema.describe()))
                    .collect();
                format!("{{ {} }}", inner.join(", "))
            }
            Schema::Union(options) => options
                .iter()
                .map(Schema::describe)
                .collect::<Vec<_>>()
                .join(" | "),
        }
    }

    /// Validate `value`, returning one message per failing path.
    pub fn validate(&self, value: &Value) -> Vec<String> {
        let mut errors = Vec::new();
        let mut path = Vec::new();
        self.check(Some(value), &mut path, &mut errors);
        errors
    }

    pub fn is_valid(&self, value: &Value) -> bool {
        self.validate(value).is_empty()
    }

    fn check(&self, value: Option<&Value>, path: &mut Vec<PathSegment>, errors: &mut Vec<String>) {
        let Some(value) = value else {
            errors.push(mismatch("undefined", path, self));
            return;
        };

        match (self, value) {
            (Schema::String, Value::String(_))
            | (Schema::Number, Value::Number(_))
            | (Schema::Boolean, Value::Bool(_))
            | (Schema::Null, Value::Null) => {}
            (Schema::Array(item), Value::Array(items)) => {
                for (index, element) in items.iter().enumerate() {
                    path.push(PathSegment::Index(index));
                    item.check(Some(element), path, errors);
                    path.pop();
                }
            }
            (Schema::Dictionary(item), Value::Object(map)) => {
                for (key, element) in map {
                    path.push(PathSegment::Key(key.clone()));
                    item.check(Some(element), path, errors);
                    path.pop();
                }
            }
            (Schema::Object(fields), Value::Object(map)) => {
                for (name, field) in fields {
                    path.push(PathSegment::Key((*name).to_string()));
                    field.check(map.get(*name), path, errors);
                    path.pop();
                }
            }
            (Schema::Union(options), value) => {
                if !options.iter().any(|option| option.is_valid(value)) {
                    errors.push(mismatch(&preview(value), path, self));
                }
            }
            (schema, value) => errors.push(mismatch(&preview(value), path, schema)),
        }
    }
}

#[derive(Debug, Clone)]
enum PathSegment {
    Key(String),
    Index(usize),
}

fn render_path(path: &[PathSegment]) -> String {
    if path.is_empty() {
        return "<root>".to_string();
    }
    let mut out = String::new();
    for segment in path {
        match segment {
            PathSegment::Key(key) => {
                if !out.is_empty() {
                    out.push('.');
                }
                out.push_str(key);
            }
            PathSegment::Index(index) => out.push_str(&format!("[{}]", index)),
        }
    }
    out
}

fn mismatch(found: &str, path: &[PathSegment], expected: &Schema) -> String {
    format!(
        "Invalid value {} supplied to {} (expected {})",
        found,
        render_path(path),
        expected.describe()
    )
}

/// Compact rendering of an offending value for diagnostics.
fn preview(value: &Value) -> String {
    const LIMIT: usize = 60;
    let text = value.to_string();
    if text.chars().count() <= LIMIT {
        text
    } else {
        let truncated: String = text.chars().take(LIMIT).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user_schema() -> Schema {
        Schema::object([
            ("email", Schema::String),
            ("username", Schema::String),
            ("bio", Schema::nullable(Schema::String)),
        ])
    }

    #[test]
    fn test_valid_object() {
        let value = json!({"email": "a@b.c", "username": "jake", "bio": null, "extra": 1});
        assert!(user_schema().validate(&value).is_empty());
    }

    #[test]
    fn test_missing_field_reports_path() {
        let value = json!({"email": "a@b.c", "bio": null});
        let errors = user_schema().validate(&value);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("username"), "{}", errors[0]);
        assert!(errors[0].contains("undefined"));
    }

    #[test]
    fn test_reports_every_failing_path() {
        let value = json!({"email": 5, "username": false, "bio": 3});
        let errors = user_schema().validate(&value);
        assert_eq!(errors.len(), 3);
        assert!(errors[0].contains("email"));
        assert!(errors[1].contains("username"));
        assert!(errors[2].contains("bio"));
        assert!(errors[2].contains("string | null"));
    }

    #[test]
    fn test_nested_array_paths() {
        let schema = Schema::object([("articles", Schema::array(user_schema()))]);
        let value = json!({"articles": [
            {"email": "a", "username": "b", "bio": null},
            {"email": "a", "bio": null}
        ]});
        let errors = schema.validate(&value);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("articles[1].username"), "{}", errors[0]);
    }

    #[test]
    fn test_dictionary() {
        let schema = Schema::dictionary(Schema::array(Schema::String));
        assert!(schema.is_valid(&json!({"email": ["is invalid"]})));
        let errors = schema.validate(&json!({"email": ["ok", 1]}));
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("email[1]"));
    }

    #[test]
    fn test_root_mismatch() {
        let errors = Schema::String.validate(&json!(12));
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("<root>"));
    }

    #[test]
    fn test_intersect_merges_fields() {
        let merged = user_schema().intersect(Schema::object([("token", Schema::String)]));
        let value = json!({"email": "a", "username": "b", "bio": null});
        let errors = merged.validate(&value);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("token"));
    }

    #[test]
    fn test_preview_truncates_long_values() {
        let long = "x".repeat(200);
        let errors = Schema::Number.validate(&json!(long));
        assert!(errors[0].contains("..."));
    }
}
