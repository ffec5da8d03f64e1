//! User - Registration Input and Server Records

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// One of the three registration inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Password,
}

impl FormField {
    /// All fields in form order
    pub const ALL: [FormField; 3] = [FormField::Name, FormField::Email, FormField::Password];

    /// Stable key, used for element ids and translation lookups
    pub fn key(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Password => "password",
        }
    }

    /// Join field keys for messages ("name, email")
    pub fn join(fields: &[FormField]) -> String {
        fields
            .iter()
            .map(|f| f.key())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Raw values held by the three inputs
#[derive(Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for FormInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormInput")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password_len", &self.password.len())
            .finish()
    }
}

impl FormInput {
    /// Get the value of a field
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Password => &self.password,
        }
    }

    /// Replace the value of a field
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Password => &mut self.password,
        };
        *slot = value.into();
    }

    /// Empty all three fields
    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.password.clear();
    }

    /// Whether every field is empty
    pub fn is_blank(&self) -> bool {
        FormField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Fields with an empty value, in form order
    ///
    /// Only the empty string counts as missing; whitespace is kept as typed.
    pub fn missing_fields(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|f| self.get(*f).is_empty())
            .collect()
    }

    /// Capture the inputs as a registration payload
    pub fn capture(&self) -> Result<NewUser, ValidationError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields { missing });
        }

        Ok(NewUser {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

/// Body of the create-request
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Identifier assigned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{n}"),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

/// A user as returned by the backend after creation
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Any other fields the backend sends back
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRecord")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("extra", &self.extra)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormInput {
        FormInput {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "secret".to_string(),
        }
    }

    #[test]
    fn test_capture_complete_input() {
        let user = filled().capture().expect("all fields are set");
        assert_eq!(user.name, "Ada");
        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.password, "secret");
    }

    #[test]
    fn test_capture_reports_missing_in_form_order() {
        let mut input = filled();
        input.set(FormField::Password, "");
        input.set(FormField::Name, "");

        let err = input.capture().expect_err("two fields are empty");
        assert_eq!(
            err,
            ValidationError::MissingFields {
                missing: vec![FormField::Name, FormField::Password],
            }
        );
        assert_eq!(err.to_string(), "Missing required fields: name, password");
    }

    #[test]
    fn test_whitespace_is_not_trimmed() {
        let mut input = filled();
        input.set(FormField::Email, "   ");
        assert!(input.missing_fields().is_empty());
        assert_eq!(input.capture().map(|u| u.email), Ok("   ".to_string()));
    }

    #[test]
    fn test_clear() {
        let mut input = filled();
        assert!(!input.is_blank());
        input.clear();
        assert!(input.is_blank());
        assert_eq!(input.missing_fields(), FormField::ALL.to_vec());
    }

    #[test]
    fn test_new_user_body_and_debug() {
        let user = filled().capture().expect("all fields are set");
        let body = serde_json::to_value(&user).expect("serializable");
        assert_eq!(
            body,
            serde_json::json!({"name": "Ada", "email": "ada@example.com", "password": "secret"})
        );

        let debug = format!("{user:?}");
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("secret"));
    }

    #[test]
    fn test_record_with_numeric_id() {
        let record: UserRecord = serde_json::from_str(
            r#"{"name":"Ada","email":"ada@example.com","password":"secret","id":1}"#,
        )
        .expect("valid record");
        assert_eq!(record.id, Some(RecordId::Number(1)));
        assert_eq!(record.password.as_deref(), Some("secret"));
        assert!(record.extra.is_empty());
        assert!(!format!("{record:?}").contains("secret"));
    }

    #[test]
    fn test_record_with_document_id_and_extra_fields() {
        let record: UserRecord = serde_json::from_str(
            r#"{"_id":"65f0c1","name":"Ada","email":"ada@example.com","createdAt":"2024-01-01"}"#,
        )
        .expect("valid record");
        assert_eq!(record.id, Some(RecordId::Text("65f0c1".to_string())));
        assert_eq!(record.id.as_ref().map(|id| id.to_string()).as_deref(), Some("65f0c1"));
        assert_eq!(record.password, None);
        assert_eq!(record.extra.get("createdAt"), Some(&serde_json::json!("2024-01-01")));
    }

    #[test]
    fn test_record_requires_name_and_email() {
        let result = serde_json::from_str::<UserRecord>(r#"{"id":1,"name":"Ada"}"#);
        assert!(result.is_err());
    }
}
