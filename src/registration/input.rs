//! Registration input

use serde::{Deserialize, Serialize};

/// Account fields collected by the registration form.
///
/// Serialized with camelCase keys, which is the JSON body the registration
/// endpoint expects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationInput {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub middle_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub occupation: String,
}

impl RegistrationInput {
    /// Input with credentials only; the profile fields are left empty
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            ..Default::default()
        }
    }

    /// Set first, middle and last name
    pub fn name(
        mut self,
        first: impl Into<String>,
        middle: impl Into<String>,
        last: impl Into<String>,
    ) -> Self {
        self.first_name = first.into();
        self.middle_name = middle.into();
        self.last_name = last.into();
        self
    }

    pub fn occupation(mut self, occupation: impl Into<String>) -> Self {
        self.occupation = occupation.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format() {
        let input = RegistrationInput::new("ada@example.com", "analytical")
            .name("Ada", "King", "Lovelace")
            .occupation("Mathematician");

        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "email": "ada@example.com",
                "password": "analytical",
                "firstName": "Ada",
                "middleName": "King",
                "lastName": "Lovelace",
                "occupation": "Mathematician",
            })
        );
    }

    #[test]
    fn test_profile_fields_optional_on_decode() {
        let input: RegistrationInput =
            serde_json::from_str(r#"{"email":"a@b.io","password":"12345678"}"#).unwrap();
        assert_eq!(input, RegistrationInput::new("a@b.io", "12345678"));
    }
}
