//! Profile record and field descriptors

use serde::{Deserialize, Serialize};

/// Placeholder shown in place of sensitive values
const REDACTED: &str = "***";

/// A single named profile from a shared credentials file
///
/// Every field is a plain string; fields that never appeared in the file
/// stay empty. The secret access key and session token are sensitive and
/// are redacted from `Debug` output.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Section name, e.g. `default` for `[default]`
    pub name: String,
    pub aws_access_key_id: String,
    pub aws_secret_access_key: String,
    pub aws_session_token: String,
    pub region: String,
}

impl Profile {
    /// Create an empty profile with the given section name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the access key id
    pub fn with_access_key_id(mut self, value: impl Into<String>) -> Self {
        self.aws_access_key_id = value.into();
        self
    }

    /// Set the secret access key
    pub fn with_secret_access_key(mut self, value: impl Into<String>) -> Self {
        self.aws_secret_access_key = value.into();
        self
    }

    /// Set the session token
    pub fn with_session_token(mut self, value: impl Into<String>) -> Self {
        self.aws_session_token = value.into();
        self
    }

    /// Set the region
    pub fn with_region(mut self, value: impl Into<String>) -> Self {
        self.region = value.into();
        self
    }

    /// Read a field by descriptor
    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::AccessKeyId => &self.aws_access_key_id,
            ProfileField::SecretAccessKey => &self.aws_secret_access_key,
            ProfileField::SessionToken => &self.aws_session_token,
            ProfileField::Region => &self.region,
        }
    }

    /// Assign a field by descriptor
    pub fn set(&mut self, field: ProfileField, value: impl Into<String>) {
        let slot = match field {
            ProfileField::Name => &mut self.name,
            ProfileField::AccessKeyId => &mut self.aws_access_key_id,
            ProfileField::SecretAccessKey => &mut self.aws_secret_access_key,
            ProfileField::SessionToken => &mut self.aws_session_token,
            ProfileField::Region => &mut self.region,
        };
        *slot = value.into();
    }

    /// Whether this profile carries a session token (temporary credentials)
    pub fn has_session_token(&self) -> bool {
        !self.aws_session_token.is_empty()
    }
}

fn redact(value: &str) -> &str {
    if value.is_empty() {
        value
    } else {
        REDACTED
    }
}

impl std::fmt::Debug for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Profile")
            .field("name", &self.name)
            .field("aws_access_key_id", &self.aws_access_key_id)
            .field("aws_secret_access_key", &redact(&self.aws_secret_access_key))
            .field("aws_session_token", &redact(&self.aws_session_token))
            .field("region", &self.region)
            .finish()
    }
}

/// The named fields of a [`Profile`], in schema order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Name,
    AccessKeyId,
    SecretAccessKey,
    SessionToken,
    Region,
}

impl ProfileField {
    /// All fields in the order a host declares them
    pub const ALL: [ProfileField; 5] = [
        ProfileField::Name,
        ProfileField::AccessKeyId,
        ProfileField::SecretAccessKey,
        ProfileField::SessionToken,
        ProfileField::Region,
    ];

    /// Key used in flattened records and in the credentials file
    pub fn key(&self) -> &'static str {
        match self {
            ProfileField::Name => "name",
            ProfileField::AccessKeyId => "aws_access_key_id",
            ProfileField::SecretAccessKey => "aws_secret_access_key",
            ProfileField::SessionToken => "aws_session_token",
            ProfileField::Region => "region",
        }
    }

    /// Whether hosts should hide this value from plans and logs
    pub fn is_sensitive(&self) -> bool {
        matches!(self, ProfileField::SecretAccessKey | ProfileField::SessionToken)
    }
}

impl std::fmt::Display for ProfileField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_builder() {
        let profile = Profile::new("dev")
            .with_access_key_id("AKIDEXAMPLE")
            .with_secret_access_key("secret")
            .with_region("eu-west-1");

        assert_eq!(profile.name, "dev");
        assert_eq!(profile.get(ProfileField::AccessKeyId), "AKIDEXAMPLE");
        assert_eq!(profile.get(ProfileField::Region), "eu-west-1");
        assert!(!profile.has_session_token());
    }

    #[test]
    fn test_set_by_field() {
        let mut profile = Profile::new("dev");
        profile.set(ProfileField::SessionToken, "token");
        assert_eq!(profile.aws_session_token, "token");
        assert!(profile.has_session_token());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let profile = Profile::new("dev")
            .with_access_key_id("AKIDEXAMPLE")
            .with_secret_access_key("wJalrXUtnFEMI")
            .with_session_token("FwoGZXIvYXdz");

        let debug = format!("{:?}", profile);
        assert!(debug.contains("AKIDEXAMPLE"));
        assert!(!debug.contains("wJalrXUtnFEMI"));
        assert!(!debug.contains("FwoGZXIvYXdz"));
        assert!(debug.contains("***"));
    }

    #[test]
    fn test_debug_leaves_empty_secrets_empty() {
        let debug = format!("{:?}", Profile::new("dev"));
        assert!(!debug.contains("***"));
    }

    #[test]
    fn test_sensitive_fields() {
        let sensitive: Vec<_> = ProfileField::ALL
            .iter()
            .filter(|f| f.is_sensitive())
            .map(|f| f.key())
            .collect();
        assert_eq!(sensitive, vec!["aws_secret_access_key", "aws_session_token"]);
    }

    #[test]
    fn test_serde_field_names() {
        let profile = Profile::new("dev").with_access_key_id("AKID");
        let json = serde_json::to_value(&profile).unwrap();
        for field in ProfileField::ALL {
            assert!(json.get(field.key()).is_some(), "missing {}", field);
        }
        assert_eq!(json["aws_access_key_id"], "AKID");
    }
}
