//! Attribute schema hosts use to declare the data source

use serde::Serialize;

use crate::types::ProfileField;

/// Name of the list attribute holding the flattened profiles
pub const PROFILES_ATTRIBUTE: &str = "profiles";

/// One string attribute of a profile element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AttributeSchema {
    pub name: &'static str,
    /// Always true: every value is read from the file, never set by the user
    pub computed: bool,
    pub sensitive: bool,
}

impl From<ProfileField> for AttributeSchema {
    fn from(field: ProfileField) -> Self {
        Self {
            name: field.key(),
            computed: true,
            sensitive: field.is_sensitive(),
        }
    }
}

/// Element schema of the `profiles` list, in declaration order
pub fn profiles_schema() -> Vec<AttributeSchema> {
    ProfileField::ALL.into_iter().map(AttributeSchema::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_schema() {
        let schema = profiles_schema();
        let names: Vec<_> = schema.iter().map(|a| a.name).collect();
        assert_eq!(
            names,
            vec!["name", "aws_access_key_id", "aws_secret_access_key", "aws_session_token", "region"]
        );
        assert!(schema.iter().all(|a| a.computed));
        assert_eq!(schema.iter().filter(|a| a.sensitive).count(), 2);
    }
}
