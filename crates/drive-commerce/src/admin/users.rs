use serde::{Deserialize, Serialize};

use crate::ids::UserId;
use crate::CommerceError;

/// Password given to users created from the admin dashboard unless a real
/// one is supplied.
pub const DEFAULT_PLACEHOLDER_PASSWORD: &str = "defaultPassword";

/// Admin-side defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminPolicy {
    placeholder_password: Option<String>,
}

impl AdminPolicy {
    /// An empty placeholder disables it; admins then have to supply a
    /// password for every new user.
    pub fn new(placeholder_password: Option<String>) -> Self {
        Self {
            placeholder_password: placeholder_password.filter(|p| !p.is_empty()),
        }
    }

    pub fn placeholder_password(&self) -> Option<&str> {
        self.placeholder_password.as_deref()
    }
}

impl Default for AdminPolicy {
    fn default() -> Self {
        Self::new(Some(DEFAULT_PLACEHOLDER_PASSWORD.to_string()))
    }
}

/// Editable user fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub pincode: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    #[serde(flatten)]
    pub profile: UserProfile,
}

/// Variables of the `createUser` mutation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewUser {
    #[serde(flatten)]
    pub profile: UserProfile,
    pub password: String,
}

impl NewUser {
    pub fn with_password(profile: UserProfile, password: impl Into<String>) -> Self {
        Self {
            profile,
            password: password.into(),
        }
    }

    /// Create with the policy's placeholder password.
    pub fn from_profile(profile: UserProfile, policy: &AdminPolicy) -> Result<Self, CommerceError> {
        let password = policy
            .placeholder_password()
            .ok_or(CommerceError::PasswordRequired)?;
        Ok(Self::with_password(profile, password))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile {
            name: "Asha".into(),
            email: "asha@example.com".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_policy_uses_placeholder() {
        let user = NewUser::from_profile(profile(), &AdminPolicy::default()).unwrap();
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["password"], DEFAULT_PLACEHOLDER_PASSWORD);
        assert_eq!(json["name"], "Asha");
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_disabled_placeholder_requires_password() {
        let policy = AdminPolicy::new(Some(String::new()));
        assert!(matches!(
            NewUser::from_profile(profile(), &policy),
            Err(CommerceError::PasswordRequired)
        ));
    }

    #[test]
    fn test_user_record_profile_excludes_id() {
        let record: UserRecord =
            serde_json::from_str(r#"{"id":"U1","name":"Asha","email":"a@b.co","pincode":"411001"}"#)
                .unwrap();
        let json = serde_json::to_value(&record.profile).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["pincode"], "411001");
    }
}
