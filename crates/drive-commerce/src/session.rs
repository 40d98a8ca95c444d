//! The signed-in visitor as seen by the storefront.
//!
//! Login stores the user record and its bearer token in the local cache;
//! the booking flow only ever reads them.

use drive_cache::{Cache, CacheError, TypedKey};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::ids::UserId;

/// Identity record written at login.
///
/// Only `id` and `name` are read by the storefront. Anything else the API
/// returned is kept so that it survives a load/store cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: UserId,
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SessionUser {
    pub fn new(id: impl Into<UserId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            extra: Map::new(),
        }
    }

    /// Read a string field returned alongside id and name (e.g. "email").
    pub fn field(&self, name: &str) -> Option<&str> {
        self.extra.get(name).and_then(Value::as_str)
    }
}

/// Storage key for the signed-in user.
pub const SESSION_USER: TypedKey<SessionUser> = TypedKey::new("user");
/// Storage key for the user bearer token.
pub const AUTH_TOKEN: TypedKey<String> = TypedKey::new("authToken");
/// Storage key for the admin bearer token.
pub const ADMIN_TOKEN: TypedKey<String> = TypedKey::new("adminToken");

/// Typed access to the session entries of a [`Cache`].
#[derive(Clone)]
pub struct SessionStore {
    cache: Cache,
}

impl SessionStore {
    pub fn new(cache: Cache) -> Self {
        Self { cache }
    }

    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    pub fn current_user(&self) -> Result<Option<SessionUser>, CacheError> {
        self.cache.load(&SESSION_USER)
    }

    pub fn save_user(&self, user: &SessionUser) -> Result<(), CacheError> {
        self.cache.store(&SESSION_USER, user)
    }

    pub fn auth_token(&self) -> Result<Option<String>, CacheError> {
        self.cache.load(&AUTH_TOKEN)
    }

    pub fn save_auth_token(&self, token: &str) -> Result<(), CacheError> {
        self.cache.store(&AUTH_TOKEN, &token.to_string())
    }

    pub fn admin_token(&self) -> Result<Option<String>, CacheError> {
        self.cache.load(&ADMIN_TOKEN)
    }

    pub fn save_admin_token(&self, token: &str) -> Result<(), CacheError> {
        self.cache.store(&ADMIN_TOKEN, &token.to_string())
    }

    /// Remove the user, user token and admin token.
    pub fn clear(&self) -> Result<(), CacheError> {
        self.cache.clear(&SESSION_USER)?;
        self.cache.clear(&AUTH_TOKEN)?;
        self.cache.clear(&ADMIN_TOKEN)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_user_keeps_extra_fields() {
        let raw = r#"{"id":"U1","name":"Asha","email":"asha@example.com"}"#;
        let user: SessionUser = serde_json::from_str(raw).unwrap();
        assert_eq!(user.id, UserId::new("U1"));
        assert_eq!(user.field("email"), Some("asha@example.com"));

        let back: Value = serde_json::to_value(&user).unwrap();
        assert_eq!(back["email"], "asha@example.com");
    }

    #[test]
    fn test_session_store_roundtrip_and_clear() {
        let store = SessionStore::new(Cache::in_memory());
        assert!(store.current_user().unwrap().is_none());

        store.save_user(&SessionUser::new("U1", "Asha")).unwrap();
        store.save_auth_token("user-jwt").unwrap();
        store.save_admin_token("admin-jwt").unwrap();
        assert_eq!(store.current_user().unwrap().unwrap().name, "Asha");
        assert_eq!(store.auth_token().unwrap().as_deref(), Some("user-jwt"));

        store.clear().unwrap();
        assert!(store.current_user().unwrap().is_none());
        assert!(store.auth_token().unwrap().is_none());
        assert!(store.admin_token().unwrap().is_none());
    }
}
