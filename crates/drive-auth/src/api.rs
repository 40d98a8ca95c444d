//! The sign-in mutations.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use drive_commerce::admin::NewUser;
use drive_commerce::api::ApiError;
use drive_commerce::session::SessionUser;
use serde::{Deserialize, Serialize};

/// Email and password as typed into a login form.
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.email.trim().is_empty() && !self.password.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// `loginUser` payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserLogin {
    pub token: String,
    pub user: SessionUser,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminAccount {
    pub id: String,
    pub email: String,
}

/// `loginAdmin` payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AdminLogin {
    pub token: String,
    pub admin: AdminAccount,
}

/// `createUser` payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RegisteredUser {
    pub id: String,
    pub name: String,
    pub email: String,
}

#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn login_user(&self, credentials: &Credentials) -> Result<UserLogin, ApiError>;
    async fn login_admin(&self, credentials: &Credentials) -> Result<AdminLogin, ApiError>;
    async fn register(&self, user: &NewUser) -> Result<RegisteredUser, ApiError>;
}

#[async_trait]
impl<T: AuthApi + ?Sized> AuthApi for Arc<T> {
    async fn login_user(&self, credentials: &Credentials) -> Result<UserLogin, ApiError> {
        (**self).login_user(credentials).await
    }

    async fn login_admin(&self, credentials: &Credentials) -> Result<AdminLogin, ApiError> {
        (**self).login_admin(credentials).await
    }

    async fn register(&self, user: &NewUser) -> Result<RegisteredUser, ApiError> {
        (**self).register(user).await
    }
}
