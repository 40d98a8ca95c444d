//! Authentication for DriveDesk.
//!
//! Signing in stores the returned user and bearer token in the local cache
//! under the keys the storefront reads (`user`, `authToken`, `adminToken`).
//! Credentials are checked by the rental API; nothing is verified locally.

pub mod api;
pub mod error;
pub mod registration;

pub use api::{AdminAccount, AdminLogin, AuthApi, Credentials, RegisteredUser, UserLogin};
pub use error::{AuthError, AuthResult};
pub use registration::{RegistrationErrors, RegistrationForm};

use drive_cache::Cache;
use drive_commerce::nav::Route;
use drive_commerce::session::{SessionStore, SessionUser};
use tracing::{info, warn};

/// Sign-in, sign-up and sign-out against an [`AuthApi`].
pub struct Authenticator<A> {
    api: A,
    sessions: SessionStore,
}

impl<A: AuthApi> Authenticator<A> {
    pub fn new(api: A, cache: Cache) -> Self {
        Self {
            api,
            sessions: SessionStore::new(cache),
        }
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub fn current_user(&self) -> AuthResult<Option<SessionUser>> {
        Ok(self.sessions.current_user()?)
    }

    /// Sign a visitor in and return to the catalog.
    pub async fn login(&self, credentials: &Credentials) -> AuthResult<(SessionUser, Route)> {
        if !credentials.is_complete() {
            return Err(AuthError::MissingCredentials);
        }
        let login = self.api.login_user(credentials).await.inspect_err(|err| {
            warn!(email = %credentials.email, error = %err, "login failed");
        })?;

        self.sessions.save_auth_token(&login.token)?;
        self.sessions.save_user(&login.user)?;
        info!(user = %login.user.id, "signed in");
        Ok((login.user, Route::Catalog))
    }

    /// Sign an administrator in and open the dashboard.
    pub async fn admin_login(&self, credentials: &Credentials) -> AuthResult<(AdminAccount, Route)> {
        if !credentials.is_complete() {
            return Err(AuthError::MissingCredentials);
        }
        let login = self.api.login_admin(credentials).await.inspect_err(|err| {
            warn!(email = %credentials.email, error = %err, "admin login failed");
        })?;

        self.sessions.save_admin_token(&login.token)?;
        info!(admin = %login.admin.id, "admin signed in");
        Ok((login.admin, Route::AdminDashboard))
    }

    /// Create an account, then send the visitor to the login page.
    pub async fn register(&self, form: &RegistrationForm) -> AuthResult<(RegisteredUser, Route)> {
        let new_user = form.validate().map_err(AuthError::InvalidRegistration)?;
        let user = self.api.register(&new_user).await?;
        info!(user = %user.id, "registered");
        Ok((user, Route::Login))
    }

    /// Forget the user and both tokens.
    pub fn logout(&self) -> AuthResult<Route> {
        self.sessions.clear()?;
        info!("signed out");
        Ok(Route::Catalog)
    }
}
