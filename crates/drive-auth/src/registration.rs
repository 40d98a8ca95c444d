//! Sign-up form validation.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use drive_commerce::admin::{NewUser, UserProfile};
use regex::Regex;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("valid regex"));
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{10}$").expect("valid regex"));
static PINCODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{6}$").expect("valid regex"));

/// Minimum password length.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Field name to message, sorted by field name.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegistrationErrors(BTreeMap<&'static str, &'static str>);

impl RegistrationErrors {
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }
}

impl fmt::Display for RegistrationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.0.values().copied().collect();
        f.write_str(&messages.join("; "))
    }
}

/// Everything the sign-up page collects.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub pincode: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationForm {
    /// Check every field and collect all problems at once.
    pub fn validate(&self) -> Result<NewUser, RegistrationErrors> {
        let mut errors = BTreeMap::new();

        if self.name.is_empty() {
            errors.insert("name", "Name is required");
        }
        if !EMAIL_RE.is_match(&self.email) {
            errors.insert("email", "Valid email is required");
        }
        if !PHONE_RE.is_match(&self.phone) {
            errors.insert("phone", "Valid 10-digit phone number is required");
        }
        if self.city.is_empty() {
            errors.insert("city", "City is required");
        }
        if self.state.is_empty() {
            errors.insert("state", "State is required");
        }
        if self.country.is_empty() {
            errors.insert("country", "Country is required");
        }
        if !PINCODE_RE.is_match(&self.pincode) {
            errors.insert("pincode", "Valid 6-digit pincode is required");
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.insert("password", "Password must be at least 6 characters");
        }
        if self.password != self.confirm_password {
            errors.insert("confirmPassword", "Passwords do not match");
        }

        if !errors.is_empty() {
            return Err(RegistrationErrors(errors));
        }

        let profile = UserProfile {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            country: self.country.clone(),
            pincode: self.pincode.clone(),
        };
        Ok(NewUser::with_password(profile, self.password.clone()))
    }
}
