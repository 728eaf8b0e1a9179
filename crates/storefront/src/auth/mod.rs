//! Local accounts.
//!
//! Accounts live in the same [`KeyValueStore`](crate::persist::KeyValueStore)
//! as the persisted sets: every registered account under `users`, the
//! signed-in account under `user`. This is a single-device prototype account
//! store, not a security boundary; passwords are still hashed with Argon2id
//! so the stored records never hold them verbatim.

mod error;
pub mod notification;

pub use error::AuthError;
pub use notification::{DISMISS_AFTER, Notification, NotificationLevel};

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::Utc;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use phone_city_core::{Email, Identity, UserId};

use crate::persist::{SharedStore, write_json};

/// Storage key for all registered accounts.
pub const USERS_KEY: &str = "users";

/// Storage key for the signed-in account.
pub const SESSION_KEY: &str = "user";

/// Minimum password length, in characters.
const MIN_PASSWORD_LENGTH: usize = 6;

/// A signed-in account, as exposed to the rest of the app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: Email,
}

/// An account record with its password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredAccount {
    id: UserId,
    name: String,
    email: Email,
    password_hash: String,
}

impl StoredAccount {
    fn user(&self) -> User {
        User {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// Account service.
///
/// Handles registration, login and logout, and tracks who is signed in.
pub struct AuthService {
    store: SharedStore,
    current: Option<User>,
}

impl AuthService {
    /// Create a service with nobody signed in. Call [`AuthService::restore`]
    /// to pick up a saved session.
    #[must_use]
    pub const fn new(store: SharedStore) -> Self {
        Self {
            store,
            current: None,
        }
    }

    /// The signed-in account, if any.
    #[must_use]
    pub const fn current(&self) -> Option<&User> {
        self.current.as_ref()
    }

    /// The identity the persisted sets should be scoped to.
    #[must_use]
    pub fn identity(&self) -> Identity {
        self.current
            .as_ref()
            .map_or(Identity::Guest, |user| Identity::User(user.id.clone()))
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Load the saved session, if there is one.
    ///
    /// A session record that does not parse is deleted and ignored.
    pub fn restore(&mut self) -> Option<&User> {
        self.current = match self.store.get(SESSION_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => Some(user),
                Err(e) => {
                    tracing::error!(error = %e, "Saved session is unreadable, discarding");
                    if let Err(e) = self.store.remove(SESSION_KEY) {
                        tracing::error!(error = %e, "Failed to discard saved session");
                    }
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read saved session");
                None
            }
        };
        self.current.as_ref()
    }

    /// Register a new account and sign it in.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingFields` if any field is blank.
    /// Returns `AuthError::WeakPassword` if the password is too short.
    /// Returns `AuthError::InvalidEmail` if the email format is invalid.
    /// Returns `AuthError::UserAlreadyExists` if the email is already registered.
    pub fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &SecretString,
    ) -> Result<User, AuthError> {
        let name = name.trim();
        let password = password.expose_secret();
        if name.is_empty() || email.trim().is_empty() || password.is_empty() {
            return Err(AuthError::MissingFields);
        }
        validate_password(password)?;
        let email = Email::parse(email)?;

        let mut accounts = self.load_accounts();
        if accounts.iter().any(|a| a.email == email) {
            return Err(AuthError::UserAlreadyExists);
        }

        let account = StoredAccount {
            id: next_user_id(&accounts),
            name: name.to_owned(),
            email,
            password_hash: hash_password(password)?,
        };
        let user = account.user();
        accounts.push(account);

        write_json(self.store.as_ref(), USERS_KEY, &accounts)?;
        self.start_session(user.clone())?;

        tracing::info!(user_id = %user.id, "Account registered");
        Ok(user)
    }

    /// Sign in with email and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingFields` if either field is blank.
    /// Returns `AuthError::InvalidCredentials` if the email/password is wrong.
    pub fn login(&mut self, email: &str, password: &SecretString) -> Result<User, AuthError> {
        let password = password.expose_secret();
        if email.trim().is_empty() || password.is_empty() {
            return Err(AuthError::MissingFields);
        }
        let email = Email::parse(email).map_err(|_| AuthError::InvalidCredentials)?;

        let accounts = self.load_accounts();
        let account = accounts
            .iter()
            .find(|a| a.email == email)
            .ok_or(AuthError::InvalidCredentials)?;
        verify_password(password, &account.password_hash)?;

        let user = account.user();
        self.start_session(user.clone())?;

        tracing::info!(user_id = %user.id, "Signed in");
        Ok(user)
    }

    /// Sign out. Returns the account that was signed in, if any.
    pub fn logout(&mut self) -> Option<User> {
        if let Err(e) = self.store.remove(SESSION_KEY) {
            tracing::error!(error = %e, "Failed to clear saved session");
        }
        let user = self.current.take();
        if let Some(user) = &user {
            tracing::info!(user_id = %user.id, "Signed out");
        }
        user
    }

    fn start_session(&mut self, user: User) -> Result<(), AuthError> {
        write_json(self.store.as_ref(), SESSION_KEY, &user)?;
        self.current = Some(user);
        Ok(())
    }

    /// Registered accounts; an unreadable record set counts as none.
    fn load_accounts(&self) -> Vec<StoredAccount> {
        match self.store.get(USERS_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::error!(error = %e, "Account records are unreadable");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::error!(error = %e, "Failed to read account records");
                Vec::new()
            }
        }
    }
}

/// Millisecond registration timestamp, bumped past any id already taken.
fn next_user_id(accounts: &[StoredAccount]) -> UserId {
    let mut millis = Utc::now().timestamp_millis();
    while accounts.iter().any(|a| a.id.as_str() == millis.to_string()) {
        millis += 1;
    }
    UserId::new(millis.to_string())
}

/// Validate password meets requirements.
fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Hash a password using Argon2id.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}
