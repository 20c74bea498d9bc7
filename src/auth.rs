//! Mock authentication.
//!
//! There is no identity backend: any non-empty credentials sign in, and an
//! email containing "admin" grants the admin role. Provided through context
//! the same way as the ratings store so pages share one session.

use leptos::*;
use thiserror::Error;
use uuid::Uuid;

use crate::models::user::{Role, User};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("All fields are required")]
    MissingFields,
}

#[derive(Clone, Copy)]
pub struct AuthStore {
    user: RwSignal<Option<User>>,
}

impl AuthStore {
    pub fn new() -> Self {
        Self {
            user: create_rw_signal(None),
        }
    }

    /// Reactive read of the session user.
    pub fn current(&self) -> Option<User> {
        self.user.get()
    }

    pub fn current_untracked(&self) -> Option<User> {
        self.user.get_untracked()
    }

    pub fn is_admin(&self) -> bool {
        self.current().map(|u| u.role.is_admin()).unwrap_or(false)
    }

    pub fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let email = email.trim();
        if email.is_empty() || password.trim().is_empty() {
            return Err(AuthError::InvalidCredentials);
        }
        let role = if email.contains("admin") {
            Role::Admin
        } else {
            Role::Student
        };
        let user = User {
            id: Uuid::new_v4().to_string(),
            name: match role {
                Role::Admin => "Admin User".to_string(),
                Role::Student => "Demo Student".to_string(),
            },
            email: email.to_string(),
            role,
        };
        self.user.set(Some(user.clone()));
        Ok(user)
    }

    pub fn signup(&self, name: &str, email: &str, password: &str) -> Result<User, AuthError> {
        let name = name.trim();
        let email = email.trim();
        if name.is_empty() || email.is_empty() || password.trim().is_empty() {
            return Err(AuthError::MissingFields);
        }
        let user = User {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            role: Role::Student,
        };
        self.user.set(Some(user.clone()));
        Ok(user)
    }

    pub fn logout(&self) {
        self.user.set(None);
    }
}

impl Default for AuthStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_auth() {
    provide_context(AuthStore::new());
}

pub fn use_auth() -> AuthStore {
    expect_context::<AuthStore>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_accepts_any_non_empty_credentials() {
        let runtime = create_runtime();
        let auth = AuthStore::new();

        let user = auth.login("someone@campus.edu", "hunter2").unwrap();
        assert_eq!(user.role, Role::Student);
        assert_eq!(auth.current_untracked().unwrap().email, "someone@campus.edu");

        runtime.dispose();
    }

    #[test]
    fn login_rejects_blank_fields() {
        let runtime = create_runtime();
        let auth = AuthStore::new();

        assert_eq!(auth.login("", "pw"), Err(AuthError::InvalidCredentials));
        assert_eq!(auth.login("a@b.c", "   "), Err(AuthError::InvalidCredentials));
        assert!(auth.current_untracked().is_none());

        runtime.dispose();
    }

    #[test]
    fn admin_email_grants_admin_role() {
        let runtime = create_runtime();
        let auth = AuthStore::new();

        let user = auth.login("admin@readspace.edu", "pw").unwrap();
        assert_eq!(user.role, Role::Admin);
        assert_eq!(user.name, "Admin User");

        runtime.dispose();
    }

    #[test]
    fn signup_requires_every_field() {
        let runtime = create_runtime();
        let auth = AuthStore::new();

        assert_eq!(
            auth.signup("Ada", "", "pw"),
            Err(AuthError::MissingFields)
        );
        let user = auth.signup("Ada", "ada@campus.edu", "pw").unwrap();
        assert_eq!(user.role, Role::Student);
        assert_eq!(user.name, "Ada");

        runtime.dispose();
    }

    #[test]
    fn logout_clears_the_session() {
        let runtime = create_runtime();
        let auth = AuthStore::new();

        auth.login("someone@campus.edu", "pw").unwrap();
        auth.logout();
        assert!(auth.current_untracked().is_none());

        runtime.dispose();
    }
}
