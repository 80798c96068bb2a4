//! Driving ports for user commands and queries.

use crate::domain::{BoardError, User, UserId};

/// Mutating user operations.
#[cfg_attr(test, mockall::automock)]
pub trait UsersCommand: Send + Sync {
    /// Register a user. No field validation; never fails in practice.
    fn create_user(&self, name: &str, email: &str) -> Result<User, BoardError>;

    /// Overwrite a user's name and email.
    fn update_user(&self, user_id: UserId, name: &str, email: &str) -> Result<User, BoardError>;

    /// Delete a user and every ad they authored.
    ///
    /// The cascade is not transactional: a failure mid-cascade aborts the
    /// remainder but already-deleted ads stay deleted.
    fn delete_user(&self, user_id: UserId) -> Result<(), BoardError>;
}

/// Read-only user operations.
#[cfg_attr(test, mockall::automock)]
pub trait UsersQuery: Send + Sync {
    /// Fetch one user by id.
    fn user(&self, user_id: UserId) -> Result<User, BoardError>;
}

fn fixture_user(user_id: UserId) -> User {
    User {
        id: user_id,
        name: "fixture user".to_owned(),
        email: "fixture@example.com".to_owned(),
    }
}

/// Fixture implementation for adapter tests and doc examples.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUsersCommand;

impl UsersCommand for FixtureUsersCommand {
    fn create_user(&self, name: &str, email: &str) -> Result<User, BoardError> {
        let mut user = fixture_user(UserId::new(0));
        user.name = name.to_owned();
        user.email = email.to_owned();
        Ok(user)
    }

    fn update_user(&self, user_id: UserId, name: &str, email: &str) -> Result<User, BoardError> {
        let mut user = fixture_user(user_id);
        user.name = name.to_owned();
        user.email = email.to_owned();
        Ok(user)
    }

    fn delete_user(&self, _user_id: UserId) -> Result<(), BoardError> {
        Ok(())
    }
}

/// Fixture implementation for adapter tests and doc examples.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUsersQuery;

impl UsersQuery for FixtureUsersQuery {
    fn user(&self, user_id: UserId) -> Result<User, BoardError> {
        Ok(fixture_user(user_id))
    }
}
