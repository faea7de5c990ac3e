//! Driven port for the remote user service.
//!
//! The dashboard only needs three operations: list every user, create one,
//! and delete one by id. Outbound adapters own transport details; tests can
//! use [`FixtureUserService`] or the generated mock.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::domain::{User, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors surfaced while calling the user service.
    pub enum UserServiceError {
        /// The request never produced a response.
        Transport { message: String } =>
            "user service unreachable: {message}",
        /// The request exceeded its timeout.
        Timeout { message: String } =>
            "user service timed out: {message}",
        /// The service answered with a non-success status.
        Rejected { status: u16, message: String } =>
            "user service rejected the request ({status}): {message}",
        /// The response body could not be decoded.
        Decode { message: String } =>
            "user service returned an unreadable payload: {message}",
    }
}

/// Port for the remote user collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// Fetch every user.
    async fn list_users(&self) -> Result<Vec<User>, UserServiceError>;

    /// Create `user`. Success means the service acknowledged the request.
    async fn create_user(&self, user: &User) -> Result<(), UserServiceError>;

    /// Delete the user identified by `id`.
    async fn delete_user(&self, id: UserId) -> Result<(), UserServiceError>;
}

/// In-memory user service for demos and behavioural tests.
///
/// Every call fails with the configured error once [`Self::fail_with`] is set.
///
/// # Examples
/// ```
/// use dashboard::domain::ports::{FixtureUserService, UserService};
/// use dashboard::domain::{User, UserId};
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let service = FixtureUserService::with_users(vec![User::new(UserId::new(1), "Ann", "a@x.com")]);
/// service.delete_user(UserId::new(1)).await.expect("delete succeeds");
/// assert!(service.list_users().await.expect("list succeeds").is_empty());
/// # });
/// ```
#[derive(Debug, Default)]
pub struct FixtureUserService {
    users: Mutex<Vec<User>>,
    failure: Mutex<Option<UserServiceError>>,
}

impl FixtureUserService {
    /// Seed the service with `users`.
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
            failure: Mutex::new(None),
        }
    }

    /// Make every subsequent call fail with `error`.
    pub fn fail_with(&self, error: UserServiceError) {
        *self.failure.lock().unwrap_or_else(PoisonError::into_inner) = Some(error);
    }

    /// Let calls succeed again.
    pub fn recover(&self) {
        *self.failure.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Copy of the users currently stored.
    pub fn snapshot(&self) -> Vec<User> {
        self.users
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn check_failure(&self) -> Result<(), UserServiceError> {
        match self
            .failure
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl UserService for FixtureUserService {
    async fn list_users(&self) -> Result<Vec<User>, UserServiceError> {
        self.check_failure()?;
        Ok(self.snapshot())
    }

    async fn create_user(&self, user: &User) -> Result<(), UserServiceError> {
        self.check_failure()?;
        self.users
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(user.clone());
        Ok(())
    }

    async fn delete_user(&self, id: UserId) -> Result<(), UserServiceError> {
        self.check_failure()?;
        self.users
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|user| user.id() != id);
        Ok(())
    }
}
