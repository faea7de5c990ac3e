//! Entry form for new users.
//!
//! The form holds two free-text fields. Submitting builds a candidate
//! [`User`] with a placeholder id and clears both fields. No validation is
//! applied; empty names and malformed emails pass through unchanged.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::{User, UserId};

/// Exclusive upper bound for generated placeholder ids.
pub const MAX_PLACEHOLDER_ID: i64 = 1000;

/// Source of placeholder ids for new users.
pub trait IdGenerator: Send {
    /// Produce the next placeholder id. Collisions are not checked.
    fn next_id(&mut self) -> UserId;
}

/// Draws ids uniformly from `0..MAX_PLACEHOLDER_ID`.
#[derive(Debug)]
pub struct RandomIdGenerator {
    rng: SmallRng,
}

impl Default for RandomIdGenerator {
    fn default() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }
}

impl IdGenerator for RandomIdGenerator {
    fn next_id(&mut self) -> UserId {
        UserId::new(self.rng.gen_range(0..MAX_PLACEHOLDER_ID))
    }
}

/// Name and email inputs awaiting submission.
#[derive(Debug, Default)]
pub struct EntryForm<G = RandomIdGenerator> {
    name: String,
    email: String,
    ids: G,
}

impl EntryForm {
    /// Empty form drawing random placeholder ids.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<G> EntryForm<G> {
    /// Empty form drawing ids from `ids`.
    pub fn with_id_generator(ids: G) -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            ids,
        }
    }

    /// Current name input.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Current email input.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Replace the name input.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Replace the email input.
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }
}

impl<G: IdGenerator> EntryForm<G> {
    /// Build the candidate user and reset both inputs.
    ///
    /// # Examples
    /// ```
    /// use dashboard::domain::EntryForm;
    ///
    /// let mut form = EntryForm::new();
    /// form.set_name("Ann");
    /// form.set_email("not-an-email");
    ///
    /// let user = form.submit();
    /// assert_eq!(user.email(), "not-an-email");
    /// assert!(user.id().get() < 1000);
    /// assert!(form.name().is_empty() && form.email().is_empty());
    /// ```
    pub fn submit(&mut self) -> User {
        let id = self.ids.next_id();
        let name = std::mem::take(&mut self.name);
        let email = std::mem::take(&mut self.email);
        User::new(id, name, email)
    }
}
