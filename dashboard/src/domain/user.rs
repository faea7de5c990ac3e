//! User record shown on the dashboard.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier of a user record.
///
/// Server records carry the id assigned by the remote service; records created
/// from the entry form carry a client-generated placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw identifier.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Access the raw identifier.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// Dashboard user.
///
/// ## Invariants
/// - Records are never edited in place; changes replace the whole record.
/// - Name and email are stored as entered. The entry form accepts empty or
///   malformed values and forwards them unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
    bio: Option<String>,
}

impl User {
    /// Build a user without a bio.
    ///
    /// # Examples
    /// ```
    /// use dashboard::domain::{User, UserId};
    ///
    /// let user = User::new(UserId::new(1), "Ann", "a@x.com");
    /// assert_eq!(user.name(), "Ann");
    /// assert!(user.bio().is_none());
    /// ```
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            bio: None,
        }
    }

    /// Attach a free-form biography.
    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    /// Stable identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Contact email.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Optional biography.
    pub fn bio(&self) -> Option<&str> {
        self.bio.as_deref()
    }

    /// Case-insensitive substring match against the name.
    ///
    /// An empty query matches every user.
    ///
    /// ```
    /// use dashboard::domain::{User, UserId};
    ///
    /// let user = User::new(UserId::new(1), "Leanne Graham", "l@x.com");
    /// assert!(user.name_matches("GRAHAM"));
    /// assert!(user.name_matches(""));
    /// assert!(!user.name_matches("ervin"));
    /// ```
    pub fn name_matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}
