//! Dashboard state and its transitions.
//!
//! [`DashboardState::reduce`] is the only way state changes. Each transition
//! replaces the whole value; nothing is applied partially.

use super::{User, UserId};

/// Notification shown after a confirmed addition.
pub const USER_ADDED_MESSAGE: &str = "User added successfully";
/// Notification shown after a confirmed deletion.
pub const USER_DELETED_MESSAGE: &str = "User deleted successfully";

/// Transition applied to [`DashboardState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The user list was fetched.
    FetchSuccess(Vec<User>),
    /// Fetching the user list failed with a human-readable message.
    FetchError(String),
    /// The remote service accepted a new user.
    AddUser(User),
    /// The remote service deleted the user with this id.
    DeleteUser(UserId),
    /// The notification banner was closed or expired.
    ClearNotification,
}

impl Action {
    /// Whether applying this action shows a notification.
    pub fn sets_notification(&self) -> bool {
        matches!(self, Self::AddUser(_) | Self::DeleteUser(_))
    }
}

/// Authoritative in-memory dashboard state.
///
/// ## Invariants
/// - `loading` is true only until the first fetch resolves.
/// - A successful fetch clears any previous error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardState {
    users: Vec<User>,
    loading: bool,
    error: Option<String>,
    notification: Option<String>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            loading: true,
            error: None,
            notification: None,
        }
    }
}

impl DashboardState {
    /// State at mount: no users, loading, no error, no notification.
    pub fn initial() -> Self {
        Self::default()
    }

    /// Users in display order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// True until the initial fetch resolves.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message from a failed fetch.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Message shown in the notification banner.
    pub fn notification(&self) -> Option<&str> {
        self.notification.as_deref()
    }

    /// Apply one transition, returning the next state.
    ///
    /// # Examples
    /// ```
    /// use dashboard::domain::{Action, DashboardState, User, UserId};
    ///
    /// let ann = User::new(UserId::new(1), "Ann", "a@x.com");
    /// let state = DashboardState::initial().reduce(Action::FetchSuccess(vec![ann.clone()]));
    ///
    /// assert!(!state.is_loading());
    /// assert_eq!(state.users(), &[ann]);
    /// ```
    #[must_use]
    pub fn reduce(self, action: Action) -> Self {
        match action {
            Action::FetchSuccess(users) => Self {
                users,
                loading: false,
                error: None,
                ..self
            },
            Action::FetchError(message) => Self {
                error: Some(message),
                loading: false,
                ..self
            },
            Action::AddUser(user) => {
                let mut users = self.users;
                users.push(user);
                Self {
                    users,
                    notification: Some(USER_ADDED_MESSAGE.to_owned()),
                    ..self
                }
            }
            Action::DeleteUser(id) => {
                let mut users = self.users;
                users.retain(|user| user.id() != id);
                Self {
                    users,
                    notification: Some(USER_DELETED_MESSAGE.to_owned()),
                    ..self
                }
            }
            Action::ClearNotification => Self {
                notification: None,
                ..self
            },
        }
    }
}

#[cfg(test)]
mod tests {
    //! Transition table coverage.

    use super::*;
    use rstest::{fixture, rstest};

    fn user(id: i64, name: &str) -> User {
        User::new(UserId::new(id), name, format!("{}@example.com", name.to_lowercase()))
    }

    #[fixture]
    fn loaded() -> DashboardState {
        DashboardState::initial().reduce(Action::FetchSuccess(vec![
            user(1, "Ann"),
            user(7, "Bob"),
            user(9, "Cy"),
        ]))
    }

    fn ids(state: &DashboardState) -> Vec<i64> {
        state.users().iter().map(|user| user.id().get()).collect()
    }

    #[test]
    fn initial_state_is_loading_and_empty() {
        let state = DashboardState::initial();
        assert!(state.is_loading());
        assert!(state.users().is_empty());
        assert!(state.error().is_none());
        assert!(state.notification().is_none());
    }

    #[test]
    fn fetch_success_replaces_users_and_clears_error() {
        let failed = DashboardState::initial().reduce(Action::FetchError("offline".to_owned()));
        let state = failed.reduce(Action::FetchSuccess(vec![user(1, "Ann")]));

        assert!(!state.is_loading());
        assert!(state.error().is_none());
        assert_eq!(ids(&state), vec![1]);
    }

    #[test]
    fn fetch_error_keeps_users_and_stops_loading() {
        let state = DashboardState::initial().reduce(Action::FetchError("boom".to_owned()));
        assert!(!state.is_loading());
        assert_eq!(state.error(), Some("boom"));
        assert!(state.users().is_empty());
    }

    #[rstest]
    fn add_user_appends_and_notifies(loaded: DashboardState) {
        let state = loaded.reduce(Action::AddUser(user(500, "Dee")));
        assert_eq!(ids(&state), vec![1, 7, 9, 500]);
        assert_eq!(state.notification(), Some(USER_ADDED_MESSAGE));
    }

    #[rstest]
    fn delete_user_removes_matching_entry(loaded: DashboardState) {
        let state = loaded.reduce(Action::DeleteUser(UserId::new(7)));
        assert_eq!(ids(&state), vec![1, 9]);
        assert_eq!(state.notification(), Some(USER_DELETED_MESSAGE));
    }

    #[rstest]
    fn delete_unknown_user_still_notifies(loaded: DashboardState) {
        let state = loaded.reduce(Action::DeleteUser(UserId::new(42)));
        assert_eq!(ids(&state), vec![1, 7, 9]);
        assert_eq!(state.notification(), Some(USER_DELETED_MESSAGE));
    }

    #[rstest]
    #[case::after_add(Action::AddUser(user(3, "Eve")))]
    #[case::after_delete(Action::DeleteUser(UserId::new(1)))]
    #[case::when_empty(Action::ClearNotification)]
    fn clear_notification_always_clears(loaded: DashboardState, #[case] first: Action) {
        let state = loaded.reduce(first).reduce(Action::ClearNotification);
        assert!(state.notification().is_none());
    }

    #[rstest]
    fn additions_and_deletions_apply_in_order(loaded: DashboardState) {
        let state = [
            Action::AddUser(user(20, "Fay")),
            Action::DeleteUser(UserId::new(1)),
            Action::AddUser(user(21, "Gus")),
            Action::DeleteUser(UserId::new(20)),
            Action::AddUser(user(22, "Hal")),
        ]
        .into_iter()
        .fold(loaded, DashboardState::reduce);

        assert_eq!(ids(&state), vec![7, 9, 21, 22]);
    }

    #[test]
    fn only_mutations_set_notifications() {
        assert!(Action::AddUser(user(1, "Ann")).sets_notification());
        assert!(Action::DeleteUser(UserId::new(1)).sets_notification());
        assert!(!Action::FetchSuccess(Vec::new()).sets_notification());
        assert!(!Action::FetchError(String::new()).sets_notification());
        assert!(!Action::ClearNotification.sets_notification());
    }
}
