//! Derived views over the dashboard state.
//!
//! Views are recomputed on demand from the user list plus the local
//! [`ViewSelection`]; they never feed back into state.

use pagination::{PageOutOfRange, PageSize, checked_page, page_window, total_pages};

use super::User;

/// Users shown per page.
pub const USERS_PER_PAGE: PageSize = match PageSize::new(5) {
    Some(size) => size,
    None => panic!("users per page must be non-zero"),
};

/// Search query and page chosen by the viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSelection {
    search_query: String,
    current_page: usize,
}

impl Default for ViewSelection {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            current_page: 1,
        }
    }
}

impl ViewSelection {
    /// Current search query.
    pub fn search_query(&self) -> &str {
        self.search_query.as_str()
    }

    /// Current one-based page.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Replace the search query. The current page is kept.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Move to `page` when it exists in `users`' filtered view.
    ///
    /// # Errors
    ///
    /// Returns [`PageOutOfRange`] and leaves the selection untouched when
    /// `page` is outside `1..=total_pages`.
    pub fn change_page(&mut self, users: &[User], page: usize) -> Result<(), PageOutOfRange> {
        let total = UserListView::new(users, self).total_pages();
        self.current_page = checked_page(page, total)?;
        Ok(())
    }

    /// Jump to the last page of `users`' filtered view.
    ///
    /// Returns `false` and leaves the selection untouched when the filtered
    /// view is empty.
    pub fn show_last_page(&mut self, users: &[User]) -> bool {
        let total = UserListView::new(users, self).total_pages();
        if total == 0 {
            return false;
        }
        self.current_page = total;
        true
    }
}

/// Keep users whose name contains `query`, ignoring case.
pub fn filter_users<'a>(users: &'a [User], query: &str) -> Vec<&'a User> {
    users.iter().filter(|user| user.name_matches(query)).collect()
}

/// Filtered and paginated view of the user list.
///
/// # Examples
/// ```
/// use dashboard::domain::{User, UserId, UserListView, ViewSelection};
///
/// let users: Vec<User> = (1..=12)
///     .map(|id| User::new(UserId::new(id), format!("User {id}"), "u@x.com"))
///     .collect();
/// let view = UserListView::new(&users, &ViewSelection::default());
///
/// assert_eq!(view.total_pages(), 3);
/// assert_eq!(view.page().len(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct UserListView<'a> {
    filtered: Vec<&'a User>,
    current_page: usize,
}

impl<'a> UserListView<'a> {
    /// Filter `users` by the selection's query and remember its page.
    pub fn new(users: &'a [User], selection: &ViewSelection) -> Self {
        Self {
            filtered: filter_users(users, selection.search_query()),
            current_page: selection.current_page(),
        }
    }

    /// Every user matching the search query.
    pub fn filtered(&self) -> &[&'a User] {
        &self.filtered
    }

    /// Users on the current page.
    pub fn page(&self) -> &[&'a User] {
        page_window(&self.filtered, self.current_page, USERS_PER_PAGE)
    }

    /// Selected one-based page.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Page count; zero when nothing matches.
    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered.len(), USERS_PER_PAGE)
    }
}
