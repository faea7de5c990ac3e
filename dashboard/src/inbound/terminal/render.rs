//! Text rendering of the dashboard.
//!
//! [`DashboardScreen`] captures everything shown on screen for one frame.
//! Buttons render as `[label]`, disabled buttons as `(label)`, and the current
//! page as `[*n*]`.

use std::fmt;

use crate::domain::{Dashboard, EntryForm, User};

const TITLE: &str = "User Dashboard";

/// One numbered page button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageButton {
    /// One-based page number.
    pub number: usize,
    /// Whether this is the page being shown.
    pub current: bool,
}

/// Previous, numbered, and Next buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationStrip {
    /// Previous is disabled on the first page.
    pub previous_enabled: bool,
    /// Next is disabled once the current page equals the page count.
    pub next_enabled: bool,
    /// One button per page; empty when nothing matches.
    pub pages: Vec<PageButton>,
}

impl PaginationStrip {
    /// Strip for `current_page` out of `total_pages`.
    pub fn new(current_page: usize, total_pages: usize) -> Self {
        Self {
            previous_enabled: current_page != 1,
            next_enabled: current_page != total_pages,
            pages: (1..=total_pages)
                .map(|number| PageButton {
                    number,
                    current: number == current_page,
                })
                .collect(),
        }
    }
}

/// Snapshot of the rendered surface.
#[derive(Debug, Clone)]
pub struct DashboardScreen<'a> {
    search_query: &'a str,
    form_name: &'a str,
    form_email: &'a str,
    refresh_enabled: bool,
    notification: Option<&'a str>,
    loading: bool,
    error: Option<&'a str>,
    rows: Vec<&'a User>,
    pagination: PaginationStrip,
}

impl<'a> DashboardScreen<'a> {
    /// Capture the current dashboard and form.
    pub fn new<G>(dashboard: &'a Dashboard, form: &'a EntryForm<G>) -> Self {
        let state = dashboard.state();
        let view = dashboard.view();
        Self {
            search_query: dashboard.selection().search_query(),
            form_name: form.name(),
            form_email: form.email(),
            refresh_enabled: !state.is_loading(),
            notification: state.notification(),
            loading: state.is_loading(),
            error: state.error(),
            rows: view.page().to_vec(),
            pagination: PaginationStrip::new(view.current_page(), view.total_pages()),
        }
    }

    /// Users listed on screen.
    pub fn rows(&self) -> &[&'a User] {
        &self.rows
    }

    /// Pagination controls.
    pub fn pagination(&self) -> &PaginationStrip {
        &self.pagination
    }

    /// Whether the refresh button accepts input.
    pub fn refresh_enabled(&self) -> bool {
        self.refresh_enabled
    }
}

struct Button<'a> {
    label: &'a str,
    enabled: bool,
}

impl fmt::Display for Button<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.enabled {
            write!(f, "[{}]", self.label)
        } else {
            write!(f, "({})", self.label)
        }
    }
}

impl fmt::Display for PaginationStrip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            Button {
                label: "Previous",
                enabled: self.previous_enabled
            }
        )?;
        for page in &self.pages {
            if page.current {
                write!(f, " [*{}*]", page.number)?;
            } else {
                write!(f, " [{}]", page.number)?;
            }
        }
        write!(
            f,
            " {}",
            Button {
                label: "Next",
                enabled: self.next_enabled
            }
        )
    }
}

impl fmt::Display for DashboardScreen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{TITLE}")?;
        writeln!(f, "Search: {}", self.search_query)?;
        writeln!(
            f,
            "New user: name={} email={} [Add User]",
            self.form_name, self.form_email
        )?;
        writeln!(
            f,
            "{}",
            Button {
                label: "Refresh Users",
                enabled: self.refresh_enabled
            }
        )?;
        if let Some(notification) = self.notification {
            writeln!(f, ">> {notification}")?;
        }
        if self.loading {
            writeln!(f, "Loading...")?;
        }
        if let Some(error) = self.error {
            writeln!(f, "Error: {error}")?;
        }
        for user in &self.rows {
            writeln!(
                f,
                "  #{} {} <{}> [Delete]",
                user.id(),
                user.name(),
                user.email()
            )?;
        }
        writeln!(f, "{}", self.pagination)
    }
}
