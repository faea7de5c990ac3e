//! Domain primitives, derived views, and the dashboard controller.
//!
//! Purpose: model the user dashboard independently of transport and
//! presentation. Inbound adapters drive a [`Dashboard`]; outbound adapters
//! implement [`ports::UserService`].
//!
//! Public surface:
//! - User / UserId: user record and identifier.
//! - DashboardState / Action: authoritative state and its transitions.
//! - ViewSelection / UserListView: search and page selection plus the
//!   filtered, paginated view derived from them.
//! - EntryForm: name and email inputs producing candidate users.
//! - Dashboard / NotificationTimer: controller and auto-dismiss timer.

pub mod dashboard;
pub mod entry_form;
pub mod ports;
pub mod state;
pub mod user;
pub mod view;

pub use self::dashboard::{Dashboard, NOTIFICATION_DISMISS_DELAY, NotificationTimer};
pub use self::entry_form::{EntryForm, IdGenerator, MAX_PLACEHOLDER_ID, RandomIdGenerator};
pub use self::state::{Action, DashboardState, USER_ADDED_MESSAGE, USER_DELETED_MESSAGE};
pub use self::user::{User, UserId};
pub use self::view::{USERS_PER_PAGE, UserListView, ViewSelection, filter_users};
