//! Dashboard state controller.
//!
//! [`Dashboard`] owns the authoritative [`DashboardState`], the viewer's
//! [`ViewSelection`], the notification timer, and every request it has issued
//! to the [`UserService`] port. State only changes through
//! [`Dashboard::dispatch`]. Requests run as tokio tasks and report back over an
//! in-process channel; [`Dashboard::process_next`] applies their results in
//! arrival order.
//!
//! Dropping the dashboard aborts in-flight requests and any pending
//! notification timer.

use std::sync::Arc;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::task::JoinSet;
use tracing::{debug, error, warn};

use crate::domain::ports::UserService;
use crate::domain::{Action, DashboardState, User, UserId, UserListView, ViewSelection};

mod notification;

pub use notification::{NOTIFICATION_DISMISS_DELAY, NotificationTimer};

/// Completion reported by background work.
#[derive(Debug)]
enum DashboardEvent {
    Dispatch(Action),
    NotificationExpired { generation: u64 },
}

/// Client-side controller for the user dashboard.
pub struct Dashboard {
    service: Arc<dyn UserService>,
    state: DashboardState,
    selection: ViewSelection,
    events_tx: UnboundedSender<DashboardEvent>,
    events_rx: UnboundedReceiver<DashboardEvent>,
    in_flight: JoinSet<()>,
    notification_timer: NotificationTimer,
    notification_generation: u64,
    mounted: bool,
}

impl Dashboard {
    /// Build an unmounted dashboard backed by `service`.
    pub fn new(service: Arc<dyn UserService>) -> Self {
        Self::with_notification_timer(service, NotificationTimer::default())
    }

    /// Build an unmounted dashboard using a custom notification timer.
    pub fn with_notification_timer(
        service: Arc<dyn UserService>,
        notification_timer: NotificationTimer,
    ) -> Self {
        let (events_tx, events_rx) = unbounded_channel();
        Self {
            service,
            state: DashboardState::initial(),
            selection: ViewSelection::default(),
            events_tx,
            events_rx,
            in_flight: JoinSet::new(),
            notification_timer,
            notification_generation: 0,
            mounted: false,
        }
    }

    /// Current state.
    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Current search query and page.
    pub fn selection(&self) -> &ViewSelection {
        &self.selection
    }

    /// Filtered, paginated view of the current users.
    pub fn view(&self) -> UserListView<'_> {
        UserListView::new(self.state.users(), &self.selection)
    }

    /// Whether a notification close is scheduled.
    pub fn notification_pending(&self) -> bool {
        self.notification_timer.is_armed()
    }

    /// Issue the initial user fetch.
    ///
    /// Only the first call has an effect; the fetch is never retried.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;

        let service = Arc::clone(&self.service);
        let events = self.events_tx.clone();
        self.in_flight.spawn(async move {
            let action = match service.list_users().await {
                Ok(users) => {
                    debug!(count = users.len(), "loaded users");
                    Action::FetchSuccess(users)
                }
                Err(error) => {
                    warn!(error = %error, "failed to load users");
                    Action::FetchError(error.to_string())
                }
            };
            report(&events, DashboardEvent::Dispatch(action));
        });
    }

    /// Ask the service to create `user`; the list changes only on success.
    ///
    /// Failures are logged and otherwise ignored.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn add_user(&mut self, user: User) {
        let service = Arc::clone(&self.service);
        let events = self.events_tx.clone();
        self.in_flight.spawn(async move {
            match service.create_user(&user).await {
                Ok(()) => report(&events, DashboardEvent::Dispatch(Action::AddUser(user))),
                Err(error) => warn!(user_id = %user.id(), error = %error, "failed to add user"),
            }
        });
    }

    /// Ask the service to delete `id`; the list changes only on success.
    ///
    /// Failures are logged and otherwise ignored.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn delete_user(&mut self, id: UserId) {
        let service = Arc::clone(&self.service);
        let events = self.events_tx.clone();
        self.in_flight.spawn(async move {
            match service.delete_user(id).await {
                Ok(()) => report(&events, DashboardEvent::Dispatch(Action::DeleteUser(id))),
                Err(error) => warn!(user_id = %id, error = %error, "failed to delete user"),
            }
        });
    }

    /// Re-apply the current user list as a successful fetch.
    ///
    /// This does not contact the service. Ignored while the initial load is
    /// pending, matching the disabled refresh control. Returns whether the
    /// refresh was applied.
    pub fn refresh(&mut self) -> bool {
        if self.state.is_loading() {
            return false;
        }
        let users = self.state.users().to_vec();
        self.dispatch(Action::FetchSuccess(users));
        true
    }

    /// Close the notification banner.
    pub fn dismiss_notification(&mut self) {
        self.dispatch(Action::ClearNotification);
    }

    /// Replace the search query.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.selection.set_search_query(query);
    }

    /// Move to `page`. Out-of-range pages are ignored; returns whether the
    /// page changed.
    pub fn change_page(&mut self, page: usize) -> bool {
        match self.selection.change_page(self.state.users(), page) {
            Ok(()) => true,
            Err(rejected) => {
                debug!(
                    page = rejected.page,
                    total_pages = rejected.total_pages,
                    "ignored page change"
                );
                false
            }
        }
    }

    /// Move one page forward.
    pub fn next_page(&mut self) -> bool {
        self.change_page(self.selection.current_page().saturating_add(1))
    }

    /// Move one page back.
    pub fn previous_page(&mut self) -> bool {
        self.change_page(self.selection.current_page().saturating_sub(1))
    }

    /// Apply `action` to the state.
    ///
    /// Adding a user also moves to the last page so the new entry is visible.
    /// Transitions that set a notification re-arm the dismiss timer.
    ///
    /// # Panics
    ///
    /// Panics outside a tokio runtime when `action` sets a notification,
    /// since arming the timer spawns a task.
    pub fn dispatch(&mut self, action: Action) {
        let shows_new_user = matches!(action, Action::AddUser(_));
        let sets_notification = action.sets_notification();
        let clears_notification = matches!(action, Action::ClearNotification);

        let state = std::mem::take(&mut self.state);
        self.state = state.reduce(action);

        if shows_new_user {
            self.selection.show_last_page(self.state.users());
        }
        if sets_notification {
            self.arm_notification_timer();
        } else if clears_notification {
            self.notification_timer.cancel();
        }
    }

    /// Wait for the next background completion and apply it.
    ///
    /// Cancel-safe: if the future is dropped before a completion arrives,
    /// nothing is lost.
    pub async fn process_next(&mut self) {
        let Some(event) = self.events_rx.recv().await else {
            return;
        };
        self.reap_finished_requests();

        match event {
            DashboardEvent::Dispatch(action) => self.dispatch(action),
            DashboardEvent::NotificationExpired { generation } => {
                if generation == self.notification_generation
                    && self.state.notification().is_some()
                {
                    self.dispatch(Action::ClearNotification);
                }
            }
        }
    }

    fn arm_notification_timer(&mut self) {
        self.notification_generation = self.notification_generation.wrapping_add(1);
        let generation = self.notification_generation;
        let events = self.events_tx.clone();
        self.notification_timer.arm(move || {
            report(&events, DashboardEvent::NotificationExpired { generation });
        });
    }

    fn reap_finished_requests(&mut self) {
        while let Some(result) = self.in_flight.try_join_next() {
            if let Err(join_error) = result {
                if join_error.is_panic() {
                    error!(error = %join_error, "dashboard request panicked");
                }
            }
        }
    }
}

fn report(events: &UnboundedSender<DashboardEvent>, event: DashboardEvent) {
    if events.send(event).is_err() {
        debug!("dashboard unmounted before completion was delivered");
    }
}
