//! Line-driven terminal front end for the dashboard.
//!
//! Commands arrive one per line; every processed command or background
//! completion re-renders the screen. Input and completions are multiplexed on
//! one task, so state changes apply one at a time in arrival order.

use std::io::{self, Write};

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::domain::{Dashboard, EntryForm, IdGenerator, RandomIdGenerator};

mod command;
mod render;

pub use command::{Command, CommandError, HELP};
pub use render::{DashboardScreen, PageButton, PaginationStrip};

/// Whether the session continues after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep reading commands.
    Continue,
    /// Leave the dashboard.
    Quit,
}

enum Input {
    Line(Option<String>),
    Completion,
}

/// Dashboard plus the entry form it mounts.
pub struct TerminalDashboard<G = RandomIdGenerator> {
    dashboard: Dashboard,
    form: EntryForm<G>,
}

impl<G: IdGenerator> TerminalDashboard<G> {
    /// Pair a dashboard with its entry form.
    pub fn new(dashboard: Dashboard, form: EntryForm<G>) -> Self {
        Self { dashboard, form }
    }

    /// The dashboard controller.
    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    /// Mutable access for driving background completions.
    pub fn dashboard_mut(&mut self) -> &mut Dashboard {
        &mut self.dashboard
    }

    /// The entry form.
    pub fn form(&self) -> &EntryForm<G> {
        &self.form
    }

    /// Current frame.
    pub fn screen(&self) -> DashboardScreen<'_> {
        DashboardScreen::new(&self.dashboard, &self.form)
    }

    /// Apply one command.
    pub fn apply(&mut self, command: Command) -> Flow {
        match command {
            Command::Search(query) => self.dashboard.set_search_query(query),
            Command::Page(page) => {
                self.dashboard.change_page(page);
            }
            Command::Next => {
                self.dashboard.next_page();
            }
            Command::Previous => {
                self.dashboard.previous_page();
            }
            Command::Name(name) => self.form.set_name(name),
            Command::Email(email) => self.form.set_email(email),
            Command::Submit => {
                let user = self.form.submit();
                self.dashboard.add_user(user);
            }
            Command::Delete(id) => self.dashboard.delete_user(id),
            Command::Refresh => {
                self.dashboard.refresh();
            }
            Command::Dismiss => self.dashboard.dismiss_notification(),
            Command::Help => {}
            Command::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    /// Mount the dashboard and serve commands from `input` until it ends or
    /// `quit` is entered. Dropping the session aborts outstanding requests.
    ///
    /// # Errors
    ///
    /// Returns I/O errors from reading `input` or writing `output`.
    pub async fn run<R, W>(mut self, input: R, mut output: W) -> io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        self.dashboard.mount();
        render_to(&self.screen(), &mut output)?;

        let mut lines = input.lines();
        loop {
            let next = tokio::select! {
                line = lines.next_line() => Input::Line(line?),
                () = self.dashboard.process_next() => Input::Completion,
            };

            if let Input::Line(line) = next {
                let Some(line) = line else {
                    break;
                };
                match line.parse::<Command>() {
                    Ok(Command::Help) => writeln!(output, "{HELP}")?,
                    Ok(command) => {
                        if self.apply(command) == Flow::Quit {
                            break;
                        }
                    }
                    Err(error) => {
                        writeln!(output, "{error}")?;
                        continue;
                    }
                }
            }
            render_to(&self.screen(), &mut output)?;
        }
        output.flush()
    }
}

fn render_to<W: Write>(screen: &DashboardScreen<'_>, output: &mut W) -> io::Result<()> {
    writeln!(output, "{screen}")?;
    output.flush()
}
