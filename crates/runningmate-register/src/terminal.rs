//! Line-oriented stand-in for the mobile registration screen.

use crate::error::AppResult;
use registration_form::{Field, RegistrationForm, Router, SignupBackend};
use std::sync::Mutex;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};
use tracing::{debug, info};

/// Router that records the screen the app moved to.
#[derive(Debug, Default)]
pub struct TerminalRouter {
    current: Mutex<Option<String>>,
}

impl TerminalRouter {
    /// Screen navigated to, if any.
    pub fn current(&self) -> Option<String> {
        self.current.lock().ok().and_then(|screen| screen.clone())
    }
}

impl Router for TerminalRouter {
    fn navigate(&self, screen: &str) {
        info!(screen, "Navigating");
        if let Ok(mut current) = self.current.lock() {
            *current = Some(screen.to_string());
        }
    }
}

/// How the screen was left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenExit {
    Navigated(String),
    Aborted,
}

/// Prompts for the form fields and prints the alert modal.
pub struct TerminalScreen<I, O> {
    lines: Lines<I>,
    out: O,
}

impl<I, O> TerminalScreen<I, O>
where
    I: AsyncBufRead + Unpin,
    O: AsyncWrite + Unpin,
{
    pub fn new(input: I, out: O) -> Self {
        Self {
            lines: input.lines(),
            out,
        }
    }

    pub fn into_output(self) -> O {
        self.out
    }

    /// Drive the form until signup succeeds and the modal is closed, or
    /// input ends.
    pub async fn run<B>(
        &mut self,
        form: &mut RegistrationForm<TerminalRouter>,
        backend: &B,
    ) -> AppResult<ScreenExit>
    where
        B: SignupBackend + ?Sized,
    {
        self.write("RunningMate sign up (empty input keeps the current value)\n")
            .await?;

        loop {
            if !self.edit_fields(form).await? {
                info!("Input closed, leaving registration screen");
                return Ok(ScreenExit::Aborted);
            }

            let result = form.submit(backend).await;
            debug!(?result, "Submit finished");

            let alert = format!("\n[alert] {}\n(press enter to close)\n", form.modal().message);
            self.write(&alert).await?;

            // End of input closes the modal as well
            let _ = self.lines.next_line().await?;

            if form.close_modal() {
                let screen = form.router().current().unwrap_or_default();
                self.write(&format!("returning to {}\n", screen)).await?;
                return Ok(ScreenExit::Navigated(screen));
            }
        }
    }

    /// One pass over every field. Returns false once input is exhausted.
    async fn edit_fields(&mut self, form: &mut RegistrationForm<TerminalRouter>) -> AppResult<bool> {
        for field in Field::ALL {
            let current = form.draft().field(field);
            let prompt = match (current.is_empty(), field.is_secret()) {
                (true, _) => format!("{}: ", field.label()),
                (false, true) => format!("{} [unchanged]: ", field.label()),
                (false, false) => format!("{} [{}]: ", field.label(), current),
            };
            self.write(&prompt).await?;

            let Some(line) = self.lines.next_line().await? else {
                return Ok(false);
            };

            let value = line.trim_end_matches('\r');
            if !value.is_empty() {
                form.update_field(field, value);
            }
        }

        Ok(true)
    }

    async fn write(&mut self, text: &str) -> AppResult<()> {
        self.out.write_all(text.as_bytes()).await?;
        self.out.flush().await?;
        Ok(())
    }
}
