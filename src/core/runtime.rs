use tokio::time::{sleep, Duration};
use tracing::{debug, error, info};

use crate::{
    core::homework::{check_response, current_date, parse_status},
    errors::BotError,
    memory::PollState,
    models::VerdictTable,
    providers::{Notifier, ReviewApi},
};

/// What a single iteration ended with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cycle {
    NothingNew,
    Unchanged,
    Notified,
    Failed,
}

pub fn failure_message(error: &BotError) -> String {
    format!("Сбой в работе программы: {}", error)
}

pub struct Runtime<A, N> {
    api: A,
    notifier: N,
    verdicts: VerdictTable,
    retry_period: Duration,
    state: PollState,
}

impl<A: ReviewApi, N: Notifier> Runtime<A, N> {
    pub fn new(
        api: A,
        notifier: N,
        verdicts: VerdictTable,
        retry_period: Duration,
        state: PollState,
    ) -> Self {
        Runtime {
            api,
            notifier,
            verdicts,
            retry_period,
            state,
        }
    }

    pub fn state(&self) -> &PollState {
        &self.state
    }

    // fetch -> validate -> diff -> notify -> advance cursor
    async fn poll(&mut self) -> Result<Cycle, BotError> {
        let response = self.api.get_api_answer(self.state.cursor).await?;
        let homeworks = check_response(&response)?;

        // The API lists the most recently updated homework first; only that
        // record is diffed and announced.
        let cycle = match homeworks.first() {
            None => {
                debug!(cursor = self.state.cursor, "No new homework statuses");
                Cycle::NothingNew
            }
            Some(homework) if !self.state.is_new(homework) => {
                debug!(homework = ?self.state.last_seen(), "Homework status unchanged");
                Cycle::Unchanged
            }
            Some(homework) => {
                // Build the message first so a bad record leaves no trace.
                let message = parse_status(homework, &self.verdicts)?;
                self.state.remember(homework);
                self.notifier.send_message(&message).await;
                Cycle::Notified
            }
        };

        self.state.advance_cursor(current_date(&response)?);
        Ok(cycle)
    }

    /// Runs one iteration. Errors are logged and swallowed so the caller can
    /// keep looping.
    pub async fn tick(&mut self) -> Cycle {
        match self.poll().await {
            Ok(cycle) => cycle,
            Err(e) => {
                error!("{}", failure_message(&e));
                Cycle::Failed
            }
        }
    }

    pub async fn run_periodically(&mut self) -> Result<(), anyhow::Error> {
        info!(
            cursor = self.state().cursor,
            retry_period_secs = self.retry_period.as_secs(),
            "=== Starting homework bot ==="
        );

        loop {
            self.tick().await;
            // tick() never returns an error, so this sleep always runs.
            sleep(self.retry_period).await;
        }
    }
}
