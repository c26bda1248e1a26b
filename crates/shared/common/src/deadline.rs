//! Request deadlines.
//!
//! A [`Deadline`] travels with a request into the workflows. Store calls are
//! bounded with [`Deadline::run`]; when it fires the inner future is dropped,
//! which cancels the in-flight query. Expensive CPU work checks
//! [`Deadline::check`] before it starts.

use std::future::Future;
use std::time::Duration;

use tokio::time::{timeout_at, Instant};

use crate::error::{AppError, AppResult};

/// Point in time after which a request is considered abandoned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    at: Option<Instant>,
}

impl Deadline {
    /// Deadline `timeout` from now.
    pub fn after(timeout: Duration) -> Self {
        Self {
            at: Some(Instant::now() + timeout),
        }
    }

    /// No deadline.
    pub fn none() -> Self {
        Self { at: None }
    }

    pub fn is_expired(&self) -> bool {
        self.at.is_some_and(|at| Instant::now() >= at)
    }

    /// Fail with [`AppError::DeadlineExceeded`] if the deadline has passed.
    pub fn check(&self) -> AppResult<()> {
        if self.is_expired() {
            Err(AppError::DeadlineExceeded)
        } else {
            Ok(())
        }
    }

    /// Drive `future` until it completes or the deadline fires.
    pub async fn run<T, F>(&self, future: F) -> AppResult<T>
    where
        F: Future<Output = AppResult<T>>,
    {
        match self.at {
            Some(at) => timeout_at(at, future)
                .await
                .map_err(|_| AppError::DeadlineExceeded)?,
            None => future.await,
        }
    }
}

impl Default for Deadline {
    fn default() -> Self {
        Self::none()
    }
}
