//! Bounded polling driver.
//!
//! Repeats an async status check on a fixed interval until the check
//! reports a terminal status or an absolute deadline passes. QR login
//! confirmation runs on this; the driver is generic so its timing rules
//! are testable on their own.

use std::future::Future;
use std::time::Duration;

use tokio::time::{Instant, sleep};

use crate::error::Result;

/// One bounded polling run: fixed interval, absolute deadline.
///
/// Consumed by [`run`](Poller::run); a new run needs a new `Poller`.
pub(crate) struct Poller {
    interval: Duration,
    deadline: Instant,
}

impl Poller {
    pub fn new(interval: Duration, timeout: Duration) -> Self {
        Self {
            interval,
            deadline: Instant::now() + timeout,
        }
    }

    /// Drive `check` until `is_terminal` accepts an observed status.
    ///
    /// `observe` sees every freshly fetched status, terminal or not, and
    /// cannot influence the loop. A check error aborts the run
    /// immediately; a failing backend must not masquerade as an endless
    /// wait. Returns `Ok(None)` when the deadline passes without a
    /// terminal status.
    pub async fn run<S, F, Fut, P, O>(
        self,
        mut check: F,
        is_terminal: P,
        mut observe: O,
    ) -> Result<Option<S>>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<S>>,
        P: Fn(&S) -> bool,
        O: FnMut(&S),
    {
        while Instant::now() < self.deadline {
            let status = check().await?;
            observe(&status);
            if is_terminal(&status) {
                return Ok(Some(status));
            }
            sleep(self.interval).await;
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::time::Instant;

    use super::*;
    use crate::error::QQMusicError;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Step {
        Waiting,
        Done,
        Fail,
    }

    /// Check closure replaying `steps` in order; `Fail` yields an error.
    fn scripted(steps: Vec<Step>) -> impl FnMut() -> std::future::Ready<Result<Step>> {
        let mut next = 0;
        move || {
            let step = steps[next];
            next += 1;
            std::future::ready(match step {
                Step::Fail => Err(QQMusicError::Timeout),
                other => Ok(other),
            })
        }
    }

    #[tokio::test(start_paused = true)]
    async fn terminal_status_returns_without_waiting_out_the_deadline() {
        let start = Instant::now();
        let steps = vec![Step::Waiting, Step::Waiting, Step::Done];
        let outcome = Poller::new(Duration::from_secs(3), Duration::from_secs(10))
            .run(scripted(steps), |s| *s == Step::Done, |_| {})
            .await
            .unwrap();

        assert_eq!(outcome, Some(Step::Done));
        assert_eq!(start.elapsed(), Duration::from_secs(6));
    }

    #[tokio::test(start_paused = true)]
    async fn deadline_yields_none_instead_of_an_error() {
        let steps = vec![Step::Waiting; 4];
        let outcome = Poller::new(Duration::from_secs(3), Duration::from_secs(10))
            .run(scripted(steps), |s| *s == Step::Done, |_| {})
            .await
            .unwrap();

        assert_eq!(outcome, None);
    }

    #[tokio::test(start_paused = true)]
    async fn check_error_aborts_the_run() {
        let start = Instant::now();
        let steps = vec![Step::Waiting, Step::Fail];
        let result = Poller::new(Duration::from_secs(3), Duration::from_secs(30))
            .run(scripted(steps), |s| *s == Step::Done, |_| {})
            .await;

        assert!(matches!(result, Err(QQMusicError::Timeout)));
        assert_eq!(start.elapsed(), Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn observer_sees_every_status_including_the_terminal_one() {
        let mut seen = Vec::new();
        let steps = vec![Step::Waiting, Step::Done];
        Poller::new(Duration::from_secs(1), Duration::from_secs(10))
            .run(scripted(steps), |s| *s == Step::Done, |s| seen.push(*s))
            .await
            .unwrap();

        assert_eq!(seen, vec![Step::Waiting, Step::Done]);
    }
}
