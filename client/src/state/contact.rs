//! Simulated contact form submission.
//!
//! There is no backend: submitting waits a fixed delay, reports success, and
//! returns to idle after a second delay. The trigger stays disabled from the
//! moment of submission until it is idle again. A component removed mid-wait
//! is not cancelled; the pending timers simply run out.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::future::Future;
use std::time::Duration;

/// Simulated network latency before the form reports success.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);
/// How long the success indicator stays up before the form resets.
pub const SUCCESS_HOLD: Duration = Duration::from_millis(3000);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContactStatus {
    #[default]
    Idle,
    Submitting,
    Success,
}

impl ContactStatus {
    /// Whether the submit button ignores clicks.
    pub fn is_disabled(self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// Message key for the submit button label.
    pub fn label_key(self) -> &'static str {
        match self {
            Self::Idle => "contact.form.send",
            Self::Submitting => "contact.form.sending",
            Self::Success => "contact.form.success",
        }
    }
}

/// Start a submission.
///
/// `set` receives `Submitting` before this returns, so the trigger is
/// disabled in the same tick as the click. The returned future drives the
/// remaining `Success` and `Idle` transitions using `sleep`.
pub fn submit<S, F, Fut>(mut set: S, sleep: F) -> impl Future<Output = ()>
where
    S: FnMut(ContactStatus),
    F: Fn(Duration) -> Fut,
    Fut: Future<Output = ()>,
{
    set(ContactStatus::Submitting);
    async move {
        sleep(SUBMIT_DELAY).await;
        set(ContactStatus::Success);
        sleep(SUCCESS_HOLD).await;
        set(ContactStatus::Idle);
    }
}
