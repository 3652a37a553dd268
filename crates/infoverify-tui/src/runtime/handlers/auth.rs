//! Simulated sign-in/register request.
//!
//! There is no backend: the request always succeeds after a fixed delay.
//! Cancelling the token (leaving the auth screen, switching mode) ends the
//! wait early with `RequestOutcome::Cancelled`.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::events::{RequestOutcome, TaskResult};

pub async fn auth_request(delay: Duration, cancel: Option<CancellationToken>) -> TaskResult {
    TaskResult::AuthRequest(simulate_request(delay, cancel).await)
}

pub async fn simulate_request(delay: Duration, cancel: Option<CancellationToken>) -> RequestOutcome {
    let Some(cancel) = cancel else {
        tokio::time::sleep(delay).await;
        return RequestOutcome::Succeeded;
    };

    tokio::select! {
        biased;
        () = cancel.cancelled() => {
            tracing::debug!("auth request cancelled");
            RequestOutcome::Cancelled
        }
        () = tokio::time::sleep(delay) => RequestOutcome::Succeeded,
    }
}
