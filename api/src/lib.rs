//! Fullstack server functions shared by the web and desktop builds.
//!
//! Credentials for the operator chat live only on the server (see
//! [`relay::RelayConfig`]); the client merely calls [`deliver_submission`].

use dioxus::prelude::*;

mod submission;
pub use submission::Submission;

#[cfg(feature = "server")]
pub mod relay;

/// Relay a validated contact or registration form to the operator chat.
#[server(DeliverSubmission)]
pub async fn deliver_submission(submission: Submission) -> Result<(), ServerFnError> {
    let config = crate::relay::RelayConfig::from_env().map_err(|err| {
        tracing::warn!(%err, "submission relay is not configured");
        ServerFnError::<server_fn::error::NoCustomError>::ServerError(err.to_string())
    })?;

    crate::relay::send(&config, &submission.operator_message())
        .await
        .map_err(|err| {
            tracing::warn!(%err, kind = submission.kind(), "submission relay failed");
            ServerFnError::<server_fn::error::NoCustomError>::ServerError(err.to_string())
        })?;

    tracing::info!(kind = submission.kind(), "submission delivered");
    Ok(())
}
