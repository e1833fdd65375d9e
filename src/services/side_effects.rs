//! Follow-up calls scheduled by the dispatcher once a reply has been computed.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::{dao::messaging::MessagingApi, dto::response::MessageEdit};

/// A REST call against a message the bot sent earlier.
#[derive(Debug, Clone, PartialEq)]
pub enum SideEffect {
    DeleteMessage {
        token: String,
        message_id: String,
    },
    EditMessage {
        token: String,
        message_id: String,
        edit: MessageEdit,
    },
}

impl SideEffect {
    fn describe(&self) -> &'static str {
        match self {
            SideEffect::DeleteMessage { .. } => "delete message",
            SideEffect::EditMessage { .. } => "edit message",
        }
    }
}

/// Execute the effects in order, logging and swallowing failures.
///
/// Returns how many effects failed.
pub async fn run(messaging: Arc<dyn MessagingApi>, effects: Vec<SideEffect>) -> usize {
    let mut failures = 0;
    for effect in effects {
        let action = effect.describe();
        let outcome = match effect {
            SideEffect::DeleteMessage { token, message_id } => {
                messaging.delete_message(token, message_id).await
            }
            SideEffect::EditMessage {
                token,
                message_id,
                edit,
            } => messaging.edit_message(token, message_id, edit).await,
        };

        match outcome {
            Ok(()) => debug!(action, "side effect applied"),
            Err(err) => {
                failures += 1;
                warn!(action, error = %err, "side effect failed; reply already sent");
            }
        }
    }
    failures
}

/// Run the effects on a background task so the reply is not held back.
///
/// The task yields once before its first call so the handler can hand its reply
/// to the connection first. Delivery order is still best effort.
pub fn spawn(messaging: Arc<dyn MessagingApi>, effects: Vec<SideEffect>) -> Option<JoinHandle<()>> {
    if effects.is_empty() {
        return None;
    }

    Some(tokio::spawn(async move {
        tokio::task::yield_now().await;
        run(messaging, effects).await;
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{Call, FakeMessaging};

    fn delete(id: &str) -> SideEffect {
        SideEffect::DeleteMessage {
            token: "tok".into(),
            message_id: id.into(),
        }
    }

    #[tokio::test]
    async fn runs_effects_in_order() {
        let messaging = FakeMessaging::new();
        let edit = SideEffect::EditMessage {
            token: "tok".into(),
            message_id: "M2".into(),
            edit: MessageEdit::text_only("done"),
        };

        let failures = run(messaging.clone(), vec![delete("M1"), edit]).await;

        assert_eq!(failures, 0);
        assert_eq!(
            messaging.calls(),
            vec![
                Call::Delete {
                    token: "tok".into(),
                    message_id: "M1".into()
                },
                Call::Edit {
                    token: "tok".into(),
                    message_id: "M2".into(),
                    edit: MessageEdit::text_only("done"),
                },
            ]
        );
    }

    #[tokio::test]
    async fn failures_are_counted_not_propagated() {
        let messaging = FakeMessaging::failing();
        let failures = run(messaging.clone(), vec![delete("M1"), delete("M2")]).await;
        assert_eq!(failures, 2);
        assert_eq!(messaging.calls().len(), 2);
    }

    #[tokio::test]
    async fn spawn_skips_empty_batches() {
        let messaging = FakeMessaging::new();
        assert!(spawn(messaging.clone(), Vec::new()).is_none());

        let handle = spawn(messaging.clone(), vec![delete("M1")]).unwrap();
        handle.await.unwrap();
        assert_eq!(messaging.calls().len(), 1);
    }

    #[tokio::test]
    async fn spawned_effects_wait_for_the_caller() {
        let messaging = FakeMessaging::new();

        let handle = spawn(messaging.clone(), vec![delete("M1")]).unwrap();
        assert!(messaging.calls().is_empty());

        handle.await.unwrap();
        assert_eq!(messaging.calls().len(), 1);
    }
}
