use validator::Validate;

use crate::{
    entities::contact_message::{ContactForm, ContactMessage},
    errors::AppError,
    notify::telegram::Notifier,
    repositories::contact::ContactMessageRepository,
};

pub struct ContactHandler<R, N>
where
    R: ContactMessageRepository,
    N: Notifier,
{
    pub contact_repo: R,
    pub notifier: N,
}

impl<R, N> ContactHandler<R, N>
where
    R: ContactMessageRepository,
    N: Notifier,
{
    pub fn new(contact_repo: R, notifier: N) -> Self {
        ContactHandler {
            contact_repo,
            notifier,
        }
    }

    /// Validates and persists a submission, then fires the one-shot relay.
    ///
    /// The stored row is the record of truth; the relay outcome is ignored
    /// here and never affects the caller's response.
    pub async fn submit(&self, form: ContactForm) -> Result<ContactMessage, AppError> {
        form.validate()?;

        let message = self.contact_repo.create_contact_message(&form).await?;

        self.notifier.send(&submission_text(&message)).await;

        Ok(message)
    }

    /// Replays the relay for stored messages and reports how many sends
    /// succeeded. `ids` of `None` selects every stored message. Unknown ids
    /// are skipped; per-message failures stay invisible beyond the count.
    pub async fn resend(&self, ids: Option<Vec<i64>>) -> Result<u64, AppError> {
        let messages = match ids {
            Some(ids) => {
                let mut selected = Vec::with_capacity(ids.len());
                for id in ids {
                    match self.contact_repo.get_contact_message(id).await {
                        Ok(message) => selected.push(message),
                        Err(AppError::NotFound(_)) => continue,
                        Err(e) => return Err(e),
                    }
                }
                selected
            }
            None => self.contact_repo.list_contact_messages().await?,
        };

        let mut sent = 0;
        for message in &messages {
            if self.notifier.send(&resend_text(message)).await {
                sent += 1;
            }
        }

        Ok(sent)
    }
}

fn submission_text(message: &ContactMessage) -> String {
    format!(
        "Новая заявка с формы:\nИмя: {}\nEmail: {}\nСообщение: {}",
        message.full_name, message.email, message.message
    )
}

fn resend_text(message: &ContactMessage) -> String {
    format!(
        "Повторная отправка сообщения:\nИмя: {}\nEmail: {}\nСообщение: {}",
        message.full_name, message.email, message.message
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::{
        Arc, Mutex,
        atomic::{AtomicI64, Ordering},
    };

    #[derive(Default)]
    struct InMemoryContactRepo {
        messages: Mutex<Vec<ContactMessage>>,
        next_id: AtomicI64,
    }

    #[async_trait]
    impl ContactMessageRepository for InMemoryContactRepo {
        async fn create_contact_message(
            &self,
            form: &ContactForm,
        ) -> Result<ContactMessage, AppError> {
            let message = ContactMessage {
                id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
                full_name: form.full_name.clone(),
                email: form.email.clone(),
                message: form.message.clone(),
                created_at: Utc::now(),
            };
            self.messages.lock().unwrap().push(message.clone());
            Ok(message)
        }

        async fn get_contact_message(&self, id: i64) -> Result<ContactMessage, AppError> {
            self.messages
                .lock()
                .unwrap()
                .iter()
                .find(|m| m.id == id)
                .cloned()
                .ok_or_else(|| AppError::NotFound("Contact message not found".into()))
        }

        async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, AppError> {
            let mut messages = self.messages.lock().unwrap().clone();
            messages.reverse();
            Ok(messages)
        }
    }

    #[derive(Clone, Default)]
    struct RecordingNotifier {
        sent: Arc<Mutex<Vec<String>>>,
        fail: bool,
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn send(&self, text: &str) -> bool {
            self.sent.lock().unwrap().push(text.to_string());
            !self.fail
        }
    }

    fn valid_form() -> ContactForm {
        ContactForm {
            full_name: "A".into(),
            email: "a@example.com".into(),
            message: "hi".into(),
        }
    }

    #[tokio::test]
    async fn valid_submission_persists_and_notifies() {
        let notifier = RecordingNotifier::default();
        let handler = ContactHandler::new(InMemoryContactRepo::default(), notifier.clone());

        let message = handler.submit(valid_form()).await.unwrap();
        assert_eq!(message.full_name, "A");

        let sent = notifier.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].contains("a@example.com"));
        assert!(sent[0].starts_with("Новая заявка с формы:"));
    }

    #[tokio::test]
    async fn invalid_submission_never_reaches_the_relay() {
        let notifier = RecordingNotifier::default();
        let handler = ContactHandler::new(InMemoryContactRepo::default(), notifier.clone());

        let result = handler.submit(ContactForm::default()).await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));
        assert!(notifier.sent.lock().unwrap().is_empty());
        assert!(
            handler
                .contact_repo
                .list_contact_messages()
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn relay_failure_does_not_fail_the_submission() {
        let notifier = RecordingNotifier {
            fail: true,
            ..Default::default()
        };
        let handler = ContactHandler::new(InMemoryContactRepo::default(), notifier.clone());

        assert!(handler.submit(valid_form()).await.is_ok());
        assert_eq!(notifier.sent.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn resend_counts_only_successful_sends() {
        let notifier = RecordingNotifier::default();
        let handler = ContactHandler::new(InMemoryContactRepo::default(), notifier.clone());

        let first = handler.submit(valid_form()).await.unwrap();
        let second = handler.submit(valid_form()).await.unwrap();
        notifier.sent.lock().unwrap().clear();

        // Unknown ids are skipped rather than failing the whole batch.
        let sent = handler
            .resend(Some(vec![first.id, second.id, 999]))
            .await
            .unwrap();
        assert_eq!(sent, 2);

        let texts = notifier.sent.lock().unwrap();
        assert!(texts.iter().all(|t| t.starts_with("Повторная отправка")));
    }

    #[tokio::test]
    async fn resend_without_ids_replays_everything() {
        let notifier = RecordingNotifier::default();
        let handler = ContactHandler::new(InMemoryContactRepo::default(), notifier.clone());

        handler.submit(valid_form()).await.unwrap();
        handler.submit(valid_form()).await.unwrap();
        notifier.sent.lock().unwrap().clear();

        assert_eq!(handler.resend(None).await.unwrap(), 2);
    }
}
