//! The consultation service seam and the conversation that drives it.

use tracing::{debug, warn};

use crate::{
    config::ConsultConfig,
    history::HistoryStore,
    message::{ChatMessage, FileAttachment},
    request::ConsultationRequest,
};

/// Failure of a consultation.
///
/// Every variant is reported to users as a failed analysis; the detail is for logs.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConsultationError {
    #[display("analysis failed: API key is missing")]
    MissingApiKey,
    #[display("analysis failed: enter data, a message, or an attachment")]
    EmptyRequest,
    #[display("analysis failed: {message}")]
    Failed { message: String },
}

/// A remote service that turns a request into report text.
///
/// Implementations own transport, timeouts and authentication. The engine does
/// not retry: one request yields one reply or one error.
pub trait ConsultationService {
    fn consult(&self, request: &ConsultationRequest) -> Result<String, ConsultationError>;
}

impl<S> ConsultationService for &S
where
    S: ConsultationService + ?Sized,
{
    fn consult(&self, request: &ConsultationRequest) -> Result<String, ConsultationError> {
        (**self).consult(request)
    }
}

/// A chat conversation persisted in a [`HistoryStore`].
///
/// The user's turn is recorded before the service is called, so it survives a
/// failed reply; a model turn is appended only on success.
#[derive(Debug)]
pub struct Conversation<H> {
    key: String,
    store: H,
    messages: Vec<ChatMessage>,
}

impl<H> Conversation<H>
where
    H: HistoryStore,
{
    /// Opens the conversation stored under `key`.
    ///
    /// An unreadable history is logged and replaced by an empty one.
    pub fn open(key: impl Into<String>, store: H) -> Self {
        let key = key.into();
        let messages = store.load(&key).unwrap_or_else(|err| {
            warn!(%err, "failed to load chat history, starting empty");
            vec![]
        });
        debug!(%key, messages = messages.len(), "opened conversation");
        Self {
            key,
            store,
            messages,
        }
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    #[must_use]
    pub fn store(&self) -> &H {
        &self.store
    }

    /// Sends a user message and records the reply.
    pub fn send<S>(
        &mut self,
        config: &ConsultConfig,
        service: &S,
        text: &str,
        attachments: Vec<FileAttachment>,
    ) -> Result<&ChatMessage, ConsultationError>
    where
        S: ConsultationService + ?Sized,
    {
        let user_message = ChatMessage::user(text, attachments);
        let request = ConsultationRequest::chat(config, &self.messages, &user_message)?;
        self.messages.push(user_message);
        self.persist();

        debug!(
            model = %request.model,
            history = request.history.len(),
            attachments = request.attachments.len(),
            "sending consultation request"
        );
        let reply = service.consult(&request)?;
        if reply.trim().is_empty() {
            return Err(ConsultationError::Failed {
                message: "service returned an empty response".to_owned(),
            });
        }
        self.messages.push(ChatMessage::model(reply));
        self.persist();
        Ok(&self.messages[self.messages.len() - 1])
    }

    /// Drops all messages and removes the stored history.
    pub fn clear(&mut self) {
        self.messages.clear();
        if let Err(err) = self.store.clear(&self.key) {
            warn!(%err, "failed to clear chat history");
        }
    }

    fn persist(&mut self) {
        if let Err(err) = self.store.save(&self.key, &self.messages) {
            warn!(%err, "failed to save chat history");
        }
    }
}
