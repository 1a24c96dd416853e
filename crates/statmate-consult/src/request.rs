use serde::{Deserialize, Serialize};

use crate::{
    config::ConsultConfig,
    message::{ChatMessage, ChatRole, FileAttachment},
    prompt::{self, AnalysisKind},
    service::ConsultationError,
};

/// Placeholder data context when the data only comes as attachments.
pub const ATTACHMENT_ONLY_CONTEXT: &str = "Data provided in attachment";

/// A prior turn as forwarded to the service: text only, attachments are not resent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryTurn {
    pub role: ChatRole,
    pub text: String,
}

/// Everything a consultation service needs to produce one reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsultationRequest {
    pub model: String,
    pub temperature: f32,
    pub system_instruction: String,
    pub history: Vec<HistoryTurn>,
    pub message: String,
    pub attachments: Vec<FileAttachment>,
}

impl ConsultationRequest {
    /// Builds a chat request for `message`, preceded by `history`.
    pub fn chat(
        config: &ConsultConfig,
        history: &[ChatMessage],
        message: &ChatMessage,
    ) -> Result<Self, ConsultationError> {
        if message.is_blank() {
            return Err(ConsultationError::EmptyRequest);
        }
        Ok(Self {
            model: config.model.clone(),
            temperature: config.chat_temperature,
            system_instruction: prompt::system_instruction(config.language),
            history: history
                .iter()
                .map(|m| HistoryTurn {
                    role: m.role,
                    text: m.text.clone(),
                })
                .collect(),
            message: message.text.clone(),
            attachments: message.attachments.clone(),
        })
    }

    /// Builds a one-shot analysis request.
    ///
    /// Fails with [`ConsultationError::EmptyRequest`] when there is neither data
    /// text nor an attachment to analyze.
    pub fn analysis(
        config: &ConsultConfig,
        kind: AnalysisKind,
        data_context: &str,
        attachments: Vec<FileAttachment>,
    ) -> Result<Self, ConsultationError> {
        let data_context = data_context.trim();
        let data_context = match (data_context.is_empty(), attachments.is_empty()) {
            (true, true) => return Err(ConsultationError::EmptyRequest),
            (true, false) => ATTACHMENT_ONLY_CONTEXT,
            (false, _) => data_context,
        };
        Ok(Self {
            model: config.model.clone(),
            temperature: config.analysis_temperature,
            system_instruction: prompt::system_instruction(config.language),
            history: vec![],
            message: prompt::analysis_prompt(kind, data_context, config.language),
            attachments,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::Language;

    fn config() -> ConsultConfig {
        ConsultConfig {
            language: Language::En,
            ..ConsultConfig::default()
        }
    }

    #[test]
    fn test_chat_request_carries_history_text_only() {
        let attachment = FileAttachment::from_bytes("data.csv", b"1,2");
        let history = vec![
            ChatMessage::user("Which test for two groups?", vec![attachment.clone()]),
            ChatMessage::model("Use an independent-samples t-test."),
        ];
        let message = ChatMessage::user("And for three groups?", vec![]);
        let request = ConsultationRequest::chat(&config(), &history, &message).unwrap();

        assert_eq!(request.temperature, 0.7);
        assert_eq!(request.message, "And for three groups?");
        assert_eq!(
            request.history,
            vec![
                HistoryTurn {
                    role: ChatRole::User,
                    text: "Which test for two groups?".to_owned(),
                },
                HistoryTurn {
                    role: ChatRole::Model,
                    text: "Use an independent-samples t-test.".to_owned(),
                },
            ]
        );
        assert!(request.attachments.is_empty());
        assert!(request.system_instruction.contains("English"));
    }

    #[test]
    fn test_chat_rejects_blank_message() {
        let err = ConsultationRequest::chat(&config(), &[], &ChatMessage::user(" ", vec![]))
            .unwrap_err();
        assert_eq!(err, ConsultationError::EmptyRequest);
    }

    #[test]
    fn test_analysis_request() {
        let request = ConsultationRequest::analysis(
            &config(),
            AnalysisKind::ChiSquare,
            " 10, 20 \n 30, 40 ",
            vec![],
        )
        .unwrap();
        assert_eq!(request.temperature, 0.2);
        assert!(request.history.is_empty());
        assert!(request.message.contains("\"Chi-Square Test\""));
        assert!(request.message.contains("10, 20 \n 30, 40"));
    }

    #[test]
    fn test_analysis_with_attachment_only() {
        let attachment = FileAttachment::from_bytes("table.pdf", b"%PDF");
        let request =
            ConsultationRequest::analysis(&config(), AnalysisKind::Anova, "", vec![attachment])
                .unwrap();
        assert!(request.message.contains(ATTACHMENT_ONLY_CONTEXT));
        assert_eq!(request.attachments.len(), 1);
    }

    #[test]
    fn test_analysis_without_data_fails() {
        let err = ConsultationRequest::analysis(&config(), AnalysisKind::Anova, "  ", vec![])
            .unwrap_err();
        assert_eq!(err, ConsultationError::EmptyRequest);
    }
}
