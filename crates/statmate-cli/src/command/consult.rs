use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use statmate_consult::{
    config::ConsultConfig,
    message::{ChatMessage, FileAttachment},
    prompt::{AnalysisKind, Language},
    request::ConsultationRequest,
};
use tracing::{debug, info, warn};

use crate::util::{self, Output};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct ConsultArg {
    /// Analysis to request (descriptive, t-test, anova, correlation, regression, chi-square)
    #[arg(long, conflicts_with = "message", required_unless_present = "message")]
    analysis: Option<AnalysisKind>,
    /// Free-form chat message instead of an analysis
    #[arg(long)]
    message: Option<String>,
    /// JSON file with the prior chat messages
    #[arg(long, requires = "message")]
    history: Option<PathBuf>,
    /// Data to analyze, as pasted text
    #[arg(long, conflicts_with = "file")]
    data: Option<String>,
    /// File whose text is used as the data to analyze
    #[arg(long)]
    file: Option<PathBuf>,
    /// Files sent along with the request (CSV, text, PDF or images)
    #[arg(long = "attach", value_name = "PATH", num_args = 1..)]
    attachments: Vec<PathBuf>,
    /// Response language (en, th, zh); overrides the config file
    #[arg(long)]
    language: Option<Language>,
    /// JSON file with consultation settings
    #[arg(long)]
    config: Option<PathBuf>,
    /// Output file path for the request JSON
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &ConsultArg) -> anyhow::Result<()> {
    let mut config = match &arg.config {
        Some(path) => util::read_json_file::<ConsultConfig, _>("consultation config", path)?,
        None => ConsultConfig::default(),
    };
    if let Some(language) = arg.language {
        config.language = language;
    }
    debug!(model = %config.model, language = %config.language, "loaded consultation config");

    let attachments = arg
        .attachments
        .iter()
        .map(|path| read_attachment(path))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let request = match (arg.analysis, &arg.message) {
        (Some(kind), _) => {
            let data_context = read_data_context(arg)?;
            if computable_locally(kind, &data_context, &attachments) {
                warn!(
                    analysis = kind.id(),
                    "this analysis can be computed locally with the describe or t-test command"
                );
            }
            info!(analysis = kind.id(), "building analysis request");
            ConsultationRequest::analysis(&config, kind, &data_context, attachments)
                .with_context(|| format!("No data for {}. {}", kind.title(), kind.input_hint()))?
        }
        (None, Some(message)) => {
            let history = match &arg.history {
                Some(path) => util::read_json_file::<Vec<ChatMessage>, _>("chat history", path)?,
                None => vec![],
            };
            info!(history = history.len(), "building chat request");
            let message = ChatMessage::user(message.as_str(), attachments);
            ConsultationRequest::chat(&config, &history, &message)?
        }
        (None, None) => anyhow::bail!("Either --analysis or --message is required"),
    };

    if let Err(err) = config.api_key() {
        warn!(%err, var = %config.api_key_var, "the request cannot be sent without an API key");
    }
    Output::save_json(&request, arg.output.clone())
}

/// Whether everything sent is plain numbers the local commands could handle.
///
/// Images and PDFs still need the remote service to be read.
fn computable_locally(
    kind: AnalysisKind,
    data_context: &str,
    attachments: &[FileAttachment],
) -> bool {
    kind.is_local()
        && (!data_context.trim().is_empty() || !attachments.is_empty())
        && attachments.iter().all(FileAttachment::is_text)
}

fn read_data_context(arg: &ConsultArg) -> anyhow::Result<String> {
    match (&arg.data, &arg.file) {
        (Some(data), _) => Ok(data.clone()),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read data file: {}", path.display())),
        (None, None) => Ok(String::new()),
    }
}

fn read_attachment(path: &Path) -> anyhow::Result<FileAttachment> {
    let bytes = fs::read(path)
        .with_context(|| format!("Failed to read attachment: {}", path.display()))?;
    let name = path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    );
    let attachment = FileAttachment::from_bytes(name, &bytes);
    debug!(
        name = %attachment.name,
        mime_type = %attachment.mime_type,
        bytes = bytes.len(),
        "attached file"
    );
    Ok(attachment)
}
