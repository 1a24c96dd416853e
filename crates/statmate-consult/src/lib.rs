//! Contracts for the remote statistical consultation service.
//!
//! Advanced analyses (ANOVA, regression, correlation, chi-square) and free-form
//! questions are delegated to a remote language-model service. This crate owns
//! everything on this side of that boundary: message and attachment types, prompt
//! construction, the request shape, and the [`service::ConsultationService`] and
//! [`history::HistoryStore`] seams. No transport is implemented here.
//!
//! # Modules
//!
//! - [`config`]: Model and temperature settings
//! - [`message`]: Chat messages, roles, and file attachments
//! - [`prompt`]: Analysis kinds, languages, and prompt text
//! - [`request`]: The request handed to a consultation service
//! - [`service`]: The service trait and the [`service::Conversation`] driver
//! - [`history`]: Conversation history storage
//!
//! # Examples
//!
//! ```
//! use statmate_consult::{
//!     config::ConsultConfig, prompt::AnalysisKind, request::ConsultationRequest,
//! };
//!
//! let config = ConsultConfig::default();
//! let request = ConsultationRequest::analysis(
//!     &config,
//!     AnalysisKind::Anova,
//!     "Group A: 10, 12, 11\nGroup B: 15, 14, 16",
//!     vec![],
//! )
//! .unwrap();
//! assert!(request.message.contains("Analysis of Variance (ANOVA)"));
//! ```

pub mod config;
pub mod history;
pub mod message;
pub mod prompt;
pub mod request;
pub mod service;
