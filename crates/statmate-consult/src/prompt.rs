//! Prompt text sent to the consultation service.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Response language requested from the consultant.
#[derive(
    Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::FromStr,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    #[default]
    Th,
    Zh,
}

impl Language {
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Th => "th",
            Language::Zh => "zh",
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Th => "Thai",
            Language::Zh => "Chinese",
        }
    }

    fn register(self) -> &'static str {
        match self {
            Language::En => "formal academic English",
            Language::Th => "professional academic Thai",
            Language::Zh => "Simplified Chinese in an academic register",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.code(), f)
    }
}

/// The analyses offered by the assistant.
///
/// Descriptive statistics and the t-test are computed locally by
/// `statmate-stats`; the rest are delegated to the consultation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnalysisKind {
    Descriptive,
    TTest,
    Anova,
    Correlation,
    Regression,
    ChiSquare,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display(
    "unknown analysis kind '{name}' (expected one of: {})",
    AnalysisKind::ALL.map(AnalysisKind::id).join(", ")
)]
pub struct UnknownAnalysisKindError {
    pub name: String,
}

impl AnalysisKind {
    pub const ALL: [AnalysisKind; 6] = [
        AnalysisKind::Descriptive,
        AnalysisKind::TTest,
        AnalysisKind::Anova,
        AnalysisKind::Correlation,
        AnalysisKind::Regression,
        AnalysisKind::ChiSquare,
    ];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            AnalysisKind::Descriptive => "descriptive",
            AnalysisKind::TTest => "t-test",
            AnalysisKind::Anova => "anova",
            AnalysisKind::Correlation => "correlation",
            AnalysisKind::Regression => "regression",
            AnalysisKind::ChiSquare => "chi-square",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            AnalysisKind::Descriptive => "Descriptive Statistics",
            AnalysisKind::TTest => "Independent Samples T-Test",
            AnalysisKind::Anova => "Analysis of Variance (ANOVA)",
            AnalysisKind::Correlation => "Correlation Analysis",
            AnalysisKind::Regression => "Linear Regression",
            AnalysisKind::ChiSquare => "Chi-Square Test",
        }
    }

    /// Hint shown to users about what data to provide.
    #[must_use]
    pub fn input_hint(self) -> &'static str {
        match self {
            AnalysisKind::Descriptive => "Enter numbers separated by commas or newlines.",
            AnalysisKind::TTest => "Enter two groups of at least 2 numbers each.",
            AnalysisKind::Anova => {
                "Paste one line per group, e.g. Group A: 10, 12... Group B: 15, 14..."
            }
            AnalysisKind::Correlation => {
                "Provide two or more variables to check for relationships."
            }
            AnalysisKind::Regression => "Name the IV and DV, then paste the paired values.",
            AnalysisKind::ChiSquare => {
                "Provide contingency table data or raw categorical counts."
            }
        }
    }

    /// Whether the engine computes this analysis without the remote service.
    #[must_use]
    pub fn is_local(self) -> bool {
        matches!(self, AnalysisKind::Descriptive | AnalysisKind::TTest)
    }
}

impl fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.title(), f)
    }
}

impl FromStr for AnalysisKind {
    type Err = UnknownAnalysisKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.id() == name || kind.id().replace('-', "") == name)
            .ok_or(UnknownAnalysisKindError { name })
    }
}

/// Standing instructions for the consultant persona.
#[must_use]
pub fn system_instruction(language: Language) -> String {
    format!(
        "You are StatMate, an expert consultant in research statistics and in the Jamovi \
         statistical software.\n\
         \n\
         Language: answer in {name} (\"{code}\") using {register}, unless the user asks \
         for another language.\n\
         \n\
         Responsibilities:\n\
         - Advise on test selection, research design and assumption checking.\n\
         - Explain how to run analyses in Jamovi with concrete menu paths \
           (e.g. Analyses > Exploration > Descriptives) and name the modules needed \
           (jpower, medmod, scatr), reminding users to install them via \"Modules (+)\".\n\
         - Interpret results in APA style and report effect sizes \
           (Cohen's d, partial eta squared).\n\
         - Analyze attached CSV files, images or PDFs of data and output thoroughly.\n\
         \n\
         Always state the assumptions (normality, homogeneity of variance) before \
         recommending a test. Use Markdown with bold key terms and tables for results. \
         Keep a professional, neutral tone and do not draw firm conclusions from \
         insufficient data.",
        name = language.name(),
        code = language.code(),
        register = language.register(),
    )
}

/// Task prompt for a one-shot analysis request.
#[must_use]
pub fn analysis_prompt(kind: AnalysisKind, data_context: &str, language: Language) -> String {
    let title = kind.title();
    format!(
        "TASK: Perform a rigorous statistical analysis: \"{title}\".\n\
         \n\
         DATA CONTEXT:\n\
         {data_context}\n\
         \n\
         REQUIREMENTS:\n\
         1. Data cleaning: state how the data was interpreted (N, missing values).\n\
         2. Descriptive statistics: a Markdown table of means, SDs and counts.\n\
         3. Assumption checks: say whether normality and homogeneity appear met.\n\
         4. Inferential statistics: compute {title} and tabulate the test statistic \
            (F, t or chi-square), df and p-value.\n\
         5. Interpretation: report the results in APA style, in {language}.\n\
         6. Visual description: describe the chart that best shows the result.\n\
         \n\
         FORMAT: use level-2 headings (##) for sections and strict Markdown tables.",
        language = language.name(),
    )
}
