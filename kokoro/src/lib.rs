//! Domain core of the emotion diary.
//!
//! A diary entry flows through [`build_prompt`], one [`llm::ChatClient`]
//! completion and [`ResponseExtractor::extract`], producing an
//! [`AnalysisResult`] that is recorded in a [`History`] store. The
//! [`DiaryAnalyzer`] ties the first three together and absorbs every remote
//! failure into a renderable result.

pub mod analyzer;
pub mod extract;
pub mod history;
pub mod prompt;

pub use analyzer::{DiaryAnalyzer, CHAT_MODEL};
pub use extract::{
    AnalysisResult, ResponseExtractor, ADVICE_FALLBACK, ECHO_FALLBACK, ERROR_IDIOM, IDIOM_FALLBACK,
};
pub use history::{History, HistoryRecord, InMemoryHistory};
pub use prompt::{build_prompt, INSTRUCTION_LEAD_IN};
