//! Best-effort extraction of labeled fields from an unstructured model reply.
//!
//! The reply format is not contractually guaranteed, so a missing marker
//! degrades to a fixed placeholder instead of failing the request.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Placeholder when the advice marker is missing from the reply.
pub const ADVICE_FALLBACK: &str = "アドバイスを抽出できませんでした。";
/// Placeholder when the idiom marker is missing from the reply.
pub const IDIOM_FALLBACK: &str = "四字熟語を抽出できませんでした。";
/// Shown when the model echoed the prompt instead of answering it.
pub const ECHO_FALLBACK: &str =
    "モデルからの応答を適切に処理できませんでした。別の表現で日記を試してみてください。";
/// Idiom marker for analyses that failed at the remote call.
pub const ERROR_IDIOM: &str = "エラー";

/// Advice and idiom pulled from one model reply. Both fields are always
/// populated, with placeholders standing in for anything that could not be
/// extracted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub advice: String,
    pub idiom: String,
}

impl AnalysisResult {
    /// Degraded result for a remote call that failed outright.
    pub fn from_error(message: impl std::fmt::Display) -> Self {
        Self {
            advice: format!("分析中にエラーが発生しました: {message}"),
            idiom: ERROR_IDIOM.to_string(),
        }
    }
}

/// Locates the advice and idiom fields inside a raw reply.
pub struct ResponseExtractor {
    advice_re: Regex,
    idiom_re: Regex,
    echo_lead_in: String,
}

impl ResponseExtractor {
    /// `echo_lead_in` is the prompt sentence whose appearance at the start of
    /// the extracted advice marks an echoed reply.
    pub fn new(echo_lead_in: impl Into<String>) -> Self {
        Self {
            advice_re: Regex::new(r"(?s)アドバイス:\s*(.*?)(?:\n?四字熟語:|$)").unwrap(),
            idiom_re: Regex::new(r"四字熟語:\s*(.+?)(?:\n|$)").unwrap(),
            echo_lead_in: echo_lead_in.into(),
        }
    }

    /// Extract both fields from `reply`. Never fails; anything the markers do
    /// not locate stays at its placeholder.
    pub fn extract(&self, reply: &str) -> AnalysisResult {
        let mut advice = ADVICE_FALLBACK.to_string();
        let mut idiom = IDIOM_FALLBACK.to_string();

        if let Some(caps) = self.advice_re.captures(reply) {
            let found = caps[1].trim();
            if !found.is_empty() {
                advice = found.to_string();
            }
        }
        if let Some(caps) = self.idiom_re.captures(reply) {
            let found = caps[1].trim();
            if !found.is_empty() {
                idiom = found.to_string();
            }
        }

        // A reply that restates the instructions carries no usable advice,
        // even when an idiom line is present.
        if advice.starts_with(&self.echo_lead_in) {
            advice = ECHO_FALLBACK.to_string();
            idiom = IDIOM_FALLBACK.to_string();
        }

        AnalysisResult { advice, idiom }
    }
}

impl Default for ResponseExtractor {
    fn default() -> Self {
        Self::new(crate::prompt::INSTRUCTION_LEAD_IN)
    }
}
