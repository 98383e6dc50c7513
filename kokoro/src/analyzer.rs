//! Orchestrates one diary analysis: prompt, remote call, extraction.

use crate::extract::{AnalysisResult, ResponseExtractor};
use crate::prompt;
use llm::ChatClient;
use std::sync::Arc;
use tracing::{debug, error};

/// Model identifier sent with every analysis request.
pub const CHAT_MODEL: &str = "gpt-3.5-turbo";

/// Runs the analysis pipeline against an injected [`ChatClient`].
pub struct DiaryAnalyzer {
    client: Arc<dyn ChatClient>,
    extractor: ResponseExtractor,
    model: String,
}

impl DiaryAnalyzer {
    pub fn new(client: Arc<dyn ChatClient>) -> Self {
        Self {
            client,
            extractor: ResponseExtractor::default(),
            model: CHAT_MODEL.to_string(),
        }
    }

    /// Analyze one diary entry.
    ///
    /// Remote failures do not propagate; they come back as an error-flavored
    /// [`AnalysisResult`] so the caller always has something to render.
    pub async fn analyze(&self, diary_text: &str) -> AnalysisResult {
        let prompt = prompt::build_prompt(diary_text);
        match self.client.complete(&self.model, &prompt).await {
            Ok(reply) => {
                debug!(chars = reply.len(), "model reply received");
                self.extractor.extract(&reply)
            }
            Err(err) => {
                error!(%err, "diary analysis failed");
                AnalysisResult::from_error(&err)
            }
        }
    }
}
