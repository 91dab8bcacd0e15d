use std::sync::Arc;

use futures::future;

use crate::core::error::{EngineFailure, TranslateError};
use crate::core::traits::TranslationEngine;
use crate::core::types::{LanguagePair, TranslationCandidate};

#[derive(Default)]
pub struct EngineRegistry {
    engines: Vec<Arc<dyn TranslationEngine>>,
}

impl EngineRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, engine: Arc<dyn TranslationEngine>) {
        self.engines.push(engine);
    }

    pub fn has_engines(&self) -> bool {
        !self.engines.is_empty()
    }

    pub fn engine_count(&self) -> usize {
        self.engines.len()
    }

    pub fn requires_project_languages(&self) -> bool {
        self.engines
            .iter()
            .any(|engine| engine.capabilities().languages_at_call_time)
    }

    /// Queries every registered engine concurrently; candidates come back in
    /// registration order regardless of completion order.
    pub async fn translate_all(
        &self,
        text: &str,
        project_languages: Option<&LanguagePair>,
    ) -> Result<Vec<TranslationCandidate>, TranslateError> {
        if self.engines.is_empty() {
            return Err(TranslateError::NoEngines);
        }

        let outcomes = future::join_all(
            self.engines
                .iter()
                .map(|engine| engine.translate(text, project_languages)),
        )
        .await;

        let mut candidates = Vec::with_capacity(outcomes.len());
        let mut failures = Vec::new();

        for (engine, outcome) in self.engines.iter().zip(outcomes) {
            match outcome {
                Ok(candidate) => candidates.push(candidate),
                Err(error) => {
                    tracing::warn!(engine = %engine.kind(), %error, "engine call failed");
                    failures.push(EngineFailure::from(error));
                }
            }
        }

        if candidates.is_empty() {
            return Err(TranslateError::AllEnginesFailed { failures });
        }

        Ok(candidates)
    }
}
