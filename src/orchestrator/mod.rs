use std::time::Duration;

use crate::config::{EnginePlan, MtConfig};
use crate::core::error::{ConfigError, EngineInitError, TranslateError};
use crate::core::traits::EngineFactory;
use crate::core::types::{LanguagePair, TranslationCandidate};
use crate::registry::EngineRegistry;

/// Facade over the engine registry. Built once from a validated
/// configuration document; a new orchestrator is required to pick up
/// configuration changes.
pub struct MtOrchestrator {
    registry: EngineRegistry,
    source_language: Option<String>,
    target_language: Option<String>,
    init_failures: Vec<EngineInitError>,
}

impl std::fmt::Debug for MtOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MtOrchestrator")
            .field("engine_count", &self.registry.engine_count())
            .field("source_language", &self.source_language)
            .field("target_language", &self.target_language)
            .field("init_failures", &self.init_failures)
            .finish()
    }
}

impl MtOrchestrator {
    pub fn from_config(
        config: &MtConfig,
        factory: &dyn EngineFactory,
    ) -> Result<Self, ConfigError> {
        let plan = config.validate()?;
        Ok(Self::from_plan(&plan, factory))
    }

    /// Builds engines from validated settings in registration order. An
    /// engine whose construction fails is skipped and recorded in
    /// `init_failures` rather than aborting.
    pub fn from_plan(plan: &EnginePlan, factory: &dyn EngineFactory) -> Self {
        let mut registry = EngineRegistry::new();
        let mut init_failures = Vec::new();

        for settings in plan.enabled_engines() {
            match factory.build(&settings) {
                Ok(engine) => registry.register(engine),
                Err(error) => {
                    tracing::warn!(
                        engine = %settings.kind(),
                        %error,
                        "skipping engine that failed to initialize"
                    );
                    init_failures.push(error);
                }
            }
        }

        Self {
            registry,
            source_language: None,
            target_language: None,
            init_failures,
        }
    }

    pub fn has_engines(&self) -> bool {
        self.registry.has_engines()
    }

    pub fn engine_count(&self) -> usize {
        self.registry.engine_count()
    }

    pub fn init_failures(&self) -> &[EngineInitError] {
        &self.init_failures
    }

    pub fn requires_project_languages(&self) -> bool {
        self.registry.requires_project_languages()
    }

    pub fn set_project_source_language(&mut self, lang: impl Into<String>) {
        self.source_language = Some(lang.into());
    }

    pub fn set_project_target_language(&mut self, lang: impl Into<String>) {
        self.target_language = Some(lang.into());
    }

    /// Fans out to every registered engine. Engines that resolve languages
    /// at call time translate with the current project pair, overriding any
    /// static pair they were constructed with.
    pub async fn translate(
        &self,
        text: &str,
    ) -> Result<Vec<TranslationCandidate>, TranslateError> {
        if !self.registry.has_engines() {
            return Err(TranslateError::NoEngines);
        }

        let languages = self.project_languages();
        self.registry.translate_all(text, languages.as_ref()).await
    }

    /// Like `translate`, bounded by `timeout`. Expiry cancels in-flight
    /// engine calls and reports `Cancelled`, never a partial result.
    pub async fn translate_with_timeout(
        &self,
        text: &str,
        timeout: Duration,
    ) -> Result<Vec<TranslationCandidate>, TranslateError> {
        match tokio::time::timeout(timeout, self.translate(text)).await {
            Ok(result) => result,
            Err(_) => Err(TranslateError::Cancelled),
        }
    }

    fn project_languages(&self) -> Option<LanguagePair> {
        match (&self.source_language, &self.target_language) {
            (Some(source), Some(target)) => Some(LanguagePair::new(source, target)),
            _ => None,
        }
    }
}
