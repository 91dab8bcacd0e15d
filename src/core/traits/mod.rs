use std::sync::Arc;

use async_trait::async_trait;

use crate::core::error::{EngineError, EngineInitError};
use crate::core::types::{
    EngineCapabilities, EngineKind, EngineSettings, LanguagePair, TranslationCandidate,
};

/// Adapter contract for one translation provider.
///
/// How an engine reaches its provider over the network is entirely the
/// implementor's concern; this crate only routes text in and candidates out.
/// `project_languages` is the project-level pair current at call time.
/// Engines configured with a static pair ignore it; engines that declare
/// `languages_at_call_time` translate with it instead.
#[async_trait]
pub trait TranslationEngine: Send + Sync {
    /// Stable engine identity used for result attribution and diagnostics.
    fn kind(&self) -> EngineKind;

    /// Declares how the engine resolves its language pair.
    fn capabilities(&self) -> EngineCapabilities;

    /// Translates a single text, returning one candidate or a per-call error.
    async fn translate(
        &self,
        text: &str,
        project_languages: Option<&LanguagePair>,
    ) -> Result<TranslationCandidate, EngineError>;
}

/// Constructor seam mapping validated settings to live engines.
///
/// The embedding server implements this with its network adapters; tests
/// implement it with doubles. A `build` failure for one engine is not fatal
/// to orchestrator construction (see `MtOrchestrator::from_plan`).
pub trait EngineFactory: Send + Sync {
    fn build(
        &self,
        settings: &EngineSettings,
    ) -> Result<Arc<dyn TranslationEngine>, EngineInitError>;
}
