//! Registry of platform engines.

use attest_core::config::PlatformConfig;
use attest_core::PlatformError;

use crate::engines::{
    CaseToolsEngine, HacmsEngine, HylandEngine, QualtraxEngine, RegScaleEngine, SafeDocsEngine,
    ScapEngine, StigEngine,
};
use crate::record::EvidenceRecord;
use crate::traits::{EngineContext, PlatformEngine};

/// Holds the registered platform engines and dispatches operations by id.
pub struct PlatformRegistry {
    engines: Vec<Box<dyn PlatformEngine>>,
}

impl PlatformRegistry {
    /// Registry with all built-in engines, honoring `disabled_platforms`.
    pub fn with_builtins(config: &PlatformConfig) -> Self {
        let all: Vec<Box<dyn PlatformEngine>> = vec![
            Box::new(ScapEngine),
            Box::new(StigEngine),
            Box::new(HacmsEngine),
            Box::new(SafeDocsEngine),
            Box::new(RegScaleEngine),
            Box::new(QualtraxEngine),
            Box::new(HylandEngine),
            Box::new(CaseToolsEngine),
        ];
        let engines = all
            .into_iter()
            .filter(|e| config.platform_enabled(e.id()))
            .collect();
        Self { engines }
    }

    /// Empty registry for custom engine sets.
    pub fn new() -> Self {
        Self {
            engines: Vec::new(),
        }
    }

    /// Register an engine.
    pub fn register(&mut self, engine: Box<dyn PlatformEngine>) {
        self.engines.push(engine);
    }

    /// Look up an engine by id.
    pub fn get(&self, id: &str) -> Option<&dyn PlatformEngine> {
        self.engines.iter().find(|e| e.id() == id).map(|e| e.as_ref())
    }

    /// Ids of all registered engines, in registration order.
    pub fn engine_ids(&self) -> Vec<&'static str> {
        self.engines.iter().map(|e| e.id()).collect()
    }

    /// Number of registered engines.
    pub fn len(&self) -> usize {
        self.engines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }

    /// Run a scan on the named platform.
    pub fn run_scan(
        &self,
        id: &str,
        ctx: &EngineContext,
        target: &str,
    ) -> Result<EvidenceRecord, PlatformError> {
        self.require(id)?.run_scan(ctx, target)
    }

    /// Run an assessment on the named platform.
    pub fn run_assessment(
        &self,
        id: &str,
        ctx: &EngineContext,
    ) -> Result<EvidenceRecord, PlatformError> {
        self.require(id)?.run_assessment(ctx)
    }

    /// Generate a proof on the named platform.
    pub fn generate_proof(
        &self,
        id: &str,
        ctx: &EngineContext,
        subject: &str,
    ) -> Result<EvidenceRecord, PlatformError> {
        self.require(id)?.generate_proof(ctx, subject)
    }

    fn require(&self, id: &str) -> Result<&dyn PlatformEngine, PlatformError> {
        self.get(id)
            .ok_or_else(|| PlatformError::UnknownPlatform(id.to_string()))
    }
}

impl Default for PlatformRegistry {
    fn default() -> Self {
        Self::with_builtins(&PlatformConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_registered() {
        let registry = PlatformRegistry::default();
        assert_eq!(registry.len(), 8);
        assert!(registry.get("scap").is_some());
        assert!(registry.get("case_tools").is_some());
        assert!(registry.get("nonexistent").is_none());
    }

    #[test]
    fn test_disabled_platform_excluded() {
        let config = PlatformConfig {
            disabled_platforms: vec!["hyland".to_string()],
            ..Default::default()
        };
        let registry = PlatformRegistry::with_builtins(&config);
        assert_eq!(registry.len(), 7);
        assert!(registry.get("hyland").is_none());
    }

    #[test]
    fn test_unknown_platform_error() {
        let registry = PlatformRegistry::default();
        let h = crate::engines::harness::Harness::seeded(1);
        let result = registry.run_scan("missing", &h.ctx(), "x");
        assert!(matches!(result, Err(PlatformError::UnknownPlatform(_))));
    }
}
