//! Built-in platform engines, one module per integrated platform.

pub mod case_tools;
pub mod hacms;
pub mod hyland;
pub mod qualtrax;
pub mod regscale;
pub mod safedocs;
pub mod scap;
pub mod stig;

pub use case_tools::CaseToolsEngine;
pub use hacms::HacmsEngine;
pub use hyland::HylandEngine;
pub use qualtrax::QualtraxEngine;
pub use regscale::RegScaleEngine;
pub use safedocs::SafeDocsEngine;
pub use scap::ScapEngine;
pub use stig::StigEngine;

#[cfg(test)]
pub(crate) mod harness {
    use attest_core::config::PlatformConfig;
    use attest_core::EventDispatcher;

    use crate::simulate::Simulator;
    use crate::store::RecordStore;
    use crate::traits::EngineContext;

    /// Owns everything an `EngineContext` borrows.
    pub struct Harness {
        pub store: RecordStore,
        pub sim: Simulator,
        pub events: EventDispatcher,
        pub config: PlatformConfig,
    }

    impl Harness {
        pub fn seeded(seed: u64) -> Self {
            Self {
                store: RecordStore::new(),
                sim: Simulator::with_seed(seed),
                events: EventDispatcher::new(),
                config: PlatformConfig::default(),
            }
        }

        pub fn ctx(&self) -> EngineContext<'_> {
            EngineContext {
                store: &self.store,
                sim: &self.sim,
                events: &self.events,
                config: &self.config,
            }
        }
    }
}
