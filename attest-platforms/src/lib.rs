//! # attest-platforms
//!
//! Compliance platform engines. Each engine fabricates schema-stable JSON
//! evidence (scan results, assessments, proofs) for one integrated platform
//! and stores it in a transient in-memory evidence store. Nothing here
//! scans, parses, or verifies anything real — this is the demo layer of the
//! product, and the payloads only need to look plausible.

pub mod engines;
pub mod record;
pub mod registry;
pub mod rollup;
pub mod simulate;
pub mod store;
pub mod traits;

pub use record::{EvidenceRecord, RecordKind};
pub use registry::PlatformRegistry;
pub use simulate::Simulator;
pub use store::RecordStore;
pub use traits::PlatformEngine;
