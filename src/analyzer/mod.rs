mod analyzer;
pub mod enums;
pub mod errors;
pub(crate) mod helper_constants;
pub(crate) mod helper_functions;
pub mod report;
pub mod scoring;

use std::sync::LazyLock;

pub use analyzer::PhoneAnalyzer;

/// Analyzer with the default configuration and the offline lookups.
pub static PHONE_ANALYZER: LazyLock<PhoneAnalyzer> = LazyLock::new(PhoneAnalyzer::default);
