//! Shared settings for domain property tests.

use std::env;

use proptest::prelude::ProptestConfig;

/// Proptest config honouring `PROPTEST_CASES` (low default for fast CI).
pub fn proptest_config() -> ProptestConfig {
    let cases = env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(64);

    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}
