//! Benchmark fixtures - generated at runtime.
//!
//! Fixtures are generated lazily on first access and cached for the
//! duration of the benchmark run. All generation is deterministic.

use codeowners_parser_core::generate::{GeneratorConfig, generate};
use std::sync::LazyLock;

// Lazily generated fixtures (deterministic via default seed)
static SMALL: LazyLock<String> = LazyLock::new(|| generate(&GeneratorConfig::small()));
static MEDIUM: LazyLock<String> = LazyLock::new(|| generate(&GeneratorConfig::medium()));
static LARGE: LazyLock<String> = LazyLock::new(|| generate(&GeneratorConfig::large()));
static XLARGE: LazyLock<String> = LazyLock::new(|| generate(&GeneratorConfig::xlarge()));
static NOISY: LazyLock<String> =
    LazyLock::new(|| generate(&GeneratorConfig::large().with_noise(60, 60)));
static MAX_SIZE: LazyLock<String> =
    LazyLock::new(|| generate(&GeneratorConfig::target_bytes(3_000_000)));

/// Standard fixtures for regular benchmarks.
pub fn fixtures() -> &'static [(&'static str, &'static str)] {
    static FIXTURES: LazyLock<Vec<(&'static str, &'static str)>> = LazyLock::new(|| {
        vec![
            ("small", SMALL.as_str()),
            ("medium", MEDIUM.as_str()),
            ("large", LARGE.as_str()),
            ("noisy", NOISY.as_str()),
        ]
    });
    FIXTURES.as_slice()
}

/// Extended fixtures for stress tests up to ~3MB.
pub fn fixtures_extended() -> &'static [(&'static str, &'static str)] {
    static FIXTURES: LazyLock<Vec<(&'static str, &'static str)>> = LazyLock::new(|| {
        vec![
            ("large", LARGE.as_str()),
            ("xlarge", XLARGE.as_str()),
            ("max_size", MAX_SIZE.as_str()),
        ]
    });
    FIXTURES.as_slice()
}
