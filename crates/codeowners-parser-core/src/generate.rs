//! Random CODEOWNERS file generation for benchmarking and testing.
//!
//! Output is deterministic for a given seed. Every generated rule line
//! parses into exactly one mapping; comment and blank lines parse into none.

use rand::prelude::*;
use rand::rngs::StdRng;
use std::fmt::Write;

/// Configuration for generating CODEOWNERS files.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of rule lines to generate.
    pub num_rules: usize,
    /// Number of comment section headers to generate.
    pub num_comments: usize,
    /// Maximum owners per rule (1-4 typical).
    pub max_owners_per_rule: usize,
    /// Chance (percentage) of mixing an unrecognised token into a rule.
    pub invalid_token_percent: u32,
    /// Chance (percentage) of ending a rule with a trailing comment.
    pub trailing_comment_percent: u32,
    /// Seed for deterministic generation.
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_rules: 100,
            num_comments: 20,
            max_owners_per_rule: 4,
            invalid_token_percent: 10,
            trailing_comment_percent: 15,
            seed: 42,
        }
    }
}

impl GeneratorConfig {
    /// Create a new config with specified rules and proportional comments.
    ///
    /// Comments are set to ~20% of rules.
    pub fn new(num_rules: usize) -> Self {
        Self {
            num_rules,
            num_comments: num_rules / 5,
            ..Default::default()
        }
    }

    /// Small fixture (~10 rules).
    pub fn small() -> Self {
        Self::new(10)
    }

    /// Medium fixture (~100 rules).
    pub fn medium() -> Self {
        Self::new(100)
    }

    /// Large fixture (~1000 rules).
    pub fn large() -> Self {
        Self::new(1_000)
    }

    /// Extra large fixture (~10k rules).
    pub fn xlarge() -> Self {
        Self::new(10_000)
    }

    /// Generate a file targeting approximately the given byte size.
    pub fn target_bytes(bytes: usize) -> Self {
        // Average line is ~50 bytes
        Self::new(bytes.saturating_div(50).max(1))
    }

    /// Set the random seed for deterministic generation.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the number of comments explicitly.
    pub fn with_comments(mut self, num_comments: usize) -> Self {
        self.num_comments = num_comments;
        self
    }

    /// Set the maximum owners per rule.
    pub fn with_max_owners(mut self, max: usize) -> Self {
        self.max_owners_per_rule = max.max(1); // At least 1 owner
        self
    }

    /// Set the chances of invalid tokens and trailing comments, clamped to 100.
    pub fn with_noise(mut self, invalid_token_percent: u32, trailing_comment_percent: u32) -> Self {
        self.invalid_token_percent = invalid_token_percent.min(100);
        self.trailing_comment_percent = trailing_comment_percent.min(100);
        self
    }
}

/// Vocabulary for generating realistic patterns and owners.
mod vocabulary {
    pub const PATTERN_TEMPLATES: &[&str] = &[
        "*.{ext}",
        "**/*.{ext}",
        "/{dir}/",
        "/{dir}/**",
        "/{dir}/*.{ext}",
        "/src/{dir}/",
        "/src/**/*.{ext}",
        "/{dir}/**/test_*.{ext}",
        "docs/**/*.md",
        "*",
    ];

    pub const EXTENSIONS: &[&str] = &["rs", "py", "js", "ts", "go", "md", "yaml", "json", "toml"];
    pub const DIRECTORIES: &[&str] = &[
        "src", "lib", "tests", "docs", "config", "scripts", "api", "core",
    ];
    pub const USERNAMES: &[&str] = &["alice", "bob", "charlie", "dev", "maintainer", "reviewer"];
    pub const ORGS: &[&str] = &["acme", "github", "myorg"];
    pub const TEAMS: &[&str] = &["core", "platform", "frontend", "backend", "infra", "docs"];
    pub const SECTION_NAMES: &[&str] = &["Frontend", "Backend", "Infrastructure", "Documentation"];
    pub const INVALID_TOKENS: &[&str] = &["///", "12412", "aa", "TODO", "owner"];
}

/// Owner type distribution weights (must sum to 100).
const WEIGHT_USER: u32 = 50;
const WEIGHT_TEAM: u32 = 30;
// Remaining weight (20) goes to email

/// Probability of inserting a comment section header (percentage).
const COMMENT_PROBABILITY: u32 = 20;

fn pick<'a>(rng: &mut StdRng, items: &[&'a str]) -> &'a str {
    items[rng.random_range(0..items.len())]
}

/// Generates a CODEOWNERS file as a string.
pub fn generate(config: &GeneratorConfig) -> String {
    use vocabulary::*;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut out = String::with_capacity(config.num_rules * 50 + 64);

    out.push_str("# Auto-generated CODEOWNERS for benchmarking\n\n");

    let mut rules_added = 0;
    let mut comments_added = 0;

    while rules_added < config.num_rules {
        if comments_added < config.num_comments
            && rules_added > 0
            && rng.random_ratio(COMMENT_PROBABILITY, 100)
        {
            let section = pick(&mut rng, SECTION_NAMES);
            let _ = write!(out, "\n# {} section\n", section);
            comments_added += 1;
        }

        let template = pick(&mut rng, PATTERN_TEMPLATES);
        let ext = pick(&mut rng, EXTENSIONS);
        let dir = pick(&mut rng, DIRECTORIES);
        out.push_str(&template.replace("{ext}", ext).replace("{dir}", dir));

        let num_owners = rng.random_range(1..=config.max_owners_per_rule.max(1));
        for _ in 0..num_owners {
            out.push(' ');
            push_owner(&mut out, &mut rng);
            if rng.random_ratio(config.invalid_token_percent.min(100), 100) {
                out.push(' ');
                out.push_str(pick(&mut rng, INVALID_TOKENS));
            }
        }

        if rng.random_ratio(config.trailing_comment_percent.min(100), 100) {
            out.push_str(" # ");
            push_owner(&mut out, &mut rng);
        }

        out.push('\n');
        rules_added += 1;
    }

    out
}

/// Append a random owner based on weighted distribution.
fn push_owner(out: &mut String, rng: &mut StdRng) {
    use vocabulary::*;

    let roll = rng.random_range(0..100);

    if roll < WEIGHT_USER {
        let _ = write!(out, "@{}", pick(rng, USERNAMES));
    } else if roll < WEIGHT_USER + WEIGHT_TEAM {
        let org = pick(rng, ORGS);
        let _ = write!(out, "@{}/{}", org, pick(rng, TEAMS));
    } else {
        let _ = write!(out, "{}@example.com", pick(rng, USERNAMES));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_str;

    #[test]
    fn generated_rules_all_parse() {
        let content = generate(&GeneratorConfig::small());
        let mappings = parse_str(&content);
        assert_eq!(mappings.len(), 10);
        assert!(mappings.iter().all(|m| !m.owners.is_empty()));
    }

    #[test]
    fn large_fixture_rule_count() {
        let content = generate(&GeneratorConfig::large());
        assert_eq!(parse_str(&content).len(), 1_000);
    }

    #[test]
    fn noise_never_becomes_an_owner() {
        let config = GeneratorConfig::medium().with_noise(100, 100);
        let content = generate(&config);
        let mappings = parse_str(&content);
        assert_eq!(mappings.len(), 100);
        for mapping in &mappings {
            assert!(mapping.owners.len() <= config.max_owners_per_rule);
            assert!(mapping.owners.iter().all(|o| o.kind().is_valid()));
        }
    }

    #[test]
    fn deterministic_generation() {
        let config = GeneratorConfig::medium();
        let content1 = generate(&config);
        let content2 = generate(&config);
        assert_eq!(content1, content2, "Same seed should produce same output");
    }

    #[test]
    fn different_seeds_differ() {
        let content1 = generate(&GeneratorConfig::medium().with_seed(1));
        let content2 = generate(&GeneratorConfig::medium().with_seed(2));
        assert_ne!(content1, content2);
    }

    #[test]
    fn target_bytes_approximate() {
        let content = generate(&GeneratorConfig::target_bytes(100_000));
        // Should be within 2x of target
        assert!(
            content.len() > 50_000 && content.len() < 200_000,
            "Got {} bytes",
            content.len()
        );
    }

    #[test]
    fn zero_rules_produces_header_only() {
        let content = generate(&GeneratorConfig::new(0));
        assert!(content.starts_with('#'));
        assert!(parse_str(&content).is_empty());
    }

    #[test]
    fn with_max_owners_minimum() {
        let config = GeneratorConfig::default().with_max_owners(0);
        assert_eq!(config.max_owners_per_rule, 1);
    }

    #[test]
    fn with_noise_is_clamped() {
        let config = GeneratorConfig::default().with_noise(250, 101);
        assert_eq!(config.invalid_token_percent, 100);
        assert_eq!(config.trailing_comment_percent, 100);
    }
}
