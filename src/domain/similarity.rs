//! String similarity used by the ranking pipeline.
//!
//! The default scorer wraps nucleo's fuzzy matcher. A match always scores at
//! least 1, so 0 is reserved for "no match".

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

/// Candidates at least this long get no length bonus.
const LENGTH_SCALE: u32 = 256;

/// Scores candidates against one query. 0 means no match.
pub trait Scorer {
    fn score(&mut self, candidate: &str) -> u32;
}

impl<F> Scorer for F
where
    F: FnMut(&str) -> u32,
{
    fn score(&mut self, candidate: &str) -> u32 {
        self(candidate)
    }
}

pub trait Similarity: Send + Sync {
    /// Builds a scorer for `query`. Called once per ranking pass.
    fn prepare(&self, query: &str) -> Box<dyn Scorer + '_>;

    /// Deterministic score of `candidate` against `query`; 0 means no match.
    fn similarity(&self, candidate: &str, query: &str) -> u32 {
        self.prepare(query).score(candidate)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NucleoSimilarity;

impl Similarity for NucleoSimilarity {
    fn prepare(&self, query: &str) -> Box<dyn Scorer + '_> {
        Box::new(NucleoScorer::new(query))
    }
}

/// A query parsed once, with the matcher and buffer reused across candidates.
///
/// The query is matched literally: fzf operators such as `!`, `^` and `$`
/// are plain characters here.
pub struct NucleoScorer {
    pattern: Pattern,
    matcher: Matcher,
    buf: Vec<char>,
}

impl NucleoScorer {
    pub fn new(query: &str) -> Self {
        let mut config = Config::DEFAULT;
        config.prefer_prefix = true;
        Self {
            pattern: Pattern::new(
                query,
                CaseMatching::Ignore,
                Normalization::Smart,
                AtomKind::Fuzzy,
            ),
            matcher: Matcher::new(config),
            buf: Vec::with_capacity(64),
        }
    }
}

impl Scorer for NucleoScorer {
    fn score(&mut self, candidate: &str) -> u32 {
        self.buf.clear();
        let haystack = Utf32Str::new(candidate, &mut self.buf);
        match self.pattern.score(haystack, &mut self.matcher) {
            Some(base) => {
                let len = candidate.chars().count().min(LENGTH_SCALE as usize - 1) as u32;
                base.saturating_mul(LENGTH_SCALE)
                    .saturating_add(LENGTH_SCALE - 1 - len)
                    .saturating_add(1)
            }
            None => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_match_is_zero() {
        assert_eq!(NucleoSimilarity.similarity("GitHub", "xyz"), 0);
        assert_eq!(NucleoSimilarity.similarity("", "go"), 0);
    }

    #[test]
    fn test_match_is_positive_and_case_insensitive() {
        assert!(NucleoSimilarity.similarity("GitHub", "git") > 0);
        assert_eq!(
            NucleoSimilarity.similarity("GitHub", "git"),
            NucleoSimilarity.similarity("GitHub", "GIT")
        );
    }

    #[test]
    fn test_operator_characters_match_literally() {
        // No negation: a leading '!' must appear in the candidate
        assert_eq!(NucleoSimilarity.similarity("GitHub", "!zz"), 0);
        assert_eq!(NucleoSimilarity.similarity("GitHub", "!git"), 0);
        assert!(NucleoSimilarity.similarity("Hello!git", "!git") > 0);
        // No anchors
        assert!(NucleoSimilarity.similarity("price a$b", "a$") > 0);
        assert!(NucleoSimilarity.similarity("x^2 + y", "^2") > 0);
        assert!(NucleoSimilarity.similarity("docs 'quoted'", "'quo") > 0);
    }

    #[test]
    fn test_prefix_beats_interior() {
        let prefix = NucleoSimilarity.similarity("GitHub", "gi");
        let interior = NucleoSimilarity.similarity("Magic", "gi");
        assert!(interior > 0);
        assert!(prefix > interior, "{prefix} <= {interior}");
    }

    #[test]
    fn test_shorter_beats_longer_on_equal_match() {
        let short = NucleoSimilarity.similarity("GitHub", "github");
        let long = NucleoSimilarity.similarity("GitHub Enterprise Server", "github");
        assert!(short > long, "{short} <= {long}");
    }

    #[test]
    fn test_prepared_scorer_is_reusable_and_deterministic() {
        let mut scorer = NucleoSimilarity.prepare("go");
        let first = scorer.score("docs.google.com");
        assert_eq!(scorer.score("nothing here"), 0);
        assert_eq!(scorer.score("docs.google.com"), first);
        assert_eq!(NucleoSimilarity.similarity("docs.google.com", "go"), first);
    }
}
