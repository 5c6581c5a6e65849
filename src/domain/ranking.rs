use crate::domain::models::{ActionItem, ScoredActionItem};
use crate::domain::similarity::{NucleoSimilarity, Scorer, Similarity};
use std::sync::Arc;

pub const DEFAULT_MINIMUM_MATCH: usize = 2;

/// Scores `items` against `query` and returns the matches, best first.
///
/// Queries shorter than `min_match` characters skip scoring entirely and
/// return every item unscored in its original order. Otherwise each item
/// scores the best of its title, domain and path; zero scores are dropped and
/// the sort is stable, so equal scores keep their input order.
pub fn rank(
    items: &[ActionItem],
    query: &str,
    min_match: usize,
    similarity: &dyn Similarity,
) -> Vec<ScoredActionItem> {
    if items.is_empty() {
        return Vec::new();
    }
    if query.chars().count() < min_match {
        return items.iter().cloned().map(ScoredActionItem::unscored).collect();
    }

    let mut scorer = similarity.prepare(query);
    let mut scored: Vec<ScoredActionItem> = items
        .iter()
        .filter_map(|item| {
            let score = item_score(item, scorer.as_mut());
            (score > 0).then(|| ScoredActionItem {
                item: item.clone(),
                score: Some(score),
            })
        })
        .collect();
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}

fn item_score(item: &ActionItem, scorer: &mut dyn Scorer) -> u32 {
    let title = scorer.score(&item.title);
    let domain = item.domain.as_deref().map_or(0, |v| scorer.score(v));
    let path = item.path.as_deref().map_or(0, |v| scorer.score(v));
    title.max(domain).max(path)
}

/// Ranking configuration shared by every re-rank of a session.
#[derive(Clone)]
pub struct Ranker {
    pub min_match: usize,
    similarity: Arc<dyn Similarity>,
}

impl Ranker {
    pub fn new(min_match: usize, similarity: Arc<dyn Similarity>) -> Self {
        Self {
            min_match,
            similarity,
        }
    }

    pub fn rank(&self, items: &[ActionItem], query: &str) -> Vec<ScoredActionItem> {
        rank(items, query, self.min_match, self.similarity.as_ref())
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new(DEFAULT_MINIMUM_MATCH, Arc::new(NucleoSimilarity))
    }
}

impl std::fmt::Debug for Ranker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ranker")
            .field("min_match", &self.min_match)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Scores by substring position: prefix 100, interior 50, otherwise 0.
    struct SubstringSimilarity;

    impl Similarity for SubstringSimilarity {
        fn prepare(&self, query: &str) -> Box<dyn Scorer + '_> {
            let query = query.to_lowercase();
            Box::new(move |candidate: &str| match candidate.to_lowercase().find(&query) {
                Some(0) => 100,
                Some(_) => 50,
                None => 0,
            })
        }
    }

    fn item(title: &str, domain: Option<&str>, path: Option<&str>) -> ActionItem {
        ActionItem {
            title: title.to_string(),
            domain: domain.map(str::to_string),
            path: path.map(str::to_string),
            ..Default::default()
        }
    }

    fn titles(results: &[ScoredActionItem]) -> Vec<&str> {
        results.iter().map(|r| r.item.title.as_str()).collect()
    }

    #[test]
    fn test_empty_items() {
        assert!(rank(&[], "github", 2, &SubstringSimilarity).is_empty());
    }

    #[test]
    fn test_short_query_passes_through() {
        let items = vec![item("b", None, None), item("a", None, None)];
        for query in ["", "z"] {
            let results = rank(&items, query, 2, &SubstringSimilarity);
            assert_eq!(titles(&results), vec!["b", "a"]);
            assert!(results.iter().all(|r| r.score.is_none()));
        }
    }

    #[test]
    fn test_min_match_counts_characters() {
        let items = vec![item("über", None, None)];
        // One character, two bytes
        let results = rank(&items, "ü", 2, &SubstringSimilarity);
        assert_eq!(results[0].score, None);
    }

    #[test]
    fn test_filters_and_sorts_descending() {
        let items = vec![
            item("Rust Book", None, None),
            item("Nothing", None, None),
            item("book club", None, None),
        ];
        let results = rank(&items, "book", 2, &SubstringSimilarity);
        assert_eq!(titles(&results), vec!["book club", "Rust Book"]);
        assert_eq!(results[0].score, Some(100));
        assert_eq!(results[1].score, Some(50));
    }

    #[test]
    fn test_max_over_domain_and_path() {
        let items = vec![
            item("Inbox", Some("mail.example.com"), None),
            item("Recipes", None, Some("mail/Food")),
            item("Mailbox", None, None),
        ];
        let results = rank(&items, "mail", 2, &SubstringSimilarity);
        // All three hit a prefix in some field; ties keep input order
        assert_eq!(titles(&results), vec!["Inbox", "Recipes", "Mailbox"]);
        assert!(results.iter().all(|r| r.score == Some(100)));
    }

    #[test]
    fn test_ties_preserve_input_order() {
        let items: Vec<_> = (0..20)
            .map(|i| item(&format!("x-doc-{i}"), None, None))
            .collect();
        let results = rank(&items, "doc", 2, &SubstringSimilarity);
        let expected: Vec<String> = (0..20).map(|i| format!("x-doc-{i}")).collect();
        assert_eq!(
            titles(&results),
            expected.iter().map(String::as_str).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_does_not_mutate_input() {
        let items = vec![item("zeta", None, None), item("alpha", None, None)];
        let before = items.clone();
        let _ = rank(&items, "al", 2, &SubstringSimilarity);
        assert_eq!(items, before);
    }

    #[test]
    fn test_operator_query_filters_everything_out() {
        let items = vec![
            item("GitHub", Some("github.com"), None),
            item("Hacker News", Some("news.ycombinator.com"), None),
        ];
        assert!(Ranker::default().rank(&items, "!zz").is_empty());
    }

    #[test]
    fn test_github_google_scenario_is_stable() {
        let items = vec![
            item("GitHub", Some("github.com"), None),
            item("Google Docs", Some("docs.google.com"), None),
        ];
        let ranker = Ranker::default();
        let first = ranker.rank(&items, "go");
        assert_eq!(first.len(), 2);
        assert!(first.iter().all(|r| r.score.unwrap_or(0) > 0));
        for _ in 0..5 {
            assert_eq!(ranker.rank(&items, "go"), first);
        }
    }
}
