use serde::{Serialize, Deserialize};
use crate::catalog::store::Catalog;
use crate::core::types::{PackageRecord, ScoredCandidate};

/// A query's answer: the ranked hits (descending score, length at most
/// `top_k`) plus the total number of records that matched the filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResults {
    pub hits: Vec<ScoredCandidate>,
    pub total_matched: usize,
}

impl RankedResults {
    pub fn empty() -> Self {
        RankedResults {
            hits: Vec::new(),
            total_matched: 0,
        }
    }

    /// Render the fixed text answer format:
    /// a `FOUND <matched> matching packages. TOP <k>:` summary line plus one
    /// line per hit, or the no-match sentence.
    pub fn format(&self, catalog: &Catalog) -> String {
        if self.hits.is_empty() {
            return "No packages match the query filters.\n".to_string();
        }
        let mut out = format!(
            "FOUND {} matching packages. TOP {}:\n",
            self.total_matched,
            self.hits.len()
        );
        for (position, hit) in self.hits.iter().enumerate() {
            if let Some(record) = catalog.get(hit.index) {
                out.push_str(&format_hit(position + 1, record, hit.score));
            }
        }
        out
    }
}

pub fn format_hit(rank: usize, record: &PackageRecord, score: f64) -> String {
    format!(
        "{}. {} | {}, {} | Category: {} | Days: {} | Price: {:.0} | Rating: {:.1} | Score: {:.2}\n",
        rank,
        record.id,
        record.place_name,
        record.province,
        record.category,
        record.duration_days,
        record.avg_price,
        record.rating,
        score,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::from_records(vec![
            PackageRecord {
                id: "PKG001".to_string(),
                place_name: "Hunza Valley".to_string(),
                province: "Gilgit".to_string(),
                category: "Nature".to_string(),
                duration_days: 5,
                avg_price: 25000.4,
                rating: 4.75,
                review_count: 320,
                popularity_score: 8.9,
            },
        ])
    }

    #[test]
    fn formats_summary_and_hit_lines() {
        let results = RankedResults {
            hits: vec![ScoredCandidate::new(0, 321.25)],
            total_matched: 3,
        };
        let text = results.format(&catalog());
        assert_eq!(
            text,
            "FOUND 3 matching packages. TOP 1:\n\
             1. PKG001 | Hunza Valley, Gilgit | Category: Nature | Days: 5 | Price: 25000 | Rating: 4.8 | Score: 321.25\n"
        );
    }

    #[test]
    fn empty_results_use_the_no_match_sentence() {
        let text = RankedResults::empty().format(&catalog());
        assert_eq!(text, "No packages match the query filters.\n");
    }
}
