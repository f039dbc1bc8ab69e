use std::sync::Arc;
use crate::catalog::store::Catalog;
use crate::parallel::{evaluate_range, Backend};
use crate::query::parser;
use crate::scoring::topk;
use crate::search::results::RankedResults;

/// Reference backend: one pass over the whole catalog, no partitioning.
pub struct SerialBackend {
    catalog: Arc<Catalog>,
}

impl SerialBackend {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        SerialBackend { catalog }
    }
}

impl Backend for SerialBackend {
    fn execute(&self, query: &str) -> RankedResults {
        let spec = parser::parse(query);
        let candidates = evaluate_range(&self.catalog, &spec, 0..self.catalog.len());
        let total_matched = candidates.len();
        RankedResults {
            hits: topk::select(candidates, spec.top_k),
            total_matched,
        }
    }

    fn name(&self) -> &str {
        "serial"
    }
}
