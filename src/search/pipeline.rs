use std::sync::Arc;
use std::time::Instant;
use tracing::debug;
use crate::catalog::store::Catalog;
use crate::parallel::Backend;
use crate::search::results::RankedResults;

/// Glue between the catalog, a concurrency backend and the callers (CLI and
/// UDP service). Queries run strictly one at a time, each to completion.
pub struct QueryPipeline {
    pub catalog: Arc<Catalog>,
    pub backend: Box<dyn Backend>,
}

impl QueryPipeline {
    pub fn new(catalog: Arc<Catalog>, backend: Box<dyn Backend>) -> Self {
        QueryPipeline { catalog, backend }
    }

    pub fn execute(&self, query: &str) -> RankedResults {
        let start = Instant::now();
        let results = self.backend.execute(query);
        debug!(
            backend = self.backend.name(),
            matched = results.total_matched,
            hits = results.hits.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "query evaluated"
        );
        results
    }

    /// Evaluate and render the fixed text answer format.
    pub fn execute_formatted(&self, query: &str) -> String {
        self.execute(query).format(&self.catalog)
    }
}
