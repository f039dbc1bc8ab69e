use std::sync::Arc;
use crossbeam::channel;
use crate::catalog::store::Catalog;
use crate::parallel::{evaluate_range, merger, partition::partition, Backend};
use crate::query::parser;
use crate::scoring::topk;
use crate::search::results::RankedResults;

/// Shared-memory thread pool backend: a fixed set of scoped worker threads,
/// one static partition each. Workers touch no shared mutable state; each
/// sends its local top-K over a channel and the caller merges after the
/// join.
pub struct PoolBackend {
    catalog: Arc<Catalog>,
    workers: usize,
}

impl PoolBackend {
    pub fn new(catalog: Arc<Catalog>, workers: usize) -> Self {
        PoolBackend {
            catalog,
            workers: workers.max(1),
        }
    }
}

impl Backend for PoolBackend {
    fn execute(&self, query: &str) -> RankedResults {
        let spec = parser::parse(query);
        let ranges = partition(self.catalog.len(), self.workers);
        let (tx, rx) = channel::unbounded();

        std::thread::scope(|scope| {
            for range in ranges {
                let tx = tx.clone();
                let spec = &spec;
                scope.spawn(move || {
                    let candidates = evaluate_range(&self.catalog, spec, range);
                    let total_matched = candidates.len();
                    let local = RankedResults {
                        hits: topk::select(candidates, spec.top_k),
                        total_matched,
                    };
                    // The parent outlives the scope; a send cannot fail
                    // while it still holds the receiver.
                    let _ = tx.send(local);
                });
            }
        });
        drop(tx);

        merger::merge(rx.iter().collect(), spec.top_k)
    }

    fn name(&self) -> &str {
        "pool"
    }
}
