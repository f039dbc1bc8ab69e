use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use crossbeam::queue::ArrayQueue;
use rayon::prelude::*;
use crate::catalog::store::Catalog;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::ScoredCandidate;
use crate::parallel::{partition::partition, Backend};
use crate::query::parser;
use crate::scoring::{filter, scorer, topk};
use crate::search::results::RankedResults;

/// Loop-parallel backend: a fork-join over the index range on a dedicated
/// rayon pool. All workers share one flat bounded buffer; a slot is claimed
/// per match with a single atomic push, and a push against a full buffer is
/// dropped rather than overwriting another worker's slot.
pub struct LoopParallelBackend {
    catalog: Arc<Catalog>,
    pool: rayon::ThreadPool,
    workers: usize,
}

impl LoopParallelBackend {
    pub fn new(catalog: Arc<Catalog>, workers: usize) -> Result<Self> {
        let workers = workers.max(1);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .build()
            .map_err(|e| {
                Error::new(ErrorKind::Internal, format!("cannot build thread pool: {}", e))
            })?;
        Ok(LoopParallelBackend {
            catalog,
            pool,
            workers,
        })
    }
}

impl Backend for LoopParallelBackend {
    fn execute(&self, query: &str) -> RankedResults {
        let spec = parser::parse(query);
        let slots = ArrayQueue::new(self.catalog.len().max(1));
        let matched = AtomicUsize::new(0);
        let ranges = partition(self.catalog.len(), self.workers);

        self.pool.install(|| {
            ranges.into_par_iter().for_each(|range| {
                for index in range {
                    let record = &self.catalog.records()[index];
                    if filter::matches(record, &spec) {
                        matched.fetch_add(1, Ordering::Relaxed);
                        let candidate =
                            ScoredCandidate::new(index, scorer::score(record, &spec));
                        let _ = slots.push(candidate);
                    }
                }
            });
        });

        let mut candidates = Vec::with_capacity(slots.len());
        while let Some(candidate) = slots.pop() {
            candidates.push(candidate);
        }
        RankedResults {
            hits: topk::select(candidates, spec.top_k),
            total_matched: matched.load(Ordering::Relaxed),
        }
    }

    fn name(&self) -> &str {
        "loop"
    }
}
