pub mod partition;
pub mod merger;
pub mod serial;
pub mod pool;
pub mod loop_parallel;
pub mod ranks;

use std::ops::Range;
use std::str::FromStr;
use std::sync::Arc;
use crate::catalog::store::Catalog;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::ScoredCandidate;
use crate::query::spec::QuerySpec;
use crate::scoring::{filter, scorer};
use crate::search::results::RankedResults;

/// A concurrency backend. All backends share the same filter, score, top-K
/// and merge logic and differ only in orchestration; for the same catalog
/// and query string they return the same `RankedResults`.
pub trait Backend: Send + Sync {
    /// Evaluate one raw query string to completion. Parsing happens inside
    /// the backend: the message-passing backend broadcasts the raw string
    /// and lets every rank parse its own copy.
    fn execute(&self, query: &str) -> RankedResults;

    fn name(&self) -> &str;
}

/// Filter and score one contiguous index range of the catalog.
pub(crate) fn evaluate_range(
    catalog: &Catalog,
    spec: &QuerySpec,
    range: Range<usize>,
) -> Vec<ScoredCandidate> {
    let mut candidates = Vec::new();
    for index in range {
        let record = &catalog.records()[index];
        if filter::matches(record, spec) {
            candidates.push(ScoredCandidate::new(index, scorer::score(record, spec)));
        }
    }
    candidates
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Serial,
    Pool,
    LoopParallel,
    Ranks,
}

impl FromStr for BackendKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "serial" => Ok(BackendKind::Serial),
            "pool" => Ok(BackendKind::Pool),
            "loop" => Ok(BackendKind::LoopParallel),
            "ranks" => Ok(BackendKind::Ranks),
            other => Err(Error::new(
                ErrorKind::InvalidArgument,
                format!("unknown backend '{}' (expected serial|pool|loop|ranks)", other),
            )),
        }
    }
}

pub fn create(kind: BackendKind, catalog: Arc<Catalog>, workers: usize) -> Result<Box<dyn Backend>> {
    match kind {
        BackendKind::Serial => Ok(Box::new(serial::SerialBackend::new(catalog))),
        BackendKind::Pool => Ok(Box::new(pool::PoolBackend::new(catalog, workers))),
        BackendKind::LoopParallel => Ok(Box::new(loop_parallel::LoopParallelBackend::new(
            catalog, workers,
        )?)),
        BackendKind::Ranks => Ok(Box::new(ranks::RanksBackend::new(&catalog, workers))),
    }
}
