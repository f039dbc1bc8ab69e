use std::thread::JoinHandle;
use crossbeam::channel::{unbounded, Receiver, Sender};
use tracing::debug;
use crate::catalog::store::Catalog;
use crate::core::types::ScoredCandidate;
use crate::parallel::{evaluate_range, merger, partition::partition, Backend};
use crate::query::parser;
use crate::scoring::topk;
use crate::search::results::RankedResults;

/// One request broadcast from the coordinator to every rank.
enum RankRequest {
    /// Raw query text; each rank parses its own copy.
    Query(String),
    Shutdown,
}

/// One rank's contribution to the gather phase: its partition's match count
/// and local top-K.
struct GatherReply {
    rank: usize,
    total_matched: usize,
    hits: Vec<ScoredCandidate>,
}

/// Message-passing backend: a fixed set of ranks that share nothing. The
/// coordinator replicates the catalog to every rank once at construction;
/// per query it broadcasts the raw query string, each rank independently
/// parses it, evaluates its own partition and sends back its local top-K,
/// and the coordinator merges the gathered candidates.
pub struct RanksBackend {
    world: usize,
    inboxes: Vec<Sender<RankRequest>>,
    gather_rx: Receiver<GatherReply>,
    handles: Vec<JoinHandle<()>>,
}

impl RanksBackend {
    pub fn new(catalog: &Catalog, world: usize) -> Self {
        let world = world.max(1);
        let (gather_tx, gather_rx) = unbounded();
        let mut inboxes = Vec::with_capacity(world);
        let mut handles = Vec::with_capacity(world);
        for rank in 0..world {
            let (tx, rx) = unbounded();
            // One-time broadcast: every rank owns a full replica.
            let replica = catalog.clone();
            let gather_tx = gather_tx.clone();
            handles.push(std::thread::spawn(move || {
                rank_loop(rank, world, replica, rx, gather_tx)
            }));
            inboxes.push(tx);
        }
        RanksBackend {
            world,
            inboxes,
            gather_rx,
            handles,
        }
    }
}

impl Backend for RanksBackend {
    fn execute(&self, query: &str) -> RankedResults {
        // Broadcast phase.
        for inbox in &self.inboxes {
            let _ = inbox.send(RankRequest::Query(query.to_string()));
        }

        // Gather phase: exactly one reply per rank, arrival order is
        // irrelevant to the merged answer.
        let mut locals = Vec::with_capacity(self.world);
        for _ in 0..self.world {
            match self.gather_rx.recv() {
                Ok(reply) => {
                    debug!(rank = reply.rank, matched = reply.total_matched, "gathered");
                    locals.push(RankedResults {
                        hits: reply.hits,
                        total_matched: reply.total_matched,
                    });
                }
                Err(_) => break,
            }
        }

        // The coordinator's top_k must agree with the ranks'; parsing is
        // deterministic, so parsing the same string again is the same as
        // receiving a broadcast copy.
        let spec = parser::parse(query);
        merger::merge(locals, spec.top_k)
    }

    fn name(&self) -> &str {
        "ranks"
    }
}

impl Drop for RanksBackend {
    fn drop(&mut self) {
        for inbox in &self.inboxes {
            let _ = inbox.send(RankRequest::Shutdown);
        }
        for handle in self.handles.drain(..) {
            let _ = handle.join();
        }
    }
}

fn rank_loop(
    rank: usize,
    world: usize,
    catalog: Catalog,
    inbox: Receiver<RankRequest>,
    gather_tx: Sender<GatherReply>,
) {
    loop {
        let raw = match inbox.recv() {
            Ok(RankRequest::Query(raw)) => raw,
            Ok(RankRequest::Shutdown) | Err(_) => break,
        };
        let spec = parser::parse(&raw);
        let range = partition(catalog.len(), world)[rank].clone();
        let candidates = evaluate_range(&catalog, &spec, range);
        let total_matched = candidates.len();
        let reply = GatherReply {
            rank,
            total_matched,
            hits: topk::select(candidates, spec.top_k),
        };
        if gather_tx.send(reply).is_err() {
            break;
        }
    }
}
