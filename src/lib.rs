pub mod core;
pub mod catalog;
pub mod query;
pub mod scoring;
pub mod search;
pub mod parallel;
pub mod service;

/*
┌──────────────────────────────────────────────────────────────────────┐
│                       WANDERHUB ARCHITECTURE                         │
└──────────────────────────────────────────────────────────────────────┘

  dataset file ──> catalog::store::Catalog        (loaded once, read-only)
                          │
         per query:       ▼
  raw query ──> query::parser ──> query::spec::QuerySpec
                          │
                          ▼
              parallel::Backend (one of)
                ├─ serial::SerialBackend          one pass, no partition
                ├─ pool::PoolBackend              scoped threads + channel
                ├─ loop_parallel::LoopParallelBackend
                │                                 rayon fork-join, shared
                │                                 bounded buffer
                └─ ranks::RanksBackend            broadcast / gather ranks
                          │
        per worker: scoring::filter ─> scoring::scorer ─> scoring::topk
                          │
                          ▼
              parallel::merger::merge ──> search::results::RankedResults
                          │
                          ▼
        search::pipeline::QueryPipeline ──> CLI output / service::udp

  All backends answer the same query over the same catalog identically;
  score ties are broken by record index so the order is deterministic
  regardless of worker count.
*/
