use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use clap::Parser;
use wanderhub::catalog::store::Catalog;
use wanderhub::core::config::Config;
use wanderhub::core::error::Result;
use wanderhub::parallel::{self, Backend, BackendKind};
use wanderhub::query;
use wanderhub::query::spec::QuerySpec;
use wanderhub::search::pipeline::QueryPipeline;

#[derive(Parser)]
#[command(name = "wanderhub", about = "Filter-and-rank queries over a travel package catalog")]
struct Args {
    /// Tab-separated dataset file
    dataset: PathBuf,

    /// Query string, e.g. "PROVINCE=Punjab;CATEGORY=Nature;TOPK=3" or just
    /// "3" (meaning TOPK=3). Prompted interactively when omitted.
    query: Option<String>,

    /// Concurrency backend: serial, pool, loop or ranks
    #[arg(long, default_value = "serial")]
    backend: BackendKind,

    /// Worker count for the parallel backends (defaults to the CPU count)
    #[arg(long)]
    workers: Option<usize>,

    /// Emit the ranked answer as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = Config::default();
    let catalog = Arc::new(Catalog::load(&args.dataset)?);
    println!("Loaded {} packages.", catalog.len());

    let workers = args.workers.unwrap_or(config.worker_count);
    let backend = parallel::create(args.backend, catalog.clone(), workers)?;
    let pipeline = QueryPipeline::new(catalog, backend);

    let mut raw = match args.query {
        Some(query) => query,
        None => prompt()?,
    };
    if raw.is_empty() {
        raw = "TOPK=5".to_string();
    }

    let spec = query::parser::parse(&raw);
    println!("\nQuery: {}", raw);
    print_filters(&spec);

    let start = Instant::now();
    let results = pipeline.execute(&raw);
    let elapsed = start.elapsed();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print!("{}", results.format(&pipeline.catalog));
    }
    println!(
        "\nExecution Time ({}): {:.4} seconds",
        pipeline.backend.name(),
        elapsed.as_secs_f64()
    );
    Ok(())
}

fn print_filters(spec: &QuerySpec) {
    println!(
        "Filters: Province={}, Category={}, Budget=[{:.0}-{:.0}], Days={}, MinRating={:.1}, TopK={}\n",
        if spec.province.is_empty() { "ANY" } else { &spec.province },
        if spec.category.is_empty() { "ANY" } else { &spec.category },
        spec.budget_min,
        spec.budget_max,
        if spec.has_duration() { spec.duration_days } else { -1 },
        spec.min_rating,
        spec.top_k,
    );
}

fn prompt() -> Result<String> {
    println!("\nEnter query (example: TOPK=3 or PROVINCE=Punjab;CATEGORY=Nature;TOPK=3)");
    println!("You can also just type: 3  (means TOPK=3)");
    print!("> ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
