use std::path::PathBuf;
use std::sync::Arc;
use clap::Parser;
use wanderhub::catalog::store::Catalog;
use wanderhub::core::config::Config;
use wanderhub::core::error::Result;
use wanderhub::parallel::serial::SerialBackend;
use wanderhub::search::pipeline::QueryPipeline;
use wanderhub::service::udp::QueryService;

#[derive(Parser)]
#[command(
    name = "wanderhub-server",
    about = "UDP query service over a travel package catalog"
)]
struct Args {
    /// Tab-separated dataset file
    dataset: PathBuf,

    /// Address to listen on (defaults to 0.0.0.0:8080)
    #[arg(long)]
    bind: Option<String>,
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

    let backend = Box::new(SerialBackend::new(catalog.clone()));
    let pipeline = QueryPipeline::new(catalog, backend);
    let bind = args.bind.unwrap_or(config.service_bind);
    let service = QueryService::bind(&bind, pipeline, config.service_buffer_size)?;
    service.run();
    Ok(())
}
