use std::env;
use std::sync::Arc;

use ring_election::load_ring_file;
use ring_election::Coordinator;
use ring_election::Result;
use ring_election::RingConfig;
use tracing::error;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<()> {
    init_observability();

    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "ring-election".to_string());
    let input_path = match args.next() {
        Some(path) => path,
        None => {
            println!("Usage: {} <inputFile.txt>", program);
            return Ok(());
        }
    };

    // Defaults + RING__* environment variables, with an optional override
    // file on top
    let settings = match env::var("CONFIG_PATH") {
        Ok(path) => RingConfig::new()?.with_override_config(&path)?,
        Err(_) => RingConfig::new()?,
    };

    let identifiers = load_ring_file(&input_path)?;
    info!(
        "Loaded ring of {} participants from {}",
        identifiers.len(),
        input_path
    );

    let coordinator = Coordinator::new(identifiers, Arc::new(settings))?;
    let outcome = match coordinator.run().await {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("Election run failed: {:?}", e);
            return Err(e);
        }
    };

    println!("leader: {}", outcome.leader_id);
    Ok(())
}

fn init_observability() {
    let base_subscriber = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_default_env());
    tracing_subscriber::registry().with(base_subscriber).init();
}
