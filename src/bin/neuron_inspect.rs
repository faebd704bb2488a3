//! CLI: Build a neuron from a JSON fixture and print its trigger and cast groups.
//!
//! Usage: `neuron_inspect [OPTIONS] <path-to-fixture>`
//! Example: neuron_inspect --fired a,b tests/fixtures/alerting.json
//!
//! Set RUST_LOG=neuron_weave=debug to see trigger groups being stored and evicted.

use std::collections::HashSet;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use neuron_weave::{LinkId, NeuronFixture};
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Build a neuron from a JSON fixture and print its snapshot.
#[derive(Parser, Debug)]
#[command(name = "neuron_inspect")]
#[command(
  after_help = r#"Fixture format:
  { "in_links": ["a", "b"], "out_links": ["p"],
    "config": { "labels": {}, "trigger_groups": [["a", "b"]], "cast_groups": { "alerts": ["p"] } } }

Examples:
  neuron_inspect tests/fixtures/alerting.json
  neuron_inspect --fired a,b --compact tests/fixtures/alerting.json"#
)]
struct Args {
  /// Print single-line JSON.
  #[arg(long)]
  compact: bool,

  /// Comma-separated in-link ids that have fired; adds a `ready` field to the output.
  #[arg(long, value_name = "IDS", value_delimiter = ',')]
  fired: Option<Vec<String>>,

  /// Path to the fixture JSON file
  #[arg(value_name = "path-to-fixture")]
  fixture_path: PathBuf,
}

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_writer(std::io::stderr)
    .init();

  let args = Args::parse();
  info!(path = %args.fixture_path.display(), "neuron_inspect starting");

  let fixture = match NeuronFixture::load(&args.fixture_path) {
    Ok(f) => f,
    Err(e) => {
      eprintln!("Error loading {}: {}", args.fixture_path.display(), e);
      process::exit(1);
    }
  };

  let neuron = match fixture.build() {
    Ok(n) => n,
    Err(e) => {
      eprintln!("Error building neuron: {}", e);
      process::exit(1);
    }
  };

  let mut out = json!({ "neuron": neuron.snapshot() });
  if let Some(fired) = &args.fired {
    let fired: HashSet<LinkId> = fired
      .iter()
      .map(|s| s.trim())
      .filter(|s| !s.is_empty())
      .map(LinkId::from)
      .collect();
    out["ready"] = json!(neuron.is_ready(&fired));
  }

  let rendered = if args.compact {
    serde_json::to_string(&out)
  } else {
    serde_json::to_string_pretty(&out)
  };
  match rendered {
    Ok(s) => println!("{}", s),
    Err(e) => {
      eprintln!("Error rendering snapshot: {}", e);
      process::exit(1);
    }
  }
}
