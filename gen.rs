use anyhow::Context;
use clap::Parser;
use viewbinding_gen::{pipeline, Config};

macro_rules! errexit {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{ eprintln!($fmt $(, $arg)*); std::process::exit(1); }}
}

/// View Binding Code Generator
#[derive(Parser, Debug)]
#[command(name = "viewbinding", version)]
struct Args {
    /// The application ID
    #[arg(short = 'a', long, value_name = "ID")]
    application_id: String,

    /// The directory to scan for UI files
    #[arg(short = 'd', long, value_name = "DIR")]
    directory: String,

    /// The output directory for generated files
    #[arg(short = 'o', long, value_name = "DIR")]
    output_directory: String,
}

fn init_logging() {
    let mut builder = env_logger::Builder::new();
    match std::env::var("RUST_LOG") {
        Ok(filter) => {
            builder.parse_filters(&filter);
        }
        Err(_) => {
            builder.filter_level(log::LevelFilter::Info);
        }
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn run(config: &Config) -> anyhow::Result<()> {
    pipeline::run(config)
        .with_context(|| format!("scan {}", config.directory.display()))?;
    Ok(())
}

fn main() {
    init_logging();
    let args = Args::parse();

    let config = match Config::new(&args.application_id, &args.directory, &args.output_directory) {
        Ok(config) => config,
        Err(e) => errexit!("Error: {:#}", anyhow::Error::new(e)),
    };
    log::debug!("{config:?}");

    if let Err(e) = run(&config) {
        errexit!("Error: {e:#}");
    }
}
