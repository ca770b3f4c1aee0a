mod batch;

use std::path::PathBuf;

use arbor_assembler::{AssemblerConfig, GenderNumberPolicy};
use arbor_pipeline::Pipeline;
use arbor_surface::LinearRealizer;
use clap::{Parser, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(author, version, about = "Realizes every JSON parse tree in a directory")]
struct Cli {
    #[arg(short, long, value_name = "DIR")]
    input: PathBuf,

    #[arg(short, long, value_name = "DIR")]
    output: PathBuf,

    /// Output files are named <PREFIX><n>.txt
    #[arg(long, default_value = "translation")]
    prefix: String,

    #[arg(long, value_enum, default_value_t = GenderNumber::Independent)]
    gender_number: GenderNumber,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum GenderNumber {
    Independent,
    GenderOverridesNumber,
}

impl From<GenderNumber> for GenderNumberPolicy {
    fn from(arg: GenderNumber) -> Self {
        match arg {
            GenderNumber::Independent => GenderNumberPolicy::Independent,
            GenderNumber::GenderOverridesNumber => GenderNumberPolicy::GenderOverridesNumber,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Sentences go to stdout, logs to stderr
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = AssemblerConfig::default().with_gender_number(cli.gender_number.into());
    let pipeline = Pipeline::new(LinearRealizer, config);

    let report = batch::run(&pipeline, &cli.input, &cli.output, &cli.prefix)?;
    for realized in &report.realized {
        tracing::debug!("{:?} -> {:?}", realized.source, realized.target);
        println!("{}", realized.sentence);
    }
    if !report.failed.is_empty() {
        tracing::warn!("{} tree(s) could not be realized", report.failed.len());
    }

    Ok(())
}
