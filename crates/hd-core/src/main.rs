//! hd-core CLI: exact gene/trait posterior inference over a pedigree CSV.

use clap::Parser;
use hd_common::{OutputFormat, Result};
use hd_config::Model;
use hd_core::exit_codes::ExitCode;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "hd-core",
    version,
    about = "Exact gene/trait posterior inference over family pedigrees"
)]
struct Cli {
    /// Pedigree CSV with columns name,mother,father,trait.
    data: PathBuf,

    /// JSON probability model overriding the built-in default.
    #[arg(long)]
    model: Option<PathBuf>,

    /// Output format for results.
    #[arg(long, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log filter directive (also honors RUST_LOG).
    #[arg(long, env = "RUST_LOG", default_value = "warn")]
    log_level: String,
}

fn run(cli: &Cli) -> Result<String> {
    let model = match &cli.model {
        Some(path) => Model::from_file(path)?,
        None => Model::default(),
    };
    let pedigree = hd_core::load_pedigree(&cli.data)?;
    let posteriors = hd_core::infer(&pedigree, &model)?;
    hd_core::report::render(&posteriors, cli.format)
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cli.log_level))
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(rendered) => {
            print!("{rendered}");
            std::process::exit(ExitCode::Ok.as_i32());
        }
        Err(err) => {
            eprintln!("error[{}]: {}", err.code(), err);
            std::process::exit(ExitCode::from_error(&err).as_i32());
        }
    }
}
