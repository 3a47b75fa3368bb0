use std::{path::PathBuf, process::ExitCode, time::Instant};

use clap::{Parser, Subcommand};
use polymul::{
    errors::PolymulError,
    parameters::Parameters,
    task::{
        generator::Generator,
        multiplier::{Method, Multiplier},
    },
};
use tracing::info;
use tracing_forest::{ForestLayer, util::LevelFilter};
use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Generate a batch of random multiplication tasks.
    Generate {
        /// Path of the JSON task file to write.
        #[arg(short, long)]
        file: PathBuf,

        /// Optional TOML configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Recompute and check the products of a persisted batch.
    Multiply {
        /// Path of the JSON task file to verify.
        #[arg(short, long)]
        file: PathBuf,

        /// Optional TOML configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Multiplication routine: `fft`, `simple` or `polynomial`.
        #[arg(short, long, default_value = "fft")]
        method: Method,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::INFO
    } else {
        LevelFilter::WARN
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    Registry::default()
        .with(env_filter)
        .with(ForestLayer::default())
        .init();
}

fn run(args: Args) -> Result<(), PolymulError> {
    match args.action {
        Action::Generate { file, config } => {
            let parameters = Parameters::load(config.as_deref())?;
            init_logging(parameters.verbose);

            let started = Instant::now();
            info!("start generator");
            Generator::new(&parameters).run(&mut rand::rng(), &file)?;
            info!("end generator after {:?}", started.elapsed());
            Ok(())
        }
        Action::Multiply {
            file,
            config,
            method,
        } => {
            let parameters = Parameters::load(config.as_deref())?;
            init_logging(parameters.verbose);

            let started = Instant::now();
            info!("start multiplier, method {method}");
            Multiplier::new(&parameters, method).run(&file)?;
            info!("end multiplier after {:?}", started.elapsed());
            Ok(())
        }
    }
}

/// Prints a clearly delimited fatal error block before the process exits
/// with a failure code.
fn report_fatal(error: &PolymulError) {
    eprintln!();
    eprintln!("{:=<79}", "");
    eprintln!("FATAL ERROR: program abort");
    eprintln!("{error}");
    eprintln!("{:=<79}", "");
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            report_fatal(&error);
            ExitCode::FAILURE
        }
    }
}
