use std::io;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use prime_checker::{
    Method,
    demo::{self, DemoConfig, LARGE_INPUT},
};
use tracing_forest::{ForestLayer, PrettyPrinter};
use tracing_subscriber::{EnvFilter, Registry, prelude::*};

mod report;

#[derive(Parser, Debug)]
#[command(version, about = "Trial-division primality checks")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Classify a list of integers with both checks, then time both on one larger input.
    Demo {
        /// Comma separated integers to classify. Defaults to 1..=11 and the primes up to 47.
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        inputs: Option<Vec<i64>>,
        #[arg(long, default_value_t = LARGE_INPUT, allow_negative_numbers = true)]
        large: i64,
    },
    /// Check a single integer.
    Check {
        #[arg(allow_negative_numbers = true)]
        n: i64,
        #[arg(short, long, value_enum, default_value_t = MethodArg::Both)]
        method: MethodArg,
        /// Also print how many trial divisions each check took.
        #[arg(long)]
        count: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Demo {
            inputs: None,
            large: LARGE_INPUT,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum MethodArg {
    Optimized,
    Naive,
    Both,
}

impl MethodArg {
    fn methods(self) -> &'static [Method] {
        match self {
            MethodArg::Optimized => &[Method::Optimized],
            MethodArg::Naive => &[Method::Naive],
            MethodArg::Both => &[Method::Optimized, Method::Naive],
        }
    }
}

fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // stdout carries the report only
    let forest = ForestLayer::from(PrettyPrinter::new().writer(io::stderr));
    Registry::default()
        .with(filter)
        .with(forest)
        .try_init()
        .context("failed to initialize tracing")
}

fn main() -> anyhow::Result<()> {
    init_tracing()?;
    let args = Args::parse();
    let mut out = io::stdout().lock();

    match args.command.unwrap_or_default() {
        Command::Demo { inputs, large } => {
            let mut config = DemoConfig {
                large_input: large,
                ..DemoConfig::default()
            };
            if let Some(inputs) = inputs {
                config.inputs = inputs;
            }
            let report = demo::run(&config);
            report::write_demo(&mut out, &report).context("failed to write demo report")?;
        }
        Command::Check { n, method, count } => {
            report::write_check(&mut out, n, method.methods(), count)
                .context("failed to write verdict")?;
        }
    }
    Ok(())
}
