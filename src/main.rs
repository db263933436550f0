use clap::Parser;
use imedic::config::{DEFAULT_GBOARD, DEFAULT_KOTOERI, DEFAULT_SKK, DEFAULT_SOURCE};
use imedic::{Config, convert};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "imedic",
    about = "Convert a UTF-16LE IME dictionary to Gboard, Kotoeri and SKK formats"
)]
struct Args {
    /// Source dictionary (tab-separated, UTF-16LE)
    #[arg(short, long, env = "IMEDIC_SOURCE", default_value = DEFAULT_SOURCE)]
    source: PathBuf,

    /// Output path for the Gboard dictionary ZIP
    #[arg(long, env = "IMEDIC_GBOARD", default_value = DEFAULT_GBOARD)]
    gboard: PathBuf,

    /// Output path for the Kotoeri property list
    #[arg(long, env = "IMEDIC_KOTOERI", default_value = DEFAULT_KOTOERI)]
    kotoeri: PathBuf,

    /// Output path for the SKK dictionary
    #[arg(long, env = "IMEDIC_SKK", default_value = DEFAULT_SKK)]
    skk: PathBuf,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            source: args.source,
            gboard: args.gboard,
            kotoeri: args.kotoeri,
            skk: args.skk,
        }
    }
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from(Args::parse());

    match convert(&config) {
        Ok(summary) => {
            tracing::info!(
                "Conversion complete: {} entries, {} SKK readings",
                summary.entries,
                summary.readings
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
