use anyhow::Result;
use meal_factory::cli::{self, Cli};

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .format_timestamp(None)
        .init();

    let cli = Cli::parse_lenient(std::env::args_os());
    log::debug!("起動: {cli:?}");

    let stdout = std::io::stdout();
    cli::run(&cli, &mut stdout.lock())
}
