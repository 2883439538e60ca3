use anyhow::Result;
use meal_factory::expression::{division_sample, nested_call_sample, Expression};

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .format_timestamp(None)
        .init();

    // 1.234 / -1.234
    let division = division_sample().evaluate();
    log::debug!("division_sample = {division}");
    println!("{division}");

    // abs(2 * sqrt(32 - 16))
    let nested = nested_call_sample().evaluate();
    log::debug!("nested_call_sample = {nested}");
    println!("{nested}");

    Ok(())
}
