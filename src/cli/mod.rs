pub mod args;

pub use args::Cli;

use anyhow::Result;
use log::debug;
use std::io::Write;

/// 起動時に出力する挨拶文
pub const GREETING: &str = "Hello world!";

/// 挨拶文を出力する
///
/// 引数の内容にかかわらず出力は同じ。献立ファクトリーはここから呼ばれない
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    debug!("挨拶文を出力 (無視した引数: {})", cli.ignored.len());
    writeln!(out, "{GREETING}")?;
    Ok(())
}
