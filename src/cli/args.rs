use clap::Parser;

/// コマンドライン引数
///
/// 引数はすべて受け取って無視する（ヘルプ・バージョン表示もしない）
#[derive(Parser, Debug, Default)]
#[command(name = "meal_factory")]
#[command(about = "Prints a greeting; ships an Abstract Factory demo for meal composition")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// 無視される引数
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub ignored: Vec<String>,
}

impl Cli {
    /// 引数を解析する。解析できない入力も既定値として扱う
    pub fn parse_lenient<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(args).unwrap_or_else(|error| {
            log::debug!("引数を無視: {error}");
            Self::default()
        })
    }
}
