use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use common::error::Error;
use std::path::PathBuf;

/// 会話で注文を受けるドライブスルー係（LLM に解釈を任せ、注文をメニューで検証する）
#[derive(Debug, Clone, Default, PartialEq, Parser)]
#[command(name = "drivethru", version, about)]
pub struct Config {
    /// 設定ファイル（省略時は $DRIVETHRU_HOME/config.json または ~/.config/drivethru/config.json）
    #[arg(long, value_name = "path")]
    pub config: Option<PathBuf>,
    /// モデル名（設定ファイルより優先）
    #[arg(short = 'm', long, value_name = "model")]
    pub model: Option<String>,
    /// Chat Completions 互換エンドポイントのベース URL（設定ファイルより優先）
    #[arg(long, value_name = "url")]
    pub base_url: Option<String>,
    /// -v / --verbose: 運用ログを stderr に出す
    #[arg(short = 'v', long)]
    pub verbose: bool,
    /// 運用ログを JSONL で追記するファイル（--verbose より優先）
    #[arg(long, value_name = "path")]
    pub log_file: Option<PathBuf>,
    /// 補完スクリプトを出力して終了する
    #[arg(long, value_name = "shell", value_parser = clap::value_parser!(Shell))]
    pub generate: Option<Shell>,
}

/// 解析結果: 通常の Config / 補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

pub fn parse_args() -> Result<ParseOutcome, Error> {
    parse_args_from(std::env::args_os())
}

pub fn parse_args_from<I, T>(args: I) -> Result<ParseOutcome, Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let config = match Config::try_parse_from(args) {
        Ok(c) => c,
        Err(e) => match e.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                let _ = e.print();
                std::process::exit(0);
            }
            _ => return Err(Error::invalid_argument(e.to_string().trim_end().to_string())),
        },
    };
    if let Some(shell) = config.generate {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }
    Ok(ParseOutcome::Config(config))
}

/// 補完スクリプトを stdout に出す
pub fn print_completion(shell: Shell) {
    let mut cmd = Config::command();
    clap_complete::generate(shell, &mut cmd, "drivethru", &mut std::io::stdout());
}
