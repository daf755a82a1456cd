//! run サブコマンド
//!
//! 設定を解決してチェックを順番に実行し、結果を表示します。

use crate::client::CalcClient;
use crate::suite;
use calc_api_check_common::config::ApiConfig;
use calc_api_check_common::error::CheckResult;
use clap::{Args, ValueEnum};
use std::path::PathBuf;
use tracing::info;

/// 出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// タブ区切りの表
    #[default]
    Table,
    /// JSON
    Json,
}

/// run サブコマンドの引数
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Configuration file (toml, json or yaml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the live service base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Override the mock service base URL
    #[arg(long)]
    pub mock_base_url: Option<String>,

    /// Override the per-request timeout in seconds
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Run only the named case (repeatable)
    #[arg(long = "case", value_name = "NAME")]
    pub cases: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl RunArgs {
    /// 設定ファイル・環境変数を読み込み、コマンドライン指定で上書きする
    pub fn resolve_config(&self) -> CheckResult<ApiConfig> {
        let mut config = ApiConfig::load(self.config.as_deref())?;
        if let Some(url) = &self.base_url {
            config.base_url = url.clone();
        }
        if let Some(url) = &self.mock_base_url {
            config.mock_base_url = url.clone();
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }
        Ok(config)
    }
}

/// run コマンドを実行
///
/// 全ケースが成功した場合に `true` を返す。
pub async fn execute(args: &RunArgs) -> Result<bool, anyhow::Error> {
    let config = args.resolve_config()?;
    info!(
        "Checking live={} mock={} (timeout {}s)",
        config.base_url, config.mock_base_url, config.timeout_secs
    );

    let client = CalcClient::new(config)?;
    let cases = suite::select(suite::default_cases(), &args.cases)?;
    let report = suite::run(&client, &cases).await;

    match args.format {
        OutputFormat::Table => print!("{}", report.render_table()),
        OutputFormat::Json => println!("{}", report.render_json()?),
    }

    Ok(report.is_success())
}
