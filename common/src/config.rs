//! 設定管理
//!
//! ApiConfig: 検証対象サービスのURLとタイムアウト

use crate::error::{CheckError, CheckResult};
use crate::protocol::Target;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// 環境変数のプレフィックス（例: `CALC_CHECK_BASE_URL`）
pub const ENV_PREFIX: &str = "CALC_CHECK";

/// URLとして受け付ける最小長（`http://` + 1文字より長いこと）
const MIN_URL_LEN: usize = 8;

/// 検証対象サービスの設定
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// 稼働中サービスのURL (デフォルト: "http://localhost:5000")
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// モックサービスのURL (デフォルト: "http://localhost:9090")
    #[serde(default = "default_mock_base_url")]
    pub mock_base_url: String,

    /// リクエストタイムアウト（秒）(デフォルト: 2)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_mock_base_url() -> String {
    "http://localhost:9090".to_string()
}

fn default_timeout() -> u64 {
    2
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            mock_base_url: default_mock_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

impl ApiConfig {
    /// デフォルト値 → 設定ファイル → 環境変数 の順に重ねて読み込む
    ///
    /// 設定ファイルの形式は拡張子（toml/json/yaml）から判定される。
    pub fn load(path: Option<&Path>) -> CheckResult<Self> {
        let defaults = Self::default();
        let mut builder = config::Config::builder()
            .set_default("base_url", defaults.base_url)?
            .set_default("mock_base_url", defaults.mock_base_url)?
            .set_default("timeout_secs", defaults.timeout_secs as i64)?;

        if let Some(path) = path {
            if !path.exists() {
                return Err(CheckError::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            builder = builder.add_source(config::File::from(path));
        }

        let settings = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// 設定値を検証する
    ///
    /// 各URLは空でなく、8文字より長く、http(s)の絶対URLであること。
    pub fn validate(&self) -> CheckResult<()> {
        validate_url("base_url", &self.base_url)?;
        validate_url("mock_base_url", &self.mock_base_url)?;
        if self.timeout_secs == 0 {
            return Err(CheckError::Config(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// 送信先に対応するベースURL（末尾の `/` は除去）
    pub fn base_url_for(&self, target: Target) -> &str {
        let url = match target {
            Target::Live => &self.base_url,
            Target::Mock => &self.mock_base_url,
        };
        url.trim_end_matches('/')
    }

    /// リクエストタイムアウト
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn validate_url(field: &str, value: &str) -> CheckResult<()> {
    if value.trim().len() <= MIN_URL_LEN {
        return Err(CheckError::Config(format!(
            "{field} is not configured (got {value:?})"
        )));
    }
    let url = reqwest::Url::parse(value)
        .map_err(|e| CheckError::Config(format!("{field} is not a valid URL: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(CheckError::Config(format!(
            "{field} must use http or https (got {other})"
        ))),
    }
}
