//! 計算APIクライアント
//!
//! 稼働中サービス / モックサービスへ GET を1回ずつ送り、プレーンテキストの本文を返す

use calc_api_check_common::{
    config::ApiConfig,
    error::{CheckError, CheckResult},
    protocol::{Operation, Target},
};
use reqwest::{Client, StatusCode};
use std::time::{Duration, Instant};
use tracing::debug;

/// 1回のGETの結果
#[derive(Debug, Clone)]
pub struct Reply {
    /// リクエストURL
    pub url: String,
    /// HTTPステータス（常に200）
    pub status: StatusCode,
    /// レスポンス本文
    pub body: String,
    /// 所要時間
    pub elapsed: Duration,
}

/// 計算APIクライアント
#[derive(Debug, Clone)]
pub struct CalcClient {
    http_client: Client,
    config: ApiConfig,
}

impl CalcClient {
    /// 設定を検証し、タイムアウト付きのクライアントを作成
    pub fn new(config: ApiConfig) -> CheckResult<Self> {
        config.validate()?;

        let http_client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| CheckError::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// 使用中の設定
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// 送信先とパスから完全なURLを組み立てる
    pub fn url_for(&self, target: Target, path: &str) -> String {
        format!("{}{}", self.config.base_url_for(target), path)
    }

    /// GETを送信し、200以外はエラーにする
    pub async fn get(&self, target: Target, path: &str) -> CheckResult<Reply> {
        let url = self.url_for(target, path);
        let started = Instant::now();

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| transport_error(&url, e))?;

        let status = response.status();
        debug!(
            "GET {} -> {} ({} ms)",
            url,
            status,
            started.elapsed().as_millis()
        );

        if status != StatusCode::OK {
            return Err(CheckError::status(url, status));
        }

        let body = response
            .text()
            .await
            .map_err(|e| transport_error(&url, e))?;

        Ok(Reply {
            url,
            status,
            body,
            elapsed: started.elapsed(),
        })
    }

    /// 操作を既定の送信先で評価し、本文を返す
    pub async fn evaluate(&self, operation: &Operation) -> CheckResult<String> {
        let reply = self
            .get(operation.default_target(), &operation.path())
            .await?;
        Ok(reply.body)
    }

    /// `GET /calc/add/{a}/{b}`
    pub async fn add(&self, a: f64, b: f64) -> CheckResult<String> {
        self.evaluate(&Operation::Add { a, b }).await
    }

    /// `GET /calc/multiply/{a}/{b}`
    pub async fn multiply(&self, a: f64, b: f64) -> CheckResult<String> {
        self.evaluate(&Operation::Multiply { a, b }).await
    }

    /// `GET /calc/divide/{a}/{b}`
    pub async fn divide(&self, a: f64, b: f64) -> CheckResult<String> {
        self.evaluate(&Operation::Divide { a, b }).await
    }

    /// `GET /calc/sqrt/{n}`（モックサービス）
    pub async fn sqrt(&self, n: f64) -> CheckResult<String> {
        self.evaluate(&Operation::Sqrt { n }).await
    }
}

fn transport_error(url: &str, err: reqwest::Error) -> CheckError {
    if err.is_timeout() {
        CheckError::Timeout(format!("{} did not respond in time: {}", url, err))
    } else {
        CheckError::Http(format!("Request to {} failed: {}", url, err))
    }
}
