//! モック計算サーバーヘルパー
//!
//! 稼働中サービスとモックサービスをそれぞれ wiremock で立ち上げ、
//! 標準ケースが期待するレスポンスを返します。

use calc_api_check_common::config::ApiConfig;
use std::time::Duration;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

/// 稼働中サービス + モックサービスのペア
pub struct CalcServers {
    pub live: MockServer,
    pub mock: MockServer,
}

#[allow(dead_code)] // 各テストバイナリで使うヘルパーが異なる
impl CalcServers {
    /// 何もマウントしていないサーバーを起動
    pub async fn start_empty() -> Self {
        Self {
            live: MockServer::start().await,
            mock: MockServer::start().await,
        }
    }

    /// 標準ケースに正しく応答するサーバーを起動
    pub async fn start() -> Self {
        let servers = Self::start_empty().await;

        mount_text(&servers.live, "/calc/add/1/2", "3").await;
        mount_text(&servers.live, "/calc/multiply/6/7", "42").await;
        mount_text(&servers.live, "/calc/divide/10/2", "5.0").await;
        mount_status(&servers.live, "/calc/divide/10/0", 406).await;
        mount_text(&servers.mock, "/calc/sqrt/64", "8").await;

        servers
    }

    /// 両サーバーを指す設定（タイムアウトはデフォルトの2秒）
    pub fn config(&self) -> ApiConfig {
        ApiConfig {
            base_url: self.live.uri(),
            mock_base_url: self.mock.uri(),
            ..ApiConfig::default()
        }
    }
}

/// `GET {route}` に200とプレーンテキストを返す
pub async fn mount_text(server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

/// `GET {route}` に指定ステータスを返す
pub async fn mount_status(server: &MockServer, route: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// `GET {route}` に遅延付きで200を返す
#[allow(dead_code)]
pub async fn mount_delayed(server: &MockServer, route: &str, body: &str, delay: Duration) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .set_delay(delay),
        )
        .mount(server)
        .await;
}
