//! テスト共通ヘルパー

pub mod calc_server;
