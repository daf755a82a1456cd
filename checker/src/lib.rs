//! Calc API Check
//!
//! 計算HTTP APIに対する統合チェック（add / multiply / divide / sqrt / ゼロ除算）

#![warn(missing_docs)]

/// コマンドラインインターフェース
pub mod cli;

/// 計算APIクライアント
pub mod client;

/// ログ初期化
pub mod logging;

/// 実行結果レポート
pub mod report;

/// チェックケースと実行
pub mod suite;
