//! Calc API Check Common Library
//!
//! チェッカー本体とテストで共有する型定義

#![warn(missing_docs)]

/// 設定管理（デフォルト値、設定ファイル、環境変数）
pub mod config;

/// エラー型定義
pub mod error;

/// 計算APIのルート定義
pub mod protocol;
