//! 計算APIのルート定義
//!
//! `GET /calc/{operation}/{operands...}` 形式のパスと送信先サービスを表す

use serde::{Deserialize, Serialize};
use std::fmt;

/// リクエスト送信先
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// 稼働中の計算サービス
    Live,
    /// 平方根のみを提供するモックサービス
    Mock,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Live => write!(f, "live"),
            Target::Mock => write!(f, "mock"),
        }
    }
}

/// 計算API呼び出し
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Operation {
    /// 加算
    Add {
        /// 左辺
        a: f64,
        /// 右辺
        b: f64,
    },
    /// 乗算
    Multiply {
        /// 左辺
        a: f64,
        /// 右辺
        b: f64,
    },
    /// 除算（b = 0 のときサービスは406を返す）
    Divide {
        /// 被除数
        a: f64,
        /// 除数
        b: f64,
    },
    /// 平方根
    Sqrt {
        /// 被開平数
        n: f64,
    },
}

impl Operation {
    /// パス上の操作名
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add { .. } => "add",
            Operation::Multiply { .. } => "multiply",
            Operation::Divide { .. } => "divide",
            Operation::Sqrt { .. } => "sqrt",
        }
    }

    /// リクエストパス（例: `/calc/add/1/2`）
    ///
    /// 整数値のオペランドは小数点なしで出力される（`1.0` → `1`）。
    pub fn path(&self) -> String {
        match self {
            Operation::Add { a, b } | Operation::Multiply { a, b } | Operation::Divide { a, b } => {
                format!("/calc/{}/{}/{}", self.name(), a, b)
            }
            Operation::Sqrt { n } => format!("/calc/{}/{}", self.name(), n),
        }
    }

    /// 既定の送信先
    ///
    /// 稼働中サービスは add/multiply/divide のみを公開しているため、
    /// sqrt はモックサービスへ送る。
    pub fn default_target(&self) -> Target {
        match self {
            Operation::Sqrt { .. } => Target::Mock,
            _ => Target::Live,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Add { a, b } | Operation::Multiply { a, b } | Operation::Divide { a, b } => {
                write!(f, "{}({}, {})", self.name(), a, b)
            }
            Operation::Sqrt { n } => write!(f, "{}({})", self.name(), n),
        }
    }
}
