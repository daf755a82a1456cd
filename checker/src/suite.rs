//! 計算APIチェックスイート
//!
//! 各ケースは独立しており、前のケースが失敗しても残りを順番に実行する。

use crate::client::CalcClient;
use crate::report::{CaseOutcome, SuiteReport};
use calc_api_check_common::{
    error::{CheckError, CheckResult},
    protocol::Operation,
};
use std::time::Instant;
use tracing::{info, warn};

/// ケースの期待値
#[derive(Debug, Clone, PartialEq)]
pub enum Expectation {
    /// ステータス200かつ本文が完全一致する
    Body(String),
    /// 呼び出しが失敗し、エラー文字列に部分文字列が含まれる
    ErrorContains(String),
}

impl std::fmt::Display for Expectation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expectation::Body(body) => write!(f, "body == {:?}", body),
            Expectation::ErrorContains(text) => write!(f, "error contains {:?}", text),
        }
    }
}

/// チェックケース
#[derive(Debug, Clone, PartialEq)]
pub struct CheckCase {
    /// ケース名（`--case` で指定する名前）
    pub name: &'static str,
    /// 呼び出す操作
    pub operation: Operation,
    /// 期待値
    pub expectation: Expectation,
    /// 失敗時に表示するメッセージ
    pub failure_message: &'static str,
}

/// 標準の5ケース
pub fn default_cases() -> Vec<CheckCase> {
    vec![
        CheckCase {
            name: "add",
            operation: Operation::Add { a: 1.0, b: 2.0 },
            expectation: Expectation::Body("3".to_string()),
            failure_message: "ERROR ADD",
        },
        CheckCase {
            name: "sqrt",
            operation: Operation::Sqrt { n: 64.0 },
            expectation: Expectation::Body("8".to_string()),
            failure_message: "ERROR SQRT",
        },
        CheckCase {
            name: "multiply",
            operation: Operation::Multiply { a: 6.0, b: 7.0 },
            expectation: Expectation::Body("42".to_string()),
            failure_message: "ERROR MULTIPLY",
        },
        CheckCase {
            name: "divide",
            operation: Operation::Divide { a: 10.0, b: 2.0 },
            expectation: Expectation::Body("5.0".to_string()),
            failure_message: "ERROR DIVIDE",
        },
        CheckCase {
            name: "divide_by_zero",
            operation: Operation::Divide { a: 10.0, b: 0.0 },
            expectation: Expectation::ErrorContains("HTTP Error 406".to_string()),
            failure_message: "expected error was not received",
        },
    ]
}

/// 名前でケースを絞り込む（空なら全件）
///
/// 指定順ではなく元の並び順を保つ。未知の名前は設定エラー。
pub fn select(cases: Vec<CheckCase>, names: &[String]) -> CheckResult<Vec<CheckCase>> {
    if names.is_empty() {
        return Ok(cases);
    }

    if let Some(unknown) = names
        .iter()
        .find(|name| !cases.iter().any(|case| case.name == name.as_str()))
    {
        let known: Vec<_> = cases.iter().map(|case| case.name).collect();
        return Err(CheckError::Config(format!(
            "unknown case '{}' (available: {})",
            unknown,
            known.join(", ")
        )));
    }

    Ok(cases
        .into_iter()
        .filter(|case| names.iter().any(|name| name.as_str() == case.name))
        .collect())
}

/// 1ケースを実行して結果を返す
pub async fn check(client: &CalcClient, case: &CheckCase) -> CaseOutcome {
    let target = case.operation.default_target();
    let url = client.url_for(target, &case.operation.path());
    let started = Instant::now();
    let result = client.evaluate(&case.operation).await;
    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    let (observed, verdict) = match result {
        Ok(body) => {
            let verdict = judge_body(case, &body);
            (body, verdict)
        }
        Err(err) => {
            let text = err.to_string();
            let verdict = judge_error(case, &err);
            (text, verdict)
        }
    };

    match &verdict {
        Ok(()) => info!("[PASS] {} {}", case.name, url),
        Err(err) => warn!("[FAIL] {} {}: {}", case.name, url, err),
    }

    CaseOutcome {
        name: case.name.to_string(),
        target,
        url,
        passed: verdict.is_ok(),
        observed,
        failure: verdict.err().map(|e| e.to_string()),
        elapsed_ms,
    }
}

/// ケースを順番に実行する
pub async fn run(client: &CalcClient, cases: &[CheckCase]) -> SuiteReport {
    let mut report = SuiteReport::new();
    for case in cases {
        report.push(check(client, case).await);
    }
    info!("{} passed, {} failed", report.passed(), report.failed());
    report
}

fn judge_body(case: &CheckCase, body: &str) -> CheckResult<()> {
    match &case.expectation {
        Expectation::Body(expected) if body == expected => Ok(()),
        Expectation::Body(expected) => Err(CheckError::Assertion(format!(
            "{}: expected {:?}, got {:?}",
            case.failure_message, expected, body
        ))),
        Expectation::ErrorContains(_) => Err(CheckError::Assertion(format!(
            "{}: {} returned {:?} instead of failing",
            case.failure_message, case.operation, body
        ))),
    }
}

fn judge_error(case: &CheckCase, err: &CheckError) -> CheckResult<()> {
    match &case.expectation {
        Expectation::ErrorContains(text) if err.to_string().contains(text.as_str()) => Ok(()),
        Expectation::ErrorContains(text) => Err(CheckError::Assertion(format!(
            "{}: expected error containing {:?}, got {:?}",
            case.failure_message,
            text,
            err.to_string()
        ))),
        Expectation::Body(_) => Err(CheckError::Assertion(format!(
            "{}: {}",
            case.failure_message, err
        ))),
    }
}
