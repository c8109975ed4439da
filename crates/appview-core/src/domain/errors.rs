//! Errors - エラー型と分類
//!
//! - `ClientError`: control plane client が返すエラー。`StatsUnavailable` だけが
//!   集約処理の中で回復される
//! - `ActionError`: 集約処理の呼び出し元に返すエラー
//! - `SummaryError`: `ActionError` + その時点までの部分結果と warnings

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::summary::ApplicationSummary;
use super::warnings::Warnings;

/// ClientError は control plane への個々の呼び出しの失敗
///
/// fixture から読めるよう `{"kind": ..., "detail": ...}` 形式で serialize する。
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum ClientError {
    /// アプリが停止中・遷移中で instance stats が取れない
    #[error("instance stats are unavailable while the application is stopped or transitioning")]
    StatsUnavailable,

    #[error("not authorized: {0}")]
    NotAuthorized(String),

    #[error("control plane error {code}: {description}")]
    Api { code: u32, description: String },

    #[error("transport error: {0}")]
    Transport(String),
}

impl ClientError {
    pub fn is_stats_unavailable(&self) -> bool {
        matches!(self, Self::StatsUnavailable)
    }
}

/// ActionError は集約処理の致命的なエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("application '{name}' not found")]
    ApplicationNotFound { name: String },

    /// client のエラーをそのまま運ぶ
    #[error(transparent)]
    Client(#[from] ClientError),
}

/// SummaryError は失敗時の集約結果
///
/// 失敗したステップまでに組み立てた summary と、失敗した呼び出しの分も含めた
/// 全 warnings を保持する。
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{error}")]
pub struct SummaryError {
    #[source]
    pub error: ActionError,
    pub partial: ApplicationSummary,
    pub warnings: Warnings,
}

impl SummaryError {
    pub fn new(error: impl Into<ActionError>, partial: ApplicationSummary, warnings: Warnings) -> Self {
        Self {
            error: error.into(),
            partial,
            warnings,
        }
    }

    /// client が返したエラーそのもの（あれば）
    pub fn client_error(&self) -> Option<&ClientError> {
        match &self.error {
            ActionError::Client(err) => Some(err),
            ActionError::ApplicationNotFound { .. } => None,
        }
    }
}
