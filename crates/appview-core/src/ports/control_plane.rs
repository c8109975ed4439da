//! ControlPlaneClient port - control plane API への読み取り専用アクセス
//!
//! HTTP transport・認証・retry は実装側の責務。集約処理はこの trait だけに依存する。

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::domain::{
    Application, ApplicationGuid, ClientError, InstanceRuntimeInfo, InstanceStatus, Route,
    SpaceGuid, Stack, Warned,
};

/// 成功時も失敗時も warnings を運ぶ client の戻り値
pub type ClientResult<T> = Result<Warned<T>, Warned<ClientError>>;

/// ControlPlaneClient は集約処理が使う 5 つの fetch を提供する
///
/// # 実装への要求
/// - `Send + Sync`: 複数の集約処理から同時に（読み取り専用で）呼ばれうる
/// - 失敗時も、その呼び出しで発生した warnings を `Err` 側に載せて返す
#[async_trait]
pub trait ControlPlaneClient: Send + Sync {
    /// space 内で名前が一致するアプリ（通常 0 件か 1 件）
    async fn lookup_applications(
        &self,
        name: &str,
        space: &SpaceGuid,
    ) -> ClientResult<Vec<Application>>;

    /// instance ID ごとの usage stats。停止中・遷移中は `ClientError::StatsUnavailable`
    async fn get_instance_statuses(
        &self,
        app: &ApplicationGuid,
    ) -> ClientResult<BTreeMap<u32, InstanceStatus>>;

    /// instance ID ごとの state / since / details
    async fn get_instance_runtime_info(
        &self,
        app: &ApplicationGuid,
    ) -> ClientResult<BTreeMap<u32, InstanceRuntimeInfo>>;

    async fn get_routes(&self, app: &ApplicationGuid) -> ClientResult<Vec<Route>>;

    async fn get_stack(&self, app: &ApplicationGuid) -> ClientResult<Stack>;
}
