//! InMemoryControlPlane - 開発・テスト用の control plane client
//!
//! 応答はあらかじめスクリプトしておき、呼び出し回数を endpoint ごとに記録します。
//! CLI の `--fixture` モードでは JSON から同じ構造を読み込みます。
//!
//! # 使用例
//! ```ignore
//! let app = Application::new("some-app-guid", "some-app");
//! let client = InMemoryControlPlane::new()
//!     .with_application(app, Warnings::from(vec!["app-warning"]))
//!     .with_routes("some-app-guid", Endpoint::ok(routes, vec!["routes-warning"]));
//! ```

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{
    Application, ApplicationGuid, ClientError, InstanceRuntimeInfo, InstanceStatus, Route,
    SpaceGuid, Stack, Warned, Warnings,
};
use crate::ports::{ClientResult, ControlPlaneClient};

/// 1 endpoint 分のスクリプト済み応答
///
/// `error` があれば `value` は無視され、`warnings` を載せた `Err` を返す。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoint<T> {
    pub value: T,
    pub warnings: Warnings,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ClientError>,
}

impl<T: Default> Endpoint<T> {
    pub fn ok(value: T, warnings: impl Into<Warnings>) -> Self {
        Self {
            value,
            warnings: warnings.into(),
            error: None,
        }
    }

    pub fn failed(error: ClientError, warnings: impl Into<Warnings>) -> Self {
        Self {
            value: T::default(),
            warnings: warnings.into(),
            error: Some(error),
        }
    }
}

impl<T: Clone> Endpoint<T> {
    fn respond(&self) -> ClientResult<T> {
        match &self.error {
            Some(err) => Err(Warned::new(err.clone(), self.warnings.clone())),
            None => Ok(Warned::new(self.value.clone(), self.warnings.clone())),
        }
    }
}

/// アプリ 1 件分の endpoint 群
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppFixture {
    pub instance_statuses: Endpoint<Vec<InstanceStatus>>,
    pub instance_runtime_info: Endpoint<Vec<InstanceRuntimeInfo>>,
    pub routes: Endpoint<Vec<Route>>,
    pub stack: Endpoint<Stack>,
}

/// control plane 全体のスナップショット（fixture のルート）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlPlaneFixture {
    /// lookup の対象。name と space_guid で絞り込まれる
    pub applications: Vec<Application>,
    pub lookup_warnings: Warnings,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lookup_error: Option<ClientError>,
    /// app GUID ごとの endpoint 応答。未登録の app は空の成功応答になる
    pub apps: HashMap<ApplicationGuid, AppFixture>,
}

/// 記録対象の endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Call {
    LookupApplications,
    InstanceStatuses,
    InstanceRuntimeInfo,
    Routes,
    Stack,
}

impl Call {
    const COUNT: usize = 5;

    fn index(self) -> usize {
        self as usize
    }
}

/// InMemoryControlPlane はスクリプト済みの `ControlPlaneClient`
///
/// # 実装詳細
/// - 応答データは構築後に不変（`&self` で読むだけ）
/// - 呼び出し回数は `AtomicUsize` で数えるので、複数タスクから共有できる
#[derive(Debug, Default)]
pub struct InMemoryControlPlane {
    fixture: ControlPlaneFixture,
    calls: [AtomicUsize; Call::COUNT],
}

impl InMemoryControlPlane {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fixture(fixture: ControlPlaneFixture) -> Self {
        Self {
            fixture,
            calls: Default::default(),
        }
    }

    /// lookup 対象のアプリを追加し、lookup の warnings を設定する
    pub fn with_application(mut self, app: Application, warnings: impl Into<Warnings>) -> Self {
        self.fixture.applications.push(app);
        self.fixture.lookup_warnings = warnings.into();
        self
    }

    pub fn with_lookup_warnings(mut self, warnings: impl Into<Warnings>) -> Self {
        self.fixture.lookup_warnings = warnings.into();
        self
    }

    pub fn with_lookup_error(mut self, error: ClientError) -> Self {
        self.fixture.lookup_error = Some(error);
        self
    }

    pub fn with_instance_statuses(
        mut self,
        app: impl Into<ApplicationGuid>,
        endpoint: Endpoint<Vec<InstanceStatus>>,
    ) -> Self {
        self.app_mut(app.into()).instance_statuses = endpoint;
        self
    }

    pub fn with_instance_runtime_info(
        mut self,
        app: impl Into<ApplicationGuid>,
        endpoint: Endpoint<Vec<InstanceRuntimeInfo>>,
    ) -> Self {
        self.app_mut(app.into()).instance_runtime_info = endpoint;
        self
    }

    pub fn with_routes(mut self, app: impl Into<ApplicationGuid>, endpoint: Endpoint<Vec<Route>>) -> Self {
        self.app_mut(app.into()).routes = endpoint;
        self
    }

    pub fn with_stack(mut self, app: impl Into<ApplicationGuid>, endpoint: Endpoint<Stack>) -> Self {
        self.app_mut(app.into()).stack = endpoint;
        self
    }

    /// endpoint が呼ばれた回数
    pub fn call_count(&self, call: Call) -> usize {
        self.calls[call.index()].load(Ordering::Relaxed)
    }

    fn app_mut(&mut self, guid: ApplicationGuid) -> &mut AppFixture {
        self.fixture.apps.entry(guid).or_default()
    }

    fn app(&self, guid: &ApplicationGuid) -> Option<&AppFixture> {
        self.fixture.apps.get(guid)
    }

    fn record(&self, call: Call) {
        self.calls[call.index()].fetch_add(1, Ordering::Relaxed);
    }

    fn respond_for<T, F>(&self, call: Call, guid: &ApplicationGuid, pick: F) -> ClientResult<T>
    where
        T: Clone + Default,
        F: FnOnce(&AppFixture) -> &Endpoint<T>,
    {
        self.record(call);
        match self.app(guid) {
            Some(app) => pick(app).respond(),
            None => Ok(Warned::bare(T::default())),
        }
    }
}

fn keyed_by_id<T>(entries: Vec<T>, id: impl Fn(&T) -> u32) -> BTreeMap<u32, T> {
    entries.into_iter().map(|entry| (id(&entry), entry)).collect()
}

#[async_trait]
impl ControlPlaneClient for InMemoryControlPlane {
    async fn lookup_applications(
        &self,
        name: &str,
        space: &SpaceGuid,
    ) -> ClientResult<Vec<Application>> {
        self.record(Call::LookupApplications);
        if let Some(err) = &self.fixture.lookup_error {
            return Err(Warned::new(err.clone(), self.fixture.lookup_warnings.clone()));
        }
        let matches = self
            .fixture
            .applications
            .iter()
            .filter(|app| app.name == name && app.space_guid == *space)
            .cloned()
            .collect();
        Ok(Warned::new(matches, self.fixture.lookup_warnings.clone()))
    }

    async fn get_instance_statuses(
        &self,
        app: &ApplicationGuid,
    ) -> ClientResult<BTreeMap<u32, InstanceStatus>> {
        self.respond_for(Call::InstanceStatuses, app, |a| &a.instance_statuses)
            .map(|warned| Warned::new(keyed_by_id(warned.value, |s| s.id), warned.warnings))
    }

    async fn get_instance_runtime_info(
        &self,
        app: &ApplicationGuid,
    ) -> ClientResult<BTreeMap<u32, InstanceRuntimeInfo>> {
        self.respond_for(Call::InstanceRuntimeInfo, app, |a| &a.instance_runtime_info)
            .map(|warned| Warned::new(keyed_by_id(warned.value, |i| i.id), warned.warnings))
    }

    async fn get_routes(&self, app: &ApplicationGuid) -> ClientResult<Vec<Route>> {
        self.respond_for(Call::Routes, app, |a| &a.routes)
    }

    async fn get_stack(&self, app: &ApplicationGuid) -> ClientResult<Stack> {
        self.respond_for(Call::Stack, app, |a| &a.stack)
    }
}
