//! SummaryActor - アプリケーション summary の集約
//!
//! control plane への呼び出しを順番に発行して 1 つの `ApplicationSummary` を組み立てる。
//!
//! 1. lookup（0 件なら `ApplicationNotFound`）
//! 2. STARTED のときだけ instance statuses → runtime info を取得して結合
//!    （`StatsUnavailable` はここでだけ回復する）
//! 3. routes
//! 4. stack
//!
//! warnings はどの経路を通っても呼び出し順にすべて返す。

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::{
    ActionError, ApplicationGuid, ApplicationInstanceWithStats, ApplicationSummary, ClientError,
    InstanceRuntimeInfo, InstanceStatus, SpaceGuid, SummaryError, Warned, Warnings,
};
use crate::ports::ControlPlaneClient;

/// SummaryActor は `ControlPlaneClient` を使って summary を組み立てる
///
/// 状態は client だけ。呼び出しごとに summary と warnings を新しく作るので、
/// 同じ actor を複数タスクから同時に使ってよい。
#[derive(Clone)]
pub struct SummaryActor {
    client: Arc<dyn ControlPlaneClient>,
}

impl SummaryActor {
    pub fn new(client: Arc<dyn ControlPlaneClient>) -> Self {
        Self { client }
    }

    /// space 内の `name` のアプリについて summary を取得する
    ///
    /// 失敗時の `SummaryError` には、失敗したステップまでの部分結果と
    /// 失敗した呼び出し自身の warnings も含めた全 warnings が入る。
    #[tracing::instrument(skip(self, space), fields(space = %space))]
    pub async fn get_application_summary_by_name_and_space(
        &self,
        name: &str,
        space: &SpaceGuid,
    ) -> Result<Warned<ApplicationSummary>, SummaryError> {
        let mut warnings = Warnings::new();

        let lookup = warnings.absorb(self.client.lookup_applications(name, space).await);
        let application = match lookup {
            // name は space 内で一意。複数返ってきても先頭だけを使う
            Ok(apps) => apps.into_iter().next(),
            Err(err) => return Err(SummaryError::new(err, ApplicationSummary::default(), warnings)),
        };
        let Some(application) = application else {
            let err = ActionError::ApplicationNotFound {
                name: name.to_string(),
            };
            return Err(SummaryError::new(err, ApplicationSummary::default(), warnings));
        };

        let guid = application.guid.clone();
        let mut summary = ApplicationSummary::new(application);
        debug!(app = %guid, state = ?summary.application.state, "application found");

        if summary.application.is_started() {
            match self.instances_with_stats(&guid, &mut warnings).await {
                Ok(instances) => summary.set_running_instances(instances),
                Err(err) if err.is_stats_unavailable() => {
                    warn!(app = %guid, "instance stats unavailable, continuing without instances");
                }
                Err(err) => return Err(SummaryError::new(err, summary, warnings)),
            }
        }

        debug!(app = %guid, "fetching routes");
        match warnings.absorb(self.client.get_routes(&guid).await) {
            Ok(routes) => summary.routes = routes,
            Err(err) => return Err(SummaryError::new(err, summary, warnings)),
        }

        debug!(app = %guid, "fetching stack");
        match warnings.absorb(self.client.get_stack(&guid).await) {
            Ok(stack) => summary.stack = stack,
            Err(err) => return Err(SummaryError::new(err, summary, warnings)),
        }

        info!(
            app = %guid,
            instances = summary.running_instances.len(),
            routes = summary.routes.len(),
            warnings = warnings.len(),
            "application summary assembled"
        );
        Ok(Warned {
            value: summary,
            warnings,
        })
    }

    async fn instances_with_stats(
        &self,
        guid: &ApplicationGuid,
        warnings: &mut Warnings,
    ) -> Result<Vec<ApplicationInstanceWithStats>, ClientError> {
        debug!(app = %guid, "fetching instance stats");
        let statuses = warnings.absorb(self.client.get_instance_statuses(guid).await)?;
        let runtime = warnings.absorb(self.client.get_instance_runtime_info(guid).await)?;
        Ok(merge_instances(statuses, &runtime))
    }
}

/// statuses のキーを正として runtime info を結合する（ID 昇順）
///
/// runtime 側にしかない ID は捨てる。status 側にしかない ID は state が `Absent` になる。
pub fn merge_instances(
    statuses: BTreeMap<u32, InstanceStatus>,
    runtime: &BTreeMap<u32, InstanceRuntimeInfo>,
) -> Vec<ApplicationInstanceWithStats> {
    statuses
        .into_iter()
        .map(|(id, status)| ApplicationInstanceWithStats::merge(id, status, runtime.get(&id)))
        .collect()
}
