//! appview-core
//!
//! デプロイ済みアプリケーションの summary を control plane API から組み立てる。
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ids, application, instance, route, summary, warnings, errors）
//! - **ports**: 抽象化レイヤー（ControlPlaneClient）
//! - **app**: アプリケーションロジック（SummaryActor）
//! - **impls**: 実装（InMemoryControlPlane など開発用）

pub mod app;
pub mod domain;
pub mod impls;
pub mod ports;
