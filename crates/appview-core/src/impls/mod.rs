//! Impls - 実装（開発用・テスト用）
//!
//! # 含まれる実装
//! - **InMemoryControlPlane**: スクリプト済み応答を返す `ControlPlaneClient`
//!
//! 本番用の HTTP client はこのクレートの外に置きます。

pub mod inmem_control_plane;

pub use self::inmem_control_plane::{
    AppFixture, Call, ControlPlaneFixture, Endpoint, InMemoryControlPlane,
};
