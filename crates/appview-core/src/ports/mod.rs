//! Ports - 抽象化レイヤー
//!
//! 外部システム（control plane API）へのインターフェースを定義します。
//! 実装の詳細（HTTP, 認証, retry）はここには現れません。

pub mod control_plane;

pub use self::control_plane::{ClientResult, ControlPlaneClient};
