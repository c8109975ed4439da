//! App - アプリケーション層
//!
//! ports を組み合わせてユースケースを実装します。
//!
//! # 主要コンポーネント
//! - **SummaryActor**: lookup → instances → routes → stack の集約

pub mod summary;

pub use self::summary::{SummaryActor, merge_instances};
