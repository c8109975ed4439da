//! Domain identifiers (strongly-typed GUIDs).
//!
//! Control plane の GUID は不透明な文字列です。Phantom type パターンで
//! `Guid<T>` の共通実装を一つにしつつ、`T` のマーカー型でアプリ・スペース・
//! ルート・スタックの GUID をコンパイル時に区別します。
//!
//! ```ignore
//! let app: ApplicationGuid = Guid::new("some-app-guid");
//! let space: SpaceGuid = Guid::new("some-space-guid");
//! // app と space は異なる型なので、混同できない
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// IdMarker は各 GUID 型のマーカー trait
pub trait IdMarker: Send + Sync + 'static {
    /// ログ出力用のリソース名（例: "app", "space"）
    fn resource() -> &'static str;
}

/// ジェネリック GUID 型
///
/// 中身は control plane が返した文字列そのまま。検証や正規化はしない。
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct Guid<T: IdMarker> {
    value: String,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

impl<T: IdMarker> Guid<T> {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            _marker: PhantomData,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

// derive だと `T: Clone` などの余計な bound が付くので手書きする。

impl<T: IdMarker> Clone for Guid<T> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<T: IdMarker> PartialEq for Guid<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: IdMarker> Eq for Guid<T> {}

impl<T: IdMarker> Hash for Guid<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T: IdMarker> Default for Guid<T> {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl<T: IdMarker> fmt::Debug for Guid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", T::resource(), self.value)
    }
}

impl<T: IdMarker> fmt::Display for Guid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl<T: IdMarker> From<&str> for Guid<T> {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl<T: IdMarker> From<String> for Guid<T> {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

// ========================================
// マーカー型の定義
// ========================================

/// Application のマーカー型
pub enum App {}

impl IdMarker for App {
    fn resource() -> &'static str {
        "app"
    }
}

/// Space のマーカー型
pub enum Space {}

impl IdMarker for Space {
    fn resource() -> &'static str {
        "space"
    }
}

/// Route のマーカー型
pub enum RouteMarker {}

impl IdMarker for RouteMarker {
    fn resource() -> &'static str {
        "route"
    }
}

/// Stack のマーカー型
pub enum StackMarker {}

impl IdMarker for StackMarker {
    fn resource() -> &'static str {
        "stack"
    }
}

// ========================================
// Type Alias
// ========================================

/// Identifier of an application.
pub type ApplicationGuid = Guid<App>;

/// Identifier of the space that scopes application names.
pub type SpaceGuid = Guid<Space>;

/// Identifier of a route.
pub type RouteGuid = Guid<RouteMarker>;

/// Identifier of a stack.
pub type StackGuid = Guid<StackMarker>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guids_keep_their_value() {
        let app = ApplicationGuid::new("some-app-guid");
        let space: SpaceGuid = "some-space-guid".into();

        assert_eq!(app.as_str(), "some-app-guid");
        assert_eq!(space.to_string(), "some-space-guid");

        // let _: SpaceGuid = app; // <- does not compile
    }

    #[test]
    fn debug_names_the_resource() {
        let route = RouteGuid::new("r-1");
        assert_eq!(format!("{route:?}"), "route(\"r-1\")");
    }

    #[test]
    fn guids_serialize_as_plain_strings() {
        let app = ApplicationGuid::new("some-app-guid");

        let serialized = serde_json::to_string(&app).unwrap();
        assert_eq!(serialized, "\"some-app-guid\"");

        let deserialized: ApplicationGuid = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, app);
    }

    #[test]
    fn default_guid_is_empty() {
        assert!(StackGuid::default().is_empty());
    }
}
