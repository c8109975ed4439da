//! Warnings - control plane が返す非致命的な診断メッセージ
//!
//! 各リモート呼び出しは成功・失敗にかかわらず warnings を返しうる。
//! `Warnings` は呼び出し順を保ったまま積み上げる accumulator で、
//! 重複排除や並べ替えは一切しない。

use serde::{Deserialize, Serialize};

/// Warnings は順序付きの警告列
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Warnings(Vec<String>);

impl Warnings {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, warning: impl Into<String>) {
        self.0.push(warning.into());
    }

    /// 別の Warnings を末尾に連結する
    pub fn append(&mut self, other: Warnings) {
        self.0.extend(other.0);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }

    /// 呼び出し結果の warnings を成功・失敗どちらの場合も取り込み、値だけを返す
    pub fn absorb<T, E>(&mut self, result: Result<Warned<T>, Warned<E>>) -> Result<T, E> {
        match result {
            Ok(Warned { value, warnings }) => {
                self.append(warnings);
                Ok(value)
            }
            Err(Warned { value, warnings }) => {
                self.append(warnings);
                Err(value)
            }
        }
    }
}

/// 値（または error）とその呼び出しで発生した warnings の組
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Warned<T> {
    pub value: T,
    pub warnings: Warnings,
}

impl<T> Warned<T> {
    pub fn new(value: T, warnings: impl Into<Warnings>) -> Self {
        Self {
            value,
            warnings: warnings.into(),
        }
    }

    /// warnings なしで包む
    pub fn bare(value: T) -> Self {
        Self {
            value,
            warnings: Warnings::new(),
        }
    }

    pub fn into_parts(self) -> (T, Warnings) {
        (self.value, self.warnings)
    }
}

impl<S: Into<String>> FromIterator<S> for Warnings {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>> From<Vec<S>> for Warnings {
    fn from(values: Vec<S>) -> Self {
        values.into_iter().collect()
    }
}

impl IntoIterator for Warnings {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_keeps_call_order_and_duplicates() {
        let mut warnings = Warnings::from(vec!["app-warning"]);
        warnings.append(Warnings::from(vec!["routes-warning", "app-warning"]));
        warnings.push("stack-warning");

        assert_eq!(
            warnings.into_vec(),
            vec!["app-warning", "routes-warning", "app-warning", "stack-warning"]
        );
    }

    #[test]
    fn absorb_keeps_warnings_from_failed_calls() {
        let mut warnings = Warnings::from(vec!["app-warning"]);

        let ok: Result<Warned<u32>, Warned<&str>> = Ok(Warned::new(7, vec!["stats-warning"]));
        assert_eq!(warnings.absorb(ok), Ok(7));

        let failed: Result<Warned<u32>, Warned<&str>> =
            Err(Warned::new("boom", vec!["routes-warning"]));
        assert_eq!(warnings.absorb(failed), Err("boom"));

        assert_eq!(
            warnings.into_vec(),
            vec!["app-warning", "stats-warning", "routes-warning"]
        );
    }

    #[test]
    fn serializes_as_a_plain_list() {
        let warnings = Warnings::from(vec!["a", "b"]);
        assert_eq!(serde_json::to_string(&warnings).unwrap(), r#"["a","b"]"#);
    }
}
