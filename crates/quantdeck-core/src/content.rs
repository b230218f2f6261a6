//! Content displayed by the dashboard
//!
//! Three shapes exist, matching [`ContentShape`]:
//! - free text ([`Content::Text`])
//! - an ordered strategy library ([`Strategy`])
//! - a replication test report ([`ReplicationResult`])
//!
//! The replication report keeps the JSON layout of the persisted artifact
//! (`portfolio_pnl` + `alphas`), so it round-trips through serde unchanged.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Result;
use crate::section::ContentShape;

/// A named, described strategy card in the alpha library
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Strategy {
    pub name: String,
    pub description: String,
}

impl Strategy {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Whether a replayed run matched the sandbox run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum Verdict {
    #[serde(rename = "PASS")]
    Pass,
    #[serde(rename = "FAIL")]
    Fail,
}

impl Verdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Pass => "PASS",
            Verdict::Fail => "FAIL",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Portfolio-level comparison of sandbox and replayed backtest
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PortfolioPnl {
    pub sandbox_pnl: f64,
    pub backtest_pnl: f64,
    pub pnl_match: Verdict,
}

/// Per-strategy replication outcome
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AlphaResult {
    pub trades: u32,
    pub pnl: f64,
    #[serde(rename = "match")]
    pub verdict: Verdict,
    pub analysis: String,
}

/// Per-strategy results keyed by a unique strategy key.
///
/// Iteration follows declaration order in the source document. Duplicate
/// keys are rejected when deserializing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlphaResults {
    entries: Vec<(String, AlphaResult)>,
}

impl AlphaResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a result, replacing (in place) any existing entry for `key`
    pub fn insert(&mut self, key: impl Into<String>, result: AlphaResult) -> Option<AlphaResult> {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, result)),
            None => {
                self.entries.push((key, result));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&AlphaResult> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, result)| result)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AlphaResult)> {
        self.entries.iter().map(|(k, r)| (k.as_str(), r))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, AlphaResult)> for AlphaResults {
    fn from_iter<I: IntoIterator<Item = (K, AlphaResult)>>(iter: I) -> Self {
        let mut results = AlphaResults::new();
        for (key, result) in iter {
            results.insert(key, result);
        }
        results
    }
}

impl Serialize for AlphaResults {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, result) in &self.entries {
            map.serialize_entry(key, result)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for AlphaResults {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct AlphaResultsVisitor;

        impl<'de> Visitor<'de> for AlphaResultsVisitor {
            type Value = AlphaResults;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of strategy keys to replication results")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut entries: Vec<(String, AlphaResult)> =
                    Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, result)) = access.next_entry::<String, AlphaResult>()? {
                    if entries.iter().any(|(k, _)| *k == key) {
                        return Err(serde::de::Error::custom(format!(
                            "duplicate strategy key: {key}"
                        )));
                    }
                    entries.push((key, result));
                }
                Ok(AlphaResults { entries })
            }
        }

        deserializer.deserialize_map(AlphaResultsVisitor)
    }
}

/// Sandbox-vs-replay comparison for the whole portfolio and each strategy
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ReplicationResult {
    pub portfolio_pnl: PortfolioPnl,
    pub alphas: AlphaResults,
}

impl ReplicationResult {
    /// Parse the persisted artifact layout
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Number of strategies whose replay did not match
    pub fn failed_count(&self) -> usize {
        self.alphas
            .iter()
            .filter(|(_, result)| !result.verdict.is_pass())
            .count()
    }
}

/// Loaded content for one section
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Text(String),
    Strategies(Vec<Strategy>),
    Replication(ReplicationResult),
}

impl Content {
    pub fn shape(&self) -> ContentShape {
        match self {
            Content::Text(_) => ContentShape::Text,
            Content::Strategies(_) => ContentShape::StrategyList,
            Content::Replication(_) => ContentShape::ReplicationResult,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO_ARTIFACT: &str = r#"{"portfolio_pnl":{"sandbox_pnl":572.30,"backtest_pnl":572.30,"pnl_match":"PASS"},"alphas":{"alpha_1":{"trades":15,"pnl":102.5,"match":"PASS","analysis":"ok"}}}"#;

    #[test]
    fn test_parse_scenario_artifact() {
        let result = ReplicationResult::from_json(SCENARIO_ARTIFACT).unwrap();
        assert_eq!(result.portfolio_pnl.sandbox_pnl, 572.30);
        assert_eq!(result.portfolio_pnl.backtest_pnl, 572.30);
        assert_eq!(result.portfolio_pnl.pnl_match, Verdict::Pass);
        assert_eq!(result.alphas.len(), 1);

        let alpha = result.alphas.get("alpha_1").unwrap();
        assert_eq!(alpha.trades, 15);
        assert_eq!(alpha.pnl, 102.5);
        assert_eq!(alpha.verdict, Verdict::Pass);
        assert_eq!(alpha.analysis, "ok");
    }

    #[test]
    fn test_artifact_fields_survive_reserialization() {
        let result = ReplicationResult::from_json(SCENARIO_ARTIFACT).unwrap();
        let original: serde_json::Value = serde_json::from_str(SCENARIO_ARTIFACT).unwrap();
        let reserialized = serde_json::to_value(&result).unwrap();
        assert_eq!(original, reserialized);
    }

    #[test]
    fn test_alpha_order_follows_document() {
        let json = r#"{
            "portfolio_pnl": {"sandbox_pnl": 1.0, "backtest_pnl": 1.0, "pnl_match": "PASS"},
            "alphas": {
                "zeta": {"trades": 1, "pnl": 1.0, "match": "PASS", "analysis": ""},
                "alpha": {"trades": 2, "pnl": -1.0, "match": "FAIL", "analysis": "late tick"},
                "mu": {"trades": 0, "pnl": 0.0, "match": "PASS", "analysis": ""}
            }
        }"#;
        let result = ReplicationResult::from_json(json).unwrap();
        let keys: Vec<&str> = result.alphas.keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mu"]);
        assert_eq!(result.failed_count(), 1);
    }

    #[test]
    fn test_duplicate_alpha_keys_rejected() {
        let json = r#"{
            "portfolio_pnl": {"sandbox_pnl": 1.0, "backtest_pnl": 1.0, "pnl_match": "PASS"},
            "alphas": {
                "a": {"trades": 1, "pnl": 1.0, "match": "PASS", "analysis": ""},
                "a": {"trades": 2, "pnl": 2.0, "match": "PASS", "analysis": ""}
            }
        }"#;
        let err = ReplicationResult::from_json(json).unwrap_err();
        assert!(err.to_string().contains("duplicate strategy key"));
    }

    #[test]
    fn test_invalid_verdict_rejected() {
        let json = r#"{
            "portfolio_pnl": {"sandbox_pnl": 1.0, "backtest_pnl": 1.0, "pnl_match": "MAYBE"},
            "alphas": {}
        }"#;
        let err = ReplicationResult::from_json(json).unwrap_err();
        assert!(err.is_io());
    }

    #[test]
    fn test_negative_trade_count_rejected() {
        let json = r#"{
            "portfolio_pnl": {"sandbox_pnl": 1.0, "backtest_pnl": 1.0, "pnl_match": "PASS"},
            "alphas": {"a": {"trades": -3, "pnl": 1.0, "match": "PASS", "analysis": ""}}
        }"#;
        assert!(ReplicationResult::from_json(json).is_err());
    }

    #[test]
    fn test_missing_portfolio_rejected() {
        assert!(ReplicationResult::from_json(r#"{"alphas": {}}"#).is_err());
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let result = |trades| AlphaResult {
            trades,
            pnl: 0.0,
            verdict: Verdict::Pass,
            analysis: String::new(),
        };
        let mut alphas: AlphaResults = vec![("a", result(1)), ("b", result(2))]
            .into_iter()
            .collect();
        let previous = alphas.insert("a", result(9));

        assert_eq!(previous.map(|r| r.trades), Some(1));
        assert_eq!(alphas.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(alphas.get("a").map(|r| r.trades), Some(9));
    }

    #[test]
    fn test_content_shape() {
        assert_eq!(Content::Text("x".into()).shape(), ContentShape::Text);
        assert_eq!(
            Content::Strategies(vec![]).shape(),
            ContentShape::StrategyList
        );
    }

    #[test]
    fn test_verdict_display() {
        assert_eq!(Verdict::Pass.to_string(), "PASS");
        assert_eq!(Verdict::Fail.to_string(), "FAIL");
        assert!(!Verdict::Fail.is_pass());
    }
}
