//! Navigable dashboard sections and the content shape each one displays

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The shape of content a section displays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentShape {
    /// Free text with simple markup
    Text,
    /// Ordered list of strategy cards
    StrategyList,
    /// Sandbox vs replay comparison table
    ReplicationResult,
}

/// One of the six fixed dashboard views, in sidebar order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    #[default]
    Objective,
    SystemArchitecture,
    AlphaLibrary,
    RigorousTesting,
    ReplicationTest,
    FinalReport,
}

impl Section {
    /// All sections in display order
    pub const ALL: [Section; 6] = [
        Section::Objective,
        Section::SystemArchitecture,
        Section::AlphaLibrary,
        Section::RigorousTesting,
        Section::ReplicationTest,
        Section::FinalReport,
    ];

    /// Human-readable label shown in the sidebar and page title
    pub fn label(&self) -> &'static str {
        match self {
            Section::Objective => "Objective",
            Section::SystemArchitecture => "System Architecture",
            Section::AlphaLibrary => "Alpha Library",
            Section::RigorousTesting => "Rigorous Testing",
            Section::ReplicationTest => "Deployment & Replication Test",
            Section::FinalReport => "Final Report",
        }
    }

    /// Stable identifier used in config files, CLI flags and headless output
    pub fn key(&self) -> &'static str {
        match self {
            Section::Objective => "objective",
            Section::SystemArchitecture => "system_architecture",
            Section::AlphaLibrary => "alpha_library",
            Section::RigorousTesting => "rigorous_testing",
            Section::ReplicationTest => "replication_test",
            Section::FinalReport => "final_report",
        }
    }

    pub fn shape(&self) -> ContentShape {
        match self {
            Section::AlphaLibrary => ContentShape::StrategyList,
            Section::ReplicationTest => ContentShape::ReplicationResult,
            Section::Objective
            | Section::SystemArchitecture
            | Section::RigorousTesting
            | Section::FinalReport => ContentShape::Text,
        }
    }

    /// Zero-based position in [`Section::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Section::Objective => 0,
            Section::SystemArchitecture => 1,
            Section::AlphaLibrary => 2,
            Section::RigorousTesting => 3,
            Section::ReplicationTest => 4,
            Section::FinalReport => 5,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Next section, wrapping around to the first
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous section, wrapping around to the last
    pub fn previous(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Section {
    type Err = String;

    /// Accepts the key (`alpha_library`), a kebab-case key (`alpha-library`),
    /// or the label (`Alpha Library`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .iter()
            .copied()
            .find(|section| {
                section.key() == normalized || section.label().to_ascii_lowercase() == normalized
            })
            .ok_or_else(|| format!("unknown section: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_sections_in_display_order() {
        for (i, section) in Section::ALL.iter().enumerate() {
            assert_eq!(section.index(), i);
            assert_eq!(Section::from_index(i), Some(*section));
        }
        assert_eq!(Section::from_index(6), None);
    }

    #[test]
    fn test_shapes() {
        assert_eq!(Section::AlphaLibrary.shape(), ContentShape::StrategyList);
        assert_eq!(
            Section::ReplicationTest.shape(),
            ContentShape::ReplicationResult
        );
        let text_sections = Section::ALL
            .iter()
            .filter(|s| s.shape() == ContentShape::Text)
            .count();
        assert_eq!(text_sections, 4);
    }

    #[test]
    fn test_next_and_previous_wrap() {
        assert_eq!(Section::FinalReport.next(), Section::Objective);
        assert_eq!(Section::Objective.previous(), Section::FinalReport);
        assert_eq!(Section::Objective.next(), Section::SystemArchitecture);
    }

    #[test]
    fn test_default_is_objective() {
        assert_eq!(Section::default(), Section::Objective);
    }

    #[test]
    fn test_from_str_accepts_keys_and_labels() {
        assert_eq!(
            "alpha_library".parse::<Section>(),
            Ok(Section::AlphaLibrary)
        );
        assert_eq!(
            "replication-test".parse::<Section>(),
            Ok(Section::ReplicationTest)
        );
        assert_eq!("Final Report".parse::<Section>(), Ok(Section::FinalReport));
        assert!("portfolio".parse::<Section>().is_err());
    }

    #[test]
    fn test_serde_uses_snake_case_keys() {
        let json = serde_json::to_string(&Section::SystemArchitecture).unwrap();
        assert_eq!(json, "\"system_architecture\"");
        let parsed: Section = serde_json::from_str("\"rigorous_testing\"").unwrap();
        assert_eq!(parsed, Section::RigorousTesting);
    }

    #[test]
    fn test_display_is_label() {
        assert_eq!(
            Section::ReplicationTest.to_string(),
            "Deployment & Replication Test"
        );
    }
}
