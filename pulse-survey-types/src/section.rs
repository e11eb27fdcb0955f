use std::fmt;

use serde::{Deserialize, Serialize};

/// The stage a survey session is in.
///
/// `Intro -> PartA -> PartB -> Complete`. Part A walks the paged question list,
/// Part B collects the priority and action selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    Intro,
    PartA,
    PartB,
    Complete,
}

impl Section {
    /// The kebab-case name used in persisted records and messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Intro => "intro",
            Self::PartA => "part-a",
            Self::PartB => "part-b",
            Self::Complete => "complete",
        }
    }

    /// Narrow to a section that can be saved and resumed.
    pub fn resumable(self) -> Option<ResumableSection> {
        match self {
            Self::PartA => Some(ResumableSection::PartA),
            Self::PartB => Some(ResumableSection::PartB),
            Self::Intro | Self::Complete => None,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The sections a progress snapshot may record.
///
/// Snapshots are never written for `intro` or `complete`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResumableSection {
    PartA,
    PartB,
}

impl From<ResumableSection> for Section {
    fn from(section: ResumableSection) -> Self {
        match section {
            ResumableSection::PartA => Self::PartA,
            ResumableSection::PartB => Self::PartB,
        }
    }
}

impl fmt::Display for ResumableSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Section::from(*self).fmt(f)
    }
}
