use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of form sections counted toward completion.
pub const TOTAL_SECTIONS: usize = 5;

/// The logical sections of the résumé form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    PersonalInfo,
    WorkExperience,
    Education,
    Skills,
    Projects,
}

impl Section {
    pub const ALL: [Section; TOTAL_SECTIONS] = [
        Section::PersonalInfo,
        Section::WorkExperience,
        Section::Education,
        Section::Skills,
        Section::Projects,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::PersonalInfo => "personalInfo",
            Section::WorkExperience => "workExperience",
            Section::Education => "education",
            Section::Skills => "skills",
            Section::Projects => "projects",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| format!("unknown section '{s}'"))
    }
}

/// The progress ledger persisted next to the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    /// Completed sections in the order they were first completed; never duplicated.
    pub completed_sections: Vec<Section>,
    /// Section the user last worked on. `None` until the first update.
    #[serde(default)]
    pub current_section: Option<Section>,
    /// Seconds spent in the builder, as reported by the client.
    #[serde(default)]
    pub time_spent: u64,
    pub last_activity: DateTime<Utc>,
    /// Unlocked achievement ids. Append-only; repeats are kept.
    #[serde(default)]
    pub achievements: Vec<String>,
}

impl UserProgress {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            completed_sections: Vec::new(),
            current_section: None,
            time_spent: 0,
            last_activity: now,
            achievements: Vec::new(),
        }
    }

    /// Records activity on `section`, optionally completing it and unlocking an achievement.
    pub fn record(
        &mut self,
        section: Section,
        completed: bool,
        achievement: Option<String>,
        now: DateTime<Utc>,
    ) {
        self.current_section = Some(section);
        self.last_activity = now;
        if completed && !self.is_complete(section) {
            self.completed_sections.push(section);
        }
        if let Some(id) = achievement {
            self.achievements.push(id);
        }
    }

    pub fn is_complete(&self, section: Section) -> bool {
        self.completed_sections.contains(&section)
    }

    /// Completed share of the form as a whole percentage, rounded to nearest.
    pub fn completion_percentage(&self) -> u8 {
        let ratio = self.completed_sections.len() as f64 / TOTAL_SECTIONS as f64;
        (ratio * 100.0).round().min(100.0) as u8
    }
}
