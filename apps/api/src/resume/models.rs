use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

fn new_entry_id() -> String {
    Uuid::new_v4().to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_in: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    #[serde(default = "new_entry_id")]
    pub id: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default)]
    pub is_current_role: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    #[serde(default = "new_entry_id")]
    pub id: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graduation_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
    #[serde(default)]
    pub relevant_courses: Vec<String>,
}

/// Four-step ordinal proficiency scale.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum SkillLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Expert => "Expert",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Skills with no stored category fall into `Other`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillCategory {
    Technical,
    Soft,
    Language,
    #[default]
    Other,
}

impl SkillCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Technical => "Technical",
            SkillCategory::Soft => "Soft",
            SkillCategory::Language => "Language",
            SkillCategory::Other => "Other",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    #[serde(default = "new_entry_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub level: SkillLevel,
    #[serde(default)]
    pub category: SkillCategory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default = "new_entry_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default)]
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

/// The résumé record as the form builds it up: every section may still be missing.
///
/// Also used as the PATCH body: a present section replaces the stored one wholesale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal_info: Option<PersonalInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_experience: Option<Vec<WorkExperience>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<Vec<Education>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<Skill>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<Project>>,
}

impl ResumeDraft {
    /// Shallow merge: sections present in `patch` replace those in `self`.
    pub fn merge(mut self, patch: ResumeDraft) -> ResumeDraft {
        if patch.personal_info.is_some() {
            self.personal_info = patch.personal_info;
        }
        if patch.work_experience.is_some() {
            self.work_experience = patch.work_experience;
        }
        if patch.education.is_some() {
            self.education = patch.education;
        }
        if patch.skills.is_some() {
            self.skills = patch.skills;
        }
        if patch.projects.is_some() {
            self.projects = patch.projects;
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == ResumeDraft::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_merge_replaces_only_present_sections() {
        let existing = ResumeDraft {
            personal_info: Some(PersonalInfo {
                first_name: "Ada".to_string(),
                ..Default::default()
            }),
            skills: Some(vec![]),
            ..Default::default()
        };
        let patch = ResumeDraft {
            skills: Some(vec![Skill {
                id: "s1".to_string(),
                name: "Rust".to_string(),
                level: SkillLevel::Expert,
                category: SkillCategory::Technical,
            }]),
            ..Default::default()
        };

        let merged = existing.merge(patch);
        assert_eq!(merged.personal_info.unwrap().first_name, "Ada");
        assert_eq!(merged.skills.unwrap().len(), 1);
        assert!(merged.projects.is_none());
    }

    #[test]
    fn test_deserialize_camel_case_blob_with_missing_fields() {
        let draft: ResumeDraft = serde_json::from_value(json!({
            "personalInfo": { "firstName": "Ada", "lastName": "Lovelace" },
            "workExperience": [{ "jobTitle": "Analyst", "isCurrentRole": true }]
        }))
        .unwrap();

        let info = draft.personal_info.unwrap();
        assert_eq!(info.last_name, "Lovelace");
        assert_eq!(info.email, "");
        assert!(info.linked_in.is_none());

        let jobs = draft.work_experience.unwrap();
        assert!(jobs[0].is_current_role);
        assert!(!jobs[0].id.is_empty(), "missing id should be generated");
        assert!(jobs[0].achievements.is_empty());
    }

    #[test]
    fn test_skill_enums_use_display_names() {
        let skill: Skill = serde_json::from_value(json!({
            "id": "x", "name": "Spanish", "level": "Advanced", "category": "Language"
        }))
        .unwrap();
        assert_eq!(skill.level.to_string(), "Advanced");
        assert_eq!(skill.category.to_string(), "Language");
        assert!(SkillLevel::Beginner < SkillLevel::Expert);
    }

    #[test]
    fn test_skill_missing_level_or_category_keeps_the_record() {
        let draft: ResumeDraft = serde_json::from_value(json!({
            "personalInfo": { "firstName": "Ada", "lastName": "Lovelace" },
            "skills": [
                { "name": "Rust", "category": "Technical" },
                { "name": "Mentoring", "level": "Advanced" }
            ]
        }))
        .unwrap();

        assert_eq!(draft.personal_info.unwrap().first_name, "Ada");
        let skills = draft.skills.unwrap();
        assert_eq!(skills[0].level, SkillLevel::Beginner);
        assert_eq!(skills[0].category, SkillCategory::Technical);
        assert_eq!(skills[1].category, SkillCategory::Other);
    }

    #[test]
    fn test_default_draft_serializes_to_empty_object() {
        let value = serde_json::to_value(ResumeDraft::default()).unwrap();
        assert_eq!(value, json!({}));
        assert!(ResumeDraft::default().is_empty());
    }
}
