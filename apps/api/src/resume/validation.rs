//! Field-level rules every section must pass before it reaches the store.
//!
//! Validation collects every failure instead of stopping at the first one, so the form
//! can highlight all fields at once. Normalization (phone formatting, blank optional
//! links → absent, blank list items dropped) runs before the rules are checked.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::resume::models::{Education, PersonalInfo, Project, ResumeDraft, Skill, WorkExperience};

const SUMMARY_LEN: (usize, usize) = (50, 500);
const ROLE_DESCRIPTION_LEN: (usize, usize) = (20, 1000);
const PROJECT_DESCRIPTION_LEN: (usize, usize) = (20, 500);
const MIN_PHONE_DIGITS: usize = 10;
const MIN_ZIP_LEN: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    /// Dotted path of the offending field, e.g. `workExperience[1].description`.
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        f.write_str(&joined.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));
static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://[^\s/$.?#][^\s]*$").expect("valid url regex"));

// ────────────────────────────────────────────────────────────────────────────
// Normalization
// ────────────────────────────────────────────────────────────────────────────

/// Formats a phone number for display: `(555) 123-4567`, or `+1 (555) 123-4567` for
/// numbers longer than ten digits. Non-digits are discarded first.
pub fn format_phone_number(value: &str) -> String {
    let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
    let n = digits.len();
    if n <= 3 {
        digits
    } else if n <= 6 {
        format!("({}) {}", &digits[..3], &digits[3..])
    } else if n <= 10 {
        format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
    } else {
        format!(
            "+{} ({}) {}-{}",
            &digits[..1],
            &digits[1..4],
            &digits[4..7],
            &digits[7..n.min(11)]
        )
    }
}

fn blank_to_none(value: &mut Option<String>) {
    if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
        *value = None;
    }
}

fn drop_blank_items(items: &mut Vec<String>) {
    items.retain(|item| !item.trim().is_empty());
}

/// Applies input normalization in place.
pub fn normalize_draft(draft: &mut ResumeDraft) {
    if let Some(info) = draft.personal_info.as_mut() {
        info.phone = format_phone_number(&info.phone);
        blank_to_none(&mut info.linked_in);
        blank_to_none(&mut info.website);
    }
    for job in draft.work_experience.iter_mut().flatten() {
        blank_to_none(&mut job.end_date);
        drop_blank_items(&mut job.achievements);
    }
    for edu in draft.education.iter_mut().flatten() {
        blank_to_none(&mut edu.graduation_date);
        blank_to_none(&mut edu.gpa);
        drop_blank_items(&mut edu.relevant_courses);
    }
    for project in draft.projects.iter_mut().flatten() {
        blank_to_none(&mut project.url);
        blank_to_none(&mut project.github);
        blank_to_none(&mut project.end_date);
        drop_blank_items(&mut project.technologies);
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Rules
// ────────────────────────────────────────────────────────────────────────────

/// Validates every section present in the draft.
pub fn validate_draft(draft: &ResumeDraft) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if let Some(info) = &draft.personal_info {
        validate_personal_info(info, &mut errors);
    }
    for (i, job) in draft.work_experience.iter().flatten().enumerate() {
        validate_experience(&format!("workExperience[{i}]"), job, &mut errors);
    }
    for (i, edu) in draft.education.iter().flatten().enumerate() {
        validate_education(&format!("education[{i}]"), edu, &mut errors);
    }
    for (i, skill) in draft.skills.iter().flatten().enumerate() {
        validate_skill(&format!("skills[{i}]"), skill, &mut errors);
    }
    for (i, project) in draft.projects.iter().flatten().enumerate() {
        validate_project(&format!("projects[{i}]"), project, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn require(errors: &mut ValidationErrors, field: String, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.push(field, message);
    }
}

fn require_len(
    errors: &mut ValidationErrors,
    field: String,
    value: &str,
    (min, max): (usize, usize),
    what: &str,
) {
    let len = value.chars().count();
    if len < min {
        errors.push(
            field,
            format!("Tell us a bit more about {what} (at least {min} characters)"),
        );
    } else if len > max {
        errors.push(
            field,
            format!("Keep {what} focused and impactful (under {max} characters)"),
        );
    }
}

fn optional_url(errors: &mut ValidationErrors, field: String, value: Option<&str>, label: &str) {
    if let Some(url) = value {
        if !URL_RE.is_match(url) {
            errors.push(field, format!("{label} should start with https://"));
        }
    }
}

fn validate_personal_info(info: &PersonalInfo, errors: &mut ValidationErrors) {
    let at = |name: &str| format!("personalInfo.{name}");

    require(errors, at("firstName"), &info.first_name, "Let's add your first name to get started!");
    require(errors, at("lastName"), &info.last_name, "Let's complete your name - what's your last name?");
    if !EMAIL_RE.is_match(&info.email) {
        errors.push(at("email"), "Email should look like name@example.com");
    }
    let digits = info.phone.chars().filter(|c| c.is_ascii_digit()).count();
    if digits < MIN_PHONE_DIGITS {
        errors.push(at("phone"), "Make sure your phone number is complete so employers can reach you");
    }
    require(errors, at("address"), &info.address, "Let's add your address");
    require(errors, at("city"), &info.city, "Which city do you call home?");
    require(errors, at("state"), &info.state, "Let's include your state to complete your location");
    if info.zip_code.trim().chars().count() < MIN_ZIP_LEN {
        errors.push(at("zipCode"), "Zip code should have at least 5 characters");
    }
    optional_url(errors, at("linkedIn"), info.linked_in.as_deref(), "LinkedIn URL");
    optional_url(errors, at("website"), info.website.as_deref(), "Website URL");
    require_len(errors, at("summary"), &info.summary, SUMMARY_LEN, "your summary");
}

fn validate_experience(path: &str, job: &WorkExperience, errors: &mut ValidationErrors) {
    let at = |name: &str| format!("{path}.{name}");

    require(errors, at("jobTitle"), &job.job_title, "What was your role called?");
    require(errors, at("company"), &job.company, "Which company was lucky to have you?");
    require(errors, at("location"), &job.location, "Where did this experience take place?");
    require(errors, at("startDate"), &job.start_date, "When did you start this role?");
    require_len(errors, at("description"), &job.description, ROLE_DESCRIPTION_LEN, "the impact you made");
    if job.achievements.is_empty() {
        errors.push(at("achievements"), "Share at least one achievement");
    }
}

fn validate_education(path: &str, edu: &Education, errors: &mut ValidationErrors) {
    let at = |name: &str| format!("{path}.{name}");

    require(errors, at("degree"), &edu.degree, "What degree did you earn?");
    require(errors, at("institution"), &edu.institution, "Which institution did you attend?");
    require(errors, at("location"), &edu.location, "Where did you study?");
}

fn validate_skill(path: &str, skill: &Skill, errors: &mut ValidationErrors) {
    require(errors, format!("{path}.name"), &skill.name, "What's this skill called?");
}

fn validate_project(path: &str, project: &Project, errors: &mut ValidationErrors) {
    let at = |name: &str| format!("{path}.{name}");

    require(errors, at("name"), &project.name, "What's the name of this project?");
    require_len(errors, at("description"), &project.description, PROJECT_DESCRIPTION_LEN, "this project");
    if project.technologies.is_empty() {
        errors.push(at("technologies"), "Which technologies did you use for this project?");
    }
    optional_url(errors, at("url"), project.url.as_deref(), "Project URL");
    optional_url(errors, at("github"), project.github.as_deref(), "GitHub URL");
    require(errors, at("startDate"), &project.start_date, "When did you start building this?");
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
