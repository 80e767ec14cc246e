//! Résumé composer. Flows a record onto pages in the fixed section order:
//! identity, contact, summary, experience, education, skills, projects.
//!
//! The composer never validates. Absent or blank fields drop their line entirely;
//! empty sections drop their header.

use crate::layout::flow::{Document, PageFlow, Rgb, TextStyle};
use crate::layout::font_metrics::{Face, PageConfig};
use crate::resume::models::{
    Education, PersonalInfo, Project, ResumeDraft, Skill, SkillCategory, WorkExperience,
};

const HEADING: Rgb = Rgb(33, 37, 41);
const MUTED: Rgb = Rgb(108, 117, 125);
const BODY: Rgb = Rgb(73, 80, 87);

const NAME_PT: f32 = 24.0;
const CONTACT_PT: f32 = 12.0;
const SECTION_PT: f32 = 16.0;
const ENTRY_PT: f32 = 14.0;
const GROUP_PT: f32 = 12.0;
const BODY_PT: f32 = 11.0;

// Vertical advances, millimetres.
const NAME_ADVANCE: f32 = 15.0;
const CONTACT_ADVANCE: f32 = 6.0;
const SECTION_ADVANCE: f32 = 8.0;
const ENTRY_ADVANCE: f32 = 6.0;
const LINE_ADVANCE: f32 = 5.0;
const BLOCK_GAP: f32 = 5.0;
const LIST_GAP: f32 = 2.0;
const ENTRY_GAP: f32 = 8.0;
const GROUP_GAP: f32 = 3.0;

/// Indent of bullets and skill lines relative to the margin.
const INDENT: f32 = 5.0;

const PRESENT: &str = "Present";

struct Styles {
    name: TextStyle,
    contact: TextStyle,
    section: TextStyle,
    entry: TextStyle,
    group: TextStyle,
    meta: TextStyle,
    body: TextStyle,
}

impl Styles {
    fn for_config(config: &PageConfig) -> Self {
        let regular = Face::regular(config.font);
        let bold = Face::bold(config.font);
        let style = |face, size_pt, color| TextStyle {
            face,
            size_pt,
            color,
        };
        Styles {
            name: style(bold, NAME_PT, HEADING),
            contact: style(regular, CONTACT_PT, MUTED),
            section: style(bold, SECTION_PT, HEADING),
            entry: style(bold, ENTRY_PT, HEADING),
            group: style(bold, GROUP_PT, HEADING),
            meta: style(regular, BODY_PT, MUTED),
            body: style(regular, BODY_PT, BODY),
        }
    }
}

/// Lays out `draft` on as many pages as it needs.
pub fn compose_resume(draft: &ResumeDraft, config: &PageConfig) -> Document {
    let styles = Styles::for_config(config);
    let mut flow = PageFlow::new(config.clone());

    if let Some(info) = &draft.personal_info {
        compose_identity(&mut flow, &styles, info);
    }
    if let Some(jobs) = draft.work_experience.as_deref().filter(|v| !v.is_empty()) {
        section_header(&mut flow, &styles, "Work Experience");
        for job in jobs {
            compose_experience(&mut flow, &styles, job);
        }
    }
    if let Some(schools) = draft.education.as_deref().filter(|v| !v.is_empty()) {
        section_header(&mut flow, &styles, "Education");
        for edu in schools {
            compose_education(&mut flow, &styles, edu);
        }
    }
    if let Some(skills) = draft.skills.as_deref().filter(|v| !v.is_empty()) {
        section_header(&mut flow, &styles, "Skills");
        compose_skills(&mut flow, &styles, skills);
    }
    if let Some(projects) = draft.projects.as_deref().filter(|v| !v.is_empty()) {
        section_header(&mut flow, &styles, "Projects");
        for project in projects {
            compose_project(&mut flow, &styles, project);
        }
    }

    flow.finish()
}

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

fn compose_identity(flow: &mut PageFlow, styles: &Styles, info: &PersonalInfo) {
    let full_name = join_present(&[&info.first_name, &info.last_name], " ");
    if !full_name.is_empty() {
        flow.line(0.0, &full_name, styles.name, NAME_ADVANCE);
    }

    for contact in contact_lines(info) {
        flow.paragraph(0.0, &contact, styles.contact, CONTACT_ADVANCE);
    }
    flow.advance(BLOCK_GAP);

    if !info.summary.trim().is_empty() {
        section_header(flow, styles, "Professional Summary");
        flow.paragraph(0.0, &info.summary, styles.body, LINE_ADVANCE);
        flow.advance(BLOCK_GAP);
    }
}

fn compose_experience(flow: &mut PageFlow, styles: &Styles, job: &WorkExperience) {
    let title = join_present(&[&job.job_title, &job.company], " at ");
    entry_heading(flow, styles, &title);

    let end = if job.is_current_role {
        PRESENT
    } else {
        present_or(job.end_date.as_deref())
    };
    let dates = date_range(&job.start_date, end);
    let meta = join_present(&[&dates, &job.location], " | ");
    if !meta.is_empty() {
        flow.paragraph(0.0, &meta, styles.meta, ENTRY_ADVANCE);
    }

    flow.paragraph(0.0, &job.description, styles.body, LINE_ADVANCE);

    let achievements: Vec<&String> = job
        .achievements
        .iter()
        .filter(|a| !a.trim().is_empty())
        .collect();
    if !achievements.is_empty() {
        flow.advance(LIST_GAP);
        for achievement in achievements {
            flow.hanging(INDENT, "•", achievement, styles.body, LINE_ADVANCE);
        }
    }
    flow.advance(ENTRY_GAP);
}

fn compose_education(flow: &mut PageFlow, styles: &Styles, edu: &Education) {
    let title = join_present(&[&edu.degree, &edu.institution], " - ");
    entry_heading(flow, styles, &title);

    let gpa = edu
        .gpa
        .as_deref()
        .filter(|g| !g.trim().is_empty())
        .map(|g| format!("GPA: {g}"))
        .unwrap_or_default();
    let details = join_present(
        &[
            &edu.location,
            edu.graduation_date.as_deref().unwrap_or_default(),
            &gpa,
        ],
        " | ",
    );
    if !details.is_empty() {
        flow.paragraph(0.0, &details, styles.meta, ENTRY_ADVANCE);
    }

    let courses = join_items(&edu.relevant_courses);
    if !courses.is_empty() {
        flow.paragraph(
            0.0,
            &format!("Relevant Courses: {courses}"),
            styles.body,
            LINE_ADVANCE,
        );
    }
    flow.advance(ENTRY_GAP);
}

fn compose_skills(flow: &mut PageFlow, styles: &Styles, skills: &[Skill]) {
    for (category, members) in group_skills(skills) {
        flow.keep_together(ENTRY_ADVANCE);
        flow.line(0.0, &format!("{category}:"), styles.group, ENTRY_ADVANCE);
        flow.paragraph(INDENT, &members.join(", "), styles.body, LINE_ADVANCE);
        flow.advance(GROUP_GAP);
    }
}

fn compose_project(flow: &mut PageFlow, styles: &Styles, project: &Project) {
    entry_heading(flow, styles, project.name.trim());

    let dates = date_range(&project.start_date, present_or(project.end_date.as_deref()));
    if !dates.is_empty() {
        flow.paragraph(0.0, &dates, styles.meta, ENTRY_ADVANCE);
    }

    flow.paragraph(0.0, &project.description, styles.body, LINE_ADVANCE);

    let technologies = join_items(&project.technologies);
    if !technologies.is_empty() {
        flow.advance(LIST_GAP);
        flow.paragraph(
            0.0,
            &format!("Technologies: {technologies}"),
            styles.body,
            LINE_ADVANCE,
        );
    }

    let links = join_present(
        &[
            project.url.as_deref().unwrap_or_default(),
            project.github.as_deref().unwrap_or_default(),
        ],
        ", ",
    );
    if !links.is_empty() {
        flow.paragraph(0.0, &format!("Links: {links}"), styles.body, LINE_ADVANCE);
    }
    flow.advance(ENTRY_GAP);
}

// ────────────────────────────────────────────────────────────────────────────
// Internal helpers
// ────────────────────────────────────────────────────────────────────────────

fn section_header(flow: &mut PageFlow, styles: &Styles, title: &str) {
    // Header plus the entry heading below it stay on one page.
    flow.keep_together(SECTION_ADVANCE + ENTRY_ADVANCE);
    flow.line(0.0, title, styles.section, SECTION_ADVANCE);
}

fn entry_heading(flow: &mut PageFlow, styles: &Styles, title: &str) {
    if title.is_empty() {
        return;
    }
    flow.keep_together(ENTRY_ADVANCE);
    flow.paragraph(0.0, title, styles.entry, ENTRY_ADVANCE);
}

/// Contact lines in display order, each only when non-blank.
pub(crate) fn contact_lines(info: &PersonalInfo) -> Vec<String> {
    let location = join_present(&[&info.city, &info.state], ", ");
    [
        info.email.as_str(),
        info.phone.as_str(),
        location.as_str(),
        info.linked_in.as_deref().unwrap_or_default(),
        info.website.as_deref().unwrap_or_default(),
    ]
    .into_iter()
    .map(str::trim)
    .filter(|s| !s.is_empty())
    .map(str::to_string)
    .collect()
}

/// Groups skills by category in first-seen category order; each member renders as
/// `name (Level)`.
pub(crate) fn group_skills(skills: &[Skill]) -> Vec<(SkillCategory, Vec<String>)> {
    skills
        .iter()
        .filter(|s| !s.name.trim().is_empty())
        .fold(Vec::new(), |mut groups, skill| {
            let label = format!("{} ({})", skill.name.trim(), skill.level);
            match groups
                .iter_mut()
                .find(|(category, _): &&mut (SkillCategory, Vec<String>)| *category == skill.category)
            {
                Some((_, members)) => members.push(label),
                None => groups.push((skill.category, vec![label])),
            }
            groups
        })
}

fn present_or(end: Option<&str>) -> &str {
    end.map(str::trim).filter(|e| !e.is_empty()).unwrap_or(PRESENT)
}

fn date_range(start: &str, end: &str) -> String {
    let start = start.trim();
    if start.is_empty() {
        String::new()
    } else {
        format!("{start} - {end}")
    }
}

/// Joins the non-blank parts with `sep`, trimming each.
fn join_present(parts: &[&str], sep: &str) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(sep)
}

fn join_items(items: &[String]) -> String {
    let parts: Vec<&str> = items.iter().map(String::as_str).collect();
    join_present(&parts, ", ")
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::font_metrics::{default_page_config, get_metrics, FontFamily};
    use crate::resume::models::SkillLevel;

    fn config() -> PageConfig {
        default_page_config(FontFamily::Helvetica)
    }

    fn info() -> PersonalInfo {
        PersonalInfo {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "(555) 123-4567".to_string(),
            address: "12 St James's Square".to_string(),
            city: "London".to_string(),
            state: String::new(),
            zip_code: "SW1Y4".to_string(),
            linked_in: None,
            website: Some("https://ada.dev".to_string()),
            summary: "Mathematician and writer, chiefly known for work on the Analytical \
                      Engine and for publishing the first algorithm intended for it."
                .to_string(),
        }
    }

    fn job(title: &str) -> WorkExperience {
        WorkExperience {
            id: title.to_string(),
            job_title: title.to_string(),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            start_date: "2020-01".to_string(),
            end_date: Some("2022-06".to_string()),
            is_current_role: false,
            description: "Designed and shipped the billing pipeline end to end.".to_string(),
            achievements: vec!["Cut invoice latency by 90%".to_string()],
        }
    }

    fn skill(name: &str, level: SkillLevel, category: SkillCategory) -> Skill {
        Skill {
            id: name.to_string(),
            name: name.to_string(),
            level,
            category,
        }
    }

    fn lines(doc: &Document) -> Vec<String> {
        doc.lines().map(str::to_string).collect()
    }

    fn draft_with_info() -> ResumeDraft {
        ResumeDraft {
            personal_info: Some(info()),
            ..Default::default()
        }
    }

    #[test]
    fn test_identity_and_contact_lines_in_fixed_order() {
        let doc = compose_resume(&draft_with_info(), &config());
        let l = lines(&doc);
        assert_eq!(l[0], "Ada Lovelace");
        assert_eq!(l[1], "ada@example.com");
        assert_eq!(l[2], "(555) 123-4567");
        assert_eq!(l[3], "London");
        assert_eq!(l[4], "https://ada.dev");
        assert_eq!(l[5], "Professional Summary");
    }

    #[test]
    fn test_city_state_join_drops_empty_parts() {
        let mut info = info();
        info.city = String::new();
        info.state = "CA".to_string();
        assert!(contact_lines(&info).contains(&"CA".to_string()));

        info.city = "Oakland".to_string();
        assert!(contact_lines(&info).contains(&"Oakland, CA".to_string()));

        info.city = String::new();
        info.state = String::new();
        assert!(!contact_lines(&info).iter().any(|l| l.contains(',')));
    }

    #[test]
    fn test_empty_sections_are_omitted() {
        let mut draft = draft_with_info();
        draft.work_experience = Some(vec![]);
        draft.skills = Some(vec![]);
        let l = lines(&compose_resume(&draft, &config()));
        assert!(!l.iter().any(|x| x == "Work Experience" || x == "Skills"));
        assert!(!l.iter().any(|x| x == "Education" || x == "Projects"));
    }

    #[test]
    fn test_blank_summary_omits_header() {
        let mut draft = draft_with_info();
        if let Some(info) = draft.personal_info.as_mut() {
            info.summary = "   ".to_string();
        }
        let l = lines(&compose_resume(&draft, &config()));
        assert!(!l.iter().any(|x| x == "Professional Summary"));
    }

    #[test]
    fn test_experience_order_and_lines() {
        let mut draft = draft_with_info();
        let mut current = job("Staff Engineer");
        current.is_current_role = true;
        draft.work_experience = Some(vec![job("Engineer"), current, job("Intern")]);

        let l = lines(&compose_resume(&draft, &config()));
        let pos = |needle: &str| l.iter().position(|x| x == needle).unwrap();
        assert!(pos("Engineer at Acme") < pos("Staff Engineer at Acme"));
        assert!(pos("Staff Engineer at Acme") < pos("Intern at Acme"));
        assert!(l.contains(&"2020-01 - 2022-06 | Remote".to_string()));
        assert!(l.contains(&"2020-01 - Present | Remote".to_string()));
        assert!(l.contains(&"• Cut invoice latency by 90%".to_string()));
    }

    #[test]
    fn test_missing_end_date_renders_present() {
        let mut draft = draft_with_info();
        let mut past = job("Engineer");
        past.end_date = None;
        draft.work_experience = Some(vec![past]);
        let l = lines(&compose_resume(&draft, &config()));
        assert!(l.contains(&"2020-01 - Present | Remote".to_string()));
    }

    #[test]
    fn test_achievements_are_indented() {
        let mut draft = draft_with_info();
        draft.work_experience = Some(vec![job("Engineer")]);
        let doc = compose_resume(&draft, &config());
        let bullet = doc.pages[0]
            .blocks
            .iter()
            .find(|b| b.text.starts_with('•'))
            .unwrap();
        assert_eq!(bullet.x_mm, 25.0);
    }

    #[test]
    fn test_education_details_omit_absent_parts() {
        let mut draft = draft_with_info();
        draft.education = Some(vec![
            Education {
                id: "e1".to_string(),
                degree: "BSc Mathematics".to_string(),
                institution: "University of London".to_string(),
                location: "London".to_string(),
                graduation_date: Some("1835".to_string()),
                gpa: Some("4.0".to_string()),
                relevant_courses: vec!["Calculus".to_string(), "Logic".to_string()],
            },
            Education {
                id: "e2".to_string(),
                degree: "Certificate".to_string(),
                institution: "Royal Society".to_string(),
                location: "Cambridge".to_string(),
                graduation_date: None,
                gpa: None,
                relevant_courses: vec![],
            },
        ]);
        let l = lines(&compose_resume(&draft, &config()));
        assert!(l.contains(&"BSc Mathematics - University of London".to_string()));
        assert!(l.contains(&"London | 1835 | GPA: 4.0".to_string()));
        assert!(l.contains(&"Relevant Courses: Calculus, Logic".to_string()));
        assert!(l.contains(&"Cambridge".to_string()));
        assert_eq!(l.iter().filter(|x| x.starts_with("Relevant Courses")).count(), 1);
        assert!(!l.iter().any(|x| x.contains("GPA: ") && x.starts_with("Cambridge")));
    }

    #[test]
    fn test_skill_groups_in_first_seen_order() {
        let skills = vec![
            skill("Rust", SkillLevel::Expert, SkillCategory::Technical),
            skill("Mentoring", SkillLevel::Advanced, SkillCategory::Soft),
            skill("SQL", SkillLevel::Intermediate, SkillCategory::Technical),
        ];
        let groups = group_skills(&skills);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, SkillCategory::Technical);
        assert_eq!(groups[0].1, vec!["Rust (Expert)", "SQL (Intermediate)"]);
        assert_eq!(groups[1].0, SkillCategory::Soft);

        let mut draft = draft_with_info();
        draft.skills = Some(skills);
        let l = lines(&compose_resume(&draft, &config()));
        let tech = l.iter().position(|x| x == "Technical:").unwrap();
        let soft = l.iter().position(|x| x == "Soft:").unwrap();
        assert!(tech < soft);
        assert_eq!(l[tech + 1], "Rust (Expert), SQL (Intermediate)");
    }

    #[test]
    fn test_project_lines() {
        let mut draft = draft_with_info();
        draft.projects = Some(vec![
            Project {
                id: "p1".to_string(),
                name: "Difference Engine".to_string(),
                description: "A mechanical calculator for polynomial tables.".to_string(),
                technologies: vec!["Brass".to_string(), "Gears".to_string()],
                url: None,
                github: Some("https://github.com/ada/engine".to_string()),
                start_date: "1822".to_string(),
                end_date: None,
            },
            Project {
                id: "p2".to_string(),
                name: "Notes".to_string(),
                description: "Annotated translation of Menabrea's memoir.".to_string(),
                technologies: vec![],
                url: None,
                github: None,
                start_date: "1842".to_string(),
                end_date: Some("1843".to_string()),
            },
        ]);
        let l = lines(&compose_resume(&draft, &config()));
        assert!(l.contains(&"1822 - Present".to_string()));
        assert!(l.contains(&"1842 - 1843".to_string()));
        assert!(l.contains(&"Technologies: Brass, Gears".to_string()));
        assert!(l.contains(&"Links: https://github.com/ada/engine".to_string()));
        assert_eq!(l.iter().filter(|x| x.starts_with("Links:")).count(), 1);
        assert_eq!(l.iter().filter(|x| x.starts_with("Technologies:")).count(), 1);
    }

    #[test]
    fn test_long_summary_wraps_within_content_width() {
        let mut draft = draft_with_info();
        if let Some(info) = draft.personal_info.as_mut() {
            info.summary = "Builds reliable distributed systems and mentors engineers. ".repeat(8);
        }
        let config = config();
        let doc = compose_resume(&draft, &config);
        let body: Vec<_> = doc.pages[0]
            .blocks
            .iter()
            .filter(|b| b.style.size_pt == BODY_PT)
            .collect();
        assert!(body.len() > 1);
        let metrics = get_metrics(&body[0].style.face);
        for block in body {
            assert!(metrics.width_mm(&block.text, BODY_PT) <= config.content_width_mm());
        }
    }

    #[test]
    fn test_many_entries_flow_onto_more_pages() {
        let mut draft = draft_with_info();
        draft.work_experience = Some((0..25).map(|i| job(&format!("Role {i}"))).collect());
        let config = config();
        let doc = compose_resume(&draft, &config);
        assert!(doc.pages.len() > 1);
        for page in &doc.pages {
            for block in &page.blocks {
                assert!(block.y_mm <= config.bottom_limit_mm());
            }
            // A page never ends on a heading.
            let last = page.blocks.last().unwrap();
            assert!(last.style.size_pt < ENTRY_PT, "page ends on {:?}", last.text);
        }
        // Order survives pagination.
        let l = lines(&doc);
        let first = l.iter().position(|x| x == "Role 0 at Acme").unwrap();
        let last = l.iter().position(|x| x == "Role 24 at Acme").unwrap();
        assert!(first < last);
    }

    #[test]
    fn test_compose_is_deterministic() {
        let mut draft = draft_with_info();
        draft.work_experience = Some(vec![job("Engineer")]);
        assert_eq!(compose_resume(&draft, &config()), compose_resume(&draft, &config()));
    }
}
