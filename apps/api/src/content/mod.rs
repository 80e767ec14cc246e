//! Static motivational content: affirmations, section messages, badges, and the
//! rotating message shown after a successful export.

pub mod badges;
pub mod handlers;

use chrono::{Datelike, NaiveDate};

use crate::progress::models::Section;

pub use badges::{find_badge, AchievementBadge, BADGES};

pub const DAILY_AFFIRMATIONS: &[&str] = &[
    "Your experience matters and deserves to be shared",
    "Every step in your career journey has value",
    "You have unique talents that employers need",
    "Your story is worth telling - and worth hearing",
    "You're building something amazing about yourself",
    "Your achievements deserve to be celebrated",
    "The right opportunity is looking for someone like you",
    "Your professional growth is inspiring",
    "You bring value wherever you go",
    "Your skills and experience make you stand out",
    "Every challenge has made you stronger",
    "You're exactly where you need to be in your journey",
    "Your potential is limitless",
    "You have everything it takes to succeed",
    "Your unique perspective is your superpower",
];

pub const EXPORT_SUCCESS_MESSAGES: &[&str] = &[
    "Congratulations! You've created something amazing! Your resume showcases your incredible journey and achievements.",
    "What a fantastic accomplishment! Your resume beautifully captures your skills, experience, and unique value.",
    "Incredible work! You've transformed your experiences into a compelling professional narrative.",
    "Outstanding! You've successfully created a resume that highlights your strengths and achievements.",
    "Brilliant! Your dedication to building this resume shows your commitment to your career growth.",
];

/// Affirmation for the given day; stable for a whole calendar day.
pub fn affirmation_for(date: NaiveDate) -> &'static str {
    let index = date.ordinal() as usize % DAILY_AFFIRMATIONS.len();
    DAILY_AFFIRMATIONS[index]
}

/// Encouragement shown while the user works on `section`.
pub fn motivational_message(section: Option<Section>) -> &'static str {
    match section {
        Some(Section::PersonalInfo) => {
            "You're sharing your professional identity with the world - how exciting!"
        }
        Some(Section::WorkExperience) => {
            "Every role has taught you something valuable - let's showcase that growth!"
        }
        Some(Section::Education) => {
            "Your learning journey shaped who you are today - that's powerful!"
        }
        Some(Section::Skills) => {
            "Look at all the amazing abilities you've developed - you're incredible!"
        }
        Some(Section::Projects) => {
            "Your creativity and problem-solving skills shine through your projects!"
        }
        None => "You're doing great! Keep building your amazing resume!",
    }
}

/// Celebration shown when `section` is completed.
pub fn completion_message(section: Section) -> &'static str {
    match section {
        Section::PersonalInfo => {
            "Amazing! You've beautifully introduced yourself to potential employers!"
        }
        Section::WorkExperience => {
            "Fantastic! You've shown the incredible value you bring to any team!"
        }
        Section::Education => {
            "Wonderful! Your educational foundation shows your commitment to growth!"
        }
        Section::Skills => "Impressive! You've highlighted the diverse talents that make you unique!",
        Section::Projects => "Outstanding! Your projects demonstrate your passion and capability!",
    }
}

/// Message attached to a successful export, rotating with the number of completed sections.
pub fn export_success_message(completed_sections: usize) -> &'static str {
    EXPORT_SUCCESS_MESSAGES[completed_sections % EXPORT_SUCCESS_MESSAGES.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_message_rotates_by_completed_count() {
        assert_eq!(export_success_message(0), EXPORT_SUCCESS_MESSAGES[0]);
        assert_eq!(export_success_message(2), EXPORT_SUCCESS_MESSAGES[2]);
        assert_eq!(export_success_message(5), EXPORT_SUCCESS_MESSAGES[0]);
        assert_eq!(export_success_message(7), EXPORT_SUCCESS_MESSAGES[2]);
    }

    #[test]
    fn test_affirmation_is_stable_per_day_and_changes_next_day() {
        let day = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        let next = day.succ_opt().unwrap();
        assert_eq!(affirmation_for(day), affirmation_for(day));
        assert_ne!(affirmation_for(day), affirmation_for(next));
    }

    #[test]
    fn test_affirmation_index_uses_day_of_year() {
        // Jan 1 is ordinal 1.
        let jan_first = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        assert_eq!(affirmation_for(jan_first), DAILY_AFFIRMATIONS[1]);
    }

    #[test]
    fn test_motivational_message_falls_back_without_section() {
        assert!(motivational_message(None).contains("doing great"));
        assert!(motivational_message(Some(Section::Skills)).contains("abilities"));
    }

    #[test]
    fn test_every_section_has_a_completion_message() {
        for section in Section::ALL {
            assert!(!completion_message(section).is_empty());
        }
    }
}
