use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AchievementBadge {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const BADGES: &[AchievementBadge] = &[
    AchievementBadge {
        id: "first-step",
        title: "First Step",
        description: "Started your resume journey!",
        icon: "🌱",
    },
    AchievementBadge {
        id: "personal-complete",
        title: "Personal Touch",
        description: "Completed personal information!",
        icon: "✨",
    },
    AchievementBadge {
        id: "experience-complete",
        title: "Experience Expert",
        description: "Showcased your work experience!",
        icon: "🏆",
    },
    AchievementBadge {
        id: "education-complete",
        title: "Learning Legend",
        description: "Highlighted your education!",
        icon: "🎓",
    },
    AchievementBadge {
        id: "skills-complete",
        title: "Skill Showcase",
        description: "Displayed your amazing skills!",
        icon: "🌟",
    },
    AchievementBadge {
        id: "projects-complete",
        title: "Project Pro",
        description: "Featured your creative projects!",
        icon: "🚀",
    },
    AchievementBadge {
        id: "halfway-hero",
        title: "Halfway Hero",
        description: "You're halfway to an amazing resume!",
        icon: "🎯",
    },
    AchievementBadge {
        id: "resume-complete",
        title: "Resume Rockstar",
        description: "Completed your entire resume!",
        icon: "👑",
    },
    AchievementBadge {
        id: "persistent-builder",
        title: "Persistent Builder",
        description: "Worked on your resume for 30+ minutes!",
        icon: "💪",
    },
    AchievementBadge {
        id: "detail-oriented",
        title: "Detail Oriented",
        description: "Added extra details to make it shine!",
        icon: "💎",
    },
];

pub fn find_badge(id: &str) -> Option<&'static AchievementBadge> {
    BADGES.iter().find(|badge| badge.id == id)
}
