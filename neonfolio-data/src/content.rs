use crate::color::{Accent, Rgb, palette};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Identity of the page owner, shared by the hero, about, contact and footer.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Profile {
    pub name: &'static str,
    pub initials: &'static str,
    pub user: &'static str,
    pub host: &'static str,
    pub role: &'static str,
    pub location: &'static str,
    pub availability: &'static str,
    pub github: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Farooq Omar",
    initials: "FO",
    user: "farooq",
    host: "dev",
    role: "Software Engineer",
    location: "Istanbul, Turkey",
    availability: "Open to internships / freelance / part-time",
    github: "https://github.com/faroqomar",
};

/// An entry of the top navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct NavItem {
    pub label: &'static str,
    /// DOM id of the target section, without `#`.
    pub section: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Projects", section: "projects" },
    NavItem { label: "About", section: "about" },
    NavItem { label: "Skills", section: "skills" },
    NavItem { label: "Currently", section: "currently" },
    NavItem { label: "Contact", section: "contact" },
];

/// How a scripted hero-terminal line is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum HeroLineKind {
    /// A shell command, typed out character by character after the prompt.
    Input,
    /// Block-letter banner.
    Ascii,
    /// Role badges.
    Info,
    /// Plain command output.
    Output,
}

/// One step of the hero terminal script.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct HeroLine {
    pub kind: HeroLineKind,
    pub content: &'static str,
    /// Pause before the line starts, in milliseconds.
    pub delay_ms: u32,
}

pub const ASCII_BANNER: &str = "
███████╗ █████╗ ██████╗  ██████╗  ██████╗  ██████╗
██╔════╝██╔══██╗██╔══██╗██╔═══██╗██╔═══██╗██╔═══██╗
█████╗  ███████║██████╔╝██║   ██║██║   ██║██║   ██║
██╔══╝  ██╔══██║██╔══██╗██║   ██║██║   ██║██║   ██║
██║     ██║  ██║██║  ██║╚██████╔╝╚██████╔╝╚██████╔╝
╚═╝     ╚═╝  ╚═╝╚═╝  ╚═╝ ╚═════╝  ╚═════╝  ╚═════╝
";

pub const HERO_SCRIPT: &[HeroLine] = &[
    HeroLine { kind: HeroLineKind::Input, content: "whoami", delay_ms: 500 },
    HeroLine { kind: HeroLineKind::Ascii, content: ASCII_BANNER, delay_ms: 100 },
    HeroLine {
        kind: HeroLineKind::Info,
        content: "Software Engineer | AI Enthusiast",
        delay_ms: 50,
    },
    HeroLine { kind: HeroLineKind::Input, content: "cat status.txt", delay_ms: 800 },
    HeroLine {
        kind: HeroLineKind::Output,
        content: "> I build real products end-to-end: Flutter frontends, Supabase/Postgres backends, and the architecture to scale.",
        delay_ms: 50,
    },
    HeroLine { kind: HeroLineKind::Input, content: "ls -la", delay_ms: 600 },
];

/// A file-listing entry revealed once the hero script has finished.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct HeroLink {
    pub label: &'static str,
    pub section: &'static str,
    pub is_dir: bool,
    pub accent: Accent,
}

pub const HERO_LINKS: &[HeroLink] = &[
    HeroLink { label: "about/", section: "about", is_dir: true, accent: Accent::Amber },
    HeroLink { label: "skills.json", section: "skills", is_dir: false, accent: Accent::Cyan },
    HeroLink { label: "projects/", section: "projects", is_dir: true, accent: Accent::Amber },
    HeroLink { label: "contact.sh", section: "contact", is_dir: false, accent: Accent::Green },
];

/// A portfolio project card.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Project {
    pub id: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub long_description: Option<&'static str>,
    pub tech: &'static [&'static str],
    pub accent: Accent,
    pub is_private: bool,
    pub repository: Option<&'static str>,
}

pub const FEATURED_PROJECT: Project = Project {
    id: 0,
    title: "Accounting + Inventory App",
    description: "Production-focused accounting + inventory system built with MVVM architecture. Includes sales/invoices, customers, expenses, reporting, logging, planned PDF exports, plus stock planning and audit flows.",
    long_description: Some(
        "Designed to be clean, fast, and scalable. Features Supabase backend with RLS policies for security, and a comprehensive logging system for debugging and auditing.",
    ),
    tech: &["Flutter", "Dart", "Supabase", "PostgreSQL", "RLS", "MVVM"],
    accent: Accent::Cyan,
    is_private: true,
    repository: None,
};

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "SLine",
        description: "Upwork/Fiverr-style freelance marketplace platform with task posting, requests, chat, and wallet/escrow, built with strong architecture and backend policies.",
        long_description: None,
        tech: &["Flutter", "Supabase", "Postgres", "MVVM"],
        accent: Accent::Cyan,
        is_private: true,
        repository: None,
    },
    Project {
        id: 2,
        title: "Smart Route Optimization",
        description: "Optimizes routes from start → multiple stores → end to minimize time/distance. Supports saving locations/routes and importing from Maps.",
        long_description: None,
        tech: &["Flutter", "Python", "FastAPI", "Algorithms"],
        accent: Accent::Pink,
        is_private: true,
        repository: None,
    },
    Project {
        id: 3,
        title: "Portfolio Website",
        description: "The very website you're looking at! Rust compiled to WebAssembly, a WebGL2 background and a cyberpunk aesthetic.",
        long_description: None,
        tech: &["Rust", "WebAssembly", "WebGL2", "CSS"],
        accent: Accent::Purple,
        is_private: false,
        repository: Some("https://github.com/faroqomar"),
    },
];

/// Source text typed out in the about section's editor window.
pub const ABOUT_SOURCE: &str = r#"const farooq = {
  name: "Farooq Omar",
  role: "Software Engineer",
  location: "Istanbul, Turkey",

  education: {
    degree: "BSc in Software Engineering",
    university: "Istanbul Nişantaşı University",
    graduation: 2027
  },

  interests: [
    "Flutter Development",
    "Backend Architecture",
    "Machine Learning",
    "Database Design"
  ],

  currentlyLearning: [
    "Python ML (scikit-learn)",
    "Advanced RLS Patterns",
    "MVVM Architecture"
  ],

  motto: "Building real products, end-to-end"
};"#;

/// File name shown in the editor title bar.
pub const ABOUT_SOURCE_NAME: &str = "farooq.config.js";

/// A count-up statistic card.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Stat {
    pub label: &'static str,
    pub value: u32,
    pub suffix: &'static str,
    pub icon: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { label: "Years Coding", value: 2, suffix: "+", icon: "⚡" },
    Stat { label: "Projects Built", value: 6, suffix: "+", icon: "🚀" },
    Stat { label: "DataCamp Certs", value: 5, suffix: "", icon: "📜" },
];

/// A skill bar in the list view.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency, `0..=100`.
    pub level: u8,
    pub category: &'static str,
}

pub const SKILLS: &[Skill] = &[
    Skill { name: "Flutter", level: 88, category: "Mobile" },
    Skill { name: "TypeScript", level: 85, category: "Languages" },
    Skill { name: "Node.js", level: 78, category: "Backend" },
    Skill { name: "Python", level: 72, category: "Languages" },
    Skill { name: "Docker", level: 65, category: "DevOps" },
    Skill { name: "React", level: 55, category: "Frontend" },
];

/// An axis of the skill radar chart.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct RadarAxis {
    pub name: &'static str,
    pub value: u8,
    pub color: Rgb,
}

pub const RADAR_AXES: &[RadarAxis] = &[
    RadarAxis { name: "Flutter", value: 88, color: palette::CYAN },
    RadarAxis { name: "Backend", value: 78, color: palette::PINK },
    RadarAxis { name: "AI/ML", value: 72, color: palette::PURPLE },
    RadarAxis { name: "DevOps", value: 65, color: palette::SCENE_CYAN },
    RadarAxis { name: "Databases", value: 80, color: palette::GREEN },
    RadarAxis { name: "React", value: 55, color: palette::AMBER },
];

pub const TECH_STACK: &[&str] = &[
    "Flutter",
    "Dart",
    "Supabase",
    "PostgreSQL",
    "SQL",
    "TypeScript",
    "Node.js",
    "Python",
    "Docker",
    "Git",
];

/// Degree card in the skills section.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub duration: &'static str,
    pub focus: &'static [&'static str],
    pub certification: &'static str,
}

pub const EDUCATION: Education = Education {
    degree: "BSc in Software Engineering",
    institution: "Istanbul Nişantaşı University",
    duration: "2024 - 2027",
    focus: &["Software Engineering", "Mobile Development", "Backend Architecture"],
    certification: "5× DataCamp Certificates (Python/ML)",
};

pub const EXPLORING: &[&str] = &["Python ML", "scikit-learn", "Advanced RLS", "MVVM"];

/// A "what I'm up to" card.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Activity {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub accent: Accent,
}

pub const ACTIVITIES: &[Activity] = &[
    Activity {
        icon: "</>",
        title: "Building",
        description: "Flutter + Supabase production apps (Accounting app + SLine modules)",
        accent: Accent::Cyan,
    },
    Activity {
        icon: "📖",
        title: "Learning",
        description: "Python + Machine Learning (scikit-learn)",
        accent: Accent::Pink,
    },
    Activity {
        icon: "⚡",
        title: "Improving",
        description: "MVVM architecture, logging, documentation, and database design (RLS, triggers, indexing)",
        accent: Accent::Purple,
    },
];

/// A progress ring under "Current Focus Areas".
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct FocusArea {
    pub label: &'static str,
    /// Share of current focus, `0..=100`.
    pub progress: u8,
    pub accent: Accent,
}

pub const FOCUS_AREAS: &[FocusArea] = &[
    FocusArea { label: "Flutter/Mobile", progress: 45, accent: Accent::Cyan },
    FocusArea { label: "Backend (Supabase)", progress: 30, accent: Accent::Pink },
    FocusArea { label: "AI/ML (Python)", progress: 15, accent: Accent::Purple },
];

/// Days per week in the contribution graph.
pub const CONTRIBUTION_DAYS: usize = 7;

/// Twelve weeks of activity levels, `0..=4`, oldest first.
#[rustfmt::skip]
pub const CONTRIBUTIONS: [u8; 84] = [
    0, 0, 0, 1, 0, 0, 0,
    0, 1, 0, 0, 0, 0, 0,
    0, 0, 1, 0, 0, 0, 0,
    0, 0, 0, 0, 1, 0, 0,
    0, 1, 0, 0, 0, 1, 0,
    0, 0, 1, 0, 0, 0, 0,
    1, 2, 0, 1, 0, 0, 0,
    0, 2, 3, 1, 2, 0, 0,
    0, 1, 2, 3, 2, 1, 0,
    0, 3, 4, 2, 3, 1, 0,
    1, 2, 4, 3, 4, 2, 0,
    0, 3, 4, 4, 3, 2, 1,
];

/// An outbound profile link.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
    pub glyph: &'static str,
    pub accent: Accent,
}

pub const SOCIALS: &[SocialLink] = &[
    SocialLink {
        name: "GitHub",
        href: "https://github.com/faroqomar",
        glyph: "⌥",
        accent: Accent::Cyan,
    },
    SocialLink {
        name: "LinkedIn",
        href: "https://www.linkedin.com/in/faroq0mar/",
        glyph: "in",
        accent: Accent::Pink,
    },
    SocialLink {
        name: "Email",
        href: "mailto:faroqomar97@gmail.com",
        glyph: "@",
        accent: Accent::Purple,
    },
];

pub const FOOTER_SOCIALS: &[SocialLink] = &[
    SocialLink {
        name: "GitHub",
        href: "https://github.com/faroqomar",
        glyph: "⌥",
        accent: Accent::Cyan,
    },
    SocialLink {
        name: "LinkedIn",
        href: "https://www.linkedin.com/in/faroq0mar/",
        glyph: "in",
        accent: Accent::Cyan,
    },
    SocialLink {
        name: "Twitter",
        href: "https://x.com/eros_6_",
        glyph: "𝕏",
        accent: Accent::Cyan,
    },
];

/// A spoken language badge.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Language {
    pub name: &'static str,
    pub level: &'static str,
    pub accent: Accent,
}

pub const LANGUAGES: &[Language] = &[
    Language { name: "Arabic", level: "Native", accent: Accent::Cyan },
    Language { name: "English", level: "B2", accent: Accent::Pink },
    Language { name: "Turkish", level: "B1", accent: Accent::Purple },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn nav_sections_are_unique() {
        let ids: HashSet<_> = NAV_ITEMS.iter().map(|item| item.section).collect();
        assert_eq!(ids.len(), NAV_ITEMS.len());
    }

    #[test]
    fn hero_links_target_nav_sections() {
        let ids: HashSet<_> = NAV_ITEMS.iter().map(|item| item.section).collect();
        for link in HERO_LINKS {
            assert!(ids.contains(link.section), "unknown section: {}", link.section);
        }
    }

    #[test]
    fn levels_are_percentages() {
        assert!(SKILLS.iter().all(|s| s.level <= 100));
        assert!(RADAR_AXES.iter().all(|a| a.value <= 100));
        assert!(FOCUS_AREAS.iter().all(|f| f.progress <= 100));
    }

    #[test]
    fn contribution_graph_is_whole_weeks() {
        assert_eq!(CONTRIBUTIONS.len() % CONTRIBUTION_DAYS, 0);
        assert!(CONTRIBUTIONS.iter().all(|&level| level <= 4));
    }

    #[test]
    fn public_projects_link_a_repository() {
        for project in PROJECTS.iter().chain(std::iter::once(&FEATURED_PROJECT)) {
            assert_eq!(project.is_private, project.repository.is_none(), "{}", project.title);
        }
    }

    #[test]
    fn hero_script_starts_with_a_command() {
        assert_eq!(HERO_SCRIPT.first().map(|l| l.kind), Some(HeroLineKind::Input));
        assert!(ASCII_BANNER.lines().any(|l| l.contains('█')));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn projects_serialize() {
        let json = serde_json::to_string(&PROJECTS[2]).unwrap();
        assert!(json.contains("\"title\":\"Portfolio Website\""));
        assert!(json.contains("\"accent\":\"Purple\""));
    }
}
