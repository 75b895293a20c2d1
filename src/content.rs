use serde::Serialize;
use serde_json::json;

pub const SITE_OWNER: &str = "Atolagbe Precious Olawole";
pub const SITE_HANDLE: &str = "Ola";
pub const CONTACT_EMAIL: &str = "pwreshy@gmail.com";

#[derive(Debug, Clone, Copy, Serialize)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProjectLinks {
    pub demo: &'static str,
    pub repo: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub challenges: Option<&'static str>,
    pub tags: &'static [&'static str],
    pub links: ProjectLinks,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Tools,
}

impl SkillCategory {
    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend & Logic",
            SkillCategory::Tools => "Tools & Workflow",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            SkillCategory::Frontend => "extra-code",
            SkillCategory::Backend => "extra-terminal",
            SkillCategory::Tools => "extra-cpu",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SkillGroup {
    pub category: SkillCategory,
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct LeadershipEntry {
    pub role: &'static str,
    pub org: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct BlogPost {
    pub title: &'static str,
    pub excerpt: &'static str,
    pub date: &'static str,
    pub tag: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
    pub hover: &'static str,
}

impl SocialLink {
    /// `mailto:` links stay in the current tab.
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http")
    }
}

pub static NAV_LINKS: &[NavLink] = &[
    NavLink { name: "About", href: "#about" },
    NavLink { name: "Projects", href: "#projects" },
    NavLink { name: "Skills", href: "#skills" },
    NavLink { name: "Leadership", href: "#leadership" },
    NavLink { name: "Blog", href: "#blog" },
    NavLink { name: "Contact", href: "#contact" },
];

pub static PROJECTS: &[Project] = &[
    Project {
        title: "Telso",
        description: "A comprehensive web application designed to streamline campus transport services and connect users effectively.",
        challenges: Some("Challenges: centering and justifying confusion, broken paragraph markup, small HTML structure mistakes"),
        tags: &["HTML", "CSS", "JavaScript"],
        links: ProjectLinks {
            demo: "https://oladdev.github.io/TELSO/",
            repo: "https://github.com/Oladdev/TELSO",
        },
    },
    Project {
        title: "Payment Verification System",
        description: "A streamlined verification interface that processes payment references with real-time feedback and success states.",
        challenges: Some("Challenges: async request flow, reference parsing, conditional UI display after verification"),
        tags: &["JavaScript", "DOM Manipulation", "CSS3"],
        links: ProjectLinks {
            demo: "https://oladdev.github.io/Payment-Verification/",
            repo: "https://github.com/Oladdev/Payment-Verification",
        },
    },
    Project {
        title: "The Duo Hub",
        description: "A collaborative team portfolio website showcasing web and app development services with smooth interactions.",
        challenges: Some("Challenges: how git remote works, why origin is not a command, how to properly pull from a remote repository"),
        tags: &["React", "Framer Motion", "UI/UX"],
        links: ProjectLinks {
            demo: "https://oladdev.github.io/The-Duo-Hub/",
            repo: "https://github.com/Oladdev/The-Duo-Hub",
        },
    },
    Project {
        title: "Sweet Crumbs-Bakery (Ongoing)",
        description: "A delightful frontend interface for a bakery, featuring product galleries and a warm, inviting design.",
        challenges: Some("Challenges: responsive design issues, inconsistent styling, and accessibility concerns"),
        tags: &["HTML", "CSS", "JavaScript"],
        links: ProjectLinks {
            demo: "https://oladdev.github.io/Sweet-Crumbs-Bakery/",
            repo: "https://github.com/Oladdev/Sweet-Crumbs-Bakery",
        },
    },
    Project {
        title: "To-Do List",
        description: "A functional task management tool allowing users to add, edit, and delete tasks with persistent state.",
        challenges: Some("Challenges: managing task persistence, handling UI updates, and ensuring responsive design across devices"),
        tags: &["JavaScript", "CSS", "HTML"],
        links: ProjectLinks {
            demo: "https://oladdev.github.io/TO-DO-LIST/",
            repo: "https://github.com/Oladdev/TO-DO-LIST",
        },
    },
    Project {
        title: "Tic-Tac-Toe Game",
        description: "A classic interactive game featuring game logic, score tracking, and a clean user interface.",
        challenges: Some("Challenges: implementing game logic, score tracking/reset, move overwriting, and draw detection"),
        tags: &["JavaScript", "DOM Manipulation"],
        links: ProjectLinks {
            demo: "https://oladdev.github.io/TIC-TAC-TOE-Game/",
            repo: "https://github.com/Oladdev/TIC-TAC-TOE-Game",
        },
    },
];

pub static SKILLS: &[SkillGroup] = &[
    SkillGroup {
        category: SkillCategory::Frontend,
        skills: &["React", "Tailwind CSS", "JavaScript (ES6+)", "HTML5/CSS3", "Framer Motion"],
    },
    SkillGroup {
        category: SkillCategory::Backend,
        skills: &["C", "C++", "Java", "Strapi CMS", "Node.js Basics", "Python (In View)"],
    },
    SkillGroup {
        category: SkillCategory::Tools,
        skills: &["Git & GitHub", "VS Code", "Vite", "Figma"],
    },
];

pub static LEADERSHIP: &[LeadershipEntry] = &[
    LeadershipEntry {
        role: "Class Representative",
        org: "Babcock University Computer Club (BUCC)",
        period: "2024 - Present",
        description: "Serving as a dedicated liaison between students and faculty, ensuring effective communication and advocating for student academic needs.",
    },
    LeadershipEntry {
        role: "Active Member",
        org: "Babcock University Computer Club (BUCC)",
        period: "2024 - Present",
        description: "Participating in hackathons and peer mentoring sessions to foster a strong coding culture.",
    },
    LeadershipEntry {
        role: "Active Member",
        org: "Google Developer Groups (GDG) Babcock",
        period: "2025",
        description: "Engaging with the developer community through technical workshops, seminars, and collaborative projects.",
    },
];

pub static BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        title: "Mental Health in Tech (In View)",
        excerpt: "Balancing algorithms and anxiety. How I manage burnout during exam season while maintaining side projects.",
        date: "Feb 2026",
        tag: "Wellness",
    },
    BlogPost {
        title: "From C++ to React (In View)",
        excerpt: "Why understanding memory management in C++ made me a better JavaScript developer.",
        date: "Jan 2026",
        tag: "Technical",
    },
];

pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        href: "https://github.com/Oladdev",
        icon: "devicon-github-original",
        hover: "hover:text-indigo-500 dark:hover:text-indigo-400",
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/atolagbe-precious-79a429263",
        icon: "devicon-linkedin-plain",
        hover: "hover:text-indigo-500 dark:hover:text-indigo-400",
    },
    SocialLink {
        label: "Twitter / X",
        href: "https://x.com/oladdev",
        icon: "devicon-twitter-original",
        hover: "hover:text-indigo-500 dark:hover:text-indigo-400",
    },
    SocialLink {
        label: "Instagram",
        href: "https://www.instagram.com/pwreshy.08?igsh=MWd5OWxzb2JieHRxZw==",
        icon: "extra-instagram",
        hover: "hover:text-pink-600 dark:hover:text-pink-400",
    },
    SocialLink {
        label: "Snapchat",
        href: "https://www.snapchat.com/add/i_amolaa",
        icon: "extra-ghost",
        hover: "hover:text-yellow-500 dark:hover:text-yellow-400",
    },
    SocialLink {
        label: "Email",
        href: "mailto:pwreshy@gmail.com",
        icon: "extra-email",
        hover: "hover:text-indigo-500 dark:hover:text-indigo-400",
    },
];

/// schema.org `Person` description embedded in the page head for crawlers.
pub fn person_json_ld() -> String {
    let same_as = SOCIAL_LINKS
        .iter()
        .filter(|l| l.is_external())
        .map(|l| l.href)
        .collect::<Vec<_>>();
    json!({
        "@context": "https://schema.org",
        "@type": "Person",
        "name": SITE_OWNER,
        "alternateName": SITE_HANDLE,
        "jobTitle": "Software Engineering Student",
        "affiliation": {
            "@type": "CollegeOrUniversity",
            "name": "Babcock University",
        },
        "email": format!("mailto:{CONTACT_EMAIL}"),
        "sameAs": same_as,
    })
    .to_string()
}
