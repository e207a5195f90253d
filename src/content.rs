//! Static content rendered by the portfolio sections.
//!
//! Every record here is a compile-time constant. Sections render the arrays
//! independently; nothing references anything else.

#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub initials: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub greeting: &'static str,
    pub about_summary: &'static str,
    pub about: &'static [&'static str],
    pub github: &'static str,
    pub cv_link: &'static str,
    pub cv_file_name: &'static str,
}

impl Profile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub label: &'static str,
    /// Shown inside the mobile drawer, which has no icon font.
    pub initials: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    pub level: i32,
    pub icon: Option<&'static str>,
}

impl Skill {
    /// Stored level clamped to a displayable percentage.
    pub fn fill_percent(&self) -> u8 {
        self.level.clamp(0, 100) as u8
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SkillCategory {
    pub title: &'static str,
    pub icon: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub value: &'static str,
    pub caption: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub features: &'static [&'static str],
    pub live_link: &'static str,
    pub source_link: &'static str,
}

impl Project {
    /// `"#"` marks a project without a hosted demo.
    pub fn has_live_demo(&self) -> bool {
        !self.live_link.is_empty() && self.live_link != "#"
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub duration: &'static str,
    pub score: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Experience {
    pub title: &'static str,
    pub company: &'static str,
    pub duration: &'static str,
    pub responsibilities: &'static [&'static str],
    pub technologies: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct Responsibility {
    pub title: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct ContactChannel {
    pub title: &'static str,
    pub value: &'static str,
    pub link: &'static str,
    pub icon: &'static str,
}

pub const NAV_ITEMS: [&str; 7] = [
    "Home",
    "About",
    "Education",
    "Experience",
    "Projects",
    "Skills",
    "Contact",
];

/// In-page anchor for a navigation label, e.g. `"About"` -> `"#about"`.
pub fn nav_anchor(label: &str) -> String {
    format!("#{}", label.to_lowercase())
}

pub const PROFILE: Profile = Profile {
    first_name: "Fuleswari",
    last_name: "Saha",
    initials: "FS",
    role: "Frontend Developer",
    tagline: "I'm a passionate Frontend Developer with a solid understanding of the MERN Stack. I love building clean, responsive, and interactive user interfaces. Previously worked at Edu Club, now focusing full-time on creating engaging web experiences and exploring modern frontend technologies.",
    greeting: "Hello! I'm Fuleswari Saha 👋",
    about_summary: "Passionate Full Stack Developer with expertise in modern web technologies and a focus on creating exceptional user experiences.",
    about: &[
        "I'm a passionate Full Stack Developer currently pursuing my B.Tech in Information Technology with a CGPA of 8.49. I specialize in the MERN stack and love building interactive, responsive web applications.",
        "As an Associate Software Developer at Edu-Club, I work on developing scalable applications using MongoDB, Express, React, and Node.js. I'm constantly learning and exploring new technologies to enhance my skills.",
        "When I'm not coding, you can find me exploring new web technologies, contributing to open-source projects, or learning about cybersecurity.",
    ],
    github: "https://github.com/fuleswari220",
    cv_link: "https://drive.google.com/drive/folders/1y75zz-YCoCWqMs-0-Oo0RrZ5F2EQNlOI?usp=sharing",
    cv_file_name: "Fuleswari_Saha_CV.pdf",
};

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        label: "GitHub",
        initials: "GH",
        url: "https://github.com/fuleswari220",
        icon: "devicon-github-plain",
    },
    SocialLink {
        label: "LinkedIn",
        initials: "IN",
        url: "https://www.linkedin.com/in/fuleswari-saha-3b95b723a/",
        icon: "devicon-linkedin-plain",
    },
    SocialLink {
        label: "X (Twitter)",
        initials: "X",
        url: "https://x.com/fuleswari_saha",
        icon: "devicon-twitter-original",
    },
];

pub const STATS: [Stat; 4] = [
    Stat {
        value: "8.49",
        caption: "CGPA",
    },
    Stat {
        value: "1+",
        caption: "Years Experience",
    },
    Stat {
        value: "10+",
        caption: "Projects",
    },
    Stat {
        value: "5+",
        caption: "Technologies",
    },
];

pub const CORE_SKILLS: [Skill; 6] = [
    Skill {
        name: "Frontend Development",
        level: 90,
        icon: None,
    },
    Skill {
        name: "React.js",
        level: 85,
        icon: None,
    },
    Skill {
        name: "JavaScript",
        level: 88,
        icon: None,
    },
    Skill {
        name: "MERN Stack",
        level: 82,
        icon: None,
    },
    Skill {
        name: "Tailwind CSS",
        level: 85,
        icon: None,
    },
    Skill {
        name: "GSAP Animations",
        level: 80,
        icon: None,
    },
];

pub const TECH_TAGS: [&str; 12] = [
    "React.js",
    "JavaScript",
    "Node.js",
    "Express.js",
    "MongoDB",
    "HTML5",
    "CSS3",
    "Tailwind CSS",
    "GSAP",
    "Git",
    "GitHub",
    "REST APIs",
];

pub const EDUCATION: [Education; 3] = [
    Education {
        degree: "Bachelor of Technology in Information Technology",
        institution: "Maulana Abul Kalam Azad University Of Technology",
        duration: "2021 - Present",
        score: "CGPA: 8.49",
        description: "Currently pursuing my degree with focus on software development, data structures, and web technologies.",
    },
    Education {
        degree: "Higher Secondary Education",
        institution: "Nabadwip Tarasundari Girls' High School",
        duration: "2019 - 2021",
        score: "Percentage: 80.4%",
        description: "Completed higher secondary education with focus on science and mathematics.",
    },
    Education {
        degree: "Secondary Education",
        institution: "Nabadwip Tarasundari Girls' High School",
        duration: "2009 - 2019",
        score: "Percentage: 70.71%",
        description: "Completed secondary education with strong foundation in core subjects.",
    },
];

pub const EXPERIENCE: [Experience; 1] = [Experience {
    title: "Associate Software Developer",
    company: "Edu-Club",
    duration: "Present",
    responsibilities: &[
        "Working on MERN Stack development with MongoDB, Express, React, and Node.js",
        "Developing and maintaining scalable applications",
        "Applying knowledge of database management and REST APIs",
        "Leveraging skills in MongoDB and 5+ additional technologies",
    ],
    technologies: &["MongoDB", "Express.js", "React", "Node.js", "REST APIs", "Git"],
}];

pub const FOCUS_AREAS: [Responsibility; 3] = [
    Responsibility {
        title: "Frontend Development",
        icon: "💻",
        description: "Creating responsive and interactive user interfaces using React.js",
    },
    Responsibility {
        title: "Backend Development",
        icon: "🖥️",
        description: "Building robust server-side applications with Node.js and Express",
    },
    Responsibility {
        title: "Database Management",
        icon: "🗄️",
        description: "Designing and managing databases with MongoDB and MySQL",
    },
];

pub const PROJECTS: [Project; 6] = [
    Project {
        title: "JK Cafe Website",
        description: "Full-stack cafe website built with the MERN stack, featuring menu display, online ordering, and contact functionality with smooth UI and animations.",
        image: "/projects/jk-cafe.png",
        technologies: &["MongoDB", "Express.js", "React", "Node.js"],
        features: &[
            "Menu display with categories",
            "Online order form integration",
            "Smooth animations and transitions",
            "Responsive and mobile-friendly design",
        ],
        live_link: "#",
        source_link: "https://github.com/fuleswari220/JF-Cafe",
    },
    Project {
        title: "Dice Game",
        description: "An interactive dice game built with React where players roll dice to test their luck and score points.",
        image: "/projects/dice-game.png",
        technologies: &["React", "JavaScript", "CSS"],
        features: &[
            "Two-player dice rolling gameplay",
            "Score tracking system",
            "Winning logic and reset option",
            "Responsive and animated UI",
        ],
        live_link: "https://dice-game-d84804.netlify.app/",
        source_link: "https://github.com/fuleswari220/Dice-Game",
    },
    Project {
        title: "Portfolio Website",
        description: "Modern portfolio website with animations, dark mode, and contact form.",
        image: "/projects/portfolio.png",
        technologies: &["React", "GSAP", "Tailwind CSS", "EmailJS"],
        features: &[
            "Smooth animations",
            "Dark/light mode",
            "Contact form",
            "Responsive design",
        ],
        live_link: "https://portfolio-41f1a8.netlify.app/",
        source_link: "https://github.com/fuleswari220/Portfolio",
    },
    Project {
        title: "FulNews - All Type News App",
        description: "Fetches latest all news from trusted API sources with country-based filtering and responsive design.",
        image: "/projects/fulnews.png",
        technologies: &["HTML", "CSS", "Bootstrap", "JavaScript", "NewsAPI"],
        features: &[
            "Real-time health news updates",
            "Country-based news filtering",
            "Responsive design",
            "API integration",
        ],
        live_link: "#",
        source_link: "https://github.com/fuleswari220/NewsApp",
    },
    Project {
        title: "Spotify Clone",
        description: "Responsive music streaming web application with playback controls and modern UI design.",
        image: "/projects/spotify-clone.png",
        technologies: &["HTML5", "CSS3", "JavaScript"],
        features: &[
            "Music playback controls",
            "Responsive design",
            "Modern UI/UX",
            "Interactive elements",
        ],
        live_link: "https://spotify-d8fe99.netlify.app/",
        source_link: "https://github.com/fuleswari220/Spotify-Clone",
    },
    Project {
        title: "Netflix Clone",
        description: "Fully responsive frontend clone of Netflix with modern design and smooth animations.",
        image: "/projects/netflix-clone.png",
        technologies: &["HTML5", "CSS3", "JavaScript"],
        features: &[
            "Fully responsive design",
            "Netflix-like UI",
            "Smooth animations",
            "Modern layout",
        ],
        live_link: "https://lively-torte-93fd4d.netlify.app/",
        source_link: "https://github.com/fuleswari220/Netflix-Clone",
    },
];

pub const TECHNICAL_SKILLS: [Skill; 8] = [
    Skill {
        name: "React.js",
        level: 85,
        icon: Some("devicon-react-original"),
    },
    Skill {
        name: "JavaScript",
        level: 88,
        icon: Some("devicon-javascript-plain"),
    },
    Skill {
        name: "Node.js",
        level: 80,
        icon: Some("devicon-nodejs-plain"),
    },
    Skill {
        name: "Express.js",
        level: 78,
        icon: Some("devicon-express-original"),
    },
    Skill {
        name: "MongoDB",
        level: 75,
        icon: Some("devicon-mongodb-plain"),
    },
    Skill {
        name: "Tailwind CSS",
        level: 85,
        icon: Some("devicon-tailwindcss-original"),
    },
    Skill {
        name: "HTML/CSS",
        level: 90,
        icon: Some("devicon-html5-plain"),
    },
    Skill {
        name: "Git & GitHub",
        level: 82,
        icon: Some("devicon-git-plain"),
    },
];

pub const SKILL_CATEGORIES: [SkillCategory; 3] = [
    SkillCategory {
        title: "Frontend Development",
        icon: "💻",
        skills: &[
            "React.js",
            "JavaScript",
            "HTML5",
            "CSS3",
            "Tailwind CSS",
            "Bootstrap",
            "GSAP",
        ],
    },
    SkillCategory {
        title: "Backend Development",
        icon: "🗄️",
        skills: &["Node.js", "Express.js", "REST APIs", "MongoDB", "MySQL"],
    },
    SkillCategory {
        title: "Tools & Technologies",
        icon: "🛠️",
        skills: &["Git", "GitHub", "Docker", "Postman", "VS Code", "Figma"],
    },
];

pub const CONTACT_CHANNELS: [ContactChannel; 3] = [
    ContactChannel {
        title: "Email",
        value: "fuleswari220@gmail.com",
        link: "mailto:fuleswari220@gmail.com",
        icon: "✉️",
    },
    ContactChannel {
        title: "Phone",
        value: "+91 8371047875",
        link: "tel:+918371047875",
        icon: "📞",
    },
    ContactChannel {
        title: "Location",
        value: "West Bengal, India",
        link: "#",
        icon: "📍",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_percent_clamps() {
        let over = Skill {
            name: "over",
            level: 140,
            icon: None,
        };
        let under = Skill {
            name: "under",
            level: -5,
            icon: None,
        };
        assert_eq!(over.fill_percent(), 100);
        assert_eq!(under.fill_percent(), 0);
    }

    #[test]
    fn test_fill_matches_level() {
        for skill in CORE_SKILLS.iter().chain(TECHNICAL_SKILLS.iter()) {
            assert!((0..=100).contains(&skill.level), "{} out of range", skill.name);
            assert_eq!(i32::from(skill.fill_percent()), skill.level);
        }
    }

    #[test]
    fn test_nav_anchor() {
        let anchors = NAV_ITEMS.iter().map(|s| nav_anchor(s)).collect::<Vec<_>>();
        assert_eq!(anchors[0], "#home");
        assert_eq!(anchors[6], "#contact");
    }

    #[test]
    fn test_live_demo_placeholder() {
        assert!(!PROJECTS[0].has_live_demo());
        assert!(PROJECTS[1].has_live_demo());
    }

    #[test]
    fn test_full_name() {
        assert_eq!(PROFILE.full_name(), "Fuleswari Saha");
    }
}
