//! Static page content. Everything the sections render lives here.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Owner {
    pub name: &'static str,
    pub first_name: &'static str,
    pub role: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub tagline: &'static str,
}

pub const OWNER: Owner = Owner {
    name: "Abdelrhman Ahmed",
    first_name: "Abdelrhman",
    role: "Frontend Developer",
    location: "Cairo, Egypt",
    email: "abdelrhmanahmedd2018@gmail.com",
    tagline: "Passionate Frontend Developer with expertise in React.js ecosystem. I craft beautiful, responsive user interfaces with clean code and optimal performance.",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Github,
    Linkedin,
    Mail,
    Location,
    Code,
    Star,
    Academic,
    Robot,
    Lightbulb,
    Sparkles,
}

impl Icon {
    /// Devicon / extra icon font class.
    pub fn class(self) -> &'static str {
        match self {
            Self::Github => "devicon-github-plain",
            Self::Linkedin => "devicon-linkedin-plain",
            Self::Mail => "extra-email",
            Self::Location => "extra-location",
            Self::Code => "extra-code",
            Self::Star => "extra-star",
            Self::Academic => "extra-academic",
            Self::Robot => "extra-robot",
            Self::Lightbulb => "extra-lightbulb",
            Self::Sparkles => "extra-sparkles",
        }
    }
}

/// Tailwind palette used for cards and accents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Green,
    Purple,
    Indigo,
    Red,
}

impl Accent {
    pub fn gradient(self) -> &'static str {
        match self {
            Self::Blue => "from-blue-500 to-purple-600",
            Self::Green => "from-green-500 to-teal-500",
            Self::Purple => "from-purple-500 to-pink-500",
            Self::Indigo => "from-indigo-500 to-purple-600",
            Self::Red => "from-red-500 to-pink-500",
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            Self::Blue => "text-blue-600",
            Self::Green => "text-green-600",
            Self::Purple => "text-purple-600",
            Self::Indigo => "text-indigo-600",
            Self::Red => "text-red-600",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: Icon,
}

pub const SOCIAL_LINKS: [SocialLink; 2] = [
    SocialLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/abdelrhman-ahmed01/",
        icon: Icon::Linkedin,
    },
    SocialLink {
        label: "GitHub",
        href: "https://github.com/abdelrhmanahmed255",
        icon: Icon::Github,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CvOption {
    pub label: &'static str,
    pub detail: &'static str,
    pub href: &'static str,
    /// File name offered to the browser; `None` opens in a new tab.
    pub download: Option<&'static str>,
}

pub const CV_OPTIONS: [CvOption; 2] = [
    CvOption {
        label: "Direct Download",
        detail: "PDF file",
        href: "/cv/Abdelrhman-Ahmed-CV.pdf",
        download: Some("Abdelrhman_Ahmed_CV.pdf"),
    },
    CvOption {
        label: "View on Google Drive",
        detail: "Opens in a new tab",
        href: "https://drive.google.com/file/d/1Nfws5GOBLGy6syCr-aX9y0sXuWq0kuc9/view?usp=sharing",
        download: None,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
    pub icon: Icon,
}

pub const STATS: [Stat; 3] = [
    Stat {
        number: "1+",
        label: "Year Experience",
        icon: Icon::Code,
    },
    Stat {
        number: "10+",
        label: "Projects Completed",
        icon: Icon::Lightbulb,
    },
    Stat {
        number: "3+",
        label: "Technologies Mastered",
        icon: Icon::Sparkles,
    },
];

pub const JOURNEY: [&str; 3] = [
    "I'm a frontend developer who loves turning ideas into stunning, user-centric web experiences. My journey began with curiosity about how websites work, and it has evolved into a dedicated pursuit of crafting digital solutions that make a difference.",
    "With a strong foundation in the React ecosystem and a keen eye for design, I specialize in building responsive, accessible, and performant web applications. I believe in writing clean, maintainable code and staying current with the latest industry trends.",
    "When I'm not coding, you'll find me exploring new technologies, contributing to open-source projects, or sharing knowledge with the developer community. I'm always excited about the next challenge and the opportunity to bring innovative ideas to life.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Education {
    pub kind: &'static str,
    pub title: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
    pub grade: Option<&'static str>,
    pub project: Option<&'static str>,
    pub activities: Option<&'static str>,
    pub description: Option<&'static str>,
    pub icon: Icon,
    pub accent: Accent,
}

pub const EDUCATION: [Education; 3] = [
    Education {
        kind: "University",
        title: "Bachelor of Information Technology",
        institution: "Faculty of Computer Science, Zagazig University",
        period: "Sep 2019 – May 2023",
        grade: Some("Very Good"),
        project: Some("Smart Library System"),
        activities: Some("Head of FCI Zagazig University Student Union - Led cross-functional teams and executed feedback from multiple stakeholders"),
        description: None,
        icon: Icon::Academic,
        accent: Accent::Blue,
    },
    Education {
        kind: "Professional Training",
        title: "Front-End Diploma",
        institution: "Route Academy",
        period: "June 2024",
        grade: None,
        project: None,
        activities: None,
        description: Some("Focused on modern web development tools and technologies, including React, Next.js, Redux, and Tailwind CSS."),
        icon: Icon::Star,
        accent: Accent::Green,
    },
    Education {
        kind: "Certification",
        title: "AI Career Essential",
        institution: "ALX",
        period: "Nov 2024",
        grade: None,
        project: None,
        activities: None,
        description: Some("Trained in using AI tools across fields for tasks like prompt engineering, data analysis, personal Branding, and automation."),
        icon: Icon::Star,
        accent: Accent::Purple,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub kind: &'static str,
    pub company: Option<&'static str>,
    pub link: &'static str,
    pub technologies: &'static [&'static str],
    pub features: &'static [&'static str],
    pub icon: Icon,
    pub accent: Accent,
}

pub const PROJECTS: [Project; 6] = [
    Project {
        title: "Resume Creator - AI-Powered Resume Generator",
        description: "Designed a responsive application enabling users to create professional resumes with AI-driven suggestions for content optimization. Integrated Stripe as a secure payment gateway to provide watermark-free downloadable resumes after successful transactions.",
        kind: "Web Site",
        company: Some("Murashah Company (Saudi Arabia)"),
        link: "https://murashah.com/",
        technologies: &["React.js", "Tailwind CSS", "Formik", "Yup", "Axios", "PDF-Lib", "Docx"],
        features: &[
            "AI-driven content optimization",
            "Secure Stripe payment integration",
            "Watermark-free PDF generation",
            "Responsive design",
        ],
        icon: Icon::Star,
        accent: Accent::Blue,
    },
    Project {
        title: "SCAI - School AI Assistant",
        description: "Developed an intelligent assistant to streamline educational workflows and enhance classroom management. Implemented natural language processing capabilities to provide personalized responses to student and teacher queries.",
        kind: "Platform",
        company: None,
        link: "https://scai-vert.vercel.app/",
        technologies: &["React.js", "Tailwind CSS", "Web Speech API"],
        features: &[
            "Natural language processing",
            "Voice recognition integration",
            "Text-to-speech features",
            "Multi-device accessibility",
            "Intuitive interface design",
        ],
        icon: Icon::Robot,
        accent: Accent::Green,
    },
    Project {
        title: "E-commerce Application - Online Marketplace",
        description: "Developed a responsive e-commerce platform with optimized, user-friendly interfaces to ensure a seamless shopping experience. Built with clean, well-documented code to ensure maintainability.",
        kind: "Github Demo",
        company: None,
        link: "https://abdelrhmanahmed255.github.io/Freshcart",
        technologies: &["React.js", "React hooks", "Tailwind CSS", "Axios", "Formik", "Yup", "React Query"],
        features: &[
            "Responsive design",
            "Clean, maintainable code",
            "Optimized user interfaces",
            "Seamless shopping experience",
        ],
        icon: Icon::Code,
        accent: Accent::Purple,
    },
    Project {
        title: "Next Book - Online Social Media Platform",
        description: "Developed an interactive platform for managing and discovering posts with user-friendly navigation and responsive design. Implemented with Material UI for sleek design and Redux for state management.",
        kind: "Github Repo",
        company: None,
        link: "https://github.com/abdelrhmanahmed255/nextbookmedia",
        technologies: &["Next.js", "Material UI", "Redux"],
        features: &[
            "Interactive post management",
            "User-friendly navigation",
            "Material UI design system",
            "Redux state management",
        ],
        icon: Icon::Code,
        accent: Accent::Indigo,
    },
    Project {
        title: "MadrasaPro - Educational Platform",
        description: "Developed a comprehensive frontend for an Arabic educational platform to streamline student learning and assessment workflows, with a real-time student dashboard, an interactive test-taking system and a fully responsive RTL interface.",
        kind: "Web Site",
        company: None,
        link: "https://madrasapro.vercel.app",
        technologies: &["React.js", "Tailwind CSS", "Axios", "React Router", "React Query", "Formik", "Yup", "Web Speech API"],
        features: &[
            "Dynamic student dashboard with real-time data",
            "Interactive test-taking system",
            "Arabic RTL support",
            "Responsive design",
        ],
        icon: Icon::Code,
        accent: Accent::Green,
    },
    Project {
        title: "HIRSTO – Integrated Health Platform",
        description: "Built a unified healthcare platform connecting doctors, pharmacies, and insurers with patient-facing experiences, including AI-powered pre-diagnosis, secure telehealth, e-prescriptions and automated insurance workflows.",
        kind: "Web Site",
        company: None,
        link: "https://hirsto.vercel.app/",
        technologies: &["React.js", "TypeScript", "Tailwind CSS", "Framer Motion", "React Router", "React Query"],
        features: &[
            "AI-powered pre-diagnosis",
            "Secure telehealth and EMR",
            "E-prescriptions and pharmacy integration",
            "Insurance verification and claims processing",
        ],
        icon: Icon::Robot,
        accent: Accent::Red,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Self-assessed proficiency, 0 to 100.
    pub level: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub accent: Accent,
    pub skills: &'static [Skill],
}

const fn skill(name: &'static str, level: u8) -> Skill {
    Skill { name, level }
}

pub const SKILL_CATEGORIES: [SkillCategory; 4] = [
    SkillCategory {
        title: "Programming Languages",
        accent: Accent::Blue,
        skills: &[
            skill("JavaScript", 90),
            skill("TypeScript", 80),
            skill("HTML5", 95),
            skill("CSS3", 90),
        ],
    },
    SkillCategory {
        title: "Frameworks & Libraries",
        accent: Accent::Green,
        skills: &[
            skill("React", 95),
            skill("Next.js", 85),
            skill("Redux", 80),
            skill("Tailwind CSS", 90),
            skill("Bootstrap", 85),
            skill("Material UI", 80),
        ],
    },
    SkillCategory {
        title: "Tools & Platforms",
        accent: Accent::Purple,
        skills: &[
            skill("Git", 85),
            skill("Formik", 80),
            skill("React Query", 75),
            skill("Axios", 85),
        ],
    },
    SkillCategory {
        title: "AI Tools",
        accent: Accent::Indigo,
        skills: &[
            skill("Prompt Engineering", 85),
            skill("Data Analysis", 75),
            skill("Workflow Automation", 80),
            skill("Google Analytics", 70),
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub name: &'static str,
    pub level: u8,
    pub description: &'static str,
}

pub const LANGUAGES: [Language; 2] = [
    Language {
        name: "Arabic",
        level: 100,
        description: "Native",
    },
    Language {
        name: "English",
        level: 75,
        description: "Intermediate",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactCard {
    pub title: &'static str,
    pub value: &'static str,
    pub link: Option<&'static str>,
    pub description: &'static str,
    pub icon: Icon,
    pub accent: Accent,
}

pub const CONTACT_CARDS: [ContactCard; 2] = [
    ContactCard {
        title: "Email Me",
        value: OWNER.email,
        link: Some("mailto:abdelrhmanahmedd2018@gmail.com"),
        description: "Send me an email anytime!",
        icon: Icon::Mail,
        accent: Accent::Blue,
    },
    ContactCard {
        title: "Location",
        value: OWNER.location,
        link: None,
        description: "Where I'm based",
        icon: Icon::Location,
        accent: Accent::Purple,
    },
];

pub fn mailto() -> String {
    format!("mailto:{}", OWNER.email)
}
