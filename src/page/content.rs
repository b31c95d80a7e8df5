// Static page content: sections, projects, skills, experience and contact details.

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    Projects,
    Skills,
    Experience,
    Contact,
}

impl Section {
    // Page order, which is also scroll-spy priority
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Projects,
        Section::Skills,
        Section::Experience,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Projects => "projets",
            Section::Skills => "competences",
            Section::Experience => "experience",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Accueil",
            Section::Projects => "Projets",
            Section::Skills => "Compétences",
            Section::Experience => "Expérience",
            Section::Contact => "Contact",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DeviceModel {
    Phone,
    Laptop,
}

#[derive(Debug)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub tech: &'static str,
    pub description: &'static str,
    pub model: DeviceModel,
    pub features: &'static [&'static str],
}

#[derive(Debug)]
pub struct SkillCategory {
    pub name: &'static str,
    pub color: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Debug)]
pub struct Experience {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub color: &'static str,
}

#[derive(Debug)]
pub struct ContactDetails {
    pub developer: &'static str,
    pub mailbox: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub phone_href: &'static str,
    pub socials: &'static [&'static str],
}

pub const OWNER: &str = "Amani Yangui";
pub const HEADLINE: &str = "Développeuse Full-Stack";
pub const TAGLINE: &str = "Créatrice d'Expériences Digitales Extraordinaires";

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "SnapShoot",
        tech: "React Native • Node.js • Docker",
        description: "Application sociale avec architecture microservices",
        model: DeviceModel::Phone,
        features: &["Stories éphémères", "Chat temps réel", "Géolocalisation"],
    },
    Project {
        id: 2,
        title: "SupMap",
        tech: "React Native • Mapbox • PostGIS",
        description: "Navigation intelligente avec carte 3D",
        model: DeviceModel::Phone,
        features: &[
            "Carte 3D interactive",
            "Signalement d'incidents",
            "Navigation intelligente",
        ],
    },
    Project {
        id: 3,
        title: "EventFlow SaaS",
        tech: "Node.js • PostgreSQL • React",
        description: "Plateforme de billetterie événementielle",
        model: DeviceModel::Laptop,
        features: &[
            "Gestion multi-événements",
            "Paiements sécurisés",
            "Analytics temps réel",
        ],
    },
];

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        name: "Frontend",
        color: "#61dafb",
        skills: &["React", "Vue.js", "TypeScript", "Tailwind CSS", "Three.js"],
    },
    SkillCategory {
        name: "Backend",
        color: "#68d391",
        skills: &["Node.js", "Python", "PHP", "Express", "Laravel"],
    },
    SkillCategory {
        name: "Database",
        color: "#4299e1",
        skills: &["PostgreSQL", "MySQL", "Redis", "MongoDB", "PostGIS"],
    },
    SkillCategory {
        name: "DevOps",
        color: "#a78bfa",
        skills: &["Docker", "Git", "CI/CD", "Linux", "Nginx"],
    },
];

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        title: "Développeuse Full-Stack",
        company: "Quadribot",
        period: "Déc 2023 - Sept 2024",
        description: "Développement d'applications web de capteurs IoT avec Django REST et React",
        color: "#8b5cf6",
    },
    Experience {
        title: "Bachelor Concepteur Développeur",
        company: "CESI École d'ingénieur",
        period: "Sept 2023 - Sept 2024",
        description: "Projet ministériel: Plateforme (RE)Sources avec Laravel & React Native",
        color: "#3b82f6",
    },
    Experience {
        title: "BTS SIO SLAM",
        company: "École Nationale de Commerce",
        period: "Sept 2021 - Sept 2023",
        description: "Application GPS avec Leaflet & PostGIS",
        color: "#10b981",
    },
    Experience {
        title: "Prépa Intégrée EPITA",
        company: "EPITA",
        period: "Sept 2020 - Sept 2021",
        description: "Développement de jeux 3D en C# et algorithmes de chiffrement",
        color: "#f59e0b",
    },
];

pub const CONTACT: ContactDetails = ContactDetails {
    developer: "AMANI YANGUI",
    mailbox: "contact@amani.dev",
    email: "amani-yangui@live.fr",
    phone: "06.22.00.58.51",
    phone_href: "tel:+33622005851",
    socials: &["GitHub", "LinkedIn", "Twitter"],
};

pub fn project(id: u32) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

pub fn skill_category(name: &str) -> Option<&'static SkillCategory> {
    SKILL_CATEGORIES.iter().find(|c| c.name == name)
}
