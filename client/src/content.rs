//! Static site copy.

pub const SITE_NAME: &str = "delfigore.dev";
pub const SITE_TITLE: &str = "delfigore.dev - Portfolio";
pub const SITE_DESCRIPTION: &str = "A showcase of my work as a full-stack developer";

pub const HERO_TAGLINE: &str = "Crafting elegant solutions through code. Full-stack developer passionate about creating impactful web experiences.";

pub const ABOUT: &str = "I'm a passionate full-stack developer with a keen eye for design and a love for clean, efficient code. With years of experience in web development, I specialize in creating responsive and user-friendly applications that solve real-world problems.";

pub const SKILLS: [&str; 10] =
    ["JavaScript", "React", "Node.js", "Python", "SQL", "Git", "AWS", "Docker", "TypeScript", "GraphQL"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
}

pub const PROJECTS: [Project; 3] = [
    Project { title: "Project 1", description: "A brief description of Project 1" },
    Project { title: "Project 2", description: "A brief description of Project 2" },
    Project { title: "Project 3", description: "A brief description of Project 3" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink { label: "GitHub", href: "https://github.com/Delfigore", icon: "github" },
    SocialLink { label: "LinkedIn", href: "#", icon: "linkedin" },
    SocialLink { label: "Email", href: "#", icon: "mail" },
];

pub const COPYRIGHT: &str = "© 2024 delfigore.dev. All rights reserved.";
