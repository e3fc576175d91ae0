//! Built-in portfolio content.
//!
//! # Responsibility
//! - Provide the fixed catalogs rendered by every front end.
//! - Keep all literal content in one place, constructed once at startup.
//!
//! # Invariants
//! - `builtin()` output is identical across calls.
//! - `tag_labels` starts with the catch-all label and keeps display order.
//! - Every non-catch-all label matches at least one record tag byte-for-byte
//!   (several labels use U+2011 non-breaking hyphens; the record tags carry
//!   the same bytes).

use serde::{Deserialize, Serialize};

use crate::filter::TAG_ALL;
use crate::model::profile::Profile;
use crate::model::project::ProjectRecord;
use crate::model::showcase::{ServiceOffering, SkillGroup};

/// Complete immutable content set backing the page.
///
/// Constructed once and passed explicitly into engines and renderers; domain
/// data is never held in a mutable global.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Hero / contact identity block.
    pub profile: Profile,
    /// Services section cards.
    pub services: Vec<ServiceOffering>,
    /// Project gallery records, in page order.
    pub projects: Vec<ProjectRecord>,
    /// Skills section cards.
    pub skills: Vec<SkillGroup>,
    /// Enumerated filter labels, [`TAG_ALL`] first.
    pub tag_labels: Vec<String>,
}

impl Catalog {
    /// Returns the compiled-in content set.
    pub fn builtin() -> Self {
        Self {
            profile: builtin_profile(),
            services: builtin_services(),
            projects: builtin_projects(),
            skills: builtin_skills(),
            tag_labels: builtin_tag_labels(),
        }
    }
}

fn builtin_profile() -> Profile {
    Profile {
        name: "Karla Lewis".to_string(),
        role: "Full‑Stack Web Developer".to_string(),
        tagline: "I design and build clean, reliable web apps — from pixel‑perfect UIs to secure, scalable APIs.".to_string(),
        location: "Los Angeles, CA • Remote‑friendly".to_string(),
        email: "karlaoglivie@gmail.com".to_string(),
        resume_url: "/resume.pdf".to_string(),
        github_url: "https://github.com/Karlita2227".to_string(),
        linkedin_url: "www.linkedin.com/in/karlalewis1019".to_string(),
    }
}

fn builtin_services() -> Vec<ServiceOffering> {
    vec![
        ServiceOffering::new(
            "Frontend Development",
            "Responsive SPAs with React, Vite, Tailwind/DaisyUI, accessibility and performance in mind.",
            &["React + Vite setup", "Component architecture", "A11y & Lighthouse basics"],
        ),
        ServiceOffering::new(
            "Backend APIs",
            "RESTful APIs with Express, auth with Supabase, and data modeling with Prisma + Postgres/SQLite.",
            &["Express routing", "JWT/Supabase auth", "Prisma ORM & migrations"],
        ),
        ServiceOffering::new(
            "Database & DevOps",
            "Schema design, seed data, and smooth deploys to Netlify/Vercel with CI‑ready project structure.",
            &["Postgres/SQLite", "Seeding & testing", "Simple CI set‑up"],
        ),
        ServiceOffering::new(
            "Team Workflow",
            "Clean Git branching (feature → develop → main), helpful PRs, and solid documentation.",
            &["Branch strategy", "PR templates", "README & screenshots"],
        ),
    ]
}

fn builtin_projects() -> Vec<ProjectRecord> {
    vec![
        ProjectRecord::new(
            "Team TV Show Website (Group Project)",
            "https://github.com/Karlita2227/GroupProject_TeamTvShowWebsite",
            "Collaborative site exploring TV shows. Contributed components, styling, and git workflow.",
            &["Frontend", "Team", "HTML/CSS/JS"],
        ),
        ProjectRecord::new(
            "Donezo — Full‑Stack Productivity App",
            "https://github.com/Karlita2227/Karla_L_donezo",
            "React + Express + Supabase + Prisma stack with auth, forms, and grid views for tasks.",
            &["Full‑Stack", "React", "Supabase", "Prisma"],
        ),
        ProjectRecord::new(
            "Intro to Supabase",
            "https://github.com/Karlita2227/Karla_L_Intro_to_Supabase",
            "Explores Supabase auth and database reads/writes from a Node/Express service.",
            &["Backend", "Supabase", "Auth"],
        ),
        ProjectRecord::new(
            "Intro to Prisma",
            "https://github.com/Karlita2227/Karla_L_Intro_to_Prisma",
            "Prisma schema design, migrations, and seeded data with SQLite/Postgres targets.",
            &["Backend", "Prisma", "Database"],
        ),
        ProjectRecord::new(
            "U.S. Public Library Database",
            "https://github.com/Karlita2227/KarlaL_US_Public_Library_Database",
            "Data modeling and queries against a public‑library dataset with clean schema.",
            &["Database", "SQL", "Modeling"],
        ),
        ProjectRecord::new(
            "Star Wars Character Search",
            "https://github.com/Karlita2227/KarlaL_StarWars_Character",
            "Search UI powered by SWAPI with clean UX and responsive cards.",
            &["Frontend", "API", "React"],
        ),
        ProjectRecord::new(
            "Disney Final Project (Clean Repo)",
            "https://github.com/Karlita2227/KarlaL_JS_Final_Project_Clean_Repo",
            "Disney character explorer with video background, audio controls, and search.",
            &["Frontend", "UI", "JavaScript"],
        ),
    ]
}

fn builtin_skills() -> Vec<SkillGroup> {
    vec![
        SkillGroup::new(
            "Frontend",
            "React, Vite, Tailwind, DaisyUI, HTML, CSS, JavaScript (ES6+), Accessibility",
        ),
        SkillGroup::new(
            "Backend & Data",
            "Node.js, Express, REST, Prisma, Supabase (Auth/DB), Postgres, SQLite",
        ),
        SkillGroup::new(
            "Workflow",
            "Git & GitHub (feature → develop → main), PR reviews, Postman, README docs, Screenshots",
        ),
    ]
}

fn builtin_tag_labels() -> Vec<String> {
    [
        TAG_ALL,
        "Frontend",
        "Backend",
        "Full‑Stack",
        "Database",
        "Team",
        "React",
        "Prisma",
        "Supabase",
        "API",
        "UI",
        "SQL",
        "HTML/CSS/JS",
    ]
    .iter()
    .map(|label| (*label).to_string())
    .collect()
}
