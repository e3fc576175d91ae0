//! Static HTML page renderer.
//!
//! # Responsibility
//! - Render the portfolio as one self-contained semantic HTML page.
//! - Persist the page to disk on request.
//!
//! # Invariants
//! - Every interpolated string is escaped before emission.
//! - The page carries the stable in-page anchors and all outbound links
//!   (résumé, GitHub, LinkedIn, per-project repos) without validating them.

use std::io;
use std::path::Path;

use crate::catalog::Catalog;
use crate::filter::{visible, FilterCriteria};
use crate::model::project::ProjectRecord;
use crate::render::{
    CONTACT_SUBTITLE, CONTACT_TITLE, NO_MATCHES_COPY, PROJECTS_SUBTITLE, SERVICES_SUBTITLE,
    SKILLS_SUBTITLE,
};

/// Escapes text for safe interpolation into HTML content and attributes.
pub fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Renders the whole page as a standalone HTML document.
pub fn render_page(catalog: &Catalog, criteria: &FilterCriteria) -> String {
    let profile = &catalog.profile;
    let mut out = String::new();

    out.push_str("<!doctype html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str(&format!(
        "<title>{} • Portfolio</title>\n",
        escape(&profile.name)
    ));
    out.push_str("</head>\n<body>\n");

    // Nav
    out.push_str("<header>\n<nav>\n<ul>\n");
    for (anchor, label) in [
        ("services", "Services"),
        ("projects", "Projects"),
        ("skills", "Skills"),
        ("contact", "Contact"),
    ] {
        out.push_str(&format!("<li><a href=\"#{anchor}\">{label}</a></li>\n"));
    }
    out.push_str("</ul>\n</nav>\n</header>\n");

    // Hero
    out.push_str("<section id=\"top\">\n");
    out.push_str(&format!(
        "<h1>Hi, I’m {}. <span>{}</span></h1>\n",
        escape(&profile.name),
        escape(&profile.role)
    ));
    out.push_str(&format!("<p>{}</p>\n", escape(&profile.tagline)));
    out.push_str(&format!(
        "<p><a href=\"{}\" target=\"_blank\" rel=\"noreferrer\">Download Résumé</a>\n",
        escape(&profile.resume_url)
    ));
    out.push_str(&format!(
        "<a href=\"mailto:{}\">Email Me</a></p>\n",
        escape(&profile.email)
    ));
    out.push_str(&format!("<p>{}</p>\n", escape(&profile.location)));
    out.push_str("</section>\n");

    // Services
    push_section_open(&mut out, "services", "Services", SERVICES_SUBTITLE);
    for service in &catalog.services {
        out.push_str("<article>\n");
        out.push_str(&format!("<h3>{}</h3>\n", escape(&service.title)));
        out.push_str(&format!("<p>{}</p>\n", escape(&service.blurb)));
        out.push_str("<ul>\n");
        for bullet in &service.bullets {
            out.push_str(&format!("<li>{}</li>\n", escape(bullet)));
        }
        out.push_str("</ul>\n</article>\n");
    }
    out.push_str("</section>\n");

    // Projects
    push_section_open(&mut out, "projects", "Projects", PROJECTS_SUBTITLE);
    out.push_str("<ul class=\"tags\">\n");
    for label in &catalog.tag_labels {
        let marker = if *label == criteria.selected_tag {
            " class=\"active\""
        } else {
            ""
        };
        out.push_str(&format!("<li{marker}>{}</li>\n", escape(label)));
    }
    out.push_str("</ul>\n");

    let records = visible(&catalog.projects, criteria);
    if records.is_empty() {
        out.push_str(&format!("<p>{}</p>\n", escape(NO_MATCHES_COPY)));
    } else {
        for record in records {
            push_project_card(&mut out, record);
        }
    }
    out.push_str("</section>\n");

    // Skills
    push_section_open(&mut out, "skills", "Skills", SKILLS_SUBTITLE);
    for group in &catalog.skills {
        out.push_str("<article>\n");
        out.push_str(&format!("<h4>{}</h4>\n", escape(&group.heading)));
        out.push_str(&format!("<p>{}</p>\n", escape(&group.stack)));
        out.push_str("</article>\n");
    }
    out.push_str("</section>\n");

    // Contact
    push_section_open(&mut out, "contact", CONTACT_TITLE, CONTACT_SUBTITLE);
    out.push_str("<ul>\n");
    out.push_str(&format!(
        "<li>Email: <a href=\"mailto:{0}\">{0}</a></li>\n",
        escape(&profile.email)
    ));
    out.push_str(&format!(
        "<li>GitHub: <a href=\"{0}\" target=\"_blank\" rel=\"noreferrer\">{0}</a></li>\n",
        escape(&profile.github_url)
    ));
    out.push_str(&format!(
        "<li>LinkedIn: <a href=\"{0}\" target=\"_blank\" rel=\"noreferrer\">{0}</a></li>\n",
        escape(&profile.linkedin_url)
    ));
    out.push_str("</ul>\n");
    push_contact_form(&mut out, &profile.email);
    out.push_str("</section>\n");

    // Footer
    out.push_str("<footer>\n");
    out.push_str(&format!("<p>© {}.</p>\n", escape(&profile.name)));
    out.push_str("</footer>\n</body>\n</html>\n");

    out
}

/// Renders the page and writes it to `path`.
pub fn write_page(path: &Path, catalog: &Catalog, criteria: &FilterCriteria) -> io::Result<()> {
    std::fs::write(path, render_page(catalog, criteria))
}

fn push_section_open(out: &mut String, anchor: &str, title: &str, subtitle: &str) {
    out.push_str(&format!("<section id=\"{anchor}\">\n"));
    out.push_str(&format!("<h2>{}</h2>\n", escape(title)));
    out.push_str(&format!("<p>{}</p>\n", escape(subtitle)));
}

fn push_project_card(out: &mut String, record: &ProjectRecord) {
    out.push_str(&format!(
        "<article>\n<h3><a href=\"{}\" target=\"_blank\" rel=\"noreferrer\">{}</a></h3>\n",
        escape(&record.repo_url),
        escape(&record.title)
    ));
    out.push_str(&format!("<p>{}</p>\n", escape(&record.summary)));
    out.push_str("<ul class=\"tags\">\n");
    for tag in &record.tags {
        out.push_str(&format!("<li>{}</li>\n", escape(tag)));
    }
    out.push_str("</ul>\n</article>\n");
}

// The form posts to the platform mail client; no server receives it.
fn push_contact_form(out: &mut String, email: &str) {
    out.push_str(&format!(
        "<form action=\"mailto:{}\" method=\"post\" enctype=\"text/plain\">\n",
        escape(email)
    ));
    out.push_str("<input required name=\"name\" placeholder=\"Your name\">\n");
    out.push_str("<input required name=\"email\" type=\"email\" placeholder=\"Your email\">\n");
    out.push_str("<input name=\"subject\" placeholder=\"Subject\">\n");
    out.push_str("<textarea required name=\"message\" rows=\"5\" placeholder=\"Project details…\"></textarea>\n");
    out.push_str("<button type=\"submit\">Send Message</button>\n");
    out.push_str("</form>\n");
}

#[cfg(test)]
mod tests {
    use super::escape;

    #[test]
    fn escape_covers_markup_characters() {
        assert_eq!(
            escape(r#"<a href="x">&'"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;"
        );
    }
}
