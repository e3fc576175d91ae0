//! Terminal text renderer.
//!
//! Renders the full page, or the project gallery alone, as plain text. The
//! gallery honours the caller's criteria and keeps catalog order.

use crate::catalog::Catalog;
use crate::filter::{visible, FilterCriteria, TAG_ALL};
use crate::render::{
    CONTACT_SUBTITLE, CONTACT_TITLE, NO_MATCHES_COPY, PROJECTS_SUBTITLE, SERVICES_SUBTITLE,
    SKILLS_SUBTITLE,
};

/// Renders the whole page as terminal text.
pub fn render_page(catalog: &Catalog, criteria: &FilterCriteria) -> String {
    let mut out = String::new();

    push_heading(&mut out, &format!("{} — {}", catalog.profile.name, catalog.profile.role));
    out.push_str(&catalog.profile.tagline);
    out.push('\n');
    out.push_str(&catalog.profile.location);
    out.push('\n');
    out.push_str(&format!("Résumé: {}\n", catalog.profile.resume_url));
    out.push_str(&format!("GitHub: {}\n", catalog.profile.github_url));
    out.push_str(&format!("LinkedIn: {}\n", catalog.profile.linkedin_url));

    push_heading(&mut out, "Services");
    out.push_str(SERVICES_SUBTITLE);
    out.push('\n');
    for service in &catalog.services {
        out.push_str(&format!("\n{}\n  {}\n", service.title, service.blurb));
        for bullet in &service.bullets {
            out.push_str(&format!("  - {bullet}\n"));
        }
    }

    push_heading(&mut out, "Projects");
    out.push_str(PROJECTS_SUBTITLE);
    out.push('\n');
    out.push_str(&render_projects(catalog, criteria));

    push_heading(&mut out, "Skills");
    out.push_str(SKILLS_SUBTITLE);
    out.push('\n');
    for group in &catalog.skills {
        out.push_str(&format!("\n{}\n  {}\n", group.heading, group.stack));
    }

    push_heading(&mut out, CONTACT_TITLE);
    out.push_str(CONTACT_SUBTITLE);
    out.push('\n');
    out.push_str(&format!("Email: {}\n", catalog.profile.email));

    out
}

/// Renders the project gallery section under the given criteria.
pub fn render_projects(catalog: &Catalog, criteria: &FilterCriteria) -> String {
    let mut out = String::new();

    if criteria.selected_tag != TAG_ALL || !criteria.query_text.is_empty() {
        out.push_str(&format!(
            "Filter: tag={} query={:?}\n",
            criteria.selected_tag, criteria.query_text
        ));
    }

    let records = visible(&catalog.projects, criteria);
    if records.is_empty() {
        out.push_str(NO_MATCHES_COPY);
        out.push('\n');
        return out;
    }

    for record in records {
        out.push_str(&format!(
            "\n{}\n  {}\n  {}\n  [{}]\n",
            record.title,
            record.summary,
            record.repo_url,
            record.tags.join(", ")
        ));
    }

    out
}

fn push_heading(out: &mut String, title: &str) {
    if !out.is_empty() {
        out.push('\n');
    }
    out.push_str(title);
    out.push('\n');
    out.push_str(&"=".repeat(title.chars().count()));
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::{render_page, render_projects};
    use crate::catalog::Catalog;
    use crate::filter::{FilterCriteria, TAG_ALL};
    use crate::render::NO_MATCHES_COPY;

    #[test]
    fn page_lists_every_section() {
        let page = render_page(&Catalog::builtin(), &FilterCriteria::default());
        for heading in ["Services", "Projects", "Skills", "Let’s work together"] {
            assert!(page.contains(heading), "missing heading: {heading}");
        }
    }

    #[test]
    fn empty_gallery_shows_affordance() {
        let criteria = FilterCriteria::new(TAG_ALL, "zzz-no-match");
        let section = render_projects(&Catalog::builtin(), &criteria);
        assert!(section.contains(NO_MATCHES_COPY));
    }
}
