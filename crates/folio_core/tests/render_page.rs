use folio_core::render::{html, text, NO_MATCHES_COPY, SECTION_ANCHORS};
use folio_core::{Catalog, FilterCriteria, TAG_ALL};

#[test]
fn html_page_contains_every_section_anchor() {
    let page = html::render_page(&Catalog::builtin(), &FilterCriteria::default());
    for anchor in SECTION_ANCHORS {
        assert!(
            page.contains(&format!("<section id=\"{anchor}\">")),
            "missing anchor: {anchor}"
        );
    }
}

#[test]
fn html_page_lists_all_projects_under_default_criteria() {
    let catalog = Catalog::builtin();
    let page = html::render_page(&catalog, &FilterCriteria::default());
    for record in &catalog.projects {
        assert!(page.contains(&record.repo_url), "missing link for {}", record.title);
    }
    assert!(!page.contains(NO_MATCHES_COPY));
}

#[test]
fn html_page_shows_affordance_when_nothing_matches() {
    let criteria = FilterCriteria::new(TAG_ALL, "zzz-no-match");
    let page = html::render_page(&Catalog::builtin(), &criteria);
    assert!(page.contains(NO_MATCHES_COPY));
}

#[test]
fn html_interpolation_is_escaped() {
    let mut catalog = Catalog::builtin();
    catalog.projects[0].title = "<script>alert('x')</script>".to_string();
    let page = html::render_page(&catalog, &FilterCriteria::default());
    assert!(!page.contains("<script>alert"));
    assert!(page.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
}

#[test]
fn html_contact_form_posts_to_the_mail_client() {
    let catalog = Catalog::builtin();
    let page = html::render_page(&catalog, &FilterCriteria::default());
    assert!(page.contains(&format!(
        "action=\"mailto:{}\" method=\"post\" enctype=\"text/plain\"",
        catalog.profile.email
    )));
}

#[test]
fn write_page_persists_the_rendered_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("index.html");

    html::write_page(&path, &Catalog::builtin(), &FilterCriteria::default()).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("<!doctype html>"));
    assert!(written.contains("Karla Lewis"));
}

#[test]
fn text_page_carries_profile_and_all_project_titles() {
    let catalog = Catalog::builtin();
    let page = text::render_page(&catalog, &FilterCriteria::default());
    assert!(page.contains(&catalog.profile.name));
    assert!(page.contains(&catalog.profile.tagline));
    for record in &catalog.projects {
        assert!(page.contains(&record.title));
    }
}

#[test]
fn text_gallery_reports_active_filter_and_affordance() {
    let criteria = FilterCriteria::new("Backend", "zzz-no-match");
    let section = text::render_projects(&Catalog::builtin(), &criteria);
    assert!(section.contains("tag=Backend"));
    assert!(section.contains(NO_MATCHES_COPY));
}
