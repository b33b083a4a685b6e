use folio::client::render_cards;
use folio::models::Project;
use folio::page::contact::ContactForm;
use folio::page::downloads::DownloadCounter;
use folio::page::nav::{NavMenu, Section, active_section, scroll_target, should_reveal};

fn sections() -> Vec<Section> {
    vec![
        Section {
            id: "about".to_string(),
            top: 0,
            height: 600,
        },
        Section {
            id: "skills".to_string(),
            top: 600,
            height: 800,
        },
        Section {
            id: "contact".to_string(),
            top: 1400,
            height: 500,
        },
    ]
}

// ── Nav menu ────────────────────────────────────────────────────

#[test]
fn menu_toggle_swaps_icon() {
    let mut menu = NavMenu::default();
    assert!(!menu.is_open());
    assert_eq!(menu.icon(), "fa-bars");

    menu.toggle();
    assert!(menu.is_open());
    assert_eq!(menu.icon(), "fa-times");

    menu.toggle();
    assert_eq!(menu.icon(), "fa-bars");
}

#[test]
fn menu_close_is_idempotent() {
    let mut menu = NavMenu::default();
    menu.toggle();
    menu.close();
    menu.close();
    assert!(!menu.is_open());
}

// ── Smooth scroll targeting ─────────────────────────────────────

#[test]
fn scroll_target_compensates_header() {
    let sections = sections();
    assert_eq!(scroll_target("#skills", &sections), Some(520));
    assert_eq!(scroll_target("#contact", &sections), Some(1320));
}

#[test]
fn scroll_target_clamps_at_page_top() {
    let sections = sections();
    assert_eq!(scroll_target("#about", &sections), Some(0));
}

#[test]
fn scroll_target_skips_download_links() {
    let sections = sections();
    assert_eq!(scroll_target("#download/source.zip", &sections), None);
}

#[test]
fn scroll_target_ignores_external_and_unknown() {
    let sections = sections();
    assert_eq!(scroll_target("https://example.com", &sections), None);
    assert_eq!(scroll_target("#nowhere", &sections), None);
}

// ── Scroll spy ──────────────────────────────────────────────────

#[test]
fn active_section_follows_scroll() {
    let sections = sections();
    assert_eq!(active_section(0, &sections), Some("about"));
    // Probe sits 100px below the scroll position.
    assert_eq!(active_section(500, &sections), Some("skills"));
    assert_eq!(active_section(1399, &sections), Some("contact"));
}

#[test]
fn active_section_none_past_last() {
    let sections = sections();
    assert_eq!(active_section(2000, &sections), None);
}

#[test]
fn reveal_threshold() {
    assert!(!should_reveal(0.0));
    assert!(!should_reveal(0.05));
    assert!(should_reveal(0.1));
    assert!(should_reveal(1.0));
}

// ── Contact form ────────────────────────────────────────────────

#[test]
fn contact_form_requires_all_fields() {
    let form = ContactForm {
        name: "Ada".to_string(),
        email: String::new(),
        message: "Hi".to_string(),
    };
    assert!(form.submit().is_err());

    let form = ContactForm {
        name: "   ".to_string(),
        email: "ada@example.com".to_string(),
        message: "Hi".to_string(),
    };
    assert!(form.submit().is_err());
}

#[test]
fn contact_form_acknowledges_by_name() {
    let form = ContactForm {
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        message: "Hi".to_string(),
    };
    let ack = form.submit().unwrap();
    assert!(ack.contains("Ada"));
}

// ── Download counter ────────────────────────────────────────────

#[test]
fn download_counter_persists_across_loads() {
    let path = std::env::temp_dir().join(format!("folio_counter_{}.json", std::process::id()));
    let _ = std::fs::remove_file(&path);

    let mut counter = DownloadCounter::load(&path);
    assert_eq!(counter.count(), 0);
    assert_eq!(counter.label(), "Download All Code (0)");

    counter.increment().unwrap();
    counter.increment().unwrap();
    assert_eq!(counter.count(), 2);

    let reloaded = DownloadCounter::load(&path);
    assert_eq!(reloaded.count(), 2);
    assert_eq!(reloaded.label(), "Download All Code (2)");

    let _ = std::fs::remove_file(&path);
}

#[test]
fn download_counter_ignores_corrupt_file() {
    let path = std::env::temp_dir().join(format!("folio_corrupt_{}.json", std::process::id()));
    std::fs::write(&path, b"not json").unwrap();

    let counter = DownloadCounter::load(&path);
    assert_eq!(counter.count(), 0);

    let _ = std::fs::remove_file(&path);
}

// ── Results panel rendering ─────────────────────────────────────

#[test]
fn render_cards_empty() {
    assert_eq!(render_cards(&[]), "No projects yet.");
}

#[test]
fn render_cards_one_per_record() {
    let projects = vec![
        Project {
            id: 1,
            title: "Alpha".to_string(),
            description: "First".to_string(),
            image: String::new(),
            demo_url: String::new(),
            github_url: String::new(),
            tags: vec!["rust".to_string()],
            featured: true,
            created_at: "2024-01-01".to_string(),
        },
        Project {
            id: 2,
            title: "Beta".to_string(),
            description: String::new(),
            image: String::new(),
            demo_url: String::new(),
            github_url: String::new(),
            tags: vec![],
            featured: false,
            created_at: "2024-02-01".to_string(),
        },
    ];

    let out = render_cards(&projects);
    assert!(out.contains("Alpha (#1)"));
    assert!(out.contains("tags: rust"));
    assert!(out.contains("featured"));
    assert!(out.contains("Beta (#2)"));
    assert!(out.contains("added 2024-02-01"));
}
