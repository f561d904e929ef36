//! End-to-end page journeys through the engine API.

use std::time::Duration;

use folio_config::MemoryStore;
use folio_engine::content::{COMPLETED_PROJECTS, share_text};
use folio_engine::{
    Anchor, App, AppInit, FieldName, Focus, MemoryClipboard, PageLayout, RowSpan, SectionId,
    SubmitOutcome, UiOptions,
};

const VIEWPORT: u16 = 30;
const SITE: &str = "https://example.test";

fn app() -> (App, MemoryClipboard) {
    let clipboard = MemoryClipboard::default();
    let mut app = App::new(AppInit {
        options: UiOptions::default(),
        site_url: SITE.to_string(),
        preferences: Box::new(MemoryStore::new()),
        clipboard: Box::new(clipboard.clone()),
    });
    app.update_layout(layout(), VIEWPORT);
    (app, clipboard)
}

fn layout() -> PageLayout {
    let mut layout = PageLayout::new();
    layout.push_section(SectionId::Hero, 20);
    let projects = layout.push_section(SectionId::Projects, 44);
    for i in 0..4 {
        layout.push_project_card(RowSpan::new(projects.top + 4 + i * 10, 9));
    }
    layout.push_section(SectionId::Skills, 30);
    let services = layout.push_section(SectionId::Services, 40);
    layout.set_anchor(Anchor::Faq, RowSpan::new(services.top + 25, 12));
    layout.push_section(SectionId::Resources, 30);
    let contact = layout.push_section(SectionId::Contact, 50);
    layout.set_anchor(Anchor::ContactForm, RowSpan::new(contact.top + 20, 24));
    layout.push_section(SectionId::Footer, 4);
    layout
}

#[test]
fn menu_jump_reveals_the_destination_only() {
    let (mut app, _) = app();
    assert!(app.section_revealed(SectionId::Hero));
    assert!(!app.section_revealed(SectionId::Contact));

    app.toggle_menu();
    for _ in 0..5 {
        app.menu_select_next();
    }
    app.menu_choose();

    assert_eq!(app.focus(), Focus::Page);
    assert!(app.header_scrolled());
    assert!(app.section_revealed(SectionId::Contact));
    assert!(!app.section_revealed(SectionId::Services));

    // Scrolling back to the top never hides what was already shown.
    app.scroll_to_top();
    assert!(app.section_revealed(SectionId::Contact));
}

#[test]
fn scrolling_through_projects_reveals_cards_one_by_one() {
    let (mut app, _) = app();
    // Hero (0..20) and the first rows of Projects are on screen.
    assert!(app.project_card_revealed(0));
    assert!(!app.project_card_revealed(3));

    while !app.project_card_revealed(3) {
        app.scroll_down();
        assert!(app.scroll_offset() < 64, "card 3 never revealed");
    }
    assert!((0..4).all(|index| app.project_card_revealed(index)));
}

#[test]
fn contact_journey_from_rejection_to_confirmation() {
    let (mut app, _) = app();
    app.focus_form();

    let token = app.form_token().unwrap();
    let outcome = app.form_mode(token).submit();
    assert!(matches!(outcome, SubmitOutcome::Rejected(ref errors) if errors.len() == 4));
    assert!(app.current_toast().is_none());

    for value in ["Aung Aung", "aung@example.com", "Phone repair", "My screen cracked, help!"] {
        let token = app.form_token().unwrap();
        let mut form = app.form_mode(token);
        form.enter_text(value);
        form.focus_next();
    }
    assert_eq!(app.contact_form().error(FieldName::Name), None);

    let token = app.form_token().unwrap();
    assert!(app.form_mode(token).submit().is_sent());
    assert_eq!(app.current_toast().map(|t| t.title()), Some("Message Sent!"));
    assert!(app.contact_form().fields().is_empty());
    assert!(app.contact_form().errors().is_empty());

    app.tick(Duration::from_secs(5));
    assert!(app.current_toast().is_none());
}

#[test]
fn sharing_copies_the_selected_project() {
    let (mut app, clipboard) = app();

    app.share_selected_project();
    assert_eq!(
        clipboard.contents(),
        Some(share_text(COMPLETED_PROJECTS[0].title, SITE))
    );

    app.dismiss_toast();
    app.select_next_project();
    app.share_selected_project();
    let copied = clipboard.contents().unwrap();
    assert!(copied.contains(COMPLETED_PROJECTS[1].title));
    assert!(copied.ends_with(SITE));
    assert_eq!(
        app.current_toast().map(|t| t.title()),
        Some("Link copied to clipboard!")
    );
}
