//! Application state for the Folio page.
//!
//! [`App`] owns everything the TUI reads to render a frame and every
//! transition a key press can trigger. It never touches the terminal.
//!
//! # Frame contract
//!
//! 1. The TUI measures the page at the current width and calls
//!    [`App::update_layout`], which clamps scrolling and runs the reveal
//!    intersection pass.
//! 2. It renders from the accessors.
//! 3. Input handlers call the transition methods, or [`App::form_mode`]
//!    while the contact form has focus.
//! 4. [`App::tick`] ages toasts, the status line, and meter fills.

mod form;

use std::time::Duration;

use folio_config::{PreferenceStore, ThemePreference};
use folio_types::ui::{EffectTimer, Notify, Toast, ToastQueue, UiOptions};
use folio_types::{ContactForm, ThemeMode};
use tracing::{debug, info, warn};

use crate::content::{COMPLETED_PROJECTS, FAQS, SKILLS, share_text};
use crate::faq::Accordion;
use crate::focus::{Focus, FormFocus};
use crate::layout::{Anchor, PageLayout, RowSpan};
use crate::reveal::PageReveals;
use crate::section::SectionId;
use crate::share::Clipboard;
use crate::skills::SkillMeters;

pub use form::{FormMode, FormToken};

const STATUS_LIFETIME: Duration = Duration::from_secs(5);
/// Rows scrolled before the header switches to its compact style.
const HEADER_SCROLL_ROWS: u16 = 2;

/// Everything [`App::new`] needs from the outside world.
pub struct AppInit {
    pub options: UiOptions,
    pub site_url: String,
    pub preferences: Box<dyn PreferenceStore>,
    pub clipboard: Box<dyn Clipboard>,
}

#[derive(Debug, Clone, Copy, Default)]
struct ScrollView {
    offset: u16,
    viewport: u16,
    content: u16,
}

impl ScrollView {
    fn max_offset(self) -> u16 {
        self.content.saturating_sub(self.viewport)
    }

    fn set_offset(&mut self, offset: u16) {
        self.offset = offset.min(self.max_offset());
    }

    fn scroll_by(&mut self, delta: i32) {
        let target = i32::from(self.offset).saturating_add(delta).max(0);
        self.set_offset(u16::try_from(target).unwrap_or(u16::MAX));
    }

    fn page(self) -> i32 {
        i32::from(self.viewport.saturating_sub(1).max(1))
    }

    fn visible(self) -> RowSpan {
        RowSpan::new(self.offset, self.viewport)
    }

    fn bring_into_view(&mut self, span: RowSpan) {
        if span.top < self.offset {
            self.set_offset(span.top);
        } else if span.bottom() > self.offset.saturating_add(self.viewport) {
            let align_bottom = span.bottom().saturating_sub(self.viewport);
            self.set_offset(align_bottom.min(span.top));
        }
    }
}

#[derive(Debug)]
struct StatusLine {
    message: String,
    timer: EffectTimer,
}

struct AppUi {
    focus: Focus,
    scroll: ScrollView,
    toasts: ToastQueue,
    status: Option<StatusLine>,
    options: UiOptions,
    should_quit: bool,
}

struct Page {
    layout: PageLayout,
    reveals: PageReveals,
    form: ContactForm,
    faq: Accordion,
    certificate_expanded: bool,
    selected_project: usize,
    skills: SkillMeters,
}

pub struct App {
    ui: AppUi,
    page: Page,
    theme: ThemePreference<Box<dyn PreferenceStore>>,
    clipboard: Box<dyn Clipboard>,
    site_url: String,
}

impl App {
    #[must_use]
    pub fn new(init: AppInit) -> Self {
        let theme = ThemePreference::load(init.preferences);
        info!(theme = %theme.mode(), site = %init.site_url, "Starting folio");
        Self {
            ui: AppUi {
                focus: Focus::Page,
                scroll: ScrollView::default(),
                toasts: ToastQueue::default(),
                status: None,
                options: init.options,
                should_quit: false,
            },
            page: Page {
                layout: PageLayout::new(),
                reveals: PageReveals::mount_all(),
                form: ContactForm::new(),
                faq: Accordion::new(FAQS.len()),
                certificate_expanded: false,
                selected_project: 0,
                skills: SkillMeters::default(),
            },
            theme,
            clipboard: init.clipboard,
            site_url: init.site_url,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.ui.should_quit
    }

    pub fn request_quit(&mut self) {
        self.ui.should_quit = true;
    }

    pub fn ui_options(&self) -> UiOptions {
        self.ui.options
    }

    pub fn focus(&self) -> Focus {
        self.ui.focus
    }

    pub fn site_url(&self) -> &str {
        &self.site_url
    }

    // ------------------------------------------------------------------
    // Frame lifecycle
    // ------------------------------------------------------------------

    /// Install the measured page and run the reveal pass for the new
    /// viewport.
    pub fn update_layout(&mut self, layout: PageLayout, viewport_height: u16) {
        self.ui.scroll.viewport = viewport_height;
        self.ui.scroll.content = layout.content_height();
        self.ui.scroll.set_offset(self.ui.scroll.offset);
        self.page.layout = layout;
        self.observe_viewport();
    }

    fn observe_viewport(&mut self) {
        let viewport = self.ui.scroll.visible();
        for section in self.page.reveals.observe_viewport(&self.page.layout, viewport) {
            if section == SectionId::Skills {
                self.page.skills.start();
            }
        }
    }

    pub fn tick(&mut self, delta: Duration) {
        self.ui.toasts.advance(delta);
        self.page.skills.advance(delta);
        if let Some(status) = self.ui.status.as_mut() {
            status.timer.advance(delta);
            if status.timer.is_finished() {
                self.ui.status = None;
            }
        }
    }

    pub fn layout(&self) -> &PageLayout {
        &self.page.layout
    }

    // ------------------------------------------------------------------
    // Scrolling and navigation
    // ------------------------------------------------------------------

    pub fn scroll_offset(&self) -> u16 {
        self.ui.scroll.offset
    }

    pub fn viewport_height(&self) -> u16 {
        self.ui.scroll.viewport
    }

    /// Whether the header should use its compact, scrolled style.
    pub fn header_scrolled(&self) -> bool {
        self.ui.scroll.offset > HEADER_SCROLL_ROWS
    }

    fn scroll_by(&mut self, delta: i32) {
        self.ui.scroll.scroll_by(delta);
        self.observe_viewport();
    }

    pub fn scroll_up(&mut self) {
        self.scroll_by(-1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll_by(1);
    }

    pub fn scroll_page_up(&mut self) {
        self.scroll_by(-self.ui.scroll.page());
    }

    pub fn scroll_page_down(&mut self) {
        self.scroll_by(self.ui.scroll.page());
    }

    pub fn scroll_to_top(&mut self) {
        self.ui.scroll.set_offset(0);
        self.observe_viewport();
    }

    pub fn scroll_to_bottom(&mut self) {
        self.ui.scroll.set_offset(u16::MAX);
        self.observe_viewport();
    }

    /// Put `section` at the top of the viewport (as far as scrolling allows).
    pub fn navigate_to(&mut self, section: SectionId) {
        if let Some(span) = self.page.layout.section(section) {
            debug!(%section, top = span.top, "Navigating");
            self.ui.scroll.set_offset(span.top);
            self.observe_viewport();
        }
        if matches!(self.ui.focus, Focus::Menu { .. }) {
            self.ui.focus = Focus::Page;
        }
    }

    fn bring_into_view(&mut self, anchor: Anchor) {
        if let Some(span) = self.page.layout.anchor(anchor) {
            self.ui.scroll.bring_into_view(span);
            self.observe_viewport();
        }
    }

    // ------------------------------------------------------------------
    // Collapsed navigation menu
    // ------------------------------------------------------------------

    pub fn toggle_menu(&mut self) {
        self.ui.focus = match self.ui.focus {
            Focus::Menu { .. } => Focus::Page,
            _ => Focus::Menu { selected: 0 },
        };
    }

    pub fn menu_select_next(&mut self) {
        if let Focus::Menu { selected } = &mut self.ui.focus {
            *selected = (*selected + 1).min(SectionId::NAV.len() - 1);
        }
    }

    pub fn menu_select_prev(&mut self) {
        if let Focus::Menu { selected } = &mut self.ui.focus {
            *selected = selected.saturating_sub(1);
        }
    }

    /// Navigate to the highlighted item and close the menu.
    pub fn menu_choose(&mut self) {
        if let Focus::Menu { selected } = self.ui.focus
            && let Some(section) = SectionId::NAV.get(selected).copied()
        {
            self.navigate_to(section);
        }
    }

    /// Leave whatever overlay or mode has focus and return to the page.
    pub fn escape(&mut self) {
        if self.ui.focus != Focus::Page {
            debug!(from = ?self.ui.focus, "Focus returned to page");
        }
        self.ui.focus = Focus::Page;
    }

    // ------------------------------------------------------------------
    // Reveal state
    // ------------------------------------------------------------------

    pub fn section_revealed(&self, section: SectionId) -> bool {
        self.page.reveals.is_revealed(section)
    }

    pub fn project_card_revealed(&self, index: usize) -> bool {
        self.page
            .reveals
            .is_card_revealed(SectionId::Projects, index)
    }

    /// Fill fraction of skill meter `index`.
    pub fn skill_progress(&self, index: usize) -> f32 {
        self.page
            .skills
            .progress(index, self.ui.options.reduced_motion)
    }

    pub fn skills_animating(&self) -> bool {
        self.page
            .skills
            .is_animating(SKILLS.len(), self.ui.options.reduced_motion)
    }

    // ------------------------------------------------------------------
    // Theme
    // ------------------------------------------------------------------

    pub fn theme_mode(&self) -> ThemeMode {
        self.theme.mode()
    }

    pub fn preferences(&self) -> &dyn PreferenceStore {
        &**self.theme.store()
    }

    /// Flip the theme. A failed write keeps the new mode for this session
    /// and says so on the status line.
    pub fn toggle_theme(&mut self) {
        if let Err(err) = self.theme.toggle() {
            warn!("Failed to persist theme preference: {err}");
            self.set_status("Theme changed, but the preference could not be saved");
        }
    }

    // ------------------------------------------------------------------
    // Projects
    // ------------------------------------------------------------------

    /// Index into the completed projects of the project the share key acts on.
    pub fn selected_project(&self) -> usize {
        self.page.selected_project
    }

    pub fn select_next_project(&mut self) {
        self.page.selected_project = (self.page.selected_project + 1) % COMPLETED_PROJECTS.len();
    }

    /// Copy the selected project's share text and confirm with a toast.
    pub fn share_selected_project(&mut self) {
        let project = &COMPLETED_PROJECTS[self.page.selected_project];
        let text = share_text(project.title, &self.site_url);
        match self.clipboard.set_text(&text) {
            Ok(()) => {
                info!(project = project.title, "Share link copied");
                self.ui.toasts.notify(Toast::link_copied(text));
            }
            Err(err) => {
                warn!(project = project.title, "Share failed: {err}");
                self.ui.toasts.notify(Toast::share_unavailable());
            }
        }
    }

    // ------------------------------------------------------------------
    // Skills certificate
    // ------------------------------------------------------------------

    pub fn certificate_expanded(&self) -> bool {
        self.page.certificate_expanded
    }

    pub fn toggle_certificate(&mut self) {
        self.page.certificate_expanded = !self.page.certificate_expanded;
        if !self.page.certificate_expanded && self.ui.focus == Focus::CertificateModal {
            self.ui.focus = Focus::Page;
        }
    }

    /// Open the full-size certificate. Only reachable from the expanded card.
    pub fn open_certificate_modal(&mut self) {
        if self.page.certificate_expanded {
            self.ui.focus = Focus::CertificateModal;
        }
    }

    // ------------------------------------------------------------------
    // FAQ
    // ------------------------------------------------------------------

    pub fn faq(&self) -> &Accordion {
        &self.page.faq
    }

    pub fn enter_faq(&mut self) {
        self.ui.focus = Focus::Faq;
        self.bring_into_view(Anchor::Faq);
    }

    pub fn faq_select_next(&mut self) {
        self.page.faq.select_next();
    }

    pub fn faq_select_prev(&mut self) {
        self.page.faq.select_prev();
    }

    pub fn faq_toggle_selected(&mut self) {
        self.page.faq.toggle_selected();
    }

    // ------------------------------------------------------------------
    // Contact form
    // ------------------------------------------------------------------

    pub fn contact_form(&self) -> &ContactForm {
        &self.page.form
    }

    /// Move focus to the first form field.
    pub fn focus_form(&mut self) {
        self.ui.focus = Focus::Form(FormFocus::FIRST);
        self.bring_into_view(Anchor::ContactForm);
    }

    /// Proof that the contact form has focus.
    pub fn form_token(&self) -> Option<FormToken> {
        matches!(self.ui.focus, Focus::Form(_)).then_some(FormToken(()))
    }

    pub fn form_mode(&mut self, _token: FormToken) -> FormMode<'_> {
        FormMode { app: self }
    }

    // ------------------------------------------------------------------
    // Toasts and status
    // ------------------------------------------------------------------

    pub fn current_toast(&self) -> Option<&Toast> {
        self.ui.toasts.current()
    }

    /// Fraction of the visible toast's lifetime already spent.
    pub fn toast_progress(&self) -> Option<f32> {
        self.ui.toasts.current_progress()
    }

    pub fn dismiss_toast(&mut self) {
        self.ui.toasts.dismiss();
    }

    pub fn status(&self) -> Option<&str> {
        self.ui.status.as_ref().map(|status| status.message.as_str())
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.ui.status = Some(StatusLine {
            message: message.into(),
            timer: EffectTimer::new(STATUS_LIFETIME),
        });
    }
}
