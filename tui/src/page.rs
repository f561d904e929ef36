//! Builds the scrollable page as a flat list of rows.
//!
//! Rows are produced at the current width before anything is drawn, so the
//! section spans handed to [`App::update_layout`] match what the body
//! renders. Each row remembers which section (or project card) owns it;
//! rows of a section that has not been revealed yet render blank.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use folio_engine::content::{
    BRAND, CERTIFICATE, COMPLETED_PROJECTS, CONTACT_CHANNELS, FAQS, FOOTER_TAGLINE,
    FUTURE_PROJECTS, HERO, Project, RESOURCES, SERVICES, SKILLS, footer_notice,
};
use folio_engine::{Anchor, App, FieldName, Focus, FormFocus, PageLayout, RowSpan, SectionId};

use crate::text::{pad, tail, wrap};
use crate::theme::{Glyphs, Palette, styles};

const MARGIN: usize = 2;
const MESSAGE_ROWS: usize = 4;

/// What decides whether a row is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Owner {
    Section(SectionId),
    Card(usize),
}

pub(crate) struct Row {
    pub line: Line<'static>,
    pub owner: Owner,
}

pub(crate) struct Page {
    pub rows: Vec<Row>,
    pub layout: PageLayout,
    /// Terminal cursor inside the focused form field, as (page row, column).
    pub cursor: Option<(u16, u16)>,
}

impl Page {
    /// Rows `offset..offset + height`, with unrevealed content blanked.
    pub(crate) fn visible_lines(&self, app: &App, offset: u16, height: u16) -> Vec<Line<'static>> {
        self.rows
            .iter()
            .skip(usize::from(offset))
            .take(usize::from(height))
            .map(|row| {
                let shown = match row.owner {
                    Owner::Section(section) => app.section_revealed(section),
                    Owner::Card(index) => app.project_card_revealed(index),
                };
                if shown {
                    row.line.clone()
                } else {
                    Line::default()
                }
            })
            .collect()
    }
}

pub(crate) fn build(app: &App, width: u16, palette: &Palette, glyphs: &Glyphs) -> Page {
    let mut builder = PageBuilder {
        app,
        palette,
        glyphs,
        width: usize::from(width).saturating_sub(MARGIN * 2).max(10),
        rows: Vec::new(),
        layout: PageLayout::new(),
        cursor: None,
        owner: Owner::Section(SectionId::Hero),
    };

    builder.section(SectionId::Hero, PageBuilder::hero);
    builder.section(SectionId::Projects, PageBuilder::projects);
    builder.section(SectionId::Skills, PageBuilder::skills);
    builder.section(SectionId::Services, PageBuilder::services);
    builder.section(SectionId::Resources, PageBuilder::resources);
    builder.section(SectionId::Contact, PageBuilder::contact);
    builder.section(SectionId::Footer, PageBuilder::footer);

    Page {
        rows: builder.rows,
        layout: builder.layout,
        cursor: builder.cursor,
    }
}

struct PageBuilder<'a> {
    app: &'a App,
    palette: &'a Palette,
    glyphs: &'a Glyphs,
    /// Content width, margins excluded.
    width: usize,
    rows: Vec<Row>,
    layout: PageLayout,
    cursor: Option<(u16, u16)>,
    owner: Owner,
}

fn to_row(index: usize) -> u16 {
    u16::try_from(index).unwrap_or(u16::MAX)
}

impl PageBuilder<'_> {
    fn next_row(&self) -> u16 {
        to_row(self.rows.len())
    }

    fn section(&mut self, id: SectionId, body: fn(&mut Self)) {
        let start = self.rows.len();
        self.owner = Owner::Section(id);
        body(self);
        self.layout.push_section(id, to_row(self.rows.len() - start));
    }

    fn push(&mut self, spans: Vec<Span<'static>>) {
        let mut line_spans = vec![Span::raw(" ".repeat(MARGIN))];
        line_spans.extend(spans);
        self.rows.push(Row {
            line: Line::from(line_spans),
            owner: self.owner,
        });
    }

    fn text(&mut self, text: impl Into<String>, style: Style) {
        self.push(vec![Span::styled(text.into(), style)]);
    }

    fn blank(&mut self) {
        self.push(Vec::new());
    }

    /// Wrapped paragraph with every line prefixed by `indent`.
    fn paragraph(&mut self, indent: &str, text: &str, style: Style) {
        let width = self.width.saturating_sub(indent.width());
        for line in wrap(text, width) {
            self.push(vec![Span::raw(indent.to_string()), Span::styled(line, style)]);
        }
    }

    fn heading(&mut self, id: SectionId) {
        let palette = self.palette;
        self.blank();
        if let Some(tagline) = id.tagline() {
            self.text(tagline, styles::kicker(palette));
        }
        self.text(id.heading(), styles::heading(palette));
        if let Some(subtitle) = id.subtitle() {
            self.paragraph("", subtitle, styles::muted(palette));
        }
        self.blank();
    }

    fn subheading(&mut self, text: &str) {
        let style = Style::default()
            .fg(self.palette.secondary)
            .add_modifier(Modifier::BOLD);
        self.text(text.to_string(), style);
    }

    fn rule(&mut self) {
        let rule = self.glyphs.rule.repeat(self.width);
        self.text(rule, Style::default().fg(self.palette.border));
    }

    // ------------------------------------------------------------------
    // Sections
    // ------------------------------------------------------------------

    fn hero(&mut self) {
        let palette = self.palette;
        self.blank();
        self.text(
            format!("{} {}", self.glyphs.brand, HERO.monogram),
            styles::kicker(palette),
        );
        self.text(HERO.name, styles::heading(palette));
        self.text(HERO.roles.join(" | "), Style::default().fg(palette.text));
        self.blank();
        for (label, value) in HERO.stats {
            self.push(vec![
                Span::styled(format!("{label}: "), styles::muted(palette)),
                Span::styled(value, Style::default().fg(palette.secondary)),
            ]);
        }
        self.blank();
        self.push(vec![
            Span::styled("[2]", styles::key_highlight(palette)),
            Span::styled(" View Projects   ", styles::key_hint(palette)),
            Span::styled("[6]", styles::key_highlight(palette)),
            Span::styled(" Contact Me", styles::key_hint(palette)),
        ]);
        self.blank();
    }

    fn projects(&mut self) {
        self.heading(SectionId::Projects);
        self.subheading("Completed Projects");
        for (index, project) in COMPLETED_PROJECTS.iter().enumerate() {
            self.project_card(index, project, true);
        }
        self.subheading("Future Deployments");
        for (offset, project) in FUTURE_PROJECTS.iter().enumerate() {
            self.project_card(COMPLETED_PROJECTS.len() + offset, project, false);
        }
    }

    fn project_card(&mut self, index: usize, project: &Project, shareable: bool) {
        let palette = self.palette;
        let selected = shareable && self.app.selected_project() == index;
        let marker = if selected { self.glyphs.selected } else { " " };
        let start = self.rows.len();
        let section_owner = self.owner;
        self.owner = Owner::Card(index);

        self.push(vec![
            Span::styled(format!("{marker} "), styles::focused(palette)),
            Span::styled(project.title, styles::heading(palette)),
            Span::styled(format!("  {}", project.kind), styles::muted(palette)),
            Span::styled(
                format!("  [{}]", project.status),
                Style::default().fg(palette.secondary),
            ),
        ]);
        self.paragraph("  ", project.description, Style::default().fg(palette.text));
        if !project.tags.is_empty() {
            let tags: Vec<String> = project.tags.iter().map(|tag| format!("#{tag}")).collect();
            self.paragraph("  ", &tags.join(" "), Style::default().fg(palette.accent));
        }
        if selected {
            self.push(vec![
                Span::raw("  "),
                Span::styled("[s]", styles::key_highlight(palette)),
                Span::styled(" Share   ", styles::key_hint(palette)),
                Span::styled("[p]", styles::key_highlight(palette)),
                Span::styled(" Next project", styles::key_hint(palette)),
            ]);
        }

        self.layout
            .push_project_card(RowSpan::new(to_row(start), to_row(self.rows.len() - start)));
        self.owner = section_owner;
        self.blank();
    }

    fn skills(&mut self) {
        let palette = self.palette;
        let glyphs = self.glyphs;
        self.heading(SectionId::Skills);

        let meter_width = self.width.saturating_sub(6).max(4);
        for (index, skill) in SKILLS.iter().enumerate() {
            let progress = self.app.skill_progress(index).clamp(0.0, 1.0);
            let fill = f32::from(skill.level) / 100.0 * progress;
            let filled = ((meter_width as f32) * fill).round() as usize;
            let shown_level = (f32::from(skill.level) * progress).round() as u32;

            let title_width = self.width.saturating_sub(5);
            self.push(vec![
                Span::styled(pad(skill.title, title_width), Style::default().fg(palette.text)),
                Span::styled(format!("{shown_level:>4}%"), styles::focused(palette)),
            ]);
            self.push(vec![
                Span::styled(
                    glyphs.meter_full.repeat(filled),
                    Style::default().fg(palette.secondary),
                ),
                Span::styled(
                    glyphs.meter_empty.repeat(meter_width.saturating_sub(filled)),
                    Style::default().fg(palette.border),
                ),
            ]);
            self.paragraph("", skill.description, styles::muted(palette));
            self.blank();
        }

        let expanded = self.app.certificate_expanded();
        let arrow = if expanded { glyphs.expanded } else { glyphs.collapsed };
        self.push(vec![
            Span::styled("[e] ", styles::key_highlight(palette)),
            Span::styled(format!("{arrow} {}", CERTIFICATE.heading), styles::heading(palette)),
        ]);
        self.paragraph("    ", CERTIFICATE.summary, styles::muted(palette));
        if expanded {
            for line in CERTIFICATE.card {
                self.text(format!("    {} {line}", glyphs.bullet), Style::default().fg(palette.text));
            }
            self.push(vec![
                Span::raw("    "),
                Span::styled("[v]", styles::key_highlight(palette)),
                Span::styled(" View full certificate", styles::key_hint(palette)),
            ]);
        }
        self.blank();
    }

    fn services(&mut self) {
        let palette = self.palette;
        let glyphs = self.glyphs;
        self.heading(SectionId::Services);

        for service in &SERVICES {
            self.push(vec![
                Span::styled(service.title, styles::heading(palette)),
                Span::styled(format!("  {}", service.price), Style::default().fg(palette.secondary)),
            ]);
            self.paragraph("", service.description, Style::default().fg(palette.text));
            for feature in service.features {
                self.push(vec![
                    Span::styled(format!("  {} ", glyphs.check), Style::default().fg(palette.success)),
                    Span::styled(feature, styles::muted(palette)),
                ]);
            }
            self.blank();
        }

        let start = self.next_row();
        self.faq();
        let height = self.next_row() - start;
        self.layout.set_anchor(Anchor::Faq, RowSpan::new(start, height));
    }

    fn faq(&mut self) {
        let palette = self.palette;
        let glyphs = self.glyphs;
        let app = self.app;
        let focused = app.focus() == Focus::Faq;
        let accordion = app.faq();

        self.push(vec![
            Span::styled("Frequently Asked Questions", styles::heading(palette)),
            Span::styled("  [f] browse", styles::key_hint(palette)),
        ]);
        for (index, faq) in FAQS.iter().enumerate() {
            let open = accordion.open_item() == Some(index);
            let selected = focused && accordion.selected() == index;
            let arrow = if open { glyphs.expanded } else { glyphs.collapsed };
            let marker = if selected { glyphs.selected } else { " " };
            let style = if selected {
                styles::focused(palette).bg(palette.bg_highlight)
            } else {
                Style::default().fg(palette.text)
            };
            self.push(vec![
                Span::styled(format!("{marker} "), styles::focused(palette)),
                Span::styled(format!("{arrow} {}", faq.question), style),
            ]);
            if open {
                self.paragraph("    ", faq.answer, styles::muted(palette));
            }
        }
        self.blank();
    }

    fn resources(&mut self) {
        let palette = self.palette;
        let bullet = self.glyphs.bullet;
        self.heading(SectionId::Resources);
        for resource in &RESOURCES {
            self.push(vec![
                Span::styled(format!("{bullet} "), Style::default().fg(palette.secondary)),
                Span::styled(resource.name, styles::heading(palette)),
                Span::styled(format!("  [{}]", resource.category), styles::kicker(palette)),
            ]);
            self.paragraph("  ", resource.description, styles::muted(palette));
            self.text(format!("  {}", resource.url), Style::default().fg(palette.accent));
        }
        self.blank();
    }

    fn contact(&mut self) {
        let palette = self.palette;
        self.heading(SectionId::Contact);

        let label_width = CONTACT_CHANNELS
            .iter()
            .map(|channel| channel.label.width())
            .max()
            .unwrap_or(0);
        for channel in &CONTACT_CHANNELS {
            self.push(vec![
                Span::styled(pad(channel.label, label_width + 2), styles::kicker(palette)),
                Span::styled(channel.value, Style::default().fg(palette.text)),
            ]);
        }
        self.blank();

        let start = self.next_row();
        self.form();
        let height = self.next_row() - start;
        self.layout
            .set_anchor(Anchor::ContactForm, RowSpan::new(start, height));
        self.blank();
    }

    fn form(&mut self) {
        let palette = self.palette;
        let focus = match self.app.focus() {
            Focus::Form(focus) => Some(focus),
            _ => None,
        };

        self.push(vec![
            Span::styled("Send a Message", styles::heading(palette)),
            Span::styled("  [c] start typing", styles::key_hint(palette)),
        ]);
        for field in FieldName::ALL {
            self.form_field(field, focus == Some(FormFocus::Field(field)));
        }

        let send_style = if focus == Some(FormFocus::Send) {
            Style::default()
                .fg(palette.bg)
                .bg(palette.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.primary)
        };
        self.text("[ Send Message ]", send_style);
    }

    fn form_field(&mut self, field: FieldName, focused: bool) {
        let palette = self.palette;
        let [top_left, top_right, bottom_left, bottom_right, horizontal, vertical] =
            self.glyphs.frame;
        let app = self.app;
        let form = app.contact_form();
        let draft = form.draft(field);
        let inner = self.width.saturating_sub(4).max(4);
        let border = if focused {
            Style::default().fg(palette.primary)
        } else {
            Style::default().fg(palette.border)
        };
        let label_style = if focused {
            styles::focused(palette)
        } else {
            Style::default().fg(palette.text)
        };

        self.text(field.label(), label_style);
        self.text(
            format!("{top_left}{}{top_right}", horizontal.repeat(inner + 2)),
            border,
        );

        let mut rows: Vec<String> = draft.text().split('\n').map(str::to_string).collect();
        let placeholder = draft.text().is_empty();
        if placeholder {
            rows = vec![field.placeholder().to_string()];
        }
        let min_rows = if field.is_multiline() { MESSAGE_ROWS } else { 1 };
        while rows.len() < min_rows {
            rows.push(String::new());
        }

        // Keep the cursor in view by showing the tail of the cursor's line.
        let before = draft.text_before_cursor();
        let cursor_line = before.matches('\n').count();
        let cursor_prefix = before.rsplit('\n').next().unwrap_or("");
        let top = self.rows.len();
        for (index, row) in rows.iter().enumerate() {
            let shown = if index == cursor_line && !placeholder {
                let visible = tail(cursor_prefix, inner.saturating_sub(1));
                let after = &row[cursor_prefix.len().min(row.len())..];
                format!("{visible}{after}")
            } else {
                row.clone()
            };
            let text_style = if placeholder {
                styles::muted(palette)
            } else {
                Style::default().fg(palette.text)
            };
            self.push(vec![
                Span::styled(format!("{vertical} "), border),
                Span::styled(pad(&shown, inner), text_style),
                Span::styled(format!(" {vertical}"), border),
            ]);
        }
        if focused {
            let column = if placeholder {
                0
            } else {
                tail(cursor_prefix, inner.saturating_sub(1)).width()
            };
            let row = to_row(top + cursor_line);
            let col = u16::try_from(MARGIN + 2 + column).unwrap_or(u16::MAX);
            self.cursor = Some((row, col));
        }

        self.text(
            format!("{bottom_left}{}{bottom_right}", horizontal.repeat(inner + 2)),
            border,
        );
        if let Some(error) = form.error(field) {
            self.text(error.to_string(), styles::error(palette));
        }
    }

    fn footer(&mut self) {
        let palette = self.palette;
        self.rule();
        self.push(vec![
            Span::styled(BRAND, styles::heading(palette)),
            Span::styled(format!("  {FOOTER_TAGLINE}"), styles::muted(palette)),
        ]);
        self.push(vec![
            Span::styled(footer_notice(), styles::muted(palette)),
            Span::styled("   [g] ", styles::key_highlight(palette)),
            Span::styled(
                format!("{} Back to top", self.glyphs.arrow_up),
                styles::key_hint(palette),
            ),
        ]);
        self.blank();
    }
}

#[cfg(test)]
mod tests {
    use folio_config::MemoryStore;
    use folio_engine::{App, AppInit, NoClipboard, SectionId, UiOptions};

    use super::{Owner, build};
    use crate::theme::{glyphs, palette};

    fn app() -> App {
        App::new(AppInit {
            options: UiOptions::default(),
            site_url: "https://example.test".to_string(),
            preferences: Box::new(MemoryStore::new()),
            clipboard: Box::new(NoClipboard),
        })
    }

    #[test]
    fn sections_tile_the_page_in_order() {
        let app = app();
        let options = app.ui_options();
        let page = build(&app, 100, &palette(options, app.theme_mode()), &glyphs(options));

        let mut expected_top = 0;
        let sections: Vec<SectionId> = page
            .layout
            .sections()
            .map(|(id, span)| {
                assert_eq!(span.top, expected_top);
                expected_top = span.bottom();
                id
            })
            .collect();
        assert_eq!(sections, SectionId::ALL);
        assert_eq!(usize::from(page.layout.content_height()), page.rows.len());
    }

    #[test]
    fn card_rows_lie_inside_projects() {
        let app = app();
        let options = app.ui_options();
        let page = build(&app, 60, &palette(options, app.theme_mode()), &glyphs(options));

        let projects = page.layout.section(SectionId::Projects).unwrap();
        assert_eq!(page.layout.project_cards().len(), 4);
        for (index, card) in page.layout.project_cards().iter().enumerate() {
            assert!(card.top >= projects.top && card.bottom() <= projects.bottom());
            let row = &page.rows[usize::from(card.top)];
            assert_eq!(row.owner, Owner::Card(index));
        }
    }

    #[test]
    fn narrow_width_makes_a_taller_page() {
        let app = app();
        let options = app.ui_options();
        let palette = palette(options, app.theme_mode());
        let glyphs = glyphs(options);
        let wide = build(&app, 120, &palette, &glyphs).layout.content_height();
        let narrow = build(&app, 40, &palette, &glyphs).layout.content_height();
        assert!(narrow > wide);
    }
}
