//! TUI rendering for Folio using ratatui.

mod clipboard;
mod input;
mod page;
mod text;
mod theme;

pub use clipboard::SystemClipboard;
pub use input::{InputPump, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph},
};

use folio_engine::content::{BRAND, CERTIFICATE};
use folio_engine::{App, Focus, SectionId, ToastKind};

use self::text::wrap;

/// Terminals narrower than this get the collapsed menu.
const NAV_MIN_WIDTH: u16 = 80;
const TOAST_WIDTH: u16 = 44;

/// Main draw function.
///
/// Measures the page at the frame width, installs the layout on `app`
/// (which runs the reveal pass), then renders from the updated state.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let options = app.ui_options();
    let palette = palette(options, app.theme_mode());
    let glyphs = glyphs(options);
    let area = frame.area();
    frame.render_widget(Block::default().style(styles::base(&palette)), area);

    let [header_area, body_area, status_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(area);

    let page = page::build(app, body_area.width, &palette, &glyphs);
    app.update_layout(page.layout.clone(), body_area.height);

    draw_header(frame, app, header_area, &palette, &glyphs);
    draw_body(frame, app, &page, body_area, &palette);
    draw_status_bar(frame, app, status_area, &palette);
    draw_toast(frame, app, body_area, &palette, &glyphs);

    match app.focus() {
        Focus::Menu { selected } => draw_menu(frame, selected, body_area, &palette, &glyphs),
        Focus::CertificateModal => draw_certificate(frame, area, &palette),
        Focus::Page | Focus::Form(_) | Focus::Faq => {}
    }
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let bg = if app.header_scrolled() {
        palette.bg_panel
    } else {
        palette.bg
    };
    let mut spans = vec![
        Span::styled(format!(" {} ", glyphs.brand), Style::default().fg(palette.primary)),
        Span::styled(BRAND, styles::heading(palette)),
        Span::raw("  "),
    ];

    if area.width >= NAV_MIN_WIDTH {
        for (index, section) in SectionId::NAV.iter().enumerate() {
            spans.push(Span::styled((index + 1).to_string(), styles::key_highlight(palette)));
            spans.push(Span::styled(
                format!(" {}  ", section.nav_label()),
                Style::default().fg(palette.text_muted),
            ));
        }
    } else {
        spans.push(Span::styled("[m]", styles::key_highlight(palette)));
        spans.push(Span::styled(" Menu", styles::key_hint(palette)));
    }

    // The glyph of the mode a toggle would switch to.
    let target = if app.theme_mode().is_dark() {
        glyphs.sun
    } else {
        glyphs.moon
    };
    let header = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(header, area);
    let toggle = Paragraph::new(Line::from(vec![
        Span::styled("[t] ", styles::key_hint(palette)),
        Span::styled(format!("{target} "), Style::default().fg(palette.primary)),
    ]))
    .alignment(Alignment::Right)
    .style(Style::default().bg(bg));
    frame.render_widget(toggle, area);
}

fn draw_body(frame: &mut Frame, app: &App, page: &page::Page, area: Rect, palette: &Palette) {
    let offset = app.scroll_offset();
    let lines = page.visible_lines(app, offset, area.height);
    frame.render_widget(Paragraph::new(lines).style(styles::base(palette)), area);

    if matches!(app.focus(), Focus::Form(_))
        && let Some((row, column)) = page.cursor
        && row >= offset
        && row - offset < area.height
        && column < area.width
    {
        frame.set_cursor_position(Position::new(area.x + column, area.y + (row - offset)));
    }
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let line = if let Some(status) = app.status() {
        Line::from(Span::styled(
            format!(" {status}"),
            Style::default().fg(palette.warning),
        ))
    } else {
        let hints: &[(&str, &str)] = match app.focus() {
            Focus::Page => &[
                ("q", "quit"),
                ("j/k", "scroll"),
                ("1-6", "jump"),
                ("c", "contact"),
                ("f", "faq"),
                ("t", "theme"),
                ("s", "share"),
            ],
            Focus::Form(_) => &[
                ("Tab", "next"),
                ("S-Tab", "prev"),
                ("Enter", "next/send"),
                ("C-s", "send"),
                ("Esc", "leave"),
            ],
            Focus::Faq => &[("Up/Down", "move"), ("Enter", "toggle"), ("Esc", "leave")],
            Focus::CertificateModal => &[("Esc", "close")],
            Focus::Menu { .. } => &[("Up/Down", "move"), ("Enter", "go"), ("Esc", "close")],
        };
        let mut spans = vec![Span::raw(" ")];
        for (key, action) in hints {
            spans.push(Span::styled(*key, styles::key_highlight(palette)));
            spans.push(Span::styled(format!(" {action}  "), styles::key_hint(palette)));
        }
        Line::from(spans)
    };
    frame.render_widget(
        Paragraph::new(line).style(Style::default().bg(palette.bg_panel)),
        area,
    );
}

fn draw_toast(frame: &mut Frame, app: &App, body: Rect, palette: &Palette, glyphs: &Glyphs) {
    let Some(toast) = app.current_toast() else {
        return;
    };
    let width = TOAST_WIDTH.min(body.width.saturating_sub(2));
    if width < 12 {
        return;
    }
    let (color, icon) = match toast.kind() {
        ToastKind::Success => (palette.success, glyphs.success),
        ToastKind::Info => (palette.accent, glyphs.info),
        ToastKind::Warning => (palette.warning, glyphs.warning),
    };

    let inner_width = usize::from(width.saturating_sub(2));
    let mut lines = vec![Line::from(vec![
        Span::styled(format!("{icon} "), Style::default().fg(color)),
        Span::styled(
            toast.title().to_string(),
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        ),
    ])];
    for line in wrap(toast.description(), inner_width).into_iter().take(3) {
        lines.push(Line::from(Span::styled(line, styles::muted(palette))));
    }

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX) + 2;
    if height > body.height {
        return;
    }
    let rect = Rect::new(
        body.x + body.width - width - 1,
        body.y + body.height - height,
        width,
        height,
    );
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(palette.bg_panel));
    frame.render_widget(Clear, rect);
    frame.render_widget(Paragraph::new(lines).block(block), rect);
}

fn draw_menu(frame: &mut Frame, selected: usize, body: Rect, palette: &Palette, glyphs: &Glyphs) {
    let width = 24.min(body.width);
    let height = (u16::try_from(SectionId::NAV.len()).unwrap_or(0) + 2).min(body.height);
    let rect = Rect::new(body.x + body.width - width, body.y, width, height);

    let lines: Vec<Line> = SectionId::NAV
        .iter()
        .enumerate()
        .map(|(index, section)| {
            let is_selected = index == selected;
            let marker = if is_selected { glyphs.selected } else { " " };
            let style = if is_selected {
                styles::focused(palette).bg(palette.bg_highlight)
            } else {
                Style::default().fg(palette.text)
            };
            Line::from(vec![
                Span::styled(format!("{marker} "), styles::focused(palette)),
                Span::styled(format!("{:02}. ", index + 1), styles::kicker(palette)),
                Span::styled(section.nav_label(), style),
            ])
        })
        .collect();

    let block = Block::bordered()
        .title(" Menu ")
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.primary))
        .style(Style::default().bg(palette.bg_panel));
    frame.render_widget(Clear, rect);
    frame.render_widget(Paragraph::new(lines).block(block), rect);
}

fn draw_certificate(frame: &mut Frame, area: Rect, palette: &Palette) {
    let width = 52.min(area.width.saturating_sub(2));
    let height = 10.min(area.height.saturating_sub(2));
    let rect = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );

    let [title, name, role, issuer] = CERTIFICATE.full;
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(title, styles::kicker(palette))),
        Line::default(),
        Line::from(Span::styled(name, styles::heading(palette))),
        Line::from(Span::styled(role, Style::default().fg(palette.text))),
        Line::from(Span::styled(issuer, styles::muted(palette))),
        Line::default(),
        Line::from(Span::styled("Esc to close", styles::key_hint(palette))),
    ];

    let block = Block::bordered()
        .title(format!(" {} ", CERTIFICATE.heading))
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(palette.primary))
        .style(Style::default().bg(palette.bg_panel));
    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        rect,
    );
}
