//! Row geometry of the rendered page.
//!
//! The TUI measures each section at the current width and hands the result
//! to [`crate::App::update_layout`]. Everything here is in page rows, with
//! row 0 at the top of the hero.

use crate::section::SectionId;

/// A half-open run of rows `[top, top + height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowSpan {
    pub top: u16,
    pub height: u16,
}

impl RowSpan {
    #[must_use]
    pub const fn new(top: u16, height: u16) -> Self {
        Self { top, height }
    }

    #[must_use]
    pub const fn bottom(self) -> u16 {
        self.top.saturating_add(self.height)
    }

    /// Rows shared with `other`.
    #[must_use]
    pub fn overlap(self, other: Self) -> u16 {
        let top = self.top.max(other.top);
        let bottom = self.bottom().min(other.bottom());
        bottom.saturating_sub(top)
    }
}

/// Fraction of `target` that lies inside `viewport`, in `0.0..=1.0`.
///
/// An empty target never intersects.
#[must_use]
pub fn intersection_ratio(target: RowSpan, viewport: RowSpan) -> f32 {
    if target.height == 0 {
        return 0.0;
    }
    f32::from(target.overlap(viewport)) / f32::from(target.height)
}

/// Visible fraction used by the reveal pass.
///
/// A target that fills the whole viewport counts as fully visible, so a
/// section taller than the viewport still reaches its threshold.
#[must_use]
pub fn reveal_ratio(target: RowSpan, viewport: RowSpan) -> f32 {
    if viewport.height > 0 && target.overlap(viewport) == viewport.height {
        return 1.0;
    }
    intersection_ratio(target, viewport)
}

/// Interactive regions the app scrolls into view when they take focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    ContactForm,
    Faq,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLayout {
    sections: Vec<(SectionId, RowSpan)>,
    project_cards: Vec<RowSpan>,
    anchors: Vec<(Anchor, RowSpan)>,
}

impl PageLayout {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a section below the previous one and return its span.
    pub fn push_section(&mut self, id: SectionId, height: u16) -> RowSpan {
        let span = RowSpan::new(self.content_height(), height);
        self.sections.push((id, span));
        span
    }

    /// Record a project card at absolute page rows.
    pub fn push_project_card(&mut self, span: RowSpan) {
        self.project_cards.push(span);
    }

    pub fn set_anchor(&mut self, anchor: Anchor, span: RowSpan) {
        self.anchors.retain(|(existing, _)| *existing != anchor);
        self.anchors.push((anchor, span));
    }

    #[must_use]
    pub fn anchor(&self, anchor: Anchor) -> Option<RowSpan> {
        self.anchors
            .iter()
            .find(|(existing, _)| *existing == anchor)
            .map(|(_, span)| *span)
    }

    #[must_use]
    pub fn section(&self, id: SectionId) -> Option<RowSpan> {
        self.sections
            .iter()
            .find(|(section, _)| *section == id)
            .map(|(_, span)| *span)
    }

    pub fn sections(&self) -> impl Iterator<Item = (SectionId, RowSpan)> + '_ {
        self.sections.iter().copied()
    }

    #[must_use]
    pub fn project_cards(&self) -> &[RowSpan] {
        &self.project_cards
    }

    #[must_use]
    pub fn content_height(&self) -> u16 {
        self.sections.last().map_or(0, |(_, span)| span.bottom())
    }
}
