//! Per-section reveal wiring.
//!
//! Each section mounts one observation according to its
//! [`RevealPolicy`]. An intersection pass turns the current layout and
//! viewport into ratio reports.

use std::collections::BTreeMap;

use folio_types::{Observation, Reported, RevealObserver};
use tracing::debug;

use crate::layout::{PageLayout, RowSpan, reveal_ratio};
use crate::section::{RevealPolicy, SectionId};

#[derive(Debug)]
pub struct PageReveals {
    observer: RevealObserver<SectionId>,
    mounted: BTreeMap<SectionId, Observation<SectionId>>,
}

impl PageReveals {
    /// Mount every section's observation.
    #[must_use]
    pub fn mount_all() -> Self {
        let mut reveals = Self {
            observer: RevealObserver::new(),
            mounted: BTreeMap::new(),
        };
        for section in SectionId::ALL {
            reveals.mount(section);
        }
        reveals
    }

    /// (Re)mount a section. A remounted section starts hidden again unless
    /// its policy reveals it immediately.
    pub fn mount(&mut self, section: SectionId) {
        let observation = match section.reveal_policy() {
            RevealPolicy::Immediate => self.observer.observe_revealed(section),
            RevealPolicy::Section(threshold) => self.observer.observe(section, threshold),
            RevealPolicy::Cards(threshold) => self.observer.observe_children(section, threshold),
            RevealPolicy::Static => return,
        };
        self.mounted.insert(section, observation);
    }

    /// Stop observing a section. Returns `false` if it was not mounted.
    pub fn unmount(&mut self, section: SectionId) -> bool {
        self.mounted.remove(&section).is_some()
    }

    #[must_use]
    pub fn is_observing(&self, section: SectionId) -> bool {
        self.observer.is_observing(&section)
    }

    #[must_use]
    pub fn is_revealed(&self, section: SectionId) -> bool {
        if section.reveal_policy() == RevealPolicy::Static {
            return true;
        }
        self.mounted
            .get(&section)
            .is_some_and(Observation::is_visible)
    }

    #[must_use]
    pub fn is_card_revealed(&self, section: SectionId, index: usize) -> bool {
        self.mounted
            .get(&section)
            .is_some_and(|observation| observation.is_child_visible(index))
    }

    /// Report every observed target's visible fraction of `viewport`.
    ///
    /// Returns the sections that revealed something during this pass, in
    /// page order.
    pub fn observe_viewport(&mut self, layout: &PageLayout, viewport: RowSpan) -> Vec<SectionId> {
        let mut revealed = Vec::new();
        for (section, span) in layout.sections() {
            let fired = match section.reveal_policy() {
                RevealPolicy::Section(_) => {
                    let ratio = reveal_ratio(span, viewport);
                    self.observer.report(&section, ratio) == Reported::Revealed
                }
                RevealPolicy::Cards(_) => {
                    let mut any = false;
                    for (index, card) in layout.project_cards().iter().enumerate() {
                        let ratio = reveal_ratio(*card, viewport);
                        if self.observer.report_child(&section, index, ratio) == Reported::Revealed
                        {
                            debug!(%section, index, ratio, "Card revealed");
                            any = true;
                        }
                    }
                    any
                }
                RevealPolicy::Immediate | RevealPolicy::Static => false,
            };
            if fired {
                debug!(%section, "Section revealed");
                revealed.push(section);
            }
        }
        revealed
    }
}
