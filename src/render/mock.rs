//! Recording presenter for testing

use super::{CardView, Presenter};

/// Presenter that records what it was asked to draw
///
/// Useful for testing sessions without a terminal. The tag options list is
/// append-only, like a real filter control.
#[derive(Debug, Clone, Default)]
pub struct RecordingPresenter {
    /// Cards drawn by the latest render
    pub cards: Vec<CardView>,
    /// Whether the latest render showed the empty state
    pub showing_empty: bool,
    /// Every tag option ever offered, in offer order
    pub tag_options: Vec<String>,
    /// Number of full redraws
    pub renders: usize,
}

impl RecordingPresenter {
    /// Names of the cards currently drawn
    #[must_use]
    pub fn card_names(&self) -> Vec<&str> {
        self.cards.iter().map(|c| c.name.as_str()).collect()
    }
}

impl Presenter for RecordingPresenter {
    fn clear(&mut self) {
        self.cards.clear();
        self.showing_empty = false;
        self.renders += 1;
    }

    fn render_card(&mut self, card: &CardView) {
        self.cards.push(card.clone());
    }

    fn render_empty(&mut self) {
        self.showing_empty = true;
    }

    fn offer_tags(&mut self, tags: &[String]) {
        self.tag_options.extend(tags.iter().cloned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RenderInstructions;
    use crate::testing::entry;

    #[test]
    fn test_recording_presenter_replaces_cards() {
        let mut presenter = RecordingPresenter::default();
        let first = RenderInstructions {
            cards: vec![CardView::from_entry(&entry("a", &[]), 3)],
            empty: false,
            new_tag_options: vec![],
        };
        let second = RenderInstructions {
            cards: vec![CardView::from_entry(&entry("b", &[]), 3)],
            empty: false,
            new_tag_options: vec![],
        };

        presenter.render(&first);
        presenter.render(&second);

        assert_eq!(presenter.card_names(), vec!["b"]);
        assert_eq!(presenter.renders, 2);
    }

    #[test]
    fn test_recording_presenter_accumulates_tag_options() {
        let mut presenter = RecordingPresenter::default();
        presenter.offer_tags(&["a".to_string()]);
        presenter.offer_tags(&["b".to_string()]);

        assert_eq!(presenter.tag_options, vec!["a", "b"]);
    }
}
