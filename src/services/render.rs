//! Render service.
//!
//! Screens are described as a `Frame`: an ordered list of draw items. The
//! front-end hands each item to a `Renderer`. A renderer failure drops the
//! rest of that frame and is logged; it never reaches the match.

use super::ServiceError;
use crate::cards::Card;
use crate::core::{Side, SideMap};
use crate::rules::WinTally;

/// Where a card is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardSlot {
    /// A slot in the human hand.
    Hand(usize),
    /// The card a side put into the battle zone.
    Battle(Side),
}

/// Text emphasis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextStyle {
    /// Screen heading.
    Title,
    /// Plain text.
    Body,
    /// Round results and victory lines.
    Highlight,
    /// A clickable button label.
    Button,
}

/// One thing to draw.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawItem {
    /// A card face.
    Card { slot: CardSlot, card: Card },
    /// A line of text.
    Text { text: String, style: TextStyle },
    /// Both sides' element tallies.
    Tallies(SideMap<WinTally>),
}

/// Ordered draw list for one screen.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    pub items: Vec<DrawItem>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a card.
    pub fn card(&mut self, slot: CardSlot, card: Card) {
        self.items.push(DrawItem::Card { slot, card });
    }

    /// Append a line of text.
    pub fn text(&mut self, text: impl Into<String>, style: TextStyle) {
        self.items.push(DrawItem::Text {
            text: text.into(),
            style,
        });
    }

    pub fn tallies(&mut self, tallies: SideMap<WinTally>) {
        self.items.push(DrawItem::Tallies(tallies));
    }

    /// Text of every text item, in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.items.iter().filter_map(|item| match item {
            DrawItem::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Check if any text item contains `needle`.
    #[must_use]
    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().any(|t| t.contains(needle))
    }
}

/// Draws cards and text.
pub trait Renderer {
    fn draw_card(&mut self, slot: CardSlot, card: &Card) -> Result<(), ServiceError>;

    fn draw_text(&mut self, text: &str, style: TextStyle) -> Result<(), ServiceError>;

    fn draw_tallies(&mut self, tallies: &SideMap<WinTally>) -> Result<(), ServiceError>;

    /// Finish the frame.
    fn present(&mut self) -> Result<(), ServiceError>;
}

/// Renderer that draws nothing.
#[derive(Clone, Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw_card(&mut self, _slot: CardSlot, _card: &Card) -> Result<(), ServiceError> {
        Ok(())
    }

    fn draw_text(&mut self, _text: &str, _style: TextStyle) -> Result<(), ServiceError> {
        Ok(())
    }

    fn draw_tallies(&mut self, _tallies: &SideMap<WinTally>) -> Result<(), ServiceError> {
        Ok(())
    }

    fn present(&mut self) -> Result<(), ServiceError> {
        Ok(())
    }
}

fn draw_frame(renderer: &mut dyn Renderer, frame: &Frame) -> Result<(), ServiceError> {
    for item in &frame.items {
        match item {
            DrawItem::Card { slot, card } => renderer.draw_card(*slot, card)?,
            DrawItem::Text { text, style } => renderer.draw_text(text, *style)?,
            DrawItem::Tallies(tallies) => renderer.draw_tallies(tallies)?,
        }
    }
    renderer.present()
}

/// Draw a frame, logging and skipping it on failure.
///
/// Returns whether the frame was fully presented.
pub fn present_frame(renderer: &mut dyn Renderer, frame: &Frame) -> bool {
    match draw_frame(renderer, frame) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("Skipping frame: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Element;

    #[derive(Default)]
    struct Recording {
        calls: Vec<String>,
        fail_on_text: bool,
    }

    impl Renderer for Recording {
        fn draw_card(&mut self, slot: CardSlot, card: &Card) -> Result<(), ServiceError> {
            self.calls.push(format!("card {:?} {}", slot, card));
            Ok(())
        }

        fn draw_text(&mut self, text: &str, _style: TextStyle) -> Result<(), ServiceError> {
            if self.fail_on_text {
                return Err(ServiceError::Unavailable("font".to_string()));
            }
            self.calls.push(format!("text {}", text));
            Ok(())
        }

        fn draw_tallies(&mut self, _tallies: &SideMap<WinTally>) -> Result<(), ServiceError> {
            self.calls.push("tallies".to_string());
            Ok(())
        }

        fn present(&mut self) -> Result<(), ServiceError> {
            self.calls.push("present".to_string());
            Ok(())
        }
    }

    fn sample_frame() -> Frame {
        let mut frame = Frame::new();
        frame.card(CardSlot::Hand(0), Card::new(Element::Fire, 3).unwrap());
        frame.text("Battle Zone", TextStyle::Title);
        frame.tallies(SideMap::default());
        frame
    }

    #[test]
    fn test_present_in_order() {
        let mut renderer = Recording::default();
        assert!(present_frame(&mut renderer, &sample_frame()));
        assert_eq!(
            renderer.calls,
            vec!["card Hand(0) Fire 3", "text Battle Zone", "tallies", "present"]
        );
    }

    #[test]
    fn test_failure_skips_rest_of_frame() {
        let mut renderer = Recording {
            fail_on_text: true,
            ..Default::default()
        };
        assert!(!present_frame(&mut renderer, &sample_frame()));
        assert_eq!(renderer.calls, vec!["card Hand(0) Fire 3"]);
    }

    #[test]
    fn test_null_renderer_accepts_everything() {
        assert!(present_frame(&mut NullRenderer, &sample_frame()));
    }

    #[test]
    fn test_frame_text_queries() {
        let frame = sample_frame();
        assert!(frame.contains_text("Battle"));
        assert!(!frame.contains_text("Rules"));
        assert_eq!(frame.texts().count(), 1);
    }
}
