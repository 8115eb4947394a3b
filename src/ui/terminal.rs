//! Plain-text front-end.
//!
//! `TerminalRenderer` writes frames as text lines and `parse_command`
//! maps typed commands to `UiEvent`s.

use std::io::Write;

use super::screen::{Button, UiEvent};
use crate::cards::{Card, Element};
use crate::core::{Side, SideMap};
use crate::rules::WinTally;
use crate::services::{CardSlot, Renderer, ServiceError, TextStyle};

/// Renders frames as lines of text.
pub struct TerminalRenderer<W: Write> {
    out: W,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn draw_card(&mut self, slot: CardSlot, card: &Card) -> Result<(), ServiceError> {
        match slot {
            CardSlot::Hand(i) => writeln!(self.out, "  {}) {}", i + 1, card)?,
            CardSlot::Battle(Side::Player) => writeln!(self.out, "  You played:      {}", card)?,
            CardSlot::Battle(Side::Opponent) => writeln!(self.out, "  Opponent played: {}", card)?,
        }
        Ok(())
    }

    fn draw_text(&mut self, text: &str, style: TextStyle) -> Result<(), ServiceError> {
        match style {
            TextStyle::Title => writeln!(self.out, "== {} ==", text)?,
            TextStyle::Body => writeln!(self.out, "{}", text)?,
            TextStyle::Highlight => writeln!(self.out, "** {} **", text)?,
            TextStyle::Button => writeln!(self.out, "[{}]", text)?,
        }
        Ok(())
    }

    fn draw_tallies(&mut self, tallies: &SideMap<WinTally>) -> Result<(), ServiceError> {
        writeln!(self.out, "{}", tallies[Side::Player])?;
        writeln!(self.out, "Opponent {}", tallies[Side::Opponent])?;
        Ok(())
    }

    fn present(&mut self) -> Result<(), ServiceError> {
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Map a typed command to an event.
///
/// Numbers select hand cards (1-based), element names nominate, and
/// button labels click.
#[must_use]
pub fn parse_command(line: &str) -> Option<UiEvent> {
    let word = line.trim().to_ascii_lowercase();
    if let Ok(n) = word.parse::<usize>() {
        return n.checked_sub(1).map(UiEvent::SelectCard);
    }
    if let Some(element) = Element::parse(&word) {
        return Some(UiEvent::Nominate(element));
    }
    let button = match word.as_str() {
        "play" | "p" => Button::Play,
        "rules" | "r" => Button::Rules,
        "quit" | "q" => Button::Quit,
        "back" | "b" => Button::Back,
        "reset" => Button::Reset,
        "exit" => return Some(UiEvent::Close),
        _ => return None,
    };
    Some(UiEvent::Click(button))
}
