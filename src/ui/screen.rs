//! Screens, buttons and input events.

use crate::cards::Element;

/// The screen currently shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    MainMenu,
    Rules,
    Match,
}

/// Clickable buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Button {
    Play,
    Rules,
    Quit,
    Back,
    Reset,
}

impl Button {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Button::Play => "Play",
            Button::Rules => "Rules",
            Button::Quit => "Quit",
            Button::Back => "Back",
            Button::Reset => "Reset",
        }
    }
}

/// Input from the front-end, already mapped from raw device input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiEvent {
    /// A button was clicked.
    Click(Button),
    /// A card in the hand was clicked.
    SelectCard(usize),
    /// An element button was clicked while a Wild choice is pending.
    Nominate(Element),
    /// The window was closed.
    Close,
}
