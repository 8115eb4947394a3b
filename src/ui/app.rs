//! Screen-flow controller.
//!
//! `App` owns the match and the external services and routes UI events:
//!
//! ```text
//! MainMenu --Play--> (cutscene) --> Match
//! MainMenu --Rules--> Rules --Back--> MainMenu
//! MainMenu --Quit--> stopped
//! Match: cards, Wild nominations, Reset, Quit
//! ```
//!
//! Events that make no sense on the current screen or in the current
//! match phase are ignored.

use super::screen::{Button, Screen, UiEvent};
use super::text;
use crate::cards::Element;
use crate::core::{GameRng, MatchConfig, MatchPhase, RandomSource, Side};
use crate::game::Match;
use crate::services::{
    play_or_skip, victory_message, CardSlot, FlavorText, Frame, MediaPlayer, TextStyle,
};

/// The game front-end state.
pub struct App<R: RandomSource = GameRng> {
    screen: Screen,
    game: Match<R>,
    media: Box<dyn MediaPlayer>,
    flavor: Box<dyn FlavorText>,
    winner_text: Option<String>,
    running: bool,
}

impl App<GameRng> {
    /// Create an app around a fresh match.
    pub fn new(
        config: MatchConfig,
        media: Box<dyn MediaPlayer>,
        flavor: Box<dyn FlavorText>,
    ) -> Self {
        Self::with_match(Match::new(config), media, flavor)
    }
}

impl<R: RandomSource> App<R> {
    /// Create an app around an existing match.
    pub fn with_match(
        game: Match<R>,
        media: Box<dyn MediaPlayer>,
        flavor: Box<dyn FlavorText>,
    ) -> Self {
        Self {
            screen: Screen::MainMenu,
            game,
            media,
            flavor,
            winner_text: None,
            running: true,
        }
    }

    /// Start the background music.
    pub fn start(&mut self) {
        let music = self.game.config().assets.music.clone();
        if let Err(e) = self.media.play_loop(&music) {
            log::warn!("Music unavailable ({}), continuing without it", e);
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn game(&self) -> &Match<R> {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut Match<R> {
        &mut self.game
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The victory line, once the match is over.
    pub fn winner_text(&self) -> Option<&str> {
        self.winner_text.as_deref()
    }

    /// Route one input event.
    pub fn handle(&mut self, event: UiEvent) {
        if event == UiEvent::Close {
            self.quit();
            return;
        }

        match (self.screen, event) {
            (Screen::MainMenu, UiEvent::Click(Button::Play)) => {
                let cutscene = self.game.config().assets.cutscene.clone();
                play_or_skip(self.media.as_mut(), &cutscene);
                self.screen = Screen::Match;
            }
            (Screen::MainMenu, UiEvent::Click(Button::Rules)) => self.screen = Screen::Rules,
            (Screen::MainMenu, UiEvent::Click(Button::Quit)) => self.quit(),
            (Screen::Rules, UiEvent::Click(Button::Back)) => self.screen = Screen::MainMenu,
            (Screen::Match, UiEvent::SelectCard(index)) => {
                if let Err(e) = self.game.play_card(index) {
                    log::debug!("Ignoring card {}: {}", index, e);
                }
                self.after_update();
            }
            (Screen::Match, UiEvent::Nominate(element)) => {
                if let Err(e) = self.game.nominate(element) {
                    log::debug!("Ignoring nomination of {}: {}", element, e);
                }
                self.after_update();
            }
            (Screen::Match, UiEvent::Click(Button::Reset)) => {
                self.game.reset();
                self.winner_text = None;
            }
            (Screen::Match, UiEvent::Click(Button::Quit)) => self.quit(),
            (screen, event) => log::debug!("Ignoring {:?} on {:?}", event, screen),
        }
    }

    /// Describe the current screen.
    pub fn view(&self) -> Frame {
        let mut frame = Frame::new();
        match self.screen {
            Screen::MainMenu => {
                frame.text(text::TITLE, TextStyle::Title);
                for button in [Button::Play, Button::Rules, Button::Quit] {
                    frame.text(button.label(), TextStyle::Button);
                }
            }
            Screen::Rules => {
                frame.text("Rules", TextStyle::Title);
                for line in text::RULES {
                    frame.text(line, TextStyle::Body);
                }
                frame.text(Button::Back.label(), TextStyle::Button);
            }
            Screen::Match => self.match_view(&mut frame),
        }
        frame
    }

    fn match_view(&self, frame: &mut Frame) {
        frame.tallies(self.game.state().tallies.clone());

        frame.text(text::BATTLE_ZONE, TextStyle::Title);
        if let Some(round) = self.game.last_round() {
            frame.card(CardSlot::Battle(Side::Player), round.player_card);
            frame.card(CardSlot::Battle(Side::Opponent), round.opponent_card);
            frame.text(round.to_string(), TextStyle::Body);
        }

        for (i, card) in self.game.hand().iter().enumerate() {
            frame.card(CardSlot::Hand(i), *card);
        }

        match self.game.phase() {
            MatchPhase::Playing => {}
            MatchPhase::AwaitingWildChoice(_) => {
                frame.text(text::CHOOSE_ELEMENT, TextStyle::Highlight);
                for element in Element::NON_WILD {
                    frame.text(element.to_string(), TextStyle::Button);
                }
            }
            MatchPhase::Finished(_) => {
                if let Some(line) = &self.winner_text {
                    frame.text(line.clone(), TextStyle::Highlight);
                }
                frame.text(Button::Reset.label(), TextStyle::Button);
                frame.text(Button::Quit.label(), TextStyle::Button);
            }
        }
    }

    /// Produce the victory line the first time the match is seen finished.
    fn after_update(&mut self) {
        if self.winner_text.is_some() {
            return;
        }
        if let Some(winner) = self.game.outcome().winner() {
            self.winner_text = Some(victory_message(self.flavor.as_ref(), winner));
        }
    }

    fn quit(&mut self) {
        self.media.stop();
        self.running = false;
        log::info!("Quitting");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Hand};
    use crate::core::{ScriptedRng, SideMap};
    use crate::rules::WinTally;
    use crate::services::{FallbackFlavor, SilentMedia};

    fn app() -> App<ScriptedRng> {
        let game = Match::with_rng(MatchConfig::default(), ScriptedRng::picks(vec![0]));
        App::with_match(game, Box::new(SilentMedia), Box::new(FallbackFlavor))
    }

    #[test]
    fn test_menu_flow() {
        let mut app = app();
        assert_eq!(app.screen(), Screen::MainMenu);
        assert!(app.view().contains_text(text::TITLE));

        app.handle(UiEvent::Click(Button::Rules));
        assert_eq!(app.screen(), Screen::Rules);
        assert!(app.view().contains_text("Fire beats Earth"));

        app.handle(UiEvent::Click(Button::Back));
        assert_eq!(app.screen(), Screen::MainMenu);

        app.handle(UiEvent::Click(Button::Play));
        assert_eq!(app.screen(), Screen::Match);
        assert!(app.view().contains_text(text::BATTLE_ZONE));
    }

    #[test]
    fn test_quit_from_menu() {
        let mut app = app();
        app.handle(UiEvent::Click(Button::Quit));
        assert!(!app.is_running());
    }

    #[test]
    fn test_close_anywhere() {
        let mut app = app();
        app.handle(UiEvent::Click(Button::Play));
        app.handle(UiEvent::Close);
        assert!(!app.is_running());
    }

    #[test]
    fn test_cards_ignored_outside_match() {
        let mut app = app();
        app.handle(UiEvent::SelectCard(0));
        assert!(app.game().last_round().is_none());
    }

    #[test]
    fn test_wild_choice_and_victory_text() {
        // ScriptedRng with unit 0.5 deals non-Wild opponent cards (Fire 1).
        let wild = Card::new(Element::Wild, 2).unwrap();
        let tallies = SideMap::new(|side| match side {
            Side::Player => WinTally::from_counts(1, 1, 0),
            Side::Opponent => WinTally::new(),
        });
        let game = Match::from_position(
            MatchConfig::default(),
            ScriptedRng::picks(vec![0]),
            tallies,
            Hand::from_cards(&[wild]),
        )
        .unwrap();
        let mut app = App::with_match(game, Box::new(SilentMedia), Box::new(FallbackFlavor));
        app.handle(UiEvent::Click(Button::Play));

        app.handle(UiEvent::SelectCard(0));
        assert_eq!(app.game().phase(), MatchPhase::AwaitingWildChoice(Side::Player));
        assert!(app.view().contains_text(text::CHOOSE_ELEMENT));

        app.handle(UiEvent::Nominate(Element::Earth));
        assert_eq!(app.game().phase(), MatchPhase::Finished(Side::Player));
        assert_eq!(app.winner_text(), Some("Player is victorious!"));

        let view = app.view();
        assert!(view.contains_text("Player is victorious!"));
        assert!(view.contains_text("Reset"));

        // Further cards do nothing once finished.
        app.handle(UiEvent::SelectCard(0));
        assert_eq!(app.game().tally(Side::Player).total(), 3);

        app.handle(UiEvent::Click(Button::Reset));
        assert_eq!(app.game().phase(), MatchPhase::Playing);
        assert_eq!(app.winner_text(), None);
        assert_eq!(app.game().tally(Side::Player).total(), 0);
    }
}
