//! Screen flow with failing external services.
//!
//! Media and flavor-text failures must degrade without touching the match.

use std::time::Duration;

use elemental_clash::cards::{Card, Element, Hand};
use elemental_clash::core::{MatchConfig, MatchPhase, ScriptedRng, Side, SideMap};
use elemental_clash::game::Match;
use elemental_clash::rules::WinTally;
use elemental_clash::services::{FlavorText, MediaPlayer, ServiceError, TimedFlavor};
use elemental_clash::ui::{App, Button, Screen, UiEvent};

struct BrokenMedia;

impl MediaPlayer for BrokenMedia {
    fn play_clip(&mut self, path: &str) -> Result<(), ServiceError> {
        Err(ServiceError::AssetMissing(path.to_string()))
    }

    fn play_loop(&mut self, path: &str) -> Result<(), ServiceError> {
        Err(ServiceError::AssetMissing(path.to_string()))
    }

    fn stop(&mut self) {}
}

struct BrokenFlavor;

impl FlavorText for BrokenFlavor {
    fn victory_text(&self, _winner: Side) -> Result<String, ServiceError> {
        Err(ServiceError::Unavailable("offline".to_string()))
    }
}

struct SlowFlavor;

impl FlavorText for SlowFlavor {
    fn victory_text(&self, _winner: Side) -> Result<String, ServiceError> {
        std::thread::sleep(Duration::from_millis(500));
        Ok("A legend is born.".to_string())
    }
}

/// A match where one more Fire credit wins it for the player.
///
/// Every dealt card is Fire 1 under this script, so playing from the hand
/// always draws against the opponent's Fire 1.
fn near_win(flavor: Box<dyn FlavorText>) -> App<ScriptedRng> {
    let tallies = SideMap::new(|side| match side {
        Side::Player => WinTally::from_counts(2, 0, 0),
        Side::Opponent => WinTally::new(),
    });
    let hand = Hand::from_cards(&[Card::new(Element::Fire, 1).unwrap(); 6]);
    let game =
        Match::from_position(MatchConfig::default(), ScriptedRng::picks(vec![0]), tallies, hand)
            .unwrap();
    App::with_match(game, Box::new(BrokenMedia), flavor)
}

#[test]
fn test_broken_media_does_not_block_play() {
    let mut app = near_win(Box::new(BrokenFlavor));
    app.start();

    app.handle(UiEvent::Click(Button::Play));
    assert_eq!(app.screen(), Screen::Match);
}

#[test]
fn test_broken_flavor_uses_fallback() {
    let mut app = near_win(Box::new(BrokenFlavor));
    app.handle(UiEvent::Click(Button::Play));

    app.game_mut()
        .play_round(
            Card::new(Element::Wild, 1).unwrap(),
            Card::new(Element::Fire, 1).unwrap(),
        )
        .unwrap();

    app.handle(UiEvent::Nominate(Element::Fire));

    assert_eq!(app.game().phase(), MatchPhase::Finished(Side::Player));
    assert_eq!(app.winner_text(), Some("Player is victorious!"));
    assert_eq!(*app.game().tally(Side::Player), WinTally::from_counts(3, 0, 0));
}

#[test]
fn test_slow_flavor_times_out_to_fallback() {
    let flavor = TimedFlavor::new(SlowFlavor, Duration::from_millis(20));
    let mut app = near_win(Box::new(flavor));
    app.handle(UiEvent::Click(Button::Play));

    app.game_mut()
        .play_round(
            Card::new(Element::Wild, 1).unwrap(),
            Card::new(Element::Water, 1).unwrap(),
        )
        .unwrap();
    app.handle(UiEvent::Nominate(Element::Fire));

    assert_eq!(app.winner_text(), Some("Player is victorious!"));
}

#[test]
fn test_draws_leave_match_playing() {
    let mut app = near_win(Box::new(BrokenFlavor));
    app.handle(UiEvent::Click(Button::Play));

    for _ in 0..5 {
        app.handle(UiEvent::SelectCard(0));
    }

    assert_eq!(app.game().phase(), MatchPhase::Playing);
    assert_eq!(app.game().state().rounds_played, 5);
    assert_eq!(app.winner_text(), None);
}
