//! Round engine integration tests.

use bjround::{
    Action, Card, DECK_SIZE, Deck, Game, GameOptions, GameState, Owner, Phase, Rank, RoundError,
    Step, Suit, Winner,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn deck_from_draws(draws: &[Card]) -> Deck {
    let mut cards: Vec<Card> = draws.to_vec();
    cards.reverse();
    Deck::from_cards(cards)
}

/// Deals a round where `draws` come off the deck in order: two player
/// cards, the dealer's hole card, the dealer's up card, then the rest.
fn stacked_round(draws: &[Card]) -> GameState {
    GameState::deal(deck_from_draws(draws), "dealer-bot").unwrap()
}

fn steps(state: &GameState) -> Vec<Step> {
    state
        .history
        .last()
        .unwrap()
        .events()
        .iter()
        .map(|event| event.step)
        .collect()
}

#[test]
fn new_round_deals_two_cards_each() {
    let mut game = Game::new(GameOptions::default(), 42);
    let state = game.new_round("octocat").unwrap();

    assert_eq!(state.deck.len(), DECK_SIZE - 4);
    assert_eq!(state.player.len(), 2);
    assert!(state.player.cards().iter().all(|c| !c.hidden));
    assert!(state.dealer.cards()[0].hidden);
    assert!(!state.dealer.cards()[1].hidden);
    assert!(!state.is_finished);
    assert_eq!(state.winner, None);
    assert_eq!(state.phase(), Phase::InProgress);

    let entries = state.history.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].action, Action::NewGame);
    assert_eq!(entries[0].actor, "octocat");
    assert!(entries[0].events.is_none());
}

#[test]
fn same_seed_deals_same_round() {
    let a = Game::new(GameOptions::default(), 7).new_round("a").unwrap();
    let b = Game::new(GameOptions::default(), 7).new_round("a").unwrap();
    assert_eq!(a, b);
}

#[test]
fn deal_takes_cards_from_the_tail_in_order() {
    let state = stacked_round(&[
        card(Suit::Hearts, Rank::Two),
        card(Suit::Hearts, Rank::Three),
        card(Suit::Clubs, Rank::Four),
        card(Suit::Clubs, Rank::Five),
        card(Suit::Spades, Rank::Six),
    ]);

    assert_eq!(state.player.cards()[0].card, card(Suit::Hearts, Rank::Two));
    assert_eq!(state.player.cards()[1].card, card(Suit::Hearts, Rank::Three));
    assert_eq!(state.dealer.cards()[0].card, card(Suit::Clubs, Rank::Four));
    assert_eq!(state.dealer.cards()[1].card, card(Suit::Clubs, Rank::Five));
    assert_eq!(state.deck.cards(), &[card(Suit::Spades, Rank::Six)]);
}

#[test]
fn draw_on_empty_deck_leaves_hands_unchanged() {
    let mut state = stacked_round(&[
        card(Suit::Hearts, Rank::Five),
        card(Suit::Clubs, Rank::Nine),
        card(Suit::Spades, Rank::Six),
        card(Suit::Diamonds, Rank::Seven),
    ]);
    let before = state.clone();

    assert_eq!(
        state.draw_card(Owner::Player).unwrap_err(),
        RoundError::DeckExhausted
    );
    assert_eq!(state, before);
}

#[test]
fn hit_with_empty_deck_returns_error() {
    let game = Game::new(GameOptions::default(), 1);
    let mut state = stacked_round(&[
        card(Suit::Hearts, Rank::Five),
        card(Suit::Clubs, Rank::Nine),
        card(Suit::Spades, Rank::Six),
        card(Suit::Diamonds, Rank::Seven),
    ]);

    assert_eq!(
        game.hit(&mut state, "octocat").unwrap_err(),
        RoundError::DeckExhausted
    );
    assert_eq!(state.player.len(), 2);
}

#[test]
fn stand_on_dealer_sixteen_draws_until_over_sixteen() {
    let game = Game::new(GameOptions::default(), 1);
    let mut state = stacked_round(&[
        card(Suit::Hearts, Rank::King),   // player
        card(Suit::Clubs, Rank::Nine),    // player
        card(Suit::Spades, Rank::Ten),    // dealer hole
        card(Suit::Diamonds, Rank::Six),  // dealer up
        card(Suit::Hearts, Rank::Five),   // dealer draw
        card(Suit::Clubs, Rank::Two),     // untouched
    ]);

    let result = game.stand(&mut state, "octocat").unwrap();

    assert_eq!(result.player_value, 19);
    assert_eq!(result.dealer_value, 21);
    assert_eq!(result.winner, Winner::Dealer);
    assert!(state.is_finished);
    assert_eq!(state.winner, Some(Winner::Dealer));
    assert_eq!(state.dealer.len(), 3);
    assert_eq!(state.deck.len(), 1);
    assert!(!state.dealer.is_first_hidden());

    assert_eq!(
        steps(&state),
        [
            Step::DealerDraw,
            Step::RevealHoleCard,
            Step::DealerCloser,
            Step::GameFinished,
        ]
    );

    let entry = state.history.last().unwrap();
    assert_eq!(entry.action, Action::Stand);
    let reveal = &entry.events()[1];
    let dealer_at_reveal = &reveal.cards_in_play[0];
    assert_eq!(dealer_at_reveal.owner, Owner::Dealer);
    assert!(dealer_at_reveal.cards.total() > 16);
}

#[test]
fn stand_dealer_draws_on_soft_totals() {
    let game = Game::new(GameOptions::default(), 1);
    let mut state = stacked_round(&[
        card(Suit::Hearts, Rank::Ten),   // player
        card(Suit::Clubs, Rank::Eight),  // player
        card(Suit::Spades, Rank::Ace),   // dealer hole
        card(Suit::Diamonds, Rank::Five), // dealer up: soft 16
        card(Suit::Hearts, Rank::Ten),   // hard 16
        card(Suit::Clubs, Rank::Two),    // 18
        card(Suit::Spades, Rank::Nine),  // untouched
    ]);

    let result = game.stand(&mut state, "octocat").unwrap();

    assert_eq!(state.dealer.len(), 4);
    assert_eq!(result.dealer_value, 18);
    assert_eq!(result.winner, Winner::Tie);
    assert_eq!(
        steps(&state),
        [
            Step::DealerDraw,
            Step::DealerDraw,
            Step::RevealHoleCard,
            Step::EquallyClose,
            Step::GameFinished,
        ]
    );
}

#[test]
fn stand_dealer_over_limit_does_not_draw() {
    let game = Game::new(GameOptions::default(), 1);
    let mut state = stacked_round(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Jack),
        card(Suit::Spades, Rank::Seven),
        card(Suit::Diamonds, Rank::Queen),
        card(Suit::Hearts, Rank::Two),
    ]);

    let result = game.stand(&mut state, "octocat").unwrap();

    assert_eq!(state.dealer.len(), 2);
    assert_eq!(state.deck.len(), 1);
    assert_eq!(result.winner, Winner::Player);
    assert_eq!(
        steps(&state),
        [Step::RevealHoleCard, Step::PlayerCloser, Step::GameFinished]
    );
}

#[test]
fn stand_dealer_busts() {
    let game = Game::new(GameOptions::default(), 1);
    let mut state = stacked_round(&[
        card(Suit::Hearts, Rank::Two),
        card(Suit::Clubs, Rank::Three),
        card(Suit::Spades, Rank::Ten),
        card(Suit::Diamonds, Rank::Six),
        card(Suit::Hearts, Rank::King),
    ]);

    let result = game.stand(&mut state, "octocat").unwrap();

    assert_eq!(result.dealer_value, 26);
    assert_eq!(result.winner, Winner::Player);
    assert!(steps(&state).contains(&Step::DealerBusted));
}

#[test]
fn stand_with_exhausted_deck_fails() {
    let game = Game::new(GameOptions::default(), 1);
    let mut state = stacked_round(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Nine),
        card(Suit::Spades, Rank::Two),
        card(Suit::Diamonds, Rank::Three),
    ]);

    assert_eq!(
        game.stand(&mut state, "octocat").unwrap_err(),
        RoundError::DeckExhausted
    );
}

#[test]
fn hit_busting_player_settles_early() {
    let game = Game::new(GameOptions::default(), 1);
    let mut state = stacked_round(&[
        card(Suit::Hearts, Rank::King),  // player
        card(Suit::Clubs, Rank::Two),    // player
        card(Suit::Spades, Rank::Ten),   // dealer hole
        card(Suit::Diamonds, Rank::Eight), // dealer up: 18
        card(Suit::Hearts, Rank::Queen), // player hit: 22
        card(Suit::Clubs, Rank::Three),  // untouched
    ]);

    let result = game.hit(&mut state, "octocat").unwrap().unwrap();

    assert_eq!(result.player_value, 22);
    assert_eq!(result.dealer_value, 18);
    assert_eq!(result.winner, Winner::Dealer);
    assert!(state.is_finished);
    assert_eq!(state.winner, Some(Winner::Dealer));
    assert!(!state.dealer.is_first_hidden());
    assert_eq!(state.dealer.len(), 2);
    assert_eq!(
        steps(&state),
        [
            Step::PlayerDraw,
            Step::PlayerBusted,
            Step::RevealHoleCard,
            Step::GameFinished,
        ]
    );
}

#[test]
fn hit_draws_one_dealer_card_and_keeps_hole_hidden() {
    let game = Game::new(GameOptions::default(), 1);
    let mut state = stacked_round(&[
        card(Suit::Hearts, Rank::Five),  // player
        card(Suit::Clubs, Rank::Six),    // player
        card(Suit::Spades, Rank::Nine),  // dealer hole
        card(Suit::Diamonds, Rank::Four), // dealer up: 13
        card(Suit::Hearts, Rank::Three), // player hit: 14
        card(Suit::Clubs, Rank::Two),    // dealer draw: 15
        card(Suit::Spades, Rank::Two),   // untouched
    ]);

    let outcome = game.hit(&mut state, "octocat").unwrap();

    assert_eq!(outcome, None);
    assert!(!state.is_finished);
    assert_eq!(state.winner, None);
    assert!(state.dealer.is_first_hidden());
    assert_eq!(state.player.total(), 14);
    assert_eq!(state.dealer.len(), 3);
    assert_eq!(state.dealer.total(), 15);
    assert_eq!(state.deck.len(), 1);
    assert_eq!(steps(&state), [Step::PlayerDraw, Step::DealerDraw]);
}

#[test]
fn hit_can_bust_the_dealer() {
    let game = Game::new(GameOptions::default(), 1);
    let mut state = stacked_round(&[
        card(Suit::Hearts, Rank::Five),
        card(Suit::Clubs, Rank::Six),
        card(Suit::Spades, Rank::Ten),
        card(Suit::Diamonds, Rank::Six),
        card(Suit::Hearts, Rank::Two),
        card(Suit::Clubs, Rank::Nine),
    ]);

    let result = game.hit(&mut state, "octocat").unwrap().unwrap();

    assert_eq!(result.winner, Winner::Player);
    assert_eq!(result.dealer_value, 25);
    assert_eq!(
        steps(&state),
        [
            Step::PlayerDraw,
            Step::DealerDraw,
            Step::DealerBusted,
            Step::RevealHoleCard,
            Step::GameFinished,
        ]
    );
}

#[test]
fn finished_round_rejects_actions() {
    let game = Game::new(GameOptions::default(), 1);
    let mut state = stacked_round(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Jack),
        card(Suit::Spades, Rank::Seven),
        card(Suit::Diamonds, Rank::Queen),
        card(Suit::Hearts, Rank::Two),
    ]);
    game.stand(&mut state, "octocat").unwrap();
    let settled = state.clone();

    assert_eq!(
        game.hit(&mut state, "octocat").unwrap_err(),
        RoundError::RoundFinished
    );
    assert_eq!(
        game.stand(&mut state, "octocat").unwrap_err(),
        RoundError::RoundFinished
    );
    assert_eq!(state, settled);
    assert_eq!(
        Action::effective(Action::Hit, Phase::of(Some(&state))),
        Action::Finished
    );
}

#[test]
fn reveal_hole_card_twice_records_one_event() {
    let mut state = stacked_round(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Jack),
        card(Suit::Spades, Rank::Seven),
        card(Suit::Diamonds, Rank::Queen),
    ]);

    assert!(state.reveal_hole_card().unwrap());
    assert!(!state.reveal_hole_card().unwrap());
    assert_eq!(steps(&state), [Step::RevealHoleCard]);
}

#[test]
fn history_snapshots_are_taken_at_record_time() {
    let game = Game::new(GameOptions::default(), 1);
    let mut state = stacked_round(&[
        card(Suit::Hearts, Rank::Five),
        card(Suit::Clubs, Rank::Six),
        card(Suit::Spades, Rank::Ten),
        card(Suit::Diamonds, Rank::Eight),
        card(Suit::Hearts, Rank::Two),
        card(Suit::Clubs, Rank::Three),
    ]);

    game.hit(&mut state, "alice").unwrap();
    game.stand(&mut state, "bob").unwrap();

    let entries = state.history.entries();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].cards_in_play[1].cards.len(), 2);
    assert_eq!(entries[1].actor, "alice");
    assert_eq!(entries[1].cards_in_play[1].cards.len(), 2);
    assert_eq!(entries[1].events()[0].cards_in_play[1].cards.len(), 3);
    assert_eq!(entries[2].actor, "bob");
    assert!(entries[2].cards_in_play[0].cards.cards()[0].hidden);
}

#[test]
fn played_round_survives_persistence() {
    let mut game = Game::new(GameOptions::default(), 2024);
    let mut state = game.new_round("octocat").unwrap();
    game.hit(&mut state, "octocat").unwrap();
    if !state.is_finished {
        game.stand(&mut state, "octocat").unwrap();
    }

    let record = state.to_json_pretty().unwrap();
    let restored = GameState::from_json(&record).unwrap().unwrap();

    assert_eq!(restored, state);
    assert!(record.contains("\"winner\""));
    assert!(record.contains("Game Finished: Thank you for playing!"));
}

#[test]
fn dealer_draw_limit_is_configurable() {
    let game = Game::new(GameOptions::default().with_dealer_draw_limit(17), 1);
    let mut state = stacked_round(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Nine),
        card(Suit::Spades, Rank::Ten),
        card(Suit::Diamonds, Rank::Seven), // 17 draws under this limit
        card(Suit::Hearts, Rank::Ace),
    ]);

    let result = game.stand(&mut state, "octocat").unwrap();
    assert_eq!(result.dealer_value, 18);
    assert_eq!(result.winner, Winner::Player);
}
