//! Solitaire integration tests.

use std::collections::HashSet;

use cardcore::{
    AutoMove, Board, Card, Column, DECK_SIZE, GameEvent, MoveError, PileRef, Solitaire,
    SolitaireOptions, StepResult, Suit,
};
use proptest::prelude::*;

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn up(cards: &[Card]) -> Column {
    Column::new(Vec::new(), cards.to_vec())
}

fn run(suit: Suit, ranks: core::ops::RangeInclusive<u8>) -> Vec<Card> {
    ranks.map(|rank| card(suit, rank)).collect()
}

fn layout(
    stock: Vec<Card>,
    waste: Vec<Card>,
    foundations: [Vec<Card>; 4],
    tableau: [Column; 7],
) -> Board {
    Board::from_layout(
        stock,
        waste,
        foundations,
        tableau,
        SolitaireOptions::default(),
    )
}

fn game_with(board: Board) -> Solitaire {
    let game = Solitaire::new(SolitaireOptions::default(), 1);
    *game.board.lock() = board;
    game
}

fn assert_consistent(board: &Board) {
    assert_eq!(board.card_count(), DECK_SIZE);
    let ids: HashSet<u8> = board.cards().map(|c| c.id()).collect();
    assert_eq!(ids.len(), DECK_SIZE);

    for column in board.tableau() {
        assert_eq!(column.face_down_len() + column.face_up().len(), column.len());
        for index in 0..column.len() {
            assert_eq!(column.is_face_up(index), index >= column.face_down_len());
        }
    }

    for foundation in board.foundations() {
        for (index, c) in foundation.iter().enumerate() {
            assert_eq!(usize::from(c.rank), index + 1);
            assert_eq!(c.suit, foundation[0].suit);
        }
    }
}

#[test]
fn new_game_uses_classic_layout() {
    let game = Solitaire::new(SolitaireOptions::default(), 3);
    let board = game.snapshot();

    assert_eq!(board.stock().len(), 24);
    assert!(board.waste().is_empty());
    for (col, column) in board.tableau().iter().enumerate() {
        assert_eq!(column.len(), col + 1);
        assert_eq!(column.face_down_len(), col);
        assert_eq!(column.face_up().len(), 1);
    }
    assert_eq!(game.score(), 0);
    assert_eq!(game.moves(), 0);
    assert_consistent(&board);
}

#[test]
fn foundation_accepts_ace_then_same_suit_ascending() {
    let two_clubs = card(Suit::Clubs, 2);
    let mut board = layout(
        vec![],
        vec![],
        Default::default(),
        Default::default(),
    );
    assert!(!board.can_move_to_foundation(two_clubs, 0));
    assert!(board.can_move_to_foundation(card(Suit::Clubs, 1), 0));

    board = layout(
        vec![],
        vec![],
        [vec![card(Suit::Clubs, 1)], vec![], vec![], vec![]],
        Default::default(),
    );
    assert!(board.can_move_to_foundation(two_clubs, 0));
    assert!(!board.can_move_to_foundation(card(Suit::Diamonds, 2), 0));
    assert!(!board.can_move_to_foundation(two_clubs, 4));
}

#[test]
fn tableau_requires_alternating_color_and_descending_rank() {
    let mut tableau: [Column; 7] = Default::default();
    tableau[0] = up(&[card(Suit::Diamonds, 8)]);
    tableau[1] = up(&[card(Suit::Clubs, 8)]);
    let board = layout(vec![], vec![], Default::default(), tableau);

    let seven_spades = [card(Suit::Spades, 7)];
    assert!(board.is_valid_move(&seven_spades, PileRef::Tableau(0)));
    assert!(!board.is_valid_move(&seven_spades, PileRef::Tableau(1)));
    assert!(!board.is_valid_move(&[card(Suit::Spades, 6)], PileRef::Tableau(0)));

    assert!(board.is_valid_move(&[card(Suit::Hearts, 13)], PileRef::Tableau(2)));
    assert!(!board.is_valid_move(&[card(Suit::Hearts, 12)], PileRef::Tableau(2)));
    assert!(!board.is_valid_move(&[], PileRef::Tableau(2)));
}

#[test]
fn foundation_takes_single_cards_only() {
    let board = layout(
        vec![],
        vec![],
        [vec![card(Suit::Hearts, 1)], vec![], vec![], vec![]],
        Default::default(),
    );
    let pair = [card(Suit::Hearts, 2), card(Suit::Clubs, 1)];
    assert!(!board.is_valid_move(&pair, PileRef::Foundation(0)));
    assert!(board.is_valid_move(&pair[..1], PileRef::Foundation(0)));
}

#[test]
fn move_uncovering_face_down_card_flips_and_scores() {
    let mut tableau: [Column; 7] = Default::default();
    tableau[0] = Column::new(vec![card(Suit::Hearts, 3)], vec![card(Suit::Spades, 7)]);
    tableau[1] = up(&[card(Suit::Diamonds, 8)]);
    let game = game_with(layout(vec![], vec![], Default::default(), tableau));

    let events = game
        .attempt_move(card(Suit::Spades, 7), PileRef::Tableau(0), PileRef::Tableau(1))
        .unwrap();

    assert_eq!(
        events[..3],
        [
            GameEvent::Moved {
                card: card(Suit::Spades, 7),
                count: 1,
                from: PileRef::Tableau(0),
                to: PileRef::Tableau(1),
            },
            GameEvent::Flipped {
                card: card(Suit::Hearts, 3),
                column: 0,
            },
            GameEvent::Scored { points: 5 },
        ]
    );
    let board = game.snapshot();
    assert_eq!(board.column(0).unwrap().top_face_up(), Some(card(Suit::Hearts, 3)));
    assert_eq!(board.column(1).unwrap().len(), 2);
    assert_eq!(game.score(), 5);
    assert_eq!(game.moves(), 1);
}

#[test]
fn waste_to_tableau_scores_five_and_foundation_scores_ten() {
    let mut tableau: [Column; 7] = Default::default();
    tableau[0] = up(&[card(Suit::Diamonds, 8)]);
    tableau[1] = up(&[card(Suit::Clubs, 1)]);
    let game = game_with(layout(
        vec![card(Suit::Hearts, 12)],
        vec![card(Suit::Spades, 7)],
        Default::default(),
        tableau,
    ));

    game.attempt_move(card(Suit::Spades, 7), PileRef::Waste, PileRef::Tableau(0))
        .unwrap();
    assert_eq!(game.score(), 5);

    game.attempt_move(card(Suit::Clubs, 1), PileRef::Tableau(1), PileRef::Foundation(2))
        .unwrap();
    assert_eq!(game.score(), 15);
    assert_eq!(game.moves(), 2);
}

#[test]
fn moves_whole_run_above_selected_card() {
    let mut tableau: [Column; 7] = Default::default();
    tableau[0] = Column::new(
        vec![card(Suit::Clubs, 2)],
        vec![card(Suit::Clubs, 9), card(Suit::Hearts, 8), card(Suit::Spades, 7)],
    );
    tableau[1] = up(&[card(Suit::Spades, 9)]);
    let mut board = layout(vec![], vec![], Default::default(), tableau);

    let events = board
        .move_cards(card(Suit::Hearts, 8), PileRef::Tableau(0), PileRef::Tableau(1))
        .unwrap();

    assert!(matches!(events[0], GameEvent::Moved { count: 2, .. }));
    assert_eq!(
        board.column(1).unwrap().cards(),
        [card(Suit::Spades, 9), card(Suit::Hearts, 8), card(Suit::Spades, 7)]
    );
    assert_eq!(board.column(0).unwrap().face_up(), [card(Suit::Clubs, 9)]);
    assert_eq!(board.score(), 0);
}

#[test]
fn rejected_moves_leave_board_untouched() {
    let mut tableau: [Column; 7] = Default::default();
    tableau[0] = Column::new(vec![card(Suit::Hearts, 3)], vec![card(Suit::Spades, 7)]);
    tableau[1] = up(&[card(Suit::Clubs, 8)]);
    let game = game_with(layout(
        vec![],
        vec![card(Suit::Hearts, 6), card(Suit::Diamonds, 10)],
        Default::default(),
        tableau,
    ));
    let before = game.snapshot();

    let attempts = [
        (card(Suit::Spades, 7), PileRef::Tableau(0), PileRef::Tableau(1), MoveError::InvalidMove),
        (card(Suit::Hearts, 3), PileRef::Tableau(0), PileRef::Tableau(2), MoveError::FaceDown),
        (card(Suit::Hearts, 6), PileRef::Waste, PileRef::Tableau(0), MoveError::CardNotFound),
        (card(Suit::Spades, 7), PileRef::Tableau(0), PileRef::Tableau(9), MoveError::PileOutOfRange),
        (card(Suit::Spades, 7), PileRef::Tableau(0), PileRef::Waste, MoveError::InvalidMove),
        (card(Suit::Spades, 7), PileRef::Tableau(0), PileRef::Tableau(0), MoveError::InvalidMove),
        (card(Suit::Clubs, 5), PileRef::Tableau(2), PileRef::Tableau(0), MoveError::EmptySource),
    ];

    for (c, from, to, expected) in attempts {
        assert_eq!(game.attempt_move(c, from, to).unwrap_err(), expected);
    }
    assert_eq!(game.snapshot(), before);
}

#[test]
fn pile_ref_constructors_check_range() {
    assert_eq!(PileRef::foundation(3), Ok(PileRef::Foundation(3)));
    assert_eq!(PileRef::foundation(4), Err(MoveError::PileOutOfRange));
    assert_eq!(PileRef::tableau(6), Ok(PileRef::Tableau(6)));
    assert_eq!(PileRef::tableau(7), Err(MoveError::PileOutOfRange));
}

#[test]
fn recycling_returns_waste_in_dealing_order() {
    let a = card(Suit::Hearts, 4);
    let b = card(Suit::Clubs, 9);
    let c = card(Suit::Spades, 2);
    let game = game_with(layout(
        vec![c, b, a],
        vec![],
        Default::default(),
        Default::default(),
    ));

    for expected in [a, b, c] {
        assert_eq!(game.deal_from_stock()[0], GameEvent::StockDealt { card: expected });
    }
    assert_eq!(game.deal_from_stock()[0], GameEvent::StockRecycled { count: 3 });

    let board = game.snapshot();
    assert_eq!(board.stock().len(), 3);
    assert!(board.waste().is_empty());
    assert_eq!(game.deal_from_stock()[0], GameEvent::StockDealt { card: a });
    assert_eq!(game.moves(), 5);
}

#[test]
fn dealing_with_no_cards_does_nothing() {
    let mut tableau: [Column; 7] = Default::default();
    tableau[0] = up(&[card(Suit::Hearts, 13)]);
    let game = game_with(layout(vec![], vec![], Default::default(), tableau));

    assert!(game.deal_from_stock().is_empty());
    assert_eq!(game.moves(), 0);
}

#[test]
fn no_moves_left_is_detected() {
    let mut tableau: [Column; 7] = Default::default();
    tableau[0] = up(&[card(Suit::Spades, 2)]);
    tableau[1] = up(&[card(Suit::Hearts, 2)]);
    let board = layout(vec![], vec![], Default::default(), tableau.clone());
    assert!(!board.has_available_moves());

    let game = game_with(layout(
        vec![],
        vec![card(Suit::Clubs, 1)],
        Default::default(),
        tableau,
    ));
    assert!(game.has_available_moves());

    let events = game
        .attempt_move(card(Suit::Clubs, 1), PileRef::Waste, PileRef::Foundation(0))
        .unwrap();
    assert_eq!(events.last(), Some(&GameEvent::Deadlocked));
    assert!(!game.has_available_moves());
}

#[test]
fn each_available_action_kind_is_detected() {
    let mut tableau: [Column; 7] = Default::default();
    tableau[0] = up(&[card(Suit::Spades, 2)]);
    tableau[1] = up(&[card(Suit::Hearts, 2)]);

    let mut with_face_down = tableau.clone();
    with_face_down[2] = Column::new(vec![card(Suit::Clubs, 5)], vec![]);
    assert!(layout(vec![], vec![], Default::default(), with_face_down).has_available_moves());

    let mut with_target = tableau.clone();
    with_target[2] = up(&[card(Suit::Clubs, 3)]);
    assert!(layout(vec![], vec![], Default::default(), with_target).has_available_moves());

    let spade_ace = [vec![], vec![card(Suit::Spades, 1)], vec![], vec![]];
    assert!(layout(vec![], vec![], spade_ace, tableau.clone()).has_available_moves());

    let waste = vec![card(Suit::Clubs, 5)];
    assert!(layout(vec![], waste, Default::default(), tableau.clone()).has_available_moves());

    let stock = vec![card(Suit::Clubs, 5)];
    assert!(layout(stock, vec![], Default::default(), tableau).has_available_moves());
}

#[test]
fn last_foundation_card_wins_the_game() {
    let foundations = [
        run(Suit::Hearts, 1..=13),
        run(Suit::Diamonds, 1..=13),
        run(Suit::Clubs, 1..=13),
        run(Suit::Spades, 1..=12),
    ];
    let game = game_with(layout(
        vec![],
        vec![card(Suit::Spades, 13)],
        foundations,
        Default::default(),
    ));

    let events = game
        .auto_move_to_foundation(card(Suit::Spades, 13), PileRef::Waste)
        .unwrap();

    assert!(events.contains(&GameEvent::FoundationCompleted {
        foundation: 3,
        suit: Suit::Spades,
    }));
    assert_eq!(events.last(), Some(&GameEvent::Won { score: 10, moves: 1 }));
    assert!(game.is_won());
    assert_consistent(&game.snapshot());
}

#[test]
fn autoplay_step_without_start_is_cancelled() {
    let game = Solitaire::new(SolitaireOptions::default(), 9);
    let before = game.snapshot();

    assert_eq!(game.autoplay_step(), StepResult::Cancelled);
    assert_eq!(game.snapshot(), before);
}

#[test]
fn autoplay_prefers_foundation_then_flip() {
    let mut tableau: [Column; 7] = Default::default();
    tableau[0] = Column::new(vec![card(Suit::Clubs, 5)], vec![]);
    tableau[1] = up(&[card(Suit::Spades, 7)]);
    tableau[2] = up(&[card(Suit::Diamonds, 8)]);
    tableau[3] = up(&[card(Suit::Diamonds, 1)]);
    let game = game_with(layout(
        vec![card(Suit::Hearts, 9)],
        vec![],
        Default::default(),
        tableau,
    ));
    game.start_autoplay();

    let first = game.autoplay_step().acted().unwrap();
    assert_eq!(
        first.action,
        AutoMove::Foundation {
            card: card(Suit::Diamonds, 1),
            from: PileRef::Tableau(3),
            foundation: 0,
        }
    );

    let second = game.autoplay_step().acted().unwrap();
    assert_eq!(
        second.action,
        AutoMove::Flip {
            card: card(Suit::Clubs, 5),
            column: 0,
        }
    );
    assert_eq!(game.score(), 15);
    assert_eq!(game.moves(), 2);

    let third = game.autoplay_step().acted().unwrap();
    assert_eq!(
        third.action,
        AutoMove::Tableau {
            card: card(Suit::Spades, 7),
            from: 1,
            to: 2,
        }
    );
}

#[test]
fn autoplay_prefers_moves_that_expose_face_down_cards() {
    let mut tableau: [Column; 7] = Default::default();
    tableau[1] = up(&[card(Suit::Clubs, 7)]);
    tableau[2] = Column::new(vec![card(Suit::Hearts, 12)], vec![card(Suit::Spades, 7)]);
    tableau[4] = up(&[card(Suit::Diamonds, 8)]);
    tableau[5] = up(&[card(Suit::Hearts, 8)]);
    let game = game_with(layout(vec![], vec![], Default::default(), tableau));

    assert_eq!(
        game.hint(),
        Some(AutoMove::Tableau {
            card: card(Suit::Spades, 7),
            from: 2,
            to: 4,
        })
    );
    // A hint does not touch the board.
    assert_eq!(game.moves(), 0);
}

#[test]
fn autoplay_does_not_repeat_recent_moves() {
    let mut tableau: [Column; 7] = Default::default();
    tableau[0] = up(&[card(Suit::Diamonds, 8)]);
    tableau[1] = up(&[card(Suit::Hearts, 8)]);
    tableau[2] = up(&[card(Suit::Spades, 7)]);
    let game = game_with(layout(vec![], vec![], Default::default(), tableau));
    game.start_autoplay();

    let seven = card(Suit::Spades, 7);
    let expected = [
        AutoMove::Tableau { card: seven, from: 2, to: 0 },
        AutoMove::Tableau { card: seven, from: 0, to: 1 },
        AutoMove::Tableau { card: seven, from: 1, to: 0 },
    ];
    for action in expected {
        assert_eq!(game.autoplay_step().acted().unwrap().action, action);
    }

    assert_eq!(game.autoplay_step(), StepResult::NoActionAvailable);
    assert!(!game.is_autoplaying());
    assert_eq!(game.autoplay_step(), StepResult::Cancelled);
}

#[test]
fn autoplay_recycles_the_waste_at_most_three_times() {
    let game = game_with(layout(
        vec![],
        vec![card(Suit::Spades, 2), card(Suit::Spades, 3)],
        Default::default(),
        Default::default(),
    ));
    game.start_autoplay();

    let mut recycles = 0;
    let mut acted = 0;
    while let StepResult::Acted(step) = game.autoplay_step() {
        assert_eq!(step.action, AutoMove::Stock);
        if matches!(step.events[0], GameEvent::StockRecycled { .. }) {
            recycles += 1;
        }
        acted += 1;
        assert!(acted < 100, "autoplay did not stop");
    }

    assert_eq!(recycles, 3);
    assert_eq!(acted, 9);
}

#[test]
fn new_game_cancels_autoplay() {
    let game = Solitaire::new(SolitaireOptions::default(), 5);
    game.start_autoplay();
    assert!(game.is_autoplaying());

    game.new_game();
    assert!(!game.is_autoplaying());
    assert_eq!(game.autoplay_step(), StepResult::Cancelled);
    assert_eq!(game.moves(), 0);
}

#[test]
fn stop_autoplay_cancels_pending_steps() {
    let game = Solitaire::new(SolitaireOptions::default(), 11);
    game.start_autoplay();
    assert!(game.autoplay_step().is_acted());

    game.stop_autoplay();
    let before = game.snapshot();
    assert_eq!(game.autoplay_step(), StepResult::Cancelled);
    assert_eq!(game.snapshot(), before);
}

#[test]
fn autoplay_does_not_report_deadlock() {
    let mut tableau: [Column; 7] = Default::default();
    tableau[0] = up(&[card(Suit::Spades, 2)]);
    tableau[1] = up(&[card(Suit::Hearts, 2)]);
    let game = game_with(layout(
        vec![],
        vec![card(Suit::Clubs, 1)],
        Default::default(),
        tableau,
    ));
    game.start_autoplay();

    let step = game.autoplay_step().acted().unwrap();
    assert!(!step.events.contains(&GameEvent::Deadlocked));
    assert_eq!(game.autoplay_step(), StepResult::NoActionAvailable);
}

proptest! {
    #[test]
    fn random_play_preserves_invariants(
        seed in any::<u64>(),
        ops in prop::collection::vec((0u8..4, 0usize..8, 0usize..20), 0..150),
    ) {
        let game = Solitaire::new(SolitaireOptions::default(), seed);
        game.start_autoplay();

        for (kind, pile, depth) in ops {
            let board = game.snapshot();
            match kind {
                0 => {
                    game.deal_from_stock();
                }
                1 => {
                    if let Some(top) = board.waste_top() {
                        let to = if pile < 4 { PileRef::Foundation(pile) } else { PileRef::Tableau(pile) };
                        let _ = game.attempt_move(top, PileRef::Waste, to);
                    }
                }
                2 => {
                    let column = board.column(pile % 7).unwrap();
                    if let Some(&c) = column.cards().get(depth % (column.len() + 1)) {
                        let _ = game.attempt_move(c, PileRef::Tableau(pile % 7), PileRef::Tableau(depth % 7));
                        let _ = game.auto_move_to_foundation(c, PileRef::Tableau(pile % 7));
                    }
                }
                _ => {
                    let _ = game.autoplay_step();
                }
            }
            assert_consistent(&game.snapshot());
        }
    }

    #[test]
    fn recycling_restores_stock_face_down(seed in any::<u64>(), deals in 1usize..24) {
        let game = Solitaire::new(SolitaireOptions::default(), seed);
        for _ in 0..24 {
            game.deal_from_stock();
        }
        let dealt = game.snapshot();
        prop_assert!(dealt.stock().is_empty());
        prop_assert_eq!(dealt.waste().len(), 24);

        let events = game.deal_from_stock();
        prop_assert_eq!(&events[..], &[GameEvent::StockRecycled { count: 24 }]);
        let recycled = game.snapshot();
        prop_assert_eq!(recycled.stock().len(), 24);
        prop_assert!(recycled.waste().is_empty());

        for _ in 0..deals {
            game.deal_from_stock();
        }
        let redealt = game.snapshot();
        prop_assert_eq!(redealt.waste(), &dealt.waste()[..deals]);
    }
}
