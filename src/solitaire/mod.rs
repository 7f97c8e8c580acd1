//! Klondike solitaire engine and session state.

use alloc::vec::Vec;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::sync::{Flag, Mutex};

use crate::card::{Card, standard_deck};
use crate::error::MoveError;
use crate::options::SolitaireOptions;
use crate::step::StepResult;

mod autoplay;
pub mod board;
mod deadlock;
pub mod event;
pub mod pile;
mod rules;

pub use autoplay::AutoMove;
pub use board::Board;
pub use event::GameEvent;
pub use pile::{COLUMNS, Column, FOUNDATIONS, PileRef};

use autoplay::Autoplay;

/// One executed autoplay action and what it caused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoplayStep {
    /// The action taken.
    pub action: AutoMove,
    /// Events produced by the action.
    pub events: Vec<GameEvent>,
}

/// A solitaire session: the board, the autoplay memory and the shuffler.
///
/// All intents take `&self` and lock the board once for the whole
/// operation, so a caller never sees a partially applied move.
pub struct Solitaire {
    /// Session options.
    pub options: SolitaireOptions,
    /// Current position.
    pub board: Mutex<Board>,
    /// Recent autoplay actions and the recycle count.
    autoplay: Mutex<Autoplay>,
    /// Raised while autoplay is running.
    autoplay_live: Flag,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl Solitaire {
    /// Creates a session and deals the first game.
    ///
    /// # Example
    ///
    /// ```
    /// use cardcore::{Solitaire, SolitaireOptions};
    ///
    /// let game = Solitaire::new(SolitaireOptions::default(), 7);
    /// assert_eq!(game.snapshot().stock().len(), 24);
    /// ```
    #[must_use]
    pub fn new(options: SolitaireOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let board = Board::deal(Self::shuffled_deck(&mut rng), options);

        Self {
            options,
            board: Mutex::new(board),
            autoplay: Mutex::new(Autoplay::new(&options)),
            autoplay_live: Flag::new(false),
            rng: Mutex::new(rng),
        }
    }

    fn shuffled_deck(rng: &mut ChaCha8Rng) -> Vec<Card> {
        let mut cards = standard_deck();
        cards.shuffle(rng);
        cards
    }

    /// Stops autoplay, forgets its history and deals a freshly shuffled game.
    pub fn new_game(&self) {
        self.autoplay_live.lower();
        self.autoplay.lock().reset();

        let deck = Self::shuffled_deck(&mut self.rng.lock());
        *self.board.lock() = Board::deal(deck, self.options);
        log::debug!("solitaire: new game dealt");
    }

    /// Returns a copy of the current position.
    pub fn snapshot(&self) -> Board {
        self.board.lock().clone()
    }

    /// Returns the current score.
    pub fn score(&self) -> u32 {
        self.board.lock().score()
    }

    /// Returns the number of moves made.
    pub fn moves(&self) -> u32 {
        self.board.lock().moves()
    }

    /// Returns whether all cards are on the foundations.
    pub fn is_won(&self) -> bool {
        self.board.lock().is_won()
    }

    /// Returns whether any action is still available.
    pub fn has_available_moves(&self) -> bool {
        self.board.lock().has_available_moves()
    }

    /// Appends `Won` or `Deadlocked` after a user intent changed the board.
    fn conclude(&self, board: &Board, events: &mut Vec<GameEvent>) {
        if board.is_won() {
            log::debug!("solitaire: won with score {}", board.score());
            events.push(GameEvent::Won {
                score: board.score(),
                moves: board.moves(),
            });
        } else if !self.autoplay_live.is_raised() && !board.has_available_moves() {
            log::debug!("solitaire: no moves left");
            events.push(GameEvent::Deadlocked);
        }
    }

    /// Moves `card` (and every card above it) from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the board untouched, if the move is illegal.
    pub fn attempt_move(
        &self,
        card: Card,
        from: PileRef,
        to: PileRef,
    ) -> Result<Vec<GameEvent>, MoveError> {
        let mut board = self.board.lock();
        let mut events = board.move_cards(card, from, to)?;
        self.conclude(&board, &mut events);
        drop(board);
        Ok(events)
    }

    /// Sends `card` to the first foundation that accepts it.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidMove`] if no foundation accepts the card,
    /// or any error [`attempt_move`](Self::attempt_move) would return.
    pub fn auto_move_to_foundation(
        &self,
        card: Card,
        from: PileRef,
    ) -> Result<Vec<GameEvent>, MoveError> {
        let mut board = self.board.lock();
        let foundation = board.foundation_for(card).ok_or(MoveError::InvalidMove)?;
        let mut events = board.move_cards(card, from, PileRef::Foundation(foundation))?;
        self.conclude(&board, &mut events);
        drop(board);
        Ok(events)
    }

    /// Deals one card to the waste, or recycles the waste into the stock.
    ///
    /// Returns no events when both piles are empty.
    pub fn deal_from_stock(&self) -> Vec<GameEvent> {
        let mut board = self.board.lock();
        let mut events: Vec<GameEvent> = board.deal_from_stock().into_iter().collect();
        if !events.is_empty() {
            self.conclude(&board, &mut events);
        }
        drop(board);
        events
    }

    /// Starts autoplay; the caller then drives it with
    /// [`autoplay_step`](Self::autoplay_step).
    pub fn start_autoplay(&self) {
        self.autoplay_live.raise();
        log::debug!("solitaire: autoplay started");
    }

    /// Stops autoplay. Steps already scheduled will return `Cancelled`.
    pub fn stop_autoplay(&self) {
        if self.autoplay_live.lower() {
            log::debug!("solitaire: autoplay stopped");
        }
    }

    /// Returns whether autoplay is running.
    pub fn is_autoplaying(&self) -> bool {
        self.autoplay_live.is_raised()
    }

    /// Returns the action the next autoplay step would take.
    pub fn hint(&self) -> Option<AutoMove> {
        let autoplay = self.autoplay.lock();
        let board = self.board.lock();
        autoplay.choose(&board)
    }

    /// Performs one autoplay action.
    ///
    /// Returns `Cancelled` if autoplay is not running. When no action is
    /// left, autoplay stops itself and `NoActionAvailable` is returned.
    pub fn autoplay_step(&self) -> StepResult<AutoplayStep> {
        if !self.autoplay_live.is_raised() {
            return StepResult::Cancelled;
        }

        let mut autoplay = self.autoplay.lock();
        let mut board = self.board.lock();

        let Some(action) = autoplay.choose(&board) else {
            self.autoplay_live.lower();
            log::debug!("solitaire: autoplay found no action");
            return StepResult::NoActionAvailable;
        };

        let Some(mut events) = autoplay.execute(&mut board, action) else {
            log::warn!("solitaire: autoplay action {action:?} no longer applies");
            self.autoplay_live.lower();
            return StepResult::NoActionAvailable;
        };

        if board.is_won() {
            self.autoplay_live.lower();
            self.conclude(&board, &mut events);
        }
        drop(board);
        drop(autoplay);

        StepResult::Acted(AutoplayStep { action, events })
    }
}
