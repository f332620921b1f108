//! Head-to-head play between two players
//!
//! The arena is the game loop: it asks the seated player for a move, plays
//! it on the game record, and repeats until the board is terminal. Seats
//! can alternate across a series so each player opens half the games.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    Error, Result,
    minimax::Decision,
    ports::Player,
    tictactoe::{Board, Game, GameOutcome, Mark},
};

/// A single move as seen by an arena observer
#[derive(Debug)]
pub struct Turn<'a> {
    pub player: &'a str,
    pub side: Mark,
    pub index: usize,
    /// Position after the move
    pub board: &'a Board,
    pub decision: Option<Decision>,
}

/// Tally of a series, indexed by the order players were given to the arena
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesResult {
    pub players: [String; 2],
    pub wins: [usize; 2],
    pub draws: usize,
    pub games: usize,
}

impl SeriesResult {
    pub fn new(players: [String; 2]) -> Self {
        Self {
            players,
            wins: [0, 0],
            draws: 0,
            games: 0,
        }
    }

    /// Record a finished game; `winner` is the arena index of the winning player
    pub fn record(&mut self, winner: Option<usize>) {
        match winner {
            Some(player) => self.wins[player] += 1,
            None => self.draws += 1,
        }
        self.games += 1;
    }

    pub fn win_rate(&self, player: usize) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins[player] as f64 / self.games as f64
        }
    }
}

/// Two players and the board size they play on
pub struct Arena {
    players: [Box<dyn Player>; 2],
    size: usize,
    alternate_seats: bool,
}

impl Arena {
    /// Create an arena; `first` opens every game unless seats alternate
    pub fn new(first: Box<dyn Player>, second: Box<dyn Player>, size: usize) -> Self {
        Self {
            players: [first, second],
            size,
            alternate_seats: false,
        }
    }

    /// Swap which player opens on every other game of a series
    pub fn with_alternating_seats(mut self, enabled: bool) -> Self {
        self.alternate_seats = enabled;
        self
    }

    pub fn player_names(&self) -> [String; 2] {
        [
            self.players[0].name().to_string(),
            self.players[1].name().to_string(),
        ]
    }

    /// Seed both players, the second with `seed + 1`
    pub fn seed(&mut self, seed: u64) -> Result<()> {
        self.players[0].set_rng_seed(seed)?;
        self.players[1].set_rng_seed(seed.wrapping_add(1))
    }

    /// Play one game to completion.
    ///
    /// `opener` is the arena index of the player taking the first mark.
    /// `on_turn` sees every move after it is played.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if `opener` is not 0 or 1.
    /// Propagates any player or board error; the game is abandoned.
    pub fn play_game<F>(&mut self, opener: usize, mut on_turn: F) -> Result<Game>
    where
        F: FnMut(&Turn<'_>),
    {
        if opener > 1 {
            return Err(Error::InvalidConfiguration {
                message: format!("opener must be 0 or 1, got {opener}"),
            });
        }

        let board = Board::new(self.size)?;
        let marks = board.marks();
        let seats = [opener, 1 - opener];
        for (seat, &player) in seats.iter().enumerate() {
            self.players[player].assign_mark(marks[seat]);
        }

        let mut game = Game::new(board);
        while !game.is_over() {
            let board = game.current_state()?;
            let side = board.to_move();
            let player = &mut self.players[seats[board.to_move_index()]];

            let index = player.select_move(&board, side)?;
            game.play(index)?;

            let after = game.current_state()?;
            on_turn(&Turn {
                player: player.name(),
                side,
                index,
                board: &after,
                decision: player.last_decision(),
            });
        }

        debug!(outcome = ?game.outcome, moves = game.moves.len(), "game finished");
        Ok(game)
    }

    /// Arena index of the player who won `game`, if anyone did
    fn winner_index(game: &Game, opener: usize) -> Option<usize> {
        match game.outcome {
            Some(GameOutcome::Win(mark)) if mark == game.initial.marks()[0] => Some(opener),
            Some(GameOutcome::Win(_)) => Some(1 - opener),
            _ => None,
        }
    }

    /// Play `games` games and tally the results
    pub fn play_series(&mut self, games: usize) -> Result<SeriesResult> {
        let mut result = SeriesResult::new(self.player_names());
        for game_number in 0..games {
            let opener = if self.alternate_seats { game_number % 2 } else { 0 };
            let game = self.play_game(opener, |_| {})?;
            result.record(Self::winner_index(&game, opener));
        }

        info!(
            games = result.games,
            first_wins = result.wins[0],
            second_wins = result.wins[1],
            draws = result.draws,
            "series finished"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::RandomPlayer;

    /// Always plays the lowest empty index
    struct FirstEmpty;

    impl Player for FirstEmpty {
        fn select_move(&mut self, board: &Board, _side: Mark) -> Result<usize> {
            board
                .empty_indices()
                .first()
                .copied()
                .ok_or(Error::NoValidMoves)
        }

        fn name(&self) -> &str {
            "FirstEmpty"
        }
    }

    #[test]
    fn test_play_game_reports_every_turn() {
        let mut arena = Arena::new(Box::new(FirstEmpty), Box::new(FirstEmpty), 3);
        let mut turns = Vec::new();
        let game = arena
            .play_game(0, |turn| turns.push((turn.side, turn.index)))
            .unwrap();

        // o takes 0, 2, 4, 6 and wins on the anti-diagonal
        assert_eq!(game.outcome, Some(GameOutcome::Win(Mark::CIRCLE)));
        assert_eq!(turns.len(), 7);
        assert_eq!(turns[0], (Mark::CIRCLE, 0));
        assert_eq!(turns[1], (Mark::CROSS, 1));
        assert_eq!(turns[6], (Mark::CIRCLE, 6));
    }

    #[test]
    fn test_opener_out_of_range() {
        let mut arena = Arena::new(Box::new(FirstEmpty), Box::new(FirstEmpty), 3);
        assert!(matches!(
            arena.play_game(2, |_| {}),
            Err(Error::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_winner_index_follows_seats() {
        let mut arena = Arena::new(Box::new(FirstEmpty), Box::new(FirstEmpty), 3);
        let game = arena.play_game(1, |_| {}).unwrap();
        assert_eq!(Arena::winner_index(&game, 1), Some(1));
        assert_eq!(Arena::winner_index(&game, 0), Some(0));
    }

    #[test]
    fn test_series_alternates_openers() {
        let mut arena = Arena::new(Box::new(FirstEmpty), Box::new(FirstEmpty), 3)
            .with_alternating_seats(true);
        let result = arena.play_series(4).unwrap();
        assert_eq!(result.games, 4);
        assert_eq!(result.wins, [2, 2]);
        assert_eq!(result.draws, 0);
        assert!((result.win_rate(0) - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_random_series_totals() {
        let mut arena = Arena::new(
            Box::new(RandomPlayer::new("A".to_string())),
            Box::new(RandomPlayer::new("B".to_string())),
            3,
        );
        arena.seed(7).unwrap();
        let result = arena.play_series(20).unwrap();
        assert_eq!(result.wins[0] + result.wins[1] + result.draws, 20);
        assert_eq!(result.players, ["A".to_string(), "B".to_string()]);
    }
}
