use std::str::FromStr;
use std::time::{Duration, SystemTime};

use crate::board::Board;
use crate::evaluate::EvaluatorKind;
use crate::move_generator::MoveGenerator;
use crate::searcher::alpha_beta::{AlphaBetaSearch, MoveOrdering, SearchProfile};

#[derive(Debug)]
pub enum CountPositionsStrategy {
    All,
    AlphaBeta,
}

impl FromStr for CountPositionsStrategy {
    type Err = &'static str;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(CountPositionsStrategy::All),
            "alpha-beta" => Ok(CountPositionsStrategy::AlphaBeta),
            _ => Err("invalid strategy; options are: all, alpha-beta"),
        }
    }
}

/// Positions visited by an unpruned-breadth alpha-beta search of `depth`
/// plies from `board`.
fn count_searched_positions(depth: u8, board: &mut Board, move_generator: &MoveGenerator) -> usize {
    let profile = SearchProfile {
        depth,
        breadth: usize::MAX,
        evaluator: EvaluatorKind::Standard,
        ordering: MoveOrdering::Quick,
        max_extensions: 0,
    };
    let turn = board.turn();
    let candidates = move_generator.generate_moves(board, turn);
    let mut search = AlphaBetaSearch::new(move_generator, profile);
    if let Err(err) = search.best_move(board, &candidates) {
        eprintln!("search failed at depth {}: {}", depth, err);
    }
    search.searched_position_count()
}

pub fn run_count_positions(depth: u8, strategy: CountPositionsStrategy) {
    let depths = 1..=depth;
    let move_generator = MoveGenerator::default();

    let mut total_positions = 0;
    let mut total_duration = Duration::from_secs(0);

    for depth in depths {
        let mut board = Board::default();

        let starting_time = SystemTime::now();
        let count = match strategy {
            CountPositionsStrategy::All => move_generator.count_positions(depth, &mut board),
            CountPositionsStrategy::AlphaBeta => {
                count_searched_positions(depth, &mut board, &move_generator)
            }
        };
        let duration = SystemTime::now()
            .duration_since(starting_time)
            .unwrap_or_default();
        let positions_per_second = count as f64 / duration.as_secs_f64();

        total_positions += count;
        total_duration += duration;

        println!(
            "depth: {}, positions: {}, positions per second: {}",
            depth, count, positions_per_second
        );
    }

    println!(
        "total positions: {}, total duration: {:?}, positions per second: {}",
        total_positions,
        total_duration,
        total_positions as f64 / total_duration.as_secs_f64()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strategy() {
        assert!(matches!(
            "all".parse::<CountPositionsStrategy>(),
            Ok(CountPositionsStrategy::All)
        ));
        assert!(matches!(
            "alpha-beta".parse::<CountPositionsStrategy>(),
            Ok(CountPositionsStrategy::AlphaBeta)
        ));
        assert!("minimax".parse::<CountPositionsStrategy>().is_err());
    }

    #[test]
    fn test_alpha_beta_visits_every_root_move_at_depth_one() {
        let mut board = Board::default();
        let move_generator = MoveGenerator::new();
        assert_eq!(20, count_searched_positions(1, &mut board, &move_generator));
        assert_eq!(Board::default(), board);
    }
}
