//! Watch command - watch the computer play against itself.

use structopt::StructOpt;
use tiered_chess::board::color::Color;
use tiered_chess::game::Difficulty;

use super::util::{create_engine, print_outcome, report_status};
use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(short, long, default_value = "hard")]
    pub white: Difficulty,
    #[structopt(short, long, default_value = "hard")]
    pub black: Difficulty,
    #[structopt(long = "max-moves", default_value = "200")]
    pub max_moves: usize,
    #[structopt(long, help = "Seed for the engine's random choices")]
    pub seed: Option<u64>,
}

impl Command for WatchArgs {
    fn execute(self) {
        let mut engine = create_engine(self.seed);
        println!("{}", engine.board());

        for _ in 0..self.max_moves {
            if report_status(&engine) {
                return;
            }
            let turn = engine.turn();
            let difficulty = match turn {
                Color::White => self.white,
                Color::Black => self.black,
            };
            let result = engine
                .request_ai_move(turn, difficulty)
                .and_then(|chess_move| engine.apply_chess_move(&chess_move));
            match result {
                Ok(outcome) => print_outcome(&engine, &outcome),
                Err(err) => {
                    eprintln!("engine error: {}", err);
                    return;
                }
            }
        }
        println!("stopped after {} moves", self.max_moves);
    }
}
