//! Play command - play a game against the computer.

use structopt::StructOpt;
use tiered_chess::board::color::Color;
use tiered_chess::game::Difficulty;
use tiered_chess::input_handler::{read_player_input, PlayerInput};

use super::util::{create_engine, print_hint, print_outcome, report_status, undo_to_turn};
use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(short = "c", long = "color", default_value = "random")]
    pub color: Color,
    #[structopt(short, long, default_value = "medium")]
    pub difficulty: Difficulty,
    #[structopt(long, help = "Seed for the engine's random choices")]
    pub seed: Option<u64>,
}

impl Command for PlayArgs {
    fn execute(self) {
        let mut engine = create_engine(self.seed);
        println!("you are playing {} against {}", self.color, self.difficulty);
        println!("{}", engine.board());

        while !report_status(&engine) {
            let turn = engine.turn();
            if turn != self.color {
                let result = engine
                    .request_ai_move(turn, self.difficulty)
                    .and_then(|chess_move| engine.apply_chess_move(&chess_move));
                match result {
                    Ok(outcome) => print_outcome(&engine, &outcome),
                    Err(err) => {
                        eprintln!("engine error: {}", err);
                        return;
                    }
                }
                continue;
            }

            match read_player_input() {
                Ok(PlayerInput::Move { from, to }) => match engine.apply_move(from, to) {
                    Ok(outcome) => print_outcome(&engine, &outcome),
                    Err(err) => println!("{}", err),
                },
                Ok(PlayerInput::Undo) => {
                    // Take back the engine's reply along with our own move.
                    match undo_to_turn(&mut engine, self.color) {
                        0 => println!("nothing to undo"),
                        1 => println!("took back 1 ply"),
                        plies => println!("took back {} plies", plies),
                    }
                    println!("{}", engine.board());
                }
                Ok(PlayerInput::Hint) => print_hint(&mut engine),
                Ok(PlayerInput::Quit) => return,
                Err(err) => println!("{}", err),
            }
        }
    }
}
