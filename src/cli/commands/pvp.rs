//! PvP command - play a game against another human.

use structopt::StructOpt;
use tiered_chess::input_handler::{read_player_input, PlayerInput};

use super::util::{create_engine, print_hint, print_outcome, report_status};
use super::Command;

#[derive(StructOpt)]
pub struct PvpArgs {}

impl Command for PvpArgs {
    fn execute(self) {
        let mut engine = create_engine(None);
        println!("{}", engine.board());

        while !report_status(&engine) {
            match read_player_input() {
                Ok(PlayerInput::Move { from, to }) => match engine.apply_move(from, to) {
                    Ok(outcome) => print_outcome(&engine, &outcome),
                    Err(err) => println!("{}", err),
                },
                Ok(PlayerInput::Undo) => {
                    if !engine.undo() {
                        println!("nothing to undo");
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
