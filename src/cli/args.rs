//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    count_positions::CountPositionsArgs, play::PlayArgs, pvp::PvpArgs, watch::WatchArgs,
};

#[derive(StructOpt)]
#[structopt(
    name = "tiered_chess",
    about = "A chess engine with five difficulty tiers, from random to God Mode ♛"
)]
pub enum Chess {
    #[structopt(
        name = "play",
        about = "Play a game against the computer at the given `--difficulty` (default: medium). Your starting color will be chosen at random unless you specify with `--color`. Enter moves as `e2e4`; `undo`, `hint` and `quit` are also accepted."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "pvp",
        about = "Play a game against another human at the same terminal. Enter moves as `e2e4`; `undo` takes back the last ply and `hint` points at a movable piece."
    )]
    Pvp(PvpArgs),
    #[structopt(
        name = "watch",
        about = "Watch the computer play against itself, with `--white` and `--black` choosing each side's difficulty (default: hard). The game stops after `--max-moves` plies (default: 200)."
    )]
    Watch(WatchArgs),
    #[structopt(
        name = "count-positions",
        about = "Count the number of possible positions for a given `--depth` (default: 4), and reports the time it took to do so. By default, this counts all leaf positions. The routine can count the nodes visited by alpha-beta search instead with `--strategy alpha-beta`."
    )]
    CountPositions(CountPositionsArgs),
}

impl crate::cli::commands::Command for Chess {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Play(cmd),
            Pvp(cmd),
            Watch(cmd),
            CountPositions(cmd),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_subcommands() {
        let pvp = Chess::from_iter_safe(&["tiered_chess", "pvp"]).unwrap();
        assert!(matches!(pvp, Chess::Pvp(_)));

        let play = Chess::from_iter_safe(&["tiered_chess", "play", "--color", "black"]).unwrap();
        assert!(matches!(play, Chess::Play(_)));

        assert!(Chess::from_iter_safe(&["tiered_chess", "pvp", "--depth", "3"]).is_err());
    }
}
