use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tictac")]
#[command(about = "Tic-tac-toe sessions driven by moves from network peers")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new game and show its initial status
    New,

    /// Replay a list of moves as if they arrived from a peer
    ///
    /// Each move is `x,y` (players alternate, Player1 first) or `p1:x,y` / `p2:x,y`
    /// to force the acting player. Every accepted move is pushed to a listener and
    /// printed; refused moves print the reason.
    ///
    /// Examples:
    ///   tictac play 0,0 1,1 0,1 2,2 0,2
    ///   tictac play p1:0,0 p1:1,1
    ///   tictac play 1,1 0,0 --json
    Play {
        /// Moves to apply, in order
        #[arg(required = true)]
        moves: Vec<String>,
        /// Print statuses as JSON regardless of configuration
        #[arg(long)]
        json: bool,
    },

    /// Show the configuration file location and its values
    Config,
}
