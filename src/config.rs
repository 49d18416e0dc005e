use crate::piece::PieceFactory;
use clap::Parser;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "piece_preview")]
#[command(about = "Interactive preview of the next falling-block pieces, kept in a circular queue")]
#[command(version)]
pub struct Config {
    /// Seed for the piece generator (random when omitted)
    #[arg(short, long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Log filter written to stderr, e.g. `debug` or `tetris_queue=trace`
    #[arg(short, long, value_name = "FILTER", default_value = "warn")]
    pub log_level: String,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Config {
    pub fn piece_factory(&self) -> PieceFactory {
        match self.seed {
            Some(seed) => PieceFactory::seeded(seed),
            None => PieceFactory::from_entropy(),
        }
    }

    pub fn apply_color_choice(&self) {
        if self.no_color {
            colored::control::set_override(false);
        }
    }
}
