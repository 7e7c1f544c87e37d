use super::TransitnetOperation;
use clap::Parser;

/// command line tool for fusing transit feeds into a multimodal travel
/// graph and answering batched travel time queries
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct TransitnetApp {
    #[command(subcommand)]
    pub op: TransitnetOperation,
}
