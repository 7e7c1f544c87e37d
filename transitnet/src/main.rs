//! fuses the configured transit feeds into a multimodal travel graph and
//! answers batched point-to-point travel time queries against it.
use clap::Parser;
use transitnet::app::TransitnetApp;

fn main() {
    env_logger::init();
    let args = TransitnetApp::parse();
    args.op.run()
}
