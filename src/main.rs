use clap::Parser;
use jumping_lamp::{config::AppConfig, flow};

fn main() -> anyhow::Result<()> {
    let config = AppConfig::parse();
    flow::run(config)
}
