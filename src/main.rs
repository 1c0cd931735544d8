use clap::Parser;
use slam_elo_processor::{
    args::Args,
    dataset::{self, DatasetError},
    model::elo_model::EloModel
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    dotenv::dotenv().ok(); // Load environment variables from .env file
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log_level))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&args) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), DatasetError> {
    let mut events = dataset::load_events(&args.input)?;
    if let Some(level) = &args.tourney_level {
        events = dataset::filter_by_level(events, level);
    }

    let mut model = EloModel::new(args.elo_config());
    model.process(&events);

    dataset::write_snapshots(&args.output, model.timeseries(), args.format)?;
    if let Some(path) = &args.ratings_output {
        dataset::write_leaderboard(path, &model.leaderboard(), args.format)?;
    }

    info!("Processing complete");
    Ok(())
}
