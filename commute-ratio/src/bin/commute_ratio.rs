use clap::Parser;
use commute_ratio::app::CommuteRatioCli;

fn main() {
    env_logger::init();
    let args = CommuteRatioCli::parse();
    log::info!("starting {} (v{})", args.op, env!("CARGO_PKG_VERSION"));
    if let Err(e) = args.op.run() {
        log::error!("{} failed: {e}", args.op);
        std::process::exit(1);
    }
    log::info!("finished {}.", args.op);
}
