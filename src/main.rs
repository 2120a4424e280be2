use std::process;

use pi_revision::config::Config;
use pi_revision::{app, log};

fn main() {
    let conf = match Config::from_any() {
        Ok(conf) => conf,
        Err(e) => {
            eprintln!("Could not load config: {}", e);
            process::exit(1);
        }
    };

    // Setup simplelog
    if let Err(e) = log::setup(&conf.log) {
        eprintln!("Could not set up logging: {}", e);
        process::exit(1);
    }

    if app::launch(&conf).is_err() {
        process::exit(1);
    }
}
