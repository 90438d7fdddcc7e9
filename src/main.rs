//! rAgenda main entrypoint.

use ragenda::run;
use ragenda::ui::messages::error;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("RAGENDA_LOG", "warn")).init();

    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
