use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::AppointmentStore;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (skipped in test mode)
///  - an empty appointment file, unless one exists already
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let path = crate::config_path(cli);

    let cfg = if cli.test {
        cfg.clone()
    } else {
        let written = Config::init_at(&path, cli.file.as_deref())?;
        success(format!("Config file : {}", path.display()));
        written
    };

    let store = AppointmentStore::open(&cfg.appointments_file)?;
    if store.path().exists() {
        info(format!(
            "Appointment file already present: {} ({} appointments)",
            store.path().display(),
            store.appointments().len()
        ));
    } else {
        store.save()?;
        success(format!("Appointments: {}", store.path().display()));
    }

    success("rAgenda initialization completed!");
    Ok(())
}
