use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::AppointmentStore;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        out,
        range,
        force,
    } = cmd
    {
        let store = AppointmentStore::open(&cfg.appointments_file)?;
        ExportLogic::export(
            store.appointments(),
            cfg,
            *format,
            out,
            range.as_deref(),
            *force,
        )?;
    }
    Ok(())
}
