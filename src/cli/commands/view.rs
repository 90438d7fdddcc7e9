use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::view::build_view;
use crate::core::window::shift as shift_reference;
use crate::errors::AppResult;
use crate::store::AppointmentStore;
use crate::ui::messages::header;
use crate::ui::render::Renderer;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::View {
        mode,
        date: raw_date,
        shift,
    } = cmd
    {
        let settings = cfg.view_settings()?;
        let store = AppointmentStore::open(&cfg.appointments_file)?;

        let reference = shift_reference(date::date_or_today(raw_date.as_deref())?, *mode, *shift);
        let view = build_view(store.appointments(), reference, *mode, &settings);

        let renderer = Renderer::new(cfg, settings.zone, date::today());
        header(renderer.title(&view));
        print!("{}", renderer.render(&view));
    }
    Ok(())
}
