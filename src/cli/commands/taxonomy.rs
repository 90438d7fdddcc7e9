use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::taxonomy::{default_value, resolve_taxonomy};
use crate::errors::AppResult;
use crate::utils::colors::paint_option;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Taxonomy { field } = cmd {
        let options = resolve_taxonomy(cfg.taxonomy.as_ref(), *field);
        let preselected = default_value(options);

        let mut table = Table::new(vec![
            Column::new("VALUE", 8),
            Column::new("LABEL", 8),
            Column::new("COLOR", 7),
            Column::new("", 8),
        ]);

        for o in options {
            let flag = if o.disabled {
                "disabled"
            } else if preselected == Some(o.value.as_str()) {
                "default"
            } else {
                ""
            };
            table.add_row(vec![
                o.value.clone(),
                paint_option(&o.label, Some(o)),
                o.color.clone().unwrap_or_default(),
                flag.to_string(),
            ]);
        }

        println!("{} ({} options)\n", field.as_str(), options.len());
        print!("{}", table.render());
    }
    Ok(())
}
