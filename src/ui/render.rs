//! Terminal rendering of a `CalendarView`.

use crate::config::Config;
use crate::core::agenda::group_by_day;
use crate::core::taxonomy::{Classification, classify, resolve_taxonomy};
use crate::core::view::{CalendarView, ViewBody};
use crate::models::{Appointment, DayBucket, TaxonomyField, ViewMode};
use crate::utils::colors::{dim_if, highlight_today, paint_option};
use crate::utils::formatting::{bold, pad_right, truncate, wrap_indented};
use crate::utils::table::{Column, Table};
use crate::utils::time::format_clock;
use chrono::{Datelike, FixedOffset, NaiveDate};

const MONTH_CELL_WIDTH: usize = 16;
const WEEK_CELL_WIDTH: usize = 20;
const MONTH_CELL_LINES: usize = 3;

pub struct Renderer<'c> {
    cfg: &'c Config,
    zone: FixedOffset,
    today: NaiveDate,
}

impl<'c> Renderer<'c> {
    pub fn new(cfg: &'c Config, zone: FixedOffset, today: NaiveDate) -> Self {
        Self { cfg, zone, today }
    }

    pub fn title(&self, view: &CalendarView<'_>) -> String {
        match (&view.mode, &view.window) {
            (ViewMode::Month, _) => view.reference.format("%B %Y").to_string(),
            (ViewMode::Week, Some(w)) => format!(
                "Week {} – {}",
                w.start.format("%d %b"),
                w.end.format("%d %b %Y")
            ),
            (ViewMode::Day, _) => view.reference.format("%A %d %B %Y").to_string(),
            _ => "Agenda".to_string(),
        }
    }

    pub fn render(&self, view: &CalendarView<'_>) -> String {
        match &view.body {
            ViewBody::Grid(days) => match view.mode {
                ViewMode::Day => self.render_day(days),
                ViewMode::Week => self.render_grid(view, days, WEEK_CELL_WIDTH, usize::MAX),
                _ => self.render_grid(view, days, MONTH_CELL_WIDTH, MONTH_CELL_LINES),
            },
            ViewBody::Agenda(list) => self.render_agenda(list),
        }
    }

    fn status_of<'a>(&'a self, a: &'a Appointment) -> Classification<'a> {
        classify(
            resolve_taxonomy(self.cfg.taxonomy.as_ref(), TaxonomyField::Statuses),
            &a.status,
        )
    }

    fn clock(&self, raw: Option<chrono::DateTime<FixedOffset>>) -> String {
        raw.map(|t| format_clock(&t, &self.zone, self.cfg.time_format))
            .unwrap_or_else(|| "--:--".to_string())
    }

    /// Short line used inside grid cells: start time and title.
    fn cell_line(&self, a: &Appointment, width: usize) -> String {
        let text = truncate(&format!("{} {}", self.clock(a.start()), a.title), width);
        paint_option(&text, self.status_of(a).option())
    }

    fn render_grid(
        &self,
        view: &CalendarView<'_>,
        days: &[DayBucket<'_>],
        width: usize,
        max_lines: usize,
    ) -> String {
        let mut out = String::new();

        for label in view.labels {
            out.push_str(&pad_right(&bold(label), width));
            out.push(' ');
        }
        out.push('\n');

        for week in days.chunks(7) {
            let used = week
                .iter()
                .map(|d| d.appointments.len())
                .max()
                .unwrap_or(0);
            let lines = if used > max_lines {
                max_lines + 1
            } else {
                used
            };

            for day in week {
                let number = format!("{:>2}", day.date.day());
                let number = if day.date == self.today {
                    highlight_today(&number)
                } else {
                    dim_if(&number, !day.in_focus)
                };
                out.push_str(&pad_right(&number, width));
                out.push(' ');
            }
            out.push('\n');

            for line in 0..lines {
                for day in week {
                    let cell = if line < max_lines {
                        day.appointments
                            .get(line)
                            .map(|a| self.cell_line(a, width))
                            .unwrap_or_default()
                    } else if day.appointments.len() > max_lines {
                        format!("+{} more", day.appointments.len() - max_lines)
                    } else {
                        String::new()
                    };
                    out.push_str(&pad_right(&dim_if(&cell, !day.in_focus), width));
                    out.push(' ');
                }
                out.push('\n');
            }
            out.push('\n');
        }

        out
    }

    fn render_day(&self, days: &[DayBucket<'_>]) -> String {
        let Some(day) = days.first() else {
            return String::new();
        };
        if day.appointments.is_empty() {
            return "No appointments.\n".to_string();
        }

        let mut table = Table::new(vec![
            Column::new("START", 8),
            Column::new("END", 8),
            Column::new("ID", 4),
            Column::new("TITLE", 10),
            Column::new("STATUS", 8),
            Column::new("PRIORITY", 8),
            Column::new("TYPE", 6),
        ]);

        for a in &day.appointments {
            table.add_row(self.detail_row(a));
        }
        table.render()
    }

    fn detail_row(&self, a: &Appointment) -> Vec<String> {
        let taxonomy = self.cfg.taxonomy.as_ref();
        let cell = |field, value: &str| {
            let c = classify(resolve_taxonomy(taxonomy, field), value);
            paint_option(c.label(), c.option())
        };

        vec![
            self.clock(a.start()),
            self.clock(a.end()),
            a.id.clone(),
            a.title.clone(),
            cell(TaxonomyField::Statuses, &a.status),
            cell(TaxonomyField::Priorities, &a.priority),
            cell(TaxonomyField::Types, &a.kind),
        ]
    }

    fn render_agenda(&self, list: &[&Appointment]) -> String {
        if list.is_empty() {
            return "No appointments.\n".to_string();
        }

        let mut out = String::new();
        for (day, items) in group_by_day(list, &self.zone) {
            let heading = match day {
                Some(d) => d.format("%a %d %b %Y").to_string(),
                None => "Unscheduled".to_string(),
            };
            out.push_str(&bold(&heading));
            out.push('\n');

            for a in items {
                let status = self.status_of(a);
                out.push_str(&format!(
                    "  {}–{}  {}  [{}]  ({})\n",
                    self.clock(a.start()),
                    self.clock(a.end()),
                    a.title,
                    paint_option(status.label(), status.option()),
                    a.id
                ));
                if let Some(desc) = a.description.as_deref().filter(|d| !d.trim().is_empty()) {
                    out.push_str(&wrap_indented(desc, 72, "      "));
                    out.push('\n');
                }
            }
            out.push('\n');
        }
        out
    }
}
