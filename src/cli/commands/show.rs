use crate::cli::commands::load_session;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::schedule::DayRow;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::table::{Column, Table};

/// Handle the `show` command: per-day table for one agent.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { agent } = &cli.command {
        let mut session = load_session(cli.input.as_deref(), cfg)?;
        session.select_agent(agent)?;

        let rows = session.selected_rows(&cfg.view_options());

        header(format!("Agent {}", agent));
        print!("{}", render_rows(&rows, &cfg.separator_char));
    }
    Ok(())
}

pub fn render_rows(rows: &[DayRow], separator: &str) -> String {
    let mut table = Table::new(vec![
        Column::new("Date", 10),
        Column::new("Schedule", 19),
        Column::new("Activities", 0),
    ])
    .with_separator(separator);

    for row in rows {
        let activities: Vec<String> = row.activities.iter().map(|a| a.to_string()).collect();
        table.add_row(vec![
            row.label.clone(),
            row.schedule.clone(),
            activities.join("\n"),
        ]);
    }

    table.render()
}
