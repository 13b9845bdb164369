use crate::api::hackatime::UsageEntry;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Renders one 7-day usage breakdown (languages, editors or projects)
    /// as a terminal table. Empty breakdowns print nothing.
    pub fn usage(title: &str, entries: &[UsageEntry]) -> Result<()> {
        if entries.is_empty() {
            return Ok(());
        }

        println!("\n{}:", title);
        let mut table = Table::new();

        table.add_row(row!["NAME", "TIME", "PERCENT"]);
        for entry in entries {
            table.add_row(row![entry.name, entry.text, format!("{:.1}%", entry.percent)]);
        }
        table.printstd();

        Ok(())
    }
}
