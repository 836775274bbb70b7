use crate::db::categories::Category;
use crate::libs::list::Section;
use crate::libs::statistics::StatisticsService;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Render the sectioned tracker list, one table per category.
    pub fn sections(sections: &[Section]) -> Result<()> {
        for section in sections {
            println!("\n{}", section.title);
            let mut table = Table::new();

            table.add_row(row!["ID", "", "TRACKER", "SCHEDULE", "KIND", "DONE", "TOTAL"]);
            for section_row in &section.rows {
                table.add_row(row![
                    section_row.tracker.id.unwrap_or(0),
                    section_row.tracker.emoji,
                    section_row.tracker.title,
                    section_row.tracker.schedule.label(),
                    section_row.tracker.kind.label(),
                    if section_row.completed_on_date { "✓" } else { "" },
                    section_row.total_completions
                ]);
            }
            table.printstd();
        }

        Ok(())
    }

    pub fn categories(categories: &[Category]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "PINNED"]);
        for category in categories {
            table.add_row(row![category.id.unwrap_or(0), category.title, if category.is_pinned { "yes" } else { "" }]);
        }
        table.printstd();

        Ok(())
    }

    pub fn statistics(statistics: &StatisticsService) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["Completed trackers", statistics.total_completions()]);
        table.add_row(row!["Best streak", statistics.best_streak()]);
        table.add_row(row!["Perfect days", statistics.perfect_days()]);
        table.add_row(row!["Average per day", statistics.average_completion()]);
        table.printstd();

        Ok(())
    }
}
