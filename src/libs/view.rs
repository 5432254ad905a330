use super::task::Task;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "DESCRIPTION", "STATUS", "CREATED"]);
        for task in tasks {
            table.add_row(row![
                task.id.unwrap_or(0),
                task.name,
                task.description,
                task.status,
                task.created_at.format("%Y-%m-%d %H:%M")
            ]);
        }
        table.printstd();
    }
}
