use super::formatter::format_timestamp;
use super::project::Project;
use super::task::Task;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn project_names(names: &[String]) {
        let mut table = Table::new();

        table.add_row(row!["#", "NAME"]);
        for (index, name) in names.iter().enumerate() {
            table.add_row(row![index + 1, name]);
        }
        table.printstd();
    }

    pub fn project(project: &Project) {
        let mut table = Table::new();

        table.add_row(row!["Project ID", project.id]);
        table.add_row(row!["Name", project.name]);
        table.add_row(row!["Due Date", format_timestamp(&project.due_date)]);
        table.add_row(row!["Owner", project.owner]);
        table.add_row(row!["Project Type", project.project_type]);
        table.add_row(row!["Allowed Files", project.allowed_files]);
        table.add_row(row!["Scope", project.scope]);
        table.printstd();
    }

    pub fn tasks(tasks: &[Task]) {
        let mut table = Table::new();

        table.add_row(row!["TASK ID", "NAME", "DESCRIPTION", "START DATE", "END DATE"]);
        for task in tasks {
            table.add_row(row![
                task.id,
                task.name,
                task.description,
                format_timestamp(&task.start),
                format_timestamp(&task.end)
            ]);
        }
        table.printstd();
    }
}
