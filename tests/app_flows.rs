#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use taskdesk::db::tasks::Tasks;
    use taskdesk::libs::app::TaskManager;
    use taskdesk::libs::config::{Config, DbConfig};
    use taskdesk::libs::input::LineReader;
    use taskdesk::libs::task::{Task, TaskFilter, TaskStatus};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Feeds a fixed script of lines to the controller's prompts.
    struct ScriptedReader {
        lines: VecDeque<String>,
    }

    impl ScriptedReader {
        fn new(lines: &[&str]) -> Self {
            ScriptedReader {
                lines: lines.iter().map(|line| line.to_string()).collect(),
            }
        }
    }

    impl LineReader for ScriptedReader {
        fn read_line(&mut self, _prompt: &str) -> anyhow::Result<String> {
            self.lines.pop_front().ok_or_else(|| anyhow::anyhow!("input script exhausted"))
        }
    }

    struct AppTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for AppTestContext {
        fn setup() -> Self {
            AppTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl AppTestContext {
        fn config(&self) -> Config {
            Config {
                database: DbConfig {
                    file: "tasks.db".to_string(),
                    dir: Some(self.temp_dir.path().to_path_buf()),
                },
            }
        }

        /// Controller wired to scripted input, schema set up.
        fn manager(&self, script: &[&str]) -> TaskManager<ScriptedReader> {
            let app = TaskManager::with_reader(&self.config(), ScriptedReader::new(script)).unwrap();
            app.setup().unwrap();
            app
        }

        /// Direct repository handle for seeding and verification.
        fn repository(&self) -> Tasks {
            let tasks = Tasks::new(&self.config().database).unwrap();
            tasks.setup().unwrap();
            tasks
        }

        fn seed(&self, name: &str, description: &str, status: TaskStatus) -> i64 {
            let mut tasks = self.repository();
            let mut task = Task::new(name, description, status);
            assert!(tasks.add(&mut task));
            task.id.unwrap()
        }
    }

    #[test_context(AppTestContext)]
    #[test]
    fn test_add_flow_default_status(ctx: &mut AppTestContext) {
        let mut app = ctx.manager(&["Buy milk", "2% milk", ""]);
        app.add_task().unwrap();

        let all = ctx.repository().get_all(&TaskFilter::All);
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Buy milk");
        assert_eq!(all[0].description, "2% milk");
        assert_eq!(all[0].status, TaskStatus::NotStarted);
    }

    #[test_context(AppTestContext)]
    #[test]
    fn test_add_flow_explicit_status(ctx: &mut AppTestContext) {
        let mut app = ctx.manager(&["Write docs", "API guide", "3"]);
        app.add_task().unwrap();

        let all = ctx.repository().get_all(&TaskFilter::All);
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].status, TaskStatus::Completed);
    }

    #[test_context(AppTestContext)]
    #[test]
    fn test_add_flow_reprompts_on_invalid_names(ctx: &mut AppTestContext) {
        // Empty and oversized names re-prompt; the oversized value never
        // reaches storage.
        let long_name = "x".repeat(256);
        let mut app = ctx.manager(&["", long_name.as_str(), "Valid name", "Something", "2"]);
        app.add_task().unwrap();

        let all = ctx.repository().get_all(&TaskFilter::All);
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Valid name");
        assert_eq!(all[0].status, TaskStatus::InProgress);
    }

    #[test_context(AppTestContext)]
    #[test]
    fn test_add_flow_cancel_at_any_prompt(ctx: &mut AppTestContext) {
        let scripts: [&[&str]; 3] = [&["exit"], &["Task name", "exit"], &["Task name", "A description", "exit"]];
        for script in scripts {
            let mut app = ctx.manager(script);
            app.add_task().unwrap();
        }

        // No cancelled attempt left anything behind.
        assert!(ctx.repository().get_all(&TaskFilter::All).is_empty());
    }

    #[test_context(AppTestContext)]
    #[test]
    fn test_update_flow_changes_status(ctx: &mut AppTestContext) {
        let id = ctx.seed("Buy milk", "2% milk", TaskStatus::NotStarted);
        let id_line = id.to_string();

        let mut app = ctx.manager(&[id_line.as_str(), "1"]);
        app.update_task().unwrap();

        let task = ctx.repository().get_by_id(id).unwrap();
        assert_eq!(task.status, TaskStatus::InProgress);
    }

    #[test_context(AppTestContext)]
    #[test]
    fn test_update_flow_cancel_leaves_store_unchanged(ctx: &mut AppTestContext) {
        let id = ctx.seed("Stable task", "Must not change", TaskStatus::NotStarted);
        let id_line = id.to_string();

        let scripts: [&[&str]; 2] = [&["exit"], &[id_line.as_str(), "exit"]];
        for script in scripts {
            let mut app = ctx.manager(script);
            app.update_task().unwrap();
            assert_eq!(ctx.repository().get_by_id(id).unwrap().status, TaskStatus::NotStarted);
        }
    }

    #[test_context(AppTestContext)]
    #[test]
    fn test_update_flow_unknown_id(ctx: &mut AppTestContext) {
        let id = ctx.seed("Existing", "desc", TaskStatus::InProgress);

        let mut app = ctx.manager(&["9999"]);
        app.update_task().unwrap();

        let all = ctx.repository().get_all(&TaskFilter::All);
        assert_eq!(all.len(), 1);
        assert_eq!(ctx.repository().get_by_id(id).unwrap().status, TaskStatus::InProgress);
    }

    #[test_context(AppTestContext)]
    #[test]
    fn test_update_flow_without_active_tasks(ctx: &mut AppTestContext) {
        ctx.seed("Done already", "desc", TaskStatus::Completed);

        // Completed tasks are not offered for update; the flow returns
        // before consuming any input.
        let mut app = ctx.manager(&[]);
        app.update_task().unwrap();
    }

    #[test_context(AppTestContext)]
    #[test]
    fn test_delete_flow_confirmed(ctx: &mut AppTestContext) {
        let id = ctx.seed("Old task", "to be removed", TaskStatus::Completed);
        let id_line = id.to_string();

        let mut app = ctx.manager(&[id_line.as_str(), "Y"]);
        app.delete_task().unwrap();

        assert!(ctx.repository().get_all(&TaskFilter::All).is_empty());
    }

    #[test_context(AppTestContext)]
    #[test]
    fn test_delete_flow_rejected_confirmation(ctx: &mut AppTestContext) {
        let id = ctx.seed("Keeper", "stays around", TaskStatus::NotStarted);
        let id_line = id.to_string();

        let scripts: [&[&str]; 2] = [&[id_line.as_str(), "n"], &[id_line.as_str(), "exit"]];
        for script in scripts {
            let mut app = ctx.manager(script);
            app.delete_task().unwrap();
        }

        assert_eq!(ctx.repository().get_all(&TaskFilter::All).len(), 1);
    }

    #[test_context(AppTestContext)]
    #[test]
    fn test_delete_flow_cancel_at_id_prompt(ctx: &mut AppTestContext) {
        ctx.seed("Keeper", "stays around", TaskStatus::NotStarted);

        let mut app = ctx.manager(&["exit"]);
        app.delete_task().unwrap();

        assert_eq!(ctx.repository().get_all(&TaskFilter::All).len(), 1);
    }

    #[test_context(AppTestContext)]
    #[test]
    fn test_delete_flow_unknown_id(ctx: &mut AppTestContext) {
        ctx.seed("Existing", "desc", TaskStatus::NotStarted);

        let mut app = ctx.manager(&["9999"]);
        app.delete_task().unwrap();

        assert_eq!(ctx.repository().get_all(&TaskFilter::All).len(), 1);
    }

    #[test_context(AppTestContext)]
    #[test]
    fn test_show_flow_runs_with_tasks(ctx: &mut AppTestContext) {
        ctx.seed("Visible", "desc", TaskStatus::InProgress);

        let mut app = ctx.manager(&["1"]);
        app.show_tasks().unwrap();
    }

    #[test_context(AppTestContext)]
    #[test]
    fn test_menu_exit_keyword_quits(ctx: &mut AppTestContext) {
        for script in [&["5"], &["exit"]] {
            let mut app = ctx.manager(script);
            app.run().unwrap();
        }
    }

    #[test_context(AppTestContext)]
    #[test]
    fn test_full_lifecycle_through_flows(ctx: &mut AppTestContext) {
        let mut app = ctx.manager(&["Buy milk", "2% milk", ""]);
        app.add_task().unwrap();

        let mut tasks = ctx.repository();
        let all = tasks.get_all(&TaskFilter::All);
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].status, TaskStatus::NotStarted);
        let id = all[0].id.unwrap();
        let id_line = id.to_string();

        let mut app = ctx.manager(&[id_line.as_str(), "1"]);
        app.update_task().unwrap();

        let active = tasks.get_all(&TaskFilter::ByStatus(TaskStatus::ACTIVE.to_vec()));
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].status, TaskStatus::InProgress);

        let mut app = ctx.manager(&[id_line.as_str(), "y"]);
        app.delete_task().unwrap();

        assert!(tasks.get_all(&TaskFilter::All).is_empty());
    }
}
