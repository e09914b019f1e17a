//! SessionController - 対話ループ
//!
//! 状態遷移:
//! - LoggedOut -> (register | login) -> LoggedOut | LoggedIn
//! - LoggedIn -> (task op)* -> LoggedIn
//! - LoggedIn -> logout -> LoggedOut
//! - LoggedOut -> exit -> Terminated
//!
//! 入力が尽きた（EOF）場合は exit / logout と同じ扱い。
//! 想定内のエラーはメッセージにして続行し、ストレージ障害だけを上に返す。

use std::io::{BufRead, Write};

use anyhow::Result;
use taskkeeper_core::{App, CoreError, MarkOutcome, Session, TaskId};
use taskkeeper_core::impls::JsonFileStore;

pub struct SessionController<I, O> {
    app: App,
    input: I,
    output: O,
}

/// ログイン後メニューの選択肢
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Add,
    View,
    MarkCompleted,
    Delete,
    Logout,
}

impl MenuChoice {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "1" => Some(MenuChoice::Add),
            "2" => Some(MenuChoice::View),
            "3" => Some(MenuChoice::MarkCompleted),
            "4" => Some(MenuChoice::Delete),
            "5" => Some(MenuChoice::Logout),
            _ => None,
        }
    }
}

impl<I: BufRead, O: Write> SessionController<I, O> {
    pub fn new(app: App, input: I, output: O) -> Self {
        Self { app, input, output }
    }

    pub fn into_output(self) -> O {
        self.output
    }

    /// トップレベルのループ。exit か EOF で戻る
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "Welcome to the CLI Task Manager")?;
        loop {
            writeln!(self.output, "1) Register")?;
            writeln!(self.output, "2) Login")?;
            writeln!(self.output, "3) Exit")?;
            let Some(cmd) = self.prompt("Select: ")? else {
                break;
            };
            match cmd.trim() {
                "1" => self.register()?,
                "2" => {
                    if let Some(session) = self.login()? {
                        self.run_menu(session)?;
                    }
                }
                "3" => break,
                _ => writeln!(self.output, "Invalid choice.\n")?,
            }
        }
        writeln!(self.output, "Exiting. Have a nice day!")?;
        Ok(())
    }

    /// 名前が空でなく未使用になるまで、パスワードは確認と一致し空でなくなるまで聞き直す
    pub fn register(&mut self) -> Result<()> {
        writeln!(self.output, "\n== Registration ==")?;
        let username = loop {
            let Some(raw) = self.prompt("Choose a username: ")? else {
                return Ok(());
            };
            let name = raw.trim().to_string();
            if self.app.credentials().contains(&name)? {
                writeln!(self.output, "Username taken, try again.")?;
            } else if name.is_empty() {
                writeln!(self.output, "Username cannot be blank.")?;
            } else {
                break name;
            }
        };

        let password = loop {
            let Some(pwd) = self.prompt("Choose a password: ")? else {
                return Ok(());
            };
            let Some(confirm) = self.prompt("Confirm password: ")? else {
                return Ok(());
            };
            if pwd != confirm {
                writeln!(self.output, "Passwords do not match.")?;
            } else if pwd.is_empty() {
                writeln!(self.output, "Password cannot be blank.")?;
            } else {
                break pwd;
            }
        };

        match self.app.register(&username, &password) {
            Ok(()) => writeln!(self.output, "User '{username}' registered successfully.\n")?,
            Err(CoreError::DuplicateUser(_)) => writeln!(self.output, "Username taken, try again.\n")?,
            Err(CoreError::BlankField(field)) => {
                writeln!(self.output, "{} cannot be blank.\n", capitalize(&field.to_string()))?
            }
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }

    /// 1 回だけ聞いて認証する（リトライなし）
    pub fn login(&mut self) -> Result<Option<Session<JsonFileStore>>> {
        writeln!(self.output, "\n== Login ==")?;
        let Some(raw) = self.prompt("Username: ")? else {
            return Ok(None);
        };
        let username = raw.trim().to_string();
        let Some(password) = self.prompt("Password: ")? else {
            return Ok(None);
        };

        match self.app.login(&username, &password) {
            Ok(Some(session)) => {
                writeln!(self.output, "Welcome back, {username}!\n")?;
                Ok(Some(session))
            }
            Ok(None) => {
                writeln!(self.output, "Invalid password.\n")?;
                Ok(None)
            }
            Err(CoreError::UnknownUser(_)) => {
                writeln!(self.output, "No such user.\n")?;
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// ログアウト（または EOF）までメニューを回す
    pub fn run_menu(&mut self, session: Session<JsonFileStore>) -> Result<()> {
        loop {
            writeln!(self.output, "== Task Manager ==")?;
            writeln!(self.output, "1) Add Task")?;
            writeln!(self.output, "2) View Tasks")?;
            writeln!(self.output, "3) Mark Completed")?;
            writeln!(self.output, "4) Delete Task")?;
            writeln!(self.output, "5) Logout")?;
            let Some(choice) = self.prompt("Choose an option: ")? else {
                break;
            };
            match MenuChoice::parse(&choice) {
                Some(MenuChoice::Add) => self.add_task(&session)?,
                Some(MenuChoice::View) => self.view_tasks(&session)?,
                Some(MenuChoice::MarkCompleted) => self.mark_completed(&session)?,
                Some(MenuChoice::Delete) => self.delete_task(&session)?,
                Some(MenuChoice::Logout) => {
                    writeln!(self.output, "Goodbye, {}!\n", session.username())?;
                    break;
                }
                None => writeln!(self.output, "Invalid option.\n")?,
            }
        }
        session.logout();
        Ok(())
    }

    fn add_task(&mut self, session: &Session<JsonFileStore>) -> Result<()> {
        let Some(raw) = self.prompt("Task description: ")? else {
            return Ok(());
        };
        match session.tasks().add(raw.trim()) {
            Ok(task) => writeln!(self.output, "Task {} added.\n", task.id)?,
            Err(CoreError::BlankField(_)) => writeln!(self.output, "Cannot add empty task.\n")?,
            Err(CoreError::IdExhausted(_)) => writeln!(self.output, "No task ID left to assign.\n")?,
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }

    fn view_tasks(&mut self, session: &Session<JsonFileStore>) -> Result<()> {
        let tasks = session.tasks().list()?;
        if tasks.is_empty() {
            writeln!(self.output, "No tasks yet.\n")?;
            return Ok(());
        }
        writeln!(self.output, "\nYour Tasks:")?;
        writeln!(self.output, "{}", "-".repeat(30))?;
        for t in &tasks {
            writeln!(self.output, "[{}] {} ({})", t.id, t.description, t.status)?;
        }
        writeln!(self.output)?;
        Ok(())
    }

    fn mark_completed(&mut self, session: &Session<JsonFileStore>) -> Result<()> {
        if session.tasks().list()?.is_empty() {
            writeln!(self.output, "No tasks to update.\n")?;
            return Ok(());
        }
        let Some(id) = self.prompt_id("Enter task ID to mark completed: ")? else {
            return Ok(());
        };
        match session.tasks().mark_completed(id) {
            Ok(MarkOutcome::Completed) => writeln!(self.output, "Task {id} marked completed.\n")?,
            Ok(MarkOutcome::AlreadyCompleted) => writeln!(self.output, "Already completed.\n")?,
            Err(CoreError::NotFound(_)) => writeln!(self.output, "Task ID not found.\n")?,
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }

    fn delete_task(&mut self, session: &Session<JsonFileStore>) -> Result<()> {
        if session.tasks().list()?.is_empty() {
            writeln!(self.output, "No tasks to delete.\n")?;
            return Ok(());
        }
        let Some(id) = self.prompt_id("Enter task ID to delete: ")? else {
            return Ok(());
        };
        match session.tasks().delete(id) {
            Ok(()) => writeln!(self.output, "Task {id} deleted.\n")?,
            Err(CoreError::NotFound(_)) => writeln!(self.output, "Task ID not found.\n")?,
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }

    /// id を読む。整数でなければ "Invalid ID." を出して None
    fn prompt_id(&mut self, label: &str) -> Result<Option<TaskId>> {
        let Some(raw) = self.prompt(label)? else {
            return Ok(None);
        };
        match raw.parse::<TaskId>() {
            Ok(id) => Ok(Some(id)),
            Err(CoreError::InvalidIdFormat(_)) => {
                writeln!(self.output, "Invalid ID.\n")?;
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// 1 行読む（改行は除く）。EOF なら None
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Cursor;
    use taskkeeper_core::AppBuilder;
    use tempfile::TempDir;

    fn app(dir: &TempDir) -> App {
        AppBuilder::new()
            .data_dir(dir.path())
            .bcrypt_cost(4)
            .build()
            .unwrap()
    }

    /// 入力を流し込んで run() し、出力全体を返す
    fn run_script(dir: &TempDir, lines: &[&str]) -> String {
        let mut script = lines.join("\n");
        script.push('\n');
        let mut controller = SessionController::new(app(dir), Cursor::new(script), Vec::new());
        controller.run().unwrap();
        String::from_utf8(controller.into_output()).unwrap()
    }

    #[rstest]
    #[case::add("1", Some(MenuChoice::Add))]
    #[case::padded(" 5 ", Some(MenuChoice::Logout))]
    #[case::zero("0", None)]
    #[case::word("add", None)]
    fn menu_choice_parsing(#[case] raw: &str, #[case] expected: Option<MenuChoice>) {
        assert_eq!(MenuChoice::parse(raw), expected);
    }

    #[test]
    fn full_walkthrough() {
        let dir = TempDir::new().unwrap();
        let out = run_script(
            &dir,
            &[
                "1", "alice", "pw", "pw",
                "2", "alice", "pw",
                "1", "Buy milk",
                "1", "Walk dog",
                "3", "1",
                "4", "2",
                "1", "Read book",
                "2",
                "5",
                "3",
            ],
        );

        assert!(out.contains("User 'alice' registered successfully."));
        assert!(out.contains("Welcome back, alice!"));
        assert!(out.contains("Task 1 added."));
        assert!(out.contains("Task 1 marked completed."));
        assert!(out.contains("Task 2 deleted."));
        assert!(out.contains("[1] Buy milk (Completed)"));
        assert!(out.contains("[2] Read book (Pending)"));
        assert!(!out.contains("Walk dog (Pending)"));
        assert!(out.contains("Goodbye, alice!"));
        assert!(out.trim_end().ends_with("Exiting. Have a nice day!"));
    }

    #[test]
    fn registration_reprompts_until_valid() {
        let dir = TempDir::new().unwrap();
        run_script(&dir, &["1", "bob", "x", "x", "3"]);

        let out = run_script(
            &dir,
            &["1", "bob", "  ", "carol", "a", "b", "", "", "pw", "pw", "3"],
        );

        assert!(out.contains("Username taken, try again."));
        assert!(out.contains("Username cannot be blank."));
        assert!(out.contains("Passwords do not match."));
        assert!(out.contains("Password cannot be blank."));
        assert!(out.contains("User 'carol' registered successfully."));
    }

    #[test]
    fn login_failures_are_reported_without_retry() {
        let dir = TempDir::new().unwrap();
        let out = run_script(
            &dir,
            &["1", "alice", "pw", "pw", "2", "mallory", "pw", "2", "alice", "bad", "3"],
        );

        assert!(out.contains("No such user."));
        assert!(out.contains("Invalid password."));
        assert!(!out.contains("Welcome back"));
    }

    #[test]
    fn task_menu_edge_messages() {
        let dir = TempDir::new().unwrap();
        let out = run_script(
            &dir,
            &[
                "1", "alice", "pw", "pw",
                "2", "alice", "pw",
                "2",
                "3",
                "4",
                "1", "   ",
                "1", "Buy milk",
                "3", "abc",
                "3", "9",
                "3", "1",
                "3", "1",
                "4", "x",
                "4", "7",
                "9",
                "5",
                "3",
            ],
        );

        assert!(out.contains("No tasks yet."));
        assert!(out.contains("No tasks to update."));
        assert!(out.contains("No tasks to delete."));
        assert!(out.contains("Cannot add empty task."));
        assert_eq!(out.matches("Invalid ID.").count(), 2);
        assert_eq!(out.matches("Task ID not found.").count(), 2);
        assert!(out.contains("Already completed."));
        assert!(out.contains("Invalid option."));
    }

    #[test]
    fn invalid_top_level_choice_and_eof() {
        let dir = TempDir::new().unwrap();
        let mut controller =
            SessionController::new(app(&dir), Cursor::new("x\n".to_string()), Vec::new());
        controller.run().unwrap();
        let out = String::from_utf8(controller.into_output()).unwrap();

        assert!(out.contains("Invalid choice."));
        assert!(out.trim_end().ends_with("Exiting. Have a nice day!"));
    }

    #[test]
    fn eof_inside_menu_logs_out_and_exits() {
        let dir = TempDir::new().unwrap();
        run_script(&dir, &["1", "alice", "pw", "pw", "3"]);

        let out = run_script(&dir, &["2", "alice", "pw", "1", "Buy milk"]);

        assert!(out.contains("Task 1 added."));
        assert!(out.trim_end().ends_with("Exiting. Have a nice day!"));
    }
}
