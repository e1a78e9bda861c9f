use crate::error::TodoError;
use crate::store::TaskStore;
use crate::task::TaskStatus;
use crate::task_list::TaskList;
use crossterm::style::Stylize;
use std::io::{self, BufRead, IsTerminal, Write};

const TABLE_WIDTH: usize = 55;
const DESCRIPTION_WIDTH: usize = 30;
const TRUNCATED_WIDTH: usize = 27;

/// Whether messages get ANSI colours. Only a terminal gets them, so redirected
/// output stays plain text.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    color: bool,
}

impl Palette {
    pub fn detect() -> Self {
        Self {
            color: io::stdout().is_terminal(),
        }
    }

    pub fn plain() -> Self {
        Self { color: false }
    }

    fn heading(self, text: &str) -> String {
        self.paint(text, |t| t.bold().to_string())
    }

    fn error(self, text: &str) -> String {
        self.paint(text, |t| t.red().to_string())
    }

    fn success(self, text: &str) -> String {
        self.paint(text, |t| t.green().to_string())
    }

    fn notice(self, text: &str) -> String {
        self.paint(text, |t| t.yellow().to_string())
    }

    fn paint(self, text: &str, style: impl FnOnce(&str) -> String) -> String {
        if self.color {
            style(text)
        } else {
            text.to_string()
        }
    }
}

/// Runs the interactive menu until the user picks "5" or input ends. The task
/// file is re-read at the top of every iteration.
pub fn run_app<R: BufRead, W: Write>(
    store: &TaskStore,
    palette: Palette,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    loop {
        let mut list = store.load();

        writeln!(output, "\n{}", palette.heading("--- SIMPLE TO-DO MENU ---"))?;
        writeln!(output, "1. View My Tasks")?;
        writeln!(output, "2. Add a Task")?;
        writeln!(output, "3. Edit a Task")?;
        writeln!(output, "4. Remove a Task")?;
        writeln!(output, "5. Exit Program")?;

        let Some(choice) = prompt(input, output, "What would you like to do? (1-5): ")? else {
            tracing::debug!("input closed, leaving menu");
            writeln!(output, "\nGoodbye!")?;
            return Ok(());
        };

        match choice.as_str() {
            "1" => show_tasks(output, palette, &list)?,
            "2" => add_task(store, palette, &mut list, input, output)?,
            "3" => edit_task(store, palette, &mut list, input, output)?,
            "4" => remove_task(store, palette, &mut list, input, output)?,
            "5" => {
                writeln!(output, "Goodbye!")?;
                return Ok(());
            }
            _ => writeln!(
                output,
                "{}",
                palette.error("Invalid choice, please pick a number between 1 and 5.")
            )?,
        }
    }
}

pub fn show_tasks<W: Write>(output: &mut W, palette: Palette, list: &TaskList) -> io::Result<()> {
    if list.is_empty() {
        writeln!(output, "\n{}", palette.notice("Your to-do list is empty!"))
    } else {
        write!(output, "{}", render_table(list))
    }
}

pub fn render_table(list: &TaskList) -> String {
    let mut table = format!("\n{}\n", "=".repeat(TABLE_WIDTH));
    table.push_str("ID    | Task Description               | Status\n");
    table.push_str(&"-".repeat(TABLE_WIDTH));
    table.push('\n');
    for task in &list.tasks {
        table.push_str(&format!(
            "{:<5} | {:<width$} | {:<10}\n",
            task.id,
            truncate_description(&task.description),
            task.status,
            width = DESCRIPTION_WIDTH,
        ));
    }
    table.push_str(&"=".repeat(TABLE_WIDTH));
    table.push_str("\n\n");
    table
}

/// Keeps the table column intact: anything over 30 characters is cut to 27
/// plus an ellipsis.
pub fn truncate_description(description: &str) -> String {
    if description.chars().count() > DESCRIPTION_WIDTH {
        let mut short: String = description.chars().take(TRUNCATED_WIDTH).collect();
        short.push_str("...");
        short
    } else {
        description.to_string()
    }
}

fn add_task<R: BufRead, W: Write>(
    store: &TaskStore,
    palette: Palette,
    list: &mut TaskList,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    let Some(text) = prompt(input, output, "What do you need to do? ")? else {
        return Ok(());
    };
    let id = match list.add_task(&text) {
        Ok(task) => task.id,
        Err(TodoError::IdsExhausted) => {
            tracing::warn!("refusing to add a task: no ids left");
            writeln!(output, "{}", palette.error("Error: No task IDs are left to assign!"))?;
            return Ok(());
        }
        Err(_) => {
            writeln!(output, "{}", palette.error("Error: You can't add an empty task!"))?;
            return Ok(());
        }
    };
    tracing::debug!(id, "task added");
    persist(store, palette, list, output)?;
    writeln!(output, "{}", palette.success("Task added successfully!"))
}

fn edit_task<R: BufRead, W: Write>(
    store: &TaskStore,
    palette: Palette,
    list: &mut TaskList,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    show_tasks(output, palette, list)?;
    if list.is_empty() {
        return Ok(());
    }

    let Some(key) = prompt(input, output, "Enter the ID of the task you want to edit: ")? else {
        return Ok(());
    };
    let Some(task) = list.get(&key) else {
        writeln!(output, "{}", palette.error("Could not find a task with that ID."))?;
        return Ok(());
    };

    writeln!(output, "Current description: {}", task.description)?;
    let Some(description) = prompt(
        input,
        output,
        "Enter new description (leave blank to keep current): ",
    )?
    else {
        return Ok(());
    };
    let Some(answer) = prompt(input, output, "Is this task finished? (yes/no): ")? else {
        return Ok(());
    };
    let status = match answer.to_lowercase().as_str() {
        "yes" | "y" => TaskStatus::Completed,
        _ => TaskStatus::Pending,
    };

    list.edit_task(&key, &description, status);
    tracing::debug!(id = %key, %status, "task edited");
    persist(store, palette, list, output)?;
    writeln!(output, "{}", palette.success("Task updated!"))
}

fn remove_task<R: BufRead, W: Write>(
    store: &TaskStore,
    palette: Palette,
    list: &mut TaskList,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    show_tasks(output, palette, list)?;
    if list.is_empty() {
        return Ok(());
    }

    let Some(key) = prompt(input, output, "Enter the ID of the task to remove: ")? else {
        return Ok(());
    };
    if list.remove_task(&key).is_none() {
        return writeln!(output, "{}", palette.error("Task ID not found."));
    }
    tracing::debug!(id = %key, "task removed");
    persist(store, palette, list, output)?;
    writeln!(output, "{}", palette.success("Task removed!"))
}

/// A failed save is reported and otherwise ignored; the menu carries on.
fn persist<W: Write>(
    store: &TaskStore,
    palette: Palette,
    list: &TaskList,
    output: &mut W,
) -> io::Result<()> {
    if let Err(err) = store.save(list) {
        tracing::warn!(path = %store.path().display(), "failed to save tasks: {err}");
        writeln!(
            output,
            "{}",
            palette.error("Oops! There was an error saving your tasks.")
        )?;
    }
    Ok(())
}

/// Prints `message`, reads one line and strips its line terminator. `None`
/// means input is exhausted.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> io::Result<Option<String>> {
    write!(output, "{}", message)?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.strip_suffix('\n').unwrap_or(&line);
    let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
    Ok(Some(trimmed.to_string()))
}
