use crate::app::AppState;
use crate::domain::{task_line, time_label};
use crate::error::CommandError;
use anyhow::Result;
use std::io::Write;

/// Type tags the factory knows by name
const KNOWN_TYPES: [&str; 3] = ["simple", "urgent", "project"];

const HELP: &str = "\
commands:
  add [simple|urgent|project|type:<tag>] <title>   add a task
  title <text>        set the pending title
  type <tag>          set the pending type
  submit              add the pending task and reset the form
  toggle <n>          flip completion of task n
  delete <n>          delete task n
  undo                revert the last add or delete
  list                tasks in insertion order
  priority            tasks by ascending priority
  queue               arrival queue size and front
  log                 activity log
  help                this text
  quit                leave the shell";

/// A parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add {
        task_type: Option<String>,
        title: String,
    },
    Title(String),
    Type(String),
    Submit,
    Toggle(usize),
    Delete(usize),
    Undo,
    List,
    Priority,
    Queue,
    Log,
    Help,
    Quit,
}

/// Parse one input line. Blank lines parse to None.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "add" | "a" => parse_add(rest),
        "title" => Command::Title(rest.to_string()),
        "type" => {
            if rest.is_empty() {
                return Err(CommandError::MissingArgument("type"));
            }
            Command::Type(rest.to_string())
        }
        "submit" => Command::Submit,
        "toggle" | "t" => Command::Toggle(parse_position(rest)?),
        "delete" | "d" => Command::Delete(parse_position(rest)?),
        "undo" | "u" => Command::Undo,
        "list" | "ls" => Command::List,
        "priority" | "p" => Command::Priority,
        "queue" | "q" => Command::Queue,
        "log" => Command::Log,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

fn parse_add(rest: &str) -> Command {
    let (first, remainder) = match rest.split_once(char::is_whitespace) {
        Some((first, remainder)) => (first, remainder.trim()),
        None => (rest, ""),
    };

    if KNOWN_TYPES.contains(&first) {
        Command::Add {
            task_type: Some(first.to_string()),
            title: remainder.to_string(),
        }
    } else if let Some(tag) = first.strip_prefix("type:") {
        Command::Add {
            task_type: Some(tag.to_string()),
            title: remainder.to_string(),
        }
    } else {
        Command::Add {
            task_type: None,
            title: rest.to_string(),
        }
    }
}

fn parse_position(arg: &str) -> Result<usize, CommandError> {
    if arg.is_empty() {
        return Err(CommandError::MissingArgument("task number"));
    }
    arg.parse::<usize>()
        .map_err(|_| CommandError::InvalidPosition(arg.to_string()))
}

/// Handle one input line. Returns true when the session should end.
pub fn handle_line<W: Write>(app: &mut AppState, line: &str, json: bool, out: &mut W) -> Result<bool> {
    match parse_command(line) {
        Ok(Some(command)) => execute(app, command, json, out),
        Ok(None) => Ok(false),
        Err(err) => {
            tracing::debug!(%err, line, "rejected command");
            writeln!(out, "error: {}", err)?;
            Ok(false)
        }
    }
}

/// Run a parsed command against the app
pub fn execute<W: Write>(app: &mut AppState, command: Command, json: bool, out: &mut W) -> Result<bool> {
    match command {
        Command::Add { task_type, title } => {
            let task_type = task_type.unwrap_or_else(|| app.config.default_type.clone());
            report_added(app.add_task(&title, &task_type).is_some(), out)?;
        }
        Command::Title(title) => app.set_input_title(&title),
        Command::Type(task_type) => app.set_input_type(&task_type),
        Command::Submit => {
            report_added(app.submit_input_form().is_some(), out)?;
        }
        Command::Toggle(n) => {
            if !app.toggle_at(n) {
                writeln!(out, "no task {}", n)?;
            }
        }
        Command::Delete(n) => {
            if !app.delete_at(n) {
                writeln!(out, "no task {}", n)?;
            }
        }
        Command::Undo => match app.undo() {
            Some(kind) => writeln!(out, "undid {}", kind.to_tag())?,
            None => writeln!(out, "nothing to undo")?,
        },
        Command::List => render_list(app, json, out)?,
        Command::Priority => render_priority(app, json, out)?,
        Command::Queue => render_queue(app, json, out)?,
        Command::Log => render_log(app, json, out)?,
        Command::Help => writeln!(out, "{}", HELP)?,
        Command::Quit => return Ok(true),
    }
    Ok(false)
}

fn report_added<W: Write>(added: bool, out: &mut W) -> Result<()> {
    if !added {
        writeln!(out, "nothing added: title is empty")?;
    }
    Ok(())
}

fn render_list<W: Write>(app: &AppState, json: bool, out: &mut W) -> Result<()> {
    let tasks = app.store.tasks();
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(tasks)?)?;
        return Ok(());
    }
    if tasks.is_empty() {
        writeln!(out, "no tasks")?;
    }
    for (idx, task) in tasks.iter().enumerate() {
        writeln!(out, "{:>3}. {}", idx + 1, task_line(task))?;
    }
    if app.store.is_undo_available() {
        writeln!(out, "(undo available)")?;
    }
    Ok(())
}

fn render_priority<W: Write>(app: &AppState, json: bool, out: &mut W) -> Result<()> {
    let tasks = app.store.priority_tasks();
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&tasks)?)?;
        return Ok(());
    }
    for task in tasks {
        writeln!(out, "  {}", task_line(task))?;
    }
    Ok(())
}

fn render_queue<W: Write>(app: &AppState, json: bool, out: &mut W) -> Result<()> {
    let summary = app.store.queue_summary();
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?;
        return Ok(());
    }
    match &summary.front {
        Some(front) => writeln!(out, "{} queued, front: {}", summary.size, front.title())?,
        None => writeln!(out, "queue is empty")?,
    }
    Ok(())
}

fn render_log<W: Write>(app: &AppState, json: bool, out: &mut W) -> Result<()> {
    let entries = app.store.activity_log();
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&entries)?)?;
        return Ok(());
    }
    for entry in entries {
        writeln!(
            out,
            "[{}] {}",
            time_label(&entry.timestamp, &app.config.log_time_format),
            entry.message
        )?;
    }
    Ok(())
}
