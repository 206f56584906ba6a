//! Line-oriented console menu driving a task store.
//!
//! The menu loop reads a numbered selection per round, prompts for the
//! one extra line the selected operation needs (a description or an
//! index), and prints listings one task per line prefixed by position.
//!
//! Input validation lives here, not in the store: malformed or negative
//! index input is rejected before the core is called, while a
//! well-formed out-of-range index is passed through and silently
//! ignored by the store.

use std::io::{self, BufRead, Write};

use termtask_core::{Task, TaskStore};

/// The menu printed before every selection prompt.
const MENU: &str = "\n1. Add task\n2. Remove task\n3. Complete task\n4. List tasks\n5. List pending tasks\n6. Quit\n";

/// Runs the menu loop until the user quits or input ends.
///
/// Input and output are generic so tests can drive the loop with
/// in-memory buffers.
///
/// # Errors
///
/// Returns any I/O error from reading input or writing output.
pub fn run(
    store: &mut TaskStore,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<()> {
    loop {
        output.write_all(MENU.as_bytes())?;
        write!(output, "Select an option: ")?;
        output.flush()?;

        let Some(selection) = read_line(input)? else {
            tracing::info!("console input ended, exiting menu");
            return Ok(());
        };

        match selection.trim() {
            "1" => {
                write!(output, "Task description: ")?;
                output.flush()?;
                let Some(description) = read_line(input)? else {
                    return Ok(());
                };
                store.add(description);
            }
            "2" => {
                let Some(index) = prompt_index(input, output, "Index of the task to remove: ")?
                else {
                    continue;
                };
                store.remove_at(index);
            }
            "3" => {
                let Some(index) = prompt_index(input, output, "Index of the task to complete: ")?
                else {
                    continue;
                };
                store.complete_at(index);
            }
            "4" => print_tasks(output, store.list_all().iter())?,
            "5" => print_tasks(output, store.list_pending().into_iter())?,
            "6" => {
                tracing::info!("console menu quit");
                return Ok(());
            }
            other => {
                writeln!(output, "Invalid option '{other}', try again.")?;
            }
        }
    }
}

/// Prompts for and parses a zero-based task index.
///
/// Returns `Ok(None)` when the input is malformed (message already
/// printed) or when input ends. Negative numbers fail the `usize`
/// parse, so they are rejected here rather than reaching the store.
fn prompt_index(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
) -> io::Result<Option<usize>> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let Some(line) = read_line(input)? else {
        return Ok(None);
    };

    match line.trim().parse::<usize>() {
        Ok(index) => Ok(Some(index)),
        Err(_) => {
            tracing::debug!(input = line.trim(), "rejected malformed index input");
            writeln!(
                output,
                "Invalid index '{}': expected a non-negative number.",
                line.trim()
            )?;
            Ok(None)
        }
    }
}

/// Prints each task on its own line, prefixed by its position in the
/// sequence being listed.
fn print_tasks<'a>(
    output: &mut impl Write,
    tasks: impl Iterator<Item = &'a Task>,
) -> io::Result<()> {
    for (position, task) in tasks.enumerate() {
        writeln!(output, "{position}. {task}")?;
    }
    Ok(())
}

/// Reads one line, stripping the trailing newline.
///
/// Returns `Ok(None)` at end of input.
fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
