use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};
use taskprompt_core::{Task, TaskView};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const TITLE_WIDTH: usize = 40;

#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "#")]
    index: String,
    #[tabled(rename = "Título")]
    title: String,
    #[tabled(rename = "Estado")]
    status: String,
    #[tabled(rename = "Dificultad")]
    difficulty: String,
}

/// Numbered listing; the numbers are what the user types to open a task.
pub fn task_table(tasks: &[&Task], colored: bool) -> String {
    let rows = tasks.iter().enumerate().map(|(i, task)| TaskRow {
        index: format!("[{}]", i + 1),
        title: truncate(task.title(), TITLE_WIDTH),
        status: task.status().label().to_string(),
        difficulty: task.difficulty().to_string(),
    });

    let mut table = Table::new(rows);
    table.with(Style::modern());
    if colored {
        table.with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    }
    table.to_string()
}

pub fn task_details(view: &TaskView) -> String {
    format!(
        concat!(
            "\t{}\n\t{}\n",
            "\tEstado: {}\n\tDificultad: {}\n",
            "\tVencimiento: {}\n\tCreación: {}\n\tÚltima edición: {}\n",
        ),
        view.title,
        view.description,
        view.status,
        view.difficulty,
        view.due_at,
        view.created_at,
        view.last_edited_at,
    )
}

/// Cuts `text` to at most `max_width` terminal columns, marking the cut with `…`.
pub fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}
