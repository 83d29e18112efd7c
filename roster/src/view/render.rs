use std::fmt::Write;

use strum::IntoEnumIterator;

use crate::{
    consts::consts::{EMPTY_PLACEHOLDER, LOADING_PLACEHOLDER},
    model::person::Person,
};

use super::{
    form::{Field, PersonForm},
    list::{PersonList, RenderState},
    notification::Notification,
};

const HEADERS: [&str; 5] = ["Id", "Name", "Email", "Age", "Status"];

/// Every listed person is shown as active, the service has no notion of status
const STATUS: &str = "Active";

fn row(person: &Person) -> [String; 5] {
    [
        person.id.map(|id| id.to_string()).unwrap_or_default(),
        person.full_name(),
        person.email.clone(),
        person.age.to_string(),
        STATUS.to_string(),
    ]
}

/// Renders the person table as plain text, one line per row
pub fn render_table(list: &PersonList) -> String {
    let mut out = String::new();

    let (rows, placeholder): (Vec<[String; 5]>, _) = match list.render_state() {
        RenderState::Loading => (vec![], Some(LOADING_PLACEHOLDER)),
        RenderState::Empty => (vec![], Some(EMPTY_PLACEHOLDER)),
        RenderState::Populated(people) => (people.into_iter().map(row).collect(), None),
    };

    let mut widths = HEADERS.map(str::len);

    for cells in rows.iter() {
        for (width, cell) in widths.iter_mut().zip(cells.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header = HEADERS.map(str::to_string);
    push_line(&mut out, &header, &widths);

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, &rule, &widths);

    match placeholder {
        Some(placeholder) => push_placeholder(&mut out, placeholder),
        None => {
            for cells in rows.iter() {
                push_line(&mut out, cells, &widths);
            }
        }
    }

    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();

    let _ = writeln!(out, "{}", line.join("  ").trim_end());
}

fn push_placeholder(out: &mut String, placeholder: &str) {
    let _ = writeln!(out, "  {}", placeholder);
}

/// Renders the open dialog, or nothing when it is closed
pub fn render_form(form: &PersonForm) -> String {
    let mut out = String::new();

    let Some(draft) = form.draft() else {
        return out;
    };

    let _ = writeln!(out, "== {} ==", form.title());

    for field in Field::iter() {
        let value = match field {
            Field::FirstName => draft.first_name.clone(),
            Field::LastName => draft.last_name.clone(),
            Field::Email => draft.email.clone(),
            Field::Age => draft.age.to_string(),
        };

        let _ = writeln!(out, "  {:<10} {}", format!("{}:", field), value);
    }

    let _ = writeln!(out, "  [cancel]  [{}]", form.submit_label());

    out
}

pub fn render_notification(notification: &Notification) -> String {
    format!("[{}] {}", notification.title, notification.description)
}
