use comfy_table::presets::{ASCII_FULL, UTF8_FULL};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use stitchforge::calculator::{Action, Step};
use stitchforge::checklist::Checklist;
use stitchforge::config::{ChecklistConfig, Theme};

fn new_table(theme: Theme) -> Table {
    let mut table = Table::new();
    let preset = match theme {
        Theme::Plain => ASCII_FULL,
        Theme::Light | Theme::Dark => UTF8_FULL,
    };
    table
        .load_preset(preset)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn accent(theme: Theme) -> Option<Color> {
    match theme {
        Theme::Light => Some(Color::Blue),
        Theme::Dark => Some(Color::Cyan),
        Theme::Plain => None,
    }
}

fn header(text: &str, theme: Theme) -> Cell {
    let cell = Cell::new(text).add_attribute(Attribute::Bold);
    match accent(theme) {
        Some(color) => cell.fg(color),
        None => cell,
    }
}

fn action_label(step: &Step) -> String {
    match step.action {
        Action::Increase => format!("add {}", step.actions),
        Action::Decrease => "k2tog".to_string(),
    }
}

pub fn steps(steps: &[Step], theme: Theme) -> Table {
    let mut table = new_table(theme);

    table.add_row(vec![
        header("#", theme),
        header("Knit", theme),
        header("Then", theme),
        header("Instruction", theme),
    ]);

    for i in 0..=1 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (i, step) in steps.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(step.knit),
            Cell::new(action_label(step)),
            Cell::new(&step.text),
        ]);
    }
    table
}

pub fn checklist(list: &Checklist, markers: &ChecklistConfig, theme: Theme) -> Table {
    let mut table = new_table(theme);
    let next = list.next_pending();

    table.add_row(vec![
        header("#", theme),
        header("Done", theme),
        header("Instruction", theme),
    ]);

    if let Some(col) = table.column_mut(0) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    for (i, item) in list.items().iter().enumerate() {
        let number = i + 1;
        let marker = if item.done {
            &markers.done_marker
        } else {
            &markers.pending_marker
        };

        let mut text = Cell::new(&item.step.text);
        if item.done {
            if theme != Theme::Plain {
                text = text.fg(Color::DarkGrey);
            }
        } else if next == Some(number) {
            text = text.add_attribute(Attribute::Bold);
        }

        table.add_row(vec![
            Cell::new(number),
            Cell::new(marker).set_alignment(CellAlignment::Center),
            text,
        ]);
    }
    table
}
