//! ASCII tree rendering for the header navigation.

use super::navigation::{NavLink, NavigationMachine};

const OPEN: char = '●';
const CLOSED: char = '○';

/// Render the top-level entries, marking the open one, with the visible
/// submenu under it. Closed entries never show their links.
///
/// Example output:
/// ```text
/// ● Art
/// ├── Sculpture
/// └── Painting
/// ○ Design
/// ```
pub fn render_navigation(machine: &NavigationMachine) -> String {
    let open = machine.state().open_entry();
    let mut output = String::new();
    for entry in machine.entries() {
        let is_open = open == Some(entry.id.as_str());
        output.push(if is_open { OPEN } else { CLOSED });
        output.push(' ');
        output.push_str(&entry.label);
        output.push('\n');

        if !is_open {
            continue;
        }
        if let Some(links) = machine.submenu() {
            for (i, link) in links.iter().enumerate() {
                let is_last = i == links.len() - 1;
                render_link(&mut output, link, is_last);
            }
        }
    }
    output
}

fn render_link(output: &mut String, link: &NavLink, is_last: bool) {
    let branch = if is_last { "└── " } else { "├── " };
    output.push_str(branch);
    output.push_str(&link.label);
    output.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::{NavEntry, PointerEvent};

    fn make_entry(id: &str, label: &str, children: &[&str]) -> NavEntry {
        NavEntry {
            id: id.to_string(),
            label: label.to_string(),
            children: children
                .iter()
                .map(|c| NavLink {
                    id: c.to_lowercase(),
                    label: c.to_string(),
                    target: c.to_lowercase(),
                })
                .collect(),
        }
    }

    fn menu() -> NavigationMachine {
        NavigationMachine::new(vec![
            make_entry("1", "Art", &["Sculpture", "Painting"]),
            make_entry("2", "Design", &["Type"]),
            make_entry("3", "Life", &[]),
        ])
    }

    #[test]
    fn test_closed_menu_hides_every_submenu() {
        assert_eq!(render_navigation(&menu()), "○ Art\n○ Design\n○ Life\n");
    }

    #[test]
    fn test_open_entry_shows_only_its_links() {
        let mut machine = menu();
        machine.handle(PointerEvent::EnterEntry("1".to_string()));
        assert_eq!(
            render_navigation(&machine),
            "● Art\n├── Sculpture\n└── Painting\n○ Design\n○ Life\n"
        );
    }

    #[test]
    fn test_open_entry_without_children() {
        let mut machine = menu();
        machine.handle(PointerEvent::EnterEntry("3".to_string()));
        assert_eq!(render_navigation(&machine), "○ Art\n○ Design\n● Life\n");
    }

    #[test]
    fn test_empty_menu() {
        assert_eq!(render_navigation(&NavigationMachine::new(Vec::new())), "");
    }
}
