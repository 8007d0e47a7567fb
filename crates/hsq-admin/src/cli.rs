//! Terminal output for the `menu` and `check` commands

use comfy_table::{Cell, Color, ContentArrangement, Row, Table};
use hsq_core::{IssueSeverity, ValidationReport};
use hsq_types::{MenuItem, NavEntry, RoleRestriction};

fn header(table: &mut Table, columns: &[&str], no_color: bool) {
    if no_color {
        table.set_header(columns.to_vec());
    } else {
        table.set_header(
            columns
                .iter()
                .map(|c| Cell::new(c).fg(Color::Cyan))
                .collect::<Vec<_>>(),
        );
    }
}

/// Menu as a table (human) or JSON
pub fn format_menu(items: &[MenuItem], json: bool, no_color: bool) -> String {
    if json {
        return serde_json::to_string_pretty(items).unwrap_or_else(|_| "[]".to_string());
    }

    if items.is_empty() {
        return "No entries visible for this role.".to_string();
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    header(&mut table, &["", "Name", "Href", "Icon"], no_color);

    for item in items {
        let marker = if item.active { "*" } else { "" };
        let name = if item.active && !no_color {
            Cell::new(&item.name).fg(Color::Green)
        } else {
            Cell::new(&item.name)
        };
        table.add_row(Row::from(vec![
            Cell::new(marker),
            name,
            Cell::new(&item.href),
            Cell::new(item.icon.name()),
        ]));
    }

    table.to_string()
}

/// Role column text: `(all)` when unrestricted, `(none)` for an empty list
pub fn format_roles(roles: &RoleRestriction) -> String {
    match roles {
        RoleRestriction::Unrestricted => "(all)".to_string(),
        RoleRestriction::Only(roles) if roles.is_empty() => "(none)".to_string(),
        RoleRestriction::Only(roles) => roles
            .iter()
            .map(|r| r.as_str())
            .collect::<Vec<_>>()
            .join(", "),
    }
}

/// Full entry list in declaration order
pub fn format_entries(entries: &[NavEntry], no_color: bool) -> String {
    if entries.is_empty() {
        return "No navigation entries configured.".to_string();
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    header(&mut table, &["#", "Name", "Href", "Icon", "Roles"], no_color);

    for (index, entry) in entries.iter().enumerate() {
        table.add_row(Row::from(vec![
            (index + 1).to_string(),
            entry.name.clone(),
            entry.href.clone(),
            entry.icon.name().to_string(),
            format_roles(&entry.roles),
        ]));
    }

    table.to_string()
}

/// One line per issue followed by a summary line
pub fn format_report(report: &ValidationReport) -> String {
    let mut lines: Vec<String> = report
        .issues
        .iter()
        .map(|issue| {
            let level = match issue.severity {
                IssueSeverity::Error => "error",
                IssueSeverity::Warning => "warning",
            };
            format!("{}: {}: {}", level, issue.entry, issue.message)
        })
        .collect();

    let (warnings, errors) = report.counts();
    lines.push(format!("{} error(s), {} warning(s)", errors, warnings));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use hsq_types::{build_menu, default_entries, Icon};

    #[test]
    fn test_menu_json_contains_active_flag() {
        let items = build_menu(&default_entries(), Some("manager"), "/Discount/summer");
        let out = format_menu(&items, true, true);

        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        let array = parsed.as_array().unwrap();
        assert_eq!(array.len(), 1);
        assert_eq!(array[0]["name"], "Discounts");
        assert_eq!(array[0]["active"], true);
    }

    #[test]
    fn test_menu_table_marks_active_entry() {
        let items = build_menu(&default_entries(), Some("receptionist"), "/rooms/12");
        let out = format_menu(&items, false, true);

        assert!(out.contains("Guests"));
        assert!(out.contains("Rooms"));
        let rooms_line = out.lines().find(|l| l.contains("/rooms")).unwrap();
        assert!(rooms_line.contains('*'));
        let guests_line = out.lines().find(|l| l.contains("/guests")).unwrap();
        assert!(!guests_line.contains('*'));
    }

    #[test]
    fn test_menu_empty_for_unknown_role() {
        let items = build_menu(&default_entries(), Some("janitor"), "/");
        assert_eq!(
            format_menu(&items, false, true),
            "No entries visible for this role."
        );
        assert_eq!(format_menu(&items, true, true), "[]");
    }

    #[test]
    fn test_format_roles() {
        assert_eq!(format_roles(&RoleRestriction::Unrestricted), "(all)");
        assert_eq!(format_roles(&RoleRestriction::Only(vec![])), "(none)");
        assert_eq!(
            format_roles(&RoleRestriction::only(["Admin", "manager"])),
            "admin, manager"
        );
    }

    #[test]
    fn test_entries_table_lists_every_entry() {
        let entries = vec![
            NavEntry::new("Dashboard", "/dashboard", Icon::Home).with_roles(["admin"]),
            NavEntry::new("Help", "/help", Icon::FileText),
        ];
        let out = format_entries(&entries, true);

        assert!(out.contains("Dashboard"));
        assert!(out.contains("/help"));
        assert!(out.contains("(all)"));
        assert!(out.contains("file-text"));
    }

    #[test]
    fn test_report_summary() {
        let mut report = ValidationReport::new();
        report.add_error("Rooms", "duplicate href /rooms");
        report.add_warning("Help", "visible to every role");

        let out = format_report(&report);
        assert!(out.contains("error: Rooms: duplicate href /rooms"));
        assert!(out.contains("warning: Help: visible to every role"));
        assert!(out.ends_with("1 error(s), 1 warning(s)"));
    }
}
