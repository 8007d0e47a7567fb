use crate::models::{Icon, NavEntry};

/// Built-in HSQ navigation, in display order.
///
/// Used when no panel configuration file overrides it.
pub fn default_entries() -> Vec<NavEntry> {
    vec![
        NavEntry::new("Dashboard", "/dashboard", Icon::Home).with_roles(["admin"]),
        NavEntry::new("Guests", "/guests", Icon::Users).with_roles(["admin", "receptionist"]),
        NavEntry::new("Reservation", "/reservation", Icon::Calendar)
            .with_roles(["admin", "receptionist"]),
        NavEntry::new("Rooms", "/rooms", Icon::Bed).with_roles(["admin", "receptionist"]),
        NavEntry::new("Discounts", "/Discount", Icon::Ticket).with_roles(["admin", "manager"]),
        NavEntry::new("GST & Tax", "/Gst", Icon::Percent).with_roles(["admin"]),
        NavEntry::new("Inventory", "/Inventory", Icon::Archive)
            .with_roles(["admin", "accountant"]),
        NavEntry::new("Invoices", "/Invoices", Icon::FileText).with_roles(["admin"]),
        NavEntry::new("Revenue", "/Revenue", Icon::FileText).with_roles(["admin", "accountant"]),
        NavEntry::new("Setting", "/settings", Icon::Settings).with_roles(["admin"]),
    ]
}
