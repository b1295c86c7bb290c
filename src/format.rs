//! Display Helpers

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::Contact;

/// Placeholder for a contact without a name
pub const NO_NAME: &str = "—";

/// "First Last", trimmed; the placeholder when both are blank
pub fn full_name(contact: &Contact) -> String {
    let name = format!("{} {}", contact.text("firstName"), contact.text("lastName"));
    let name = name.trim();
    if name.is_empty() {
        NO_NAME.to_string()
    } else {
        name.to_string()
    }
}

/// Up to two uppercase initials from the first two words
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

pub fn timestamp(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %H:%M").to_string()
}

pub fn due_date(date: &NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FieldValue;

    fn contact(first: &str, last: &str) -> Contact {
        Contact::new()
            .with("firstName", FieldValue::text(first))
            .with("lastName", FieldValue::text(last))
    }

    #[test]
    fn test_full_name() {
        assert_eq!(full_name(&contact("Devon", "Lane")), "Devon Lane");
        assert_eq!(full_name(&contact("Devon", "")), "Devon");
        assert_eq!(full_name(&contact("", "Lane")), "Lane");
        assert_eq!(full_name(&contact("  ", " ")), NO_NAME);
        assert_eq!(full_name(&Contact::new()), NO_NAME);
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Devon Lane"), "DL");
        assert_eq!(initials("ada"), "A");
        assert_eq!(initials("mary  ann   smith"), "MA");
        assert_eq!(initials(""), "");
        assert_eq!(initials("   "), "");
    }

    #[test]
    fn test_devon_lane_scenario() {
        let name = full_name(&contact("Devon", "Lane"));
        assert_eq!(name, "Devon Lane");
        assert_eq!(initials(&name), "DL");
    }

    #[test]
    fn test_dates() {
        let at: DateTime<Utc> = "2024-05-03T09:05:00Z".parse().unwrap();
        assert_eq!(timestamp(&at), "May 3, 09:05");
        let due = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(due_date(&due), "Jun 1, 2024");
    }
}
