//! Decoding of the flat tab-separated rows emitted by the generated
//! Contacts scripts, and escaping of values interpolated into them.
//!
//! Contact rows carry 9 or 10 fields in fixed order (id, first name, last
//! name, organization, job title, note, birthday, emails, phones,
//! addresses); group rows carry 3 (id, name, member count). Multi-valued
//! fields are `;;;`-joined. An absent scalar arrives as the literal
//! `missing value`.

use crate::domain::{compose_full_name, Contact, ContactGroup};

/// Literal the scripting interface emits for an absent property.
pub const MISSING_VALUE: &str = "missing value";

/// Delimiter joining multi-valued fields within one row field.
pub const LIST_DELIMITER: &str = ";;;";

const CONTACT_FIELD_COUNT: usize = 9;
const GROUP_FIELD_COUNT: usize = 3;

/// Escapes a value for interpolation into a double-quoted AppleScript
/// string literal. Backslashes must be doubled before quotes are escaped;
/// the reverse order corrupts values containing both characters.
pub fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Decodes newline-separated contact rows. Rows with fewer than nine
/// fields are dropped, not errors; empty input means zero results.
pub fn decode_contacts(output: &str) -> Vec<Contact> {
    if output.is_empty() {
        return Vec::new();
    }
    output.split('\n').filter_map(decode_contact_row).collect()
}

/// Decodes newline-separated group rows. A non-numeric member count
/// decodes as zero.
pub fn decode_groups(output: &str) -> Vec<ContactGroup> {
    if output.is_empty() {
        return Vec::new();
    }
    output.split('\n').filter_map(decode_group_row).collect()
}

fn decode_contact_row(row: &str) -> Option<Contact> {
    let fields: Vec<&str> = row.split('\t').collect();
    if fields.len() < CONTACT_FIELD_COUNT {
        return None;
    }

    let first_name = name_field(fields[1]);
    let last_name = name_field(fields[2]);
    let organization = optional_field(fields[3]);
    let full_name = compose_full_name(&first_name, &last_name, organization.as_deref());

    Some(Contact {
        id: fields[0].to_string(),
        first_name,
        last_name,
        full_name,
        emails: list_field(fields[7]),
        phones: list_field(fields[8]),
        organization,
        job_title: optional_field(fields[4]),
        note: optional_field(fields[5]),
        birthday: optional_field(fields[6]),
        addresses: fields.get(9).map(|raw| list_field(raw)).unwrap_or_default(),
    })
}

fn decode_group_row(row: &str) -> Option<ContactGroup> {
    let fields: Vec<&str> = row.split('\t').collect();
    if fields.len() < GROUP_FIELD_COUNT {
        return None;
    }
    Some(ContactGroup {
        id: fields[0].to_string(),
        name: fields[1].to_string(),
        member_count: fields[2].parse().unwrap_or(0),
    })
}

fn name_field(raw: &str) -> String {
    if raw == MISSING_VALUE {
        String::new()
    } else {
        raw.to_string()
    }
}

fn optional_field(raw: &str) -> Option<String> {
    if raw == MISSING_VALUE || raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

fn list_field(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(LIST_DELIMITER)
        .filter(|item| !item.is_empty() && *item != MISSING_VALUE)
        .map(str::to_string)
        .collect()
}
