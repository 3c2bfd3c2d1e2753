//! AppleScript sources for each directory operation.
//!
//! Every read-oriented script emits the same tab-separated row layout so
//! one decode path in `rolodex_core::codec` serves all of them. Every
//! caller-supplied value is routed through `codec::escape` before
//! interpolation; that is the only defense against script injection.

use rolodex_core::codec::escape;
use rolodex_core::{ContactUpdate, NewContact};

/// In-script deadline for the phone-lookup scan, which may visit every
/// entry in the directory.
pub const LOOKUP_SCRIPT_TIMEOUT_SECS: u64 = 300;

/// Extracts one person's fields into `recordLine`, tab-joined in the fixed
/// row order. Loop variables are named so the fragment can sit inside the
/// phone-lookup scan, whose outer loop owns `ph`.
const PERSON_ROW: &str = r#"set contactId to id of p
set firstName to first name of p
set lastName to last name of p
set orgName to organization of p
set jobTitleVal to job title of p
set noteVal to note of p
set birthdayVal to ""
try
    set birthdayVal to birth date of p as string
end try
set emailList to ""
repeat with eml in emails of p
    if emailList is not "" then set emailList to emailList & ";;;"
    set emailList to emailList & (value of eml)
end repeat
set phoneList to ""
repeat with phn in phones of p
    if phoneList is not "" then set phoneList to phoneList & ";;;"
    set phoneList to phoneList & (value of phn)
end repeat
set addrList to ""
repeat with adr in addresses of p
    if addrList is not "" then set addrList to addrList & ";;;"
    set addrParts to ""
    try
        set addrParts to (street of adr) & ", " & (city of adr) & ", " & (state of adr) & " " & (zip of adr) & ", " & (country of adr)
    end try
    set addrList to addrList & addrParts
end repeat
set recordLine to contactId & tab & firstName & tab & lastName & tab & orgName & tab & jobTitleVal & tab & noteVal & tab & birthdayVal & tab & emailList & tab & phoneList & tab & addrList"#;

fn person_row(indent: &str) -> String {
    PERSON_ROW
        .lines()
        .map(|line| format!("{indent}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn list_contacts(limit: usize) -> String {
    format!(
        r#"tell application "Contacts"
    set output to ""
    set contactCount to 0
    repeat with p in people
        if contactCount >= {limit} then exit repeat
{row}
        if output is not "" then set output to output & linefeed
        set output to output & recordLine
        set contactCount to contactCount + 1
    end repeat
    return output
end tell"#,
        limit = limit,
        row = person_row("        "),
    )
}

pub fn search_contacts(query: &str) -> String {
    format!(
        r#"tell application "Contacts"
    set output to ""
    set matchedPeople to (every person whose name contains "{query}")
    repeat with p in matchedPeople
{row}
        if output is not "" then set output to output & linefeed
        set output to output & recordLine
    end repeat
    return output
end tell"#,
        query = escape(query),
        row = person_row("        "),
    )
}

/// Lookup by id. The `try` block collapses the application's own
/// not-found failure into empty output.
pub fn get_contact(id: &str) -> String {
    format!(
        r#"tell application "Contacts"
    try
        set p to first person whose id is "{id}"
{row}
        return recordLine
    on error
        return ""
    end try
end tell"#,
        id = escape(id),
        row = person_row("        "),
    )
}

/// Construct-with-properties listing only the supplied fields, optional
/// email/phone attachments, then save. Returns the new id. Assumes the
/// draft passed `NewContact::validate`.
pub fn create_contact(new: &NewContact) -> String {
    let mut props = Vec::new();
    if let Some(value) = non_empty(&new.first_name) {
        props.push(format!("first name:\"{}\"", escape(value)));
    }
    if let Some(value) = non_empty(&new.last_name) {
        props.push(format!("last name:\"{}\"", escape(value)));
    }
    if let Some(value) = non_empty(&new.organization) {
        props.push(format!("organization:\"{}\"", escape(value)));
    }
    if let Some(value) = non_empty(&new.job_title) {
        props.push(format!("job title:\"{}\"", escape(value)));
    }

    let mut body = vec![format!(
        "    set newPerson to make new person with properties {{{}}}",
        props.join(", ")
    )];
    if let Some(value) = non_empty(&new.email) {
        body.push(format!(
            "    make new email at end of emails of newPerson with properties {{label:\"work\", value:\"{}\"}}",
            escape(value)
        ));
    }
    if let Some(value) = non_empty(&new.phone) {
        body.push(format!(
            "    make new phone at end of phones of newPerson with properties {{label:\"mobile\", value:\"{}\"}}",
            escape(value)
        ));
    }
    body.push("    save".to_string());
    body.push("    return id of newPerson".to_string());

    format!(
        "tell application \"Contacts\"\n{}\nend tell",
        body.join("\n")
    )
}

/// One assignment per supplied field inside a lookup-then-save block.
/// Returns `None` when no field is supplied; no script should run at all
/// in that case.
pub fn update_contact(id: &str, update: &ContactUpdate) -> Option<String> {
    let mut assignments = Vec::new();
    if let Some(value) = &update.first_name {
        assignments.push(format!("set first name of p to \"{}\"", escape(value)));
    }
    if let Some(value) = &update.last_name {
        assignments.push(format!("set last name of p to \"{}\"", escape(value)));
    }
    if let Some(value) = &update.organization {
        assignments.push(format!("set organization of p to \"{}\"", escape(value)));
    }
    if let Some(value) = &update.job_title {
        assignments.push(format!("set job title of p to \"{}\"", escape(value)));
    }

    if assignments.is_empty() {
        return None;
    }

    let assignments = assignments
        .iter()
        .map(|line| format!("        {line}"))
        .collect::<Vec<_>>()
        .join("\n");

    Some(format!(
        r#"tell application "Contacts"
    try
        set p to first person whose id is "{id}"
{assignments}
        save
        return "true"
    on error
        return "false"
    end try
end tell"#,
        id = escape(id),
        assignments = assignments,
    ))
}

pub fn delete_contact(id: &str) -> String {
    format!(
        r#"tell application "Contacts"
    try
        set p to first person whose id is "{id}"
        delete p
        save
        return "true"
    on error
        return "false"
    end try
end tell"#,
        id = escape(id),
    )
}

pub fn list_groups() -> String {
    r#"tell application "Contacts"
    set output to ""
    repeat with g in groups
        set recordLine to (id of g) & tab & (name of g) & tab & (count of people of g)
        if output is not "" then set output to output & linefeed
        set output to output & recordLine
    end repeat
    return output
end tell"#
        .to_string()
}

/// Members of a group looked up by exact name; group-not-found collapses
/// to empty output.
pub fn group_members(group_name: &str) -> String {
    format!(
        r#"tell application "Contacts"
    set output to ""
    try
        set g to first group whose name is "{name}"
        repeat with p in people of g
{row}
            if output is not "" then set output to output & linefeed
            set output to output & recordLine
        end repeat
    end try
    return output
end tell"#,
        name = escape(group_name),
        row = person_row("            "),
    )
}

/// Linear scan over every entry's phone values, returning the first row
/// whose raw value contains the digit suffix. Stored numbers keep mixed
/// international formatting, hence the substring test.
pub fn lookup_by_phone(suffix: &str) -> String {
    format!(
        r#"with timeout of {secs} seconds
    tell application "Contacts"
        repeat with p in people
            repeat with ph in phones of p
                if value of ph contains "{suffix}" then
{row}
                    return recordLine
                end if
            end repeat
        end repeat
        return ""
    end tell
end timeout"#,
        secs = LOOKUP_SCRIPT_TIMEOUT_SECS,
        suffix = escape(suffix),
        row = person_row("                    "),
    )
}

/// Cheap access probe; counting people fails with an Apple-events error
/// when access is not granted.
pub fn authorization_probe() -> String {
    r#"tell application "Contacts"
    return count of people
end tell"#
        .to_string()
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
