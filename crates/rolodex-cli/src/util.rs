use rolodex_core::Contact;

pub fn print_contact_line(contact: &Contact) {
    let email = contact.emails.first().map(String::as_str).unwrap_or("-");
    let phone = contact.phones.first().map(String::as_str).unwrap_or("-");
    println!("{}  {}  {}  {}", contact.id, contact.full_name, email, phone);
}

pub fn print_contact_detail(contact: &Contact) {
    println!("id: {}", contact.id);
    println!("name: {}", contact.full_name);
    if let Some(org) = contact.organization.as_deref() {
        println!("organization: {}", org);
    }
    if let Some(title) = contact.job_title.as_deref() {
        println!("job title: {}", title);
    }
    if !contact.emails.is_empty() {
        println!("emails: {}", contact.emails.join(", "));
    }
    if !contact.phones.is_empty() {
        println!("phones: {}", contact.phones.join(", "));
    }
    if let Some(birthday) = contact.birthday.as_deref() {
        println!("birthday: {}", birthday);
    }
    if !contact.addresses.is_empty() {
        println!("addresses:");
        for address in &contact.addresses {
            println!("  - {}", address);
        }
    }
    if let Some(note) = contact.note.as_deref() {
        println!("note: {}", note);
    }
}
