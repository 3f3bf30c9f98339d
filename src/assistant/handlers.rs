//! Command handlers.
//!
//! Each handler checks its argument count, calls into the address book and
//! returns the reply text. Unknown contacts and phones are ordinary replies;
//! only bad arguments and field validation failures are errors.

use crate::error::{CommandError, CommandResult};
use crate::models::{AddressBook, Record};
use chrono::{Duration, NaiveDateTime};

struct Usage {
    command: &'static str,
    usage: &'static str,
}

impl Usage {
    /// Borrow the first `N` arguments, extra ones are ignored.
    fn take<'a, const N: usize>(&self, args: &'a [String]) -> CommandResult<[&'a str; N]> {
        if args.len() < N {
            return Err(CommandError::MissingArguments {
                command: self.command,
                usage: self.usage,
            });
        }
        Ok(std::array::from_fn(|i| args[i].as_str()))
    }
}

const ADD: Usage = Usage {
    command: "add",
    usage: "add <name> [phone]",
};
const CHANGE: Usage = Usage {
    command: "change",
    usage: "change <name> <old phone> <new phone>",
};
const PHONE: Usage = Usage {
    command: "phone",
    usage: "phone <name>",
};
const REMOVE_PHONE: Usage = Usage {
    command: "remove-phone",
    usage: "remove-phone <name> <phone>",
};
const DELETE: Usage = Usage {
    command: "delete",
    usage: "delete <name>",
};
const ADD_BIRTHDAY: Usage = Usage {
    command: "add-birthday",
    usage: "add-birthday <name> <DD.MM.YYYY>",
};
const SHOW_BIRTHDAY: Usage = Usage {
    command: "show-birthday",
    usage: "show-birthday <name>",
};

fn not_found(name: &str) -> String {
    format!("Contact {} not found.", name)
}

/// `add <name> [phone]`: create a contact or append a phone to an existing one.
///
/// A new contact is only stored once its phone (if any) has validated.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name] = ADD.take::<1>(args)?;
    let phone = args.get(1).map(String::as_str);

    if let Some(record) = book.find_mut(name) {
        if let Some(phone) = phone {
            record.add_phone(phone)?;
        }
        return Ok("Contact updated.".to_string());
    }

    let mut record = Record::new(name)?;
    if let Some(phone) = phone {
        record.add_phone(phone)?;
    }
    book.add_record(record);
    Ok("Contact added.".to_string())
}

/// `change <name> <old> <new>`: replace one phone of a contact.
pub fn change_phone(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, old, new] = CHANGE.take::<3>(args)?;
    let Some(record) = book.find_mut(name) else {
        return Ok(not_found(name));
    };

    if record.edit_phone(old, new)? {
        Ok("Phone updated.".to_string())
    } else {
        Ok(format!("Phone {} not found for {}.", old, name))
    }
}

/// `phone <name>`: list a contact's phones.
pub fn show_phones(args: &[String], book: &AddressBook) -> CommandResult<String> {
    let [name] = PHONE.take::<1>(args)?;
    let Some(record) = book.find(name) else {
        return Ok(not_found(name));
    };

    let phones = record
        .phones()
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    Ok(format!("Phones: {}", phones))
}

/// `remove-phone <name> <phone>`: drop one phone from a contact.
pub fn remove_phone(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone] = REMOVE_PHONE.take::<2>(args)?;
    let Some(record) = book.find_mut(name) else {
        return Ok(not_found(name));
    };

    if record.remove_phone(phone) {
        Ok("Phone removed.".to_string())
    } else {
        Ok(format!("Phone {} not found for {}.", phone, name))
    }
}

/// `delete <name>`: remove a contact from the book.
pub fn delete_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name] = DELETE.take::<1>(args)?;
    match book.delete(name) {
        Some(_) => Ok(format!("Contact {} deleted.", name)),
        None => Ok(not_found(name)),
    }
}

/// `all`: every contact, one per line.
pub fn show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        return "No contacts saved.".to_string();
    }
    book.iter()
        .map(Record::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// `add-birthday <name> <DD.MM.YYYY>`: set or replace a contact's birthday.
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, birthday] = ADD_BIRTHDAY.take::<2>(args)?;
    let Some(record) = book.find_mut(name) else {
        return Ok(not_found(name));
    };

    record.add_birthday(birthday)?;
    Ok(format!("Birthday for {} added.", name))
}

/// `show-birthday <name>`: a contact's birthday, if set.
pub fn show_birthday(args: &[String], book: &AddressBook) -> CommandResult<String> {
    let [name] = SHOW_BIRTHDAY.take::<1>(args)?;
    let Some(record) = book.find(name) else {
        return Ok(not_found(name));
    };

    match record.birthday() {
        Some(birthday) => Ok(format!("{}'s birthday is on {}", name, birthday)),
        None => Ok(format!("{} does not have a birthday set.", name)),
    }
}

/// `birthdays`: contacts whose birthday falls within `window` of `now`.
pub fn upcoming_birthdays(book: &AddressBook, now: NaiveDateTime, window: Duration) -> String {
    let upcoming = book.upcoming_birthdays_at(now, window);
    if upcoming.is_empty() {
        return "No upcoming birthdays in the next week.".to_string();
    }

    upcoming
        .iter()
        .filter_map(|record| {
            record
                .birthday()
                .map(|birthday| format!("{}'s birthday is on {}", record.name(), birthday))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `export`: the whole book as pretty-printed JSON.
pub fn export(book: &AddressBook) -> CommandResult<String> {
    Ok(serde_json::to_string_pretty(book)?)
}
