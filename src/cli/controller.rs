//! Interactive menu loop.
//!
//! The controller owns every prompt and re-prompt. It hands raw answers to the
//! contact book's validation primitives, reports recoverable errors back to
//! the operator, and only lets I/O failures escape.

use super::command::Command;
use super::prompt::Prompter;
use crate::domain::{EmailAddress, PersonName, PhoneNumber};
use crate::error::{StoreError, StoreResult};
use crate::models::{Contact, ContactBook, ContactEdit, Listing};
use crate::services::ContactService;
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

/// Drives a session against a [`ContactService`].
pub struct Controller<R, W> {
    service: ContactService,
    prompt: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Controller<R, W> {
    pub fn new(service: ContactService, input: R, output: W) -> Self {
        Self {
            service,
            prompt: Prompter::new(input, output),
        }
    }

    /// Run the main menu until the operator enters nothing or input ends.
    pub fn run(&mut self) -> StoreResult<()> {
        match self.main_menu() {
            Err(StoreError::Io(e)) if e.kind() == io::ErrorKind::UnexpectedEof => {
                debug!("Input closed, ending session");
                Ok(())
            }
            other => other,
        }
    }

    pub fn into_output(self) -> W {
        self.prompt.into_output()
    }

    fn main_menu(&mut self) -> StoreResult<()> {
        loop {
            self.prompt
                .say("\nPlease select an option below or nothing to exit\n")?;
            for (i, command) in Command::ALL.iter().enumerate() {
                self.prompt.say(format_args!("{}. {}", i + 1, command))?;
            }

            let choice = self.prompt.ask("> ")?;
            if choice.is_empty() {
                return Ok(());
            }

            match Command::from_choice(&choice) {
                Some(command) => self.dispatch(command)?,
                None => self.prompt.say("\ninvalid choice")?,
            }
        }
    }

    /// Run one command. Recoverable errors are reported, not returned.
    pub fn dispatch(&mut self, command: Command) -> StoreResult<()> {
        debug!("Running command: {}", command);
        let result = match command {
            Command::Add => self.add_contacts(),
            Command::Delete => self.delete_contacts(),
            Command::Edit => self.edit_contacts(),
            Command::ListByDomain => self.list_by_domain(),
            Command::ListAll => self.list_all(),
            Command::Export => self.export(),
        };

        match result {
            Err(e) if e.is_recoverable() => self.report(&e),
            other => other,
        }
    }

    fn add_contacts(&mut self) -> StoreResult<()> {
        self.prompt.say("\n> add contact")?;
        let names = self.service.name_validation();

        loop {
            let book = self.service.load()?;

            let Some(first_name) =
                self.ask_valid("\nfirst name: ", |v| book.validate_name(v, names))?
            else {
                return self.cancelled("add contact");
            };
            let Some(last_name) = self.ask_valid("last name: ", |v| book.validate_name(v, names))?
            else {
                return self.cancelled("add contact");
            };
            let Some(email) = self.ask_valid("email address: ", |v| book.validate_email(v, None))?
            else {
                return self.cancelled("add contact");
            };
            let Some(phone) = self.ask_valid("phone number: ", |v| book.validate_phone(v, None))?
            else {
                return self.cancelled("add contact");
            };

            let added = self.service.add_contact(Contact::new(
                email.into_inner(),
                first_name.into_inner(),
                last_name.into_inner(),
                phone.into_inner(),
            ))?;

            self.prompt.say("\nthe following contact was added")?;
            self.show_contact(&added)?;

            if !self
                .prompt
                .ask_yes_no("\nwould you like to add another contact (yes or no)? ")?
            {
                return Ok(());
            }
        }
    }

    fn delete_contacts(&mut self) -> StoreResult<()> {
        if self.load_or_offer_add()?.is_none() {
            return Ok(());
        }
        self.prompt.say("\n> delete contact")?;

        loop {
            let book = self.service.load()?;
            if book.is_empty() {
                return self.prompt.say("\nno contacts left").map_err(Into::into);
            }

            let listing = book.listing();
            self.prompt
                .say("\nselect a contact to delete or nothing to return")?;
            for (number, email) in listing.entries() {
                self.prompt.say(format_args!("{}. {}", number, email))?;
            }

            let answer = self.prompt.ask("> ")?;
            if answer.is_empty() {
                return Ok(());
            }
            let contact = match select(&book, &listing, &answer) {
                Ok(contact) => contact,
                Err(_) => {
                    self.prompt.say("\ninvalid entry")?;
                    continue;
                }
            };

            self.prompt
                .say("\ndelete the following contact (yes or no)?")?;
            self.prompt.say(&contact.email)?;
            self.prompt.say(contact.full_name())?;
            self.prompt.say(&contact.phone_number)?;

            if !self.prompt.ask_yes_no("> ")? {
                self.prompt.say("\ncontact deletion cancelled")?;
                continue;
            }

            match self.service.delete_contact(&contact.email) {
                Ok(removed) => self
                    .prompt
                    .say(format_args!("\n{} was deleted successfully", removed.email))?,
                Err(e) if e.is_recoverable() => self.report(&e)?,
                Err(e) => return Err(e),
            }
        }
    }

    fn edit_contacts(&mut self) -> StoreResult<()> {
        if self.load_or_offer_add()?.is_none() {
            return Ok(());
        }
        self.prompt.say("\n> edit contact")?;
        let names = self.service.name_validation();

        loop {
            let book = self.service.load()?;
            if book.is_empty() {
                return self.prompt.say("\nno contacts left").map_err(Into::into);
            }

            let listing = book.listing();
            self.prompt
                .say("\nselect a contact below to edit or nothing to return")?;
            for (number, key) in listing.entries() {
                if let Some(c) = book.get(key) {
                    self.prompt.say(format_args!(
                        "{}. {}, {}, {}, {}",
                        number, c.email, c.first_name, c.last_name, c.phone_number
                    ))?;
                }
            }

            let answer = self.prompt.ask("> ")?;
            if answer.is_empty() {
                return Ok(());
            }
            let current = match select(&book, &listing, &answer) {
                Ok(contact) => contact,
                Err(_) => {
                    self.prompt.say("\nplease select from the options below")?;
                    continue;
                }
            };
            let key = current.email.clone();

            self.prompt
                .say("\nleave a field blank to keep its current value")?;
            let email = self.ask_valid(&format!("edit email address {}: ", current.email), |v| {
                book.validate_email(v, Some(key.as_str()))
            })?;
            let first_name = self.ask_valid(&format!("edit first name {}: ", current.first_name), |v| {
                book.validate_name(v, names)
            })?;
            let last_name = self.ask_valid(&format!("edit last name {}: ", current.last_name), |v| {
                book.validate_name(v, names)
            })?;
            let phone = self.ask_valid(&format!("edit phone number {}: ", current.phone_number), |v| {
                book.validate_phone(v, Some(key.as_str()))
            })?;

            let edit = ContactEdit {
                email: email.map(EmailAddress::into_inner),
                first_name: first_name.map(PersonName::into_inner),
                last_name: last_name.map(PersonName::into_inner),
                phone_number: phone.map(PhoneNumber::into_inner),
            };
            if edit.is_empty() {
                self.prompt.say("\nno changes made")?;
                continue;
            }

            match self.service.edit_contact(&key, &edit) {
                Ok(updated) => {
                    self.prompt.say("\nthe contact was updated")?;
                    self.show_contact(&updated)?;
                }
                Err(e) if e.is_recoverable() => self.report(&e)?,
                Err(e) => return Err(e),
            }
        }
    }

    fn list_by_domain(&mut self) -> StoreResult<()> {
        let Some(book) = self.load_or_offer_add()? else {
            return Ok(());
        };
        self.prompt.say("\n> list contacts by domain")?;

        let domains = book.list_by_domain();
        if domains.len() <= 1 {
            for contact in book.sorted_by_email() {
                self.show_contact(contact)?;
            }
            return Ok(());
        }

        let listing = Listing::new(domains.keys().cloned());
        let domain = loop {
            self.prompt
                .say("\nselect a domain from the list below or nothing to return")?;
            for (number, domain) in listing.entries() {
                self.prompt.say(format_args!("{}. {}", number, domain))?;
            }

            let answer = self.prompt.ask("> ")?;
            if answer.is_empty() {
                return Ok(());
            }
            match parse_index(&answer).and_then(|i| listing.select(i)) {
                Ok(domain) => break domain.to_string(),
                Err(_) => self.prompt.say("\ninvalid choice")?,
            }
        };

        self.prompt
            .say(format_args!("\n> results for {}", domain))?;
        for contact in book.in_domain(&domain) {
            self.show_contact(contact)?;
        }
        Ok(())
    }

    fn list_all(&mut self) -> StoreResult<()> {
        let Some(book) = self.load_or_offer_add()? else {
            return Ok(());
        };
        self.prompt.say("\n> all contacts")?;
        for contact in book.sorted_by_email() {
            self.show_contact(contact)?;
        }
        Ok(())
    }

    fn export(&mut self) -> StoreResult<()> {
        self.prompt.say("\n> output contacts")?;
        let count = self.service.export()?;
        let location = self.service.export_location();
        self.prompt.say(format_args!(
            "\n{} exported successfully ({} contacts)",
            location, count
        ))?;
        Ok(())
    }

    /// Load the book, or send the operator to the add flow if it is empty.
    fn load_or_offer_add(&mut self) -> StoreResult<Option<ContactBook>> {
        let book = self.service.load()?;
        if !book.is_empty() {
            return Ok(Some(book));
        }

        let location = self.service.location();
        self.prompt.say(format_args!("\n'{}' is empty", location))?;
        self.prompt.say("Let's add some contacts")?;
        self.add_contacts()?;
        Ok(None)
    }

    /// Ask until `validate` accepts the answer. A blank answer returns `None`.
    fn ask_valid<T>(
        &mut self,
        label: &str,
        mut validate: impl FnMut(&str) -> StoreResult<T>,
    ) -> StoreResult<Option<T>> {
        loop {
            let answer = self.prompt.ask(label)?;
            if answer.is_empty() {
                return Ok(None);
            }
            match validate(&answer) {
                Ok(value) => return Ok(Some(value)),
                Err(e) if e.is_recoverable() => self.report(&e)?,
                Err(e) => return Err(e),
            }
        }
    }

    fn show_contact(&mut self, contact: &Contact) -> StoreResult<()> {
        self.prompt.say(format_args!("\n{}", contact.full_name()))?;
        self.prompt.say(&contact.email)?;
        self.prompt.say(&contact.phone_number)?;
        Ok(())
    }

    fn cancelled(&mut self, what: &str) -> StoreResult<()> {
        self.prompt.say(format_args!("\n{} cancelled", what))?;
        Ok(())
    }

    fn report(&mut self, err: &StoreError) -> StoreResult<()> {
        warn!("{}", err);
        self.prompt.say(format_args!("\n{}", err))?;
        Ok(())
    }
}

fn parse_index(answer: &str) -> StoreResult<usize> {
    answer
        .parse()
        .map_err(|_| StoreError::NotFound(format!("selection {}", answer)))
}

/// Resolve an answer against the listing that was just displayed.
fn select(book: &ContactBook, listing: &Listing, answer: &str) -> StoreResult<Contact> {
    let key = listing.select(parse_index(answer)?)?;
    book.get(key)
        .cloned()
        .ok_or_else(|| StoreError::NotFound(key.to_string()))
}
