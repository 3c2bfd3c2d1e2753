use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use tracing::debug;

use rolodex_core::codec;
use rolodex_core::{
    phone_match_suffix, AuthorizationStatus, Contact, ContactGroup, ContactUpdate, NewContact,
};

use crate::error::{BridgeError, Result};
use crate::runner::{ExecRunner, ScriptRunner, DEFAULT_INTERPRETER};
use crate::script;

const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct BridgeOptions {
    pub interpreter: PathBuf,
    /// Budget for ordinary operations.
    pub script_timeout: Duration,
    /// Budget for phone lookup, which may scan the whole directory.
    pub lookup_timeout: Duration,
    /// Default entry cap for list when the caller passes none.
    pub list_limit: usize,
}

impl Default for BridgeOptions {
    fn default() -> Self {
        Self {
            interpreter: PathBuf::from(DEFAULT_INTERPRETER),
            script_timeout: Duration::from_secs(120),
            lookup_timeout: Duration::from_secs(180),
            list_limit: 50,
        }
    }
}

/// The directory surface: one method per operation, each composing
/// script builder -> runner -> codec.
///
/// The running Contacts application is a single shared stateful resource,
/// so every operation goes through the mutex-guarded runner handle:
/// exactly one script is in flight at a time and concurrent callers queue.
pub struct AddressBook<R = ExecRunner> {
    runner: Mutex<R>,
    options: BridgeOptions,
}

impl AddressBook<ExecRunner> {
    pub fn new(options: BridgeOptions) -> Self {
        let runner = ExecRunner::new(&options.interpreter);
        Self::with_runner(runner, options)
    }
}

impl<R: ScriptRunner> AddressBook<R> {
    pub fn with_runner(runner: R, options: BridgeOptions) -> Self {
        Self {
            runner: Mutex::new(runner),
            options,
        }
    }

    pub fn list_contacts(&self, limit: Option<usize>) -> Result<Vec<Contact>> {
        let limit = limit.unwrap_or(self.options.list_limit);
        let output = self.run(&script::list_contacts(limit), self.options.script_timeout)?;
        Ok(codec::decode_contacts(&output))
    }

    pub fn search_contacts(&self, query: &str) -> Result<Vec<Contact>> {
        let output = self.run(&script::search_contacts(query), self.options.script_timeout)?;
        Ok(codec::decode_contacts(&output))
    }

    /// `Ok(None)` when no entry matches; the application's own not-found
    /// failure never surfaces.
    pub fn get_contact(&self, id: &str) -> Result<Option<Contact>> {
        let output = self.run(&script::get_contact(id), self.options.script_timeout)?;
        Ok(codec::decode_contacts(&output).into_iter().next())
    }

    /// Returns the new entry's id. At least one of first name, last name
    /// or organization must be supplied; violating that fails before any
    /// script runs.
    pub fn create_contact(&self, new: &NewContact) -> Result<String> {
        new.validate()
            .map_err(|err| BridgeError::InvalidInput(err.to_string()))?;
        self.run(&script::create_contact(new), self.options.script_timeout)
    }

    /// Applies the supplied fields only. An empty patch is a no-op
    /// reported as `false` without any external call.
    pub fn update_contact(&self, id: &str, update: &ContactUpdate) -> Result<bool> {
        let Some(source) = script::update_contact(id, update) else {
            return Ok(false);
        };
        let output = self.run(&source, self.options.script_timeout)?;
        Ok(output == "true")
    }

    /// `false` covers both "not found" and any in-script failure.
    pub fn delete_contact(&self, id: &str) -> Result<bool> {
        let output = self.run(&script::delete_contact(id), self.options.script_timeout)?;
        Ok(output == "true")
    }

    pub fn list_groups(&self) -> Result<Vec<ContactGroup>> {
        let output = self.run(&script::list_groups(), self.options.script_timeout)?;
        Ok(codec::decode_groups(&output))
    }

    /// Empty when the group does not exist.
    pub fn group_members(&self, group_name: &str) -> Result<Vec<Contact>> {
        let output = self.run(
            &script::group_members(group_name),
            self.options.script_timeout,
        )?;
        Ok(codec::decode_contacts(&output))
    }

    /// First entry whose raw phone values contain the trailing seven
    /// digits of the input (the whole digit string for shorter inputs).
    /// Inputs without any digit short-circuit to `None`.
    pub fn lookup_by_phone(&self, phone_number: &str) -> Result<Option<Contact>> {
        let Some(suffix) = phone_match_suffix(phone_number) else {
            return Ok(None);
        };
        let output = self.run(&script::lookup_by_phone(&suffix), self.options.lookup_timeout)?;
        Ok(codec::decode_contacts(&output).into_iter().next())
    }

    pub fn authorization_status(&self) -> AuthorizationStatus {
        self.classify_probe(PROBE_TIMEOUT)
    }

    /// Re-runs the probe under the full script budget so a pending
    /// consent dialog can be answered before classification.
    pub fn request_access(&self) -> AuthorizationStatus {
        self.classify_probe(self.options.script_timeout)
    }

    fn classify_probe(&self, timeout: Duration) -> AuthorizationStatus {
        match self.run(&script::authorization_probe(), timeout) {
            // Timed out, most likely waiting on the consent prompt.
            Ok(output) if output.is_empty() => AuthorizationStatus::NotDetermined,
            Ok(_) => AuthorizationStatus::Authorized,
            // -1743: not authorized to send Apple events.
            Err(BridgeError::Script(message)) if message.contains("-1743") => {
                AuthorizationStatus::Denied
            }
            Err(_) => AuthorizationStatus::NotDetermined,
        }
    }

    fn run(&self, source: &str, timeout: Duration) -> Result<String> {
        let runner = self.runner.lock().unwrap_or_else(PoisonError::into_inner);
        debug!(bytes = source.len(), "executing contacts script");
        runner.run(source, timeout)
    }
}
