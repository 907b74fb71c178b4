//! The interactive menu driving the hub.
//!
//! The console owns the single hub of the process. It reads lines from any
//! `BufRead` and writes prompts to any `Write`, so the whole flow can run
//! against in-memory buffers.

use crate::core::{NotifyError, Observer, Subject};
use crate::hub::NotificationHub;
use crate::notification::{normalize_token, ChannelFactory, ChannelKind};
use crate::user::User;
use std::borrow::Cow;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Recoverable problems with the data typed during registration.
#[derive(Error, Debug)]
pub enum RegistrationError {
    #[error("Name must not be empty")]
    EmptyName,

    #[error("Invalid age {0:?}: expected a non-negative whole number")]
    InvalidAge(String),

    #[error(transparent)]
    Notify(#[from] NotifyError),
}

/// The raw answers collected by the registration prompts.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub name: String,
    pub age: String,
    pub phone: String,
    pub email: String,
    pub channel: String,
}

impl RegistrationForm {
    /// Validates the answers and resolves the channel.
    pub fn into_user(self, factory: &ChannelFactory) -> Result<User, RegistrationError> {
        let name = validate_name(&self.name)?;
        let age = parse_age(&self.age)?;
        let channel = factory.create(&normalize_token(&self.channel))?;
        Ok(User::new(name, age, self.phone, self.email, channel))
    }
}

fn validate_name(raw: &str) -> Result<String, RegistrationError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(RegistrationError::EmptyName);
    }
    Ok(name.to_string())
}

/// Parses an age typed by a user.
pub fn parse_age(raw: &str) -> Result<u32, RegistrationError> {
    let raw = raw.trim();
    raw.parse()
        .map_err(|_| RegistrationError::InvalidAge(raw.to_string()))
}

/// Whether the menu loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Exit,
}

pub struct Console<R, W> {
    hub: NotificationHub,
    factory: ChannelFactory,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(hub: NotificationHub, factory: ChannelFactory, input: R, output: W) -> Self {
        Self {
            hub,
            factory,
            input,
            output,
        }
    }

    pub fn hub(&self) -> &NotificationHub {
        &self.hub
    }

    /// Runs the menu until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        info!("Console started");
        loop {
            writeln!(self.output, "1. Register new user")?;
            writeln!(self.output, "2. Send notification")?;
            writeln!(self.output, "3. Exit")?;
            let Some(choice) = self.prompt("Choose an option: ")? else {
                break;
            };

            let step = match choice.trim() {
                "1" => self.register()?,
                "2" => self.send()?,
                "3" => Step::Exit,
                other => {
                    debug!(choice = other, "Invalid menu choice");
                    writeln!(self.output, "Invalid option. Try again.\n")?;
                    Step::Continue
                }
            };
            if step == Step::Exit {
                break;
            }
        }
        writeln!(self.output, "Shutting down.")?;
        self.output.flush()?;
        info!(users = self.hub.len(), "Console finished");
        Ok(())
    }

    /// Writes `label` and reads one line, without its line terminator.
    /// Bytes that are not UTF-8 become U+FFFD. Returns `None` at end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        if let Cow::Owned(_) = line {
            debug!("Replaced invalid UTF-8 in input line");
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn register(&mut self) -> io::Result<Step> {
        writeln!(self.output, "\n=== New User Registration ===")?;
        let mut form = RegistrationForm::default();

        let Some(name) = self.prompt("Name: ")? else {
            return Ok(Step::Exit);
        };
        if let Err(e) = validate_name(&name) {
            return self.reject(e);
        }
        form.name = name;

        let Some(age) = self.prompt("Age: ")? else {
            return Ok(Step::Exit);
        };
        if let Err(e) = parse_age(&age) {
            return self.reject(e);
        }
        form.age = age;

        let Some(phone) = self.prompt("Phone number: ")? else {
            return Ok(Step::Exit);
        };
        form.phone = phone;

        let Some(email) = self.prompt("Email: ")? else {
            return Ok(Step::Exit);
        };
        form.email = email;

        let tokens: Vec<_> = ChannelKind::ALL.iter().map(|k| k.token()).collect();
        writeln!(self.output, "Notification type ({}):", tokens.join(" / "))?;
        let Some(channel) = self.prompt("Choice: ")? else {
            return Ok(Step::Exit);
        };
        form.channel = channel;

        let attached = form
            .into_user(&self.factory)
            .and_then(|user| {
                let name = user.name().to_string();
                let observer: Arc<dyn Observer> = Arc::new(user);
                self.hub.attach(observer)?;
                Ok(name)
            });
        match attached {
            Ok(name) => {
                info!(user = %name, "User registered");
                writeln!(self.output, "User {} registered successfully!\n", name)?;
                Ok(Step::Continue)
            }
            Err(e) => self.reject(e),
        }
    }

    fn reject(&mut self, err: RegistrationError) -> io::Result<Step> {
        warn!(error = %err, "Registration abandoned");
        writeln!(self.output, "{}\n", err)?;
        Ok(Step::Continue)
    }

    fn send(&mut self) -> io::Result<Step> {
        let Some(message) = self.prompt("Enter the notification message: ")? else {
            return Ok(Step::Exit);
        };
        // Notices and prompts may share stdout; flush ours first.
        self.output.flush()?;
        if let Err(e) = self.hub.notify(&message) {
            warn!(error = %e, "Broadcast aborted");
            writeln!(self.output, "{}", e)?;
        }
        Ok(Step::Continue)
    }
}
