//! Dependency Inversion: high-level policy depends on an abstraction, and the
//! low-level details implement it.

use std::io::Write;

use crate::Result;

// =============================================================================
// Violation: the service builds its own email sender
// =============================================================================

pub struct EmailSenderV;

impl EmailSenderV {
    pub fn send_email(&self, out: &mut dyn Write, message: &str) -> Result<()> {
        writeln!(out, "[Email] {message}")?;
        Ok(())
    }
}

pub struct NotificationServiceV {
    email_sender: EmailSenderV,
}

impl NotificationServiceV {
    pub fn new() -> Self {
        Self {
            email_sender: EmailSenderV,
        }
    }

    pub fn notify(&self, out: &mut dyn Write, message: &str) -> Result<()> {
        self.email_sender.send_email(out, message)
    }
}

impl Default for NotificationServiceV {
    fn default() -> Self {
        Self::new()
    }
}

pub fn run_violation(out: &mut dyn Write) -> Result<()> {
    NotificationServiceV::new().notify(out, "System update available!")
}

// =============================================================================
// Obeying: the service is handed any MessageSender
// =============================================================================

pub trait MessageSender {
    fn channel(&self) -> &'static str;
    fn send(&self, out: &mut dyn Write, message: &str) -> Result<()>;
}

pub struct EmailSender;

impl MessageSender for EmailSender {
    fn channel(&self) -> &'static str {
        "Email"
    }

    fn send(&self, out: &mut dyn Write, message: &str) -> Result<()> {
        writeln!(out, "[Email] {message}")?;
        Ok(())
    }
}

pub struct SmsSender;

impl MessageSender for SmsSender {
    fn channel(&self) -> &'static str {
        "SMS"
    }

    fn send(&self, out: &mut dyn Write, message: &str) -> Result<()> {
        writeln!(out, "[SMS] {message}")?;
        Ok(())
    }
}

impl<S: MessageSender + ?Sized> MessageSender for Box<S> {
    fn channel(&self) -> &'static str {
        (**self).channel()
    }

    fn send(&self, out: &mut dyn Write, message: &str) -> Result<()> {
        (**self).send(out, message)
    }
}

pub struct NotificationService<S> {
    sender: S,
}

impl<S: MessageSender> NotificationService<S> {
    pub fn new(sender: S) -> Self {
        Self { sender }
    }

    pub fn notify(&self, out: &mut dyn Write, message: &str) -> Result<()> {
        tracing::debug!(channel = self.sender.channel(), "dispatching notification");
        self.sender.send(out, message)
    }
}

pub fn run_obeying(out: &mut dyn Write) -> Result<()> {
    let email_service = NotificationService::new(EmailSender);
    let sms_service = NotificationService::new(SmsSender);

    email_service.notify(out, "System update available via Email!")?;
    sms_service.notify(out, "System update available via SMS!")?;
    Ok(())
}
