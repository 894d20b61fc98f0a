//! Liskov Substitution: any implementation must honour the contract of the
//! abstraction it stands in for.
//!
//! `NotificationV::send` promises to deliver a message. `SmsNotificationV`
//! quietly narrows that promise by rejecting long messages, so code written
//! against the trait breaks when handed an SMS sender. `SmsNotification`
//! keeps the promise by shortening the text instead.

use std::io::Write;

use crate::{DemoError, Result};

pub const DEFAULT_SMS_LIMIT: usize = 20;

// =============================================================================
// Violation
// =============================================================================

pub trait NotificationV {
    fn send(&self, out: &mut dyn Write, message: &str) -> Result<()>;
}

pub struct EmailNotificationV;

impl NotificationV for EmailNotificationV {
    fn send(&self, out: &mut dyn Write, message: &str) -> Result<()> {
        writeln!(out, "[Email] {message}")?;
        Ok(())
    }
}

pub struct SmsNotificationV {
    pub limit: usize,
}

impl NotificationV for SmsNotificationV {
    fn send(&self, out: &mut dyn Write, message: &str) -> Result<()> {
        let length = message.chars().count();
        if length > self.limit {
            return Err(DemoError::SmsTooLong {
                length,
                limit: self.limit,
            });
        }
        writeln!(out, "[SMS] {message}")?;
        Ok(())
    }
}

/// Fails on the SMS send; the caller is expected to report the error.
pub fn run_violation(out: &mut dyn Write, sms_limit: usize) -> Result<()> {
    let notifications: [&dyn NotificationV; 2] = [
        &EmailNotificationV,
        &SmsNotificationV { limit: sms_limit },
    ];
    notifications[0].send(out, "Hello via Email")?;
    notifications[1].send(out, "This message is way too long for SMS and will crash")?;
    Ok(())
}

// =============================================================================
// Obeying
// =============================================================================

pub trait Notification {
    fn send(&self, out: &mut dyn Write, message: &str) -> Result<()>;
}

pub struct EmailNotification;

impl Notification for EmailNotification {
    fn send(&self, out: &mut dyn Write, message: &str) -> Result<()> {
        writeln!(out, "[Email] {message}")?;
        Ok(())
    }
}

pub struct SmsNotification {
    pub limit: usize,
}

impl SmsNotification {
    /// Cuts on character boundaries and marks the cut with `...`.
    pub fn shorten(&self, message: &str) -> String {
        match message.char_indices().nth(self.limit) {
            Some((cut, _)) => format!("{}...", &message[..cut]),
            None => message.to_string(),
        }
    }
}

impl Default for SmsNotification {
    fn default() -> Self {
        Self {
            limit: DEFAULT_SMS_LIMIT,
        }
    }
}

impl Notification for SmsNotification {
    fn send(&self, out: &mut dyn Write, message: &str) -> Result<()> {
        writeln!(out, "[SMS] {}", self.shorten(message))?;
        Ok(())
    }
}

pub fn run_obeying(out: &mut dyn Write, sms_limit: usize) -> Result<()> {
    let notifications: [&dyn Notification; 2] = [
        &EmailNotification,
        &SmsNotification { limit: sms_limit },
    ];
    notifications[0].send(out, "Hello via Email!")?;
    notifications[1].send(out, "This message is way too long for SMS but still works safely")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violating_sms_rejects_long_message() {
        let sms = SmsNotificationV { limit: 20 };
        let mut out = Vec::new();
        let err = sms
            .send(&mut out, "This message is way too long for SMS")
            .unwrap_err();
        assert!(matches!(err, DemoError::SmsTooLong { limit: 20, .. }));
        assert!(out.is_empty());
    }

    #[test]
    fn test_violating_sms_accepts_short_message() {
        let sms = SmsNotificationV { limit: 20 };
        let mut out = Vec::new();
        sms.send(&mut out, "Short one").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[SMS] Short one\n");
    }

    #[test]
    fn test_violation_run_fails_after_email() {
        let mut out = Vec::new();
        let err = run_violation(&mut out, DEFAULT_SMS_LIMIT).unwrap_err();
        assert!(err.to_string().starts_with("SMS too long!"));
        assert_eq!(String::from_utf8(out).unwrap(), "[Email] Hello via Email\n");
    }

    #[test]
    fn test_obeying_sms_truncates() {
        let sms = SmsNotification::default();
        assert_eq!(
            sms.shorten("This message is way too long for SMS but still works safely"),
            "This message is way ..."
        );
        assert_eq!(sms.shorten("exactly twenty chars"), "exactly twenty chars");
        assert_eq!(sms.shorten(""), "");
    }

    #[test]
    fn test_obeying_sms_counts_characters_not_bytes() {
        let sms = SmsNotification { limit: 3 };
        assert_eq!(sms.shorten("héllo"), "hél...");
        assert_eq!(sms.shorten("日本語"), "日本語");
    }

    #[test]
    fn test_obeying_run_succeeds() {
        let mut out = Vec::new();
        run_obeying(&mut out, DEFAULT_SMS_LIMIT).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[Email] Hello via Email!\n[SMS] This message is way ...\n"
        );
    }

    #[test]
    fn test_every_notification_substitutes_cleanly() {
        let senders: Vec<Box<dyn Notification>> =
            vec![Box::new(EmailNotification), Box::new(SmsNotification::default())];
        for message in ["", "hi", "a considerably longer message than any SMS allows"] {
            for sender in &senders {
                let mut out = Vec::new();
                assert!(sender.send(&mut out, message).is_ok());
            }
        }
    }
}
