//! Mail Views
//!
//! Mailbox / reading / composing state machine and compose form rules.

use crate::models::{ComposeRequest, Email};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mailbox {
    Inbox,
    Sent,
    Archive,
}

impl Mailbox {
    pub const ALL: [Mailbox; 3] = [Mailbox::Inbox, Mailbox::Sent, Mailbox::Archive];

    /// Path segment used by `GET /emails/{mailbox}`
    pub fn as_str(&self) -> &'static str {
        match self {
            Mailbox::Inbox => "inbox",
            Mailbox::Sent => "sent",
            Mailbox::Archive => "archive",
        }
    }

    /// Heading shown above the listing
    pub fn title(&self) -> &'static str {
        match self {
            Mailbox::Inbox => "Inbox",
            Mailbox::Sent => "Sent",
            Mailbox::Archive => "Archive",
        }
    }

    /// Card title: recipients for sent mail, sender otherwise
    pub fn card_title(&self, email: &Email) -> String {
        match self {
            Mailbox::Sent => format!("TO: {}", email.recipients.join(", ")),
            _ => format!("FROM: {}", email.sender),
        }
    }
}

/// Which mail panel is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MailView {
    Listing(Mailbox),
    Reading(u32),
    Composing,
}

impl Default for MailView {
    fn default() -> Self {
        MailView::Listing(Mailbox::Inbox)
    }
}

impl MailView {
    /// The emails panel hosts both the listing and the reader
    pub fn shows_emails_panel(&self) -> bool {
        !matches!(self, MailView::Composing)
    }

    pub fn shows_compose_panel(&self) -> bool {
        matches!(self, MailView::Composing)
    }
}

/// Summary card classes; unread mail carries the `unread` marker
pub fn email_card_class(email: &Email) -> &'static str {
    if email.read {
        "card email-card bg-secondary text-white"
    } else {
        "card email-card unread"
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComposeForm {
    pub recipients: String,
    pub subject: String,
    pub body: String,
}

impl ComposeForm {
    /// Body of `POST /emails`. Fields are sent as typed; the server
    /// validates them.
    pub fn to_request(&self) -> ComposeRequest {
        ComposeRequest {
            recipients: self.recipients.clone(),
            subject: self.subject.clone(),
            body: self.body.clone(),
        }
    }
}

/// Compose form pre-filled as a reply to `email`
pub fn reply_to(email: &Email) -> ComposeForm {
    let subject = if email.subject.starts_with("Re:") {
        email.subject.clone()
    } else {
        format!("Re: {}", email.subject)
    };
    ComposeForm {
        recipients: email.sender.clone(),
        subject,
        body: format!("\n\nOn {}, {} wrote:\n{}", email.timestamp, email.sender, email.body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email(read: bool) -> Email {
        Email {
            id: 9,
            sender: "ana@example.com".into(),
            recipients: vec!["bo@example.com".into(), "cy@example.com".into()],
            subject: "Dinner".into(),
            timestamp: "Oct 17 2026, 6:00 PM".into(),
            body: "Pasta?\nOr soup.".into(),
            read,
            archived: false,
        }
    }

    #[test]
    fn test_card_title_depends_on_mailbox() {
        let email = email(false);
        assert_eq!(Mailbox::Sent.card_title(&email), "TO: bo@example.com, cy@example.com");
        assert_eq!(Mailbox::Inbox.card_title(&email), "FROM: ana@example.com");
        assert_eq!(Mailbox::Archive.card_title(&email), "FROM: ana@example.com");
    }

    #[test]
    fn test_unread_marker() {
        assert!(email_card_class(&email(false)).contains("unread"));
        assert!(!email_card_class(&email(true)).contains("unread"));
        assert!(email_card_class(&email(true)).contains("bg-secondary"));
    }

    #[test]
    fn test_reply_prefill() {
        let reply = reply_to(&email(true));
        assert_eq!(reply.recipients, "ana@example.com");
        assert_eq!(reply.subject, "Re: Dinner");
        assert_eq!(reply.body, "\n\nOn Oct 17 2026, 6:00 PM, ana@example.com wrote:\nPasta?\nOr soup.");
    }

    #[test]
    fn test_reply_does_not_stack_prefix() {
        let mut replied = email(true);
        replied.subject = "Re: Dinner".into();
        assert_eq!(reply_to(&replied).subject, "Re: Dinner");
    }

    #[test]
    fn test_compose_reset_is_empty() {
        let form = ComposeForm::default();
        assert_eq!((form.recipients.as_str(), form.subject.as_str(), form.body.as_str()), ("", "", ""));
        assert_eq!(form.to_request(), ComposeRequest::default());
    }

    #[test]
    fn test_exactly_one_panel_visible() {
        let views = [
            MailView::Listing(Mailbox::Inbox),
            MailView::Listing(Mailbox::Sent),
            MailView::Reading(3),
            MailView::Composing,
        ];
        for view in views {
            assert!(view.shows_emails_panel() ^ view.shows_compose_panel());
        }
        assert_eq!(MailView::default(), MailView::Listing(Mailbox::Inbox));
    }
}
