//! Two-party chat mock.
//!
//! Placeholder UI state, not a messaging system: a fixed contact roster and
//! a local-only message log. "Send" appends to the log with no delivery,
//! persistence, or addressing to any other party, and no ordering guarantee
//! beyond append order.

use agendahub_domain::validation;
use agendahub_domain::{ChatMessage, Contact, Presence, Result, LOCAL_SENDER};
use chrono::NaiveTime;
use uuid::Uuid;

/// Chat roster and message log
#[derive(Debug, Default)]
pub struct ChatService {
    contacts: Vec<Contact>,
    messages: Vec<ChatMessage>,
}

impl ChatService {
    pub fn new() -> Self {
        Self::default()
    }

    /// The fixed roster and history the client ships with.
    pub fn seeded() -> Self {
        let contacts = vec![
            Contact {
                id: "1".into(),
                name: "John Doe".into(),
                agenda_id: "AGENDA001".into(),
                presence: Presence::Online,
                last_message: Some("Hey, ready for the meeting?".into()),
                last_message_at: Some("2 min ago".into()),
            },
            Contact {
                id: "2".into(),
                name: "Sarah Wilson".into(),
                agenda_id: "AGENDA002".into(),
                presence: Presence::Offline,
                last_message: Some("Thanks for the update".into()),
                last_message_at: Some("1 hour ago".into()),
            },
            Contact {
                id: "3".into(),
                name: "Mike Johnson".into(),
                agenda_id: "AGENDA003".into(),
                presence: Presence::Online,
                last_message: Some("Can we reschedule?".into()),
                last_message_at: Some("5 min ago".into()),
            },
        ];

        let messages = vec![
            ChatMessage {
                id: "1".into(),
                sender_id: "1".into(),
                content: "Hey, ready for the meeting?".into(),
                sent_at: clock(10, 30),
            },
            ChatMessage {
                id: "2".into(),
                sender_id: LOCAL_SENDER.into(),
                content: "Yes, I'll be there in 5 minutes".into(),
                sent_at: clock(10, 32),
            },
        ];

        Self { contacts, messages }
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Case-insensitive match on contact name or agenda id.
    pub fn search(&self, term: &str) -> Vec<&Contact> {
        let needle = term.to_lowercase();
        self.contacts
            .iter()
            .filter(|c| {
                c.name.to_lowercase().contains(&needle)
                    || c.agenda_id.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Append an offline placeholder entry for the given agenda id.
    pub fn add_contact(&mut self, name: &str, agenda_id: &str) -> Result<Contact> {
        let name = name.trim();
        let agenda_id = agenda_id.trim();
        if name.is_empty() {
            return Err(agendahub_domain::AgendaError::validation("name", "Name is required"));
        }
        if agenda_id.is_empty() {
            return Err(agendahub_domain::AgendaError::validation(
                "agenda_id",
                "Agenda Hub ID is required",
            ));
        }

        let contact = Contact {
            id: Uuid::now_v7().to_string(),
            name: name.to_string(),
            agenda_id: agenda_id.to_string(),
            presence: Presence::Offline,
            last_message: None,
            last_message_at: None,
        };
        self.contacts.push(contact.clone());
        Ok(contact)
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Append a local-only message; nothing is delivered anywhere.
    pub fn send(&mut self, content: &str, sent_at: NaiveTime) -> Result<ChatMessage> {
        validation::validate_chat_message(content)?;

        let message = ChatMessage {
            id: Uuid::now_v7().to_string(),
            sender_id: LOCAL_SENDER.into(),
            content: content.to_string(),
            sent_at,
        };
        self.messages.push(message.clone());
        Ok(message)
    }
}

fn clock(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}
