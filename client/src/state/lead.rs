//! Lead capture form state.
//!
//! DESIGN
//! ======
//! The form has two submit channels. WhatsApp is synchronous: validate, build
//! the deep link, let the component open it, then report back. Email is
//! asynchronous: `begin_email` validates and marks the request in flight,
//! `finish_email` always clears that flag. Fields are only cleared after a
//! channel reports success, so a failed send keeps what the visitor typed.

#[cfg(test)]
#[path = "lead_test.rs"]
mod lead_test;

use crate::net::types::InquiryPayload;
use crate::util::whatsapp;

/// Property type value used when none was picked.
pub const UNSPECIFIED_PROPERTY: &str = "Not specified";

/// Email message used when the visitor leaves the message field empty.
pub const DEFAULT_EMAIL_MESSAGE: &str = "General inquiry about Aricia Residences";

/// How long a notice stays up before dismissing itself.
pub const NOTICE_TIMEOUT_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PropertyOption {
    pub value: &'static str,
    pub label: &'static str,
}

pub const PROPERTY_OPTIONS: &[PropertyOption] = &[
    PropertyOption { value: "type-a1", label: "Type A - 550 sq ft" },
    PropertyOption { value: "type-b1", label: "Type B - 757 sq ft" },
    PropertyOption { value: "type-c1", label: "Type C - 872 sq ft" },
    PropertyOption { value: "type-d1", label: "Type D1/D2 - 1410/1420 sq ft (Duplex)" },
    PropertyOption { value: "general", label: "General Inquiry" },
];

/// Why a submit was refused. The display text is the notice shown to the visitor.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LeadError {
    #[error("Please fill in your name and phone number")]
    MissingWhatsAppFields,
    #[error("Please fill in all required fields")]
    MissingEmailFields,
    #[error("Your inquiry is already being sent")]
    AlreadySending,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "lead-notice lead-notice--success",
            Self::Error => "lead-notice lead-notice--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    fn success(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, text: text.into() }
    }

    fn error(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, text: text.into() }
    }
}

/// Raw form input, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Selected [`PROPERTY_OPTIONS`] value, empty when none.
    pub property_type: String,
    pub message: String,
}

impl LeadFields {
    fn has(value: &str) -> bool {
        !value.trim().is_empty()
    }

    pub fn ready_for_whatsapp(&self) -> bool {
        Self::has(&self.name) && Self::has(&self.phone)
    }

    pub fn ready_for_email(&self) -> bool {
        Self::has(&self.name) && Self::has(&self.email) && Self::has(&self.phone)
    }

    /// Relay payload for these fields, with defaults filled in.
    pub fn to_payload(&self, inquiry_date: &str) -> InquiryPayload {
        let or_default = |value: &str, default: &str| match value.trim() {
            "" => default.to_owned(),
            value => value.to_owned(),
        };
        let email = self.email.trim().to_owned();
        InquiryPayload {
            from_name: self.name.trim().to_owned(),
            from_email: email.clone(),
            from_phone: self.phone.trim().to_owned(),
            property_type: or_default(&self.property_type, UNSPECIFIED_PROPERTY),
            message: or_default(&self.message, DEFAULT_EMAIL_MESSAGE),
            inquiry_date: inquiry_date.to_owned(),
            email,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadState {
    pub fields: LeadFields,
    /// An email send is awaiting the relay.
    pub email_in_flight: bool,
    pub notice: Option<Notice>,
    /// Bumped every time a notice is shown.
    notice_seq: u64,
}

impl LeadState {
    // --- WhatsApp ---

    /// Validate for the WhatsApp channel and build the deep link to open.
    ///
    /// # Errors
    ///
    /// [`LeadError::MissingWhatsAppFields`] when name or phone is blank.
    pub fn prepare_whatsapp(&mut self) -> Result<String, LeadError> {
        if !self.fields.ready_for_whatsapp() {
            return Err(self.refuse(LeadError::MissingWhatsAppFields));
        }
        Ok(whatsapp::inquiry_url(&self.fields))
    }

    /// Record whether the WhatsApp window actually opened.
    pub fn finish_whatsapp(&mut self, opened: bool) {
        if opened {
            self.fields = LeadFields::default();
            self.show(Notice::success("Redirecting to WhatsApp..."));
        } else {
            self.show(Notice::error("Failed to open WhatsApp. Please try again."));
        }
    }

    // --- Email ---

    /// Validate for the email channel, mark the send in flight and return
    /// the payload to post.
    ///
    /// # Errors
    ///
    /// [`LeadError::AlreadySending`] while a send is in flight, or
    /// [`LeadError::MissingEmailFields`] when name, email or phone is blank.
    /// Neither changes the in-flight flag.
    pub fn begin_email(&mut self, inquiry_date: &str) -> Result<InquiryPayload, LeadError> {
        if self.email_in_flight {
            return Err(LeadError::AlreadySending);
        }
        if !self.fields.ready_for_email() {
            return Err(self.refuse(LeadError::MissingEmailFields));
        }
        self.email_in_flight = true;
        self.notice = None;
        Ok(self.fields.to_payload(inquiry_date))
    }

    /// Settle an email send started by [`Self::begin_email`].
    pub fn finish_email(&mut self, result: Result<(), String>) {
        self.email_in_flight = false;
        match result {
            Ok(()) => {
                self.fields = LeadFields::default();
                self.show(Notice::success(
                    "Thank you! Your inquiry has been sent successfully. We will contact you within 24 hours.",
                ));
            }
            Err(e) => {
                leptos::logging::warn!("inquiry email failed: {e}");
                self.show(Notice::error(
                    "Sorry, there was an issue sending your inquiry. Please try the WhatsApp option or call us directly.",
                ));
            }
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Identifies the notice currently showing, if any.
    pub fn notice_seq(&self) -> u64 {
        self.notice_seq
    }

    /// Dismiss the notice only if it is still the one numbered `seq`.
    /// Returns whether anything was cleared.
    pub fn dismiss_notice_if(&mut self, seq: u64) -> bool {
        if self.notice.is_none() || self.notice_seq != seq {
            return false;
        }
        self.notice = None;
        true
    }

    fn show(&mut self, notice: Notice) {
        self.notice_seq += 1;
        self.notice = Some(notice);
    }

    fn refuse(&mut self, error: LeadError) -> LeadError {
        self.show(Notice::error(error.to_string()));
        error
    }
}
