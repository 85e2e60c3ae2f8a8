//! WhatsApp click-to-chat deep links.

#[cfg(test)]
#[path = "whatsapp_test.rs"]
mod whatsapp_test;

use crate::state::lead::LeadFields;

/// Sales line that receives WhatsApp inquiries.
pub const WHATSAPP_NUMBER: &str = "+601113309314";

/// Message body used when the visitor leaves the message field empty.
pub const DEFAULT_WHATSAPP_MESSAGE: &str = "I am interested about Aricia Residences.";

/// Build the prefilled chat text for a lead.
pub fn compose_message(fields: &LeadFields) -> String {
    let message = match fields.message.trim() {
        "" => DEFAULT_WHATSAPP_MESSAGE,
        message => message,
    };
    format!(
        "🏠 *Aricia Residences Inquiry*\n\n\
         *Personal Details:*\n\
         👤 Name: {}\n\
         📧 Email: {}\n\
         📱 Phone: {}\n\n\
         *Property Interest:*\n\
         🏢 Type: {}\n\n\
         *Message:*\n\
         {message}\n\n\
         ---\n\
         Sent from Aricia Residences Website",
        fields.name.trim(),
        fields.email.trim(),
        fields.phone.trim(),
        fields.property_type.trim(),
    )
}

/// `https://wa.me/<digits>?text=<encoded>` for `number` and `text`.
///
/// Everything but digits is dropped from the number, so `+60 11-1330 9314`
/// and `601113309314` produce the same link.
pub fn chat_url(number: &str, text: &str) -> String {
    let digits: String = number.chars().filter(char::is_ascii_digit).collect();
    format!("https://wa.me/{digits}?text={}", urlencoding::encode(text))
}

/// Deep link that opens a chat with the sales line, prefilled for `fields`.
pub fn inquiry_url(fields: &LeadFields) -> String {
    chat_url(WHATSAPP_NUMBER, &compose_message(fields))
}
