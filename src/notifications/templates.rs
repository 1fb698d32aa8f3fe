//! HTML bodies for the booking and inquiry notification emails.
//!
//! Kept as plain string assembly: the two documents are small, fixed-layout
//! tables and the operations team reads them in a mail client.

use super::views::{BookingPayload, InquiryWebhookPayload};
use crate::inquiries::models::ServiceLine;

/// Minimal HTML escaping for user-supplied values embedded in the documents
pub fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn detail_row(label: &str, value: Option<&str>) -> String {
    let rendered = value.map_or_else(|| "&mdash;".to_string(), escape_html);
    format!(
        "<tr><td style=\"padding:4px 12px 4px 0;color:#666;\">{label}</td>\
         <td style=\"padding:4px 0;\">{rendered}</td></tr>\n"
    )
}

fn document(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<body style=\"font-family:Arial,sans-serif;color:#222;\">\n\
         <h2 style=\"color:#1a1a2e;\">{title}</h2>\n{body}</body>\n</html>\n"
    )
}

/// Email the operations team receives for every booking request
pub fn booking_operator_email(payload: &BookingPayload) -> String {
    let mut rows = String::new();
    rows.push_str(&detail_row("Customer", payload.customer_name.as_deref()));
    rows.push_str(&detail_row("Company", payload.company.as_deref()));
    rows.push_str(&detail_row("Email", payload.email.as_deref()));
    rows.push_str(&detail_row("Time slot", payload.time_slot.as_deref()));
    rows.push_str(&detail_row("Booking reference", payload.booking_id.as_deref()));

    document(
        "New booking request",
        &format!("<table>\n{rows}</table>\n"),
    )
}

/// Confirmation copy for the customer who made the booking
pub fn booking_customer_email(payload: &BookingPayload) -> String {
    let name = payload
        .customer_name
        .as_deref()
        .map_or_else(String::new, escape_html);
    let slot = payload
        .time_slot
        .as_deref()
        .map_or_else(|| "the requested time".to_string(), escape_html);
    let reference = payload
        .booking_id
        .as_deref()
        .map_or_else(String::new, |id| {
            format!(
                "<p style=\"color:#666;\">Your booking reference: {}</p>\n",
                escape_html(id)
            )
        });

    document(
        "We received your booking",
        &format!(
            "<p>Hi {name},</p>\n\
             <p>Thanks for booking a call with us for {slot}. \
             We will be in touch shortly to confirm the details.</p>\n\
             {reference}\
             <p>&mdash; The Atrium Events team</p>\n"
        ),
    )
}

/// Email the operations team receives when a website inquiry lands.
///
/// The training-specific rows only appear for the training programme
/// service line.
pub fn inquiry_email(payload: &InquiryWebhookPayload) -> String {
    let mut rows = String::new();
    rows.push_str(&detail_row("Contact", payload.contact_name.as_deref()));
    rows.push_str(&detail_row("Company", payload.company.as_deref()));
    rows.push_str(&detail_row("Email", payload.email.as_deref()));
    rows.push_str(&detail_row("Phone", payload.phone.as_deref()));
    rows.push_str(&detail_row("Event date", payload.event_date.as_deref()));
    rows.push_str(&detail_row(
        "Participants",
        payload
            .participant_count
            .map(|n| n.to_string())
            .as_deref(),
    ));
    rows.push_str(&detail_row("Location", payload.location.as_deref()));
    rows.push_str(&detail_row("Message", payload.message.as_deref()));

    let mut body = format!("<table>\n{rows}</table>\n");

    if payload.service == ServiceLine::TrainingProgram {
        let mut training_rows = String::new();
        training_rows.push_str(&detail_row("Topic", payload.training_topic.as_deref()));
        training_rows.push_str(&detail_row(
            "Audience",
            payload.training_audience.as_deref(),
        ));
        body.push_str(&format!(
            "<h3 style=\"color:#1a1a2e;\">Training details</h3>\n<table>\n{training_rows}</table>\n"
        ));
    }

    document(
        &format!("New {} inquiry", payload.service.label()),
        &body,
    )
}
