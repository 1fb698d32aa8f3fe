use super::templates;
use crate::common::errors::BusinessError;
use crate::common::state::AppState;
use crate::inquiries::models::ServiceLine;
use crate::validation_error;
use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use utoipa_axum::{router::OpenApiRouter, routes};

pub fn router(state: &AppState) -> OpenApiRouter {
    // Dispatch stays public like the rest of the inquiry pipeline: payloads
    // are validated and the endpoints only ever mail the configured operator
    // plus the submitted address.
    OpenApiRouter::new()
        .routes(routes!(dispatch_booking_confirmation))
        .routes(routes!(dispatch_inquiry_notification))
        .with_state(state.clone())
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct BookingPayload {
    pub email: Option<String>,
    pub customer_name: Option<String>,
    pub company: Option<String>,
    pub time_slot: Option<String>,
    pub booking_id: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BookingDispatchResponse {
    pub ok: bool,
    pub operator_sent: bool,
    pub customer_sent: bool,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct InquiryWebhookPayload {
    pub service: ServiceLine,
    pub contact_name: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub event_date: Option<String>,
    pub participant_count: Option<i32>,
    pub location: Option<String>,
    pub message: Option<String>,
    pub training_topic: Option<String>,
    pub training_audience: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InquiryDispatchResponse {
    pub ok: bool,
}

/// Send the booking confirmation pair: operator first, then the customer.
///
/// The operator send failing fails the whole call. The customer send is
/// best-effort: a failure is logged and reported in the response without
/// failing the dispatch. There is no idempotency key, so calling this twice
/// for the same booking sends twice.
#[utoipa::path(
    post,
    path = "/notifications/booking",
    request_body = BookingPayload,
    responses(
        (status = 200, description = "Operator email sent", body = BookingDispatchResponse),
        (status = 400, description = "Required fields missing"),
        (status = 502, description = "Operator email could not be sent"),
        (status = 503, description = "Email delivery is not configured")
    ),
    tag = "notifications",
    summary = "Dispatch booking confirmation emails"
)]
pub async fn dispatch_booking_confirmation(
    State(state): State<AppState>,
    Json(payload): Json<BookingPayload>,
) -> Result<Json<BookingDispatchResponse>, BusinessError> {
    // Validate before touching the mailer so a bad payload never produces
    // outbound SMTP traffic
    let mut missing: Vec<&str> = Vec::new();
    if payload.email.as_deref().is_none_or(|v| v.is_empty()) {
        missing.push("email");
    }
    if payload.customer_name.as_deref().is_none_or(|v| v.is_empty()) {
        missing.push("customer_name");
    }
    if !missing.is_empty() {
        return Err(validation_error!(
            missing.join(", "),
            "required fields are missing"
        ));
    }

    let Some(mailer) = state.mailer.as_ref() else {
        return Err(BusinessError::NotConfigured {
            service: "smtp".to_string(),
        });
    };

    let booking_reference = payload.booking_id.as_deref().unwrap_or("unreferenced");

    mailer
        .send_html(
            mailer.operator_email(),
            &format!("New booking request ({booking_reference})"),
            templates::booking_operator_email(&payload),
        )
        .await
        .map_err(|e| BusinessError::ExternalServiceError {
            service: "smtp".to_string(),
            message: e.to_string(),
        })?;

    let customer_sent = if mailer.customer_send_enabled() {
        let customer_address = payload.email.as_deref().unwrap_or_default();
        match mailer
            .send_html(
                customer_address,
                "Your booking with Atrium Events",
                templates::booking_customer_email(&payload),
            )
            .await
        {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(
                    to = customer_address,
                    error = %e,
                    "Customer booking confirmation failed; operator copy already sent"
                );
                false
            }
        }
    } else {
        false
    };

    Ok(Json(BookingDispatchResponse {
        ok: true,
        operator_sent: true,
        customer_sent,
    }))
}

/// Render and send the operator notification for an inquiry row.
///
/// One inbound call produces exactly one outbound email; there is no
/// batching, dedup, or queuing.
#[utoipa::path(
    post,
    path = "/notifications/inquiry",
    request_body = InquiryWebhookPayload,
    responses(
        (status = 200, description = "Operator email sent", body = InquiryDispatchResponse),
        (status = 400, description = "Unknown service line or malformed payload"),
        (status = 502, description = "Operator email could not be sent"),
        (status = 503, description = "Email delivery is not configured")
    ),
    tag = "notifications",
    summary = "Dispatch an inquiry notification email"
)]
pub async fn dispatch_inquiry_notification(
    State(state): State<AppState>,
    Json(payload): Json<InquiryWebhookPayload>,
) -> Result<Json<InquiryDispatchResponse>, BusinessError> {
    let Some(mailer) = state.mailer.as_ref() else {
        return Err(BusinessError::NotConfigured {
            service: "smtp".to_string(),
        });
    };

    let contact = payload.contact_name.as_deref().unwrap_or("the website");

    mailer
        .send_html(
            mailer.operator_email(),
            &format!("New {} inquiry from {contact}", payload.service.label()),
            templates::inquiry_email(&payload),
        )
        .await
        .map_err(|e| BusinessError::ExternalServiceError {
            service: "smtp".to_string(),
            message: e.to_string(),
        })?;

    Ok(Json(InquiryDispatchResponse { ok: true }))
}
