use application::transfer::CreateRentalDto;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

/// Body of POST /rentals. Fields stay raw JSON values so a mistyped field is
/// reported per field instead of surfacing as a transport rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRentalRequest {
    customer_id: Option<Value>,
    game_id: Option<Value>,
    days_rented: Option<Value>,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct InvalidRequest {
    pub errors: Vec<FieldError>,
}

impl IntoResponse for InvalidRequest {
    fn into_response(self) -> axum::response::Response {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "invalid request", "details": self.errors })),
        )
            .into_response()
    }
}

/// Transport-level rejection (unparseable body, wrong content type, malformed
/// path id) presented with the same error body shape as field validation.
#[derive(Debug)]
pub struct MalformedRequest {
    message: String,
}

impl From<JsonRejection> for MalformedRequest {
    fn from(rejection: JsonRejection) -> Self {
        Self {
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for MalformedRequest {
    fn from(rejection: PathRejection) -> Self {
        Self {
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for MalformedRequest {
    fn into_response(self) -> axum::response::Response {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "invalid request", "details": [self.message] })),
        )
            .into_response()
    }
}

impl CreateRentalRequest {
    /// Shape validation, independent of the transport: either every field is
    /// present and sane, or the caller gets the full list of field errors.
    pub fn validate(self) -> Result<CreateRentalDto, InvalidRequest> {
        let mut errors = Vec::new();
        let customer_id = uuid_field(self.customer_id, "customerId", &mut errors);
        let game_id = uuid_field(self.game_id, "gameId", &mut errors);
        let days_rented = days_field(self.days_rented, &mut errors);

        match (customer_id, game_id, days_rented) {
            (Some(customer_id), Some(game_id), Some(days_rented)) => Ok(CreateRentalDto {
                customer_id,
                game_id,
                days_rented,
            }),
            _ => Err(InvalidRequest { errors }),
        }
    }
}

fn uuid_field(
    value: Option<Value>,
    field: &'static str,
    errors: &mut Vec<FieldError>,
) -> Option<Uuid> {
    let Some(value) = value else {
        errors.push(FieldError {
            field,
            message: "is required",
        });
        return None;
    };
    let parsed = value.as_str().and_then(|raw| Uuid::parse_str(raw).ok());
    if parsed.is_none() {
        errors.push(FieldError {
            field,
            message: "must be a UUID string",
        });
    }
    parsed
}

fn days_field(value: Option<Value>, errors: &mut Vec<FieldError>) -> Option<i32> {
    let Some(value) = value else {
        errors.push(FieldError {
            field: "daysRented",
            message: "is required",
        });
        return None;
    };
    let parsed = value
        .as_i64()
        .and_then(|days| i32::try_from(days).ok())
        .filter(|days| *days > 0);
    if parsed.is_none() {
        errors.push(FieldError {
            field: "daysRented",
            message: "must be a positive integer",
        });
    }
    parsed
}
