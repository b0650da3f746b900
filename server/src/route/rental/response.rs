use application::transfer::{RentalDto, RentalListingDto};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use time::Date;
use uuid::Uuid;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalResponse {
    id: Uuid,
    customer_id: Uuid,
    game_id: Uuid,
    rent_date: Date,
    days_rented: i32,
    original_price: i64,
    return_date: Option<Date>,
    delay_fee: Option<i64>,
}

impl From<RentalDto> for RentalResponse {
    fn from(dto: RentalDto) -> Self {
        Self {
            id: dto.id,
            customer_id: dto.customer_id,
            game_id: dto.game_id,
            rent_date: dto.rent_date,
            days_rented: dto.days_rented,
            original_price: dto.original_price,
            return_date: dto.return_date,
            delay_fee: dto.delay_fee,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RentalCreatedResponse(RentalResponse);

impl From<RentalDto> for RentalCreatedResponse {
    fn from(dto: RentalDto) -> Self {
        Self(RentalResponse::from(dto))
    }
}

impl IntoResponse for RentalCreatedResponse {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::CREATED, Json(self.0)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct RentalReturnedResponse(RentalResponse);

impl From<RentalDto> for RentalReturnedResponse {
    fn from(dto: RentalDto) -> Self {
        Self(RentalResponse::from(dto))
    }
}

impl IntoResponse for RentalReturnedResponse {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::CREATED, Json(self.0)).into_response()
    }
}

#[derive(Debug, Serialize)]
struct PartySummary {
    id: Uuid,
    name: String,
}

#[derive(Debug, Serialize)]
pub struct RentalListEntry {
    #[serde(flatten)]
    rental: RentalResponse,
    customer: PartySummary,
    game: PartySummary,
}

impl From<RentalListingDto> for RentalListEntry {
    fn from(dto: RentalListingDto) -> Self {
        let customer = PartySummary {
            id: dto.rental.customer_id,
            name: dto.customer_name,
        };
        let game = PartySummary {
            id: dto.rental.game_id,
            name: dto.game_name,
        };
        Self {
            rental: RentalResponse::from(dto.rental),
            customer,
            game,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RentalListResponse(Vec<RentalListEntry>);

impl From<Vec<RentalListingDto>> for RentalListResponse {
    fn from(listings: Vec<RentalListingDto>) -> Self {
        Self(listings.into_iter().map(RentalListEntry::from).collect())
    }
}

impl IntoResponse for RentalListResponse {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::OK, Json(self.0)).into_response()
    }
}
