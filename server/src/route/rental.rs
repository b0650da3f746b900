mod request;
mod response;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use uuid::Uuid;

use application::service::{
    CancelRentalService, GetRentalService, RentGameService, ReturnGameService,
};
use application::transfer::{CancelRentalDto, ReturnRentalDto};

use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::route::rental::request::{CreateRentalRequest, MalformedRequest};
use crate::route::rental::response::{
    RentalCreatedResponse, RentalListResponse, RentalReturnedResponse,
};

pub trait RentalRouter {
    fn route_rental(self) -> Self;
}

impl RentalRouter for Router<AppModule> {
    fn route_rental(self) -> Self {
        self.route(
            "/rentals",
            get(|State(module): State<AppModule>| async move {
                module
                    .pgpool()
                    .list_rentals()
                    .await
                    .map(RentalListResponse::from)
                    .map_err(ErrorStatus::from)
            })
            .post(
                |State(module): State<AppModule>,
                 payload: Result<Json<CreateRentalRequest>, JsonRejection>| async move {
                    let Json(req) = match payload {
                        Ok(payload) => payload,
                        Err(rejection) => return MalformedRequest::from(rejection).into_response(),
                    };
                    let dto = match req.validate() {
                        Ok(dto) => dto,
                        Err(rejection) => return rejection.into_response(),
                    };
                    module
                        .pgpool()
                        .rent_game(dto)
                        .await
                        .map(RentalCreatedResponse::from)
                        .map_err(ErrorStatus::from)
                        .into_response()
                },
            ),
        )
        .route(
            "/rentals/:id/return",
            post(
                |State(module): State<AppModule>,
                 path: Result<Path<Uuid>, PathRejection>| async move {
                    let Path(id) = match path {
                        Ok(path) => path,
                        Err(rejection) => return MalformedRequest::from(rejection).into_response(),
                    };
                    module
                        .pgpool()
                        .return_game(ReturnRentalDto { rental_id: id })
                        .await
                        .map(RentalReturnedResponse::from)
                        .map_err(ErrorStatus::from)
                        .into_response()
                },
            ),
        )
        .route(
            "/rentals/:id",
            delete(
                |State(module): State<AppModule>,
                 path: Result<Path<Uuid>, PathRejection>| async move {
                    let Path(id) = match path {
                        Ok(path) => path,
                        Err(rejection) => return MalformedRequest::from(rejection).into_response(),
                    };
                    module
                        .pgpool()
                        .cancel_rental(CancelRentalDto { rental_id: id })
                        .await
                        .map(|()| StatusCode::NO_CONTENT)
                        .map_err(ErrorStatus::from)
                        .into_response()
                },
            ),
        )
    }
}
