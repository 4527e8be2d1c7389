use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response as AxumResponse},
};
use serde::Serialize;

#[derive(Debug, PartialEq)]
#[allow(clippy::upper_case_acronyms)]
pub enum Response<T: Serialize + PartialEq> {
    OK(T),
    Created(T),
    Accepted(T),
}

impl<T> IntoResponse for Response<T>
where
    T: Serialize + PartialEq,
{
    fn into_response(self) -> AxumResponse {
        match self {
            Response::OK(data) => (StatusCode::OK, Json(data)).into_response(),
            Response::Created(data) => (StatusCode::CREATED, Json(data)).into_response(),
            Response::Accepted(data) => (StatusCode::ACCEPTED, Json(data)).into_response(),
        }
    }
}
