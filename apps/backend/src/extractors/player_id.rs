use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Player id taken from the `{player_id}` path segment.
///
/// Only the shape is checked here; whether the player exists is the service's
/// call, so an unknown id still reaches it and becomes a 404.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerIdPath(pub i64);

fn parse_player_id(req: &HttpRequest) -> Result<PlayerIdPath, AppError> {
    let raw = req
        .match_info()
        .get("player_id")
        .ok_or_else(|| AppError::bad_request(ErrorCode::BadRequest, "Missing player_id parameter"))?;

    raw.parse::<i64>().map(PlayerIdPath).map_err(|_| {
        AppError::bad_request(
            ErrorCode::BadRequest,
            format!("Invalid player id: {raw}"),
        )
    })
}

impl FromRequest for PlayerIdPath {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse_player_id(req))
    }
}
