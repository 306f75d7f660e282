use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, Error};
use serde_json::{json, Value};

/// POST /players and return the new id; panics unless it succeeds.
pub async fn register_player<S>(app: &S, name: &str) -> i32
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let req = test::TestRequest::post()
        .uri("/players")
        .set_json(json!({ "name": name }))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert!(resp.status().is_success(), "register {name:?} failed: {}", resp.status());
    let body: Value = test::read_body_json(resp).await;
    body["player_id"].as_i64().expect("player_id should be an integer") as i32
}

/// POST /jokenpo/play and hand back the raw response.
pub async fn play_round<S>(app: &S, player_id: i32, mv: &str) -> ServiceResponse<BoxBody>
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let req = test::TestRequest::post()
        .uri("/jokenpo/play")
        .set_json(json!({ "player_id": player_id, "move": mv }))
        .to_request();
    test::call_service(app, req).await
}
