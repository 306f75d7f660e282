// Unit tests for error mapping - pure domain logic without HTTP server or database
use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind,
};
use crate::{AppError, ErrorCode};

#[test]
fn maps_input_validation_to_400() {
    let app: AppError = DomainError::invalid_name().into();
    assert_eq!(app.code(), ErrorCode::InvalidName);
    assert_eq!(app.status().as_u16(), 400);
    assert_eq!(app.detail(), "Player name must not be empty.");

    let app: AppError = DomainError::invalid_move("LIZARD").into();
    assert_eq!(app.code(), ErrorCode::InvalidMove);
    assert_eq!(app.status().as_u16(), 400);
    assert_eq!(
        app.detail(),
        "Move 'LIZARD' is invalid. Choose ROCK, PAPER or SCISSORS."
    );

    let app: AppError =
        DomainError::validation(ValidationKind::Other("X".into()), "bad field").into();
    assert_eq!(app.code(), ErrorCode::ValidationError);
    assert_eq!(app.status().as_u16(), 400);
}

#[test]
fn duplicate_name_is_a_400_not_a_409() {
    let app: AppError = DomainError::duplicate_name("Alice").into();
    assert_eq!(app.code(), ErrorCode::DuplicateName);
    assert_eq!(app.status().as_u16(), 400);
    assert_eq!(
        app.detail(),
        "The name 'Alice' is already taken. Choose another name."
    );

    let other: AppError =
        DomainError::conflict(ConflictKind::Other("Unique".into()), "generic conflict").into();
    assert_eq!(other.code(), ErrorCode::Conflict);
    assert_eq!(other.status().as_u16(), 409);
}

#[test]
fn maps_not_found() {
    let app: AppError = DomainError::player_not_found(42).into();
    assert_eq!(app.code(), ErrorCode::PlayerNotFound);
    assert_eq!(app.status().as_u16(), 404);
    assert_eq!(app.detail(), "Player with ID 42 not found.");

    let app: AppError =
        DomainError::not_found(NotFoundKind::Other("Record".into()), "Record not found").into();
    assert_eq!(app.code(), ErrorCode::NotFound);
    assert_eq!(app.status().as_u16(), 404);
}

#[test]
fn maps_infra() {
    let t: AppError = DomainError::infra(InfraErrorKind::Timeout, "timeout").into();
    assert_eq!(t.code(), ErrorCode::DbTimeout);
    assert_eq!(t.status().as_u16(), 504);
    assert!(matches!(t, AppError::Timeout { .. }));

    let down: AppError = DomainError::infra(InfraErrorKind::DbUnavailable, "down").into();
    assert_eq!(down.code(), ErrorCode::DbUnavailable);
    assert_eq!(down.status().as_u16(), 503);

    let corr: AppError = DomainError::infra(InfraErrorKind::DataCorruption, "bad").into();
    assert_eq!(corr.code(), ErrorCode::DataCorruption);
    assert_eq!(corr.status().as_u16(), 500);

    let other: AppError =
        DomainError::infra(InfraErrorKind::Other("DbErr".into()), "other").into();
    assert_eq!(other.code(), ErrorCode::DbError);
    assert_eq!(other.status().as_u16(), 500);
}

#[test]
fn envelope_carries_message_and_numeric_status() {
    let app: AppError = DomainError::duplicate_name("Bob").into();
    let envelope = app.envelope();
    assert_eq!(envelope.code, 400);
    assert_eq!(
        envelope.error,
        "The name 'Bob' is already taken. Choose another name."
    );
}
