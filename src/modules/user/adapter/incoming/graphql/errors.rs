use async_graphql::{Error, ErrorExtensions};
use tracing::error;

use crate::user::application::ports::incoming::use_cases::{
    CreateUserError, DeleteUserError, FetchUserError, UpdateUserError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Validation,
    TooManyRequests,
    Config,
    NotFound,
    Persistence,
    Unauthenticated,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Validation => "VALIDATION_ERROR",
            ErrorCode::TooManyRequests => "TOO_MANY_REQUESTS",
            ErrorCode::Config => "CONFIG_ERROR",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::Persistence => "PERSISTENCE_ERROR",
            ErrorCode::Unauthenticated => "UNAUTHENTICATED",
        }
    }
}

pub fn coded_error(code: ErrorCode, message: impl Into<String>) -> Error {
    Error::new(message.into()).extend_with(|_, ext| ext.set("code", code.as_str()))
}

pub fn unauthenticated() -> Error {
    coded_error(ErrorCode::Unauthenticated, "Authentication required")
}

fn internal(detail: &str) -> Error {
    error!("persistence failure: {}", detail);
    coded_error(ErrorCode::Persistence, "Internal persistence error")
}

fn not_found() -> Error {
    coded_error(ErrorCode::NotFound, "User not found")
}

impl ErrorExtensions for CreateUserError {
    fn extend(&self) -> Error {
        match self {
            CreateUserError::Validation(e) => coded_error(ErrorCode::Validation, e.to_string()),
            CreateUserError::Throttled(_) => coded_error(
                ErrorCode::TooManyRequests,
                "Too many requests, try again later",
            ),
            CreateUserError::Config(detail) => {
                error!("config failure: {}", detail);
                coded_error(ErrorCode::Config, "Service configuration unavailable")
            }
            CreateUserError::UserAlreadyExists => {
                coded_error(ErrorCode::Persistence, "User already exists")
            }
            CreateUserError::Hashing(detail) | CreateUserError::RepositoryError(detail) => {
                internal(detail)
            }
        }
    }
}

impl ErrorExtensions for UpdateUserError {
    fn extend(&self) -> Error {
        match self {
            UpdateUserError::Validation(e) => coded_error(ErrorCode::Validation, e.to_string()),
            UpdateUserError::UserNotFound => not_found(),
            UpdateUserError::RepositoryError(detail) => internal(detail),
        }
    }
}

impl ErrorExtensions for DeleteUserError {
    fn extend(&self) -> Error {
        match self {
            DeleteUserError::UserNotFound => not_found(),
            DeleteUserError::RepositoryError(detail) => internal(detail),
        }
    }
}

impl ErrorExtensions for FetchUserError {
    fn extend(&self) -> Error {
        match self {
            FetchUserError::UserNotFound => not_found(),
            FetchUserError::RepositoryError(detail) => internal(detail),
        }
    }
}
