use crate::user::application::domain::entities::UserId;
use crate::user::application::ports::incoming::use_cases::CallerKey;

/// The user resolved from a verified bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser(pub UserId);

/// Rate-limit identity of the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestCaller(pub CallerKey);
