mod auth;

pub use auth::MaybeAuthenticatedUser;
