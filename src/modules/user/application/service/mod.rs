mod create_user_service;
mod delete_user_service;
mod fetch_user_service;
mod update_user_service;

pub use create_user_service::CreateUserService;
pub use delete_user_service::DeleteUserService;
pub use fetch_user_service::FetchUserService;
pub use update_user_service::UpdateUserService;
