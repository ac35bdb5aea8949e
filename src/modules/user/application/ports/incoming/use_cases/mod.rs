mod create_user;
mod delete_user;
mod fetch_user;
mod update_user;

pub use create_user::{
    CallerKey, CreateUserCommand, CreateUserCommandError, CreateUserError, CreateUserUseCase,
};
pub use delete_user::{DeleteUserError, DeleteUserUseCase};
pub use fetch_user::{FetchUserError, FetchUserUseCase};
pub use update_user::{
    UpdateUserCommand, UpdateUserCommandError, UpdateUserError, UpdateUserUseCase,
};
