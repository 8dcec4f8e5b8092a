pub mod register;
pub mod login;

pub use register::RegisterUserRequest;
pub use login::LoginRequest;
