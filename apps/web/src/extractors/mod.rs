pub mod current_user;
pub mod session_token;

pub use current_user::CurrentUser;
pub use session_token::SessionToken;
