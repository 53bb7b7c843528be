pub mod account;
pub mod login_history;
pub mod session_token;
