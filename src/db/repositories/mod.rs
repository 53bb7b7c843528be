pub mod account_repository;
pub mod login_history_repository;
pub mod session_token_repository;
