pub mod password;
pub mod search;
pub mod validation;
