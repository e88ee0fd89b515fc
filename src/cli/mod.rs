pub mod command;
pub mod credentials;
pub mod embed;
pub mod extract;
pub mod info;
