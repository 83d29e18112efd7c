pub mod admin;
pub mod confirm;
pub mod filter;
pub mod form;
pub mod list;
pub mod notification;
pub mod render;
