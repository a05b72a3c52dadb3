pub mod action;
pub mod project;
pub mod user;
