pub mod add;
pub mod config;
pub mod delete;
pub mod edit;
pub mod form;
pub mod list;
pub mod show;
pub mod view;
