pub mod catalog;
pub mod download;
pub mod github;
pub mod http;
pub mod install;
pub mod platform;
pub mod runtime;
