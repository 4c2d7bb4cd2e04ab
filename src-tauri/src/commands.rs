pub mod config;
pub mod keychain;
pub mod movies;
pub mod watched;
