pub mod backend;
pub mod bot_commands;
pub mod dto;
pub mod economics;
pub mod error;
pub mod format;
pub mod i18n;
pub mod views;
