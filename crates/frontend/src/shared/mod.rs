pub mod api;
pub mod api_utils;
pub mod clipboard;
pub mod components;
pub mod download;
pub mod format;
pub mod icons;
pub mod toast;
