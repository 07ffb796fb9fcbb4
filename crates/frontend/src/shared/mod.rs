pub mod api_utils;
pub mod components;
pub mod confirm;
pub mod controller;
pub mod date_utils;
pub mod export;
pub mod messages;
pub mod search;
