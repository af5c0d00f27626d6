pub mod api;
pub mod data;
pub mod logic;
pub mod models;
pub mod view;
