pub mod config;
pub mod dashboard;
pub mod error;
pub mod form;
pub mod gateway;
pub mod notice;
pub mod render;
pub mod service;
