//! Application layer for GamerMind.
//!
//! This crate provides use case implementations that coordinate between
//! domain and infrastructure layers to implement application-level business logic.

pub mod auth_usecase;
pub mod report_service;
pub mod room_usecase;

pub use auth_usecase::AuthUseCase;
pub use report_service::ReportService;
pub use room_usecase::ChatRoomUseCase;
