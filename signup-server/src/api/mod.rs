//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`registrations`] - 报名接口

pub mod health;
pub mod registrations;

use axum::Router;

use crate::core::ServerState;

// Re-export common types for handlers
pub use crate::utils::AppResult;

/// 组合所有 API 路由
pub fn router() -> Router<ServerState> {
    health::router().merge(registrations::router())
}
