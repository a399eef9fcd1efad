//! Registration API 模块

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/registrations", routes())
}

fn routes() -> Router<ServerState> {
    // 提交为公开接口；列表仅供管理端消费，本层不做鉴权
    Router::new().route("/", get(handler::list).post(handler::create))
}
