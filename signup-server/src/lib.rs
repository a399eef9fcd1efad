//! Signup Server - 报名登记服务
//!
//! # 架构概述
//!
//! 本模块是 Signup Server 的主入口，提供以下核心功能：
//!
//! - **数据库** (`db`): 嵌入式 SurrealDB 存储，email 唯一索引
//! - **HTTP API** (`api`): 注册提交与管理端列表接口
//!
//! # 模块结构
//!
//! ```text
//! signup-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 数据库层
//! └── utils/         # 工具函数
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState};
pub use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode};

// Re-export logger functions
pub use crate::utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
   _____ _                  __  __
  / ___/(_)___ _____  __  _/ / / /___
  \__ \/ / __ `/ __ \/ / / / / / / __ \
 ___/ / / /_/ / / / / /_/ / /_/ / /_/ /
/____/_/\__, /_/ /_/\__,_/\____/ .___/
       /____/                 /_/
    "#
    );
}
