//! # 内存用户管理 API
//!
//! 一个基于 Axum 的 REST 服务，演示：
//! - 请求体校验（错误累积返回）
//! - 列表过滤与分页
//! - 规范的 HTTP 状态码语义
//!
//! 数据只保存在进程内存中，重启后清空。

pub mod app;
pub mod core;
pub mod infrastructure;
pub mod utils;

pub use app::router;
pub use app::users::{AppState, UserStore};
pub use infrastructure::{Config, ConfigError, Logger};
