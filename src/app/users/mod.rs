//! 用户管理：校验、过滤、分页、存储和 HTTP 处理器

pub mod filter;
pub mod handler;
pub mod model;
pub mod pagination;
pub mod store;
pub mod validation;

pub use handler::AppState;
pub use model::{User, UserPayload, UserQuery};
pub use pagination::{Page, Pagination};
pub use store::UserStore;
