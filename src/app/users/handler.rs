//! 用户处理器
//!
//! 只负责把 HTTP 请求转换成 `UserStore` 调用，以及把结果转换成状态码和 JSON。

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde_json::{Map, Value};
use tracing::info;

use super::{
    model::{User, UserPayload, UserQuery},
    pagination::Page,
    store::UserStore,
};
use crate::core::{error::ApiResult, extract::JsonBody, ApiError};

#[derive(Clone, Default)]
pub struct AppState {
    store: Arc<Mutex<UserStore>>,
}

impl AppState {
    pub fn new(store: UserStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// 获取存储的独占访问
    ///
    /// 每个存储操作要么完整生效要么不改动数据，所以锁被污染后数据仍然一致，直接继续使用。
    pub fn store(&self) -> MutexGuard<'_, UserStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// 获取用户列表 (支持过滤和分页)
pub async fn list_users(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> ApiResult<Json<Page<User>>> {
    let Query(pairs) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let page = state.store().list(&UserQuery::from_pairs(pairs))?;
    Ok(Json(page))
}

/// 获取特定用户
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<User>> {
    let user = state.store().get(&id)?.clone();
    Ok(Json(user))
}

/// 创建新用户
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<Map<String, Value>>,
) -> ApiResult<(StatusCode, Json<User>)> {
    let user = state.store().create(UserPayload::from(body))?;
    info!(id = user.id, "✅ 用户创建成功");
    Ok((StatusCode::CREATED, Json(user)))
}

/// 更新用户
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<Map<String, Value>>,
) -> ApiResult<Json<User>> {
    let user = state.store().update(&id, UserPayload::from(body))?;
    info!(id = user.id, "用户更新成功");
    Ok(Json(user))
}

/// 删除用户
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.store().delete(&id)?;
    info!(id = %id, "用户删除成功");
    Ok(StatusCode::NO_CONTENT)
}
