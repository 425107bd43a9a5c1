//! 内存用户存储
//!
//! `UserStore` 独占用户列表和自增 id 计数器。所有操作都是同步的，
//! 要么完整生效，要么返回错误且不改动任何数据。

use chrono::Utc;
use tracing::debug;

use super::filter::{filter_users, UserFilter};
use super::model::{NewUser, User, UserPayload, UserQuery};
use super::pagination::{paginate, resolve_param, Page, DEFAULT_LIMIT, DEFAULT_PAGE};
use crate::core::error::{ApiError, ApiResult};
use crate::utils::parse_leading_int;

#[derive(Debug)]
pub struct UserStore {
    users: Vec<User>,
    next_id: u64,
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            next_id: 1,
        }
    }

    /// 清空数据并把计数器重置为 1，仅供测试使用
    pub fn reset(&mut self) {
        self.users.clear();
        self.next_id = 1;
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// 先过滤再分页
    pub fn list(&self, query: &UserQuery) -> ApiResult<Page<User>> {
        let page = resolve_param(query.page.as_deref(), DEFAULT_PAGE);
        let limit = resolve_param(query.limit.as_deref(), DEFAULT_LIMIT);
        if page < 1 || limit < 1 {
            return Err(ApiError::BadRequest(
                "Page and limit must be positive numbers".to_string(),
            ));
        }

        let filter = UserFilter::from_params(
            query.name.as_deref(),
            query.age_min.as_deref(),
            query.age_max.as_deref(),
        );
        let filtered = filter_users(&self.users, &filter);

        // page/limit 已确认为正数
        let window = paginate(&filtered, page as usize, limit as usize);
        Ok(Page {
            data: window.data.into_iter().cloned().collect(),
            pagination: window.pagination,
        })
    }

    pub fn get(&self, id: &str) -> ApiResult<&User> {
        let index = self.position(id).ok_or_else(ApiError::user_not_found)?;
        Ok(&self.users[index])
    }

    pub fn create(&mut self, payload: UserPayload) -> ApiResult<User> {
        let new_user = NewUser::try_from(payload).map_err(ApiError::Validation)?;

        let user = User {
            id: self.next_id,
            name: new_user.name,
            email: new_user.email,
            age: new_user.age,
            created_at: Utc::now(),
            updated_at: None,
        };
        self.next_id += 1;
        self.users.push(user.clone());

        debug!(id = user.id, "user created");
        Ok(user)
    }

    /// 部分更新：先把请求字段合并到副本上整体校验，通过后才写回
    pub fn update(&mut self, id: &str, patch: UserPayload) -> ApiResult<User> {
        let index = self.position(id).ok_or_else(ApiError::user_not_found)?;

        let merged = NewUser::try_from(patch.merged_onto(&self.users[index]))
            .map_err(ApiError::Validation)?;

        let user = &mut self.users[index];
        if patch.name.is_some() {
            user.name = merged.name;
        }
        if patch.email.is_some() {
            user.email = merged.email;
        }
        if patch.age.is_some() {
            user.age = merged.age;
        }
        user.updated_at = Some(Utc::now());

        debug!(id = user.id, "user updated");
        Ok(user.clone())
    }

    pub fn delete(&mut self, id: &str) -> ApiResult<()> {
        let index = self.position(id).ok_or_else(ApiError::user_not_found)?;
        let removed = self.users.remove(index);
        debug!(id = removed.id, "user deleted");
        Ok(())
    }

    /// 非数字 id 永远匹配不到
    fn position(&self, id: &str) -> Option<usize> {
        let id = parse_leading_int(id)?;
        self.users.iter().position(|user| user.id as i64 == id)
    }
}
