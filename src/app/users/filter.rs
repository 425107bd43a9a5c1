//! 用户列表过滤
//!
//! 过滤条件采用"能解析就用，不能解析就忽略"的规则：空字符串或非数字的
//! `age_min` / `age_max` 不会报错，只是不参与过滤。

use super::model::User;
use crate::utils::parse_leading_int;

/// 解析后的过滤条件
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFilter {
    pub name: Option<String>,
    pub age_min: Option<i64>,
    pub age_max: Option<i64>,
}

impl UserFilter {
    pub fn from_params(
        name: Option<&str>,
        age_min: Option<&str>,
        age_max: Option<&str>,
    ) -> Self {
        Self {
            name: name
                .filter(|name| !name.is_empty())
                .map(|name| name.to_lowercase()),
            age_min: age_min.and_then(parse_leading_int),
            age_max: age_max.and_then(parse_leading_int),
        }
    }

    pub fn matches(&self, user: &User) -> bool {
        if let Some(name) = &self.name {
            if !user.name.to_lowercase().contains(name.as_str()) {
                return false;
            }
        }

        let age = user.age_value();
        if let Some(min) = self.age_min {
            if age < min as f64 {
                return false;
            }
        }
        if let Some(max) = self.age_max {
            if age > max as f64 {
                return false;
            }
        }

        true
    }
}

/// 按条件过滤，保持原有顺序
pub fn filter_users<'a>(users: &'a [User], filter: &UserFilter) -> Vec<&'a User> {
    users.iter().filter(|user| filter.matches(user)).collect()
}
