//! 用户数据校验
//!
//! 三个字段各自独立检查，错误会累积而不是遇到第一个就返回。

use serde_json::{Number, Value};

use super::model::{NewUser, UserPayload};

pub const NAME_ERROR: &str = "Name is required and must be a non-empty string";
pub const EMAIL_ERROR: &str = "Valid email is required";
pub const AGE_ERROR: &str = "Age is required and must be a positive number";

/// 校验候选记录，返回错误信息列表（为空表示通过）
pub fn validate(candidate: &UserPayload) -> Vec<String> {
    let mut errors = Vec::new();
    if valid_name(&candidate.name).is_none() {
        errors.push(NAME_ERROR.to_string());
    }
    if valid_email(&candidate.email).is_none() {
        errors.push(EMAIL_ERROR.to_string());
    }
    if valid_age(&candidate.age).is_none() {
        errors.push(AGE_ERROR.to_string());
    }
    errors
}

fn valid_name(value: &Option<Value>) -> Option<&str> {
    match value {
        Some(Value::String(name)) if !name.trim().is_empty() => Some(name.trim()),
        _ => None,
    }
}

fn valid_email(value: &Option<Value>) -> Option<&str> {
    match value {
        Some(Value::String(email)) if email.contains('@') => Some(email.trim()),
        _ => None,
    }
}

fn valid_age(value: &Option<Value>) -> Option<&Number> {
    match value {
        Some(Value::Number(age)) if age.as_f64().is_some_and(|age| age >= 0.0) => Some(age),
        _ => None,
    }
}

impl TryFrom<UserPayload> for NewUser {
    type Error = Vec<String>;

    /// 校验通过后构造带类型的新用户，名字和邮箱去掉首尾空白
    fn try_from(payload: UserPayload) -> Result<Self, Self::Error> {
        match (
            valid_name(&payload.name),
            valid_email(&payload.email),
            valid_age(&payload.age),
        ) {
            (Some(name), Some(email), Some(age)) => Ok(NewUser {
                name: name.to_string(),
                email: email.to_string(),
                age: age.clone(),
            }),
            _ => Err(validate(&payload)),
        }
    }
}
