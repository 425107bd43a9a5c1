//! 用户数据模型

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use serde_json::{Map, Number, Value};

/// 已存储的用户记录
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub age: Number,
    #[serde(serialize_with = "iso_millis")]
    pub created_at: DateTime<Utc>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "iso_millis_opt"
    )]
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn age_value(&self) -> f64 {
        self.age.as_f64().unwrap_or_default()
    }
}

/// 创建或更新请求体
///
/// 每个字段记录的是"是否出现"以及原始 JSON 值。缺失的字段为 `None`，
/// 显式的 `null` 为 `Some(Value::Null)`，类型检查交给校验器完成。
/// 只能从 JSON 对象构造，数组等其他形状在提取阶段就被拒绝。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserPayload {
    pub name: Option<Value>,
    pub email: Option<Value>,
    pub age: Option<Value>,
}

impl From<Map<String, Value>> for UserPayload {
    fn from(mut body: Map<String, Value>) -> Self {
        Self {
            name: body.remove("name"),
            email: body.remove("email"),
            age: body.remove("age"),
        }
    }
}

impl UserPayload {
    /// 把部分字段合并到已有记录上，得到用于校验的完整候选
    pub fn merged_onto(&self, user: &User) -> UserPayload {
        UserPayload {
            name: Some(
                self.name
                    .clone()
                    .unwrap_or_else(|| Value::String(user.name.clone())),
            ),
            email: Some(
                self.email
                    .clone()
                    .unwrap_or_else(|| Value::String(user.email.clone())),
            ),
            age: Some(
                self.age
                    .clone()
                    .unwrap_or_else(|| Value::Number(user.age.clone())),
            ),
        }
    }
}

/// 通过校验后的新用户字段
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub age: Number,
}

/// 用户列表查询参数
///
/// 全部按字符串接收，解析失败的过滤条件会被忽略，分页参数回退到默认值。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserQuery {
    pub name: Option<String>,
    pub age_min: Option<String>,
    pub age_max: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl UserQuery {
    /// 从查询串键值对构造，同名参数只取第一次出现的值，未知参数忽略
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = UserQuery::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "name" => &mut query.name,
                "age_min" => &mut query.age_min,
                "age_max" => &mut query.age_max,
                "page" => &mut query.page,
                "limit" => &mut query.limit,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }
}

fn iso_millis<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}

fn iso_millis_opt<S>(ts: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match ts {
        Some(ts) => iso_millis(ts, serializer),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_distinguishes_missing_and_null() {
        let body = json!({ "name": null, "nickname": "x" });
        let payload = UserPayload::from(body.as_object().unwrap().clone());
        assert_eq!(payload.name, Some(Value::Null));
        assert_eq!(payload.email, None);
        assert_eq!(payload.age, None);
    }

    #[test]
    fn test_query_keeps_first_repeated_value() {
        let pairs = [("page", "1"), ("limit", "5"), ("page", "2"), ("sort", "name")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()));
        let query = UserQuery::from_pairs(pairs);
        assert_eq!(query.page.as_deref(), Some("1"));
        assert_eq!(query.limit.as_deref(), Some("5"));
        assert_eq!(query.name, None);
    }

    #[test]
    fn test_user_serializes_camel_case_without_updated_at() {
        let created = DateTime::parse_from_rfc3339("2024-01-02T03:04:05.678Z")
            .unwrap()
            .with_timezone(&Utc);
        let user = User {
            id: 1,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            age: Number::from(36),
            created_at: created,
            updated_at: None,
        };

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 1,
                "name": "Ada",
                "email": "ada@example.com",
                "age": 36,
                "createdAt": "2024-01-02T03:04:05.678Z"
            })
        );
    }
}
