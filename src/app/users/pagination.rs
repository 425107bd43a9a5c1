//! 分页

use serde::Serialize;

use crate::utils::parse_leading_int;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;

/// 分页元数据
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub total_pages: usize,
}

/// 一页数据加上分页信息
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}

/// 解析分页参数，无法解析或为 0 时回退到默认值
///
/// 负数原样返回，由调用方决定是否拒绝。
pub fn resolve_param(raw: Option<&str>, default: i64) -> i64 {
    match raw.and_then(parse_leading_int) {
        Some(0) | None => default,
        Some(value) => value,
    }
}

/// 取出 `[(page-1)*limit, page*limit)` 窗口，越界时得到空页
///
/// `page` 与 `limit` 必须至少为 1。
pub fn paginate<T: Clone>(items: &[T], page: usize, limit: usize) -> Page<T> {
    let total = items.len();
    let start = page.saturating_sub(1).saturating_mul(limit).min(total);
    let end = page.saturating_mul(limit).min(total);

    Page {
        data: items[start..end].to_vec(),
        pagination: Pagination {
            total,
            page,
            limit,
            total_pages: total.div_ceil(limit),
        },
    }
}
