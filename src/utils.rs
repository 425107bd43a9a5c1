//! 通用工具函数

/// 按"前导整数"规则解析字符串
///
/// 跳过开头空白，接受可选的正负号和随后的数字，数字之后的内容忽略。
/// 没有任何数字时返回 `None`，超出 `i64` 范围时饱和到边界值。
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut digits = rest.bytes().take_while(u8::is_ascii_digit).peekable();
    digits.peek()?;

    let magnitude = digits.fold(0_i64, |acc, d| {
        acc.saturating_mul(10).saturating_add(i64::from(d - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}
