//! 字段校验规则
//!
//! 每条规则只检查一个标量值，失败时返回携带字段名的 [`ValidationError`]。

/// 字段校验失败
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// 字符串不能为空
pub fn must_not_empty(value: &str, field: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new(
            field,
            format!("{} is required, cannot be empty", field),
        ));
    }
    Ok(())
}

/// 整数不能为零，零值等同于未提供
pub fn not_zero(value: i32, field: &str) -> Result<(), ValidationError> {
    if value == 0 {
        return Err(ValidationError::new(
            field,
            format!("{} is required, cannot be empty", field),
        ));
    }
    Ok(())
}

/// 字符数必须在 [min, max] 之间
pub fn length_between(
    value: &str,
    field: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(ValidationError::new(
            field,
            format!("{} need {}-{} characters", field, min, max),
        ));
    }
    Ok(())
}

/// 数值必须在 [min, max] 之间
pub fn in_range(value: i64, field: &str, min: i64, max: i64) -> Result<(), ValidationError> {
    if value < min || value > max {
        return Err(ValidationError::new(
            field,
            format!("{} need {}-{}", field, min, max),
        ));
    }
    Ok(())
}
