/// Максимальное значение для остатков и количеств
pub const MAX_QUANTITY: i64 = 999_999_999;

/// Максимальная длина наименования в справочниках классификации
pub const MAX_NAME_LEN: usize = 50;

/// Правило длины для кодов-идентификаторов
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeRule {
    /// Код ровно из N символов
    Exact(usize),
    /// Код из 1..=N символов
    UpTo(usize),
}

impl CodeRule {
    pub fn check(self, field: &str, value: &str) -> Result<(), String> {
        if value.trim().is_empty() {
            return Err(format!("{} code must not be empty", field));
        }
        let len = value.chars().count();
        match self {
            CodeRule::Exact(n) if len != n => Err(format!(
                "{} code must be exactly {} characters, got '{}'",
                field, n, value
            )),
            CodeRule::UpTo(n) if len > n => Err(format!(
                "{} code must be at most {} characters, got '{}'",
                field, n, value
            )),
            _ => Ok(()),
        }
    }
}

pub fn check_max_len(field: &str, value: &str, max: usize) -> Result<(), String> {
    if value.chars().count() > max {
        return Err(format!("{} must be at most {} characters", field, max));
    }
    Ok(())
}

pub fn check_name(field: &str, value: &str, max: usize) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{} must not be empty", field));
    }
    check_max_len(field, value, max)
}

pub fn check_quantity(field: &str, value: i64) -> Result<(), String> {
    if !(0..=MAX_QUANTITY).contains(&value) {
        return Err(format!(
            "{} must be between 0 and {}",
            field, MAX_QUANTITY
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_rule() {
        assert!(CodeRule::Exact(2).check("class", "11").is_ok());
        assert!(CodeRule::Exact(2).check("class", "1").is_err());
        assert!(CodeRule::UpTo(6).check("article", "A00001").is_ok());
        assert!(CodeRule::UpTo(6).check("article", "A000001").is_err());
        assert!(CodeRule::UpTo(6).check("article", "  ").is_err());
    }

    #[test]
    fn test_check_quantity() {
        assert!(check_quantity("stock", 0).is_ok());
        assert!(check_quantity("stock", MAX_QUANTITY).is_ok());
        assert!(check_quantity("stock", -1).is_err());
        assert!(check_quantity("stock", MAX_QUANTITY + 1).is_err());
    }

    #[test]
    fn test_check_max_len_counts_chars() {
        assert!(check_max_len("marca", "Ñandú", 5).is_ok());
        assert!(check_max_len("marca", "Ñandú!", 5).is_err());
    }
}
