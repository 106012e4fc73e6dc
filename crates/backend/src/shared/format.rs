/// Разделитель триад в логах
const THOUSANDS_SEPARATOR: char = '.';

/// Форматирует число с разделителями тысяч (точками)
///
/// # Примеры
/// ```
/// use backend::shared::format::format_number;
/// assert_eq!(format_number(1234567), "1.234.567");
/// assert_eq!(format_number(999), "999");
/// ```
pub fn format_number(n: usize) -> String {
    let digits = n.to_string();
    let first = match digits.len() % 3 {
        0 => 3,
        r => r,
    };
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    result.push_str(&digits[..first.min(digits.len())]);
    for chunk in digits.as_bytes()[first.min(digits.len())..].chunks(3) {
        result.push(THOUSANDS_SEPARATOR);
        result.extend(chunk.iter().map(|&b| b as char));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(1000), "1.000");
        assert_eq!(format_number(12_345), "12.345");
        assert_eq!(format_number(999_999_999), "999.999.999");
    }
}
