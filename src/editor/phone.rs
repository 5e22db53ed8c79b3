//! Phone mask `+7 (XXX) XXX-XXXX`.

/// Maximum number of digits in a full number, country code included.
const MAX_DIGITS: usize = 11;

/// Reformat raw input into the progressive phone mask.
///
/// Non-digits are dropped, the country code is normalized to `7` (a leading
/// `8` is replaced, anything else gets `7` prepended) and the result is
/// truncated to 11 digits. Groups appear as digits accumulate:
/// `+7`, `+7 (9)`, `+7 (999)`, `+7 (999) 1`, `+7 (999) 123-4567`.
pub fn format_phone(raw: &str) -> String {
    let mut digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return String::new();
    }

    if digits.starts_with('8') {
        digits.replace_range(..1, "7");
    } else if !digits.starts_with('7') {
        digits.insert(0, '7');
    }
    digits.truncate(MAX_DIGITS);

    let len = digits.len();
    let mut formatted = String::with_capacity(18);
    formatted.push('+');
    formatted.push_str(&digits[..1]);
    if len > 1 {
        formatted.push_str(" (");
        formatted.push_str(&digits[1..len.min(4)]);
        formatted.push(')');
    }
    if len > 4 {
        formatted.push(' ');
        formatted.push_str(&digits[4..len.min(7)]);
    }
    if len > 7 {
        formatted.push('-');
        formatted.push_str(&digits[7..len]);
    }
    formatted
}

/// Backspace inside a masked value.
///
/// `cursor` is a character offset. When the character just before it is mask
/// punctuation, the nearest preceding digit is removed instead and the value is
/// re-masked; with no digit before the cursor the value stays as it is.
/// Returns `None` when the ordinary backspace should apply.
pub fn handle_backspace(value: &str, cursor: usize) -> Option<String> {
    let chars: Vec<char> = value.chars().collect();
    if cursor == 0 || cursor > chars.len() || chars[cursor - 1].is_ascii_digit() {
        return None;
    }

    let Some(remove_at) = chars[..cursor].iter().rposition(char::is_ascii_digit) else {
        return Some(value.to_string());
    };
    let remaining: String = chars
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != remove_at)
        .map(|(_, c)| c)
        .collect();
    Some(format_phone(&remaining))
}
