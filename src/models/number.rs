/// Read the integer at the start of `input`.
///
/// Leading whitespace and a single `+`/`-` sign are accepted, then as many
/// ASCII digits as follow; anything after the digits is dropped, so `"12.5"`
/// reads as 12 and `"30min"` as 30. Returns `None` when no digit follows the
/// sign or the value does not fit in an `i64`.
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let rest = input.trim_start();
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }

    let value = rest[..digits].parse::<i64>().ok()?;
    Some(if negative { -value } else { value })
}
