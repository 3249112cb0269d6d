//! Identifier case conversions between IDL names and client-facing keys.

/// Converts `snake_case` to `camelCase` (`greeting_account` → `greetingAccount`).
///
/// Only an underscore followed by a lowercase ASCII letter is folded, so
/// names that are already camelCase pass through unchanged.
pub fn snake_to_camel(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();
    while let Some(c) = chars.next() {
        match (c, chars.peek()) {
            ('_', Some(next)) if next.is_ascii_lowercase() => {
                result.push(next.to_ascii_uppercase());
                chars.next();
            }
            _ => result.push(c),
        }
    }
    result
}

/// Converts `camelCase` to `snake_case` (`joinSonicWorld` → `join_sonic_world`).
pub fn camel_to_snake(name: &str) -> String {
    let mut result = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

/// Human readable title for an instruction name (`join_sonic_world` → `Join Sonic World`).
pub fn to_title(name: &str) -> String {
    camel_to_snake(name)
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
