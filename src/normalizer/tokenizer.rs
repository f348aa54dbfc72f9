/// Split a string into word tokens.
///
/// A new token starts at the separator (which is discarded), where a
/// lowercase letter meets an uppercase one, where letters meet digits in
/// either direction, and at the last capital of an uppercase run that is
/// followed by lowercase ("HTTPServer" -> "HTTP", "Server"). Characters
/// that are neither ASCII alphanumeric nor the separator are stripped
/// and end the current token.
pub fn tokenize(input: &str, separator: Option<char>) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut current = String::new();

    for (i, &ch) in chars.iter().enumerate() {
        if Some(ch) == separator || !ch.is_ascii_alphanumeric() {
            if !current.is_empty() {
                tokens.push(current.clone());
                current.clear();
            }
            continue;
        }

        if let Some(prev) = current.chars().next_back() {
            if starts_new_token(prev, ch, chars.get(i + 1).copied()) {
                tokens.push(current.clone());
                current.clear();
            }
        }

        current.push(ch);
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}

fn starts_new_token(prev: char, ch: char, next: Option<char>) -> bool {
    if prev.is_ascii_lowercase() && ch.is_ascii_uppercase() {
        return true;
    }
    if prev.is_ascii_alphabetic() && ch.is_ascii_digit() {
        return true;
    }
    if prev.is_ascii_digit() && ch.is_ascii_alphabetic() {
        return true;
    }
    // End of an uppercase run: the last capital belongs to the next word.
    prev.is_ascii_uppercase()
        && ch.is_ascii_uppercase()
        && next.map_or(false, |n| n.is_ascii_lowercase())
}
