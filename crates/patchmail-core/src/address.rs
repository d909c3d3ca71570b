/// Pulls the bare email address out of a free-form address line.
///
/// Understands `Display Name <user@host>`, quoted display names and bare
/// `user@host`, with any parenthesised comments such as `(maintainer:NET)`
/// removed first. Returns an empty string when no address can be found.
#[must_use]
pub fn extract_address(line: &str) -> String {
    let stripped = strip_comments(line);

    if let Some(address) = angle_address(&stripped) {
        return address;
    }

    bare_address(&stripped)
}

/// Replaces every comment outside quoted strings with a single space.
fn strip_comments(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut depth = 0usize;
    let mut in_quotes = false;
    let mut escaped = false;

    for c in line.chars() {
        if escaped {
            escaped = false;
            if depth == 0 {
                out.push(c);
            }
            continue;
        }

        match c {
            '\\' if in_quotes || depth > 0 => {
                escaped = true;
                if depth == 0 {
                    out.push(c);
                }
            }
            '"' if depth == 0 => {
                in_quotes = !in_quotes;
                out.push(c);
            }
            '(' if !in_quotes => {
                if depth == 0 {
                    out.push(' ');
                }
                depth += 1;
            }
            ')' if !in_quotes && depth > 0 => depth -= 1,
            _ if depth > 0 => {}
            _ => out.push(c),
        }
    }

    out
}

/// `Some` when the line carries an angle-bracket address. A `<` with no
/// closing `>` takes everything after it.
fn angle_address(line: &str) -> Option<String> {
    let open = find_unquoted(line, '<')?;
    let rest = &line[open + 1..];
    let inner = rest.find('>').map_or(rest, |close| &rest[..close]);

    Some(inner.trim().to_string())
}

/// Only the first entry of a comma-separated list is considered.
fn bare_address(line: &str) -> String {
    let unquoted = remove_quoted(line);
    let first = unquoted
        .split(',')
        .find(|entry| !entry.trim().is_empty())
        .unwrap_or_default();
    let tokens: Vec<&str> = first.split_whitespace().collect();

    match tokens.as_slice() {
        [single] => (*single).to_string(),
        many => {
            let mut candidates = many.iter().filter(|token| token.contains('@'));
            match (candidates.next(), candidates.next()) {
                (Some(address), None) => (*address).to_string(),
                _ => String::new(),
            }
        }
    }
}

fn find_unquoted(line: &str, needle: char) -> Option<usize> {
    let mut in_quotes = false;
    let mut escaped = false;

    for (idx, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' if in_quotes => escaped = true,
            '"' => in_quotes = !in_quotes,
            c if c == needle && !in_quotes => return Some(idx),
            _ => {}
        }
    }

    None
}

fn remove_quoted(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut in_quotes = false;
    let mut escaped = false;

    for c in line.chars() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' if in_quotes => escaped = true,
            '"' => {
                in_quotes = !in_quotes;
                out.push(' ');
            }
            _ if in_quotes => {}
            _ => out.push(c),
        }
    }

    out
}
