//! Flatten math markup into plain text with Unicode symbols.
//!
//! Used for every displayed field, so the output must read well without a
//! rendering engine. Each rewrite only ever shortens the text (or swaps braces
//! for parentheses), and [`simplify`] repeats the pass until nothing changes.

use std::sync::OnceLock;

use regex::{Captures, Regex};

static TEXT_WRAPPER: OnceLock<Regex> = OnceLock::new();
static FRACTION: OnceLock<Regex> = OnceLock::new();
static SQUARE_ROOT: OnceLock<Regex> = OnceLock::new();
static SPACING: OnceLock<Regex> = OnceLock::new();
static COMMAND: OnceLock<Regex> = OnceLock::new();
static WHITESPACE: OnceLock<Regex> = OnceLock::new();

fn regex(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("markup pattern is valid"))
}

/// Plain-text rendering of `text`. Idempotent: `simplify(simplify(x)) == simplify(x)`.
pub fn simplify(text: &str) -> String {
    let mut current = simplify_pass(text);
    loop {
        let next = simplify_pass(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn simplify_pass(text: &str) -> String {
    let s = strip_delimiters(text);
    let s = unwrap_commands(&s);
    let s = collapse_scripts(&s);
    let s = remove_spacing(&s);
    let s = substitute_symbols(&s);
    collapse_whitespace(&s)
}

fn strip_delimiters(text: &str) -> String {
    text.replace('$', "")
        .replace("\\(", "")
        .replace("\\)", "")
        .replace("\\[", "")
        .replace("\\]", "")
}

/// `\text{..}`, `\frac{..}{..}` and `\sqrt{..}` become plain text. When a command
/// such as `\mu` sits right before the wrapper, an empty group keeps its name from
/// running into the unwrapped content; [`substitute_symbols`] drops it afterwards.
fn unwrap_commands(text: &str) -> String {
    let s = regex(
        &TEXT_WRAPPER,
        r"(\\[A-Za-z]+)?\\(?:text|textrm|mathrm|mathbf)\{([^{}]*)\}",
    )
    .replace_all(text, |caps: &Captures| {
        after_command(caps.get(1).map(|m| m.as_str()), &caps[2])
    });
    let s = regex(
        &FRACTION,
        r"(\\[A-Za-z]+)?\\[dt]?frac\{([^{}]*)\}\{([^{}]*)\}",
    )
    .replace_all(&s, |caps: &Captures| {
        let plain = format!("{}/{}", operand(&caps[2]), operand(&caps[3]));
        after_command(caps.get(1).map(|m| m.as_str()), &plain)
    });
    regex(&SQUARE_ROOT, r"(\\[A-Za-z]+)?\\sqrt\{([^{}]*)\}")
        .replace_all(&s, |caps: &Captures| {
            let plain = format!("√{}", operand(&caps[2]));
            after_command(caps.get(1).map(|m| m.as_str()), &plain)
        })
        .into_owned()
}

fn after_command(command: Option<&str>, plain: &str) -> String {
    match command {
        Some(cmd) => format!("{}{{}}{}", cmd, plain),
        None => plain.to_string(),
    }
}

/// Alphanumeric operands stand alone; anything else is parenthesized.
fn operand(s: &str) -> String {
    if !s.is_empty() && s.chars().all(char::is_alphanumeric) {
        s.to_string()
    } else {
        format!("({})", s)
    }
}

fn superscript(c: char) -> Option<char> {
    let mapped = match c {
        '0' => '⁰',
        '1' => '¹',
        '2' => '²',
        '3' => '³',
        '4' => '⁴',
        '5' => '⁵',
        '6' => '⁶',
        '7' => '⁷',
        '8' => '⁸',
        '9' => '⁹',
        '+' => '⁺',
        '-' | '−' => '⁻',
        '=' => '⁼',
        '(' => '⁽',
        ')' => '⁾',
        'n' => 'ⁿ',
        'i' => 'ⁱ',
        _ => return None,
    };
    Some(mapped)
}

fn subscript(c: char) -> Option<char> {
    let mapped = match c {
        '0' => '₀',
        '1' => '₁',
        '2' => '₂',
        '3' => '₃',
        '4' => '₄',
        '5' => '₅',
        '6' => '₆',
        '7' => '₇',
        '8' => '₈',
        '9' => '₉',
        '+' => '₊',
        '-' | '−' => '₋',
        '=' => '₌',
        '(' => '₍',
        ')' => '₎',
        _ => return None,
    };
    Some(mapped)
}

/// `^{..}`/`_{..}` lose their braces (or become Unicode when every character has a
/// script form), then single-character `^2`/`_0` become Unicode.
fn collapse_scripts(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        let marker = chars[i];
        let map: fn(char) -> Option<char> = match marker {
            '^' => superscript,
            '_' => subscript,
            _ => {
                out.push(marker);
                i += 1;
                continue;
            }
        };

        match chars.get(i + 1) {
            Some('{') => {
                let body = &chars[i + 2..];
                match body.iter().position(|&c| c == '{' || c == '}') {
                    Some(end) if body[end] == '}' => {
                        let group: String = body[..end].iter().collect();
                        out.push_str(&collapse_group(marker, &group, map));
                        i += end + 3;
                    }
                    _ => {
                        out.push(marker);
                        i += 1;
                    }
                }
            }
            Some(&next) if next != '(' && next != ')' => match map(next) {
                Some(mapped) => {
                    out.push(mapped);
                    i += 2;
                }
                None => {
                    out.push(marker);
                    i += 1;
                }
            },
            _ => {
                out.push(marker);
                i += 1;
            }
        }
    }
    out
}

fn collapse_group(marker: char, group: &str, map: fn(char) -> Option<char>) -> String {
    if let Some(mapped) = group.chars().map(map).collect::<Option<String>>() {
        return mapped;
    }
    let single_command = group
        .strip_prefix('\\')
        .is_some_and(|name| !name.is_empty() && name.chars().all(|c| c.is_ascii_alphabetic()));
    if group.chars().count() == 1 || single_command {
        format!("{}{}", marker, group)
    } else {
        format!("{}({})", marker, group)
    }
}

fn replace_commands(text: &str, lookup: fn(&str) -> Option<&'static str>) -> String {
    regex(&COMMAND, r"\\([A-Za-z]+)")
        .replace_all(text, |caps: &Captures| match lookup(&caps[1]) {
            Some(replacement) => replacement.to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

fn remove_spacing(text: &str) -> String {
    let s = regex(&SPACING, r"\\[,;:! ]").replace_all(text, " ");
    replace_commands(&s, |name| match name {
        "quad" | "qquad" => Some(" "),
        _ => None,
    })
}

fn symbol(name: &str) -> Option<&'static str> {
    let s = match name {
        "times" => "×",
        "mu" => "µ",
        "circ" | "degree" => "°",
        "pi" => "π",
        "Delta" => "Δ",
        "Omega" => "Ω",
        "alpha" => "α",
        "beta" => "β",
        "theta" => "θ",
        "lambda" => "λ",
        "cdot" => "·",
        _ => return None,
    };
    Some(s)
}

fn substitute_symbols(text: &str) -> String {
    let s = text.replace("^\\circ", "°");
    replace_commands(&s, symbol).replace("{}", "")
}

fn collapse_whitespace(text: &str) -> String {
    regex(&WHITESPACE, r"\s+")
        .replace_all(text, " ")
        .trim()
        .to_string()
}
