use tubefinder_core::Quality;

/// A user action typed at the prompt. Row numbers are 1-based as displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    Search(String),
    SelectQuality { number: usize, quality: Quality },
    Download { number: usize },
    Help,
    Quit,
    Invalid(String),
}

pub fn parse_line(line: &str) -> Option<InputAction> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };
    // "/cats" is shorthand for "search cats".
    if let Some(query) = command.strip_prefix('/') {
        if !query.is_empty() {
            return Some(InputAction::Search(line[1..].trim().to_string()));
        }
    }

    let action = match command.to_ascii_lowercase().as_str() {
        "search" | "s" | "/" => InputAction::Search(rest.to_string()),
        "quality" | "q" => parse_quality(rest),
        "download" | "d" => match parse_number(rest) {
            Some(number) => InputAction::Download { number },
            None => InputAction::Invalid("usage: download <row>".to_string()),
        },
        "help" | "?" => InputAction::Help,
        "quit" | "exit" => InputAction::Quit,
        other => InputAction::Invalid(format!("unknown command {other:?}, type help")),
    };
    Some(action)
}

fn parse_quality(rest: &str) -> InputAction {
    let mut parts = rest.split_whitespace();
    let number = parts.next().and_then(parse_number);
    let quality = parts.next().and_then(Quality::from_label);
    match (number, quality, parts.next()) {
        (Some(number), Some(quality), None) => InputAction::SelectQuality { number, quality },
        _ => InputAction::Invalid("usage: quality <row> <720p|480p|360p>".to_string()),
    }
}

fn parse_number(raw: &str) -> Option<usize> {
    raw.trim().parse().ok().filter(|number| *number > 0)
}
