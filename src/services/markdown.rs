/// Turns every non-empty line into a markdown bullet.
pub fn format_as_bullets(text: &str) -> String {
    text.lines()
        .filter(|line| !line.is_empty())
        .map(|line| format!("* {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
