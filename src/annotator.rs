/// Prefixes each line of `content` with its 1-based line number so the model
/// can reference exact source lines. Line content is preserved byte-for-byte
/// after the prefix; no line-ending normalization beyond splitting.
pub fn annotate_lines(content: &str) -> String {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| format!("{:>4}: {}", i + 1, line))
        .collect::<Vec<_>>()
        .join("\n")
}
