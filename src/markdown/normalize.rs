//! Whitespace normalization for raw summary text.

/// Blank-line limit used when no configuration overrides it.
pub const DEFAULT_MAX_CONSECUTIVE_NEWLINES: usize = 2;

/// Clean up raw markdown before rendering.
///
/// - Literal `\n` escape sequences (backslash followed by `n`) become newlines
/// - A whitespace run holding more than `max_consecutive_newlines` newlines
///   is collapsed: everything from its first to its last newline becomes
///   exactly `max_consecutive_newlines` newlines
/// - Leading and trailing whitespace is removed
///
/// `max_consecutive_newlines` is raised to 1 so paragraphs never merge.
pub fn normalize(raw: &str, max_consecutive_newlines: usize) -> String {
    let max_newlines = max_consecutive_newlines.max(1);
    let unescaped = raw.replace("\\n", "\n");

    let mut result = String::with_capacity(unescaped.len());
    let mut run = String::new();

    for c in unescaped.chars() {
        if c.is_whitespace() {
            run.push(c);
        } else {
            if !run.is_empty() {
                push_whitespace_run(&mut result, &run, max_newlines);
                run.clear();
            }
            result.push(c);
        }
    }
    if !run.is_empty() {
        push_whitespace_run(&mut result, &run, max_newlines);
    }

    result.trim().to_string()
}

fn push_whitespace_run(out: &mut String, run: &str, max_newlines: usize) {
    let newlines = run.matches('\n').count();
    if newlines <= max_newlines {
        out.push_str(run);
        return;
    }

    // Both exist: the run holds at least two newlines here
    let first = run.find('\n').unwrap_or(0);
    let last = run.rfind('\n').unwrap_or(run.len() - 1);
    out.push_str(&run[..first]);
    out.extend(std::iter::repeat('\n').take(max_newlines));
    out.push_str(&run[last + 1..]);
}
