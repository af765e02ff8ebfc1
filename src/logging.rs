//! Pipeline console logging.
//!
//! All messages go to standard output carrying the pipeline's `##`-prefixed
//! markers. A *tracked* warning or error uses the `##vso[task.logissue …]`
//! marker, which makes the pipeline record the line as a build issue;
//! untracked messages use the plain `##[warning]`/`##[error]` markers and
//! only affect the console.

use owo_colors::OwoColorize;

/// Print a yellow warning. `track` raises it as a pipeline issue.
pub fn warning(message: &str, track: bool) {
    let marker = if track {
        "##vso[task.logissue type=warning]"
    } else {
        "##[warning]"
    };
    println!("{marker}{}", format!("Warning: {message}").yellow());
}

/// Print a red error. `track` raises it as a pipeline issue.
pub fn error(message: &str, track: bool) {
    let marker = if track {
        "##vso[task.logissue type=error]"
    } else {
        "##[error]"
    };
    println!("{marker}{}", format!("Error: {message}").red());
}

/// Print a green success line.
pub fn success(message: &str) {
    println!("##[debug]{}", message.green());
}

/// Print a magenta debug line.
pub fn debug(message: &str) {
    println!("##[debug]{}", message.magenta());
}
