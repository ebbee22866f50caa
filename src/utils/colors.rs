/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const WHITE: &str = "\x1b[37m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Color for a complaint status badge.
///
/// Statuses are mutated by an administrative surface outside this client,
/// so the mapping must stay total: any unrecognized string falls back to
/// grey instead of failing.
pub fn status_color(status: &str) -> &'static str {
    match status {
        "Pending" => YELLOW,
        "In Progress" => BLUE,
        "Resolved" => GREEN,
        _ => GREY,
    }
}

/// Wrap a status string in its badge color.
pub fn colorize_status(status: &str) -> String {
    format!("{}{}{}", status_color(status), status, RESET)
}

/// Category badges are informational, one accent color fits all.
pub fn colorize_category(category: &str) -> String {
    format!("{CYAN}{category}{RESET}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_statuses_map_to_their_colors() {
        assert_eq!(status_color("Pending"), YELLOW);
        assert_eq!(status_color("In Progress"), BLUE);
        assert_eq!(status_color("Resolved"), GREEN);
    }

    #[test]
    fn unknown_statuses_fall_back_to_grey() {
        assert_eq!(status_color(""), GREY);
        assert_eq!(status_color("Escalated"), GREY);
        assert_eq!(status_color("pending"), GREY);
        assert_eq!(status_color("RESOLVED"), GREY);
    }
}
