use std::path::Path;

use crate::ui;

pub fn sh_quote(s: &str) -> String {
    let mut out = String::from("'");
    for ch in s.chars() {
        if ch == '\'' {
            out.push_str("'\\''");
        } else {
            out.push(ch);
        }
    }
    out.push('\'');
    out
}

/// Logs and returns false when `dir` can't be used as a project directory.
pub fn check_dir(log: &ui::Logger, dir: &Path) -> bool {
    if dir.is_dir() {
        return true;
    }
    log.errorf(&format!("not a directory: {}", dir.display()));
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sh_quote_wraps_and_escapes() {
        assert_eq!(sh_quote("react"), "'react'");
        assert_eq!(sh_quote("@types/node@^20"), "'@types/node@^20'");
        assert_eq!(sh_quote("it's"), "'it'\\''s'");
    }
}
