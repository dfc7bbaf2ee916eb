use anyhow::Result;
use std::path::Path;

use crate::cmd::detect::detect_in;
use crate::pm::PackageManager;
use crate::ui;
use crate::util::{check_dir, sh_quote};

pub fn cmd_add(
    log: &ui::Logger,
    dir: &Path,
    fallback: Option<PackageManager>,
    packages: &[String],
) -> Result<i32> {
    let packages: Vec<&str> = packages
        .iter()
        .map(String::as_str)
        .filter(|s| !s.is_empty())
        .collect();
    if packages.is_empty() {
        log.errorf("usage: pmdetect add <package>...");
        return Ok(2);
    }
    if !check_dir(log, dir) {
        return Ok(2);
    }

    let d = detect_in(log, dir, fallback)?;

    let mut line = d.manager.add_command();
    for p in packages {
        line.push(' ');
        line.push_str(&sh_quote(p));
    }
    println!("{line}");
    Ok(0)
}
