use anyhow::Result;
use serde::Serialize;
use std::path::Path;

use crate::config;
use crate::pm::{self, Detection, DirProbe, PackageManager};
use crate::ui;
use crate::util::check_dir;

#[derive(Debug, Serialize)]
struct DetectOutput<'a> {
    index: usize,
    name: &'a str,
    add: &'a str,
    add_command: String,
    lockfile: Option<&'a str>,
}

/// Runs detection against `dir`. The fallback is only resolved when no lockfile matched.
pub(crate) fn detect_in(
    log: &ui::Logger,
    dir: &Path,
    fallback: Option<PackageManager>,
) -> Result<Detection> {
    let probe = DirProbe::new(dir);
    if let Some(d) = pm::detect_lockfile(&probe) {
        if let Some(lockfile) = d.lockfile {
            log.debugf(&format!("found {lockfile}: {}", d.manager));
        }
        return Ok(d);
    }

    if !pm::has_manifest(dir) {
        log.infof(&format!(
            "no {} in {}; is this a JavaScript project?",
            pm::MANIFEST,
            dir.display()
        ));
    }
    let fallback = config::resolve_fallback(dir, fallback)?;
    log.debugf(&format!("no lockfile found; using fallback {fallback}"));
    Ok(pm::detect(&probe, fallback))
}

pub fn cmd_detect(
    log: &ui::Logger,
    dir: &Path,
    fallback: Option<PackageManager>,
    print_index: bool,
    json: bool,
) -> Result<i32> {
    if !check_dir(log, dir) {
        return Ok(2);
    }

    let d = detect_in(log, dir, fallback)?;

    if json {
        let e = d.manager.entry();
        let out = DetectOutput {
            index: d.index(),
            name: e.name,
            add: e.add,
            add_command: d.manager.add_command(),
            lockfile: d.lockfile,
        };
        println!("{}", serde_json::to_string(&out)?);
    } else if print_index {
        println!("{}", d.index());
    } else {
        println!("{}", d.manager);
    }
    Ok(0)
}
