use std::io::{self, Write};

#[derive(Clone, Copy, Debug, Default)]
pub struct Logger {
    pub verbose: bool,
}

impl Logger {
    pub fn new(verbose: bool) -> Self {
        Logger { verbose }
    }

    pub fn debugf(&self, msg: &str) {
        if self.verbose {
            let _ = writeln!(io::stderr(), "[pmdetect] {msg}");
        }
    }

    pub fn infof(&self, msg: &str) {
        let _ = writeln!(io::stderr(), "[pmdetect] {msg}");
    }

    pub fn errorf(&self, msg: &str) {
        let _ = writeln!(io::stderr(), "[pmdetect] ERROR: {msg}");
    }
}
