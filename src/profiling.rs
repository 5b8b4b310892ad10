//! Self-profiling of the tool's own runtime (the `--debug` flag).
//!
//! Wraps the reader and reporter from the outside; the core never sees it.

use std::time::{Duration, Instant};

/// Records how long each named phase of a run took, plus wall time.
#[derive(Debug)]
pub struct PhaseTimer {
    started: Instant,
    phases: Vec<(&'static str, Duration)>,
}

impl PhaseTimer {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            phases: Vec::new(),
        }
    }

    /// Run `f` and record its elapsed time under `name`.
    pub fn measure<F, R>(&mut self, name: &'static str, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        let start = Instant::now();
        let result = f();
        self.phases.push((name, start.elapsed()));
        result
    }

    /// Render the recorded phases as a small table, slowest first.
    pub fn render(&self) -> String {
        let mut phases = self.phases.clone();
        phases.sort_by(|a, b| b.1.cmp(&a.1));

        let mut out = String::new();
        out.push_str("\nSelf-profile\n");
        for (name, elapsed) in &phases {
            out.push_str(&format!("{:>10.3}ms  {}\n", ms(*elapsed), name));
        }
        out.push_str(&format!("{:>10.3}ms  wall time\n", ms(self.started.elapsed())));
        out
    }
}

impl Default for PhaseTimer {
    fn default() -> Self {
        Self::new()
    }
}

fn ms(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}
