/// Side channel for long-running import stages. The parser reports raw
/// percentages and never writes to the console itself; implementations decide
/// how (or whether) to surface them.
pub trait ProgressReporter {
    fn report(&mut self, stage: &str, percent: f32);
}

/// Discards every report.
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn report(&mut self, _stage: &str, _percent: f32) {}
}

/// Prints a line per whole-percent change, e.g. `Loading cow.obj 42%`.
pub struct ConsoleProgress {
    previous: f32,
}

impl ConsoleProgress {
    pub fn new() -> Self {
        ConsoleProgress { previous: -1.0 }
    }
}

impl ProgressReporter for ConsoleProgress {
    fn report(&mut self, stage: &str, percent: f32) {
        let rounded = percent.round();
        if rounded != self.previous {
            println!("{} {}%", stage, rounded);
            self.previous = rounded;
        }
    }
}
