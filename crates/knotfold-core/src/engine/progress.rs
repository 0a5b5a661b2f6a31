/// A progress event emitted by the prediction pipeline.
///
/// Phases are the coarse pipeline stages; tasks are the countable units
/// within a phase (one step per window during the search).
#[derive(Debug, Clone)]
pub enum Progress {
    PhaseStart { name: &'static str },
    PhaseFinish,

    TaskStart { total_steps: u64 },
    TaskIncrement { steps: u64 },
    TaskFinish,

    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

/// Forwards progress events to an optional callback. The default reporter
/// discards everything, so library callers pay nothing for progress they do
/// not observe.
#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn default_reporter_ignores_events() {
        let reporter = ProgressReporter::new();
        reporter.report(Progress::PhaseStart { name: "Search" });
        reporter.report(Progress::PhaseFinish);
    }

    #[test]
    fn callback_receives_events_in_order() {
        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            events.lock().unwrap().push(format!("{:?}", event));
        }));

        reporter.report(Progress::TaskStart { total_steps: 2 });
        reporter.report(Progress::TaskIncrement { steps: 1 });
        reporter.report(Progress::TaskFinish);
        drop(reporter);

        let events = events.into_inner().unwrap();
        assert_eq!(events.len(), 3);
        assert!(events[0].contains("TaskStart"));
        assert!(events[2].contains("TaskFinish"));
    }
}
