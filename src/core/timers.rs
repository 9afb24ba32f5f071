//! Wall-clock timing around a call, reported as `"{label}: {secs} seconds"`.
//!
//! A report is emitted only when the timed work succeeds: a panic unwinds past
//! the report, [`Timer::try_run`] and [`Timer::try_wrap`] stay silent on `Err`,
//! and a [`TimerGuard`] reports only through [`TimerGuard::finish`].

use std::future::Future;
use std::time::{Duration, Instant};

pub const DEFAULT_LABEL: &str = "Elapsed";
pub const DEFAULT_PRECISION: usize = 4;

/// Destination for the formatted timing line.
pub trait Report: Send + Sync {
    fn report(&self, line: &str);
}

/// Emits timing lines through `tracing` at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReport;

impl Report for TracingReport {
    fn report(&self, line: &str) {
        tracing::info!("⏱️ {}", line);
    }
}

impl<F> Report for F
where
    F: Fn(&str) + Send + Sync,
{
    fn report(&self, line: &str) {
        self(line)
    }
}

#[derive(Debug, Clone)]
pub struct Timer<S: Report = TracingReport> {
    label: String,
    precision: usize,
    sink: S,
}

impl Timer {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            precision: DEFAULT_PRECISION,
            sink: TracingReport,
        }
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new(DEFAULT_LABEL)
    }
}

impl<S: Report> Timer<S> {
    /// Number of decimals used for the seconds value.
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_sink<T: Report>(self, sink: T) -> Timer<T> {
        Timer {
            label: self.label,
            precision: self.precision,
            sink,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    pub fn format_report(&self, elapsed: Duration) -> String {
        format!(
            "{}: {:.*} seconds",
            self.label,
            self.precision,
            elapsed.as_secs_f64()
        )
    }

    fn emit(&self, elapsed: Duration) {
        self.sink.report(&self.format_report(elapsed));
    }

    /// Runs `f` and returns its result together with the elapsed time, without reporting.
    pub fn measure<R>(&self, f: impl FnOnce() -> R) -> (R, Duration) {
        let start = Instant::now();
        let result = f();
        (result, start.elapsed())
    }

    pub fn run<R>(&self, f: impl FnOnce() -> R) -> R {
        let (result, elapsed) = self.measure(f);
        self.emit(elapsed);
        result
    }

    /// Like [`run`](Self::run), but an `Err` is returned unchanged and not reported.
    pub fn try_run<T, E>(&self, f: impl FnOnce() -> Result<T, E>) -> Result<T, E> {
        let (result, elapsed) = self.measure(f);
        let value = result?;
        self.emit(elapsed);
        Ok(value)
    }

    pub async fn run_async<F: Future>(&self, fut: F) -> F::Output {
        let start = Instant::now();
        let output = fut.await;
        self.emit(start.elapsed());
        output
    }

    /// Wraps `f` into a function with the same argument and return types.
    ///
    /// Several arguments travel as one tuple; a zero-argument function takes `()`.
    pub fn wrap<A, R, F>(self, mut f: F) -> impl FnMut(A) -> R
    where
        F: FnMut(A) -> R,
    {
        move |args: A| self.run(|| f(args))
    }

    /// Wraps a fallible `f`; calls returning `Err` are passed through unreported.
    pub fn try_wrap<A, T, E, F>(self, mut f: F) -> impl FnMut(A) -> Result<T, E>
    where
        F: FnMut(A) -> Result<T, E>,
    {
        move |args: A| self.try_run(|| f(args))
    }

    /// Starts a scoped measurement, reported by [`TimerGuard::finish`].
    pub fn start(&self) -> TimerGuard<'_, S> {
        TimerGuard {
            timer: self,
            start: Instant::now(),
        }
    }
}

/// Scoped measurement. Only [`finish`](Self::finish) reports; a guard dropped
/// without it (early `?` return, panic) stays silent.
#[must_use = "call `finish` to report the measurement"]
pub struct TimerGuard<'a, S: Report = TracingReport> {
    timer: &'a Timer<S>,
    start: Instant,
}

impl<S: Report> TimerGuard<'_, S> {
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Ends the measurement, reports it and returns the elapsed time.
    pub fn finish(self) -> Duration {
        let elapsed = self.start.elapsed();
        self.timer.emit(elapsed);
        elapsed
    }
}

/// `timer("X", f)` returns a timed version of `f`.
pub fn timer<A, R, F>(label: &str, f: F) -> impl FnMut(A) -> R
where
    F: FnMut(A) -> R,
{
    Timer::new(label).wrap(f)
}

/// Fallible counterpart of [`timer`]: only `Ok` calls are reported.
pub fn try_timer<A, T, E, F>(label: &str, f: F) -> impl FnMut(A) -> Result<T, E>
where
    F: FnMut(A) -> Result<T, E>,
{
    Timer::new(label).try_wrap(f)
}
