//! Wall-clock timing loop for the parse benchmark

use std::fmt;
use std::time::{Duration, Instant};

/// Min / average / max latency over a fixed number of runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    pub iterations: usize,
    pub min: Duration,
    pub average: Duration,
    pub max: Duration,
}

impl Measurement {
    /// Summarize a set of samples; `None` if there are none.
    pub fn from_samples(samples: &[Duration]) -> Option<Self> {
        let min = *samples.iter().min()?;
        let max = *samples.iter().max()?;
        let total: Duration = samples.iter().sum();
        Some(Self {
            iterations: samples.len(),
            min,
            average: total / samples.len() as u32,
            max,
        })
    }
}

fn as_millis(d: Duration) -> f64 {
    d.as_secs_f64() * 1e3
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "min: {:.6}ms", as_millis(self.min))?;
        writeln!(f, "average: {:.6}ms", as_millis(self.average))?;
        write!(f, "max: {:.6}ms", as_millis(self.max))
    }
}

/// Run `f` `iterations` times, timing each run including the drop of its output.
///
/// Stops at the first error. With zero iterations the result is `Ok(None)`.
pub fn measure<T, E, F>(iterations: usize, mut f: F) -> Result<Option<Measurement>, E>
where
    F: FnMut() -> Result<T, E>,
{
    let mut elapsed = Vec::with_capacity(iterations);
    for _ in 0..iterations {
        let start = Instant::now();
        f()?;
        elapsed.push(start.elapsed());
    }
    Ok(Measurement::from_samples(&elapsed))
}
