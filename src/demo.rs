//! Guided walkthroughs of counter behaviour, printed by `counterkit demo`.

use std::fmt;

use tracing::instrument;

use crate::counter::{BoundedCounter, CounterConfig};
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub label: String,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub steps: Vec<Step>,
}

impl Section {
    fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            steps: Vec::new(),
        }
    }

    fn record(&mut self, label: &str, value: i64) {
        self.steps.push(Step {
            label: label.to_string(),
            value,
        });
    }

    pub fn values(&self) -> Vec<i64> {
        self.steps.iter().map(|step| step.value).collect()
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.title)?;
        for step in &self.steps {
            writeln!(f, "  {:<28} {}", step.label, step.value)?;
        }
        Ok(())
    }
}

#[instrument(name = "run_demo", level = "info")]
pub fn run_all() -> Result<Vec<Section>> {
    let mut first = BoundedCounter::default();
    Ok(vec![
        plain_counter(&mut first),
        independent_counters(&first),
        stepped_counter()?,
        bounded_counter()?,
    ])
}

fn plain_counter(counter: &mut BoundedCounter) -> Section {
    let mut section = Section::new("1. Plain counter");
    section.record("initial value", counter.value());
    section.record("increment", counter.increment(None));
    section.record("increment", counter.increment(None));
    section.record("decrement", counter.decrement(None));
    section.record("current value", counter.value());
    section.record("reset", counter.reset());
    section
}

fn independent_counters(first: &BoundedCounter) -> Section {
    let mut section = Section::new("2. Independent counters");
    let mut second = BoundedCounter::default();
    let mut third = BoundedCounter::default();

    second.increment(None);
    second.increment(None);
    third.increment(None);

    section.record("counter 2", second.value());
    section.record("counter 3", third.value());
    section.record("counter 1 (after reset)", first.value());
    section
}

fn stepped_counter() -> Result<Section> {
    let mut section = Section::new("3. Stepped counter");
    let config = CounterConfig::default().with_initial_value(10).with_step(5);
    let mut counter = BoundedCounter::new(config)?;

    section.record("initial value", counter.value());
    section.record("increment (step 5)", counter.increment(None));
    section.record("increment by 3", counter.increment(Some(3)));
    section.record("decrement (step 5)", counter.decrement(None));
    section.record("set step", counter.set_step(2));
    section.record("increment (step 2)", counter.increment(None));
    Ok(section)
}

fn bounded_counter() -> Result<Section> {
    let mut section = Section::new("4. Bounded counter [0, 10]");
    let config = CounterConfig::default()
        .with_initial_value(0)
        .with_step(1)
        .with_bounds(0, 10);
    let mut counter = BoundedCounter::new(config)?;

    section.record("initial value", counter.value());
    section.record("set 8", counter.set(8));
    section.record("increment", counter.increment(None));
    section.record("increment by 5 (over max)", counter.increment(Some(5)));
    section.record("decrement by 15 (under min)", counter.decrement(Some(15)));
    Ok(section)
}
