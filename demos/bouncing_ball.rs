use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use frame_history::{HistoryConfig, HistoryIterator, HistoryStore, RingBuffer, summarize};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

const DT: f64 = 1.0 / 60.0;
const GRAVITY: f64 = -9.81;
const RESTITUTION: f64 = 0.8;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Frame {
    pub tick: u64,
    pub ts: DateTime<Utc>,
    pub height: f64,
    pub velocity: f64,
}

impl Frame {
    fn step(&self) -> Frame {
        let mut velocity = self.velocity + GRAVITY * DT;
        let mut height = self.height + velocity * DT;
        if height < 0.0 {
            height = -height;
            velocity = -velocity * RESTITUTION;
        }
        Frame {
            tick: self.tick + 1,
            ts: Utc::now(),
            height,
            velocity,
        }
    }
}

fn load_config() -> Result<HistoryConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            let file = std::fs::File::open(&path).with_context(|| format!("opening {path}"))?;
            serde_json::from_reader(file).with_context(|| format!("parsing {path}"))
        }
        None => Ok(HistoryConfig::default().with_capacity(120)),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = load_config()?;
    let mut history = RingBuffer::from_config(&config)?;
    let mut frame = Frame {
        tick: 0,
        ts: Utc::now(),
        height: 10.0,
        velocity: 0.0,
    };
    let mut bounce_at = None;
    for _ in 0..1000 {
        let next = frame.step();
        let index = history.store(next.clone())?;
        if next.velocity > 0.0 && frame.velocity <= 0.0 {
            bounce_at = Some(index);
        }
        frame = next;
    }
    println!(
        "kept {} of {} frames, logical range {}..={}",
        history.len(),
        frame.tick,
        history.start_index(),
        history.end_index().unwrap_or_default(),
    );

    if let Some(index) = bounce_at.filter(|i| *i >= history.start_index()) {
        // Rewind from the last bounce to the peak that preceded it.
        let mut it = history.iter_from(index)?;
        let mut peak = it.advance_previous()?;
        while it.has_previous() {
            let earlier = it.advance_previous()?;
            if earlier.height < peak.height {
                break;
            }
            peak = earlier;
        }
        println!(
            "last bounce at tick {}, preceded by a peak of {:.3} m at tick {}",
            history.get(index)?.tick,
            peak.height,
            peak.tick,
        );
    }

    let stats = summarize(&history, |f: &Frame| f.height)?;
    println!("{}", serde_json::to_string_pretty(&stats)?);
    if let Some(newest) = history.end_value() {
        println!("{}", serde_json::to_string(newest)?);
    }
    Ok(())
}
