//! Line-delimited JSON event log.
//!
//! One record per game event, written as it is drained from the core. A write
//! failure disables the log and is kept for the runner to report once the
//! terminal is restored; gameplay never stops because of logging.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::GameEvent;
use crate::types::WrapPolicy;

#[derive(Debug, Serialize)]
struct EventRecord<'a> {
    ts_ms: u64,
    episode: u32,
    event: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    level: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    wrap: Option<&'a str>,
}

impl<'a> EventRecord<'a> {
    fn new(episode: u32, event: &'a str) -> Self {
        Self {
            ts_ms: now_ms(),
            episode,
            event,
            score: None,
            level: None,
            seed: None,
            wrap: None,
        }
    }
}

pub struct EventLog<W: Write = BufWriter<File>> {
    out: Option<W>,
    error: Option<String>,
}

impl EventLog<BufWriter<File>> {
    /// Append to the file at `path`, creating it if needed.
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open event log {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }

    /// A log that records nothing.
    pub fn disabled() -> Self {
        Self {
            out: None,
            error: None,
        }
    }
}

impl<W: Write> EventLog<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Some(out),
            error: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.out.is_some()
    }

    /// First write error, if logging had to stop.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Record run parameters, so a logged game can be replayed.
    pub fn record_session(&mut self, seed: u64, wrap: WrapPolicy) {
        let record = EventRecord {
            seed: Some(seed),
            wrap: Some(wrap.as_str()),
            ..EventRecord::new(0, "session")
        };
        self.write(&record);
    }

    pub fn record(&mut self, episode: u32, event: &GameEvent) {
        let record = match *event {
            GameEvent::Started { episode_id } => EventRecord::new(episode_id, "started"),
            GameEvent::WrappedToStart => EventRecord::new(episode, "wrapped"),
            GameEvent::WrapCancelled => EventRecord::new(episode, "wrap_cancelled"),
            GameEvent::DifficultyRaised { level } => EventRecord {
                level: Some(level),
                ..EventRecord::new(episode, "difficulty")
            },
            GameEvent::GameOver {
                final_score,
                difficulty_level,
            } => EventRecord {
                score: Some(final_score),
                level: Some(difficulty_level),
                ..EventRecord::new(episode, "game_over")
            },
        };
        self.write(&record);
    }

    pub fn flush(&mut self) {
        if let Some(out) = self.out.as_mut() {
            if let Err(e) = out.flush() {
                self.fail(format!("flush failed: {}", e));
            }
        }
    }

    /// Give back the writer (flushed), if still enabled.
    pub fn into_inner(mut self) -> Option<W> {
        self.flush();
        self.out.take()
    }

    fn write(&mut self, record: &EventRecord<'_>) {
        let Some(out) = self.out.as_mut() else {
            return;
        };
        let result = serde_json::to_writer(&mut *out, record)
            .map_err(anyhow::Error::from)
            .and_then(|_| out.write_all(b"\n").map_err(anyhow::Error::from));
        if let Err(e) = result {
            self.fail(format!("write failed: {}", e));
        }
    }

    fn fail(&mut self, message: String) {
        self.out = None;
        if self.error.is_none() {
            self.error = Some(message);
        }
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn lines(log: EventLog<Vec<u8>>) -> Vec<serde_json::Value> {
        let bytes = log.into_inner().unwrap();
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_records_one_line_per_event() {
        let mut log = EventLog::new(Vec::new());
        log.record(1, &GameEvent::Started { episode_id: 1 });
        log.record(1, &GameEvent::DifficultyRaised { level: 2 });
        log.record(
            1,
            &GameEvent::GameOver {
                final_score: 57,
                difficulty_level: 2,
            },
        );

        let records = lines(log);
        assert_eq!(records.len(), 3);
        assert_eq!(records[0]["event"], "started");
        assert_eq!(records[1]["level"], 2);
        assert_eq!(records[2]["event"], "game_over");
        assert_eq!(records[2]["score"], 57);
        assert!(records[0].get("score").is_none());
    }

    #[test]
    fn test_session_record() {
        let mut log = EventLog::new(Vec::new());
        log.record_session(99, WrapPolicy::Unconditional);
        let records = lines(log);
        assert_eq!(records[0]["event"], "session");
        assert_eq!(records[0]["seed"], 99);
        assert_eq!(records[0]["wrap"], "always");
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_disables_log() {
        let mut log = EventLog::new(Broken);
        log.record(1, &GameEvent::WrappedToStart);
        assert!(!log.is_enabled());
        assert!(log.error().unwrap().contains("disk full"));

        // Later records are dropped silently.
        log.record(1, &GameEvent::WrapCancelled);
        assert!(log.error().is_some());
    }

    #[test]
    fn test_disabled_log_is_inert() {
        let mut log = EventLog::disabled();
        log.record(1, &GameEvent::WrappedToStart);
        assert!(!log.is_enabled());
        assert!(log.error().is_none());
    }
}
