//! Flat CSV audit trail: one row per (tick, object), buffered and
//! append-only. Any I/O failure is fatal to the run.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use lethe_core::errors::LetheResult;
use lethe_core::model::{Action, DecisionRecord};
use lethe_core::traits::IEvidenceSink;

const HEADER: &str = "time,dataId,sensitivity,trust,accessRate,legitRate,suspiciousRate,risk,anomalyScore,predictedRelevance,action,tier,anonymized,reasonCode";

/// Buffered CSV writer with an optional changed-only mode that suppresses a
/// row when the action repeats the object's previously logged action.
pub struct EvidenceLog {
    out: BufWriter<File>,
    changed_only: bool,
    last_action: Vec<Option<Action>>,
}

impl EvidenceLog {
    pub fn create(path: &Path, population: usize, changed_only: bool) -> LetheResult<Self> {
        let file = File::create(path)?;
        let mut log = Self {
            out: BufWriter::new(file),
            changed_only,
            last_action: vec![None; population],
        };
        writeln!(log.out, "{HEADER}")?;
        log.out.flush()?;
        Ok(log)
    }

    pub fn header() -> &'static str {
        HEADER
    }
}

impl IEvidenceSink for EvidenceLog {
    fn record(&mut self, row: &DecisionRecord) -> LetheResult<()> {
        if self.changed_only {
            if let Some(slot) = self.last_action.get_mut(row.object_id as usize) {
                if *slot == Some(row.action) {
                    return Ok(());
                }
                *slot = Some(row.action);
            }
        }

        writeln!(
            self.out,
            "{},{},{},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4},{},{},{},{}",
            row.time,
            row.object_id,
            row.sensitivity.as_str(),
            row.trust,
            row.access_rate,
            row.legit_rate,
            row.suspicious_rate,
            row.risk,
            row.anomaly_score,
            row.predicted_relevance,
            row.action.as_str(),
            row.tier.as_str(),
            row.anonymized,
            row.reason.as_str(),
        )?;
        Ok(())
    }

    fn flush(&mut self) -> LetheResult<()> {
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lethe_core::model::{ReasonCode, Sensitivity, Tier};

    fn row(time: i64, id: u32, action: Action) -> DecisionRecord {
        DecisionRecord {
            time,
            object_id: id,
            sensitivity: Sensitivity::Pii,
            trust: 0.654321,
            access_rate: 0.15,
            legit_rate: 0.1,
            suspicious_rate: 0.05,
            risk: 0.6,
            anomaly_score: 0.025,
            predicted_relevance: 0.42,
            action,
            tier: Tier::Hot,
            anonymized: false,
            reason: ReasonCode::MidZone,
        }
    }

    fn read(path: &Path) -> Vec<String> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(String::from)
            .collect()
    }

    #[test]
    fn writes_fixed_header_and_formatted_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audit.csv");
        {
            let mut log = EvidenceLog::create(&path, 4, false).unwrap();
            log.record(&row(7, 2, Action::Archive)).unwrap();
            log.flush().unwrap();
        }
        let lines = read(&path);
        assert_eq!(lines[0], EvidenceLog::header());
        assert_eq!(
            lines[1],
            "7,2,PII,0.6543,0.1500,0.1000,0.0500,0.6000,0.0250,0.4200,Archive,Hot,false,mid_zone"
        );
    }

    #[test]
    fn changed_only_suppresses_consecutive_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audit.csv");
        {
            let mut log = EvidenceLog::create(&path, 4, true).unwrap();
            log.record(&row(5, 0, Action::Retain)).unwrap();
            log.record(&row(6, 0, Action::Retain)).unwrap(); // suppressed
            log.record(&row(7, 0, Action::Archive)).unwrap();
            log.record(&row(8, 0, Action::Retain)).unwrap(); // action changed back: logged
            log.record(&row(6, 1, Action::Retain)).unwrap(); // other object: logged
            log.flush().unwrap();
        }
        let lines = read(&path);
        assert_eq!(lines.len(), 1 + 4);
    }

    #[test]
    fn full_mode_logs_every_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audit.csv");
        {
            let mut log = EvidenceLog::create(&path, 2, false).unwrap();
            for t in 0..5 {
                log.record(&row(t, 0, Action::Retain)).unwrap();
            }
            log.flush().unwrap();
        }
        assert_eq!(read(&path).len(), 6);
    }
}
