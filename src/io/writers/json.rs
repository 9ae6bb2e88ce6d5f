use serde::Serialize;
use std::io::Write;

use crate::analytics::{FranchiseReport, RankedMovie};
use crate::comparison::ComparisonResult;
use crate::core::ScoreBreakdown;
use crate::io::output::{AnalysisReport, OutputWriter};

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_json<T: Serialize + ?Sized>(&mut self, value: &T) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_breakdown(&mut self, breakdown: &ScoreBreakdown) -> anyhow::Result<()> {
        self.write_json(breakdown)
    }

    fn write_comparison(&mut self, comparison: &ComparisonResult) -> anyhow::Result<()> {
        self.write_json(comparison)
    }

    fn write_ranking(&mut self, ranking: &[RankedMovie]) -> anyhow::Result<()> {
        self.write_json(ranking)
    }

    fn write_franchise(&mut self, report: &FranchiseReport) -> anyhow::Result<()> {
        self.write_json(report)
    }

    fn write_analysis(&mut self, _title: &str, report: &AnalysisReport) -> anyhow::Result<()> {
        self.write_json(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::{analyze_cast, RankedMovie};
    use crate::core::{Grade, MovieRecord};

    #[test]
    fn test_ranking_is_a_json_array() {
        let ranking = vec![RankedMovie {
            rank: 1,
            movie_id: 42,
            title: "Answer".into(),
            year: Some(1999),
            score: 77.5,
            grade: Grade::B,
            top_strength: None,
        }];
        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer).write_ranking(&ranking).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value[0]["movie_id"], 42);
        assert_eq!(value[0]["grade"], "B");
    }

    #[test]
    fn test_analysis_serializes_inner_record() {
        let report = AnalysisReport::Cast(analyze_cast(&MovieRecord::new(9, "Quiet")));
        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer)
            .write_analysis("Quiet", &report)
            .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["movie_title"], "Quiet");
        assert_eq!(value["power_level"], "limited");
    }
}
