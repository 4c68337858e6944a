//! Run the detector over a synthetic seasonal stream and print the anomaly log
//!
//! ```text
//! RUST_LOG=anomaly_detector=debug cargo run -p anomaly-detector --example synthetic_stream
//! ```

use anomaly_core::{AnomalyKind, DetectionResult, DetectionSink};
use anomaly_detector::{AnomalyLog, DetectorConfig, LoggingSink, StreamDetector};
use anomaly_synth::{GeneratorConfig, SyntheticStream};
use tracing_subscriber::EnvFilter;

struct Tee<'a> {
    log: &'a mut AnomalyLog,
    logger: LoggingSink,
}

impl DetectionSink for Tee<'_> {
    fn handle_result(&mut self, result: &DetectionResult) {
        self.logger.handle_result(result);
        if self.log.is_interested(result) {
            self.log.handle_result(result);
        }
    }
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("=== Streaming Anomaly Detection ===\n");

    let generator = GeneratorConfig::default();
    let config = DetectorConfig::default();
    println!("  Generator: {generator:?}");
    println!("  Detector:  {}\n", config.to_json()?);

    let points: Vec<_> = SyntheticStream::new(generator, 42)?.points().collect();
    let mut detector = StreamDetector::new(config)?;
    let mut log = AnomalyLog::new();
    let summary = detector.process(
        points.iter().map(|p| p.sample),
        &mut Tee {
            log: &mut log,
            logger: LoggingSink::default(),
        },
    )?;

    println!("Anomalies:");
    for flag in log.flags() {
        println!("  {flag}");
    }

    let flagged = log.flagged_indices();
    let injected: Vec<u64> = points
        .iter()
        .filter(|p| p.injected_outlier)
        .map(|p| p.sample.index)
        .collect();
    let caught = injected.iter().filter(|i| flagged.contains(i)).count();

    println!("\nSummary: {summary}");
    println!(
        "  z-score flags: {}, EMA flags: {}",
        log.flags_of(AnomalyKind::ZScore).count(),
        log.flags_of(AnomalyKind::EmaDeviation).count()
    );
    println!("  injected spikes caught: {caught}/{}", injected.len());

    Ok(())
}
