//! Pull-based adapter over a sample source

use crate::detector::StreamDetector;
use anomaly_core::{DetectionResult, Result, Sample};

/// Iterator yielding one detection result per sample
///
/// Created by [`StreamDetector::detect_iter`]. A rejected sample yields an
/// `Err` and iteration may continue with the next sample; the detector is
/// unchanged by the rejected one.
pub struct Detections<'a, I> {
    detector: &'a mut StreamDetector,
    samples: I,
}

impl<'a, I> Detections<'a, I>
where
    I: Iterator<Item = Sample>,
{
    pub(crate) fn new(detector: &'a mut StreamDetector, samples: I) -> Self {
        Self { detector, samples }
    }

    /// Only the results where at least one rule fired, skipping rejected samples
    pub fn anomalies(self) -> impl Iterator<Item = DetectionResult> + 'a
    where
        I: 'a,
    {
        self.filter_map(|result| result.ok().filter(DetectionResult::is_anomaly))
    }
}

impl<I> Iterator for Detections<'_, I>
where
    I: Iterator<Item = Sample>,
{
    type Item = Result<DetectionResult>;

    fn next(&mut self) -> Option<Self::Item> {
        let sample = self.samples.next()?;
        Some(self.detector.ingest(sample))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.samples.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use crate::{DetectorConfig, StreamDetector};
    use anomaly_core::Sample;

    fn samples(values: &[f64]) -> Vec<Sample> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| Sample::new(i as u64, v))
            .collect()
    }

    #[test]
    fn test_one_result_per_sample_in_order() {
        let mut det = StreamDetector::new(DetectorConfig::new(0.5, 3.0, 3).unwrap()).unwrap();
        let results: Vec<_> = det
            .detect_iter(samples(&[1.0, 2.0, 3.0, 4.0]))
            .collect::<Result<_, _>>()
            .unwrap();

        let indices: Vec<u64> = results.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
        assert_eq!(det.samples_seen(), 4);
    }

    #[test]
    fn test_rejected_sample_does_not_stop_iteration() {
        let mut det = StreamDetector::new(DetectorConfig::default()).unwrap();
        let input = vec![
            Sample::new(0, 1.0),
            Sample::new(1, f64::NAN),
            Sample::new(2, 1.0),
        ];
        let outcomes: Vec<bool> = det.detect_iter(input).map(|r| r.is_ok()).collect();
        assert_eq!(outcomes, vec![true, false, true]);
    }

    #[test]
    fn test_anomalies_filter() {
        // window_size 1 makes every change an EMA deviation
        let mut det = StreamDetector::new(DetectorConfig::new(0.5, 3.0, 1).unwrap()).unwrap();
        let flagged: Vec<u64> = det
            .detect_iter(samples(&[5.0, 5.0, 6.0, 6.0]))
            .anomalies()
            .map(|r| r.index)
            .collect();
        // ema: 5, 5, 5.5, 5.75
        assert_eq!(flagged, vec![2, 3]);
    }
}
