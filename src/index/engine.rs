use super::error::{ConversionTable, IndexError};
use super::record::{AssessmentRecord, Subscale};
use super::split::split_score;
use super::tables;

// Fixed constants of the published scoring standard, not recomputed from
// inputs: 7 is the maximum attainable reflex sum across the four split
// subscales, 11 the maximum cognitive sum including Communication, 3 the
// Arousal maximum.
const REFLEX_DENOMINATOR: f64 = 7.0;
const COGNITIVE_DENOMINATOR: f64 = 11.0;
const AROUSAL_DENOMINATOR: f64 = 3.0;

/// Intermediate quantities behind a computed index, for display and
/// diagnosis.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexBreakdown {
    /// Aggregate reflex fraction, rounded to 2 decimals.
    pub reflex_fraction: f64,
    /// Aggregate cognitive fraction, rounded to 2 decimals.
    pub cognitive_fraction: f64,
    /// Matched row in the reflex conversion table.
    pub reflex_position: usize,
    /// Matched column in the cognitive conversion table.
    pub cognitive_position: usize,
    /// Matrix value at the matched (row, column).
    pub base_value: f64,
    /// Additive Arousal contribution, raw score / 3.
    pub arousal_term: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndexResult {
    pub index: f64,
    pub breakdown: IndexBreakdown,
}

/// Compute the CRS-R index for one assessment.
///
/// Pure and stateless: the same record always yields the same result. Raw
/// scores are range-checked first; a fraction with no conversion table entry
/// is an error, never a silently defaulted value.
pub fn compute_index(record: &AssessmentRecord) -> Result<IndexResult, IndexError> {
    record.validate()?;

    let mut reflex_sum: u32 = 0;
    let mut cognitive_sum: u32 = 0;
    for subscale in Subscale::ALL {
        if let Some(ceiling) = subscale.reflex_ceiling() {
            let split = split_score(record.get(subscale), ceiling);
            reflex_sum += u32::from(split.reflex);
            cognitive_sum += u32::from(split.cognitive);
        }
    }
    // Communication is not split: it counts entirely as cognitively mediated.
    cognitive_sum += u32::from(record.communication);

    let reflex_fraction = tables::round2(f64::from(reflex_sum) / REFLEX_DENOMINATOR);
    let cognitive_fraction = tables::round2(f64::from(cognitive_sum) / COGNITIVE_DENOMINATOR);

    let reflex_position =
        tables::reflex_position(reflex_fraction).ok_or(IndexError::LookupMismatch {
            table: ConversionTable::Reflex,
            fraction: reflex_fraction,
        })?;
    let cognitive_position =
        tables::cognitive_position(cognitive_fraction).ok_or(IndexError::LookupMismatch {
            table: ConversionTable::Cognitive,
            fraction: cognitive_fraction,
        })?;

    let base_value = tables::MS_MATRIX[reflex_position][cognitive_position];
    let arousal_term = f64::from(record.arousal) / AROUSAL_DENOMINATOR;

    Ok(IndexResult {
        index: base_value + arousal_term,
        breakdown: IndexBreakdown {
            reflex_fraction,
            cognitive_fraction,
            reflex_position,
            cognitive_position,
            base_value,
            arousal_term,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        auditory: u8,
        visual: u8,
        motor: u8,
        oromotor: u8,
        communication: u8,
        arousal: u8,
    ) -> AssessmentRecord {
        AssessmentRecord {
            auditory,
            visual,
            motor,
            oromotor,
            communication,
            arousal,
        }
    }

    #[test]
    fn test_all_zero_record_scores_zero() {
        let result = compute_index(&record(0, 0, 0, 0, 0, 0)).unwrap();
        assert_eq!(result.index, 0.0);
        assert_eq!(result.breakdown.reflex_position, 7);
        assert_eq!(result.breakdown.cognitive_position, 0);
        assert_eq!(result.breakdown.base_value, 0.0);
    }

    #[test]
    fn test_mid_range_record() {
        // Reflex: A2 + V1 + M2 + O1 = 6 -> 6/7 = 0.86 -> row 1.
        // Cognitive: A1 + V3 + M3 + O0 + C1 = 8 -> 8/11 = 0.73 -> column 8.
        // Index = 72.95 + 2/3.
        let result = compute_index(&record(3, 4, 5, 1, 1, 2)).unwrap();
        assert_eq!(result.breakdown.reflex_position, 1);
        assert_eq!(result.breakdown.cognitive_position, 8);
        assert_eq!(result.breakdown.base_value, 72.95);
        assert!((result.index - (72.95 + 2.0 / 3.0)).abs() < 1e-12);
    }

    #[test]
    fn test_full_cognitive_row() {
        // A4 V2 M6 O3 C2: reflex sum 2+1+2+2 = 7, cognitive sum 2+1+4+1+2 = 10.
        let result = compute_index(&record(4, 2, 6, 3, 2, 0)).unwrap();
        assert_eq!(result.breakdown.reflex_position, 0);
        assert_eq!(result.breakdown.cognitive_position, 10);
        assert_eq!(result.index, 90.66);
    }

    #[test]
    fn test_arousal_adds_exactly_one_third_per_point() {
        let base = compute_index(&record(3, 4, 5, 1, 1, 0)).unwrap();
        for arousal in 1..=3u8 {
            let result = compute_index(&record(3, 4, 5, 1, 1, arousal)).unwrap();
            let expected = base.index + f64::from(arousal) / 3.0;
            assert!((result.index - expected).abs() < 1e-12);
            assert_eq!(result.breakdown.base_value, base.breakdown.base_value);
        }
    }

    #[test]
    fn test_max_raw_record_is_a_lookup_mismatch() {
        // All subscales at their raw maxima: cognitive sum is 13, above the
        // table's 11-step range, so no column exists for the combination.
        let err = compute_index(&record(4, 5, 6, 3, 2, 3)).unwrap_err();
        assert_eq!(
            err,
            IndexError::LookupMismatch {
                table: ConversionTable::Cognitive,
                fraction: tables::round2(13.0 / 11.0),
            }
        );
    }

    #[test]
    fn test_out_of_range_rejected_before_lookup() {
        let err = compute_index(&record(5, 0, 0, 0, 0, 0)).unwrap_err();
        assert_eq!(
            err,
            IndexError::OutOfRange {
                subscale: Subscale::Auditory,
                value: 5,
                max: 4,
            }
        );
    }

    #[test]
    fn test_idempotent() {
        let r = record(2, 3, 4, 2, 1, 2);
        let first = compute_index(&r).unwrap();
        let second = compute_index(&r).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.index.to_bits(), second.index.to_bits());
    }

    #[test]
    fn test_whole_input_domain_partitions_on_cognitive_sum() {
        // Every in-range combination either computes a finite index or, when
        // its cognitive sum exceeds 11, fails the cognitive lookup. The
        // reflex lookup can never miss for in-range inputs.
        for auditory in 0..=4u8 {
            for visual in 0..=5u8 {
                for motor in 0..=6u8 {
                    for oromotor in 0..=3u8 {
                        for communication in 0..=2u8 {
                            let cognitive_sum = u32::from(auditory.saturating_sub(2))
                                + u32::from(visual.saturating_sub(1))
                                + u32::from(motor.saturating_sub(2))
                                + u32::from(oromotor.saturating_sub(2))
                                + u32::from(communication);
                            let r = record(auditory, visual, motor, oromotor, communication, 1);
                            match compute_index(&r) {
                                Ok(result) => {
                                    assert!(cognitive_sum <= 11);
                                    assert!(result.index.is_finite());
                                    assert!(result.index >= 0.0);
                                }
                                Err(IndexError::LookupMismatch { table, .. }) => {
                                    assert_eq!(table, ConversionTable::Cognitive);
                                    assert!(cognitive_sum > 11);
                                }
                                Err(other) => panic!("unexpected error: {other}"),
                            }
                        }
                    }
                }
            }
        }
    }
}
