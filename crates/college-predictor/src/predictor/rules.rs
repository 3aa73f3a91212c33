use super::catalog::InternationalRecord;
use super::domain::{Probability, RuleFamily};

/// Outcome of checking one record: the probability tier plus the
/// informational margin reported alongside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct RuleOutcome {
    pub probability: Probability,
    pub margin: f64,
}

/// Applies a domestic rule to a single cutoff. `None` means the record is
/// out of reach.
pub(crate) fn domestic_outcome(rule: RuleFamily, score: f64, cutoff: f64) -> Option<RuleOutcome> {
    match rule {
        RuleFamily::Rank => {
            if score > cutoff {
                return None;
            }
            let probability = if score <= cutoff * 0.7 {
                Probability::High
            } else if score <= cutoff * 0.9 {
                Probability::Medium
            } else {
                Probability::Low
            };
            Some(RuleOutcome {
                probability,
                margin: (cutoff - score).max(0.0),
            })
        }
        RuleFamily::Percentile => {
            if score < cutoff {
                return None;
            }
            let probability = if score >= cutoff + 2.0 {
                Probability::High
            } else if score >= cutoff + 0.5 {
                Probability::Medium
            } else {
                Probability::Low
            };
            Some(RuleOutcome {
                probability,
                margin: (score - cutoff).max(0.0),
            })
        }
        RuleFamily::ExperienceWeighted | RuleFamily::GradeWeighted => None,
    }
}

/// Per-family slack applied to both thresholds, and the headroom needed on
/// each metric for a High tier.
struct InternationalBands {
    primary_floor: f64,
    secondary_floor: f64,
    primary_headroom: f64,
    secondary_headroom: f64,
}

const fn international_bands(rule: RuleFamily) -> Option<InternationalBands> {
    match rule {
        RuleFamily::ExperienceWeighted => Some(InternationalBands {
            primary_floor: 0.9,
            secondary_floor: 0.8,
            primary_headroom: 20.0,
            secondary_headroom: 1.0,
        }),
        RuleFamily::GradeWeighted => Some(InternationalBands {
            primary_floor: 0.95,
            secondary_floor: 0.9,
            primary_headroom: 10.0,
            secondary_headroom: 0.2,
        }),
        RuleFamily::Rank | RuleFamily::Percentile => None,
    }
}

/// Applies an international rule to a record's primary and secondary
/// thresholds.
pub(crate) fn international_outcome(
    rule: RuleFamily,
    primary: f64,
    secondary: f64,
    record: &InternationalRecord,
) -> Option<RuleOutcome> {
    let bands = international_bands(rule)?;
    let required_primary = record.primary_threshold;
    let required_secondary = record.secondary_threshold;

    let eligible = primary >= required_primary * bands.primary_floor
        && secondary >= required_secondary * bands.secondary_floor;
    if !eligible {
        return None;
    }

    let probability = if primary >= required_primary + bands.primary_headroom
        && secondary >= required_secondary + bands.secondary_headroom
    {
        Probability::High
    } else if primary >= required_primary && secondary >= required_secondary {
        Probability::Medium
    } else {
        Probability::Low
    };

    let margin = (relative_gain(primary, required_primary)
        + relative_gain(secondary, required_secondary))
        / 2.0;

    Some(RuleOutcome {
        probability,
        margin,
    })
}

/// Percentage by which `value` exceeds `threshold`; zero thresholds count as
/// no gain.
fn relative_gain(value: f64, threshold: f64) -> f64 {
    if threshold == 0.0 {
        return 0.0;
    }
    (value - threshold) / threshold * 100.0
}
