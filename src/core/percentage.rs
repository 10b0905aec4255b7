use crate::core::criteria::MAX_POSSIBLE_SCORE;

/// Rescale a raw score to a 0-100 display percentage
///
/// Purely presentational: ranking always uses the raw score. Clamped at
/// 100 so a score above the analytic maximum can never overflow the scale.
pub fn match_percentage(score: u32) -> u8 {
    let percent = (score as f64 / MAX_POSSIBLE_SCORE as f64 * 100.0).round();
    percent.min(100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_score_is_zero_percent() {
        assert_eq!(match_percentage(0), 0);
    }

    #[test]
    fn test_max_score_is_full_match() {
        assert_eq!(match_percentage(MAX_POSSIBLE_SCORE), 100);
    }

    #[test]
    fn test_rounding() {
        // 90 / 125 = 72%
        assert_eq!(match_percentage(90), 72);
        // 45 / 125 = 36%
        assert_eq!(match_percentage(45), 36);
        // 70 / 125 = 56%
        assert_eq!(match_percentage(70), 56);
    }

    #[test]
    fn test_clamped_above_maximum() {
        assert_eq!(match_percentage(MAX_POSSIBLE_SCORE + 50), 100);
    }

    #[test]
    fn test_monotonically_non_decreasing() {
        let mut previous = 0;
        for score in 0..=MAX_POSSIBLE_SCORE {
            let percent = match_percentage(score);
            assert!(percent >= previous, "percentage decreased at score {}", score);
            previous = percent;
        }
    }
}
