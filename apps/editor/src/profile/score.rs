//! Placeholder "ATS score".
//!
//! This is NOT an applicant-tracking-system compatibility analysis. The value is a
//! uniformly random integer in `[ATS_SCORE_MIN, ATS_SCORE_MAX]` and carries no
//! information about the document. Tests should only check its range.

use rand::Rng;

pub const ATS_SCORE_MIN: u8 = 60;
pub const ATS_SCORE_MAX: u8 = 100;

pub fn roll_placeholder_score<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    rng.gen_range(ATS_SCORE_MIN..=ATS_SCORE_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_score_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen_low = u8::MAX;
        let mut seen_high = 0;
        for _ in 0..5_000 {
            let v = roll_placeholder_score(&mut rng);
            assert!((ATS_SCORE_MIN..=ATS_SCORE_MAX).contains(&v));
            seen_low = seen_low.min(v);
            seen_high = seen_high.max(v);
        }
        // 5000 draws over 41 values: both ends are hit
        assert_eq!(seen_low, ATS_SCORE_MIN);
        assert_eq!(seen_high, ATS_SCORE_MAX);
    }
}
