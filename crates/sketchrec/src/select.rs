//! Argmax over recognizer scores.

/// Index and score of the best strictly positive score.
///
/// A later score must be strictly greater to win, so ties go to the earlier
/// entry (registration order).
pub(crate) fn pick_best<I>(scores: I) -> Option<(usize, f64)>
where
    I: IntoIterator<Item = f64>,
{
    let mut best: Option<(usize, f64)> = None;
    let mut high = 0.0;
    for (i, s) in scores.into_iter().enumerate() {
        if s > high {
            high = s;
            best = Some((i, s));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::pick_best;

    #[test]
    fn ties_go_to_first() {
        assert_eq!(pick_best([0.2, 0.7, 0.7, 0.1]), Some((1, 0.7)));
    }

    #[test]
    fn nothing_positive() {
        assert_eq!(pick_best([0.0, 0.0]), None);
        assert_eq!(pick_best(Vec::<f64>::new()), None);
        assert_eq!(pick_best([f64::NAN, 0.0]), None);
    }
}
