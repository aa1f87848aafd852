/// A raw subscore divided at its subscale's reflex ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitScore {
    /// Reflexive portion, capped at the ceiling.
    pub reflex: u8,
    /// Cognitively mediated portion, the remainder above the ceiling.
    pub cognitive: u8,
}

/// Split a raw subscore at the given reflex ceiling. Scores at or below the
/// ceiling are entirely reflexive; everything above it is cognitively
/// mediated.
pub fn split_score(raw: u8, ceiling: u8) -> SplitScore {
    SplitScore {
        reflex: raw.min(ceiling),
        cognitive: raw.saturating_sub(ceiling),
    }
}
