//! Keyword-to-recommendation lookup

/// Ordered (keyword, recommendation) table, evaluated top to bottom.
/// First keyword contained in the token wins.
pub const SOLUTIONS: &[(&str, &str)] = &[
    (
        "account",
        "Improve self-service support for account-related queries.",
    ),
    (
        "assist",
        "Enhance customer support training for better assistance.",
    ),
    ("data", "Provide better data backup or recovery guides."),
    (
        "issue",
        "Enhance troubleshooting documentation for frequently reported issues.",
    ),
    (
        "problem",
        "Improve problem resolution workflow to reduce response time.",
    ),
    (
        "product",
        "Offer detailed product guides and troubleshooting steps.",
    ),
    (
        "software",
        "Provide clear setup and troubleshooting guides for software products.",
    ),
];

/// Recommendation for tokens no keyword matches
pub const FALLBACK: &str = "General improvements in customer support process.";

/// Match a token against the solution table by substring containment
pub fn recommend(token: &str) -> &'static str {
    SOLUTIONS
        .iter()
        .find(|(keyword, _)| token.contains(keyword))
        .map(|(_, solution)| *solution)
        .unwrap_or(FALLBACK)
}

/// Pair each ranked token with its recommendation, preserving rank order
pub fn build_recommendations(ranked: &[(String, usize)]) -> Vec<(String, &'static str)> {
    ranked
        .iter()
        .map(|(token, _)| (token.clone(), recommend(token)))
        .collect()
}
