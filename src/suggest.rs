//! "Did you mean" suggestions for unknown names.
//!
//! Candidates are ranked by normalized Levenshtein similarity against the
//! misspelled input. Ties keep the candidates' original order so suggestion
//! output is deterministic.

use strsim::normalized_levenshtein;

/// Minimum similarity for a candidate to be suggested at all.
const SIMILARITY_CUTOFF: f64 = 0.6;

/// Maximum number of suggestions reported for a single unknown name.
const MAX_SUGGESTIONS: usize = 5;

/// Returns the candidates similar enough to `input`, best match first.
pub fn suggestion_list<'a, I, S>(input: &str, candidates: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a S>,
    S: AsRef<str> + 'a,
{
    let mut scored: Vec<(f64, usize, &str)> = candidates
        .into_iter()
        .map(AsRef::as_ref)
        .enumerate()
        .filter_map(|(index, candidate)| {
            let score = normalized_levenshtein(input, candidate);
            (score >= SIMILARITY_CUTOFF).then_some((score, index, candidate))
        })
        .collect();

    // Highest score first; candidate order breaks ties.
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal).then(a.1.cmp(&b.1)));
    scored.truncate(MAX_SUGGESTIONS);
    scored.into_iter().map(|(_, _, candidate)| candidate.to_string()).collect()
}

/// Formats suggestions as a "Did you mean ...?" hint.
///
/// Returns the empty string when there is nothing to suggest, so callers can
/// unconditionally append the result to a diagnostic message.
pub fn did_you_mean(suggestions: &[String]) -> String {
    match suggestions {
        [] => String::new(),
        [only] => format!("Did you mean {only}?"),
        [init @ .., last] => {
            format!("Did you mean {} or {last}?", init.join(", "))
        }
    }
}
