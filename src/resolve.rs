//! Matching user-typed city names against the known cities.
//!
//! Similarity is a 0..=100 ratio derived from case-insensitive Levenshtein
//! distance. When the input is shorter than a candidate, the best window of
//! the candidate is also compared (weighted down slightly), so that typing
//! `boston` finds `Boston, MA`.

/// Scale applied to window matches so a full-name match of the same quality
/// wins.
const PARTIAL_WEIGHT: f64 = 0.9;

/// Default minimum similarity for a match to be reported.
pub const DEFAULT_MIN_SCORE: u8 = 50;

/// A known city and its similarity to the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub city: String,
    pub score: u8,
}

/// Resolves free text to one of a fixed set of city names.
///
/// # Examples
///
/// ```
/// use u_roadtrip::resolve::CityResolver;
///
/// let resolver = CityResolver::new(["Austin, TX", "Boston, MA", "Chicago, IL"]);
/// let m = resolver.best_match("bostn").unwrap();
/// assert_eq!(m.city, "Boston, MA");
/// assert!(resolver.best_match("").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct CityResolver {
    cities: Vec<String>,
    folded: Vec<Vec<char>>,
    min_score: u8,
}

impl CityResolver {
    /// Creates a resolver over the given names with [`DEFAULT_MIN_SCORE`].
    pub fn new<I, S>(cities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let cities: Vec<String> = cities.into_iter().map(Into::into).collect();
        let folded = cities.iter().map(|c| fold(c)).collect();
        Self {
            cities,
            folded,
            min_score: DEFAULT_MIN_SCORE,
        }
    }

    /// Sets the minimum similarity (0..=100) below which no match is reported.
    pub fn with_min_score(mut self, min_score: u8) -> Self {
        self.min_score = min_score.min(100);
        self
    }

    /// Returns the most similar known city, or `None` if the input is blank,
    /// there are no candidates, or the best score is below the threshold.
    ///
    /// A case-insensitive exact match always wins. Ties keep candidate order.
    pub fn best_match(&self, input: &str) -> Option<Match> {
        let query = fold(input.trim());
        if query.is_empty() {
            return None;
        }

        let mut best: Option<(usize, u8)> = None;
        for (i, candidate) in self.folded.iter().enumerate() {
            if *candidate == query {
                best = Some((i, 100));
                break;
            }
            let score = similarity(&query, candidate);
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((i, score));
            }
        }

        best.filter(|&(_, score)| score >= self.min_score)
            .map(|(i, score)| Match {
                city: self.cities[i].clone(),
                score,
            })
    }

    /// Known cities in the order supplied.
    pub fn cities(&self) -> &[String] {
        &self.cities
    }
}

fn fold(s: &str) -> Vec<char> {
    s.chars().flat_map(char::to_lowercase).collect()
}

fn similarity(query: &[char], candidate: &[char]) -> u8 {
    let full = ratio(query, candidate);
    if query.len() >= candidate.len() {
        return full;
    }
    let partial = candidate
        .windows(query.len())
        .map(|window| ratio(query, window))
        .max()
        .unwrap_or(0);
    let weighted = (f64::from(partial) * PARTIAL_WEIGHT).round() as u8;
    full.max(weighted)
}

fn ratio(a: &[char], b: &[char]) -> u8 {
    let longest = a.len().max(b.len());
    if longest == 0 {
        return 100;
    }
    let distance = levenshtein(a, b);
    (100.0 * (1.0 - distance as f64 / longest as f64)).round() as u8
}

fn levenshtein(a: &[char], b: &[char]) -> usize {
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}
