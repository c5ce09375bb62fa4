use starpath_core::search::Algorithm;

/// Engine selection for `search`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmChoice {
    One(Algorithm),
    All,
}

impl AlgorithmChoice {
    /// Engines to run, in display order
    pub fn algorithms(self) -> Vec<Algorithm> {
        match self {
            AlgorithmChoice::One(algorithm) => vec![algorithm],
            AlgorithmChoice::All => Algorithm::ALL.to_vec(),
        }
    }
}

/// Parse an algorithm name or `all`
pub fn parse_algorithm_choice(s: &str) -> std::result::Result<AlgorithmChoice, String> {
    if s.eq_ignore_ascii_case("all") {
        return Ok(AlgorithmChoice::All);
    }
    s.parse::<Algorithm>()
        .map(AlgorithmChoice::One)
        .map_err(|e| e.to_string())
}
