/// Per-row average similarity to same-label peers and to other-label rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimilarityScores {
    pub in_sample: Vec<f64>,
    pub out_of_sample: Vec<f64>,
}

impl SimilarityScores {
    pub fn len(&self) -> usize {
        self.in_sample.len()
    }

    pub fn is_empty(&self) -> bool {
        self.in_sample.is_empty()
    }
}
