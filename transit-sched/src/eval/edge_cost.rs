/// the evaluator's answer for one edge at one point in time. `Unavailable`
/// is not an error: it is the correct answer when no eligible scheduled
/// service covers the query, and upstream search treats it as infinite cost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EdgeCost {
    /// minimum wait-plus-ride cost, in minutes
    Minutes(f64),
    Unavailable,
}

impl EdgeCost {
    pub fn as_minutes(&self) -> Option<f64> {
        match self {
            EdgeCost::Minutes(minutes) => Some(*minutes),
            EdgeCost::Unavailable => None,
        }
    }
}
