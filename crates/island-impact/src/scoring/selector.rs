use super::categories::CategoryScores;
use super::domain::Category;

/// Scores below this mark flag a category for improvement.
pub const IMPROVEMENT_THRESHOLD: u8 = 60;

/// Pick the categories that should receive recommendations.
///
/// Every category under the threshold is returned in fixed category order.
/// When nothing is under it, the single lowest category is returned instead,
/// the earliest one winning a tie.
pub fn areas_for_improvement(scores: &CategoryScores) -> Vec<Category> {
    let flagged: Vec<Category> = scores
        .iter()
        .filter(|(_, score)| *score < IMPROVEMENT_THRESHOLD)
        .map(|(category, _)| category)
        .collect();

    if !flagged.is_empty() {
        return flagged;
    }

    let mut lowest: Option<(Category, u8)> = None;
    for (category, score) in scores.iter() {
        match lowest {
            Some((_, current)) if score >= current => {}
            _ => lowest = Some((category, score)),
        }
    }

    lowest.map(|(category, _)| vec![category]).unwrap_or_default()
}
