use super::ProficiencyBand;

#[derive(Debug, Clone, PartialEq)]
pub struct AdaptiveQuestion {
    pub question: String,
    pub difficulty: String,
    pub proficiency: ProficiencyBand,
    pub avg_score: f64,
}
