use serde::{Deserialize, Serialize};

use super::dimensions::Dimension;
use super::engine::SubScores;

/// Qualitative findings derived from the sub-scores.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insights {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Fixed (strength, weakness, recommendation) text for a dimension.
struct InsightText {
    strength: &'static str,
    weakness: &'static str,
    recommendation: &'static str,
}

fn insight_text(dimension: Dimension) -> InsightText {
    match dimension {
        Dimension::Market => InsightText {
            strength: "Large and attractive market opportunity",
            weakness: "Limited market size potential",
            recommendation:
                "Consider expanding to adjacent markets to increase total addressable market",
        },
        Dimension::Team => InsightText {
            strength: "Strong and experienced team composition",
            weakness: "Team might need additional expertise or members",
            recommendation: "Consider adding advisory board members or key hires in weak areas",
        },
        Dimension::Financial => InsightText {
            strength: "Solid financial metrics and funding strategy",
            weakness: "Financial projections or funding structure needs improvement",
            recommendation: "Review funding requirements and equity offering structure",
        },
        Dimension::BusinessModel => InsightText {
            strength: "Strong business model with clear competitive advantages",
            weakness: "Business model needs further validation",
            recommendation: "Focus on developing and articulating unique value propositions",
        },
        Dimension::Traction => InsightText {
            strength: "Impressive traction and growth metrics",
            weakness: "Limited traction or growth indicators",
            recommendation: "Develop clear metrics and milestones for growth tracking",
        },
    }
}

/// Derive strengths, weaknesses and recommendations from the sub-scores.
///
/// Dimensions are visited in evaluation order (market, team, financial,
/// business model, traction). A score at or above `threshold` yields one
/// strength; below it yields one weakness and one recommendation. Each list
/// keeps the first `max_per_list` entries in that order.
pub fn generate_insights(scores: &SubScores, threshold: f64, max_per_list: usize) -> Insights {
    let mut insights = Insights::default();

    for dimension in Dimension::ALL {
        let text = insight_text(dimension);
        if scores.get(dimension) >= threshold {
            insights.strengths.push(text.strength.to_string());
        } else {
            insights.weaknesses.push(text.weakness.to_string());
            insights.recommendations.push(text.recommendation.to_string());
        }
    }

    insights.strengths.truncate(max_per_list);
    insights.weaknesses.truncate(max_per_list);
    insights.recommendations.truncate(max_per_list);
    insights
}
