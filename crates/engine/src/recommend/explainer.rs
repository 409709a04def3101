//! Generate human-readable explanations for scored items.

use super::Signal;

/// Generate a human-readable explanation from scoring signals.
pub fn generate_explanation(signals: &[Signal]) -> String {
    if signals.is_empty() {
        return "Suggested for you".to_string();
    }

    let mut parts = Vec::new();

    for signal in signals {
        let part = match signal {
            Signal::SkillMatch { skills } => {
                if skills.len() == 1 {
                    format!("Matches your skill: {}", skills[0])
                } else {
                    format!("Matches your skills: {}", skills.join(", "))
                }
            }
            Signal::GoalMatch { goals } => {
                if goals.len() == 1 {
                    format!("Fits your goal: {}", goals[0])
                } else {
                    format!("Fits your goals: {}", goals.join(", "))
                }
            }
            Signal::BackgroundMatch { background } => format!("Popular with {}s", background),
            Signal::EducationMatch { level } => format!("Suits {} education", level),
            Signal::CountryMatch { country } => format!("Offered in {}", country),
            Signal::LevelFit { level, distance } => {
                if *distance == 0 {
                    format!("Right at your level ({})", level)
                } else {
                    format!("Close to your level ({})", level)
                }
            }
            Signal::RecentInterest { topics } => {
                format!("Related to your recent activity: {}", topics.join(", "))
            }
            Signal::FreeMatch => "Free".to_string(),
            Signal::BeginnerFriendly => "Beginner friendly".to_string(),
            Signal::AdvancedDepth => "In-depth material".to_string(),
            Signal::BookForLevel => "A good read at your level".to_string(),
            Signal::Certificate => "Includes a certificate".to_string(),
        };
        parts.push(part);
    }

    parts.join("; ")
}
