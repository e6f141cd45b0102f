use crate::scoring::domain::{Level, PerTrait, TraitKey};

fn strengths_for(key: TraitKey) -> &'static [&'static str] {
    match key {
        TraitKey::Dominance => &[
            "Ability to make quick decisions",
            "Focus on results",
            "Determination to overcome obstacles",
        ],
        TraitKey::Influence => &[
            "Excellent communication",
            "Ability to inspire and motivate others",
            "Creativity and enthusiasm",
        ],
        TraitKey::Steadiness => &[
            "Patience and consistency",
            "Loyalty and reliability",
            "Ability to work well in a team",
        ],
        TraitKey::Conformity => &[
            "Attention to detail",
            "Critical analysis and precision",
            "Ability to follow standards and procedures",
        ],
    }
}

fn weaknesses_for(key: TraitKey) -> &'static [&'static str] {
    match key {
        TraitKey::Dominance => &[
            "May be perceived as aggressive or domineering",
            "Impatience with slow processes",
            "Tendency to overlook other people's feelings",
        ],
        TraitKey::Influence => &[
            "May be disorganized or scattered",
            "Tends to talk more than listen",
            "May make impulsive decisions",
        ],
        TraitKey::Steadiness => &[
            "Difficulty with rapid change",
            "May avoid necessary conflicts",
            "Resistance to innovation",
        ],
        TraitKey::Conformity => &[
            "May be overly critical or perfectionist",
            "Difficulty making quick decisions",
            "May get stuck in excessive analysis",
        ],
    }
}

fn recommendations_for(key: TraitKey) -> &'static [&'static str] {
    match key {
        TraitKey::Dominance => &[
            "Practice active listening to better understand the needs of others",
            "Develop patience for processes that take more time",
            "Consider the emotional impact of your decisions on team members",
        ],
        TraitKey::Influence => &[
            "Use organization and planning techniques",
            "Practice listening more and talking less in important meetings",
            "Build the discipline to finish tasks before starting new ones",
        ],
        TraitKey::Steadiness => &[
            "Work on your adaptability to change",
            "Practice assertiveness techniques",
            "Develop skills to handle conflict constructively",
        ],
        TraitKey::Conformity => &[
            "Work on making decisions more quickly",
            "Develop tolerance for ambiguity",
            "Practice delegating tasks instead of trying to control everything",
        ],
    }
}

/// Level at which a trait's weakness statements apply. D and I weaknesses show at the top of
/// the scale; S and C weaknesses show at the bottom.
pub fn weakness_trigger(key: TraitKey) -> Level {
    match key {
        TraitKey::Dominance | TraitKey::Influence => Level::High,
        TraitKey::Steadiness | TraitKey::Conformity => Level::Low,
    }
}

pub fn strengths(levels: &PerTrait<Level>) -> Vec<String> {
    collect(levels, |_| Level::High, strengths_for)
}

pub fn weaknesses(levels: &PerTrait<Level>) -> Vec<String> {
    collect(levels, weakness_trigger, weaknesses_for)
}

pub fn recommendations(primary: TraitKey) -> Vec<String> {
    recommendations_for(primary)
        .iter()
        .map(|line| line.to_string())
        .collect()
}

fn collect(
    levels: &PerTrait<Level>,
    trigger: impl Fn(TraitKey) -> Level,
    lines: impl Fn(TraitKey) -> &'static [&'static str],
) -> Vec<String> {
    levels
        .iter()
        .filter(|(key, level)| **level == trigger(*key))
        .flat_map(|(key, _)| lines(key).iter().map(|line| line.to_string()))
        .collect()
}
