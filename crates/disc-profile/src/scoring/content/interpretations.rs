//! Intensity-keyed interpretations of the primary and secondary traits.
//!
//! Each trait reading is chosen by how strongly the trait shows on the 1-25 scale. The general
//! secondary reading depends on the primary trait, the primary's intensity and the secondary trait
//! together. Only moderate primaries have pair-specific text; stronger primaries fall back to a
//! generic reading for their intensity.

use serde::Serialize;

use super::descriptions::describe;
use crate::scoring::domain::{ProfileResult, TraitKey};

/// Upper bound of the moderate band.
pub const MODERATE_CEILING: u8 = 8;
/// Upper bound of the significant band.
pub const SIGNIFICANT_CEILING: u8 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Moderate,
    Significant,
    High,
}

impl Intensity {
    pub fn for_score(score: u8) -> Self {
        match score {
            0..=MODERATE_CEILING => Intensity::Moderate,
            9..=SIGNIFICANT_CEILING => Intensity::Significant,
            _ => Intensity::High,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Intensity::Moderate => "Moderate",
            Intensity::Significant => "Significant",
            Intensity::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralText {
    pub description: &'static str,
    pub motivation: &'static str,
    pub characteristics: &'static str,
    pub strengths: &'static str,
    pub development_areas: &'static str,
    pub relationship_tips: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessionalText {
    pub work_style: &'static str,
    pub ideal_environment: &'static str,
    pub leadership: &'static str,
    pub career_paths: &'static str,
}

/// How the secondary trait colors the primary one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinationText {
    pub description: &'static str,
    pub strengths: &'static str,
    pub development_areas: &'static str,
    pub relationship_tips: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkPairingText {
    pub team_contribution: &'static str,
    pub watch_out_for: &'static str,
}

/// One trait's reading: which trait, how strong, and the text chosen for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading<T: 'static> {
    pub key: TraitKey,
    pub title: &'static str,
    pub intensity: Intensity,
    pub score: u8,
    #[serde(flatten)]
    pub text: &'static T,
}

fn reading<T>(key: TraitKey, score: u8, text: &'static T) -> Reading<T> {
    Reading {
        key,
        title: describe(key).title,
        intensity: Intensity::for_score(score),
        score,
        text,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GeneralInterpretation {
    pub primary: Reading<GeneralText>,
    pub secondary: Reading<CombinationText>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProfessionalInterpretation {
    pub primary: Reading<ProfessionalText>,
    pub secondary: Reading<WorkPairingText>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Interpretations {
    pub general: GeneralInterpretation,
    pub professional: ProfessionalInterpretation,
}

impl Interpretations {
    pub fn from_result(result: &ProfileResult) -> Self {
        let (primary, secondary) = (result.primary, result.secondary);
        let primary_score = result.normalized_scores[primary];
        let secondary_score = result.normalized_scores[secondary];
        let intensity = Intensity::for_score(primary_score);

        Self {
            general: GeneralInterpretation {
                primary: reading(primary, primary_score, general_text(primary, intensity)),
                secondary: reading(
                    secondary,
                    secondary_score,
                    combination_text(primary, intensity, secondary),
                ),
            },
            professional: ProfessionalInterpretation {
                primary: reading(primary, primary_score, professional_text(primary, intensity)),
                secondary: reading(
                    secondary,
                    secondary_score,
                    work_pairing_text(primary, secondary),
                ),
            },
        }
    }
}

pub fn general_text(key: TraitKey, intensity: Intensity) -> &'static GeneralText {
    use Intensity::*;
    use TraitKey::*;

    match (key, intensity) {
        (Dominance, Moderate) => &GeneralText {
            description: "You lead assertively and with an eye on results, firm without losing the ability to weigh things up.",
            motivation: "Driven by challenges and reaching goals, you pursue results decisively but with balance.",
            characteristics: "Determined, focused and assertive, able to decide without imposing too much.",
            strengths: "Natural leadership, considered decision making, initiative and clear objectives.",
            development_areas: "Grow empathy and patience, learn to delegate and to listen to others.",
            relationship_tips: "Be objective and direct, and leave room for feedback and collaboration.",
        },
        (Dominance, Significant) => &GeneralText {
            description: "Your strong drive for results and your assertiveness stand out. You are direct, competitive and seek control over situations.",
            motivation: "Strongly motivated by challenges, autonomy and quick, tangible results.",
            characteristics: "Direct, decisive, competitive, assertive, independent, demanding and fast.",
            strengths: "Leadership under pressure, solving complex problems, fast decisions and intense focus on goals.",
            development_areas: "Build patience with processes and people, interpersonal sensitivity and the ability to delegate.",
            relationship_tips: "Communicate clearly and objectively, respect the need for autonomy and show interest in other opinions.",
        },
        (Dominance, High) => &GeneralText {
            description: "Your Dominance is very high: extremely assertive, direct and competitive, focused on overcoming challenges and controlling the environment.",
            motivation: "Moved by authority, control and beating big challenges and competitors.",
            characteristics: "Extremely direct, energetic, demanding, fast, impatient, controlling and visionary.",
            strengths: "Exceptional crisis leadership, strategic vision, calculated risk taking, high energy and persistence.",
            development_areas: "You risk coming across as intimidating or insensitive. Listening, empathy, patience and genuine collaboration need strong attention.",
            relationship_tips: "Keep communication concise and results focused, and invest time in understanding other perspectives to build trust.",
        },
        (Influence, Moderate) => &GeneralText {
            description: "You are communicative and enthusiastic, valuing relationships and influencing others in a positive, balanced way.",
            motivation: "Motivated by social recognition, teamwork and a positive, stimulating environment.",
            characteristics: "Sociable, optimistic, persuasive, expressive and collaborative without excess.",
            strengths: "Strong interpersonal communication, the ability to motivate and engage, contagious optimism.",
            development_areas: "Organization, attention to detail and time management can improve.",
            relationship_tips: "Be open and friendly, show enthusiasm and value their social contributions.",
        },
        (Influence, Significant) => &GeneralText {
            description: "Highly communicative, sociable and persuasive, you connect easily and influence people with your enthusiasm.",
            motivation: "Strongly motivated by public recognition, popularity, freedom of expression and lively social settings.",
            characteristics: "Talkative, optimistic, sociable, persuasive, emotional, spontaneous and inspiring.",
            strengths: "Networking, persuasion and influence, creating a positive atmosphere, inspiring others.",
            development_areas: "Organization, following routines, critical analysis of details and purely logical decisions can be hard.",
            relationship_tips: "Let them express themselves, listen to their ideas, offer recognition and avoid rigid routines.",
        },
        (Influence, High) => &GeneralText {
            description: "Extremely outgoing, enthusiastic and sociable, you constantly seek interaction and have a high need for recognition and acceptance.",
            motivation: "Moved by social acclaim, popularity, being the center of attention and highly stimulating settings.",
            characteristics: "Exuberant, very talkative, emotionally expressive, approval seeking, impulsive and optimistic to the extreme.",
            strengths: "An exceptional ability to connect and energize people, magnetic charisma and unshakable optimism.",
            development_areas: "A strong tendency toward disorganization, trouble with detailed or routine work, talking too much and difficulty saying no.",
            relationship_tips: "Give plenty of recognition and positive feedback, be patient with the lack of structure and help keep focus.",
        },
        (Steadiness, Moderate) => &GeneralText {
            description: "You value stability and harmony and are a patient, loyal and predictable collaborator.",
            motivation: "Motivated by security, predictable environments and relationships of trust and mutual support.",
            characteristics: "Calm, patient, loyal, a good listener, cooperative and methodical.",
            strengths: "Teamwork, reliability, consistency and support for colleagues.",
            development_areas: "Fast change, taking initiative and voicing disagreement can be hard.",
            relationship_tips: "Offer a safe, stable environment, announce changes in advance and value their loyalty.",
        },
        (Steadiness, Significant) => &GeneralText {
            description: "Very patient, loyal and methodical, you actively seek security, stability and harmony in relationships and at work.",
            motivation: "Strongly motivated by security, stability, lasting relationships and well defined processes.",
            characteristics: "Very calm, patient, loyal, predictable, resistant to change, a great listener and methodical.",
            strengths: "Highly reliable and consistent, good at following procedures, keeps the team in harmony and listens well.",
            development_areas: "Strong resistance to change, slow decisions, difficulty expressing your own needs or handling conflict.",
            relationship_tips: "Create a predictable environment, introduce change gradually and clearly, and show appreciation for their loyalty.",
        },
        (Steadiness, High) => &GeneralText {
            description: "You have an extreme need for stability, security and predictability. You are exceptionally patient, loyal and averse to change and conflict.",
            motivation: "Moved by absolute security, routine, deep and stable relationships and an environment without conflict.",
            characteristics: "Extremely calm, methodical, predictable, very resistant to change, avoids conflict at all costs, exceptionally loyal.",
            strengths: "Unshakable loyalty and reliability, exceptional at work that needs consistency and patience, builds a supportive environment.",
            development_areas: "Great difficulty with change or uncertainty, passivity, and trouble setting limits or voicing discontent.",
            relationship_tips: "Offer maximum security, introduce change slowly and with support, avoid direct confrontation and value their dedication.",
        },
        (Conformity, Moderate) => &GeneralText {
            description: "You are careful, precise and organized, valuing quality and accuracy in a balanced way.",
            motivation: "Motivated by quality, precision, logic and following established rules and procedures.",
            characteristics: "Analytical, organized, precise, diplomatic and attentive to detail.",
            strengths: "High quality work, attention to detail, careful planning and logical thinking.",
            development_areas: "You may come across as perfectionist or overly critical, and quick decisions or ambiguity can be hard.",
            relationship_tips: "Provide detailed, accurate information, respect their need to analyze and avoid pushing for quick decisions.",
        },
        (Conformity, Significant) => &GeneralText {
            description: "Highly analytical, precise and organized, you pursue accuracy in everything and follow rules and standards rigorously.",
            motivation: "Strongly motivated by quality, precision, logic, facts, rules and correct procedures.",
            characteristics: "Very analytical, detail minded, organized, systematic, cautious, questioning and precise.",
            strengths: "Exceptional attention to detail, precise work, thorough planning and critical thinking.",
            development_areas: "Excessive criticism of yourself and others, risk aversion and analysis paralysis.",
            relationship_tips: "Communicate with facts and data, give time for analysis and recognize the quality of their work.",
        },
        (Conformity, High) => &GeneralText {
            description: "Your Conformity is extremely high: exceptionally analytical, precise and organized, focused on following rules and standards perfectly.",
            motivation: "Moved by absolute precision, flawless quality, proven data and compliance with rules and standards.",
            characteristics: "Extremely analytical, perfectionist, skeptical, questioning, systematic and cautious to the extreme.",
            strengths: "Extraordinary precision and quality, deep analytical ability, impeccable planning and sharp critical thinking.",
            development_areas: "A high risk of paralyzing perfectionism, resistance to any deviation from rules and seeing only black and white.",
            relationship_tips: "Base all communication on facts and logic, be clear and detailed, avoid ambiguity and allow ample time for analysis.",
        },
    }
}

pub fn professional_text(key: TraitKey, intensity: Intensity) -> &'static ProfessionalText {
    use Intensity::*;
    use TraitKey::*;

    match (key, intensity) {
        (Dominance, Moderate) => &ProfessionalText {
            work_style: "Takes ownership of goals and moves work forward without steamrolling the team.",
            ideal_environment: "Clear targets, some autonomy and room to make decisions.",
            leadership: "Sets direction firmly while staying open to input.",
            career_paths: "Team lead, project coordinator, account management.",
        },
        (Dominance, Significant) => &ProfessionalText {
            work_style: "Fast paced and outcome driven, prefers to decide and act rather than deliberate.",
            ideal_environment: "Challenging goals, autonomy, visible results and little bureaucracy.",
            leadership: "Directive and demanding, at its best turning around difficult situations.",
            career_paths: "Operations management, sales leadership, entrepreneurship.",
        },
        (Dominance, High) => &ProfessionalText {
            work_style: "Drives hard toward results and takes control of whatever is in reach.",
            ideal_environment: "High stakes, authority to act and freedom from close supervision.",
            leadership: "Commanding and strategic, strongest in crises and turnarounds.",
            career_paths: "Executive roles, founding companies, crisis and change management.",
        },
        (Influence, Moderate) => &ProfessionalText {
            work_style: "Keeps work collaborative and upbeat while getting people on board.",
            ideal_environment: "Friendly teams, regular interaction and recognition for contributions.",
            leadership: "Encouraging and approachable, builds engagement.",
            career_paths: "Customer success, training, internal communication.",
        },
        (Influence, Significant) => &ProfessionalText {
            work_style: "Works through people: persuades, networks and energizes the group.",
            ideal_environment: "Variety, public recognition and freedom to express ideas.",
            leadership: "Inspirational, rallies the team around a vision.",
            career_paths: "Sales, marketing, public relations, events.",
        },
        (Influence, High) => &ProfessionalText {
            work_style: "Thrives on visibility and interaction and moves quickly between ideas.",
            ideal_environment: "Highly social, dynamic settings with an audience and little routine.",
            leadership: "Charismatic, best paired with someone who tracks the details.",
            career_paths: "Business development, presenting, brand ambassador roles.",
        },
        (Steadiness, Moderate) => &ProfessionalText {
            work_style: "Dependable and consistent, supports colleagues and keeps work flowing.",
            ideal_environment: "Stable teams, clear expectations and changes announced ahead of time.",
            leadership: "Supportive and patient, builds trust over time.",
            career_paths: "Operations support, customer service, human resources.",
        },
        (Steadiness, Significant) => &ProfessionalText {
            work_style: "Methodical and loyal, prefers established processes and long term relationships.",
            ideal_environment: "Predictable routines, harmony and a sense of belonging.",
            leadership: "Servant leadership, protects the team and keeps it steady.",
            career_paths: "Administration, healthcare, counseling, back office operations.",
        },
        (Steadiness, High) => &ProfessionalText {
            work_style: "Extremely reliable on repeatable work and avoids disruption at all costs.",
            ideal_environment: "Secure positions, fixed routines and no open conflict.",
            leadership: "Quiet and caring, needs help driving change or hard conversations.",
            career_paths: "Specialist support roles, caregiving, long running maintenance work.",
        },
        (Conformity, Moderate) => &ProfessionalText {
            work_style: "Careful and organized, checks work before it goes out.",
            ideal_environment: "Clear standards, defined procedures and time to do things properly.",
            leadership: "Leads through expertise and well defined processes.",
            career_paths: "Quality assurance, planning, finance.",
        },
        (Conformity, Significant) => &ProfessionalText {
            work_style: "Analytical and systematic, builds decisions on data and verified facts.",
            ideal_environment: "Precise requirements, quiet focus and respect for quality.",
            leadership: "Sets high standards and expects rigor from the team.",
            career_paths: "Engineering, auditing, data analysis, research.",
        },
        (Conformity, High) => &ProfessionalText {
            work_style: "Exacting and thorough, will not ship until the work is correct.",
            ideal_environment: "Rule driven settings where accuracy matters more than speed.",
            leadership: "Authority through expertise, can be hard to satisfy.",
            career_paths: "Compliance, scientific research, safety critical engineering.",
        },
    }
}

pub fn combination_text(
    primary: TraitKey,
    intensity: Intensity,
    secondary: TraitKey,
) -> &'static CombinationText {
    use TraitKey::*;

    if intensity != Intensity::Moderate {
        return generic_combination(intensity);
    }

    match (primary, secondary) {
        (Dominance, Influence) => &CombinationText {
            description: "Your primary Dominance is results focused and assertive. A moderate Influence adds communication and persuasion.",
            strengths: "Determination and focus on results combined with communication that makes your leadership more inspiring.",
            development_areas: "Balance the need for control with openness to collaboration, and keep enthusiasm from pulling you off target.",
            relationship_tips: "Pair clear goals with genuine interest in the people working toward them.",
        },
        (Dominance, Steadiness) => &CombinationText {
            description: "Your primary Dominance is direct and decisive. A moderate Steadiness adds patience and attention to the team.",
            strengths: "Firm leadership that still pays attention to people and stable processes.",
            development_areas: "Balance urgency for results with the need for stable processes. Learn to delegate and trust the team.",
            relationship_tips: "State objectives plainly and give people the time they need to adjust.",
        },
        (Dominance, Conformity) => &CombinationText {
            description: "Your primary Dominance is results focused and assertive. A moderate Conformity adds analysis, precision and attention to detail.",
            strengths: "Determined, goal driven decisions that are grounded in planning and critical analysis.",
            development_areas: "Balance quick action with detailed analysis. Avoid analysis paralysis or criticism that discourages others.",
            relationship_tips: "Be direct about objectives and back decisions with data and logic.",
        },
        (Influence, Dominance) => &CombinationText {
            description: "Your primary Influence is sociable and energetic. A moderate Dominance adds determination and initiative.",
            strengths: "Charisma and energy with enough determination to lead and take initiative.",
            development_areas: "Build assertiveness in a balanced way so the drive for action does not cost warmth.",
            relationship_tips: "Keep the energy up while being clear about what needs to get done.",
        },
        (Influence, Steadiness) => &CombinationText {
            description: "Your primary Influence is optimistic and outgoing. A moderate Steadiness adds loyalty and empathy.",
            strengths: "Charisma and optimism joined with loyalty and empathy make you strong at building lasting relationships.",
            development_areas: "Do not let the wish for acceptance and harmony keep you from hard decisions or honest feedback.",
            relationship_tips: "Offer warmth and stability together and follow through on commitments.",
        },
        (Influence, Conformity) => &CombinationText {
            description: "Your primary Influence is communicative and enthusiastic. A moderate Conformity adds organization and analysis.",
            strengths: "Persuasion and charisma delivered through a structured, well organized presentation.",
            development_areas: "Let patience and attention to detail complement your expressiveness with more precise communication.",
            relationship_tips: "Balance enthusiasm with facts and data to reinforce your message and build trust.",
        },
        (Steadiness, Dominance) => &CombinationText {
            description: "Your primary Steadiness is cooperative and calm. A moderate Dominance adds quiet determination.",
            strengths: "Patience and cooperation with enough resolve to defend positions calmly but firmly.",
            development_areas: "Build confidence in voicing needs and limits so the moderate assertiveness is used well.",
            relationship_tips: "Stay calm and supportive while being clear about where you stand.",
        },
        (Steadiness, Influence) => &CombinationText {
            description: "Your primary Steadiness is loyal and patient. A moderate Influence adds openness and friendliness.",
            strengths: "Loyalty and patience with open, friendly communication that builds a cohesive team.",
            development_areas: "Work on assertiveness so the search for harmony and acceptance does not silence disagreement.",
            relationship_tips: "Create a warm, steady atmosphere and invite people to share their views.",
        },
        (Steadiness, Conformity) => &CombinationText {
            description: "Your primary Steadiness values cooperation and harmony. A moderate Conformity adds organization and attention to detail.",
            strengths: "Clear, well founded communication with a base of organization that keeps the peace.",
            development_areas: "Develop flexibility and ease self criticism so precision does not block a more fluid interaction.",
            relationship_tips: "Share plans early, explain the reasoning and keep the tone calm.",
        },
        (Conformity, Dominance) => &CombinationText {
            description: "Your primary Conformity is analytical and precise. A moderate Dominance adds determination to see standards met.",
            strengths: "Detailed analysis combined with the drive to make sure standards are followed and goals reached.",
            development_areas: "Stay flexible so perfectionism and assertiveness do not turn into rigidity. Weigh the ideal against the feasible.",
            relationship_tips: "Be firm on quality and open about trade offs.",
        },
        (Conformity, Influence) => &CombinationText {
            description: "Your primary Conformity is careful and precise. A moderate Influence adds interpersonal warmth.",
            strengths: "Analytical rigor with the communication skills to explain complex ideas clearly.",
            development_areas: "Balance the need for data with intuition and social dynamics without trading precision for enthusiasm.",
            relationship_tips: "Explain the details in an engaging way and listen to how people react.",
        },
        (Conformity, Steadiness) => &CombinationText {
            description: "Your primary Conformity is analytical and precise. A moderate Steadiness adds patience, cooperation and focus on security.",
            strengths: "Precision and attention to detail with patience and reliability, excellent for work that demands quality and consistency.",
            development_areas: "Work on flexibility and pace, since this combination can resist change or slow decisions down.",
            relationship_tips: "Share analyses calmly and in a structured way, and support others with clear procedures.",
        },
        _ => generic_combination(intensity),
    }
}

fn generic_combination(intensity: Intensity) -> &'static CombinationText {
    match intensity {
        Intensity::Moderate => &CombinationText {
            description: "The secondary influence in your profile adds nuance and complementary skills without taking over.",
            strengths: "Adaptability and extra perspectives that enrich the dominant profile.",
            development_areas: "Use the secondary traits deliberately so they complement the primary profile instead of competing with it.",
            relationship_tips: "Knowing this secondary influence helps predict reactions in different situations.",
        },
        Intensity::Significant => &CombinationText {
            description: "Your strong primary trait sets the tone. The secondary trait shows up clearly in specific situations and shapes how you get things done.",
            strengths: "A wider range of behavior than the primary trait alone, useful when the situation calls for a different approach.",
            development_areas: "Notice when the secondary trait pulls against the primary one and choose consciously which to lead with.",
            relationship_tips: "Expect both sides of the profile and address the one the situation brings out.",
        },
        Intensity::High => &CombinationText {
            description: "Your primary trait is very pronounced and dominates most behavior. The secondary trait mainly tempers how it is expressed.",
            strengths: "The secondary trait offers a counterweight that can soften the extremes of the primary one.",
            development_areas: "Lean on the secondary trait on purpose when the primary one starts to overreach.",
            relationship_tips: "Engage the primary trait first, then appeal to the secondary one to broaden the conversation.",
        },
    }
}

pub fn work_pairing_text(primary: TraitKey, secondary: TraitKey) -> &'static WorkPairingText {
    use TraitKey::*;

    match (primary, secondary) {
        (Dominance, Influence) => &WorkPairingText {
            team_contribution: "Sells the goal as well as setting it, good at opening doors and closing deals.",
            watch_out_for: "Promising more than the team can deliver.",
        },
        (Dominance, Steadiness) => &WorkPairingText {
            team_contribution: "Pushes for results while keeping the team together over the long run.",
            watch_out_for: "Bottling up frustration until it comes out all at once.",
        },
        (Dominance, Conformity) => &WorkPairingText {
            team_contribution: "Sets ambitious targets and checks that the plan actually holds up.",
            watch_out_for: "Harsh criticism when work falls short of the standard.",
        },
        (Influence, Dominance) => &WorkPairingText {
            team_contribution: "Mobilizes people quickly and keeps momentum on new initiatives.",
            watch_out_for: "Moving on before the details are settled.",
        },
        (Influence, Steadiness) => &WorkPairingText {
            team_contribution: "Builds rapport and keeps morale steady, a natural connector between teams.",
            watch_out_for: "Avoiding conflict that needs to be addressed.",
        },
        (Influence, Conformity) => &WorkPairingText {
            team_contribution: "Presents complex material in an engaging, well structured way.",
            watch_out_for: "Swinging between spontaneity and overthinking.",
        },
        (Steadiness, Dominance) => &WorkPairingText {
            team_contribution: "Delivers consistently and holds ground calmly when it matters.",
            watch_out_for: "Resisting change until it is forced.",
        },
        (Steadiness, Influence) => &WorkPairingText {
            team_contribution: "Welcomes newcomers and keeps the team cohesive and supportive.",
            watch_out_for: "Saying yes to everything to keep people happy.",
        },
        (Steadiness, Conformity) => &WorkPairingText {
            team_contribution: "Runs established processes reliably and accurately.",
            watch_out_for: "Slowing down when priorities shift suddenly.",
        },
        (Conformity, Dominance) => &WorkPairingText {
            team_contribution: "Enforces quality standards and drives fixes to completion.",
            watch_out_for: "Rigidity when rules meet real world constraints.",
        },
        (Conformity, Influence) => &WorkPairingText {
            team_contribution: "Turns analysis into recommendations that people understand and accept.",
            watch_out_for: "Overloading audiences with detail.",
        },
        (Conformity, Steadiness) => &WorkPairingText {
            team_contribution: "Produces careful, dependable work that others can build on.",
            watch_out_for: "Delaying decisions while waiting for certainty.",
        },
        _ => &WorkPairingText {
            team_contribution: "Brings the strengths of the primary trait with a second, complementary style.",
            watch_out_for: "Letting one side of the profile crowd out the other.",
        },
    }
}
