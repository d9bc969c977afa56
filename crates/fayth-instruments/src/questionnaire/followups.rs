use std::sync::LazyLock;

use fayth_core::models::questionnaire::{FollowUpQuestion, Responses};
use fayth_core::models::user::Gender;

/// Follow-up bank id whose answer drives the masking-exhaustion insight.
pub const MASKING_BURNOUT: &str = "female_f6";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUpBank {
    Female,
    Male,
    General,
}

impl FollowUpBank {
    /// Bank used for a gender. Non-binary and "prefer not to say" get no
    /// follow-ups at all.
    pub fn for_gender(gender: Option<Gender>) -> Option<Self> {
        match gender? {
            Gender::Female => Some(FollowUpBank::Female),
            Gender::Male => Some(FollowUpBank::Male),
            Gender::NonBinary | Gender::PreferNotToSay => None,
        }
    }

    pub fn questions(self) -> &'static [FollowUpQuestion] {
        match self {
            FollowUpBank::Female => &FEMALE,
            FollowUpBank::Male => &MALE,
            FollowUpBank::General => &GENERAL,
        }
    }
}

/// Follow-ups to ask, in bank order.
pub fn determine_follow_ups(responses: &Responses, gender: Option<Gender>) -> Vec<FollowUpQuestion> {
    FollowUpBank::for_gender(gender)
        .map(|bank| select_follow_ups(responses, bank))
        .unwrap_or_default()
}

/// Every rule in `bank` with at least one trigger item at or above its
/// threshold. Missing responses count as 0.
pub fn select_follow_ups(responses: &Responses, bank: FollowUpBank) -> Vec<FollowUpQuestion> {
    bank.questions()
        .iter()
        .filter(|rule| {
            rule.trigger_questions.iter().any(|id| {
                responses.get(id).copied().unwrap_or(0) >= rule.trigger_threshold
            })
        })
        .cloned()
        .collect()
}

fn rule(id: &str, triggers: &[&str], threshold: u8, category: &str, text: &str) -> FollowUpQuestion {
    FollowUpQuestion {
        id: id.to_string(),
        trigger_questions: triggers.iter().map(|t| t.to_string()).collect(),
        trigger_threshold: threshold,
        text: text.to_string(),
        category: category.to_string(),
    }
}

static FEMALE: LazyLock<Vec<FollowUpQuestion>> = LazyLock::new(|| {
    vec![
        rule(
            "female_f1",
            &["dsm5_a1", "dsm5_a2", "dsm5_a4"],
            3,
            "time_perception",
            "Do you experience 'time blindness' - like you genuinely can't tell if something took 10 minutes or 2 hours, you're always underestimating how long tasks will take, or suddenly it's 3pm and you're like 'wait what happened to the morning?'",
        ),
        rule(
            "female_f2",
            &["dsm5_a1", "dsm5_a7"],
            3,
            "perfectionism",
            "Do you get stuck in perfectionism spirals - like if you can't do something perfectly you won't do it at all, or you spend hours obsessing over tiny details that don't really matter, or you abandon projects because they're not turning out 'perfect enough'?",
        ),
        rule(
            "female_f3",
            &["dsm5_a5", "dsm5_a6", "dsm5_b3"],
            2,
            "internal_hyperactivity",
            "Does your brain feel like a browser with 47 tabs open - like internally you're restless, your thoughts are racing, and there's constant mental chaos, but on the outside you look totally calm and put together?",
        ),
        rule(
            "female_f4",
            &["dsm5_a8", "dsm5_a9", "dsm5_a11"],
            3,
            "hyperfocus",
            "Do you get sucked into hyperfocus mode - like you'll spend 6 hours straight deep-diving into something that interests you (researching, creating, organizing, watching videos) while completely ignoring important stuff like eating, sleeping, or actual responsibilities?",
        ),
        rule(
            "female_f5",
            &["dsm5_b7", "dsm5_b8", "dsm5_b9"],
            2,
            "emotional_dysregulation",
            "Do your emotions feel like they're on a rollercoaster - like small things hit you HARD (criticism feels devastating, excitement is INTENSE, frustration makes you want to cry), and your mood can shift dramatically throughout the day for seemingly no reason?",
        ),
        rule(
            MASKING_BURNOUT,
            &["dsm5_a2", "dsm5_a10"],
            3,
            "masking_burnout",
            "Are you exhausted from 'masking' - like constantly working SO hard to appear organized, focused, and 'normal' at work or in social situations, then coming home completely drained because pretending to have your life together takes all your energy?",
        ),
        rule(
            "female_f7",
            &["dsm5_a9"],
            3,
            "multitasking",
            "Do you struggle to juggle multiple life things at once - like when you're trying to balance work, social life, family stuff, household chores, and self-care, something (or everything) starts falling apart because it's too much to track?",
        ),
    ]
});

static MALE: LazyLock<Vec<FollowUpQuestion>> = LazyLock::new(|| {
    vec![
        rule(
            "male_m1",
            &["dsm5_a5", "dsm5_a6", "dsm5_b2", "dsm5_b3"],
            3,
            "external_hyperactivity",
            "Do people call you out for being restless or 'always moving' - like friends, family, or coworkers notice you can't sit still, you're always fidgeting, tapping, or getting up and moving around?",
        ),
        rule(
            "male_m2",
            &["dsm5_b7", "dsm5_b8", "dsm5_b9"],
            3,
            "verbal_impulsivity",
            "Do you constantly interrupt people or jump into conversations - like you can't wait for your turn to talk, you blurt things out, or people have told you that you talk over them without realizing it?",
        ),
        rule(
            "male_m3",
            &["dsm5_a4", "dsm5_a1"],
            3,
            "project_completion",
            "Do you have a graveyard of unfinished projects - like you start something hyped, then lose interest and jump to the next thing, leaving a trail of abandoned projects behind you (work stuff, hobbies, side hustles, whatever)?",
        ),
        rule(
            "male_m4",
            &["dsm5_b10"],
            2,
            "risk_taking",
            "Do you do impulsive or risky stuff - like driving too fast, making big purchases without thinking, trying risky activities, making snap decisions, or doing things that objectively seem kinda reckless when you think about it later?",
        ),
        rule(
            "male_m5",
            &["dsm5_a2", "dsm5_a10"],
            3,
            "work_organization",
            "Is staying organized at work or with daily life stuff a constant struggle - like your workspace is chaotic, you miss deadlines, you forget tasks, or managing basic adult responsibilities feels overwhelming?",
        ),
        rule(
            "male_m6",
            &["dsm5_a8", "dsm5_a11"],
            3,
            "structured_attention",
            "Do you struggle to stay focused during structured, formal stuff - like long meetings, presentations, training sessions, or lectures where you're expected to sit and pay attention for extended periods?",
        ),
    ]
});

static GENERAL: LazyLock<Vec<FollowUpQuestion>> = LazyLock::new(|| {
    vec![
        rule(
            "general_g1",
            &["dsm5_a1", "dsm5_a2", "dsm5_a4"],
            3,
            "time_perception",
            "Do you experience 'time blindness' - like you genuinely can't tell if something took 10 minutes or 2 hours, you're always underestimating how long tasks will take, or suddenly it's 3pm and you have no idea where the day went?",
        ),
        rule(
            "general_g2",
            &["dsm5_a5", "dsm5_a6", "dsm5_b3"],
            2,
            "internal_hyperactivity",
            "Does your brain feel like it has 47 tabs open - like internally you're restless, your thoughts are racing, and there's constant mental noise, but on the outside you might look totally calm and put together?",
        ),
        rule(
            "general_g3",
            &["dsm5_a8", "dsm5_a9", "dsm5_a11"],
            3,
            "hyperfocus",
            "Do you get sucked into hyperfocus mode - like you'll spend hours straight deep-diving into something that interests you while completely ignoring important stuff like eating, sleeping, or actual responsibilities?",
        ),
        rule(
            "general_g4",
            &["dsm5_b7", "dsm5_b8", "dsm5_b9"],
            2,
            "emotional_dysregulation",
            "Do your emotions feel like they're on a rollercoaster - like small things hit you hard (criticism feels devastating, excitement is intense, frustration is overwhelming), and your mood can shift dramatically throughout the day?",
        ),
        rule(
            "general_g5",
            &["dsm5_a2", "dsm5_a10"],
            3,
            "masking_burnout",
            "Are you exhausted from 'masking' - like constantly working hard to appear organized, focused, and on top of things in social or work situations, then coming home completely drained because keeping it together takes all your energy?",
        ),
        rule(
            "general_g6",
            &["dsm5_a4", "dsm5_a1"],
            3,
            "project_completion",
            "Do you have a graveyard of unfinished projects - like you start something excited, then lose interest and jump to the next thing, leaving a trail of abandoned projects behind you?",
        ),
    ]
});
