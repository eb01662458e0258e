use crate::profile::{AptitudeScores, Dimension};

/// One answer option: display text, the dimension it scores, and how many
/// points it adds.
pub struct QuizOption {
    pub text: &'static str,
    pub dimension: Dimension,
    pub points: u32,
}

/// One quiz question with a fixed set of options.
pub struct QuizQuestion {
    pub prompt: &'static str,
    pub options: &'static [QuizOption],
}

/// The aptitude quiz. Each option is tagged with the dimension it counts
/// toward; picking it adds the option's points to that dimension.
pub const QUIZ: &[QuizQuestion] = &[
    QuizQuestion {
        prompt: "A free afternoon appears. What do you reach for?",
        options: &[
            QuizOption { text: "A puzzle or strategy game", dimension: Dimension::Logical, points: 3 },
            QuizOption { text: "A sketchbook or an instrument", dimension: Dimension::Creative, points: 3 },
            QuizOption { text: "Calling friends to plan something", dimension: Dimension::Social, points: 3 },
            QuizOption { text: "Fixing or building something at home", dimension: Dimension::Practical, points: 3 },
        ],
    },
    QuizQuestion {
        prompt: "In a group project, which role do you naturally take?",
        options: &[
            QuizOption { text: "Breaking the problem into steps", dimension: Dimension::Logical, points: 3 },
            QuizOption { text: "Designing how it looks and feels", dimension: Dimension::Creative, points: 3 },
            QuizOption { text: "Keeping everyone talking and on board", dimension: Dimension::Social, points: 3 },
            QuizOption { text: "Getting the actual pieces built", dimension: Dimension::Practical, points: 3 },
        ],
    },
    QuizQuestion {
        prompt: "Which school task feels easiest to you?",
        options: &[
            QuizOption { text: "Maths derivations and proofs", dimension: Dimension::Logical, points: 2 },
            QuizOption { text: "Essays, posters, presentations", dimension: Dimension::Creative, points: 2 },
            QuizOption { text: "Debates and group discussions", dimension: Dimension::Social, points: 2 },
            QuizOption { text: "Lab work and experiments", dimension: Dimension::Practical, points: 2 },
        ],
    },
    QuizQuestion {
        prompt: "What kind of praise means the most to you?",
        options: &[
            QuizOption { text: "\"That was a clever solution\"", dimension: Dimension::Logical, points: 2 },
            QuizOption { text: "\"That was original\"", dimension: Dimension::Creative, points: 2 },
            QuizOption { text: "\"You really helped someone\"", dimension: Dimension::Social, points: 2 },
            QuizOption { text: "\"That actually works\"", dimension: Dimension::Practical, points: 2 },
        ],
    },
];

/// Accumulate scores from the selected option index of each question.
///
/// `answers[i]` is the chosen option index for `QUIZ[i]`. Out-of-range
/// selections and missing trailing answers contribute nothing.
pub fn score_answers(answers: &[usize]) -> AptitudeScores {
    let mut scores = AptitudeScores::new();
    for (question, &choice) in QUIZ.iter().zip(answers) {
        if let Some(option) = question.options.get(choice) {
            scores.add(option.dimension, option.points);
        }
    }
    scores
}
