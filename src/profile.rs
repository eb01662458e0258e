use crate::error::AdviceError;

/// The four aptitude dimensions scored by the quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Logical,
    Creative,
    Social,
    Practical,
}

/// Accumulated quiz scores, one counter per dimension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AptitudeScores {
    pub logical: u32,
    pub creative: u32,
    pub social: u32,
    pub practical: u32,
}

impl AptitudeScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add points to one dimension's counter
    pub fn add(&mut self, dimension: Dimension, points: u32) {
        match dimension {
            Dimension::Logical => self.logical += points,
            Dimension::Creative => self.creative += points,
            Dimension::Social => self.social += points,
            Dimension::Practical => self.practical += points,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.logical == 0 && self.creative == 0 && self.social == 0 && self.practical == 0
    }
}

/// Everything the user told us about themselves for one submission.
///
/// Only `name` is required; the rest is included in the prompt when
/// present and silently omitted when not. Nothing here outlives the
/// submission it was collected for.
#[derive(Debug, Clone, Default)]
pub struct ProfileInput {
    pub name: String,
    pub stream: String,
    pub marks: String,
    pub scores: Option<AptitudeScores>,
    pub skills: Option<String>,
}

impl ProfileInput {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_stream(mut self, stream: impl Into<String>) -> Self {
        self.stream = stream.into();
        self
    }

    pub fn with_marks(mut self, marks: impl Into<String>) -> Self {
        self.marks = marks.into();
        self
    }

    pub fn with_scores(mut self, scores: AptitudeScores) -> Self {
        self.scores = Some(scores);
        self
    }

    pub fn with_skills(mut self, skills: impl Into<String>) -> Self {
        self.skills = Some(skills.into());
        self
    }

    /// Check the minimum required fields before a request may be issued
    pub fn validate(&self) -> Result<(), AdviceError> {
        if self.name.trim().is_empty() {
            return Err(AdviceError::Validation("name".to_string()));
        }
        Ok(())
    }
}
