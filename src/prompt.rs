use crate::profile::ProfileInput;

pub(crate) const COUNSELOR_PREAMBLE: &str =
    "Act as an expert career counselor for Indian students.";

pub(crate) const TASK_BLOCK: &str = r#"Task:
1. Suggest the TOP 3 suitable career paths.
2. Explain why each career matches the student's profile.
3. Give clear next steps after 12th (courses, exams, skills).
Use simple language."#;

/// Render a profile into the advice prompt.
///
/// Deterministic: the same profile always produces the same string, and
/// every non-empty field value appears in it verbatim. Empty optional
/// fields are omitted rather than rendered as blanks.
pub fn build_prompt(profile: &ProfileInput) -> String {
    let mut prompt = String::new();
    prompt.push_str(COUNSELOR_PREAMBLE);
    prompt.push_str("\n\nStudent Profile:\n");
    prompt.push_str(&format!("Name: {}\n", profile.name));

    if !profile.stream.trim().is_empty() {
        prompt.push_str(&format!("Stream: {}\n", profile.stream));
    }
    if !profile.marks.trim().is_empty() {
        prompt.push_str(&format!("12th Marks: {}\n", profile.marks));
    }

    if let Some(scores) = &profile.scores {
        prompt.push_str("\nAptitude Scores:\n");
        prompt.push_str(&format!("Logical: {}\n", scores.logical));
        prompt.push_str(&format!("Creative: {}\n", scores.creative));
        prompt.push_str(&format!("Social: {}\n", scores.social));
        prompt.push_str(&format!("Practical: {}\n", scores.practical));
    }

    if let Some(skills) = &profile.skills {
        if !skills.trim().is_empty() {
            prompt.push_str(&format!("\nSkills and interests: {}\n", skills));
        }
    }

    prompt.push('\n');
    prompt.push_str(TASK_BLOCK);
    prompt
}
