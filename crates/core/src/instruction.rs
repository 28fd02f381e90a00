//! Per-step instruction text parsing.
//!
//! The backend stores each step's instruction as a plain-text file of the
//! form `title\n\ndescription`. [`Instruction::parse`] splits that format,
//! tolerating files that never got a title line.

/// A parsed step instruction: a short title plus the full description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    pub title: String,
    pub description: String,
}

impl Instruction {
    /// Parse raw instruction text for the given 0-based step index.
    ///
    /// The title is everything before the first blank line (trimmed) and the
    /// description everything after it (trimmed). Text without a blank line
    /// becomes the description of a synthesized `Step {n}` title, numbered
    /// 1-based for display.
    pub fn parse(text: &str, step_index: u32) -> Self {
        match text.split_once("\n\n") {
            Some((title, description)) => Self {
                title: title.trim().to_string(),
                description: description.trim().to_string(),
            },
            None => Self {
                title: format!("Step {}", step_index + 1),
                description: text.trim().to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_first_blank_line() {
        let parsed = Instruction::parse("Attach Legs\n\nScrew the legs into the brackets.", 3);
        assert_eq!(parsed.title, "Attach Legs");
        assert_eq!(parsed.description, "Screw the legs into the brackets.");
    }

    #[test]
    fn later_blank_lines_stay_in_the_description() {
        let parsed = Instruction::parse("Secure Frame\n\nAlign the holes.\n\nTighten the screws.", 0);
        assert_eq!(parsed.title, "Secure Frame");
        assert_eq!(parsed.description, "Align the holes.\n\nTighten the screws.");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let parsed = Instruction::parse("  Prepare Workspace \n\n  Place the frame upside down.\n", 0);
        assert_eq!(parsed.title, "Prepare Workspace");
        assert_eq!(parsed.description, "Place the frame upside down.");
    }

    #[test]
    fn missing_separator_synthesizes_title() {
        let parsed = Instruction::parse("Push the brackets into the slots.\n", 1);
        assert_eq!(parsed.title, "Step 2");
        assert_eq!(parsed.description, "Push the brackets into the slots.");
    }

    #[test]
    fn empty_text_keeps_synthesized_title() {
        let parsed = Instruction::parse("", 0);
        assert_eq!(parsed.title, "Step 1");
        assert_eq!(parsed.description, "");
    }
}
