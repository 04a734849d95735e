//! The guide content this section renders.

use crate::error::HowToError;

/// One step of the usage guide.
#[derive(Debug, Clone, Copy)]
pub struct Step {
    pub title: &'static str,
    pub detail: &'static str,
}

const STEPS: &[Step] = &[
    Step {
        title: "Browse",
        detail: "Scan the collection below; every entry opens in a new tab.",
    },
    Step {
        title: "Read the blurbs",
        detail: "Each link carries a one-line note on why it made the cut.",
    },
    Step {
        title: "Suggest an addition",
        detail: "Open an issue on the repository with the link and a short blurb.",
    },
];

/// The guide, in reading order.
#[must_use]
pub const fn steps() -> &'static [Step] {
    STEPS
}

/// Checks the guide before its tag is registered.
pub(crate) fn validate() -> Result<(), HowToError> {
    if STEPS.is_empty() {
        return Err(HowToError::Content { message: "the guide is empty".into(), context: None });
    }

    for step in STEPS {
        if step.title.trim().is_empty() || step.detail.trim().is_empty() {
            return Err(HowToError::Content {
                message: "guide steps need both a title and a detail line".into(),
                context: None,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_guide_is_valid() {
        validate().expect("shipped content should pass validation");
    }
}
