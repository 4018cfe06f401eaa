use super::escape;

/// One-click fill shortcuts offered under the input.
pub const EXAMPLE_USERNAMES: [&str; 4] = ["torvalds", "gaearon", "tj", "sindresorhus"];

const SUBMIT_LABEL: &str = "Generate My Website";
const LOADING_LABEL: &str = "Generating your website...";

/// Text-input state of the username form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionForm {
    value: String,
}

impl SubmissionForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// The username to submit, or `None` when the input is blank.
    pub fn submission(&self) -> Option<&str> {
        let trimmed = self.value.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    pub fn render(&self, loading: bool, error: Option<&str>) -> String {
        // Blank input is rejected by `required` and `submission`, not here.
        let disabled = if loading { " disabled" } else { "" };

        let examples: String = EXAMPLE_USERNAMES
            .iter()
            .map(|example| {
                if loading {
                    format!(r#"<span class="example" aria-disabled="true">@{example}</span>"#)
                } else {
                    format!(r#"<a class="example" href="/?username={example}">@{example}</a>"#)
                }
            })
            .collect::<Vec<_>>()
            .join("\n      ");

        let error = error
            .map(|message| {
                format!(
                    r#"
    <div class="error" role="alert"><p>{}</p></div>"#,
                    escape(message)
                )
            })
            .unwrap_or_default();

        let label = if loading { LOADING_LABEL } else { SUBMIT_LABEL };

        format!(
            r#"<form class="generator-form" method="post" action="/generate">
    <label for="username">GitHub Username</label>
    <input type="text" id="username" name="username" value="{value}" placeholder="e.g., torvalds" required{disabled}>
    <div class="examples">
      <p>Try examples:</p>
      {examples}
    </div>{error}
    <button type="submit"{disabled}>{label}</button>
    <p class="note">Free · No signup required · Powered by AI</p>
  </form>"#,
            value = escape(&self.value),
        )
    }
}
