use super::{form::SubmissionForm, preview};
use crate::orchestrator::ViewState;

const STYLE: &str = r#"
  body { margin: 0; font-family: system-ui, sans-serif; color: #111827; background: #f8fafc; }
  .container { max-width: 72rem; margin: 0 auto; padding: 2rem 1rem; }
  .generator-form { max-width: 42rem; margin: 0 auto; background: #fff; border-radius: 1rem; padding: 2rem; }
  .generator-form input { width: 100%; padding: 1rem; font-size: 1.1rem; }
  .generator-form button { width: 100%; margin-top: 1rem; padding: 1rem; }
  .error { background: #fef2f2; border: 1px solid #fecaca; color: #991b1b; padding: 1rem; border-radius: .5rem; }
  .example { display: inline-block; margin: .25rem; padding: .25rem .75rem; border-radius: 999px; background: #f3f4f6; }
  .hero { display: flex; flex-wrap: wrap; gap: 2rem; padding: 3rem; color: #fff; background: linear-gradient(135deg, #2563eb, #9333ea, #db2777); }
  .avatar { border-radius: 50%; }
  .stats { display: flex; gap: 2rem; }
  .stat { display: flex; flex-direction: column; }
  .grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(20rem, 1fr)); gap: 1.5rem; }
  .card { border: 1px solid #e5e7eb; border-radius: .75rem; padding: 1.5rem; }
  .ai-summary { background: #faf5ff; border: 1px solid #e9d5ff; padding: 1rem; border-radius: .5rem; }
  .topic { margin-right: .5rem; padding: .25rem .75rem; border-radius: 999px; background: #dbeafe; font-size: .75rem; }
  .success { margin-top: 2rem; background: #f0fdf4; border: 1px solid #bbf7d0; padding: 1.5rem; border-radius: .75rem; }
"#;

const HERO: &str = r#"<section class="intro">
    <h2>Transform Your GitHub Into a Beautiful Portfolio</h2>
    <p>Enter your GitHub username and let AI generate a stunning personal website in seconds. No coding required.</p>
    <ul class="features">
      <li><h3>Instant Generation</h3><p>Generate in seconds, not hours</p></li>
      <li><h3>AI-Powered</h3><p>Smart summaries by Gemini AI</p></li>
      <li><h3>Beautiful Design</h3><p>Modern, responsive layouts</p></li>
    </ul>
  </section>
  "#;

/// Full document for the current workflow state. The form is shown while idle
/// or loading, the preview once a result is available.
pub fn render(state: &ViewState, form: &SubmissionForm) -> String {
    let content = match state.result() {
        Some(data) => preview::render(data),
        None => format!("{HERO}{}", form.render(state.is_loading(), state.error())),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>LandGen - AI-Powered Website Generator</title>
<style>{STYLE}</style>
</head>
<body>
<header class="topbar">
  <h1>LandGen</h1>
  <p>AI-Powered Website Generator</p>
  <span class="version">v{version}</span>
</header>
<main class="container">
  {content}
</main>
<footer>
  <p>Powered by Rust, axum and Google Gemini AI</p>
</footer>
</body>
</html>
"#,
        version = env!("CARGO_PKG_VERSION"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures;

    #[test]
    fn test_idle_page_shows_form_and_error() {
        let state = ViewState::Idle {
            error: Some("Request timed out. Please try again.".to_string()),
        };
        let html = render(&state, &SubmissionForm::with_value("torvalds"));

        assert!(html.contains(r#"<form class="generator-form""#));
        assert!(html.contains("Request timed out. Please try again."));
        assert!(!html.contains(r#"class="preview""#));
    }

    #[test]
    fn test_loading_page_disables_submit() {
        let state = ViewState::Loading {
            username: "torvalds".to_string(),
        };
        let html = render(&state, &SubmissionForm::with_value("torvalds"));

        assert!(html.contains("Generating your website..."));
        assert!(html.contains(r#"<button type="submit" disabled>"#));
    }

    #[test]
    fn test_success_page_shows_preview_only() {
        let state = ViewState::Success {
            data: Box::new(fixtures::response(vec![fixtures::repository(1, "Hello-World")])),
        };
        let html = render(&state, &SubmissionForm::new());

        assert!(html.contains(r#"class="preview""#));
        assert!(html.contains(">Hello-World</a>"));
        assert!(!html.contains(r#"<form class="generator-form""#));
    }
}
