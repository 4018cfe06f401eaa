//! Portfolio preview rendered from a successful generation response.
//!
//! Everything here is a pure function of [`GenerateResponse`]; the only
//! interactive element is the reset control, which posts back to `/reset`.

use super::escape;
use crate::model::{present, GenerateResponse, Repository, UserProfile};

/// Topics beyond this many are not shown on a card.
pub const MAX_TOPICS: usize = 5;

pub fn render(data: &GenerateResponse) -> String {
    let cards: String = data.repositories.iter().map(render_card).collect();

    format!(
        r#"<section class="preview">
  <div class="action-bar">
    <div>
      <h2>Your Website is Ready!</h2>
      <p>Here's a preview of your generated personal website</p>
    </div>
    <form method="post" action="/reset"><button type="submit" class="reset">Generate Another</button></form>
  </div>
  <article class="site">
{header}
    <section class="projects">
      <h2>Featured Projects</h2>
      <div class="grid">
{cards}      </div>
    </section>
  </article>
  <div class="success" role="status">
    <h3>Website Generated Successfully!</h3>
    <p>{message}</p>
    <p>This is a preview of what your personal website could look like. In the full version, you'll be able to deploy this to your own subdomain and keep it automatically updated!</p>
  </div>
</section>"#,
        header = render_header(&data.user),
        message = escape(&data.message),
    )
}

/// Absolute link for a profile's blog field.
pub fn blog_href(blog: &str) -> String {
    if blog.starts_with("http") {
        blog.to_string()
    } else {
        format!("https://{blog}")
    }
}

pub fn twitter_href(handle: &str) -> String {
    format!("https://twitter.com/{handle}")
}

fn render_header(user: &UserProfile) -> String {
    let display_name = present(&user.name).unwrap_or(user.login.as_str());

    let bio = present(&user.bio)
        .map(|bio| format!("\n        <p class=\"bio\">{}</p>", escape(bio)))
        .unwrap_or_default();

    let mut links = Vec::new();
    if let Some(location) = present(&user.location) {
        links.push(format!(r#"<span class="location">{}</span>"#, escape(location)));
    }
    if let Some(blog) = present(&user.blog) {
        links.push(format!(
            r#"<a class="blog" href="{}" target="_blank" rel="noopener noreferrer">Website</a>"#,
            escape(&blog_href(blog))
        ));
    }
    if let Some(handle) = present(&user.twitter_username) {
        links.push(format!(
            r#"<a class="twitter" href="{}" target="_blank" rel="noopener noreferrer">@{}</a>"#,
            escape(&twitter_href(handle)),
            escape(handle)
        ));
    }

    format!(
        r#"    <header class="hero">
      <img class="avatar" src="{avatar}" alt="{name}" width="150" height="150">
      <div>
        <h1>{name}</h1>
        <p class="login">@{login}</p>{bio}
        <div class="links">{links}</div>
      </div>
      <div class="stats">
        <div class="stat"><span class="value">{repos}</span><span class="label">Repositories</span></div>
        <div class="stat"><span class="value">{followers}</span><span class="label">Followers</span></div>
        <div class="stat"><span class="value">{following}</span><span class="label">Following</span></div>
      </div>
    </header>"#,
        avatar = escape(&user.avatar_url),
        name = escape(display_name),
        login = escape(&user.login),
        links = links.join(""),
        repos = user.public_repos,
        followers = user.followers,
        following = user.following,
    )
}

fn render_card(repo: &Repository) -> String {
    let mut body = String::new();

    if let Some(summary) = present(&repo.ai_summary) {
        body.push_str(&format!(
            "\n          <div class=\"ai-summary\"><p class=\"ai-label\">AI Summary</p><p>{}</p></div>",
            escape(summary)
        ));
    }
    if let Some(description) = present(&repo.description) {
        body.push_str(&format!(
            "\n          <p class=\"description\">{}</p>",
            escape(description)
        ));
    }
    if !repo.topics.is_empty() {
        let topics: String = repo
            .topics
            .iter()
            .take(MAX_TOPICS)
            .map(|topic| format!(r#"<span class="topic">{}</span>"#, escape(topic)))
            .collect();
        body.push_str(&format!("\n          <div class=\"topics\">{topics}</div>"));
    }

    let language = present(&repo.language)
        .map(|language| format!(r#"<span class="language">{}</span>"#, escape(language)))
        .unwrap_or_default();
    body.push_str(&format!(
        "\n          <div class=\"repo-stats\">{language}<span class=\"stars\">{}</span><span class=\"forks\">{}</span></div>",
        repo.stargazers_count, repo.forks_count
    ));

    if let Some(homepage) = present(&repo.homepage) {
        body.push_str(&format!(
            "\n          <a class=\"homepage\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">View Demo</a>",
            escape(homepage)
        ));
    }

    format!(
        r#"        <div class="card" data-repo-id="{id}">
          <a class="repo-name" href="{url}" target="_blank" rel="noopener noreferrer">{name}</a>{body}
        </div>
"#,
        id = repo.id,
        url = escape(&repo.html_url),
        name = escape(&repo.name),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures;

    #[test]
    fn test_header_prefers_name_over_login() {
        let data = fixtures::response(Vec::new());
        let html = render(&data);
        assert!(html.contains("<h1>The Octocat</h1>"));
        assert!(html.contains(r#"<p class="login">@octocat</p>"#));
        assert!(html.contains(r#"<p class="bio">Mascot &amp; friend</p>"#));

        let mut data = fixtures::response(Vec::new());
        data.user.name = None;
        data.user.bio = None;
        let html = render(&data);
        assert!(html.contains("<h1>octocat</h1>"));
        assert!(!html.contains(r#"class="bio""#));
    }

    #[test]
    fn test_profile_links() {
        let html = render(&fixtures::response(Vec::new()));
        assert!(html.contains(r#"<span class="location">San Francisco</span>"#));
        assert!(html.contains(r#"href="https://github.blog""#));
        assert!(html.contains(r#"href="https://twitter.com/github""#));
        assert!(html.contains(">@github</a>"));

        let mut data = fixtures::response(Vec::new());
        data.user.location = None;
        data.user.blog = None;
        data.user.twitter_username = Some(String::new());
        let html = render(&data);
        assert!(!html.contains(r#"class="location""#));
        assert!(!html.contains(r#"class="blog""#));
        assert!(!html.contains(r#"class="twitter""#));
    }

    #[test]
    fn test_blog_href_keeps_existing_scheme() {
        assert_eq!(blog_href("https://example.com"), "https://example.com");
        assert_eq!(blog_href("http://example.com"), "http://example.com");
        assert_eq!(blog_href("example.com"), "https://example.com");
    }

    #[test]
    fn test_stats_are_literal_integers() {
        let html = render(&fixtures::response(Vec::new()));
        assert!(html.contains(r#"<span class="value">8</span><span class="label">Repositories</span>"#));
        assert!(html.contains(r#"<span class="value">21000</span><span class="label">Followers</span>"#));
        assert!(html.contains(r#"<span class="value">9</span><span class="label">Following</span>"#));
    }

    #[test]
    fn test_ai_summary_only_when_present() {
        let mut with_summary = fixtures::repository(1, "summarized");
        with_summary.ai_summary = Some("A kernel written for fun.".to_string());
        let mut empty_summary = fixtures::repository(2, "empty");
        empty_summary.ai_summary = Some(String::new());
        let without_summary = fixtures::repository(3, "plain");

        let html = render(&fixtures::response(vec![
            with_summary,
            empty_summary.clone(),
            without_summary.clone(),
        ]));

        assert_eq!(html.matches(r#"class="ai-summary""#).count(), 1);
        assert!(html.contains("<p>A kernel written for fun.</p>"));
        assert!(!render_card(&empty_summary).contains("ai-summary"));
        assert!(!render_card(&without_summary).contains("ai-summary"));
    }

    #[test]
    fn test_topics_capped_at_five() {
        let mut repo = fixtures::repository(1, "topical");
        repo.topics = (1..=7).map(|i| format!("topic-{i}")).collect();

        let html = render_card(&repo);
        assert_eq!(html.matches(r#"class="topic""#).count(), 5);
        assert!(html.contains("topic-5"));
        assert!(!html.contains("topic-6"));

        repo.topics.clear();
        assert!(!render_card(&repo).contains(r#"class="topics""#));
    }

    #[test]
    fn test_optional_card_blocks() {
        let mut repo = fixtures::repository(7, "demo");
        let html = render_card(&repo);
        assert!(!html.contains(r#"class="description""#));
        assert!(!html.contains("View Demo"));
        assert!(!html.contains(r#"class="language""#));
        assert!(html.contains(r#"<span class="stars">0</span><span class="forks">0</span>"#));

        repo.description = Some("Demo <app>".to_string());
        repo.homepage = Some("https://demo.example.com".to_string());
        repo.language = Some("Rust".to_string());
        repo.stargazers_count = 1200;
        repo.forks_count = 34;
        let html = render_card(&repo);
        assert!(html.contains(r#"<p class="description">Demo &lt;app&gt;</p>"#));
        assert!(html.contains(r#"href="https://demo.example.com""#));
        assert!(html.contains(r#"<span class="language">Rust</span>"#));
        assert!(html.contains(r#"<span class="stars">1200</span><span class="forks">34</span>"#));
    }

    #[test]
    fn test_cards_keep_backend_order() {
        let html = render(&fixtures::response(vec![
            fixtures::repository(30, "zeta"),
            fixtures::repository(10, "alpha"),
            fixtures::repository(20, "mid"),
        ]));

        let zeta = html.find(">zeta</a>").unwrap();
        let alpha = html.find(">alpha</a>").unwrap();
        let mid = html.find(">mid</a>").unwrap();
        assert!(zeta < alpha && alpha < mid);
    }

    #[test]
    fn test_reset_control_posts_back() {
        let html = render(&fixtures::response(Vec::new()));
        assert!(html.contains(r#"<form method="post" action="/reset">"#));
        assert!(html.contains("Generate Another"));
        assert!(html.contains("Successfully generated website for octocat"));
    }
}
