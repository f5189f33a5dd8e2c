//! Basic usage example for page-distill.
//!
//! Run with: `cargo run --example basic`

use page_distill::{extract_with_options, Options};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let html = r#"
        <!DOCTYPE html>
        <html lang="en">
        <head>
            <meta charset="UTF-8">
            <title>Example Article - My Blog</title>
            <meta name="author" content="Jane Smith">
            <meta name="description" content="An example article demonstrating extraction.">
            <script type="application/ld+json">{"@type":"BlogPosting"}</script>
        </head>
        <body>
            <nav>
                <a href="https://myblog.example/">Home</a>
                <a href="https://myblog.example/about">About</a>
            </nav>

            <article>
                <h1>Example Article Title</h1>
                <p>This is the first paragraph of the article. The engine extracts
                the main article text from the located content element.</p>
                <p>The second paragraph links to an
                <a href="https://research.example.org/paper">external paper</a>
                and embeds an image.</p>
                <img src="https://cdn.myblog.example/cover.png">
            </article>

            <div itemscope itemtype="https://schema.org/Comment">
                <span itemprop="author">first_reader</span>
                <p itemprop="text">Enjoyed this one.</p>
                <time itemprop="dateCreated" datetime="2024-01-16T09:00:00Z">Jan 16</time>
            </div>

            <footer><p>(c) 2024 My Blog.</p></footer>
        </body>
        </html>
    "#;

    let options = Options {
        url: Some("https://myblog.example/posts/example".to_string()),
        last_modified: Some("2024-01-15T12:00:00Z".to_string()),
        ..Options::default()
    };

    let result = extract_with_options(html, &options)?;

    println!("Title:       {}", result.title);
    println!("Author:      {}", result.author);
    println!("Description: {}", result.description);
    println!("Article?     {}", result.is_article);
    println!("Images:      {:?}", result.images);
    println!("Links:       {:?}", result.external_links);
    println!("Comments:    {}", result.comments.len());
    println!("\nBody text:\n{}", result.text);

    println!("\nAs JSON:\n{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
