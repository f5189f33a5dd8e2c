use page_distill::extract;

#[test]
fn comment_with_missing_date_is_kept() {
    let html = r#"
        <html><body>
            <article><p>body</p></article>
            <div itemscope itemtype="https://schema.org/Comment">
                <span itemprop="author">carol</span>
            </div>
        </body></html>
    "#;

    let result = extract(html).expect("extract");
    assert_eq!(result.comments.len(), 1);
    assert_eq!(result.comments[0].user, "carol");
    assert_eq!(result.comments[0].text, "");
    assert_eq!(result.comments[0].date_created, "");
}

#[test]
fn comments_keep_document_order_across_sections() {
    let html = r#"
        <html><body>
            <div itemscope itemtype="http://schema.org/Comment">
                <span itemprop="author">first</span>
                <p itemprop="text">one</p>
            </div>
            <article><p>body</p></article>
            <div itemscope itemtype="http://schema.org/Comment">
                <span itemprop="author">second</span>
                <p itemprop="text">two</p>
            </div>
        </body></html>
    "#;

    let result = extract(html).expect("extract");
    let users: Vec<&str> = result.comments.iter().map(|c| c.user.as_str()).collect();
    assert_eq!(users, vec!["first", "second"]);
}

#[test]
fn comment_fields_are_whitespace_normalized_except_timestamp() {
    let html = r#"
        <html><body>
            <div itemscope itemtype="https://schema.org/Comment">
                <span itemprop="author">  spaced   name </span>
                <p itemprop="text">
                    multi
                    line
                </p>
                <time itemprop="dateCreated" datetime=" 2024-05-02T08:30:00Z ">x</time>
            </div>
        </body></html>
    "#;

    let result = extract(html).expect("extract");
    assert_eq!(result.comments[0].user, "spaced name");
    assert_eq!(result.comments[0].text, "multi line");
    // timestamps pass through verbatim, surrounding whitespace included
    assert_eq!(result.comments[0].date_created, " 2024-05-02T08:30:00Z ");
}

#[test]
fn page_without_comment_markup_has_empty_list() {
    let html = r#"
        <html><body>
            <article><p>body</p></article>
            <div class="comments"><p>unstructured comment text</p></div>
        </body></html>
    "#;

    let result = extract(html).expect("extract");
    assert!(result.comments.is_empty());
}
