use std::fs;
use std::path::Path;

use mdsite::fs::DiskFs;
use mdsite::{Error, generate_pages_recursive, initialize_output};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const TEMPLATE: &str = "<!DOCTYPE html>
<html>
<head>
    <title>{{ Title }}</title>
    <link href=\"/index.css\" rel=\"stylesheet\">
</head>
<body>
    <article>{{ Content }}</article>
</body>
</html>
";

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn site() -> TempDir {
    let temp_dir = tempfile::tempdir().unwrap();
    let root = temp_dir.path();
    write(root, "template.html", TEMPLATE);
    write(root, "static/index.css", "body { margin: 0; }");
    write(root, "static/images/logo.png", "not really a png");
    write(
        root,
        "content/index.md",
        "# Tolkien Fan Club\n\n![logo](/images/logo.png)\n\n> All that is gold\n> does not glitter\n\n- [Blog](/blog/glorfindel)\n- _Contact_",
    );
    write(
        root,
        "content/blog/glorfindel/index.md",
        "# Why Glorfindel is More Impressive than Legolas\n\n```\nfn main() {}\n```\n\n1. first\n2. second",
    );
    temp_dir
}

#[test]
fn builds_site_on_disk() {
    let temp_dir = site();
    let root = temp_dir.path();
    let public = root.join("public");

    write(root, "public/stale.html", "stale");
    initialize_output(&DiskFs, &root.join("static"), &public).unwrap();
    let pages = generate_pages_recursive(
        &DiskFs,
        &root.join("content"),
        &root.join("template.html"),
        &public,
        "/fan-club/",
    )
    .unwrap();

    assert_eq!(
        pages,
        vec![
            public.join("blog/glorfindel/index.html"),
            public.join("index.html"),
        ]
    );
    assert!(!public.join("stale.html").exists());
    assert_eq!(
        fs::read_to_string(public.join("index.css")).unwrap(),
        "body { margin: 0; }"
    );
    assert!(public.join("images/logo.png").exists());

    let index = fs::read_to_string(public.join("index.html")).unwrap();
    assert!(index.contains("<title>Tolkien Fan Club</title>"));
    assert!(index.contains("<link href=\"/fan-club/index.css\" rel=\"stylesheet\">"));
    assert!(index.contains(
        "<article><h1>Tolkien Fan Club</h1><p><img src=\"/fan-club/images/logo.png\" alt=\"logo\"></img></p><blockquote>All that is gold does not glitter</blockquote><ul><li><a href=\"/fan-club/blog/glorfindel\">Blog</a></li><li><i>Contact</i></li></ul></article>"
    ));

    let post = fs::read_to_string(public.join("blog/glorfindel/index.html")).unwrap();
    assert!(post.contains("<pre><code>fn main() {}\n</code></pre><ol><li>first</li><li>second</li></ol>"));
}

#[test]
fn missing_content_dir_is_reported() {
    let temp_dir = tempfile::tempdir().unwrap();
    let result = generate_pages_recursive(
        &DiskFs,
        &temp_dir.path().join("content"),
        &temp_dir.path().join("template.html"),
        &temp_dir.path().join("public"),
        "/",
    );
    assert!(matches!(result, Err(Error::NotFound(_))));
}
