use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::fs::Filesystem;

const TITLE_PLACEHOLDER: &str = "{{ Title }}";
const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Text of the first `# ` heading line, trimmed.
pub fn extract_title(markdown: &str) -> Result<String> {
    markdown
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .find_map(|line| line.strip_prefix("# "))
        .map(|title| title.trim().to_string())
        .ok_or(Error::MissingTitle)
}

/// Fill the template placeholders and point root-relative `href`/`src`
/// attributes at `basepath`.
pub fn render_page(template: &str, title: &str, content: &str, basepath: &str) -> String {
    template
        .replace(TITLE_PLACEHOLDER, title)
        .replace(CONTENT_PLACEHOLDER, content)
        .replace("href=\"/", &format!("href=\"{basepath}"))
        .replace("src=\"/", &format!("src=\"{basepath}"))
}

/// Render one markdown document into a full page.
pub fn markdown_to_page(markdown: &str, template: &str, basepath: &str) -> Result<String> {
    let title = extract_title(markdown)?;
    let content = crate::markdown_to_html(markdown)?;
    Ok(render_page(template, &title, &content, basepath))
}

/// Generate `dest_dir/<stem>.html` from the markdown file at `src`.
pub fn generate_page(
    fs: &impl Filesystem,
    src: &Path,
    template_path: &Path,
    dest_dir: &Path,
    basepath: &str,
) -> Result<PathBuf> {
    let stem = src
        .file_stem()
        .ok_or_else(|| Error::NotFound(src.to_path_buf()))?;
    let mut file_name = stem.to_os_string();
    file_name.push(".html");
    let target = dest_dir.join(file_name);

    log::info!(
        "Generating page from {} to {} using {}",
        src.display(),
        target.display(),
        template_path.display()
    );

    let markdown = fs.read_text(src)?;
    let template = fs.read_text(template_path)?;
    let page = markdown_to_page(&markdown, &template, basepath)?;

    fs.write_text(&target, &page)?;
    Ok(target)
}

fn is_markdown(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "md")
}

/// Mirror `content_dir` into `dest_dir`, rendering every `.md` file.
/// Returns the pages written, in traversal order.
pub fn generate_pages_recursive(
    fs: &impl Filesystem,
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
    basepath: &str,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    if !fs.exists(dest_dir) {
        fs.create_dir_all(dest_dir)?;
    }

    for name in fs.list_entries(content_dir)? {
        let src = content_dir.join(&name);

        if fs.is_dir(&src) {
            written.extend(generate_pages_recursive(
                fs,
                &src,
                template_path,
                &dest_dir.join(&name),
                basepath,
            )?);
        } else if is_markdown(&src) {
            written.push(generate_page(fs, &src, template_path, dest_dir, basepath)?);
        } else {
            log::debug!("Skipping non-markdown file {}", src.display());
        }
    }

    Ok(written)
}

/// Recursively copy `src` into `dst`, creating directories as needed.
pub fn copy_directory(fs: &impl Filesystem, src: &Path, dst: &Path) -> Result<()> {
    if !fs.exists(dst) {
        fs.create_dir_all(dst)?;
    }

    for name in fs.list_entries(src)? {
        let from = src.join(&name);
        let to = dst.join(&name);
        if fs.is_dir(&from) {
            copy_directory(fs, &from, &to)?;
        } else {
            log::debug!("Copying {} to {}", from.display(), to.display());
            fs.copy_file(&from, &to)?;
        }
    }

    Ok(())
}

/// Wipe `output_dir` and seed it with the contents of `static_dir`.
pub fn initialize_output(fs: &impl Filesystem, static_dir: &Path, output_dir: &Path) -> Result<()> {
    if fs.exists(output_dir) {
        log::info!("Removing {}", output_dir.display());
        fs.remove_dir_all(output_dir)?;
    }

    log::info!(
        "Copying static files from {} to {}",
        static_dir.display(),
        output_dir.display()
    );
    copy_directory(fs, static_dir, output_dir)
}
