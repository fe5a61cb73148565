mod block;
mod builder;
mod config;
mod element;
mod error;
pub mod fs;
mod inline;
mod page;

pub use block::{Block, BlockKind, blocks, classify, segment};
pub use builder::fragment_to_element;
pub use config::{Config, SiteConfig};
pub use element::{Attributes, Element, Node};
pub use error::{Error, Result};
pub use inline::{
    FragmentKind, TextFragment, extract_images, extract_links, lex, split_delimiter, split_images,
    split_links,
};
pub use page::{
    copy_directory, extract_title, generate_page, generate_pages_recursive, initialize_output,
    markdown_to_page, render_page,
};

/// Build the element tree for a markdown document, rooted at a `div`.
pub fn markdown_to_element(markdown: &str) -> Result<Element> {
    builder::build(markdown)
}

/// Convert markdown to HTML: the rendered blocks, without the wrapping `div`.
pub fn markdown_to_html(markdown: &str) -> Result<String> {
    markdown_to_element(markdown)?.inner_html()
}
