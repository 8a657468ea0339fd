//! Markdown rendering with per-node overrides
//!
//! Transforms a post body into HTML through a pulldown-cmark event stream,
//! overriding three node kinds: fenced code blocks (syntax highlighting by
//! language tag), images (post-image path rewriting), and emphasis
//! (explicit italic styling).

use lazy_static::lazy_static;
use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use regex::Regex;
use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

lazy_static! {
    /// Language tag, bare (`python`) or as a class marker (`language-python`)
    static ref LANG_MARKER: Regex = Regex::new(r"^(?:language-)?([A-Za-z0-9_#+-]+)").unwrap();
}

/// Markdown renderer with syntax highlighting and path rewriting
pub struct MarkdownRenderer {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    theme_name: String,
    image_prefix: String,
    image_root: String,
}

impl MarkdownRenderer {
    /// Create a renderer with the default theme and image paths
    pub fn new() -> Self {
        Self::with_options("base16-ocean.dark", "/public/post/imgs/", "/")
    }

    /// Create with custom settings
    pub fn with_options(theme: &str, image_prefix: &str, image_root: &str) -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            theme_name: theme.to_string(),
            image_prefix: image_prefix.to_string(),
            image_root: image_root.to_string(),
        }
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> String {
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_GFM;
        let parser = Parser::new_ext(markdown, options);

        let mut events: Vec<Event> = Vec::new();
        let mut in_code_block = false;
        let mut code_lang: Option<String> = None;
        let mut code_buf = String::new();

        for event in parser {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    in_code_block = true;
                    code_buf.clear();
                    code_lang = match kind {
                        CodeBlockKind::Fenced(info) => extract_lang(&info),
                        CodeBlockKind::Indented => None,
                    };
                }
                Event::End(TagEnd::CodeBlock) => {
                    in_code_block = false;
                    let rendered = self.render_code_block(&code_buf, code_lang.take().as_deref());
                    events.push(Event::Html(CowStr::from(rendered)));
                }
                Event::Text(text) if in_code_block => {
                    code_buf.push_str(&text);
                }
                Event::Start(Tag::Image {
                    link_type,
                    dest_url,
                    title,
                    id,
                }) => {
                    let dest = self.rewrite_image_path(&dest_url);
                    events.push(Event::Start(Tag::Image {
                        link_type,
                        dest_url: CowStr::from(dest),
                        title,
                        id,
                    }));
                }
                Event::Start(Tag::Emphasis) => {
                    events.push(Event::Html(CowStr::from(
                        r#"<span style="font-style: italic;">"#,
                    )));
                }
                Event::End(TagEnd::Emphasis) => {
                    events.push(Event::Html(CowStr::from("</span>")));
                }
                other => events.push(other),
            }
        }

        let mut html_output = String::new();
        html::push_html(&mut html_output, events.into_iter());
        html_output
    }

    /// Render one code block, highlighted when the language is recognized
    fn render_code_block(&self, code: &str, lang: Option<&str>) -> String {
        let code = clean_code_text(code);

        let syntax = lang.and_then(|l| {
            self.syntax_set
                .find_syntax_by_token(l)
                .or_else(|| self.syntax_set.find_syntax_by_extension(l))
        });

        match (syntax, lang) {
            (Some(syntax), Some(lang)) => {
                let theme = self
                    .theme_set
                    .themes
                    .get(&self.theme_name)
                    .unwrap_or_else(|| {
                        self.theme_set
                            .themes
                            .values()
                            .next()
                            .expect("No themes available")
                    });

                match highlighted_html_for_string(&code, &self.syntax_set, syntax, theme) {
                    Ok(highlighted) => format!(
                        r#"<div class="highlight language-{}">{}</div>"#,
                        lang, highlighted
                    ),
                    Err(_) => plain_code_block(&code),
                }
            }
            // Unrecognized or missing tag: no color scheme
            _ => plain_code_block(&code),
        }
    }

    fn rewrite_image_path(&self, src: &str) -> String {
        match src.strip_prefix(&self.image_prefix) {
            Some(rest) => format!("{}{}", self.image_root, rest),
            None => src.to_string(),
        }
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the language tag from a fence info string
fn extract_lang(info: &str) -> Option<String> {
    let first = info.split_whitespace().next()?;
    LANG_MARKER
        .captures(first)
        .map(|caps| caps[1].to_string())
}

/// Strip trailing newlines and remove the forced-line-break placeholders
/// posts embed to control spacing inside code blocks
fn clean_code_text(code: &str) -> String {
    code.replace("\n&nbsp;\n", "")
        .replace("\n&nbsp\n", "")
        .trim_end_matches('\n')
        .to_string()
}

fn plain_code_block(code: &str) -> String {
    format!("<pre><code>{}</code></pre>", escape_html(code))
}

/// Simple HTML escaping
pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
