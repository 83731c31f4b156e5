//! Custom URL template rendering.
//!
//! Users on hosts with a layout other than the built-in ones can supply their own URL
//! template. Placeholders in braces are replaced with values computed for the link.
//! Rendering is a single pass over the template into a pre-sized buffer.
//!
//! # Public API
//! - [`TemplateContext`]: Values available to a template
//! - [`render_template`]: Substitute placeholders in a template
//! - [`TEMPLATE_VARIABLES`]: The names a template may reference
//!
//! # Rules
//! - `{name}` is replaced by the value of a known variable
//! - Unknown or unset variables render as the empty string
//! - `\{` is an escape: the backslash and the brace are copied through untouched, and
//!   no placeholder starts there
//! - A `{` without a closing brace is copied literally

/// Variable names recognized in custom URL templates
pub const TEMPLATE_VARIABLES: [&str; 6] = [
    "username",
    "ref",
    "filepath",
    "folderName",
    "lineGithub",
    "lineBitbucket",
];

/// Context for template rendering
#[derive(Debug, Default, Clone)]
pub struct TemplateContext<'a> {
    pub username: Option<&'a str>,
    pub git_ref: Option<&'a str>,
    pub filepath: Option<&'a str>,
    pub folder_name: Option<&'a str>,
    pub line_github: Option<&'a str>,
    pub line_bitbucket: Option<&'a str>,
}

impl<'a> TemplateContext<'a> {
    fn lookup(&self, name: &str) -> Option<&'a str> {
        match name {
            "username" => self.username,
            "ref" => self.git_ref,
            "filepath" => self.filepath,
            "folderName" => self.folder_name,
            "lineGithub" => self.line_github,
            "lineBitbucket" => self.line_bitbucket,
            _ => None,
        }
    }
}

/// Render a template with context
pub fn render_template(template: &str, context: &TemplateContext) -> String {
    let estimated_capacity = template.len()
        + TEMPLATE_VARIABLES
            .iter()
            .map(|name| context.lookup(name).map_or(0, str::len))
            .sum::<usize>();

    let mut result = String::with_capacity(estimated_capacity);
    render_template_single_pass(template, context, &mut result);
    result
}

fn render_template_single_pass(template: &str, context: &TemplateContext, output: &mut String) {
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\\' if chars.peek() == Some(&'{') => {
                output.push(ch);
                if let Some(brace) = chars.next() {
                    output.push(brace);
                }
            }
            '{' => {
                let mut placeholder = String::new();
                let mut found_closing = false;

                for next_ch in chars.by_ref() {
                    if next_ch == '}' {
                        found_closing = true;
                        break;
                    }
                    placeholder.push(next_ch);
                }

                if found_closing {
                    match context.lookup(&placeholder) {
                        Some(value) => output.push_str(value),
                        None => log::debug!("Template placeholder '{{{placeholder}}}' is empty"),
                    }
                } else {
                    // No closing brace found, treat as literal
                    output.push(ch);
                    output.push_str(&placeholder);
                }
            }
            _ => output.push(ch),
        }
    }
}
