use crate::application::read_models::{
    CatalogReadModel, DependencyGroupView, DependencyView, IndexMetadataView, PackageView,
};
use crate::ports::outbound::IndexFormatter;
use crate::shared::Result;

/// Default page title
pub const DEFAULT_TITLE: &str = "Debian Packages";

/// Rendering options for the HTML pages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlOptions {
    /// `<title>` of the index page, and suffix of package page titles
    pub title: String,
    /// `<h1>` of the index page; defaults to "{title} ({status path})"
    pub heading: Option<String>,
    /// Prepended to the url-encoded package name in every hyperlink
    pub link_prefix: String,
    /// Whether dependency version constraints are printed
    pub show_version_constraints: bool,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            heading: None,
            link_prefix: String::new(),
            show_version_constraints: false,
        }
    }
}

/// HtmlFormatter adapter rendering the package index and package pages
///
/// Installed packages are hyperlinks; dependencies that are not installed
/// are plain text. Every piece of text taken from the status file is
/// HTML-escaped.
pub struct HtmlFormatter {
    options: HtmlOptions,
}

impl HtmlFormatter {
    pub fn new() -> Self {
        Self::with_options(HtmlOptions::default())
    }

    pub fn with_options(options: HtmlOptions) -> Self {
        Self { options }
    }

    /// Escapes the characters that are significant in HTML text and attributes
    fn escape_html(text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&#39;"),
                _ => escaped.push(c),
            }
        }
        escaped
    }

    fn package_href(&self, name: &str) -> String {
        format!(
            "{}{}",
            Self::escape_html(&self.options.link_prefix),
            urlencoding::encode(name)
        )
    }

    fn package_link(&self, name: &str) -> String {
        format!(
            "<a href=\"{}\">{}</a>",
            self.package_href(name),
            Self::escape_html(name)
        )
    }

    fn index_heading(&self, metadata: &IndexMetadataView) -> String {
        match &self.options.heading {
            Some(heading) => heading.clone(),
            None => format!("{} ({})", self.options.title, metadata.source_path),
        }
    }
}

impl Default for HtmlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl HtmlFormatter {
    fn render_page(&self, output: &mut String, title: &str, heading: &str, body: &str) {
        output.push_str("<!DOCTYPE html>\n");
        output.push_str("<html lang=\"en\">\n");
        output.push_str("<head>\n");
        output.push_str("<meta charset=\"utf-8\">\n");
        output.push_str(&format!("<title>{}</title>\n", Self::escape_html(title)));
        output.push_str("</head>\n");
        output.push_str("<body>\n");
        output.push_str(&format!("<h1>{}</h1>\n", Self::escape_html(heading)));
        output.push_str(body);
        output.push_str("</body>\n");
        output.push_str("</html>\n");
    }

    fn render_footer(&self, output: &mut String, metadata: &IndexMetadataView) {
        output.push_str(&format!(
            "<footer><p>Generated by {} {} at {}</p></footer>\n",
            Self::escape_html(&metadata.tool_name),
            Self::escape_html(&metadata.tool_version),
            Self::escape_html(&metadata.timestamp)
        ));
    }

    fn render_name_list(&self, output: &mut String, names: &[&str]) {
        output.push_str("<ul>\n");
        for name in names {
            output.push_str(&format!("<li>{}</li>\n", self.package_link(name)));
        }
        output.push_str("</ul>\n");
    }

    fn render_fields(&self, output: &mut String, package: &PackageView) {
        let fields = [
            ("Version", &package.version),
            ("Architecture", &package.architecture),
            ("Section", &package.section),
            ("Maintainer", &package.maintainer),
        ];
        if fields.iter().all(|(_, value)| value.is_none()) {
            return;
        }

        output.push_str("<dl>\n");
        for (label, value) in fields {
            if let Some(value) = value {
                output.push_str(&format!(
                    "<dt>{}</dt><dd>{}</dd>\n",
                    label,
                    Self::escape_html(value)
                ));
            }
        }
        output.push_str("</dl>\n");
    }

    fn render_description(&self, output: &mut String, package: &PackageView) {
        if let Some(synopsis) = &package.synopsis {
            output.push_str(&format!(
                "<p><strong>{}</strong></p>\n",
                Self::escape_html(synopsis)
            ));
        }
        for paragraph in &package.description_paragraphs {
            output.push_str(&format!("<p>{}</p>\n", Self::escape_html(paragraph)));
        }
    }

    fn render_dependency(&self, dependency: &DependencyView) -> String {
        let mut rendered = if dependency.installed {
            self.package_link(&dependency.name)
        } else {
            Self::escape_html(&dependency.name)
        };
        if self.options.show_version_constraints {
            if let Some(constraint) = &dependency.version_constraint {
                rendered.push_str(&format!(" ({})", Self::escape_html(constraint)));
            }
        }
        rendered
    }

    fn render_dependencies(&self, output: &mut String, depends: &[DependencyGroupView]) {
        output.push_str("<h2>Dependencies</h2>\n");
        if depends.is_empty() {
            output.push_str("<p>None</p>\n");
            return;
        }

        output.push_str("<ul>\n");
        for group in depends {
            let alternatives: Vec<String> = group
                .alternatives
                .iter()
                .map(|dependency| self.render_dependency(dependency))
                .collect();
            output.push_str(&format!("<li>{}</li>\n", alternatives.join(" | ")));
        }
        output.push_str("</ul>\n");
    }

    fn render_reverse_dependencies(&self, output: &mut String, reverse_depends: &[String]) {
        output.push_str("<h2>Reverse Dependencies</h2>\n");
        if reverse_depends.is_empty() {
            output.push_str("<p>None</p>\n");
            return;
        }

        let names: Vec<&str> = reverse_depends.iter().map(String::as_str).collect();
        self.render_name_list(output, &names);
    }
}

impl IndexFormatter for HtmlFormatter {
    fn format_index(&self, model: &CatalogReadModel) -> Result<String> {
        let mut body = String::new();
        self.render_name_list(&mut body, &model.package_names());
        self.render_footer(&mut body, &model.metadata);

        let mut output = String::new();
        self.render_page(
            &mut output,
            &self.options.title,
            &self.index_heading(&model.metadata),
            &body,
        );
        Ok(output)
    }

    fn format_package(&self, model: &CatalogReadModel, package: &PackageView) -> Result<String> {
        let mut body = String::new();
        self.render_fields(&mut body, package);
        self.render_description(&mut body, package);
        self.render_dependencies(&mut body, &package.depends);
        self.render_reverse_dependencies(&mut body, &package.reverse_depends);
        self.render_footer(&mut body, &model.metadata);

        let mut output = String::new();
        self.render_page(
            &mut output,
            &format!("{} - {}", package.name, self.options.title),
            &package.name,
            &body,
        );
        Ok(output)
    }
}
