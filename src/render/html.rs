use super::view::ListView;
use handlebars::Handlebars;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Template error: {0}")]
    TemplateError(#[from] Box<handlebars::TemplateError>),
    #[error("Render error: {0}")]
    RenderError(#[from] handlebars::RenderError),
}

const PAGE_TEMPLATE_NAME: &str = "page";

/// Standalone page. `{{...}}` escapes HTML, so names and links are always
/// plain text.
const PAGE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{{heading}}</title>
</head>
<body>
<h2 id="list-title">{{heading}}</h2>
{{#if empty_state}}
<p id="emptyMsg">{{empty_state}}</p>
{{/if}}
<ul id="wishList">
{{#each items}}
  <li class="wish-item" data-id="{{id}}">
    <img class="wish-thumb" alt="{{alt}}" src="{{thumbnail}}">
    <div class="wish-body">
      <p class="wish-title">{{title}}</p>
{{#if link.href}}
      <a class="wish-link" href="{{link.href}}" target="{{link.target}}" rel="{{link.rel}}">{{link.text}}</a>
{{else}}
      <a class="wish-link" href="#" onclick="return false;">{{link.text}}</a>
{{/if}}
      <div class="wish-meta">
        <div class="item-actions">
{{#each actions}}
          <button class="{{name}}" data-action="{{name}}" data-id="{{../id}}">{{label}}</button>
{{/each}}
        </div>
      </div>
    </div>
  </li>
{{/each}}
</ul>
</body>
</html>
"##;

/// Renders [`ListView`]s as HTML documents.
pub struct HtmlRenderer {
    handlebars: Handlebars<'static>,
}

impl HtmlRenderer {
    pub fn new() -> Result<Self, RenderError> {
        let mut handlebars = Handlebars::new();
        handlebars
            .register_template_string(PAGE_TEMPLATE_NAME, PAGE_TEMPLATE)
            .map_err(Box::new)?;
        Ok(Self { handlebars })
    }

    pub fn render_page(&self, view: &ListView) -> Result<String, RenderError> {
        Ok(self.handlebars.render(PAGE_TEMPLATE_NAME, view)?)
    }
}

impl std::fmt::Debug for HtmlRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HtmlRenderer").finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "html_tests.rs"]
mod tests;
