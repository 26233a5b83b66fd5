//! Selector markup rendering.

use minijinja::{Environment, Error, ErrorKind};
use serde::Serialize;

use crate::controller::{DocumentRoot, PreferenceStore, ThemeController};
use crate::theme::{ThemeDefinition, ThemeRegistry};

/// One option per registry entry in insertion order; the control stays
/// disabled until the controller mounts. The `.html` template name turns on
/// HTML auto-escaping for values and labels.
const SELECTOR_TEMPLATE: &str = r#"<label class="theme-select"><span class="theme-select-caption">Theme</span><select aria-label="Select theme"{% if disabled %} disabled{% endif %}>{% for theme in themes %}<option value="{{ theme.value }}"{% if theme.value == selection %} selected{% endif %}>{{ theme.label }}</option>{% endfor %}</select></label>"#;

#[derive(Serialize)]
struct SelectorContext<'a> {
    themes: &'a [ThemeDefinition],
    selection: &'a str,
    disabled: bool,
}

/// Renders the `<label>`/`<select>` pair for a registry.
///
/// The template is compiled once at construction; each render takes the
/// current selection and whether the control is still disabled (i.e. the
/// controller has not mounted yet).
///
/// # Example
///
/// ```rust
/// use prepaint::{default_registry, SelectorMarkup};
///
/// let markup = SelectorMarkup::new(default_registry()).unwrap();
/// let html = markup.render("light", true).unwrap();
/// assert!(html.contains(r#"aria-label="Select theme""#));
/// assert!(html.contains(" disabled"));
/// ```
pub struct SelectorMarkup {
    env: Environment<'static>,
    themes: Vec<ThemeDefinition>,
}

impl SelectorMarkup {
    /// Creates a renderer for the given registry.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry fails validation.
    pub fn new(registry: &ThemeRegistry) -> Result<Self, Error> {
        registry
            .validate()
            .map_err(|e| Error::new(ErrorKind::InvalidOperation, e.to_string()))?;

        let mut env = Environment::new();
        env.add_template("selector.html", SELECTOR_TEMPLATE)?;
        Ok(Self {
            env,
            themes: registry.themes().to_vec(),
        })
    }

    /// Renders the control with an explicit selection and disabled state.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render(&self, selection: &str, disabled: bool) -> Result<String, Error> {
        self.env.get_template("selector.html")?.render(SelectorContext {
            themes: &self.themes,
            selection,
            disabled,
        })
    }

    /// Renders the control reflecting a controller's current state.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_for<S, D>(&self, controller: &ThemeController<'_, S, D>) -> Result<String, Error>
    where
        S: PreferenceStore,
        D: DocumentRoot,
    {
        self.render(controller.selection(), !controller.is_mounted())
    }
}
