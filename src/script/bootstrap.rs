//! Bootstrap script generation and the equivalent in-process boot sequence.

use minijinja::{Environment, Error, ErrorKind};
use serde::Serialize;

use super::filters::register_filters;
use crate::controller::{DocumentRoot, PreferenceStore};
use crate::theme::{ThemeDefinition, ThemeRegistry};
use crate::{STORAGE_KEY, THEME_ATTRIBUTE};

/// The snippet template. Every identifier is interpolated through `js_str`,
/// and the membership check is expanded from the registry's theme list.
///
/// The storage read and the write-back are wrapped in separate `try` blocks:
/// a denied read must still apply the default theme, and a denied write must
/// not undo the attribute that was already set.
const BOOTSTRAP_TEMPLATE: &str = "(function(){var stored=null;try{stored=window.localStorage.getItem({{ key | js_str }});}catch(e){}if(!({% for theme in themes %}stored==={{ theme.value | js_str }}{% if not loop.last %}||{% endif %}{% endfor %}))stored={{ fallback | js_str }};document.documentElement.setAttribute({{ attribute | js_str }},stored);try{window.localStorage.setItem({{ key | js_str }},stored);}catch(e){}})();";

#[derive(Serialize)]
struct ScriptContext<'a> {
    themes: &'a [ThemeDefinition],
    fallback: &'a str,
    key: &'a str,
    attribute: &'a str,
}

/// The inline script that applies the stored theme before first paint.
///
/// The page-rendering layer injects [`script_tag`](Self::script_tag) into the
/// document head exactly once per page load, before any other render-blocking
/// resource. The snippet runs synchronously and never throws: a failed
/// storage read degrades to the default theme, a failed write-back is
/// ignored.
///
/// # Example
///
/// ```rust
/// use prepaint::{default_registry, BootstrapScript};
///
/// let script = BootstrapScript::generate(default_registry()).unwrap();
/// assert!(script.as_str().contains("'light'"));
/// assert!(script.as_str().contains("'dark'"));
/// assert!(script.script_tag().starts_with("<script>"));
/// ```
#[derive(Debug, Clone)]
pub struct BootstrapScript {
    script: String,
}

impl BootstrapScript {
    /// Generates the snippet from a registry.
    ///
    /// The registry is the single source of truth: adding a theme and
    /// regenerating is all it takes to keep the snippet's membership check
    /// current.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry fails validation or the template
    /// fails to render.
    pub fn generate(registry: &ThemeRegistry) -> Result<Self, Error> {
        registry
            .validate()
            .map_err(|e| Error::new(ErrorKind::InvalidOperation, e.to_string()))?;

        let mut env = Environment::new();
        register_filters(&mut env);
        env.add_template("bootstrap.js", BOOTSTRAP_TEMPLATE)?;
        let script = env.get_template("bootstrap.js")?.render(ScriptContext {
            themes: registry.themes(),
            fallback: registry.default_theme(),
            key: STORAGE_KEY,
            attribute: THEME_ATTRIBUTE,
        })?;
        Ok(Self { script })
    }

    /// Returns the raw snippet text.
    pub fn as_str(&self) -> &str {
        &self.script
    }

    /// Returns the snippet wrapped in a `<script>` element for head
    /// injection.
    pub fn script_tag(&self) -> String {
        format!("<script>{}</script>", self.script)
    }
}

impl std::fmt::Display for BootstrapScript {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.script)
    }
}

/// Runs the boot sequence against injected ports instead of a browser.
///
/// Performs the same four steps as the generated snippet: read the stored
/// preference (failure reads as absent), resolve it through the registry,
/// apply it to the document root, and write it back (failure ignored).
/// Returns the resolved identifier.
pub fn run_bootstrap<S, D>(registry: &ThemeRegistry, store: &mut S, root: &mut D) -> String
where
    S: PreferenceStore,
    D: DocumentRoot,
{
    let stored = store.load().unwrap_or(None);
    let resolved = registry.resolve(stored.as_deref()).to_string();
    root.set_theme(&resolved);
    let _ = store.save(&resolved);
    resolved
}
