use std::path::Path;

use tera::Tera;
use tracing::{debug, info};

use crate::{config::Arrows, error::Result, links::SectionLinks, navigation};

const BUILTIN_TEMPLATES: &[(&str, &str)] = &[(
    navigation::TEMPLATE_NAME,
    include_str!("templates/sectionnavigation.html"),
)];

/// What a component needs from the renderer that is drawing it.
pub trait Renderer {
    fn larrow(&self) -> String;

    fn rarrow(&self) -> String;
}

/// A component that is rendered through one fixed template.
pub trait NamedTemplatable {
    fn template_name(&self) -> &'static str;

    fn template_context(
        &mut self,
        output: &dyn Renderer,
        links: &dyn SectionLinks,
    ) -> Result<tera::Context>;
}

pub struct TemplateRenderer {
    tera: Tera,
    arrows: Arrows,
}

impl TemplateRenderer {
    pub fn new(arrows: Arrows) -> Result<Self> {
        Self::with_tera(Tera::default(), arrows)
    }

    /// Loads every template below `template_dir`. Built-in templates are
    /// only added where the directory does not provide one of the same name.
    pub fn with_template_dir(template_dir: &Path, arrows: Arrows) -> Result<Self> {
        if !template_dir.is_dir() {
            debug!("no template directory at {}", template_dir.display());
            return Self::new(arrows);
        }

        let tera = Tera::new(&template_dir.join("**").join("*").to_string_lossy())?;

        info!(
            "loaded templates: {:?}",
            tera.get_template_names().collect::<Vec<_>>()
        );

        Self::with_tera(tera, arrows)
    }

    fn with_tera(mut tera: Tera, arrows: Arrows) -> Result<Self> {
        for (name, source) in BUILTIN_TEMPLATES {
            if tera.get_template_names().any(|n| n == *name) {
                continue;
            }
            tera.add_raw_template(name, source)?;
        }

        Ok(Self { tera, arrows })
    }

    pub fn render(
        &self,
        component: &mut dyn NamedTemplatable,
        links: &dyn SectionLinks,
    ) -> Result<String> {
        let ctx = component.template_context(self, links)?;

        Ok(self.tera.render(component.template_name(), &ctx)?)
    }
}

impl Renderer for TemplateRenderer {
    fn larrow(&self) -> String {
        self.arrows.left.clone()
    }

    fn rarrow(&self) -> String {
        self.arrows.right.clone()
    }
}
