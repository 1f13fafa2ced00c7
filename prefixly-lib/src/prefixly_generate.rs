use crate::error::Result;
use crate::options::PrefixlyOptions;
use crate::plugin::{register, Plugin};
use crate::style::{prefixly_css, printer};
use log::debug;

/// Minimal host: parse, run plugins in registration order, print.
#[derive(Default)]
pub struct StyleCompiler {
    plugins: Vec<Box<dyn Plugin>>,
    minify: bool,
}

impl StyleCompiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn minify(mut self, minify: bool) -> Self {
        self.minify = minify;
        self
    }

    pub fn add_plugin(&mut self, plugin: Box<dyn Plugin>) -> &mut Self {
        self.plugins.push(plugin);
        self
    }

    pub fn compile(&mut self, css_content: &str) -> Result<String> {
        let mut root = prefixly_css::parse_stylesheet(css_content)?;
        for plugin in &mut self.plugins {
            debug!("running plugin {}", plugin.name());
            plugin.run(&mut root)?;
        }
        Ok(printer::print_stylesheet(&root, self.minify))
    }
}

pub mod prefixly {
    use super::*;

    /// Expand `css_content` with a freshly registered prefixly plugin.
    pub fn generate(css_content: &str, options: PrefixlyOptions, minify: bool) -> Result<String> {
        let mut compiler = StyleCompiler::new().minify(minify);
        compiler.add_plugin(register(options));
        compiler.compile(css_content)
    }
}
