use std::path::{Path, PathBuf};

use sprig_core::{ArtifactKind, GeneratedFile, classify};

use super::sibling_import_path;

/// An aggregator module wiring up the directory's controllers and services.
///
/// Rendered from scratch on every run: its member lists always reflect the
/// sibling files that exist at generation time.
pub struct ModuleTs {
    name: String,
    controllers: Vec<String>,
    services: Vec<String>,
}

impl ModuleTs {
    pub fn new(name: impl Into<String>, controllers: Vec<String>, services: Vec<String>) -> Self {
        Self {
            name: name.into(),
            controllers,
            services,
        }
    }
}

impl GeneratedFile for ModuleTs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(ArtifactKind::Module.file_name(&self.name))
    }

    fn render(&self) -> String {
        let mut out = String::from("import { Module } from '@nestjs/common';\n");
        for controller in &self.controllers {
            out.push_str(&format!(
                "import {{ {} }} from '{}';\n",
                controller,
                sibling_import_path(controller, "Controller", "controller")
            ));
        }
        for service in &self.services {
            out.push_str(&format!(
                "import {{ {} }} from '{}';\n",
                service,
                sibling_import_path(service, "Service", "service")
            ));
        }
        out.push('\n');
        out.push_str("@Module({\n    imports: [],\n");
        if !self.controllers.is_empty() {
            out.push_str(&format!(
                "    controllers: [{}],\n",
                self.controllers.join(", ")
            ));
        }
        if !self.services.is_empty() {
            out.push_str(&format!("    providers: [{}],\n", self.services.join(", ")));
            out.push_str(&format!("    exports: [{}],\n", self.services.join(", ")));
        }
        out.push_str("})\n");
        out.push_str(&format!("export class {}Module {{}}\n", classify(&self.name)));
        out
    }
}
