use std::path::{Path, PathBuf};

use sprig_core::{ArtifactKind, GeneratedFile, camelize, classify, dasherize};

use super::sibling_import_path;

/// A routed controller stub, injected with its sibling services.
pub struct ControllerTs {
    name: String,
    services: Vec<String>,
}

impl ControllerTs {
    pub fn new(name: impl Into<String>, services: Vec<String>) -> Self {
        Self {
            name: name.into(),
            services,
        }
    }
}

impl GeneratedFile for ControllerTs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(ArtifactKind::Controller.file_name(&self.name))
    }

    fn render(&self) -> String {
        let mut out = String::new();
        if self.services.is_empty() {
            out.push_str("import { Controller } from '@nestjs/common';\n");
        } else {
            out.push_str("import { Controller, Inject } from '@nestjs/common';\n");
        }
        out.push_str("import { BaseController } from 'src/common';\n");
        for service in &self.services {
            out.push_str(&format!(
                "import {{ {} }} from '{}';\n",
                service,
                sibling_import_path(service, "Service", "service")
            ));
        }
        out.push('\n');
        out.push_str(&format!("@Controller('{}')\n", dasherize(&self.name)));
        out.push_str(&format!(
            "export class {}Controller extends BaseController {{\n",
            classify(&self.name)
        ));
        for service in &self.services {
            out.push_str(&format!(
                "  @Inject({}) private readonly {}: {};\n",
                service,
                camelize(service),
                service
            ));
        }
        out.push_str("}\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path() {
        let file = ControllerTs::new("UserProfile", vec![]);
        assert_eq!(
            file.path(Path::new("src/user-profile")),
            PathBuf::from("src/user-profile/user-profile.controller.ts")
        );
    }

    #[test]
    fn test_render_without_services() {
        let out = ControllerTs::new("foo", vec![]).render();

        assert!(out.contains("import { Controller } from '@nestjs/common';"));
        assert!(!out.contains("Inject"));
        assert!(out.contains("@Controller('foo')"));
        assert!(out.contains("export class FooController extends BaseController {"));
    }

    #[test]
    fn test_render_injects_siblings() {
        let out = ControllerTs::new("foo", vec!["FooService".to_string()]).render();

        assert!(out.contains("import { Controller, Inject } from '@nestjs/common';"));
        assert!(out.contains("import { FooService } from './foo.service';"));
        assert!(out.contains("@Inject(FooService) private readonly fooService: FooService;"));
    }
}
