use std::path::{Path, PathBuf};

use sprig_core::{ArtifactKind, GeneratedFile, classify};

/// An injectable service stub.
pub struct ServiceTs {
    name: String,
}

impl ServiceTs {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl GeneratedFile for ServiceTs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(ArtifactKind::Service.file_name(&self.name))
    }

    fn render(&self) -> String {
        format!(
            "import {{ Injectable }} from '@nestjs/common';\nimport {{ BaseService, CatchServiceErrors }} from 'src/common';\n\n@Injectable()\n@CatchServiceErrors()\nexport class {}Service extends BaseService {{\n}}\n",
            classify(&self.name)
        )
    }
}
