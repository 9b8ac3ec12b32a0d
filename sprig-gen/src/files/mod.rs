//! Artifact templates, one struct per generated file.

mod controller_ts;
mod module_ts;
mod service_ts;

pub use controller_ts::ControllerTs;
pub use module_ts::ModuleTs;
pub use service_ts::ServiceTs;

use sprig_core::dasherize;

/// Relative import path (`./<dash>.<stem>`) for a sibling symbol.
///
/// The symbol's kind suffix is stripped before dasherizing, so
/// `UserProfileService` becomes `./user-profile.service`.
fn sibling_import_path(symbol: &str, suffix: &str, stem: &str) -> String {
    let base = symbol.strip_suffix(suffix).unwrap_or(symbol);
    format!("./{}.{}", dasherize(base), stem)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sibling_import_path() {
        assert_eq!(
            sibling_import_path("UserProfileService", "Service", "service"),
            "./user-profile.service"
        );
        assert_eq!(
            sibling_import_path("AuthController", "Controller", "controller"),
            "./auth.controller"
        );
    }
}
