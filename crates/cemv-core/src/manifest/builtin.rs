//! Builtin manifest: the expected layout of the college-event-manager project.

use super::{Manifest, ManifestCategory};

/// The embedded manifest the tool ships with.
///
/// Category names and relative path strings are the project's canonical
/// expected layout; changing them changes what a default `cemv check`
/// verifies.
pub fn builtin() -> Manifest {
    let categories = vec![
        category(
            "Root Documentation",
            &[
                "README.md",
                "QUICK_START.md",
                "INSTALLATION.md",
                "ARCHITECTURE.md",
                "CODE_QUALITY.md",
                "FEATURES.md",
                "PROJECT_SUMMARY.md",
                "COMPLETION_CHECKLIST.md",
                "FILE_INDEX.md",
                "START_HERE.md",
                "DELIVERY_SUMMARY.md",
            ],
        ),
        category(
            "Backend",
            &[
                "backend/server.js",
                "backend/seed.js",
                "backend/package.json",
                "backend/.env",
                "backend/models/User.js",
                "backend/models/Event.js",
                "backend/models/Registration.js",
                "backend/routes/auth.js",
                "backend/routes/events.js",
                "backend/routes/registrations.js",
                "backend/middleware/auth.js",
            ],
        ),
        category(
            "Frontend",
            &[
                "frontend/index.html",
                "frontend/package.json",
                "frontend/vite.config.js",
                "frontend/tailwind.config.js",
                "frontend/postcss.config.js",
                "frontend/src/App.jsx",
                "frontend/src/main.jsx",
                "frontend/src/index.css",
                "frontend/src/api.js",
                "frontend/src/AuthContext.js",
                "frontend/src/components/Button.jsx",
                "frontend/src/components/Card.jsx",
                "frontend/src/components/Header.jsx",
                "frontend/src/hooks/useAnimation.js",
                "frontend/src/pages/LoginSignup.jsx",
                "frontend/src/pages/EventsList.jsx",
                "frontend/src/pages/EventDetails.jsx",
                "frontend/src/pages/StudentDashboard.jsx",
                "frontend/src/pages/AdminDashboard.jsx",
                "frontend/src/pages/CreateEvent.jsx",
                "frontend/src/pages/EditEvent.jsx",
            ],
        ),
        category("Setup Scripts", &["setup.bat", "setup.sh"]),
    ];

    Manifest { categories }
}

fn category(name: &str, paths: &[&str]) -> ManifestCategory {
    ManifestCategory {
        name: name.to_string(),
        paths: paths.iter().map(|p| p.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_category_names_and_order() {
        let m = builtin();
        let names: Vec<&str> = m.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            ["Root Documentation", "Backend", "Frontend", "Setup Scripts"]
        );
    }

    #[test]
    fn builtin_expected_counts() {
        let m = builtin();
        let lens: Vec<usize> = m.categories.iter().map(|c| c.paths.len()).collect();
        assert_eq!(lens, [11, 11, 21, 2]);
        assert_eq!(m.total_expected(), 45);
    }

    #[test]
    fn builtin_paths_are_relative() {
        let m = builtin();
        for c in &m.categories {
            for p in &c.paths {
                assert!(!p.starts_with('/'), "absolute path in manifest: {p}");
                assert!(!p.contains('\\'), "backslash in manifest path: {p}");
            }
        }
    }

    #[test]
    fn builtin_spot_check_paths() {
        let m = builtin();
        assert_eq!(m.categories[0].paths[0], "README.md");
        assert_eq!(m.categories[1].paths[3], "backend/.env");
        assert_eq!(m.categories[2].paths[20], "frontend/src/pages/EditEvent.jsx");
        assert_eq!(m.categories[3].paths, ["setup.bat", "setup.sh"]);
    }
}
