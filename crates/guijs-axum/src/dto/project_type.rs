//! Project type DTOs.

use guijs_core::{LogoOrigin, ProjectType};
use serde::{Deserialize, Serialize};

/// A project type as served to the GUI.
///
/// The stored logo path never leaves the server; clients only see the
/// absolute URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectTypeDto {
    pub id: String,
    pub name: String,
    pub slug: String,
    /// Absolute logo URL.
    pub logo: String,
}

impl ProjectTypeDto {
    /// Build the DTO, resolving the logo against `origin`.
    pub fn new(project_type: &ProjectType, origin: &LogoOrigin) -> Self {
        Self {
            id: project_type.id.clone(),
            name: project_type.name.clone(),
            slug: project_type.slug.clone(),
            logo: origin.url_for(&project_type.logo_path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use guijs_core::DocumentRef;

    fn vue() -> ProjectType {
        ProjectType {
            id: "1".to_string(),
            name: "Vue".to_string(),
            slug: "vue".to_string(),
            logo_path: "/logos/vue.png".to_string(),
            reference: DocumentRef::new("projecttypes", "1"),
        }
    }

    #[test]
    fn test_dto_resolves_logo() {
        let dto = ProjectTypeDto::new(&vue(), &LogoOrigin::default());
        assert_eq!(dto.logo, "https://awesomejs.dev/logos/vue.png");
        assert_eq!(dto.slug, "vue");
    }

    #[test]
    fn test_dto_serialization_hides_reference() {
        let dto = ProjectTypeDto::new(&vue(), &LogoOrigin::new("http://localhost:4000"));
        let json = serde_json::to_value(&dto).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": "1",
                "name": "Vue",
                "slug": "vue",
                "logo": "http://localhost:4000/logos/vue.png"
            })
        );
    }
}
