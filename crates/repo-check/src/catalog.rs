//! Catalog of the files a repository is checked for.
//!
//! The core files are always checked. The optional [`FileGroup`]s add the
//! files of a particular tool or ecosystem and are enabled through
//! [`FileGroups`].

use std::fmt;

/// How important it is for a file to be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Priority {
    /// Missing files fail the check
    MustHave,
    /// Missing files are reported as warnings
    ShouldHave,
    /// Missing files are not reported
    NiceToHave,
}

impl From<Priority> for &'static str {
    fn from(val: Priority) -> Self {
        match val {
            Priority::MustHave => "Must-have",
            Priority::ShouldHave => "Should-have",
            Priority::NiceToHave => "Nice-to-have",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// What kind of project a file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    General,
    Public,
    Docker,
    JavaScript,
    TypeScript,
}

impl From<Category> for &'static str {
    fn from(val: Category) -> Self {
        match val {
            Category::General => "General",
            Category::Public => "Public",
            Category::Docker => "Docker",
            Category::JavaScript => "JavaScript",
            Category::TypeScript => "TypeScript",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// A file that should be present in a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileRequirement {
    path: &'static str,
    category: Category,
    priority: Priority,
    description: &'static str,
}

impl FileRequirement {
    const fn new(
        path: &'static str,
        category: Category,
        priority: Priority,
        description: &'static str,
    ) -> Self {
        Self {
            path,
            category,
            priority,
            description,
        }
    }

    /// Path of the file, relative to the repository root.
    pub fn path(&self) -> &'static str {
        self.path
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn description(&self) -> &'static str {
        self.description
    }
}

const CORE_FILES: &[FileRequirement] = &[
    FileRequirement::new(
        "README.md",
        Category::General,
        Priority::MustHave,
        "Primary documentation file that explains what the project does, how to install/use it, and other essential information",
    ),
    FileRequirement::new(
        ".gitignore",
        Category::General,
        Priority::MustHave,
        "Specifies intentionally untracked files to ignore when using Git",
    ),
    FileRequirement::new(
        "LICENSE.md",
        Category::Public,
        Priority::MustHave,
        "Defines the terms under which the software can be used, modified, and distributed",
    ),
    FileRequirement::new(
        "SECURITY.md",
        Category::Public,
        Priority::MustHave,
        "Provides security policy and vulnerability reporting instructions",
    ),
    FileRequirement::new(
        "AUTHORS",
        Category::General,
        Priority::ShouldHave,
        "Lists all individuals who have contributed to the project",
    ),
    FileRequirement::new(
        "MAINTAINERS.md",
        Category::General,
        Priority::ShouldHave,
        "Identifies current maintainers and their responsibilities",
    ),
    FileRequirement::new(
        ".editorconfig",
        Category::General,
        Priority::ShouldHave,
        "Helps maintain consistent coding styles across various editors and IDEs",
    ),
    FileRequirement::new(
        "CONTRIBUTING.md",
        Category::Public,
        Priority::ShouldHave,
        "Guidelines for how to contribute to the project",
    ),
    FileRequirement::new(
        "CODE-OF-CONDUCT.md",
        Category::Public,
        Priority::ShouldHave,
        "Establishes expectations for behavior within the project community",
    ),
    FileRequirement::new(
        "CODEOWNERS",
        Category::Public,
        Priority::ShouldHave,
        "Defines individuals or teams responsible for code in a repository",
    ),
];

const AUGMENT_FILES: &[FileRequirement] = &[
    FileRequirement::new(
        ".augment-guidelines",
        Category::General,
        Priority::ShouldHave,
        "Provides guidelines for Augment AI to follow when working with the codebase",
    ),
    FileRequirement::new(
        ".augmentignore",
        Category::General,
        Priority::ShouldHave,
        "Controls what files Augment AI indexes in the workspace",
    ),
];

const DOCKER_FILES: &[FileRequirement] = &[
    FileRequirement::new(
        "Dockerfile",
        Category::Docker,
        Priority::MustHave,
        "Instructions for building a Docker image for the application",
    ),
    FileRequirement::new(
        ".dockerignore",
        Category::Docker,
        Priority::ShouldHave,
        "Specifies files that should be excluded when building Docker images",
    ),
    FileRequirement::new(
        "docker-compose.yaml",
        Category::Docker,
        Priority::ShouldHave,
        "Defines and runs multi-container Docker applications",
    ),
];

const TYPESCRIPT_FILES: &[FileRequirement] = &[
    FileRequirement::new(
        "package.json",
        Category::JavaScript,
        Priority::MustHave,
        "Defines project metadata and dependencies for Node.js projects",
    ),
    FileRequirement::new(
        "tsconfig.json",
        Category::TypeScript,
        Priority::MustHave,
        "Configuration file for TypeScript compiler options",
    ),
];

const DEVCONTAINER_FILES: &[FileRequirement] = &[FileRequirement::new(
    ".devcontainer.json",
    Category::Public,
    Priority::NiceToHave,
    "Configuration for development in a containerized environment",
)];

const DEVENV_FILES: &[FileRequirement] = &[FileRequirement::new(
    "devenv.nix",
    Category::Public,
    Priority::NiceToHave,
    "Defines development environment using Nix for reproducible builds",
)];

/// Optional group of files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileGroup {
    Augment,
    Docker,
    TypeScript,
    DevContainer,
    DevEnv,
}

impl FileGroup {
    /// Every group, in catalog order.
    pub const ALL: [FileGroup; 5] = [
        FileGroup::Augment,
        FileGroup::Docker,
        FileGroup::TypeScript,
        FileGroup::DevContainer,
        FileGroup::DevEnv,
    ];

    /// Files belonging to this group.
    pub fn files(self) -> &'static [FileRequirement] {
        match self {
            FileGroup::Augment => AUGMENT_FILES,
            FileGroup::Docker => DOCKER_FILES,
            FileGroup::TypeScript => TYPESCRIPT_FILES,
            FileGroup::DevContainer => DEVCONTAINER_FILES,
            FileGroup::DevEnv => DEVENV_FILES,
        }
    }

    fn index(self) -> usize {
        match self {
            FileGroup::Augment => 0,
            FileGroup::Docker => 1,
            FileGroup::TypeScript => 2,
            FileGroup::DevContainer => 3,
            FileGroup::DevEnv => 4,
        }
    }
}

impl From<FileGroup> for &'static str {
    fn from(val: FileGroup) -> Self {
        match val {
            FileGroup::Augment => "augment",
            FileGroup::Docker => "docker",
            FileGroup::TypeScript => "typescript",
            FileGroup::DevContainer => "devcontainer",
            FileGroup::DevEnv => "devenv",
        }
    }
}

impl fmt::Display for FileGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// Set of enabled optional file groups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileGroups {
    enabled: [bool; 5],
}

impl FileGroups {
    /// No optional group; only the core files are checked.
    pub fn none() -> Self {
        Self::default()
    }

    /// Every optional group.
    pub fn all() -> Self {
        Self { enabled: [true; 5] }
    }

    /// Returns the set with `group` enabled.
    pub fn with(mut self, group: FileGroup) -> Self {
        self.enable(group);
        self
    }

    pub fn enable(&mut self, group: FileGroup) {
        self.enabled[group.index()] = true;
    }

    pub fn contains(&self, group: FileGroup) -> bool {
        self.enabled[group.index()]
    }

    pub fn is_empty(&self) -> bool {
        !self.enabled.contains(&true)
    }

    /// Enabled groups, in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = FileGroup> + '_ {
        FileGroup::ALL
            .into_iter()
            .filter(|group| self.contains(*group))
    }
}

impl FromIterator<FileGroup> for FileGroups {
    fn from_iter<I: IntoIterator<Item = FileGroup>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::none(), |groups, group| groups.with(group))
    }
}

/// Core files followed by the files of every enabled group.
pub fn requirements(groups: &FileGroups) -> Vec<FileRequirement> {
    CORE_FILES
        .iter()
        .chain(groups.iter().flat_map(|group| group.files()))
        .copied()
        .collect()
}

pub fn filter_by_priority(
    requirements: &[FileRequirement],
    priority: Priority,
) -> Vec<FileRequirement> {
    requirements
        .iter()
        .filter(|req| req.priority() == priority)
        .copied()
        .collect()
}

pub fn filter_by_category(
    requirements: &[FileRequirement],
    category: Category,
) -> Vec<FileRequirement> {
    requirements
        .iter()
        .filter(|req| req.category() == category)
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn paths(requirements: &[FileRequirement]) -> Vec<&'static str> {
        requirements.iter().map(FileRequirement::path).collect()
    }

    #[test]
    fn test_core_requirements_only() {
        let reqs = requirements(&FileGroups::none());

        assert_eq!(
            paths(&reqs),
            vec![
                "README.md",
                ".gitignore",
                "LICENSE.md",
                "SECURITY.md",
                "AUTHORS",
                "MAINTAINERS.md",
                ".editorconfig",
                "CONTRIBUTING.md",
                "CODE-OF-CONDUCT.md",
                "CODEOWNERS",
            ]
        );
    }

    #[test]
    fn test_groups_appended_in_catalog_order() {
        // Enabled out of order on purpose
        let groups = FileGroups::none()
            .with(FileGroup::DevEnv)
            .with(FileGroup::Docker);
        let reqs = requirements(&groups);

        assert_eq!(reqs.len(), 14);
        assert_eq!(
            paths(&reqs[10..]),
            vec![
                "Dockerfile",
                ".dockerignore",
                "docker-compose.yaml",
                "devenv.nix"
            ]
        );
    }

    #[test]
    fn test_all_groups() {
        let reqs = requirements(&FileGroups::all());
        assert_eq!(reqs.len(), 19);
        assert_eq!(reqs.last().map(FileRequirement::path), Some("devenv.nix"));
    }

    #[test]
    fn test_file_groups_set() {
        assert!(FileGroups::none().is_empty());
        assert!(!FileGroups::all().is_empty());

        let groups: FileGroups = [FileGroup::TypeScript, FileGroup::Augment]
            .into_iter()
            .collect();
        assert!(groups.contains(FileGroup::Augment));
        assert!(!groups.contains(FileGroup::Docker));
        assert_eq!(
            groups.iter().collect::<Vec<_>>(),
            vec![FileGroup::Augment, FileGroup::TypeScript]
        );
    }

    #[test]
    fn test_filter_by_priority() {
        let reqs = requirements(&FileGroups::all());

        let must = filter_by_priority(&reqs, Priority::MustHave);
        assert_eq!(
            paths(&must),
            vec![
                "README.md",
                ".gitignore",
                "LICENSE.md",
                "SECURITY.md",
                "Dockerfile",
                "package.json",
                "tsconfig.json",
            ]
        );

        let nice = filter_by_priority(&reqs, Priority::NiceToHave);
        assert_eq!(paths(&nice), vec![".devcontainer.json", "devenv.nix"]);
    }

    #[test]
    fn test_filter_by_category() {
        let reqs = requirements(&FileGroups::all());

        let docker = filter_by_category(&reqs, Category::Docker);
        assert_eq!(docker.len(), 3);
        assert!(docker.iter().all(|req| req.category() == Category::Docker));

        let typescript = filter_by_category(&reqs, Category::TypeScript);
        assert_eq!(paths(&typescript), vec!["tsconfig.json"]);
    }

    #[test]
    fn test_priority_and_category_display() {
        assert_eq!(Priority::NiceToHave.to_string(), "Nice-to-have");
        assert_eq!(Priority::MustHave.to_string(), "Must-have");
        assert_eq!(Category::Public.to_string(), "Public");
        assert_eq!(Category::JavaScript.to_string(), "JavaScript");
    }

    #[test]
    fn test_every_requirement_has_description() {
        let reqs = requirements(&FileGroups::all());
        assert!(reqs.iter().all(|req| !req.description().is_empty()));
    }
}
