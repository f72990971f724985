use crate::content::Project;

/// The portfolio gallery's project list with its categories derived once.
#[derive(Debug, Clone, PartialEq)]
pub struct Portfolio {
    projects: Vec<Project>,
    categories: Vec<String>,
}

impl Portfolio {
    pub fn new(projects: Vec<Project>) -> Self {
        let mut categories: Vec<String> = Vec::new();
        for project in &projects {
            if !categories.contains(&project.category) {
                categories.push(project.category.clone());
            }
        }
        Self {
            projects,
            categories,
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Unique categories in the order they first appear.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Projects in `category`, or every project when no filter is given.
    /// Original order is preserved either way.
    pub fn visible(&self, category: Option<&str>) -> Vec<&Project> {
        match category {
            None => self.projects.iter().collect(),
            Some(category) => self
                .projects
                .iter()
                .filter(|project| project.category == category)
                .collect(),
        }
    }

    pub fn find(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }
}

/// Ephemeral gallery state: active category filter and the project shown in
/// the detail overlay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    filter: Option<String>,
    selected: Option<u32>,
}

impl Selection {
    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    pub fn set_filter(&mut self, category: Option<&str>) {
        self.filter = category.map(str::to_owned);
    }

    pub fn select_project(&mut self, project: Option<&Project>) {
        self.selected = project.map(|project| project.id);
    }

    pub fn selected_id(&self) -> Option<u32> {
        self.selected
    }

    /// Resolves the selection against `portfolio`, so the result is always a
    /// member of the full list.
    pub fn selected<'a>(&self, portfolio: &'a Portfolio) -> Option<&'a Project> {
        self.selected.and_then(|id| portfolio.find(id))
    }
}
