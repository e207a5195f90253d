use crate::content::Project;

/// Projects shown before the list is expanded.
pub const INITIAL_PROJECTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Showcase {
    show_all: bool,
}

impl Showcase {
    pub fn toggle(&mut self) {
        self.show_all = !self.show_all;
    }

    pub fn shows_all(&self) -> bool {
        self.show_all
    }

    pub fn visible<'a>(&self, projects: &'a [Project]) -> &'a [Project] {
        if self.show_all {
            projects
        } else {
            &projects[..projects.len().min(INITIAL_PROJECTS)]
        }
    }

    /// Position of the card at `index` among the ones expanding the list
    /// adds, or `None` for the cards that are always shown.
    pub fn entrance_index(index: usize) -> Option<usize> {
        index.checked_sub(INITIAL_PROJECTS)
    }

    pub fn label(&self, total: usize) -> String {
        if self.show_all {
            "Show Less".to_string()
        } else {
            format!("Show All Projects ({total})")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PROJECTS;

    fn titles(projects: &[Project]) -> Vec<&'static str> {
        projects.iter().map(|p| p.title).collect()
    }

    #[test]
    fn test_toggle_reveals_and_hides() {
        let mut showcase = Showcase::default();
        assert_eq!(showcase.visible(&PROJECTS).len(), 3);

        showcase.toggle();
        assert_eq!(showcase.visible(&PROJECTS).len(), 6);

        showcase.toggle();
        assert_eq!(
            titles(showcase.visible(&PROJECTS)),
            titles(&PROJECTS[..3])
        );
    }

    #[test]
    fn test_short_list() {
        let showcase = Showcase::default();
        assert_eq!(showcase.visible(&PROJECTS[..2]).len(), 2);
        assert!(showcase.visible(&[]).is_empty());
    }

    #[test]
    fn test_entrance_index() {
        let mut showcase = Showcase::default();
        showcase.toggle();
        let entrances = (0..showcase.visible(&PROJECTS).len())
            .map(Showcase::entrance_index)
            .collect::<Vec<_>>();
        assert_eq!(
            entrances,
            vec![None, None, None, Some(0), Some(1), Some(2)]
        );
    }

    #[test]
    fn test_label() {
        let mut showcase = Showcase::default();
        assert_eq!(showcase.label(PROJECTS.len()), "Show All Projects (6)");
        showcase.toggle();
        assert!(showcase.shows_all());
        assert_eq!(showcase.label(PROJECTS.len()), "Show Less");
    }
}
