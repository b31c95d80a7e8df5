// View-state for the page. Each piece is a plain state holder with the
// transitions the page script drives; `render` turns the whole thing into
// markup.

use crate::page::content::{self, Section};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Navigation {
    scrolled: bool,
    active: Section,
}

impl Navigation {
    pub const SCROLLED_AFTER: f64 = 50.0;
    pub const SPY_LINE: f64 = 100.0;

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn active(&self) -> Section {
        self.active
    }

    // The first section, in page order, straddling the spy line becomes
    // active. Sections without bounds are skipped; with no match the current
    // one is kept.
    pub fn on_scroll(&mut self, scroll_y: f64, bounds: &[(Section, SectionBounds)]) {
        self.scrolled = scroll_y > Self::SCROLLED_AFTER;

        let straddles = |section: &Section| {
            bounds.iter().any(|(s, b)| {
                s == section && b.top <= Self::SPY_LINE && b.bottom >= Self::SPY_LINE
            })
        };
        if let Some(section) = Section::ALL.iter().find(|s| straddles(*s)) {
            self.active = *section;
        }
    }
}

impl Default for Navigation {
    fn default() -> Navigation {
        Navigation {
            scrolled: false,
            active: Section::Home,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ScrollProgress {
    fraction: f64,
}

impl ScrollProgress {
    pub fn fraction(&self) -> f64 {
        self.fraction
    }

    pub fn update(&mut self, scroll_y: f64, document_height: f64, viewport_height: f64) {
        let scrollable = document_height - viewport_height;
        self.fraction = if scrollable > 0.0 {
            (scroll_y / scrollable).max(0.0).min(1.0)
        } else {
            0.0
        };
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectsView {
    selected: Option<u32>,
    hovered: Option<u32>,
}

impl ProjectsView {
    pub fn selected(&self) -> Option<&'static content::Project> {
        self.selected.and_then(content::project)
    }

    pub fn is_selected(&self, id: u32) -> bool {
        self.selected == Some(id)
    }

    pub fn is_hovered(&self, id: u32) -> bool {
        self.hovered == Some(id)
    }

    pub fn toggle(&mut self, id: u32) {
        if content::project(id).is_none() {
            return;
        }
        self.selected = if self.selected == Some(id) { None } else { Some(id) };
    }

    pub fn hover(&mut self, id: Option<u32>) {
        self.hovered = id.filter(|&id| content::project(id).is_some());
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SkillsView {
    selected: Option<&'static str>,
}

impl SkillsView {
    pub fn selected(&self) -> Option<&'static content::SkillCategory> {
        self.selected.and_then(content::skill_category)
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selected == Some(name)
    }

    pub fn toggle(&mut self, name: &str) {
        let category = match content::skill_category(name) {
            Some(category) => category,
            None => return,
        };
        self.selected = if self.selected == Some(category.name) {
            None
        } else {
            Some(category.name)
        };
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ContactButton {
    Email,
    Phone,
}

impl ContactButton {
    pub fn from_name(name: &str) -> Option<ContactButton> {
        match name {
            "email" => Some(ContactButton::Email),
            "phone" => Some(ContactButton::Phone),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactView {
    hovered: Option<ContactButton>,
}

impl ContactView {
    pub fn hovered(&self) -> Option<ContactButton> {
        self.hovered
    }

    pub fn hover(&mut self, button: Option<ContactButton>) {
        self.hovered = button;
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PortfolioView {
    pub navigation: Navigation,
    pub progress: ScrollProgress,
    pub projects: ProjectsView,
    pub skills: SkillsView,
    pub contact: ContactView,
}

impl PortfolioView {
    pub fn on_scroll(
        &mut self,
        scroll_y: f64,
        bounds: &[(Section, SectionBounds)],
        document_height: f64,
        viewport_height: f64,
    ) {
        self.navigation.on_scroll(scroll_y, bounds);
        self.progress.update(scroll_y, document_height, viewport_height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(top: f64, bottom: f64) -> SectionBounds {
        SectionBounds { top, bottom }
    }

    #[test]
    fn scrolled_flag_flips_after_threshold() {
        let mut nav = Navigation::default();
        nav.on_scroll(50.0, &[]);
        assert!(!nav.scrolled());
        nav.on_scroll(50.5, &[]);
        assert!(nav.scrolled());
    }

    #[test]
    fn scroll_spy_picks_first_straddling_section() {
        let mut nav = Navigation::default();
        nav.on_scroll(
            900.0,
            &[
                (Section::Home, bounds(-900.0, -100.0)),
                (Section::Skills, bounds(100.0, 900.0)),
                (Section::Projects, bounds(-100.0, 100.0)),
            ],
        );
        // both straddle the line; page order wins
        assert_eq!(nav.active(), Section::Projects);
    }

    #[test]
    fn scroll_spy_keeps_section_without_match() {
        let mut nav = Navigation::default();
        nav.on_scroll(2000.0, &[(Section::Experience, bounds(50.0, 800.0))]);
        assert_eq!(nav.active(), Section::Experience);
        nav.on_scroll(2100.0, &[(Section::Experience, bounds(150.0, 800.0))]);
        assert_eq!(nav.active(), Section::Experience);
    }

    #[test]
    fn progress_is_clamped() {
        let mut progress = ScrollProgress::default();
        progress.update(500.0, 2000.0, 1000.0);
        assert!((progress.fraction() - 0.5).abs() < 1e-12);
        progress.update(5000.0, 2000.0, 1000.0);
        assert_eq!(progress.fraction(), 1.0);
        progress.update(-20.0, 2000.0, 1000.0);
        assert_eq!(progress.fraction(), 0.0);
        progress.update(100.0, 800.0, 1000.0);
        assert_eq!(progress.fraction(), 0.0);
    }

    #[test]
    fn project_toggle() {
        let mut projects = ProjectsView::default();
        projects.toggle(1);
        assert_eq!(projects.selected().map(|p| p.id), Some(1));
        projects.toggle(3);
        assert_eq!(projects.selected().map(|p| p.id), Some(3));
        projects.toggle(3);
        assert!(projects.selected().is_none());
        projects.toggle(42);
        assert!(projects.selected().is_none());

        projects.hover(Some(2));
        assert!(projects.is_hovered(2));
        projects.hover(Some(42));
        assert!(!projects.is_hovered(2));
    }

    #[test]
    fn skill_toggle() {
        let mut skills = SkillsView::default();
        skills.toggle("Backend");
        assert!(skills.is_selected("Backend"));
        skills.toggle("Backend");
        assert!(skills.selected().is_none());
        skills.toggle("Cooking");
        assert!(skills.selected().is_none());
    }

    #[test]
    fn contact_hover() {
        let mut contact = ContactView::default();
        contact.hover(ContactButton::from_name("phone"));
        assert_eq!(contact.hovered(), Some(ContactButton::Phone));
        contact.hover(ContactButton::from_name("fax"));
        assert_eq!(contact.hovered(), None);
    }
}
