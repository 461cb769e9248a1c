use serde::{Deserialize, Serialize};

use crate::service::property_form::PropertyForm;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Dashboard,
    Properties,
    Settings,
}

impl Page {
    pub fn title(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Properties => "Property Management",
            Page::Settings => "Settings",
        }
    }
}

/// Top-level UI state: which page is shown, the sidebar, and the form modal.
#[derive(Debug, Default)]
pub struct Shell {
    pub current_page: Page,
    pub sidebar_open: bool,
    pub form: PropertyForm,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellView {
    pub current_page: Page,
    pub page_title: &'static str,
    pub brand: &'static str,
    pub sidebar_open: bool,
    pub form_open: bool,
}

impl Shell {
    pub fn new() -> Self {
        Shell::default()
    }

    pub fn navigate(&mut self, page: Page) {
        self.current_page = page;
        // the sidebar collapses after a pick on small screens
        self.sidebar_open = false;
        tracing::debug!("Current page: {:?}", page);
    }

    pub fn toggle_sidebar(&mut self) -> bool {
        self.sidebar_open = !self.sidebar_open;
        self.sidebar_open
    }

    pub fn view(&self) -> ShellView {
        ShellView {
            current_page: self.current_page,
            page_title: self.current_page.title(),
            brand: "Say Allo Admin",
            sidebar_open: self.sidebar_open,
            form_open: self.form.is_open(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_dashboard() {
        let shell = Shell::new();
        let view = shell.view();
        assert_eq!(view.current_page, Page::Dashboard);
        assert_eq!(view.page_title, "Dashboard");
        assert!(!view.form_open);
    }

    #[test]
    fn navigation_updates_title_and_closes_sidebar() {
        let mut shell = Shell::new();
        assert!(shell.toggle_sidebar());

        shell.navigate(Page::Properties);
        let view = shell.view();
        assert_eq!(view.page_title, "Property Management");
        assert!(!view.sidebar_open);
    }

    #[test]
    fn form_stays_open_across_navigation() {
        let mut shell = Shell::new();
        shell.form.open_create();
        shell.navigate(Page::Settings);
        assert!(shell.view().form_open);
    }
}
