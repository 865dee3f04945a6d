/// Sections of the dashboard a viewer gets to see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Profile,
    Features,
    SessionManagement,
    MySessions,
}

impl Panel {
    pub fn title(&self) -> &'static str {
        match self {
            Panel::Profile => "Profile",
            Panel::Features => "Features",
            Panel::SessionManagement => "Session management",
            Panel::MySessions => "My sessions",
        }
    }
}
