use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Generate,
    Optimize,
    Test,
    Library,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Generate, Tab::Optimize, Tab::Test, Tab::Library];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Generate => "Generate",
            Tab::Optimize => "Optimize",
            Tab::Test => "Test",
            Tab::Library => "Library",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown tab '{}'", s.trim()))
    }
}

/// Exactly one tab is active at a time.
#[derive(Debug, Default)]
pub struct Tabs {
    active: Tab,
}

impl Tabs {
    pub fn active(&self) -> Tab {
        self.active
    }

    pub fn is_active(&self, tab: Tab) -> bool {
        self.active == tab
    }

    /// Activates `tab`, deactivating every other. Returns true when the library must reload.
    pub fn activate(&mut self, tab: Tab) -> bool {
        self.active = tab;
        tab == Tab::Library
    }
}
