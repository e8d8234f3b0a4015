//! Collapsible info panels shown next to each scenario's charts.

/// Visibility of a panel container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    Shown,
    Hidden,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoPanel {
    pub id: String,
    pub display: Display,
}

impl InfoPanel {
    /// Panels start hidden.
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            display: Display::Hidden,
        }
    }

    pub fn is_shown(&self) -> bool {
        self.display == Display::Shown
    }

    /// Inline CSS for the panel's current state.
    pub fn style(&self) -> &'static str {
        match self.display {
            Display::Shown => "display: block;",
            Display::Hidden => "display: none;",
        }
    }
}

/// Flip a panel between shown and hidden.
pub fn toggle_info_panel(panel: &mut InfoPanel) {
    panel.display = match panel.display {
        Display::Shown => Display::Hidden,
        Display::Hidden => Display::Shown,
    };
    log::trace!("Info panel '{}' is now {:?}", panel.id, panel.display);
}

/// Page-side counterpart of [`toggle_info_panel`], reading the computed display state.
pub const TOGGLE_INFO_PANEL_SCRIPT: &str = "function toggleInfoPanel(id) {
    var node = document.getElementById(id);
    var hidden = window.getComputedStyle(node).display === 'none';
    node.style.display = hidden ? 'block' : 'none';
}";
