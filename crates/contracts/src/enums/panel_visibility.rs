use serde::{Deserialize, Serialize};

/// Видимость панели внутри группы табов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PanelVisibility {
    Shown,
    Hidden,
}

impl PanelVisibility {
    /// Значение CSS-свойства `display` для панели
    pub fn css_display(&self) -> &'static str {
        match self {
            PanelVisibility::Shown => "block",
            PanelVisibility::Hidden => "none",
        }
    }

    pub fn is_shown(&self) -> bool {
        matches!(self, PanelVisibility::Shown)
    }
}

impl From<bool> for PanelVisibility {
    fn from(shown: bool) -> Self {
        if shown {
            PanelVisibility::Shown
        } else {
            PanelVisibility::Hidden
        }
    }
}
