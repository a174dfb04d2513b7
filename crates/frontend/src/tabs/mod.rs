//! Tabs widget
//!
//! Содержит:
//! - `widget` - привязка к готовой разметке: меню из заголовков панелей и переключение по клику
//! - `view` - компонент `TabsView` для Leptos с той же логикой
//! - `dom` - вспомогательные функции web-sys

pub mod dom;
pub mod view;
pub mod widget;

pub use view::{TabPanel, TabsView};
pub use widget::{bind_group, BoundGroup, TabsWidget};

use contracts::shared::tabs::WidgetConfig;
use web_sys::Document;

/// Initializes every tab container in `document` with the default config.
pub fn initialize(document: &Document) -> TabsWidget {
    initialize_with(document, WidgetConfig::default())
}

pub fn initialize_with(document: &Document, config: WidgetConfig) -> TabsWidget {
    let mut widget = TabsWidget::new(config);
    widget.initialize(document);
    widget
}
