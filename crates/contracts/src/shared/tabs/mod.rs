//! Модель группы табов, не зависящая от DOM.
//!
//! Содержит:
//! - `state` - состояние группы (какая панель активна) и переключение
//! - `config` - соглашения разметки и настройки виджета
//! - `error` - ошибки модели и конфигурации

pub mod config;
pub mod error;
pub mod state;

pub use config::{load_config, TabsSelectors, WidgetConfig, WidgetOverrides};
pub use error::TabsError;
pub use state::{MenuItemState, TabGroupState};
