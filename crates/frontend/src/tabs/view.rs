//! Декларативный вариант виджета для Leptos-приложений.
//!
//! Рендерит ту же разметку, что и DOM-привязка (`.tabs-container`,
//! `.tabs-menu`, `.tab-content`), и использует тот же `TabGroupState`.

use contracts::shared::tabs::{TabGroupState, TabsSelectors};
use leptos::ev;
use leptos::prelude::*;

/// One panel of a `TabsView`.
#[derive(Clone)]
pub struct TabPanel {
    pub title: String,
    pub content: ViewFn,
}

impl TabPanel {
    pub fn new(title: impl Into<String>, content: impl Into<ViewFn>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Class name for a simple `.class` selector.
fn selector_class(selector: &str) -> String {
    selector.trim_start_matches('.').to_string()
}

#[component]
pub fn TabsView(
    /// Panels in display order; the first one starts active
    panels: Vec<TabPanel>,
    /// Extra classes for the container
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    let selectors = TabsSelectors::default();
    let state = RwSignal::new(TabGroupState::new(panels.iter().map(|p| p.title.clone())));

    let container_class = if class.is_empty() {
        selector_class(&selectors.container)
    } else {
        format!("{} {}", selector_class(&selectors.container), class)
    };
    let menu_class = selector_class(&selectors.menu);
    let panel_class = selector_class(&selectors.panel);

    let items = panels
        .iter()
        .enumerate()
        .map(|(index, panel)| {
            let current_class = selectors.current_class.clone();
            let item_class = move || {
                if state.with(|s| s.is_current(index)) {
                    current_class.clone()
                } else {
                    String::new()
                }
            };
            let on_click = move |event: ev::MouseEvent| {
                event.prevent_default();
                state.update(|s| {
                    if let Err(err) = s.select(index) {
                        log::warn!("tabs: {}", err);
                    }
                });
            };
            let title = panel.title.clone();

            view! {
                <li class=item_class on:click=on_click>
                    <a href="#">{title}</a>
                </li>
            }
        })
        .collect_view();

    let contents = panels
        .into_iter()
        .enumerate()
        .map(|(index, panel)| {
            let display = move || state.with(|s| s.panel_visibility(index).css_display());
            let content = panel.content;

            view! {
                <div class=panel_class.clone() title=panel.title style:display=display>
                    {content.run()}
                </div>
            }
        })
        .collect_view();

    view! {
        <div class=container_class>
            <ul class=menu_class>{items}</ul>
            {contents}
        </div>
    }
}
