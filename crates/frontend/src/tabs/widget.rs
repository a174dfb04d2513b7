use super::dom;
use anyhow::Context;
use contracts::enums::panel_visibility::PanelVisibility;
use contracts::shared::tabs::config::{CONFIG_ATTRIBUTE, INITIALIZED_ATTRIBUTE};
use contracts::shared::tabs::{TabGroupState, TabsError, WidgetConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, MouseEvent};

/// One initialized tab group bound to its container.
///
/// Cloning is cheap; every click handler of the group holds a clone.
#[derive(Clone)]
pub struct BoundGroup {
    state: Rc<RefCell<TabGroupState>>,
    // (panel index, <li>) for every menu found in the container
    menu_items: Rc<Vec<(usize, Element)>>,
    panels: Rc<Vec<HtmlElement>>,
    current_class: Rc<str>,
    fade_ms: u32,
}

impl BoundGroup {
    pub fn state(&self) -> TabGroupState {
        self.state.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Same path a click on menu item `index` takes.
    pub fn select(&self, index: usize) -> Result<bool, TabsError> {
        let changed = self.state.borrow_mut().select(index)?;
        self.render(changed);
        Ok(changed)
    }

    fn render(&self, fade: bool) {
        let state = self.state.borrow();

        for (index, item) in self.menu_items.iter() {
            dom::set_class(item, &self.current_class, state.is_current(*index));
        }

        for (index, panel) in self.panels.iter().enumerate() {
            match state.panel_visibility(index) {
                PanelVisibility::Shown if fade => dom::fade_in(panel, self.fade_ms),
                visibility => dom::set_visibility(panel, visibility),
            }
        }
    }
}

/// Scans the page for tab containers and wires each of them.
pub struct TabsWidget {
    config: WidgetConfig,
    groups: Vec<BoundGroup>,
}

impl TabsWidget {
    pub fn new(config: WidgetConfig) -> Self {
        Self {
            config,
            groups: Vec::new(),
        }
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn groups(&self) -> &[BoundGroup] {
        &self.groups
    }

    /// Binds every container not bound yet. Returns how many were added.
    pub fn initialize(&mut self, document: &Document) -> usize {
        let containers = match dom::query_document(document, &self.config.selectors.container) {
            Ok(containers) => containers,
            Err(err) => {
                log::warn!("tabs: containers not scanned: {:#}", err);
                return 0;
            }
        };

        let before = self.groups.len();
        for container in containers {
            match bind_group(document, &container, &self.config) {
                Ok(Some(group)) => self.groups.push(group),
                Ok(None) => {}
                Err(err) => log::warn!("tabs: container skipped: {:#}", err),
            }
        }

        let added = self.groups.len() - before;
        log::debug!("tabs: {} group(s) initialized", added);
        added
    }

    /// Programmatic selection of panel `index` in group `group`.
    pub fn select(&self, group: usize, index: usize) -> Result<bool, TabsError> {
        match self.groups.get(group) {
            Some(bound) => bound.select(index),
            None => Err(TabsError::GroupOutOfRange {
                group,
                len: self.groups.len(),
            }),
        }
    }
}

/// Panel index of every menu item, in creation order.
///
/// Each menu gets one item per panel, so the sequence repeats per menu.
pub fn menu_item_indices(menu_count: usize, panel_count: usize) -> Vec<usize> {
    (0..menu_count).flat_map(|_| 0..panel_count).collect()
}

fn container_config(container: &Element, base: &WidgetConfig) -> WidgetConfig {
    match container.get_attribute(CONFIG_ATTRIBUTE) {
        Some(raw) => base.with_overrides(&raw).unwrap_or_else(|err| {
            log::warn!("tabs: {} ignored: {}", CONFIG_ATTRIBUTE, err);
            base.clone()
        }),
        None => base.clone(),
    }
}

/// Builds the menu of one container and shows its first panel.
///
/// Returns `Ok(None)` for a container that was already bound.
pub fn bind_group(
    document: &Document,
    container: &Element,
    base: &WidgetConfig,
) -> anyhow::Result<Option<BoundGroup>> {
    if container.has_attribute(INITIALIZED_ATTRIBUTE) {
        log::debug!("tabs: container already initialized, skipping");
        return Ok(None);
    }

    let config = container_config(container, base);
    let selectors = &config.selectors;

    let menus: Vec<Element> = dom::query_within(container, &selectors.menu)?;
    let panels: Vec<HtmlElement> = dom::query_within(container, &selectors.panel)?;

    let titles: Vec<String> = panels
        .iter()
        .map(|panel| dom::panel_title(panel.get_attribute(&selectors.title_attr)))
        .collect();

    if menus.is_empty() && !panels.is_empty() {
        log::warn!("tabs: container has no '{}' placeholder", selectors.menu);
    }

    // Items are built and wired detached; the DOM is touched only once all succeeded
    let indices = menu_item_indices(menus.len(), titles.len());
    let mut menu_items = Vec::with_capacity(indices.len());
    for index in indices {
        let item = dom::create_menu_item(document, &titles[index])?;
        menu_items.push((index, item));
    }

    let group = BoundGroup {
        state: Rc::new(RefCell::new(TabGroupState::new(titles))),
        menu_items: Rc::new(menu_items),
        panels: Rc::new(panels),
        current_class: Rc::from(selectors.current_class.as_str()),
        fade_ms: config.fade_ms,
    };

    let mut listeners = Vec::with_capacity(group.menu_items.len());
    for (index, item) in group.menu_items.iter() {
        let index = *index;
        let group_for_click = group.clone();
        let on_click = Closure::wrap(Box::new(move |event: MouseEvent| {
            event.prevent_default();
            if let Err(err) = group_for_click.select(index) {
                log::warn!("tabs: {}", err);
            }
        }) as Box<dyn FnMut(MouseEvent)>);

        item.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .map_err(dom::js_err)
            .context("bind menu click")?;
        listeners.push(on_click);
    }

    // Listeners live as long as the page
    for on_click in listeners {
        on_click.forget();
    }

    let per_menu = group.len();
    for (menu, items) in menus.iter().zip(group.menu_items.chunks(per_menu.max(1))) {
        for (_, item) in items {
            menu.append_child(item)
                .map_err(dom::js_err)
                .context("append menu item")?;
        }
    }

    group.render(false);
    container
        .set_attribute(INITIALIZED_ATTRIBUTE, "")
        .map_err(dom::js_err)?;

    log::debug!(
        "tabs: bound group with {} panel(s), {} menu(s)",
        group.len(),
        menus.len()
    );
    Ok(Some(group))
}
