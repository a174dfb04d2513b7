use super::error::TabsError;
use crate::enums::panel_visibility::PanelVisibility;
use serde::{Deserialize, Serialize};

/// Состояние одной группы табов.
///
/// Хранит заголовки панелей в порядке документа и индекс активной панели.
/// `active` равен `None` только для группы без панелей, иначе всегда
/// указывает на существующую панель.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabGroupState {
    titles: Vec<String>,
    active: Option<usize>,
}

/// Пункт меню, вычисленный из состояния группы
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItemState {
    pub label: String,
    pub current: bool,
}

impl TabGroupState {
    /// Creates the group with the first panel active.
    ///
    /// Missing titles are expected to be passed as empty strings.
    pub fn new<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let titles: Vec<String> = titles.into_iter().map(Into::into).collect();
        let active = if titles.is_empty() { None } else { Some(0) };
        Self { titles, active }
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Activates panel `index`, deactivating every other one.
    ///
    /// Returns `true` when the active panel actually changed.
    /// An out-of-range index leaves the state untouched.
    pub fn select(&mut self, index: usize) -> Result<bool, TabsError> {
        if index >= self.titles.len() {
            return Err(TabsError::IndexOutOfRange {
                index,
                len: self.titles.len(),
            });
        }
        let changed = self.active != Some(index);
        self.active = Some(index);
        Ok(changed)
    }

    pub fn is_current(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    pub fn panel_visibility(&self, index: usize) -> PanelVisibility {
        PanelVisibility::from(self.is_current(index))
    }

    /// Видимость всех панелей в порядке документа
    pub fn visibility(&self) -> Vec<PanelVisibility> {
        (0..self.titles.len())
            .map(|i| self.panel_visibility(i))
            .collect()
    }

    /// Пункты меню в порядке панелей
    pub fn menu_items(&self) -> Vec<MenuItemState> {
        self.titles
            .iter()
            .enumerate()
            .map(|(i, title)| MenuItemState {
                label: title.clone(),
                current: self.is_current(i),
            })
            .collect()
    }

    /// Exactly one panel is shown and one item is current, or the group is empty.
    pub fn is_consistent(&self) -> bool {
        let shown = self.visibility().iter().filter(|v| v.is_shown()).count();
        let current = self.menu_items().iter().filter(|m| m.current).count();
        if self.titles.is_empty() {
            self.active.is_none() && shown == 0 && current == 0
        } else {
            shown == 1 && current == 1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_panel_active_after_init() {
        let state = TabGroupState::new(["A", "B", "C"]);
        assert_eq!(state.active(), Some(0));
        assert_eq!(
            state.visibility(),
            vec![
                PanelVisibility::Shown,
                PanelVisibility::Hidden,
                PanelVisibility::Hidden
            ]
        );
        assert!(state.is_consistent());
    }

    #[test]
    fn test_menu_order_matches_panel_order() {
        let state = TabGroupState::new(["A", "B"]);
        let labels: Vec<_> = state.menu_items().into_iter().map(|m| m.label).collect();
        assert_eq!(labels, vec!["A", "B"]);
    }

    #[test]
    fn test_click_second_panel() {
        let mut state = TabGroupState::new(["A", "B"]);
        assert_eq!(state.select(1), Ok(true));

        assert_eq!(state.panel_visibility(0), PanelVisibility::Hidden);
        assert_eq!(state.panel_visibility(1), PanelVisibility::Shown);
        let items = state.menu_items();
        assert!(!items[0].current);
        assert!(items[1].current);
        assert!(state.is_consistent());
    }

    #[test]
    fn test_reselect_same_panel_is_not_a_change() {
        let mut state = TabGroupState::new(["A", "B"]);
        assert_eq!(state.select(0), Ok(false));
        assert_eq!(state.active(), Some(0));
    }

    #[test]
    fn test_every_click_keeps_exactly_one_active() {
        let mut state = TabGroupState::new(["one", "two", "three", "four"]);
        for k in [3, 1, 1, 0, 2, 3] {
            state.select(k).unwrap();
            assert_eq!(state.active(), Some(k));
            assert!(state.is_consistent());
            for i in 0..state.len() {
                assert_eq!(state.is_current(i), i == k);
            }
        }
    }

    #[test]
    fn test_empty_group_is_noop() {
        let mut state = TabGroupState::new(Vec::<String>::new());
        assert!(state.is_empty());
        assert_eq!(state.active(), None);
        assert!(state.menu_items().is_empty());
        assert!(state.visibility().is_empty());
        assert!(state.is_consistent());
        assert_eq!(
            state.select(0),
            Err(TabsError::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_out_of_range_leaves_state_untouched() {
        let mut state = TabGroupState::new(["A", "B"]);
        state.select(1).unwrap();
        assert!(state.select(5).is_err());
        assert_eq!(state.active(), Some(1));
    }

    #[test]
    fn test_missing_title_is_empty_label() {
        let state = TabGroupState::new([String::new(), "B".to_string()]);
        assert_eq!(state.menu_items()[0].label, "");
        assert!(state.menu_items()[0].current);
    }
}
