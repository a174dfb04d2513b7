pub mod panel_visibility;
