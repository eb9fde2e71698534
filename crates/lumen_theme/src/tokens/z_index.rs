//! Stacking order

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ZLayer {
    Base,
    Dropdown,
    Sticky,
    AppBar,
    Drawer,
    Modal,
    Snackbar,
    Tooltip,
}

impl ZLayer {
    pub fn key(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Dropdown => "dropdown",
            Self::Sticky => "sticky",
            Self::AppBar => "appBar",
            Self::Drawer => "drawer",
            Self::Modal => "modal",
            Self::Snackbar => "snackbar",
            Self::Tooltip => "tooltip",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZIndexTokens {
    pub base: i32,
    pub dropdown: i32,
    pub sticky: i32,
    pub app_bar: i32,
    pub drawer: i32,
    pub modal: i32,
    pub snackbar: i32,
    pub tooltip: i32,
}

impl Default for ZIndexTokens {
    fn default() -> Self {
        Self {
            base: 0,
            dropdown: 1000,
            sticky: 1100,
            app_bar: 1200,
            drawer: 1300,
            modal: 1400,
            snackbar: 1500,
            tooltip: 1600,
        }
    }
}
