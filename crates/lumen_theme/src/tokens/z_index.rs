//! Z-index tokens for stacking layers

use serde::{Deserialize, Serialize};

/// Semantic layer keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ZIndexToken {
    MobileStepper,
    Fab,
    SpeedDial,
    AppBar,
    Drawer,
    Modal,
    Snackbar,
    Tooltip,
}

impl ZIndexToken {
    /// Every layer, lowest first
    pub const ALL: [ZIndexToken; 8] = [
        ZIndexToken::MobileStepper,
        ZIndexToken::Fab,
        ZIndexToken::SpeedDial,
        ZIndexToken::AppBar,
        ZIndexToken::Drawer,
        ZIndexToken::Modal,
        ZIndexToken::Snackbar,
        ZIndexToken::Tooltip,
    ];
}

/// Complete set of z-index tokens
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZIndex {
    pub mobile_stepper: i32,
    pub fab: i32,
    pub speed_dial: i32,
    pub app_bar: i32,
    pub drawer: i32,
    pub modal: i32,
    pub snackbar: i32,
    pub tooltip: i32,
}

impl ZIndex {
    /// Get a layer value by token key
    pub fn get(&self, token: ZIndexToken) -> i32 {
        match token {
            ZIndexToken::MobileStepper => self.mobile_stepper,
            ZIndexToken::Fab => self.fab,
            ZIndexToken::SpeedDial => self.speed_dial,
            ZIndexToken::AppBar => self.app_bar,
            ZIndexToken::Drawer => self.drawer,
            ZIndexToken::Modal => self.modal,
            ZIndexToken::Snackbar => self.snackbar,
            ZIndexToken::Tooltip => self.tooltip,
        }
    }

    pub fn compose(options: Option<&ZIndexOptions>) -> Self {
        let defaults = Self::default();
        let Some(o) = options else {
            return defaults;
        };
        Self {
            mobile_stepper: o.mobile_stepper.unwrap_or(defaults.mobile_stepper),
            fab: o.fab.unwrap_or(defaults.fab),
            speed_dial: o.speed_dial.unwrap_or(defaults.speed_dial),
            app_bar: o.app_bar.unwrap_or(defaults.app_bar),
            drawer: o.drawer.unwrap_or(defaults.drawer),
            modal: o.modal.unwrap_or(defaults.modal),
            snackbar: o.snackbar.unwrap_or(defaults.snackbar),
            tooltip: o.tooltip.unwrap_or(defaults.tooltip),
        }
    }
}

impl Default for ZIndex {
    fn default() -> Self {
        Self {
            mobile_stepper: 1000,
            fab: 1050,
            speed_dial: 1050,
            app_bar: 1100,
            drawer: 1200,
            modal: 1300,
            snackbar: 1400,
            tooltip: 1500,
        }
    }
}

/// Partial z-index override
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZIndexOptions {
    pub mobile_stepper: Option<i32>,
    pub fab: Option<i32>,
    pub speed_dial: Option<i32>,
    pub app_bar: Option<i32>,
    pub drawer: Option<i32>,
    pub modal: Option<i32>,
    pub snackbar: Option<i32>,
    pub tooltip: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layers_stack_in_token_order() {
        let z = ZIndex::default();
        let values: Vec<i32> = ZIndexToken::ALL.iter().map(|t| z.get(*t)).collect();
        assert_eq!(values, vec![1000, 1050, 1050, 1100, 1200, 1300, 1400, 1500]);
        assert!(values.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn override_changes_only_named_layer() {
        let options = ZIndexOptions {
            modal: Some(2000),
            ..Default::default()
        };
        let z = ZIndex::compose(Some(&options));
        for token in ZIndexToken::ALL {
            let expected = match token {
                ZIndexToken::Modal => 2000,
                other => ZIndex::default().get(other),
            };
            assert_eq!(z.get(token), expected, "{token:?}");
        }
    }
}
