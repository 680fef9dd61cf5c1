//! Message handlers, one module per activity. Each adds `update_*` methods
//! to [`Model`](crate::app::model::Model).

pub mod creator;
pub mod navigation;
pub mod popup;
pub mod theme;
pub mod view;
