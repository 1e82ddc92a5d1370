//! Pannable, zoomable price-bar chart view for GPUI.
//!
//! The host constructs a [`ChartView`] with one chunk of time-ordered bars,
//! embeds it in its element tree and asks for redraws; dragging pans the
//! viewport and the wheel zooms around the pointer.

pub mod chart_view;
pub mod data_types;
pub mod scales;
pub mod theme;
pub mod transform;
pub mod utils;
pub mod view_controller;

pub use chart_view::ChartView;
pub use data_types::{Bar, BarDataset, ChartGeometry, DragState, TickPlotConfig, Viewport};
pub use scales::PriceScale;
pub use theme::ChartTheme;
pub use transform::ViewTransform;
pub use view_controller::ViewController;
