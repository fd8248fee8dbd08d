//! Sparkline Charts
//!
//! Presentation only: series data and two renderers. Nothing here holds
//! state between renders.

mod render;
mod series;

pub use render::{SparklineRenderer, SvgRenderer, TextRenderer};
pub use series::{demo_series, CurveType, Sparkline, DEMO_COLORS};
