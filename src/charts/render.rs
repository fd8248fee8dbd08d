//! Sparkline rendering
//!
//! Turns a [`Sparkline`] into something a host can display: a row of block
//! characters for terminals, or SVG markup for documents.

use std::fmt::Write as _;

use super::series::{CurveType, Sparkline};

/// Draws one sparkline
pub trait SparklineRenderer {
    fn render(&self, sparkline: &Sparkline) -> String;
}

/// Block characters, lowest to highest
const BLOCKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Terminal renderer: one line of Unicode blocks
#[derive(Debug, Clone)]
pub struct TextRenderer {
    /// Maximum number of characters; longer series are averaged down
    pub columns: usize,
    /// Wrap the line in the ANSI color closest to the series color
    pub ansi: bool,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            columns: 40,
            ansi: false,
        }
    }
}

impl TextRenderer {
    pub fn new(columns: usize) -> Self {
        Self {
            columns: columns.max(1),
            ..Default::default()
        }
    }

    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    /// Average consecutive buckets so at most `columns` values remain
    fn resample(&self, values: &[f64]) -> Vec<f64> {
        let n = values.len();
        if n <= self.columns {
            return values.to_vec();
        }

        (0..self.columns)
            .map(|i| {
                let start = i * n / self.columns;
                let end = ((i + 1) * n / self.columns).max(start + 1);
                let bucket = &values[start..end];
                bucket.iter().sum::<f64>() / bucket.len() as f64
            })
            .collect()
    }
}

fn ansi_code(color: &str) -> Option<&'static str> {
    match color.to_lowercase().as_str() {
        "red" => Some("31"),
        "green" => Some("32"),
        "orange" | "yellow" => Some("33"),
        "blue" => Some("34"),
        "purple" | "magenta" => Some("35"),
        "cyan" => Some("36"),
        _ => None,
    }
}

impl SparklineRenderer for TextRenderer {
    fn render(&self, sparkline: &Sparkline) -> String {
        let values: Vec<f64> = sparkline
            .values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .collect();
        if values.is_empty() {
            return String::new();
        }

        // Scale against what is drawn, so the extremes always reach ▁ and █
        let samples = self.resample(&values);
        let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
        let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let range = max - min;
        let top = (BLOCKS.len() - 1) as f64;

        let line: String = samples
            .into_iter()
            .map(|v| {
                if range == 0.0 {
                    BLOCKS[0]
                } else {
                    let level = ((v - min) / range * top).round() as usize;
                    BLOCKS[level.min(BLOCKS.len() - 1)]
                }
            })
            .collect();

        match ansi_code(&sparkline.color) {
            Some(code) if self.ansi => format!("\x1b[{}m{}\x1b[0m", code, line),
            _ => line,
        }
    }
}

/// SVG renderer: filled area under a stroked line
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    pub stroke_width: f64,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self { stroke_width: 2.0 }
    }
}

impl SvgRenderer {
    /// Plot coordinates: x spread evenly, y inverted so larger values are
    /// higher, both inset by half the stroke width.
    pub fn points(&self, sparkline: &Sparkline) -> Vec<(f64, f64)> {
        let values: Vec<f64> = sparkline
            .values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .collect();
        let Some((min, max)) = sparkline.bounds() else {
            return Vec::new();
        };

        let inset = self.stroke_width / 2.0;
        let width = (sparkline.width as f64 - 2.0 * inset).max(0.0);
        let height = (sparkline.height as f64 - 2.0 * inset).max(0.0);
        let range = max - min;
        let n = values.len();

        values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let x = if n == 1 {
                    inset + width / 2.0
                } else {
                    inset + width * i as f64 / (n - 1) as f64
                };
                let y = if range == 0.0 {
                    inset + height / 2.0
                } else {
                    inset + height * (1.0 - (v - min) / range)
                };
                (x, y)
            })
            .collect()
    }

    fn line_path(points: &[(f64, f64)], curve: CurveType) -> String {
        let mut path = String::new();
        for (i, (x, y)) in points.iter().enumerate() {
            if i == 0 {
                let _ = write!(path, "M{:.2},{:.2}", x, y);
                continue;
            }
            match curve {
                CurveType::Linear => {
                    let _ = write!(path, " L{:.2},{:.2}", x, y);
                }
                CurveType::Step => {
                    let _ = write!(path, " H{:.2} V{:.2}", x, y);
                }
            }
        }
        path
    }

    /// Gradient element id: `spark-` plus the label reduced to `[a-z0-9-]`
    fn gradient_id(label: &str) -> String {
        let slug: String = label
            .to_lowercase()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
            .collect();
        format!("spark-{}", slug)
    }
}

/// Escape text for a double-quoted XML attribute
fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

impl SparklineRenderer for SvgRenderer {
    fn render(&self, sparkline: &Sparkline) -> String {
        let points = self.points(sparkline);
        let label = escape_attr(&sparkline.label);
        let color = escape_attr(&sparkline.color);
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" role="img" aria-label="{label}">"#,
            w = sparkline.width,
            h = sparkline.height,
            label = label,
        );

        if let (Some(first), Some(last)) = (points.first(), points.last()) {
            let line = Self::line_path(&points, sparkline.curve);
            let bottom = sparkline.height as f64;

            let fill = if sparkline.with_gradient {
                let id = Self::gradient_id(&sparkline.label);
                let _ = write!(
                    svg,
                    r#"<defs><linearGradient id="{id}" x1="0" y1="0" x2="0" y2="1"><stop offset="0%" stop-color="{c}" stop-opacity="{o}"/><stop offset="100%" stop-color="{c}" stop-opacity="0"/></linearGradient></defs>"#,
                    id = id,
                    c = color,
                    o = sparkline.fill_opacity,
                );
                format!("url(#{})", id)
            } else {
                color.clone()
            };

            let _ = write!(
                svg,
                r#"<path d="{line} L{lx:.2},{b:.2} L{fx:.2},{b:.2} Z" fill="{fill}" fill-opacity="{o}" stroke="none"/>"#,
                line = line,
                lx = last.0,
                fx = first.0,
                b = bottom,
                fill = fill,
                o = if sparkline.with_gradient { 1.0 } else { sparkline.fill_opacity },
            );
            let _ = write!(
                svg,
                r#"<path d="{line}" fill="none" stroke="{c}" stroke-width="{sw}"/>"#,
                line = line,
                c = color,
                sw = self.stroke_width,
            );
        }

        svg.push_str("</svg>");
        svg
    }
}
