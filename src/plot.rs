//! This module describes the narrow interface through which measurements are drawn. A plotting
//! backend only has to accept polylines with a style, and the `PlotRecorder` keeps them in
//! memory so they can be inspected or serialized for an external renderer.

use crate::Point2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlotColor {
    Blue,
    Green,
    Red,
    Black,
}

impl PlotColor {
    fn code(self) -> char {
        match self {
            PlotColor::Blue => 'b',
            PlotColor::Green => 'g',
            PlotColor::Red => 'r',
            PlotColor::Black => 'k',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlotMarker {
    X,
    Circle,
    Point,
}

impl PlotMarker {
    fn code(self) -> char {
        match self {
            PlotMarker::X => 'x',
            PlotMarker::Circle => 'o',
            PlotMarker::Point => '.',
        }
    }
}

/// The style of a plotted polyline: a color, an optional marker drawn at every vertex, and
/// whether the vertices are joined by a solid line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotStyle {
    pub color: PlotColor,
    pub marker: Option<PlotMarker>,
    pub line: bool,
}

impl PlotStyle {
    /// Blue `x` markers joined by a solid line
    pub const MEASUREMENT: PlotStyle = PlotStyle {
        color: PlotColor::Blue,
        marker: Some(PlotMarker::X),
        line: true,
    };

    /// A red solid line without markers
    pub const BOUNDING_BOX: PlotStyle = PlotStyle {
        color: PlotColor::Red,
        marker: None,
        line: true,
    };

    /// Renders the style as a matplotlib format string, such as `"bx-"` or `"r"`. A style with
    /// no marker always draws a line, so the trailing `-` is only written when a marker is also
    /// present.
    ///
    /// # Examples
    ///
    /// ```
    /// use edge_measure::PlotStyle;
    /// assert_eq!(PlotStyle::MEASUREMENT.format_string(), "bx-");
    /// assert_eq!(PlotStyle::BOUNDING_BOX.format_string(), "r");
    /// ```
    pub fn format_string(&self) -> String {
        let mut s = String::new();
        s.push(self.color.code());
        if let Some(marker) = self.marker {
            s.push(marker.code());
            if self.line {
                s.push('-');
            }
        }
        s
    }
}

/// A 2D drawing surface that accepts polylines
pub trait PlotSurface {
    fn plot(&mut self, points: &[Point2], style: &PlotStyle);
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotItem {
    pub points: Vec<Point2>,
    pub style: PlotStyle,
}

/// A plot surface which records every polyline it is given, in order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlotRecorder {
    items: Vec<PlotItem>,
}

impl PlotRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[PlotItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl PlotSurface for PlotRecorder {
    fn plot(&mut self, points: &[Point2], style: &PlotStyle) {
        self.items.push(PlotItem {
            points: points.to_vec(),
            style: *style,
        });
    }
}
