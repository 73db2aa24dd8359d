//! Positional and color scales
//!
//! Band scales split a pixel range into equal, padded bands, one per
//! distinct domain value, in domain order. Inner and outer padding are the
//! same fraction of the step and the bands are centered in the range.

use crate::canvas::Canvas;
use crate::models::{Dataset, ImplementationStatus, Level};
use crate::theme::{self, Rgb};

#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    domain: Vec<String>,
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    /// Build a scale over `domain`; repeated values keep their first position
    pub fn new<I, S>(domain: I, range: (f64, f64), padding: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = Vec::new();
        for name in domain {
            let name = name.into();
            if !names.contains(&name) {
                names.push(name);
            }
        }

        let (r0, r1) = range;
        let n = names.len() as f64;
        let step = (r1 - r0) / f64::max(1.0, n - padding + padding * 2.0);
        let start = r0 + (r1 - r0 - step * (n - padding)) * 0.5;
        let bandwidth = step * (1.0 - padding);

        Self {
            domain: names,
            start,
            step,
            bandwidth,
        }
    }

    /// Band start for `key`, or None when it is not in the domain
    pub fn position(&self, key: &str) -> Option<f64> {
        self.index_of(key)
            .map(|index| self.start + self.step * index as f64)
    }

    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.domain.iter().position(|name| name == key)
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    pub fn len(&self) -> usize {
        self.domain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
    }
}

/// Ordinal status → color scale over the three fixed statuses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorScale;

impl ColorScale {
    pub fn domain(&self) -> &'static [ImplementationStatus] {
        &ImplementationStatus::ALL
    }

    pub fn color(&self, status: ImplementationStatus) -> Rgb {
        theme::status_color(status)
    }
}

/// Everything the cell and legend renderers position against
#[derive(Debug, Clone, PartialEq)]
pub struct Scales {
    /// Columns: the three levels in fixed order
    pub x: BandScale,
    /// Rows: stakeholders in dataset order
    pub y: BandScale,
    pub color: ColorScale,
}

impl Scales {
    pub fn build(dataset: &Dataset, canvas: &Canvas) -> Self {
        let x = BandScale::new(
            Level::ALL.iter().map(Level::label),
            (0.0, canvas.plot_width()),
            canvas.band_padding,
        );
        let y = BandScale::new(
            dataset.stakeholder_names(),
            (0.0, canvas.plot_height()),
            canvas.band_padding,
        );

        Self {
            x,
            y,
            color: ColorScale,
        }
    }

    /// Top-left corner of the cell for a pair, in plot coordinates
    pub fn origin(&self, stakeholder: &str, level: Level) -> Option<(f64, f64)> {
        Some((self.x.position(level.label())?, self.y.position(stakeholder)?))
    }
}
