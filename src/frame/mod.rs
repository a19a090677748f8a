//! Per-frame recognition pass.
//!
//! A frame arrives as a list of closed polylines with precomputed area and
//! perimeter. Each polyline is filtered, canonicalized into a sample
//! template, matched against the bank, and the surviving matches are
//! de-duplicated. Every call builds a fresh [`FrameOutput`]; nothing is
//! carried over between frames.

mod filter;

pub use filter::ContourFilter;

use crate::bank::TemplateBank;
use crate::candidate::overlap::{resolve_overlaps, OverlapConfig};
use crate::geometry::{Point, Rect};
use crate::search::{FinderConfig, FoundMatch, TemplateFinder};
use crate::template::Template;
use crate::trace::{trace_debug, trace_event, trace_span};
use crate::util::ContourMatchResult;
#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// A closed polyline delivered by contour extraction.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawContour {
    /// Ordered pixel points; the last point connects back to the first.
    pub points: Vec<Point>,
    /// Enclosed pixel area.
    pub area: f64,
    /// Perimeter length in pixels.
    pub perimeter: f64,
}

impl RawContour {
    pub fn new(points: Vec<Point>, area: f64, perimeter: f64) -> Self {
        Self {
            points,
            area,
            perimeter,
        }
    }
}

/// Settings for a frame pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameConfig {
    pub finder: FinderConfig,
    pub overlap: OverlapConfig,
    pub filter: ContourFilter,
    /// Match samples on the rayon pool (requires the `rayon` feature).
    pub parallel: bool,
    /// Build samples only and skip matching.
    pub only_find_contours: bool,
}

impl FrameConfig {
    pub fn validate(&self) -> ContourMatchResult<()> {
        self.finder.validate()?;
        self.overlap.validate()?;
        self.filter.validate()
    }
}

/// A recognized shape in a frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Detection {
    /// Name of the matched template.
    pub name: String,
    /// Bounding rectangle of the observed contour.
    pub bounding_rect: Rect,
    /// Similarity score in `[0, 1]`.
    pub rate: f64,
    /// Rotation aligning the observed shape to the template, in radians.
    pub angle: f64,
    /// Linear scale of the observed shape relative to the template.
    pub scale: f64,
    /// First point of the observed contour.
    pub start_point: Point,
}

impl Detection {
    fn from_match(found: &FoundMatch<'_>) -> Self {
        Self {
            name: found.template.name().to_owned(),
            bounding_rect: found.sample.source_rect(),
            rate: found.rate,
            angle: found.angle,
            scale: found.scale(),
            start_point: found.sample.start_point(),
        }
    }

    /// Rotation angle in degrees.
    pub fn angle_deg(&self) -> f64 {
        self.angle.to_degrees()
    }
}

/// Result of one frame pass.
#[derive(Clone, Debug, Default)]
pub struct FrameOutput {
    /// Sample templates built from the accepted contours, in input order.
    pub samples: Vec<Template>,
    /// De-duplicated detections, largest bounding rectangle first.
    pub detections: Vec<Detection>,
}

/// Runs the filter → sample → match → de-duplicate pipeline.
#[derive(Clone, Debug, Default)]
pub struct FrameProcessor {
    finder: TemplateFinder,
    cfg: FrameConfig,
}

impl FrameProcessor {
    /// Creates a processor after validating the configuration.
    pub fn new(cfg: FrameConfig) -> ContourMatchResult<Self> {
        cfg.validate()?;
        let finder = TemplateFinder::new(cfg.finder.clone())?;
        Ok(Self { finder, cfg })
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &FrameConfig {
        &self.cfg
    }

    /// Returns the matcher used for each sample.
    pub fn finder(&self) -> &TemplateFinder {
        &self.finder
    }

    /// Processes one frame against `bank`.
    ///
    /// Contours rejected by the filter or too degenerate to canonicalize are
    /// skipped; they never fail the frame. An empty bank yields no
    /// detections.
    pub fn process_frame(&self, bank: &TemplateBank, contours: &[RawContour]) -> FrameOutput {
        let _span = trace_span!(
            "process_frame",
            contours = contours.len(),
            templates = bank.len()
        )
        .entered();

        let samples = self.build_samples(bank.template_size(), contours);
        trace_event!("samples_built", count = samples.len());
        if self.cfg.only_find_contours {
            return FrameOutput {
                samples,
                detections: Vec::new(),
            };
        }

        let found = self.match_samples(bank.templates(), &samples);
        trace_event!("samples_matched", count = found.len());
        let kept = resolve_overlaps(found, &self.cfg.overlap);
        trace_event!("detections_kept", count = kept.len());

        let detections = kept.iter().map(Detection::from_match).collect();
        FrameOutput {
            samples,
            detections,
        }
    }

    /// Builds one sample per accepted contour, preserving input order.
    pub fn build_samples(&self, template_size: usize, contours: &[RawContour]) -> Vec<Template> {
        #[cfg(feature = "rayon")]
        if self.cfg.parallel {
            return contours
                .par_iter()
                .enumerate()
                .filter_map(|(idx, raw)| self.build_sample(idx, raw, template_size))
                .collect();
        }

        contours
            .iter()
            .enumerate()
            .filter_map(|(idx, raw)| self.build_sample(idx, raw, template_size))
            .collect()
    }

    fn build_sample(&self, idx: usize, raw: &RawContour, template_size: usize) -> Option<Template> {
        if !self.cfg.filter.accepts(raw) {
            return None;
        }
        match Template::sample(&raw.points, raw.area, template_size) {
            Ok(sample) => Some(sample),
            Err(_err) => {
                trace_debug!("contour_skipped", index = idx, points = raw.points.len());
                None
            }
        }
    }

    /// Matches every sample; each task yields its own optional result and the
    /// results are joined in sample order.
    fn match_samples<'a>(
        &self,
        templates: &'a [Template],
        samples: &'a [Template],
    ) -> Vec<FoundMatch<'a>> {
        #[cfg(feature = "rayon")]
        if self.cfg.parallel {
            return samples
                .par_iter()
                .filter_map(|sample| self.finder.find_template(templates, sample))
                .collect();
        }

        samples
            .iter()
            .filter_map(|sample| self.finder.find_template(templates, sample))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{FrameConfig, FrameProcessor, RawContour};
    use crate::bank::TemplateBank;
    use crate::geometry::{polygon_area, polygon_perimeter, Point};
    use crate::search::FinderConfig;

    fn raw(points: Vec<Point>) -> RawContour {
        let area = polygon_area(&points);
        let perimeter = polygon_perimeter(&points);
        RawContour::new(points, area, perimeter)
    }

    fn tee(dx: i32, dy: i32) -> Vec<Point> {
        [(0, 0), (30, 0), (30, 10), (20, 10), (20, 40), (10, 40), (10, 10), (0, 10)]
            .iter()
            .map(|&(x, y)| Point::new(x + dx, y + dy))
            .collect()
    }

    #[test]
    fn empty_bank_yields_samples_but_no_detections() {
        let processor = FrameProcessor::default();
        let out = processor.process_frame(&TemplateBank::default(), &[raw(tee(0, 0))]);
        assert_eq!(out.samples.len(), 1);
        assert!(out.detections.is_empty());
    }

    #[test]
    fn degenerate_contours_are_skipped() {
        let processor = FrameProcessor::new(FrameConfig {
            filter: crate::frame::ContourFilter {
                enabled: false,
                ..Default::default()
            },
            ..FrameConfig::default()
        })
        .unwrap();
        let contours = vec![
            RawContour::new(vec![Point::new(1, 1)], 0.0, 0.0),
            RawContour::new(vec![Point::new(2, 2); 5], 0.0, 0.0),
            raw(tee(0, 0)),
        ];
        let out = processor.process_frame(&TemplateBank::default(), &contours);
        assert_eq!(out.samples.len(), 1);
    }

    #[test]
    fn translated_copy_is_detected() {
        let mut bank = TemplateBank::default();
        let tpl = tee(0, 0);
        bank.add_polygon("tee", &tpl, polygon_area(&tpl)).unwrap();

        let processor = FrameProcessor::default();
        let out = processor.process_frame(&bank, &[raw(tee(200, 120))]);
        assert_eq!(out.detections.len(), 1);
        let det = &out.detections[0];
        assert_eq!(det.name, "tee");
        assert!((det.rate - 1.0).abs() < 1e-9);
        assert!(det.angle.abs() < 1e-9);
        assert!((det.scale - 1.0).abs() < 1e-12);
        assert_eq!(det.bounding_rect.x, 200);
        assert_eq!(det.start_point, Point::new(200, 120));
    }

    #[test]
    fn only_find_contours_skips_matching() {
        let mut bank = TemplateBank::default();
        let tpl = tee(0, 0);
        bank.add_polygon("tee", &tpl, polygon_area(&tpl)).unwrap();
        let processor = FrameProcessor::new(FrameConfig {
            only_find_contours: true,
            ..FrameConfig::default()
        })
        .unwrap();
        let out = processor.process_frame(&bank, &[raw(tee(5, 5))]);
        assert_eq!(out.samples.len(), 1);
        assert!(out.detections.is_empty());
    }

    #[test]
    fn invalid_config_is_rejected_up_front() {
        let cfg = FrameConfig {
            finder: FinderConfig {
                min_acf: 2.0,
                ..FinderConfig::default()
            },
            ..FrameConfig::default()
        };
        assert!(FrameProcessor::new(cfg).is_err());
    }
}
