//! The per-sample matching cascade.

use crate::candidate::topk::{best_k, Candidate};
use crate::search::{FinderConfig, FoundMatch};
use crate::template::Template;
use crate::trace::{trace_debug, trace_span};
use crate::util::math::safe_recip;
use crate::util::ContourMatchResult;
use std::f64::consts::FRAC_PI_2;

/// Matches samples against a template list using a fixed configuration.
///
/// The finder holds no per-call state; the same instance can serve many
/// threads at once.
#[derive(Clone, Debug, Default)]
pub struct TemplateFinder {
    cfg: FinderConfig,
}

impl TemplateFinder {
    /// Creates a finder after validating the configuration.
    pub fn new(cfg: FinderConfig) -> ContourMatchResult<Self> {
        cfg.validate()?;
        Ok(Self { cfg })
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &FinderConfig {
        &self.cfg
    }

    /// Returns true if `template` is a negative template.
    pub fn is_antipattern(&self, template: &Template) -> bool {
        template.name() == self.cfg.antipattern_name
    }

    /// Finds the best-matching template for `sample`.
    ///
    /// Templates are visited in order; the highest rate wins and ties keep
    /// the earlier template. Returns `None` when nothing passes the cascade
    /// or when the winner is an antipattern.
    pub fn find_template<'a>(
        &self,
        templates: &'a [Template],
        sample: &'a Template,
    ) -> Option<FoundMatch<'a>> {
        let _span = trace_span!("find_template", templates = templates.len()).entered();
        let mut best: Option<Candidate> = None;
        for (index, template) in templates.iter().enumerate() {
            let Some((rate, angle)) = self.evaluate(template, sample) else {
                continue;
            };
            if best.map_or(true, |b| rate > b.rate) {
                best = Some(Candidate { index, rate, angle });
            }
        }

        let best = best?;
        let template = &templates[best.index];
        if self.is_antipattern(template) {
            trace_debug!("antipattern_suppressed", index = best.index, rate = best.rate);
            return None;
        }
        Some(FoundMatch {
            template,
            sample,
            rate: best.rate,
            angle: best.angle,
        })
    }

    /// Returns up to `k` passing templates, best first.
    ///
    /// Uses the same cascade and tie-breaking as [`find_template`]. If the
    /// overall best candidate is an antipattern the result is empty;
    /// antipatterns further down the ranking are left out.
    ///
    /// [`find_template`]: TemplateFinder::find_template
    pub fn rank_templates<'a>(
        &self,
        templates: &'a [Template],
        sample: &'a Template,
        k: usize,
    ) -> Vec<FoundMatch<'a>> {
        let passing = templates
            .iter()
            .enumerate()
            .filter_map(|(index, template)| {
                let (rate, angle) = self.evaluate(template, sample)?;
                Some(Candidate { index, rate, angle })
            })
            .collect();

        let ranked = best_k(passing, k);
        if ranked
            .first()
            .is_some_and(|c| self.is_antipattern(&templates[c.index]))
        {
            return Vec::new();
        }
        ranked
            .into_iter()
            .filter(|c| !self.is_antipattern(&templates[c.index]))
            .map(|c| FoundMatch {
                template: &templates[c.index],
                sample,
                rate: c.rate,
                angle: c.angle,
            })
            .collect()
    }

    /// Runs the rejection cascade for one template; returns `(rate, angle)`
    /// when it passes.
    fn evaluate(&self, template: &Template, sample: &Template) -> Option<(f64, f64)> {
        let cfg = &self.cfg;
        if template.size() != sample.size() {
            return None;
        }
        if template.descriptors().max_deviation(&sample.descriptors())
            > cfg.max_acf_descriptor_deviation
        {
            return None;
        }

        let mut rate = 0.0;
        let mut angle = 0.0;
        if cfg.check_acf {
            rate = template.acf().normalized_scalar_product(sample.acf()).norm();
            if rate < cfg.min_acf {
                return None;
            }
        }
        if cfg.check_icf {
            let inter_corr = template
                .contour()
                .inter_correlation(sample.contour())
                .max_norm_item();
            let k = safe_recip(template.contour_norm() * sample.contour_norm())?;
            rate = inter_corr.norm() * k;
            angle = inter_corr.angle();
            if rate < cfg.min_icf || angle.abs() > cfg.max_rotate_angle {
                return None;
            }
        }
        if template.rotation_limited() && angle.abs() >= FRAC_PI_2 {
            return None;
        }
        Some((rate, angle))
    }
}
