//! Template database.
//!
//! A `TemplateBank` is an ordered list of templates sharing one canonical
//! contour length. Order matters: the matcher breaks rate ties in favour of
//! the earlier template. Samples matched against a bank must be built with
//! the bank's [`template_size`](TemplateBank::template_size).

use crate::geometry::Point;
use crate::template::{Template, DEFAULT_TEMPLATE_SIZE, MIN_TEMPLATE_SIZE};
use crate::util::{ContourMatchError, ContourMatchResult};

/// Ordered collection of templates with a shared canonical size.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemplateBank {
    template_size: usize,
    templates: Vec<Template>,
}

impl Default for TemplateBank {
    fn default() -> Self {
        Self {
            template_size: DEFAULT_TEMPLATE_SIZE,
            templates: Vec::new(),
        }
    }
}

impl TemplateBank {
    /// Creates an empty bank with the given canonical contour length.
    pub fn new(template_size: usize) -> ContourMatchResult<Self> {
        if template_size < MIN_TEMPLATE_SIZE {
            return Err(ContourMatchError::InvalidLength {
                len: template_size,
                context: "template",
            });
        }
        Ok(Self {
            template_size,
            templates: Vec::new(),
        })
    }

    /// Canonical contour length of every template in the bank.
    pub fn template_size(&self) -> usize {
        self.template_size
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Templates in matching order.
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Template> {
        self.templates.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Template> {
        self.templates.get(index)
    }

    /// Index of the first template with the given name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.templates.iter().position(|t| t.name() == name)
    }

    /// Appends a template, which must use the bank's canonical size.
    pub fn push(&mut self, template: Template) -> ContourMatchResult<()> {
        if template.size() != self.template_size {
            return Err(ContourMatchError::InvalidLength {
                len: template.size(),
                context: "template (bank size mismatch)",
            });
        }
        self.templates.push(template);
        Ok(())
    }

    /// Builds a template from polygon points at the bank's size and appends it.
    pub fn add_polygon(
        &mut self,
        name: impl Into<String>,
        points: &[Point],
        source_area: f64,
    ) -> ContourMatchResult<&Template> {
        let template = Template::from_points(name, points, source_area, self.template_size)?;
        self.templates.push(template);
        let last = self.templates.len() - 1;
        Ok(&self.templates[last])
    }

    /// Removes and returns the template at `index`.
    pub fn remove(&mut self, index: usize) -> ContourMatchResult<Template> {
        if index >= self.templates.len() {
            return Err(ContourMatchError::IndexOutOfBounds {
                index,
                len: self.templates.len(),
                context: "template",
            });
        }
        Ok(self.templates.remove(index))
    }

    /// Removes every template with the given name; returns how many were removed.
    pub fn remove_named(&mut self, name: &str) -> usize {
        let before = self.templates.len();
        self.templates.retain(|t| t.name() != name);
        before - self.templates.len()
    }

    pub fn clear(&mut self) {
        self.templates.clear();
    }
}

impl<'a> IntoIterator for &'a TemplateBank {
    type Item = &'a Template;
    type IntoIter = std::slice::Iter<'a, Template>;

    fn into_iter(self) -> Self::IntoIter {
        self.templates.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::TemplateBank;
    use crate::geometry::Point;
    use crate::template::Template;
    use crate::util::ContourMatchError;

    fn triangle() -> Vec<Point> {
        vec![Point::new(0, 0), Point::new(12, 0), Point::new(6, 9)]
    }

    #[test]
    fn add_and_remove_keep_order() {
        let mut bank = TemplateBank::new(12).unwrap();
        bank.add_polygon("a", &triangle(), 54.0).unwrap();
        bank.add_polygon("b", &triangle(), 54.0).unwrap();
        bank.add_polygon("a", &triangle(), 54.0).unwrap();
        assert_eq!(bank.len(), 3);
        assert_eq!(bank.position("b"), Some(1));

        let removed = bank.remove(1).unwrap();
        assert_eq!(removed.name(), "b");
        assert_eq!(bank.remove_named("a"), 2);
        assert!(bank.is_empty());
    }

    #[test]
    fn push_rejects_size_mismatch() {
        let mut bank = TemplateBank::default();
        assert_eq!(bank.template_size(), 30);
        let tpl = Template::from_points("t", &triangle(), 54.0, 12).unwrap();
        assert!(matches!(
            bank.push(tpl).unwrap_err(),
            ContourMatchError::InvalidLength { len: 12, .. }
        ));
    }

    #[test]
    fn remove_out_of_range_is_an_error() {
        let mut bank = TemplateBank::default();
        assert_eq!(
            bank.remove(0).unwrap_err(),
            ContourMatchError::IndexOutOfBounds {
                index: 0,
                len: 0,
                context: "template",
            }
        );
        assert!(TemplateBank::new(1).is_err());
    }
}
