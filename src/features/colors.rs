//! Renderer-ready color assignments for each target type.

use crate::color::Rgba;
use crate::scale::{ColorScale, Scale};

/// Color used for every instance when there is no target.
pub const DEFAULT_SINGLE_COLOR: Rgba = Rgba::BLUE;

/// Insertion-ordered mapping from class label to color.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClassColors {
    entries: Vec<(String, Rgba)>,
}

impl ClassColors {
    /// Pair classes with colors position by position.
    ///
    /// A repeated class keeps its first position and takes the later color.
    #[must_use]
    pub fn zip<S: AsRef<str>>(classes: &[S], colors: &[Rgba]) -> Self {
        debug_assert_eq!(classes.len(), colors.len());

        let mut map = Self::default();
        for (class, &color) in classes.iter().zip(colors) {
            map.insert(class.as_ref(), color);
        }
        map
    }

    fn insert(&mut self, class: &str, color: Rgba) {
        match self.entries.iter_mut().find(|(c, _)| c == class) {
            Some((_, existing)) => *existing = color,
            None => self.entries.push((class.to_string(), color)),
        }
    }

    /// Color of a class.
    #[must_use]
    pub fn get(&self, class: &str) -> Option<Rgba> {
        self.entries.iter().find(|(c, _)| c == class).map(|&(_, color)| color)
    }

    /// Color at a position in class order.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<Rgba> {
        self.entries.get(index).map(|&(_, color)| color)
    }

    /// Class labels in order.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(c, _)| c.as_str())
    }

    /// `(class, color)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Rgba)> {
        self.entries.iter().map(|(c, color)| (c.as_str(), *color))
    }

    /// Number of classes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no classes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Color assignment produced by a fit.
#[derive(Debug, Clone, PartialEq)]
pub enum TargetColors {
    /// One color for every instance.
    Single(Rgba),
    /// One color per class.
    Discrete(ClassColors),
    /// Colors from a continuous scale over the target range.
    Continuous(ColorScale),
}

impl TargetColors {
    /// The single color, if this is a single-color assignment.
    #[must_use]
    pub fn as_single(&self) -> Option<Rgba> {
        match self {
            TargetColors::Single(color) => Some(*color),
            _ => None,
        }
    }

    /// The class mapping, if this is a discrete assignment.
    #[must_use]
    pub fn as_discrete(&self) -> Option<&ClassColors> {
        match self {
            TargetColors::Discrete(map) => Some(map),
            _ => None,
        }
    }

    /// The color scale, if this is a continuous assignment.
    #[must_use]
    pub fn as_continuous(&self) -> Option<&ColorScale> {
        match self {
            TargetColors::Continuous(scale) => Some(scale),
            _ => None,
        }
    }

    /// Color for a numeric target value (continuous) or the single color.
    #[must_use]
    pub fn for_value(&self, value: f32) -> Option<Rgba> {
        match self {
            TargetColors::Single(color) => Some(*color),
            TargetColors::Continuous(scale) => Some(scale.scale(value)),
            TargetColors::Discrete(_) => None,
        }
    }
}
