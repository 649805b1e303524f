use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Segment {
    Fixed(String),
    Param { name: String },
}

impl Segment {
    #[inline]
    pub fn is_fixed(&self) -> bool {
        matches!(self, Segment::Fixed(_))
    }

    /// Whether this segment accepts `value` from a location path.
    #[inline]
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            Segment::Fixed(lit) => lit == value,
            Segment::Param { .. } => !value.is_empty(),
        }
    }
}

/// A compiled route definition.
///
/// The definition string is the pattern's identity; `segments` holds one
/// entry per non-empty `/`-delimited token, in definition order.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePattern {
    definition: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    pub(crate) fn new(definition: String, segments: Vec<Segment>) -> Self {
        Self {
            definition,
            segments,
        }
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn fixed_count(&self) -> usize {
        self.segments.iter().filter(|s| s.is_fixed()).count()
    }

    pub fn param_count(&self) -> usize {
        self.segments.len() - self.fixed_count()
    }

    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param { name } => Some(name.as_str()),
            Segment::Fixed(_) => None,
        })
    }

    /// Two patterns have the same shape when they accept exactly the same
    /// paths, regardless of parameter names.
    pub fn same_shape(&self, other: &RoutePattern) -> bool {
        if self.segments.len() != other.segments.len() {
            return false;
        }
        for (a, b) in self.segments.iter().zip(other.segments.iter()) {
            match (a, b) {
                (Segment::Fixed(la), Segment::Fixed(lb)) => {
                    if la != lb {
                        return false;
                    }
                }
                (Segment::Param { .. }, Segment::Param { .. }) => {}
                _ => {
                    return false;
                }
            }
        }
        true
    }
}

impl PartialEq for RoutePattern {
    fn eq(&self, other: &Self) -> bool {
        self.segments == other.segments
    }
}

impl Eq for RoutePattern {}
