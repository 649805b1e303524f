use super::{PatternError, PatternResult, RoutePattern, Segment};

pub const DEFAULT_PARAM_MARKER: char = ':';

#[tracing::instrument(level = "trace", fields(definition = %definition))]
pub fn compile_pattern(definition: &str, marker: char) -> PatternResult<RoutePattern> {
    let mut segments = Vec::new();

    for token in definition.split('/').filter(|t| !t.is_empty()) {
        let segment = parse_segment(token, marker)?;

        if let Segment::Param { name } = &segment
            && segments
                .iter()
                .any(|s| matches!(s, Segment::Param { name: n } if n == name))
        {
            return Err(PatternError::DuplicateParameterName {
                name: name.clone(),
                definition: definition.to_string(),
            });
        }

        segments.push(segment);
    }

    Ok(RoutePattern::new(definition.to_string(), segments))
}

fn parse_segment(seg: &str, marker: char) -> PatternResult<Segment> {
    if let Some(name) = seg.strip_prefix(marker) {
        if name.is_empty() {
            return Err(PatternError::ParameterNameEmpty {
                segment: seg.to_string(),
            });
        }

        if let Some(invalid) = name.chars().find(|c| !c.is_ascii_alphanumeric()) {
            if invalid == marker {
                return Err(PatternError::MixedParameterLiteralSyntax {
                    segment: seg.to_string(),
                });
            }
            return Err(PatternError::ParameterInvalidCharacter {
                segment: seg.to_string(),
                name: name.to_string(),
                invalid,
            });
        }

        return Ok(Segment::Param {
            name: name.to_string(),
        });
    }

    if seg.contains(marker) {
        return Err(PatternError::MixedParameterLiteralSyntax {
            segment: seg.to_string(),
        });
    }

    Ok(Segment::Fixed(seg.to_string()))
}
