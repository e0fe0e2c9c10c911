use chumsky::prelude::*;

use crate::graph::Point;

fn coord<'a>() -> impl Parser<'a, &'a str, i64, extra::Err<Rich<'a, char>>> + Clone {
    one_of("+-")
        .or_not()
        .then(text::digits(10))
        .to_slice()
        .try_map(|s: &str, span| {
            s.parse::<i64>()
                .map_err(|e| Rich::custom(span, format!("invalid coordinate `{s}`: {e}")))
        })
}

fn parser<'a>() -> impl Parser<'a, &'a str, Point, extra::Err<Rich<'a, char>>> {
    coord()
        .then_ignore(just(','))
        .then(coord())
        .then_ignore(just(','))
        .then(coord())
        .then_ignore(end())
        .map(|((x, y), z)| Point::new(x, y, z))
}

/// Reads `x,y,z` lines in order. Blank lines are skipped and lines that are
/// not exactly three integers are dropped.
#[tracing::instrument(skip(input), fields(bytes = input.len()))]
pub fn parse_points(input: &str) -> Vec<Point> {
    let parser = parser();

    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| match parser.parse(line).into_result() {
            Ok(point) => Some(point),
            Err(errors) => {
                tracing::trace!(line, ?errors, "dropping malformed point");
                None
            }
        })
        .collect()
}
