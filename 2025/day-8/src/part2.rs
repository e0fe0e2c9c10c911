use miette::*;

use crate::cluster::cluster_until_single;
use crate::point::parse_points;

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let points = parse_points(input);
    let result = cluster_until_single(&points)?;
    Ok(result.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::fixtures::EXAMPLE;

    #[test]
    fn it_works() -> Result<()> {
        assert_eq!("25272", process(EXAMPLE)?);
        Ok(())
    }

    #[test]
    fn malformed_lines_are_ignored() -> Result<()> {
        let input = format!("oops\n\n{EXAMPLE}\n1,2\n");
        assert_eq!("25272", process(&input)?);
        Ok(())
    }

    #[test]
    fn too_few_points() -> Result<()> {
        assert_eq!("0", process("")?);
        assert_eq!("0", process("3,4,5")?);
        Ok(())
    }
}
