use std::convert::Infallible;
use std::str::FromStr;

const DELIMITER: char = ';';

/// List of items, each one followed by a `;` delimiter.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TerminatedList(Vec<String>);

impl TerminatedList {
    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl FromStr for TerminatedList {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut items: Vec<String> = s.split(DELIMITER).map(String::from).collect();
        // Always dropped, even when the input lacks the trailing delimiter.
        items.pop();
        Ok(Self(items))
    }
}
