use crate::package_catalog::domain::{Dependency, DependencyGroup};

/// DependsParser service for `Depends`-style relationship fields
///
/// `libc6 (>= 2.34), mawk | gawk` becomes two groups: `[libc6]` and
/// `[mawk, gawk]`. Every alternative is kept. Version constraints and
/// architecture qualifiers are split off the name and stored beside it.
pub struct DependsParser;

impl DependsParser {
    /// Parses a relationship field value into dependency groups
    ///
    /// Empty entries (`a,,b`, trailing commas) are skipped.
    pub fn parse(value: &str) -> Vec<DependencyGroup> {
        value
            .split(',')
            .filter_map(|entry| {
                let alternatives: Vec<Dependency> = entry
                    .split('|')
                    .filter_map(Self::parse_alternative)
                    .collect();
                (!alternatives.is_empty()).then(|| DependencyGroup::new(alternatives))
            })
            .collect()
    }

    /// Parses a single alternative such as `python3:any (>= 3.11~)`
    fn parse_alternative(text: &str) -> Option<Dependency> {
        let text = text.trim();

        let (head, version_constraint) = match text.find('(') {
            Some(open) => {
                let rest = &text[open + 1..];
                let inner = rest.find(')').map_or(rest, |close| &rest[..close]);
                (&text[..open], Self::collapse_whitespace(inner))
            }
            None => (text, None),
        };

        // Architecture restrictions `[...]` and build profiles `<...>` are not names
        let head = head.split(['[', '<']).next().unwrap_or_default();
        let token = head.split_whitespace().next()?;

        let (name, architecture_qualifier) = match token.split_once(':') {
            Some((name, arch)) => (name, Some(arch.to_string()).filter(|a| !a.is_empty())),
            None => (token, None),
        };

        if name.is_empty() {
            return None;
        }

        Some(Dependency::new(
            name.to_string(),
            version_constraint,
            architecture_qualifier,
        ))
    }

    fn collapse_whitespace(text: &str) -> Option<String> {
        let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
        (!collapsed.is_empty()).then_some(collapsed)
    }
}
