// Pokedex - Evolution Chain Flattener
// Turns the recursive species tree from the API into ordered display stages

use serde::Deserialize;

use crate::pokeapi::NamedResource;

/// One node of the evolution tree as the API ships it: a species plus the
/// species it evolves into.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChainLink {
    #[serde(default)]
    pub species: Option<NamedResource>,

    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}

/// Flatten an evolution tree into ordered stages.
///
/// Stage `i` holds the deduplicated, lexicographically sorted species names
/// at breadth-first depth `i`, lower-cased for stable comparison. A node
/// with a missing or blank species name contributes nothing to its stage,
/// but its children are still traversed. A chain with no resolvable names
/// flattens to an empty sequence.
pub fn flatten_chain(root: &ChainLink) -> Vec<Vec<String>> {
    let mut stages = Vec::new();
    let mut level: Vec<&ChainLink> = vec![root];

    while !level.is_empty() {
        let mut names: Vec<String> = level
            .iter()
            .filter_map(|node| node.species.as_ref())
            .map(|species| species.name.trim().to_lowercase())
            .filter(|name| !name.is_empty())
            .collect();

        names.sort();
        names.dedup();

        if !names.is_empty() {
            stages.push(names);
        }

        let next: Vec<&ChainLink> = level
            .iter()
            .flat_map(|node| node.evolves_to.iter())
            .collect();
        level = next;
    }

    stages
}
