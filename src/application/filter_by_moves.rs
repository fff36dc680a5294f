//! Filter a Pokemon list by learnable moves.
//!
//! The naive shape of this query is one learnset lookup per
//! (pokemon, move) pair; over a full dex with four selected moves that
//! is thousands of queries. This use case instead issues a single
//! aggregate query for all pairs and re-derives the per-Pokemon answer
//! from the result, bypassing the per-pair caches because the aggregate
//! is cheaper than assembling it from individual entries.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use crate::domain::errors::DomainResult;
use crate::domain::models::{FilterMode, MoveEntity, MoveLearnMethod, Pokemon};
use crate::domain::ports::MoveRepository;

/// One filter hit: a Pokemon and every way it learns the selected moves.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveFilterMatch {
    pub pokemon: Pokemon,
    pub learn_methods: Vec<MoveLearnMethod>,
}

/// Use case: which of these Pokemon learn the selected moves?
///
/// Only meaningful under a concrete version group; learnability is
/// undefined in national-dex mode.
pub struct FilterPokemonByMovesUseCase {
    move_repository: Arc<dyn MoveRepository>,
}

impl FilterPokemonByMovesUseCase {
    pub fn new(move_repository: Arc<dyn MoveRepository>) -> Self {
        Self { move_repository }
    }

    /// Filter `pokemon_list`, preserving its order in the result.
    ///
    /// With no selected moves every Pokemon passes with an empty method
    /// list and no query is made. Otherwise exactly one aggregate query
    /// runs; repository failures propagate unchanged. Under
    /// [`FilterMode::And`] a Pokemon passes iff it learns every selected
    /// move, under [`FilterMode::Or`] iff it learns at least one; either
    /// way its full method list is returned. Pokemon absent from the
    /// aggregate result learn nothing and never pass.
    pub async fn execute(
        &self,
        pokemon_list: &[Pokemon],
        selected_moves: &[MoveEntity],
        version_group: &str,
        mode: FilterMode,
    ) -> DomainResult<Vec<MoveFilterMatch>> {
        if selected_moves.is_empty() {
            return Ok(pokemon_list
                .iter()
                .map(|pokemon| MoveFilterMatch {
                    pokemon: pokemon.clone(),
                    learn_methods: Vec::new(),
                })
                .collect());
        }

        let pokemon_ids: Vec<u32> = pokemon_list.iter().map(|p| p.id).collect();
        let move_ids: Vec<u32> = selected_moves.iter().map(|m| m.id).collect();

        debug!(
            subjects = pokemon_ids.len(),
            moves = move_ids.len(),
            version_group,
            "bulk learn method query"
        );
        let bulk = self
            .move_repository
            .fetch_bulk_learn_methods(&pokemon_ids, &move_ids, version_group)
            .await?;

        let selected_ids: HashSet<u32> = move_ids.iter().copied().collect();
        let mut results = Vec::new();

        for pokemon in pokemon_list {
            let Some(learn_methods) = bulk.get(&pokemon.id) else {
                continue;
            };

            let learned_ids: HashSet<u32> = learn_methods.iter().map(|lm| lm.mv.id).collect();
            let passes = match mode {
                FilterMode::And => selected_ids.is_subset(&learned_ids),
                FilterMode::Or => !learned_ids.is_empty(),
            };

            if passes {
                results.push(MoveFilterMatch {
                    pokemon: pokemon.clone(),
                    learn_methods: learn_methods.clone(),
                });
            }
        }

        Ok(results)
    }
}
