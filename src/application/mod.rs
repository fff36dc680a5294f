//! Use case layer exposed to the presentation side.

pub mod filter_by_moves;
pub mod pokedex;

pub use filter_by_moves::{FilterPokemonByMovesUseCase, MoveFilterMatch};
pub use pokedex::PokedexService;
