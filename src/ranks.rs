//! Rank Vocabulary
//!
//! Ordered PM rank labels, lowest to highest. Feeds the crew rank selects
//! and the initial rank defaults; nothing here is validated by the core.

pub const RANKS: [&str; 10] = [
    "Soldado 2ª Classe PM",
    "Soldado 1ª Classe PM",
    "Cabo PM",
    "3º Sargento PM",
    "2º Sargento PM",
    "1º Sargento PM",
    "Subtenente PM",
    "2º Tenente PM",
    "1º Tenente PM",
    "Capitão PM",
];
