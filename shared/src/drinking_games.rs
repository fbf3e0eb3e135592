use once_cell::sync::Lazy;
use rand::Rng;
use serde::{Serialize, Deserialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AlcoholLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DrinkingGame {
    pub name: String,
    pub description: String,
    pub min_players: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_players: Option<u32>,
    pub difficulty: Difficulty,
    pub alcohol_level: AlcoholLevel,
}

static DRINKING_GAMES: Lazy<Vec<DrinkingGame>> = Lazy::new(|| {
    vec![
        DrinkingGame {
            name: "Ich hab noch nie".to_string(),
            description: "Jede Person sagt etwas, das sie noch nie gemacht hat. \
                          Wer es gemacht hat, trinkt."
                .to_string(),
            min_players: 3,
            max_players: None,
            difficulty: Difficulty::Easy,
            alcohol_level: AlcoholLevel::Low,
        },
        DrinkingGame {
            name: "Kings Cup".to_string(),
            description: "Ein Kartenspiel mit Regeln für jede gezogene Karte. \
                          2 = Du, 3 = Ich, 4 = Boden usw."
                .to_string(),
            min_players: 3,
            max_players: None,
            difficulty: Difficulty::Medium,
            alcohol_level: AlcoholLevel::High,
        },
        DrinkingGame {
            name: "Wasserfall".to_string(),
            description: "Alle trinken gleichzeitig. Du darfst erst aufhören, \
                          wenn die Person links aufhört."
                .to_string(),
            min_players: 4,
            max_players: None,
            difficulty: Difficulty::Medium,
            alcohol_level: AlcoholLevel::High,
        },
    ]
});

/// The full game catalog, in wheel order.
pub fn catalog() -> &'static [DrinkingGame] {
    &DRINKING_GAMES
}

/// Labels for a selection wheel over the catalog.
pub fn wheel_labels() -> Vec<String> {
    DRINKING_GAMES.iter().map(|game| game.name.clone()).collect()
}

/// A uniformly random game playable with the given group size, or `None`
/// when the group is too small for every game.
pub fn random_game_for_players<R: Rng>(players: u32, rng: &mut R) -> Option<&'static DrinkingGame> {
    let eligible: Vec<&DrinkingGame> = DRINKING_GAMES
        .iter()
        .filter(|game| players >= game.min_players)
        .collect();
    if eligible.is_empty() {
        return None;
    }
    Some(eligible[rng.gen_range(0..eligible.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_catalog_is_wheel_ready() {
        assert!(!catalog().is_empty());
        assert_eq!(wheel_labels().len(), catalog().len());
        assert_eq!(wheel_labels()[0], "Ich hab noch nie");
    }

    #[test]
    fn test_random_game_respects_min_players() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            let game = random_game_for_players(3, &mut rng).unwrap();
            assert!(game.min_players <= 3);
        }
    }

    #[test]
    fn test_too_few_players_yields_nothing() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(random_game_for_players(2, &mut rng).is_none());
    }
}
