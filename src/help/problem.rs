use std::fmt;

/// Kinds of trouble a citizen can ask a superhero to help with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Problem {
    /// Armed robbers in the streets.
    BanditInTown,
    /// Someone is stuck in a wrecked car.
    CarAccident,
    /// Someone is drowning.
    FellIntoWater,
    /// A supervillain is on the loose.
    SuperVilain,
}

impl Problem {
    /// Every problem, in declaration order.
    pub const ALL: [Problem; 4] = [
        Problem::BanditInTown,
        Problem::CarAccident,
        Problem::FellIntoWater,
        Problem::SuperVilain,
    ];
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Problem::BanditInTown => "BanditInTown",
            Problem::CarAccident => "CarAccident",
            Problem::FellIntoWater => "FellIntoWater",
            Problem::SuperVilain => "SuperVilain",
        };
        f.write_str(name)
    }
}
