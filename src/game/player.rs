use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Player number as shown to humans (1 or 2)
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Symbol used in the textual board dump
    pub fn symbol(self) -> char {
        match self {
            Player::One => 'x',
            Player::Two => 'o',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(Player::One.other(), Player::Two);
        assert_eq!(Player::Two.other(), Player::One);
    }

    #[test]
    fn test_player_number() {
        assert_eq!(Player::One.number(), 1);
        assert_eq!(Player::Two.number(), 2);
    }

    #[test]
    fn test_player_display() {
        assert_eq!(Player::One.to_string(), "Player 1");
        assert_eq!(Player::Two.symbol(), 'o');
    }
}
