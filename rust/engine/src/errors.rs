use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error(
        "Invalid configuration: {num_players} player(s) with {dice_per_player} dice each (both must be >= 1)"
    )]
    InvalidConfiguration {
        num_players: u32,
        dice_per_player: u32,
    },
    #[error("Invalid table: {own_dice} own dice out of {total_dice} in play")]
    InvalidTable { own_dice: u32, total_dice: u32 },
    #[error("Invalid bid quantity: {quantity} (must be >= 1)")]
    InvalidArgument { quantity: u32 },
}
