pub mod d100_workforce_overview;
