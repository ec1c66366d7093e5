pub mod text_piece;
